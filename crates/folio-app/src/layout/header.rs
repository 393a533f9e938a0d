// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Site header: logo, navigation, and the language switch.

use dioxus::prelude::*;

use folio_i18n::Localizer;
use folio_store::ContentStore;

use crate::Route;

const ACTIVE_LINK: &str = "color: #8f1819; border-bottom: 2px solid #8f1819; padding-bottom: 4px; font-size: 14px; font-weight: 500; text-decoration: none;";
const IDLE_LINK: &str = "color: #9c7860; font-size: 14px; font-weight: 500; text-decoration: none;";
const SWITCH_BUTTON: &str = "padding: 6px 12px; border-radius: 6px; border: 1px solid #d9cab1; background: white; color: #9c7860; font-size: 14px;";

#[component]
pub fn Header() -> Element {
    let content = use_context::<Signal<ContentStore>>();
    let mut locale = use_context::<Signal<Localizer>>();
    let current = use_route::<Route>();
    let mut menu_open = use_signal(|| false);

    let logo = content.read().personal_info().logo_image.clone();
    let loc = locale.read();
    let subtitle = loc.translate("hero.title");
    let switch_label = loc.language().toggle_label();
    let links: Vec<(Route, &str, &str)> = Route::nav_items()
        .into_iter()
        .map(|(route, key)| {
            let style = if route == current { ACTIVE_LINK } else { IDLE_LINK };
            (route, loc.translate(key), style)
        })
        .collect();

    rsx! {
        header { style: "background: white; border-bottom: 1px solid #f3f4f6; position: sticky; top: 0; z-index: 50;",
            div { style: "max-width: 1200px; margin: 0 auto; padding: 0 24px; display: flex; justify-content: space-between; align-items: center; height: 64px;",
                Link {
                    to: Route::Home {},
                    style: "display: flex; align-items: center; gap: 12px; text-decoration: none;",
                    div { style: "width: 40px; height: 40px; background: #d9cab1; border-radius: 8px; padding: 4px;",
                        img { src: "{logo}", alt: "Logo", style: "width: 100%; height: 100%; object-fit: contain;" }
                    }
                    div {
                        h1 { style: "font-size: 20px; font-weight: bold; color: #8f1819; margin: 0;", "Eng.EmadAlddine" }
                        p { style: "font-size: 14px; color: #9c7860; margin: 0;", "{subtitle}" }
                    }
                }

                nav { style: "display: flex; align-items: center; gap: 32px;",
                    for (route, label, style) in links.clone() {
                        Link { key: "{label}", style: style, to: route, "{label}" }
                    }
                }

                div { style: "display: flex; align-items: center; gap: 16px;",
                    button {
                        style: SWITCH_BUTTON,
                        onclick: move |_| locale.write().toggle(),
                        "\u{1F310} {switch_label}"
                    }
                    button {
                        style: "padding: 6px 10px; border: none; background: transparent; font-size: 18px;",
                        onclick: move |_| menu_open.toggle(),
                        if menu_open() { "\u{2715}" } else { "\u{2630}" }
                    }
                }
            }

            if menu_open() {
                nav { style: "display: flex; flex-direction: column; gap: 16px; padding: 16px 24px; border-top: 1px solid #f3f4f6;",
                    for (route, label, style) in links {
                        Link {
                            key: "mobile-{label}",
                            style: style,
                            to: route,
                            onclick: move |_| menu_open.set(false),
                            "{label}"
                        }
                    }
                    button {
                        style: "{SWITCH_BUTTON} width: 100%;",
                        onclick: move |_| {
                            locale.write().toggle();
                            menu_open.set(false);
                        },
                        "\u{1F310} {switch_label}"
                    }
                }
            }
        }
    }
}
