// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Site footer: brand blurb, contact details, and social links.

use chrono::Datelike;
use dioxus::prelude::*;

use folio_i18n::Localizer;
use folio_store::ContentStore;

const SOCIAL_LINKS: &[(&str, &str)] = &[("in", "LinkedIn"), ("ig", "Instagram"), ("\u{1F310}", "Portfolio")];

#[component]
pub fn Footer() -> Element {
    let content = use_context::<Signal<ContentStore>>();
    let locale = use_context::<Signal<Localizer>>();

    let info = content.read().personal_info().clone();
    let excerpt = info.bio_excerpt(120);
    let loc = locale.read();
    let year = chrono::Local::now().year();

    rsx! {
        footer { style: "background: #9c7860; color: white;",
            div { style: "max-width: 1200px; margin: 0 auto; padding: 48px 24px; display: grid; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); gap: 32px;",
                div {
                    div { style: "display: flex; align-items: center; gap: 12px;",
                        div { style: "width: 48px; height: 48px; background: white; border-radius: 8px; padding: 8px;",
                            img { src: "{info.logo_image}", alt: "Logo", style: "width: 100%; height: 100%; object-fit: contain;" }
                        }
                        div {
                            h3 { style: "margin: 0; font-size: 20px;", "Eng.EmadAlddine" }
                            p { style: "margin: 0; color: #d9cab1;", {loc.translate("hero.title")} }
                        }
                    }
                    p { style: "color: #d9cab1; font-size: 14px; line-height: 1.6;", "{excerpt}" }
                }

                div {
                    h4 { style: "font-size: 18px; margin-top: 0;", {loc.translate("contact.info")} }
                    ContactLine { icon: "\u{260E}", text: info.phone.clone() }
                    ContactLine { icon: "\u{2709}", text: info.email.clone() }
                    ContactLine { icon: "\u{1F4CD}", text: info.location.clone() }
                }

                div {
                    h4 { style: "font-size: 18px; margin-top: 0;", "Follow Me" }
                    div { style: "display: flex; gap: 16px;",
                        for (icon, label) in SOCIAL_LINKS.iter().copied() {
                            a {
                                key: "{label}",
                                href: "#",
                                aria_label: label,
                                style: "width: 40px; height: 40px; background: #8f1819; border-radius: 8px; display: flex; align-items: center; justify-content: center; color: white; text-decoration: none;",
                                "{icon}"
                            }
                        }
                    }
                }
            }
            div { style: "border-top: 1px solid #a76552; padding: 24px; text-align: center; color: #d9cab1; font-size: 14px;",
                "\u{00A9} {year} EmadAlddine Ismael. All rights reserved."
            }
        }
    }
}

#[component]
fn ContactLine(icon: &'static str, text: String) -> Element {
    rsx! {
        div { style: "display: flex; align-items: center; gap: 12px; margin-bottom: 12px;",
            span { style: "color: #d9cab1;", "{icon}" }
            span { style: "color: #d9cab1; font-size: 14px;", "{text}" }
        }
    }
}
