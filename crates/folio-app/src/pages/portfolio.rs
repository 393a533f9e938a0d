// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Portfolio page: category filter, project grid, and lightbox viewer.

use dioxus::prelude::*;

use folio_core::Project;
use folio_core::gallery::{CategoryFilter, Lightbox, filter_projects};
use folio_i18n::Localizer;
use folio_store::ContentStore;

const ACTIVE_FILTER: &str = "padding: 8px 20px; border-radius: 999px; border: 1px solid #8f1819; background: #8f1819; color: white;";
const IDLE_FILTER: &str = "padding: 8px 20px; border-radius: 999px; border: 1px solid #8f1819; background: transparent; color: #8f1819;";

#[component]
pub fn Portfolio() -> Element {
    let content = use_context::<Signal<ContentStore>>();
    let locale = use_context::<Signal<Localizer>>();
    let mut selected = use_signal(CategoryFilter::default);
    let mut lightbox = use_signal(Lightbox::default);

    let store = content.read();
    let visible: Vec<Project> = filter_projects(store.projects(), selected())
        .into_iter()
        .cloned()
        .collect();
    let loc = locale.read();
    let filters: Vec<(CategoryFilter, &str, &str)> = CategoryFilter::bar()
        .into_iter()
        .map(|filter| {
            let style = if filter == selected() { ACTIVE_FILTER } else { IDLE_FILTER };
            (filter, loc.translate(filter.label_key()), style)
        })
        .collect();

    rsx! {
        div {
            section { style: "background: linear-gradient(135deg, #f5f0e8, #ffffff); padding: 64px 24px; text-align: center;",
                h1 { style: "font-size: 40px; color: #8f1819; margin: 0 0 16px;", {loc.translate("portfolio.title")} }
                p { style: "font-size: 18px; color: #666; max-width: 640px; margin: 0 auto;",
                    "Explore my collection of creative projects across various design disciplines"
                }
            }

            // Filter bar
            section { style: "display: flex; flex-wrap: wrap; justify-content: center; gap: 12px; padding: 32px 24px;",
                for (filter, label, style) in filters {
                    button {
                        key: "{label}",
                        style: style,
                        onclick: move |_| selected.set(filter),
                        "{label}"
                    }
                }
            }

            // Grid
            section { style: "max-width: 1200px; margin: 0 auto; padding: 0 24px 64px;",
                if visible.is_empty() {
                    p { style: "color: #888; text-align: center; padding: 48px 0;", "No projects found in this category." }
                }
                div { style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); gap: 32px;",
                    for project in visible {
                        ProjectCard {
                            key: "{project.id}",
                            category_label: loc.translate(project.category.label_key()).to_string(),
                            project: project.clone(),
                            on_open: move |p: Project| lightbox.write().open(p, 0),
                        }
                    }
                }
            }

            if lightbox.read().is_open() {
                LightboxView {
                    lightbox: lightbox,
                    close_label: loc.translate("common.close").to_string(),
                }
            }
        }
    }
}

#[component]
fn ProjectCard(project: Project, category_label: String, on_open: EventHandler<Project>) -> Element {
    let cover = project.cover_image().unwrap_or_default().to_string();
    let images = project.image_count_label();

    rsx! {
        div {
            style: "background: white; border-radius: 12px; overflow: hidden; box-shadow: 0 4px 12px rgba(0,0,0,0.08); cursor: pointer;",
            onclick: {
                let project = project.clone();
                move |_| on_open.call(project.clone())
            },
            if !cover.is_empty() {
                img { src: "{cover}", alt: "{project.title}", style: "width: 100%; height: 240px; object-fit: cover;" }
            }
            div { style: "padding: 24px;",
                div { style: "display: flex; gap: 8px; margin-bottom: 8px;",
                    span { style: "padding: 4px 12px; background: #f5f0e8; color: #9c7860; border-radius: 999px; font-size: 12px;",
                        "{category_label}"
                    }
                    if project.featured {
                        span { style: "padding: 4px 12px; background: #8f1819; color: white; border-radius: 999px; font-size: 12px;",
                            "Featured"
                        }
                    }
                }
                h3 { style: "font-size: 20px; color: #8f1819; margin: 0 0 8px;", "{project.title}" }
                p { style: "color: #666; font-size: 14px; line-height: 1.5;", "{project.description}" }
                span { style: "color: #9c7860; font-size: 12px;", "{images}" }
            }
        }
    }
}

#[component]
fn LightboxView(lightbox: Signal<Lightbox>, close_label: String) -> Element {
    let mut lightbox = lightbox;
    let view = lightbox.read().clone();
    let Some(project) = view.project() else {
        return rsx! {};
    };
    let image = view.current_image().unwrap_or_default().to_string();
    let counter = view.counter();

    rsx! {
        div { style: "position: fixed; inset: 0; background: rgba(0,0,0,0.9); display: flex; align-items: center; justify-content: center; z-index: 100; padding: 16px;",
            button {
                style: "position: absolute; top: 16px; right: 16px; padding: 8px 12px; border: none; border-radius: 8px; background: rgba(255,255,255,0.15); color: white;",
                aria_label: "{close_label}",
                onclick: move |_| lightbox.write().close(),
                "\u{2715}"
            }
            if view.shows_navigation() {
                button {
                    style: "position: absolute; left: 16px; top: 50%; padding: 8px 12px; border: none; border-radius: 8px; background: rgba(255,255,255,0.15); color: white;",
                    disabled: !view.has_previous(),
                    onclick: move |_| lightbox.write().previous(),
                    "\u{2039}"
                }
                button {
                    style: "position: absolute; right: 16px; top: 50%; padding: 8px 12px; border: none; border-radius: 8px; background: rgba(255,255,255,0.15); color: white;",
                    disabled: !view.has_next(),
                    onclick: move |_| lightbox.write().next(),
                    "\u{203A}"
                }
            }
            div { style: "max-width: 960px; width: 100%;",
                if !image.is_empty() {
                    img { src: "{image}", alt: "{project.title}", style: "width: 100%; max-height: 70vh; object-fit: contain; border-radius: 8px;" }
                }
                div { style: "background: white; border-radius: 8px; padding: 24px; margin-top: 16px;",
                    h3 { style: "font-size: 24px; color: #8f1819; margin: 0 0 8px;", "{project.title}" }
                    p { style: "color: #666;", "{project.description}" }
                    if let Some(counter) = counter {
                        p { style: "color: #9c7860; font-size: 14px;", "{counter}" }
                    }
                }
            }
        }
    }
}
