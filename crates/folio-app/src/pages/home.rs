// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Home page: hero, featured work strip, and services overview.

use dioxus::prelude::*;

use folio_core::Project;
use folio_core::catalog::{HOME_SERVICES, STATS};
use folio_core::gallery::featured_projects;
use folio_i18n::Localizer;
use folio_store::ContentStore;

use crate::Route;
use crate::services::app_services::AppServices;

const PRIMARY_BUTTON: &str = "padding: 12px 24px; border-radius: 8px; background: #8f1819; color: white; text-decoration: none; font-weight: 500;";
const OUTLINE_BUTTON: &str = "padding: 12px 24px; border-radius: 8px; border: 1px solid #8f1819; color: #8f1819; text-decoration: none; font-weight: 500;";

#[component]
pub fn Home() -> Element {
    let content = use_context::<Signal<ContentStore>>();
    let locale = use_context::<Signal<Localizer>>();
    let svc = use_context::<AppServices>();
    let limit = svc.config().featured_limit;

    let store = content.read();
    let info = store.personal_info();
    let featured: Vec<Project> = featured_projects(store.projects(), limit)
        .into_iter()
        .cloned()
        .collect();
    let loc = locale.read();
    let arrow = if loc.is_rtl() { "\u{2190}" } else { "\u{2192}" };
    let cta = loc.translate("hero.cta");

    rsx! {
        div {
            // Hero
            section { style: "background: linear-gradient(135deg, #f5f0e8, #ffffff); padding: 80px 24px;",
                div { style: "max-width: 1200px; margin: 0 auto; display: grid; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); gap: 48px; align-items: center;",
                    div {
                        h1 { style: "font-size: 48px; color: #8f1819; margin: 0 0 8px;", "{info.name}" }
                        h2 { style: "font-size: 24px; color: #9c7860; margin: 0 0 16px;", {loc.translate("hero.title")} }
                        p { style: "font-size: 18px; color: #666; line-height: 1.6;", {loc.translate("hero.subtitle")} }

                        div { style: "display: flex; gap: 16px; margin: 32px 0; flex-wrap: wrap;",
                            Link { to: Route::Portfolio {}, style: PRIMARY_BUTTON,
                                "{cta} {arrow}"
                            }
                            Link { to: Route::Contact {}, style: OUTLINE_BUTTON,
                                {loc.translate("hero.contact")}
                            }
                        }

                        div { style: "display: flex; gap: 32px;",
                            for (value, label) in STATS.iter().copied() {
                                div { key: "{label}",
                                    div { style: "font-size: 28px; font-weight: bold; color: #8f1819;", "{value}" }
                                    div { style: "font-size: 14px; color: #9c7860;", "{label}" }
                                }
                            }
                        }
                    }
                    div { style: "display: flex; justify-content: center;",
                        img {
                            src: "{info.profile_image}",
                            alt: "{info.name}",
                            style: "width: 320px; height: 320px; object-fit: cover; border-radius: 24px; box-shadow: 0 20px 40px rgba(0,0,0,0.15);",
                        }
                    }
                }
            }

            // Featured work
            section { style: "max-width: 1200px; margin: 0 auto; padding: 64px 24px;",
                div { style: "text-align: center; margin-bottom: 48px;",
                    h3 { style: "font-size: 32px; color: #8f1819; margin: 0;", "Featured Work" }
                    p { style: "color: #666;", "A selection of my best projects showcasing creativity and attention to detail" }
                }
                if featured.is_empty() {
                    p { style: "color: #888; text-align: center;", "No featured projects yet." }
                }
                div { style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); gap: 32px;",
                    for project in featured {
                        FeaturedCard { key: "{project.id}", project: project.clone(), category_label: loc.translate(project.category.label_key()).to_string() }
                    }
                }
                div { style: "text-align: center; margin-top: 48px;",
                    Link { to: Route::Portfolio {}, style: OUTLINE_BUTTON, "View All Projects {arrow}" }
                }
            }

            // Services overview
            section { style: "background: #f9f7f4; padding: 64px 24px;",
                div { style: "max-width: 1200px; margin: 0 auto;",
                    div { style: "text-align: center; margin-bottom: 48px;",
                        h3 { style: "font-size: 32px; color: #8f1819; margin: 0;", {loc.translate("services.title")} }
                        p { style: "color: #666;", "Professional design services to elevate your brand" }
                    }
                    div { style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 24px;",
                        for (title, description, icon) in HOME_SERVICES.iter().copied() {
                            div {
                                key: "{icon}",
                                style: "background: white; border-radius: 12px; padding: 24px; text-align: center; box-shadow: 0 2px 8px rgba(0,0,0,0.05);",
                                div { style: "font-size: 40px; margin-bottom: 16px;", "{icon}" }
                                h4 { style: "color: #8f1819; margin: 0 0 8px;", {title.resolve(|k| loc.translate(k))} }
                                p { style: "color: #666; font-size: 14px;", "{description}" }
                            }
                        }
                    }
                }
            }

            // Call to action
            section { style: "background: #8f1819; color: white; padding: 64px 24px; text-align: center;",
                h3 { style: "font-size: 32px; margin: 0 0 16px;", "Ready to Start Your Project?" }
                p { style: "color: #d9cab1; margin-bottom: 32px;", "Let's work together to create something amazing for your brand" }
                div { style: "display: flex; gap: 16px; justify-content: center; flex-wrap: wrap;",
                    Link {
                        to: Route::Contact {},
                        style: "padding: 12px 24px; border-radius: 8px; background: white; color: #8f1819; text-decoration: none; font-weight: 500;",
                        "Get Started"
                    }
                    Link {
                        to: Route::Services {},
                        style: "padding: 12px 24px; border-radius: 8px; border: 1px solid white; color: white; text-decoration: none; font-weight: 500;",
                        "View Services"
                    }
                }
            }
        }
    }
}

#[component]
fn FeaturedCard(project: Project, category_label: String) -> Element {
    let cover = project.cover_image().unwrap_or_default().to_string();

    rsx! {
        Link {
            to: Route::Portfolio {},
            style: "display: block; background: white; border-radius: 12px; overflow: hidden; box-shadow: 0 4px 12px rgba(0,0,0,0.08); text-decoration: none; color: inherit;",
            if !cover.is_empty() {
                img { src: "{cover}", alt: "{project.title}", style: "width: 100%; height: 240px; object-fit: cover;" }
            }
            div { style: "padding: 24px;",
                h4 { style: "font-size: 20px; color: #8f1819; margin: 0 0 8px;", "{project.title}" }
                p { style: "color: #666; font-size: 14px; line-height: 1.5;", "{project.description}" }
                span { style: "display: inline-block; padding: 4px 12px; background: #f5f0e8; color: #9c7860; border-radius: 999px; font-size: 12px;",
                    "{category_label}"
                }
            }
        }
    }
}
