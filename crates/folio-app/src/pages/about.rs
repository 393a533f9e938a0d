// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// About page: bio, experience, education, skills, and languages.

use dioxus::prelude::*;

use folio_core::catalog::{EDUCATION, EXPERIENCE, SKILLS, SPOKEN_LANGUAGES};
use folio_i18n::Localizer;
use folio_store::ContentStore;

const CARD: &str = "background: white; border: 1px solid #d9cab1; border-radius: 12px; padding: 24px;";
const SECTION_TITLE: &str = "font-size: 30px; color: #8f1819; margin: 0 0 32px; text-align: center;";

#[component]
pub fn About() -> Element {
    let content = use_context::<Signal<ContentStore>>();
    let locale = use_context::<Signal<Localizer>>();

    let info = content.read().personal_info().clone();
    let loc = locale.read();
    // In RTL the portrait moves to the reading-start side.
    let portrait_order = if loc.is_rtl() { "order: -1;" } else { "" };

    rsx! {
        div {
            section { style: "background: linear-gradient(180deg, #f5f0e8, #ffffff); padding: 64px 24px;",
                div { style: "max-width: 1200px; margin: 0 auto; display: grid; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); gap: 48px; align-items: center;",
                    div {
                        h1 { style: "font-size: 44px; color: #8f1819; margin: 0 0 24px;", {loc.translate("about.title")} }
                        p { style: "font-size: 18px; color: #555; line-height: 1.7;", "{info.bio}" }
                        div { style: "display: grid; grid-template-columns: 1fr 1fr; gap: 16px; margin-top: 24px; color: #555;",
                            span { "\u{1F4CD} {info.location}" }
                            span { "\u{1F4C5} 9+ Years Experience" }
                            span { "\u{1F465} 50+ Happy Clients" }
                            span { "\u{1F3C6} Multiple Certifications" }
                        }
                    }
                    div { style: "{portrait_order} display: flex; justify-content: center;",
                        div { style: "width: 320px; height: 320px; background: #d9cab1; border-radius: 16px; padding: 16px;",
                            img { src: "{info.profile_image}", alt: "{info.name}", style: "width: 100%; height: 100%; object-fit: cover; border-radius: 16px;" }
                        }
                    }
                }
            }

            section { style: "background: #fbf9f6; padding: 64px 24px;",
                div { style: "max-width: 1200px; margin: 0 auto;",
                    h2 { style: SECTION_TITLE, {loc.translate("about.experience")} }
                    for exp in EXPERIENCE.iter() {
                        div { key: "{exp.period}", style: "{CARD} margin-bottom: 24px; display: flex; flex-wrap: wrap; justify-content: space-between; gap: 16px;",
                            div {
                                div { style: "display: flex; align-items: center; gap: 12px;",
                                    h3 { style: "font-size: 20px; color: #8f1819; margin: 0;", "{exp.title}" }
                                    if exp.current {
                                        span { style: "padding: 2px 10px; background: #8f1819; color: white; border-radius: 999px; font-size: 12px;", "Current" }
                                    }
                                }
                                p { style: "color: #9c7860; font-weight: 500; margin: 8px 0;", "{exp.company}" }
                                p { style: "color: #666; font-size: 14px; margin: 0;", "\u{1F4CD} {exp.location}  \u{1F4C5} {exp.period}" }
                            }
                            p { style: "color: #666; font-size: 14px; max-width: 420px;", "{exp.description}" }
                        }
                    }
                }
            }

            section { style: "padding: 64px 24px;",
                div { style: "max-width: 1200px; margin: 0 auto;",
                    h2 { style: SECTION_TITLE, {loc.translate("about.education")} }
                    div { style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); gap: 24px;",
                        for edu in EDUCATION.iter() {
                            div { key: "{edu.degree}", style: CARD,
                                h3 { style: "font-size: 18px; color: #8f1819; margin: 0;", "{edu.degree}" }
                                p { style: "font-size: 14px; color: #9c7860; margin: 4px 0 12px;", "{edu.year}" }
                                p { style: "font-size: 14px; color: #666; margin: 0;", "{edu.institution}" }
                            }
                        }
                    }
                }
            }

            section { style: "background: #fbf9f6; padding: 64px 24px;",
                div { style: "max-width: 1200px; margin: 0 auto; display: grid; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); gap: 48px;",
                    div {
                        h2 { style: "font-size: 30px; color: #8f1819; margin: 0 0 24px;", {loc.translate("about.skills")} }
                        div { style: "display: flex; flex-wrap: wrap; gap: 12px;",
                            for skill in SKILLS.iter() {
                                span { key: "{skill}", style: "padding: 8px 16px; background: #8f1819; color: white; border-radius: 999px; font-size: 14px;", "{skill}" }
                            }
                        }
                    }
                    div {
                        h2 { style: "font-size: 30px; color: #8f1819; margin: 0 0 24px;", {loc.translate("about.languages")} }
                        for lang in SPOKEN_LANGUAGES.iter() {
                            div { key: "{lang.name}", style: "margin-bottom: 24px;",
                                div { style: "display: flex; justify-content: space-between; margin-bottom: 8px;",
                                    span { style: "color: #8f1819; font-weight: 500;", "{lang.name}" }
                                    span { style: "color: #9c7860; font-size: 14px;", "{lang.level}" }
                                }
                                div { style: "width: 100%; height: 8px; background: #e5e7eb; border-radius: 999px;",
                                    div { style: "width: {lang.percentage}%; height: 8px; background: #8f1819; border-radius: 999px;" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
