// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Services page: offerings catalog and the work process.

use dioxus::prelude::*;

use folio_core::catalog::{OFFERINGS, Offering, PROCESS};
use folio_i18n::Localizer;

use crate::Route;

#[component]
pub fn Services() -> Element {
    let locale = use_context::<Signal<Localizer>>();
    let loc = locale.read();

    rsx! {
        div {
            section { style: "background: linear-gradient(180deg, #f5f0e8, #ffffff); padding: 64px 24px; text-align: center;",
                h1 { style: "font-size: 44px; color: #8f1819; margin: 0 0 16px;", {loc.translate("services.title")} }
                p { style: "font-size: 18px; color: #666; max-width: 640px; margin: 0 auto;",
                    "Professional design services tailored to elevate your brand and engage your audience"
                }
            }

            section { style: "max-width: 1200px; margin: 0 auto; padding: 64px 24px; display: grid; grid-template-columns: repeat(auto-fill, minmax(260px, 1fr)); gap: 24px;",
                for offering in OFFERINGS.iter().copied() {
                    OfferingCard {
                        key: "{offering.price}{offering.icon}",
                        title: offering.title.resolve(|k| loc.translate(k)).to_string(),
                        offering: offering,
                    }
                }
            }

            section { style: "background: #fbf9f6; padding: 64px 24px;",
                div { style: "max-width: 1200px; margin: 0 auto;",
                    h2 { style: "font-size: 30px; color: #8f1819; text-align: center; margin: 0 0 8px;", "My Design Process" }
                    p { style: "color: #666; text-align: center; margin-bottom: 48px;", "A proven approach that delivers results" }
                    div { style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 32px;",
                        for step in PROCESS.iter() {
                            div { key: "{step.step}", style: "text-align: center;",
                                div { style: "width: 64px; height: 64px; margin: 0 auto 16px; border-radius: 50%; background: #8f1819; color: white; display: flex; align-items: center; justify-content: center; font-size: 20px; font-weight: bold;",
                                    "{step.step}"
                                }
                                h3 { style: "color: #8f1819; margin: 0 0 8px;", "{step.title}" }
                                p { style: "color: #666; font-size: 14px;", "{step.description}" }
                            }
                        }
                    }
                }
            }

            section { style: "background: #8f1819; color: white; padding: 64px 24px; text-align: center;",
                h2 { style: "font-size: 30px; margin: 0 0 16px;", "Ready to Start Your Project?" }
                p { style: "color: #d9cab1; margin-bottom: 32px;", "Let's discuss your design needs and create something amazing together" }
                Link {
                    to: Route::Contact {},
                    style: "padding: 12px 24px; border-radius: 8px; background: white; color: #8f1819; text-decoration: none; font-weight: 500;",
                    {loc.translate("hero.contact")}
                }
            }
        }
    }
}

#[component]
fn OfferingCard(offering: Offering, title: String) -> Element {
    let border = if offering.popular { "2px solid #8f1819" } else { "1px solid #d9cab1" };

    rsx! {
        div { style: "position: relative; background: white; border: {border}; border-radius: 12px; padding: 24px; display: flex; flex-direction: column;",
            if offering.popular {
                span { style: "position: absolute; top: -12px; left: 50%; transform: translateX(-50%); padding: 2px 12px; background: #8f1819; color: white; border-radius: 999px; font-size: 12px;",
                    "Popular"
                }
            }
            div { style: "font-size: 40px; text-align: center; margin-bottom: 16px;", "{offering.icon}" }
            h3 { style: "color: #8f1819; text-align: center; margin: 0 0 8px;", "{title}" }
            p { style: "color: #666; font-size: 14px; text-align: center;", "{offering.description}" }
            ul { style: "list-style: none; padding: 0; margin: 16px 0; flex: 1;",
                for feature in offering.features.iter() {
                    li { key: "{feature}", style: "font-size: 14px; color: #555; padding: 4px 0;", "\u{2713} {feature}" }
                }
            }
            p { style: "font-weight: bold; color: #8f1819; text-align: center; margin: 0;", "{offering.price}" }
        }
    }
}
