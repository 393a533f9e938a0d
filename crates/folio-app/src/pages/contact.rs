// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Contact page: contact details and a simulated message form.

use std::time::Duration;

use dioxus::prelude::*;

use folio_core::catalog::CONTACT_SUBJECTS;
use folio_i18n::Localizer;
use folio_store::ContentStore;

use crate::services::app_services::AppServices;
use crate::state::ContactForm;

const INPUT: &str = "width: 100%; padding: 10px 12px; border: 1px solid #d9cab1; border-radius: 8px; font-size: 14px; box-sizing: border-box;";
const LABEL: &str = "display: block; color: #8f1819; font-size: 14px; font-weight: 500; margin-bottom: 6px;";

#[component]
pub fn Contact() -> Element {
    let content = use_context::<Signal<ContentStore>>();
    let locale = use_context::<Signal<Localizer>>();
    let svc = use_context::<AppServices>();
    let mut draft = use_signal(ContactForm::default);

    let info = content.read().personal_info().clone();
    let loc = locale.read();
    let current = draft.read().clone();
    let name_label = loc.translate("contact.name");
    let email_label = loc.translate("contact.email");
    let message_label = loc.translate("contact.message");
    let send_label = if current.is_submitting() { "Sending..." } else { loc.translate("contact.send") };

    let on_submit = {
        let svc = svc.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            if !draft.write().begin_submit() {
                return;
            }
            let config = svc.config();
            tracing::info!("contact form submitted");
            spawn(async move {
                tokio::time::sleep(Duration::from_millis(config.contact_submit_delay_ms)).await;
                draft.write().finish_submit();
                tokio::time::sleep(Duration::from_millis(config.contact_notice_ms)).await;
                draft.write().clear_notice();
            });
        }
    };

    rsx! {
        div {
            section { style: "background: linear-gradient(180deg, #f5f0e8, #ffffff); padding: 64px 24px; text-align: center;",
                h1 { style: "font-size: 44px; color: #8f1819; margin: 0 0 16px;", {loc.translate("contact.title")} }
                p { style: "font-size: 18px; color: #666; max-width: 640px; margin: 0 auto;",
                    "Ready to bring your vision to life? Let's discuss your project and create something amazing together."
                }
            }

            section { style: "max-width: 1200px; margin: 0 auto; padding: 64px 24px; display: grid; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); gap: 48px;",
                div { style: "background: white; border: 1px solid #d9cab1; border-radius: 12px; padding: 32px;",
                    h2 { style: "font-size: 24px; color: #8f1819; margin: 0 0 8px;", "Send Me a Message" }
                    p { style: "color: #666; font-size: 14px; margin: 0 0 24px;",
                        "Fill out the form below and I'll get back to you within 24 hours."
                    }

                    if current.is_submitted() {
                        div { style: "text-align: center; padding: 32px 0;",
                            div { style: "font-size: 48px; color: #16a34a;", "\u{2714}" }
                            h3 { style: "color: #8f1819;", "Message Sent Successfully!" }
                            p { style: "color: #666;", "Thank you for reaching out. I'll get back to you soon." }
                        }
                    } else {
                        form { onsubmit: on_submit,
                            div { style: "display: grid; grid-template-columns: 1fr 1fr; gap: 16px; margin-bottom: 16px;",
                                div {
                                    label { r#for: "name", style: LABEL, "{name_label} *" }
                                    input {
                                        id: "name",
                                        r#type: "text",
                                        required: true,
                                        style: INPUT,
                                        placeholder: "Your full name",
                                        value: "{current.name}",
                                        oninput: move |evt| draft.write().name = evt.value(),
                                    }
                                }
                                div {
                                    label { r#for: "email", style: LABEL, "{email_label} *" }
                                    input {
                                        id: "email",
                                        r#type: "email",
                                        required: true,
                                        style: INPUT,
                                        placeholder: "your@email.com",
                                        value: "{current.email}",
                                        oninput: move |evt| draft.write().email = evt.value(),
                                    }
                                }
                            }
                            div { style: "margin-bottom: 16px;",
                                label { r#for: "subject", style: LABEL, "Subject *" }
                                input {
                                    id: "subject",
                                    r#type: "text",
                                    required: true,
                                    style: INPUT,
                                    placeholder: "Project inquiry",
                                    list: "subjects",
                                    value: "{current.subject}",
                                    oninput: move |evt| draft.write().subject = evt.value(),
                                }
                                datalist { id: "subjects",
                                    for subject in CONTACT_SUBJECTS.iter() {
                                        option { key: "{subject}", value: "{subject}" }
                                    }
                                }
                            }
                            div { style: "margin-bottom: 24px;",
                                label { r#for: "message", style: LABEL, "{message_label} *" }
                                textarea {
                                    id: "message",
                                    required: true,
                                    rows: 5,
                                    style: "{INPUT} resize: vertical;",
                                    placeholder: "Tell me about your project, timeline, and budget...",
                                    value: "{current.message}",
                                    oninput: move |evt| draft.write().message = evt.value(),
                                }
                            }
                            button {
                                r#type: "submit",
                                disabled: current.is_submitting(),
                                style: "width: 100%; padding: 12px; border: none; border-radius: 8px; background: #8f1819; color: white; font-size: 16px;",
                                "{send_label}"
                            }
                        }
                    }
                }

                div {
                    h2 { style: "font-size: 24px; color: #8f1819; margin: 0 0 24px;", {loc.translate("contact.info")} }
                    InfoCard { icon: "\u{260E}", title: "Phone", value: info.phone.clone(), href: format!("tel:{}", info.phone) }
                    InfoCard { icon: "\u{2709}", title: "Email", value: info.email.clone(), href: format!("mailto:{}", info.email) }
                    InfoCard { icon: "\u{1F4CD}", title: "Location", value: info.location.clone(), href: "#".to_string() }

                    h3 { style: "font-size: 18px; color: #8f1819; margin: 32px 0 16px;", "Services I Offer" }
                    ul { style: "list-style: none; padding: 0; margin: 0; display: grid; grid-template-columns: 1fr 1fr; gap: 8px;",
                        for subject in CONTACT_SUBJECTS.iter() {
                            li { key: "{subject}", style: "color: #555; font-size: 14px;", "\u{2022} {subject}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn InfoCard(icon: &'static str, title: &'static str, value: String, href: String) -> Element {
    rsx! {
        a {
            href: "{href}",
            style: "display: flex; align-items: center; gap: 16px; padding: 16px; margin-bottom: 12px; border: 1px solid #d9cab1; border-radius: 12px; text-decoration: none; color: inherit;",
            div { style: "width: 48px; height: 48px; border-radius: 8px; background: #8f1819; color: white; display: flex; align-items: center; justify-content: center; font-size: 20px;",
                "{icon}"
            }
            div {
                div { style: "color: #8f1819; font-weight: 500;", "{title}" }
                div { style: "color: #666; font-size: 14px;", "{value}" }
            }
        }
    }
}
