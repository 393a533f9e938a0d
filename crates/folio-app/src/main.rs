// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Folio: bilingual designer portfolio.
//
// Entry point. Initialises logging, the content and localization services,
// and launches the Dioxus UI.

mod layout;
mod pages;
mod services;
mod state;

use dioxus::prelude::*;

use folio_i18n::Localizer;

use layout::footer::Footer;
use layout::header::Header;
use pages::about::About;
use pages::contact::Contact;
use pages::home::Home;
use pages::portfolio::Portfolio;
use pages::services::Services;

use services::app_services::AppServices;
use services::document::WebviewDocument;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Folio starting");

    dioxus::launch(app);
}

/// Top-level route enum.
#[derive(Debug, Clone, Routable, PartialEq)]
enum Route {
    #[layout(SiteLayout)]
    #[route("/")]
    Home {},
    #[route("/portfolio")]
    Portfolio {},
    #[route("/about")]
    About {},
    #[route("/services")]
    Services {},
    #[route("/contact")]
    Contact {},
}

impl Route {
    /// Header navigation entries with their label keys, in display order.
    fn nav_items() -> [(Route, &'static str); 5] {
        [
            (Route::Home {}, "nav.home"),
            (Route::Portfolio {}, "nav.portfolio"),
            (Route::About {}, "nav.about"),
            (Route::Services {}, "nav.services"),
            (Route::Contact {}, "nav.contact"),
        ]
    }
}

/// Root component.
fn app() -> Element {
    let svc = use_hook(|| match AppServices::init() {
        Ok(s) => {
            tracing::info!("site services initialised");
            s
        }
        Err(e) => {
            tracing::error!(error = %e, "data directory unavailable, running without persistence");
            AppServices::fallback()
        }
    });

    // Both services are built exactly once here and handed down as context;
    // pages never construct their own.
    use_context_provider(|| svc.clone());
    use_context_provider(|| Signal::new(svc.open_content_store()));
    let mut locale = use_context_provider(|| {
        Signal::new(Localizer::new(
            svc.config().default_language,
            Box::new(WebviewDocument),
        ))
    });

    // The apply during construction can run before the webview document
    // exists; push the attributes again once the first render is mounted.
    // SiteLayout also carries dir/lang on its root element.
    use_effect(move || {
        let language = locale.peek().language();
        locale.write().set_language(language);
    });

    rsx! {
        Router::<Route> {}
    }
}

/// Header, routed page, footer. The root element carries `dir`/`lang` so
/// direction-dependent layout follows the active language on every render.
#[component]
fn SiteLayout() -> Element {
    let locale = use_context::<Signal<Localizer>>();
    let dir = locale.read().direction().as_str();
    let lang = locale.read().language().code();

    rsx! {
        div {
            dir: dir,
            lang: lang,
            style: "display: flex; flex-direction: column; min-height: 100vh; font-family: system-ui, -apple-system, sans-serif; color: #333;",
            Header {}
            main { style: "flex: 1;",
                Outlet::<Route> {}
            }
            Footer {}
        }
    }
}
