// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Document root bound to the webview's <html> element.

use dioxus::prelude::*;

use folio_i18n::{DocumentRoot, RootAttributes};

/// Writes `dir` and `lang` onto `document.documentElement`.
pub struct WebviewDocument;

impl DocumentRoot for WebviewDocument {
    fn apply(&mut self, attrs: RootAttributes) {
        let _ = document::eval(&root_script(attrs));
    }
}

fn root_script(attrs: RootAttributes) -> String {
    format!(
        "document.documentElement.dir = \"{}\"; document.documentElement.lang = \"{}\";",
        attrs.dir,
        attrs.lang.code()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::Language;

    #[test]
    fn script_sets_both_attributes() {
        let script = root_script(RootAttributes::for_language(Language::Ar));
        assert!(script.contains("dir = \"rtl\""));
        assert!(script.contains("lang = \"ar\""));
    }
}
