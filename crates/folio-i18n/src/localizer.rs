// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Active-language service. Owns the current language and pushes the derived
// direction and locale tag to the document root whenever it changes.

use folio_core::{Direction, Language};
use tracing::{debug, info};

use crate::catalog;

/// Direction and locale tag of the document root element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RootAttributes {
    pub dir: Direction,
    pub lang: Language,
}

impl RootAttributes {
    pub fn for_language(lang: Language) -> Self {
        Self {
            dir: lang.direction(),
            lang,
        }
    }
}

/// Receiver of the `dir`/`lang` side effect.
///
/// The UI implements this against the real document; headless callers can
/// use [`RootAttributes`] itself, which simply records the last values.
pub trait DocumentRoot {
    fn apply(&mut self, attrs: RootAttributes);
}

impl DocumentRoot for RootAttributes {
    fn apply(&mut self, attrs: RootAttributes) {
        *self = attrs;
    }
}

/// The localization service handed to every page.
pub struct Localizer {
    language: Language,
    root: Box<dyn DocumentRoot>,
}

impl Localizer {
    /// Create the service and apply `language` to the document root once.
    pub fn new(language: Language, root: Box<dyn DocumentRoot>) -> Self {
        let mut localizer = Self { language, root };
        localizer.sync_root();
        localizer
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn is_rtl(&self) -> bool {
        self.language.is_rtl()
    }

    pub fn direction(&self) -> Direction {
        self.language.direction()
    }

    /// Switch language and update the document root. Setting the active
    /// language again re-applies the root attributes.
    pub fn set_language(&mut self, language: Language) {
        if language != self.language {
            info!(from = self.language.code(), to = language.code(), "language changed");
        }
        self.language = language;
        self.sync_root();
    }

    /// Switch to the other language.
    pub fn toggle(&mut self) {
        self.set_language(self.language.toggled());
    }

    /// Translation of `key` in the active language, or `key` itself.
    pub fn translate<'a>(&self, key: &'a str) -> &'a str {
        catalog::translate(self.language, key)
    }

    fn sync_root(&mut self) {
        let attrs = RootAttributes::for_language(self.language);
        debug!(dir = %attrs.dir, lang = attrs.lang.code(), "applying document root attributes");
        self.root.apply(attrs);
    }
}

impl std::fmt::Debug for Localizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Localizer")
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}
