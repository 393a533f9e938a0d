// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Site configuration.

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, Result};
use crate::types::Language;

/// Persistent site settings, read from `config.json` in the data directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Language active when the site starts.
    pub default_language: Language,
    /// Maximum number of featured projects on the home page.
    pub featured_limit: usize,
    /// Simulated contact-form submission time.
    pub contact_submit_delay_ms: u64,
    /// How long the "message sent" notice stays visible.
    pub contact_notice_ms: u64,
    /// File name of the content database inside the data directory.
    pub storage_file: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            default_language: Language::En,
            featured_limit: 3,
            contact_submit_delay_ms: 2_000,
            contact_notice_ms: 5_000,
            storage_file: "storage.db".into(),
        }
    }
}

impl SiteConfig {
    /// Parse a configuration document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.storage_file.trim().is_empty() {
            return Err(FolioError::Config("storage_file must not be empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_document_fills_defaults() {
        let config = SiteConfig::from_json(r#"{"default_language":"ar"}"#).unwrap();
        assert_eq!(config.default_language, Language::Ar);
        assert_eq!(config.featured_limit, 3);
        assert_eq!(config.contact_submit_delay_ms, 2_000);
        assert_eq!(config.storage_file, "storage.db");
    }

    #[test]
    fn empty_storage_file_is_rejected() {
        let err = SiteConfig::from_json(r#"{"storage_file":"  "}"#).unwrap_err();
        assert!(matches!(err, FolioError::Config(_)));
    }

    #[test]
    fn malformed_document_is_a_serialization_error() {
        let err = SiteConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, FolioError::Serialization(_)));
    }
}
