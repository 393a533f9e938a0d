// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Central service layer: resolves the data directory, loads the site
// configuration, and opens the durable content store.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use folio_core::SiteConfig;
use folio_core::error::Result;
use folio_store::{ContentStore, KeyValueStore, MemoryStore, SqliteStore};
use tracing::{error, info, warn};

use super::data_dir;

/// Shared application services accessible from all Dioxus components via
/// `use_context::<AppServices>()`.
///
/// Cheaply cloneable so it can be moved into closures and async blocks.
#[derive(Clone)]
pub struct AppServices {
    /// `None` when running without a writable data directory.
    data_dir: Option<PathBuf>,
    /// Read once at startup; never changes while the app runs.
    config: Arc<SiteConfig>,
}

impl AppServices {
    /// Initialise all services. Call once at app startup.
    pub fn init() -> Result<Self> {
        let dir = data_dir::data_dir()?;
        info!(path = %dir.display(), "initialising site services");

        let config = match load_config(&dir) {
            Ok(Some(config)) => config,
            Ok(None) => SiteConfig::default(),
            Err(e) => {
                warn!(error = %e, "config.json unreadable, using defaults");
                SiteConfig::default()
            }
        };

        Ok(Self {
            data_dir: Some(dir),
            config: Arc::new(config),
        })
    }

    /// Services with default configuration and no durable storage.
    pub fn fallback() -> Self {
        Self {
            data_dir: None,
            config: Arc::new(SiteConfig::default()),
        }
    }

    /// Open the content store on the durable key-value file, or on volatile
    /// memory when that is not possible.
    pub fn open_content_store(&self) -> ContentStore {
        ContentStore::open(self.open_storage())
    }

    fn open_storage(&self) -> Box<dyn KeyValueStore> {
        let Some(dir) = &self.data_dir else {
            return Box::new(MemoryStore::new());
        };
        let path = dir.join(&self.config.storage_file);
        match SqliteStore::open(&path) {
            Ok(store) => Box::new(store),
            Err(e) => {
                error!(path = %path.display(), error = %e, "content database unavailable, changes will not be saved");
                Box::new(MemoryStore::new())
            }
        }
    }

    /// Get a clone of the site config.
    pub fn config(&self) -> SiteConfig {
        SiteConfig::clone(&self.config)
    }
}

// -- Config file persistence -------------------------------------------------

const CONFIG_FILE: &str = "config.json";

/// `Ok(None)` when no config file exists.
fn load_config(data_dir: &Path) -> Result<Option<SiteConfig>> {
    let path = data_dir.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(None);
    }
    let data = std::fs::read_to_string(&path)?;
    SiteConfig::from_json(&data).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::Language;

    #[test]
    fn missing_config_is_none() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(load_config(dir.path()).unwrap().is_none());
    }

    #[test]
    fn config_file_is_parsed() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            r#"{"default_language":"ar","featured_limit":6}"#,
        )
        .unwrap();

        let config = load_config(dir.path()).unwrap().expect("config present");
        assert_eq!(config.default_language, Language::Ar);
        assert_eq!(config.featured_limit, 6);
    }

    #[test]
    fn invalid_config_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join(CONFIG_FILE), "[]").unwrap();
        assert!(load_config(dir.path()).is_err());
    }

    #[test]
    fn clones_share_one_config() {
        let svc = AppServices::fallback();
        let copy = svc.clone();
        assert!(Arc::ptr_eq(&svc.config, &copy.config));
        assert_eq!(copy.config().featured_limit, 3);
    }

    #[test]
    fn fallback_runs_on_memory() {
        let svc = AppServices::fallback();
        let store = svc.open_content_store();
        assert_eq!(store.projects().len(), 4);
        assert_eq!(svc.config(), SiteConfig::default());
    }
}
