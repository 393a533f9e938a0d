// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Folio: Core types, error definitions, and compiled-in content shared
// across all crates.

pub mod catalog;
pub mod config;
pub mod error;
pub mod gallery;
pub mod seed;
pub mod types;

pub use config::SiteConfig;
pub use error::FolioError;
pub use types::*;
