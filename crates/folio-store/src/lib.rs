// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Folio: durable key-value storage and the content store built on top of it.
//
// The content store is the single owner of the project list and the
// personal-info record. It hydrates once from storage, falls back to the
// compiled-in seed on any read problem, and writes the full value back after
// every mutation.

pub mod content;
pub mod kv;
pub mod sqlite;

pub use content::{ContentStore, PERSONAL_INFO_KEY, PROJECTS_KEY};
pub use kv::{KeyValueStore, MemoryStore};
pub use sqlite::SqliteStore;
