// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Folio: English/Arabic localization.
//
// Translation keys use dotted namespaces (`nav.home`, `portfolio.print`).
// The tables are compiled in; nothing is loaded at runtime. A key missing
// from the active language's table resolves to the key itself, so gaps show
// up on screen as literal keys instead of blank space.

mod catalog;
mod localizer;

pub use catalog::{lookup, table_for, translate};
pub use localizer::{DocumentRoot, Localizer, RootAttributes};
