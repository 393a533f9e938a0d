// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform-aware data directory resolution.

use std::path::{Path, PathBuf};

use folio_core::error::Result;

/// Return the application data directory, creating it if needed.
pub fn data_dir() -> Result<PathBuf> {
    let dir = resolve_base(
        std::env::var_os("XDG_DATA_HOME").map(PathBuf::from),
        std::env::var_os("HOME").map(PathBuf::from),
    )
    .join("folio");
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// XDG data dir, then `~/.local/share`, then `/tmp`.
fn resolve_base(xdg: Option<PathBuf>, home: Option<PathBuf>) -> PathBuf {
    if let Some(xdg) = xdg {
        return xdg;
    }
    if let Some(home) = home {
        return home.join(".local").join("share");
    }
    Path::new("/tmp").to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_xdg_then_home() {
        let xdg = Some(PathBuf::from("/x"));
        let home = Some(PathBuf::from("/h"));
        assert_eq!(resolve_base(xdg, home.clone()), PathBuf::from("/x"));
        assert_eq!(resolve_base(None, home), PathBuf::from("/h/.local/share"));
        assert_eq!(resolve_base(None, None), PathBuf::from("/tmp"));
    }
}
