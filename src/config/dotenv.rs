//! `.env` file support.
//!
//! Values from the file only fill gaps: a variable already present in the
//! process environment is never overwritten.

use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Seed the process environment from the nearest `.env` file.
///
/// Searches the current directory and its parents. A missing file is not
/// an error; returns the path that was loaded, if any.
///
/// Call this once at startup, before any other threads exist.
pub fn load_dotenv() -> Option<PathBuf> {
    match dotenvy::dotenv() {
        Ok(path) => {
            debug!(path = %path.display(), "loaded env file");
            Some(path)
        }
        Err(e) => {
            if !e.not_found() {
                tracing::warn!(error = %e, "ignoring unreadable env file");
            }
            None
        }
    }
}

/// Seed the process environment from an explicit file.
///
/// Unlike [`load_dotenv`], a missing or malformed file is an error.
pub fn load_dotenv_from(path: &Path) -> Result<()> {
    dotenvy::from_path(path)
        .map_err(|e| Error::EnvFile(format!("cannot load {}: {e}", path.display())))?;
    debug!(path = %path.display(), "loaded env file");
    Ok(())
}

/// Parse an env file into a map without touching the process environment.
///
/// Pair with [`Overlay`](super::env::Overlay) to get the same precedence as
/// [`load_dotenv_from`].
pub fn read_env_file(path: &Path) -> Result<BTreeMap<String, String>> {
    let iter = dotenvy::from_path_iter(path)
        .map_err(|e| Error::EnvFile(format!("cannot read {}: {e}", path.display())))?;

    let mut vars = BTreeMap::new();
    for item in iter {
        let (key, value) =
            item.map_err(|e| Error::EnvFile(format!("bad entry in {}: {e}", path.display())))?;
        vars.insert(key, value);
    }
    Ok(vars)
}
