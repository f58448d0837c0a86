//! Locating the catalog and tracker state on disk.
//!
//! Resolution order for both is: explicit path, then environment variable,
//! then the built-in default.

use std::env;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::debug;

use crate::catalog::{load_catalog, LocationCatalog};
use crate::error::{Error, Result};

/// Environment variable overriding the catalog file.
pub const CATALOG_ENV: &str = "ENTRANCE_TRACKER_CATALOG";

/// Environment variable overriding the tracker state file.
pub const STATE_ENV: &str = "ENTRANCE_TRACKER_STATE";

/// Default filename for the persisted tracker state.
const STATE_FILENAME: &str = "state.json";

/// Resolve the default state location using platform-specific project directories.
pub fn default_state_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("com", "entrance-tracker", "entrance-tracker")
        .ok_or(Error::StateDirsUnavailable)?;
    Ok(dirs.data_dir().join(STATE_FILENAME))
}

/// Resolve where tracker state is read from and written to.
pub fn resolve_state_path(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    if let Some(path) = env_path(STATE_ENV) {
        debug!(path = %path.display(), "using state path from {}", STATE_ENV);
        return Ok(path);
    }
    default_state_path()
}

/// Load the catalog from an explicit path, the environment, or the bundled data.
pub fn resolve_catalog(explicit: Option<&Path>) -> Result<LocationCatalog> {
    if let Some(path) = explicit {
        return load_catalog(path);
    }
    if let Some(path) = env_path(CATALOG_ENV) {
        debug!(path = %path.display(), "using catalog from {}", CATALOG_ENV);
        return load_catalog(&path);
    }
    Ok(LocationCatalog::bundled().clone())
}

fn env_path(name: &str) -> Option<PathBuf> {
    env::var_os(name)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
