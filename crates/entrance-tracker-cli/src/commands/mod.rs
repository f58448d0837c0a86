// Module exports for CLI subcommands
//
// Each module handles a group of related subcommands. main.rs parses the
// arguments and dispatches to these handlers.

pub mod areas;
pub mod connections;
pub mod route;
pub mod transfer;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use entrance_tracker_lib::{
    resolve_catalog, resolve_state_path, Error as LibError, LocationCatalog, TrackerState,
};

/// Maximum number of suggestions shown for a mistyped label.
pub(crate) const MAX_SUGGESTIONS: usize = 3;

/// Catalog plus the persisted tracker state a command operates on.
#[derive(Debug)]
pub struct TrackerContext {
    pub catalog: LocationCatalog,
    pub state_path: PathBuf,
    pub state: TrackerState,
}

impl TrackerContext {
    /// Resolve and load the catalog and the tracker state.
    pub fn load(catalog: Option<&Path>, state: Option<&Path>) -> Result<Self> {
        let catalog = resolve_catalog(catalog).context("failed to load the location catalog")?;
        let state_path =
            resolve_state_path(state).context("failed to determine the tracker state path")?;
        let state = TrackerState::load(&state_path).with_context(|| {
            format!("failed to read tracker state from {}", state_path.display())
        })?;
        Ok(Self {
            catalog,
            state_path,
            state,
        })
    }

    /// Persist the tracker state.
    pub fn save(&self) -> Result<()> {
        self.state.save(&self.state_path).with_context(|| {
            format!(
                "failed to save tracker state to {}",
                self.state_path.display()
            )
        })
    }

    /// Resolve an entrance label, failing with suggestions when it is unknown.
    pub fn resolve_entrance(&self, label: &str) -> Result<String> {
        self.catalog
            .resolve_entrance(label)
            .map(str::to_string)
            .ok_or_else(|| {
                unknown_entrance_error(LibError::UnknownEntrance {
                    name: label.to_string(),
                    suggestions: self.catalog.fuzzy_entrance_matches(label, MAX_SUGGESTIONS),
                })
            })
    }
}

/// Turn library lookup failures into the friendly CLI message.
pub(crate) fn unknown_entrance_error(err: LibError) -> anyhow::Error {
    match err {
        LibError::UnknownEntrance { name, suggestions } => {
            anyhow::anyhow!(format_unknown_message("entrance", &name, &suggestions))
        }
        other => anyhow::Error::new(other),
    }
}

pub(crate) fn format_unknown_message(what: &str, name: &str, suggestions: &[String]) -> String {
    let mut message = format!("Unknown {} '{}'.", what, name);
    if let Some(hint) = format_did_you_mean(suggestions) {
        message.push(' ');
        message.push_str(&hint);
    }
    message
}

pub(crate) fn format_did_you_mean(suggestions: &[String]) -> Option<String> {
    match suggestions {
        [] => None,
        [only] => Some(format!("Did you mean '{only}'?")),
        many => {
            let joined = many
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ");
            Some(format!("Did you mean one of: {}?", joined))
        }
    }
}
