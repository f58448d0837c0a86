use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the entrance tracker library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Catalog file could not be located at the resolved path.
    #[error("location catalog not found at {path}")]
    CatalogNotFound { path: PathBuf },

    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for tracker state")]
    StateDirsUnavailable,

    /// Raised when an entrance label could not be resolved against the catalog.
    #[error("unknown entrance: {name}{}", format_suggestions(.suggestions))]
    UnknownEntrance {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when an area identifier is not part of the catalog.
    #[error("unknown area: {id}")]
    UnknownArea { id: String },

    /// Raised when no route could be found between two entrances.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: String, goal: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON parsing and serialization errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Raised when the state file could not be atomically replaced.
    #[error("failed to persist tracker state to {path}: {source}")]
    StatePersist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
