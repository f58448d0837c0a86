//! Handlers for recording, clearing, and listing entrance connections.

use std::io;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::commands::{format_did_you_mean, TrackerContext, MAX_SUGGESTIONS};
use crate::output::{write_connections, write_json, ConnectionRow, OutputFormat};

/// Result of a `connect` or `disconnect` call, as printed in JSON mode.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct ConnectionChange<'a> {
    entrance_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    destination: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    previous: Option<&'a str>,
}

/// Record that `entrance` leads to `destination`.
///
/// A destination matching no entrance name is still stored, with a warning,
/// since it may be filled in once more of the catalog is explored.
pub fn handle_connect(
    context: &mut TrackerContext,
    format: OutputFormat,
    entrance: &str,
    destination: &str,
) -> Result<()> {
    let entrance_id = context.resolve_entrance(entrance)?;
    let destination = destination.trim();
    if destination.is_empty() {
        anyhow::bail!("Destination must not be blank. Use `disconnect` to clear a connection.");
    }

    if context.catalog.entrances_named(destination).is_empty() {
        let mut warning = format!(
            "Warning: destination '{}' does not match any entrance name; it will not link to another entrance.",
            destination
        );
        let suggestions = context
            .catalog
            .fuzzy_destination_matches(destination, MAX_SUGGESTIONS);
        if let Some(hint) = format_did_you_mean(&suggestions) {
            warning.push(' ');
            warning.push_str(&hint);
        }
        eprintln!("{}", warning);
    }

    let previous = context
        .state
        .connections
        .set(entrance_id.as_str(), destination);
    context.save()?;
    info!(entrance = %entrance_id, destination, "recorded connection");

    let label = context
        .catalog
        .entrance_label(&entrance_id)
        .unwrap_or_else(|| entrance_id.clone());
    if format.is_json() {
        let change = ConnectionChange {
            entrance_id: &entrance_id,
            destination: Some(destination),
            previous: previous.as_deref(),
        };
        return write_json(&mut io::stdout().lock(), &change)
            .context("failed to write connection output");
    }
    match previous {
        Some(previous) if previous != destination => {
            println!("Connected {} -> {} (was {})", label, destination, previous)
        }
        _ => println!("Connected {} -> {}", label, destination),
    }
    Ok(())
}

/// Clear the connection recorded for `entrance`.
pub fn handle_disconnect(
    context: &mut TrackerContext,
    format: OutputFormat,
    entrance: &str,
) -> Result<()> {
    let entrance_id = context.resolve_entrance(entrance)?;
    let previous = context.state.connections.remove(&entrance_id);
    if previous.is_some() {
        context.save()?;
        info!(entrance = %entrance_id, "cleared connection");
    }

    if format.is_json() {
        let change = ConnectionChange {
            entrance_id: &entrance_id,
            destination: None,
            previous: previous.as_deref(),
        };
        return write_json(&mut io::stdout().lock(), &change)
            .context("failed to write connection output");
    }
    let label = context
        .catalog
        .entrance_label(&entrance_id)
        .unwrap_or_else(|| entrance_id.clone());
    match previous {
        Some(previous) => println!("Disconnected {} (was {})", label, previous),
        None => println!("{} had no connection recorded.", label),
    }
    Ok(())
}

/// Forget every recorded connection. The area order is kept.
pub fn handle_reset(context: &mut TrackerContext, format: OutputFormat) -> Result<()> {
    let cleared = context.state.connections.len();
    context.state.connections.reset();
    context.save()?;
    info!(cleared, "reset connections");

    if format.is_json() {
        return write_json(
            &mut io::stdout().lock(),
            &serde_json::json!({ "cleared": cleared }),
        )
        .context("failed to write reset output");
    }
    println!("Cleared {} connection(s).", cleared);
    Ok(())
}

/// List recorded connections in entrance id order.
pub fn handle_list(context: &TrackerContext, format: OutputFormat) -> Result<()> {
    let rows = connection_rows(context);
    write_connections(&mut io::stdout().lock(), format, &rows)
        .context("failed to write connection list")
}

fn connection_rows(context: &TrackerContext) -> Vec<ConnectionRow> {
    context
        .state
        .connections
        .iter()
        .map(|(entrance_id, destination)| ConnectionRow {
            entrance_id: entrance_id.to_string(),
            label: context.catalog.entrance_label(entrance_id),
            destination: destination.to_string(),
            linked: !context.catalog.entrances_named(destination).is_empty(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::PathBuf;

    use entrance_tracker_lib::{LocationCatalog, TrackerState};

    fn context() -> TrackerContext {
        let mut state = TrackerState::default();
        state
            .connections
            .set("kf-lost-woods", "Lost Woods to KF");
        state.connections.set("lw-kokiri-forest", "Somewhere Else");
        TrackerContext {
            catalog: LocationCatalog::bundled().clone(),
            state_path: PathBuf::from("unused.json"),
            state,
        }
    }

    #[test]
    fn rows_flag_unlinked_destinations() {
        let rows = connection_rows(&context());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].entrance_id, "kf-lost-woods");
        assert!(rows[0].linked);
        assert!(rows[0].label.is_some());
        assert_eq!(rows[1].entrance_id, "lw-kokiri-forest");
        assert!(!rows[1].linked);
    }
}
