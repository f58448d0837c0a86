//! Export and import of the tracker state document.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use entrance_tracker_lib::TrackerImport;

use crate::commands::TrackerContext;
use crate::output::{write_json, OutputFormat};

/// Write the full state as JSON to `output`, or to stdout when absent.
pub fn handle_export(context: &TrackerContext, output: Option<&Path>) -> Result<()> {
    let json = context
        .state
        .to_json()
        .context("failed to serialize tracker state")?;

    match output {
        Some(path) => {
            fs::write(path, format!("{json}\n"))
                .with_context(|| format!("failed to write export to {}", path.display()))?;
            info!(path = %path.display(), "exported tracker state");
            eprintln!("Exported tracker state to {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{json}").context("failed to write export")?;
        }
    }
    Ok(())
}

/// Apply an exported document. Fields present in the file replace the stored ones.
pub fn handle_import(context: &mut TrackerContext, format: OutputFormat, file: &Path) -> Result<()> {
    let import = TrackerImport::from_path(file)
        .with_context(|| format!("failed to read import file {}", file.display()))?;
    let replaced_connections = import.connections.is_some();
    let replaced_order = import.area_order.is_some();

    context.state.import(import);
    context.save()?;
    info!(
        path = %file.display(),
        connections = context.state.connections.len(),
        "imported tracker state"
    );

    if format.is_json() {
        return write_json(
            &mut io::stdout().lock(),
            &serde_json::json!({
                "connections": context.state.connections.len(),
                "replacedConnections": replaced_connections,
                "replacedAreaOrder": replaced_order,
            }),
        )
        .context("failed to write import output");
    }

    if !replaced_connections && !replaced_order {
        println!("Nothing to import from {}.", file.display());
        return Ok(());
    }
    if replaced_connections {
        println!(
            "Imported {} connection(s).",
            context.state.connections.len()
        );
    }
    if replaced_order {
        println!("Imported area order.");
    }
    Ok(())
}
