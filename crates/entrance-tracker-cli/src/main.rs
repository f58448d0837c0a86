use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use entrance_tracker_cli::commands::areas::{
    handle_areas, handle_entrances, handle_reorder, AreasCommandArgs, GameArg, KindArg,
};
use entrance_tracker_cli::commands::connections::{
    handle_connect, handle_disconnect, handle_list, handle_reset,
};
use entrance_tracker_cli::commands::route::{handle_route_command, RouteCommandArgs};
use entrance_tracker_cli::commands::transfer::{handle_export, handle_import};
use entrance_tracker_cli::commands::TrackerContext;
use entrance_tracker_cli::logging::{init_tracing, LogFormat};
use entrance_tracker_cli::output::OutputFormat;
use entrance_tracker_lib::RouteAlgorithm;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Record entrance connections and find routes between entrances"
)]
struct Cli {
    /// Location catalog JSON (defaults to $ENTRANCE_TRACKER_CATALOG, then the bundled catalog).
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Tracker state file (defaults to $ENTRANCE_TRACKER_STATE, then the platform data dir).
    #[arg(long, global = true)]
    state: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find the shortest route between two entrances.
    Route {
        /// Starting entrance id or "Area - Entrance" label.
        #[arg(long = "from")]
        from: String,
        /// Destination entrance id or "Area - Entrance" label.
        #[arg(long = "to")]
        to: String,
        /// Search algorithm.
        #[arg(long, default_value_t = RouteAlgorithm::Bfs, value_parser = parse_algorithm)]
        algorithm: RouteAlgorithm,
    },
    /// Record where an entrance leads.
    Connect {
        /// Entrance id or "Area - Entrance" label.
        entrance: String,
        /// Name of the entrance it leads to.
        destination: String,
    },
    /// Clear the connection recorded for an entrance.
    Disconnect {
        /// Entrance id or "Area - Entrance" label.
        entrance: String,
    },
    /// Forget every recorded connection.
    Reset,
    /// List recorded connections.
    Connections,
    /// Export connections and area order as JSON.
    Export {
        /// Write to a file instead of stdout.
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Import a previously exported document.
    Import {
        /// JSON file to import.
        file: PathBuf,
    },
    /// List areas in your order.
    Areas {
        /// Only areas whose name or entrance names contain this text.
        #[arg(long)]
        search: Option<String>,
        /// Only areas of this kind.
        #[arg(long, value_enum)]
        kind: Option<KindArg>,
        /// Only areas from this game.
        #[arg(long, value_enum)]
        game: Option<GameArg>,
    },
    /// List every entrance label.
    Entrances,
    /// Move an area to a new position in your order.
    Reorder {
        /// Area id.
        area: String,
        /// Zero-based target position.
        position: usize,
    },
}

fn parse_algorithm(value: &str) -> std::result::Result<RouteAlgorithm, String> {
    value.parse()
}

fn main() -> Result<()> {
    init_tracing(LogFormat::from_env());
    let cli = Cli::parse();

    let mut context = TrackerContext::load(cli.catalog.as_deref(), cli.state.as_deref())?;
    let format = cli.format;

    match cli.command {
        Command::Route {
            from,
            to,
            algorithm,
        } => handle_route_command(
            &context,
            format,
            &RouteCommandArgs {
                from,
                to,
                algorithm,
            },
        ),
        Command::Connect {
            entrance,
            destination,
        } => handle_connect(&mut context, format, &entrance, &destination),
        Command::Disconnect { entrance } => handle_disconnect(&mut context, format, &entrance),
        Command::Reset => handle_reset(&mut context, format),
        Command::Connections => handle_list(&context, format),
        Command::Export { output } => handle_export(&context, output.as_deref()),
        Command::Import { file } => handle_import(&mut context, format, &file),
        Command::Areas { search, kind, game } => {
            handle_areas(&context, format, &AreasCommandArgs { search, kind, game })
        }
        Command::Entrances => handle_entrances(&context, format),
        Command::Reorder { area, position } => handle_reorder(&mut context, &area, position),
    }
}
