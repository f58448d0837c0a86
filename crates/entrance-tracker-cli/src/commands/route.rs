//! Route command handler for computing paths between entrances.

use std::io;

use anyhow::{Context, Result};

use entrance_tracker_lib::{
    plan_route, Error as RouteError, Route, RouteAlgorithm, RouteRequest, RouteSummary,
};

use crate::commands::{unknown_entrance_error, TrackerContext};
use crate::output::OutputFormat;
use crate::terminal::ColorPalette;

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    /// Starting entrance id or label.
    pub from: String,
    /// Destination entrance id or label.
    pub to: String,
    /// Algorithm to use when planning the route.
    pub algorithm: RouteAlgorithm,
}

impl RouteCommandArgs {
    /// Convert CLI args to a library RouteRequest.
    pub fn to_request(&self) -> RouteRequest {
        RouteRequest::bfs(self.from.clone(), self.to.clone()).with_algorithm(self.algorithm)
    }
}

/// Handle the route subcommand.
///
/// A missing route still prints the guidance panel before reporting failure.
pub fn handle_route_command(
    context: &TrackerContext,
    format: OutputFormat,
    args: &RouteCommandArgs,
) -> Result<()> {
    let request = args.to_request();
    let outcome = plan_route(&context.catalog, &context.state.connections, &request);

    let route = match outcome {
        Ok(route) => route,
        Err(err @ RouteError::RouteNotFound { .. }) => {
            let summary = RouteSummary::new(&context.catalog, &request, Route::incomplete());
            print_summary(format, &summary)?;
            return Err(handle_route_failure(err));
        }
        Err(err) => return Err(handle_route_failure(err)),
    };

    let summary = RouteSummary::new(&context.catalog, &request, route);
    print_summary(format, &summary)
}

fn print_summary(format: OutputFormat, summary: &RouteSummary) -> Result<()> {
    let mut stdout = io::stdout().lock();
    format
        .write_route(&mut stdout, summary, ColorPalette::detect())
        .context("failed to write route output")
}

fn handle_route_failure(err: RouteError) -> anyhow::Error {
    match err {
        RouteError::UnknownEntrance { .. } => unknown_entrance_error(err),
        RouteError::RouteNotFound { start, goal } => {
            anyhow::anyhow!(format_route_not_found_message(&start, &goal))
        }
        other => anyhow::Error::new(other),
    }
}

fn format_route_not_found_message(start: &str, goal: &str) -> String {
    format!(
        "No route found between {} and {}. Try recording more connections with `connect` \
         or check the existing ones with `connections`.",
        start, goal
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_carries_algorithm() {
        let args = RouteCommandArgs {
            from: "a".to_string(),
            to: "b".to_string(),
            algorithm: RouteAlgorithm::Dijkstra,
        };
        let request = args.to_request();
        assert_eq!(request.start, "a");
        assert_eq!(request.goal, "b");
        assert_eq!(request.algorithm, RouteAlgorithm::Dijkstra);
    }

    #[test]
    fn route_not_found_message_suggests_next_steps() {
        let err = handle_route_failure(RouteError::RouteNotFound {
            start: "A".to_string(),
            goal: "B".to_string(),
        });
        let message = err.to_string();
        assert!(message.starts_with("No route found between A and B."));
        assert!(message.contains("Try recording more connections"));
    }

    #[test]
    fn unknown_entrance_is_friendly() {
        let err = handle_route_failure(RouteError::UnknownEntrance {
            name: "Nope".to_string(),
            suggestions: vec!["Forest - E1".to_string()],
        });
        assert_eq!(
            err.to_string(),
            "Unknown entrance 'Nope'. Did you mean 'Forest - E1'?"
        );
    }
}
