use std::fmt::Write;

use serde::Serialize;

use crate::catalog::{EntranceId, LocationCatalog};
use crate::routing::{Route, RouteAlgorithm, RouteRequest, RouteStep};

/// Reasons listed when no route could be found.
const NO_ROUTE_REASONS: [&str; 3] = [
    "The locations are not connected through your current entrance mappings",
    "Some required entrances haven't been configured yet",
    "There's a gap in the connection chain",
];

const NO_ROUTE_TIP: &str =
    "Record the connections for the areas you want to travel through, then search again.";

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRenderMode {
    /// Numbered `From:`/`To:` pairs.
    PlainText,
    /// Markdown.
    RichText,
    /// One sentence per hop.
    Steps,
}

/// Endpoint of a route search as the user asked for it.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteEndpoint {
    /// Resolved entrance id, absent when the label is unknown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<EntranceId>,
    pub label: String,
}

impl RouteEndpoint {
    fn resolve(catalog: &LocationCatalog, label: &str) -> Self {
        let id = catalog.resolve_entrance(label).map(str::to_string);
        let label = id
            .as_deref()
            .and_then(|id| catalog.entrance_label(id))
            .unwrap_or_else(|| label.to_string());
        Self { id, label }
    }
}

/// A route together with the request that produced it, ready for display.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RouteSummary {
    pub algorithm: RouteAlgorithm,
    pub start: RouteEndpoint,
    pub goal: RouteEndpoint,
    #[serde(flatten)]
    pub route: Route,
}

impl RouteSummary {
    /// Attach resolved endpoint labels to a computed route.
    pub fn new(catalog: &LocationCatalog, request: &RouteRequest, route: Route) -> Self {
        Self {
            algorithm: request.algorithm,
            start: RouteEndpoint::resolve(catalog, &request.start),
            goal: RouteEndpoint::resolve(catalog, &request.goal),
            route,
        }
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RouteRenderMode) -> String {
        if !self.route.is_complete {
            return match mode {
                RouteRenderMode::RichText => self.render_failure_rich(),
                _ => self.render_failure_plain(),
            };
        }
        match mode {
            RouteRenderMode::PlainText => self.render_plain(),
            RouteRenderMode::RichText => self.render_rich(),
            RouteRenderMode::Steps => self.render_steps(),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Route found: {} -> {} ({} steps, algorithm: {})",
            self.start.label, self.goal.label, self.route.total_steps, self.algorithm
        );
        if self.route.steps.is_empty() {
            let _ = writeln!(buffer, "Already at destination.");
        }
        for (index, step) in self.route.steps.iter().enumerate() {
            let _ = writeln!(buffer, "{:>3}. From: {}", index + 1, step.from_entrance);
            let _ = writeln!(buffer, "     To:   {}", step.to_destination);
        }
        buffer
    }

    fn render_rich(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "**Route found** _{} → {}_ ({} steps, algorithm: `{}`)",
            self.start.label, self.goal.label, self.route.total_steps, self.algorithm
        );
        if self.route.steps.is_empty() {
            let _ = writeln!(buffer, "\n_Already at destination._");
        }
        for (index, step) in self.route.steps.iter().enumerate() {
            let _ = writeln!(
                buffer,
                "{}. **From:** {} **To:** {}",
                index + 1,
                step.from_entrance,
                step.to_destination
            );
        }
        buffer
    }

    fn render_steps(&self) -> String {
        let mut buffer = String::new();
        if self.route.steps.is_empty() {
            let _ = writeln!(buffer, "Already at {}.", self.goal.label);
        }
        for (index, step) in self.route.steps.iter().enumerate() {
            let _ = writeln!(buffer, "{}. {}", index + 1, describe_step(step));
        }
        let _ = writeln!(buffer, "Total steps: {}", self.route.total_steps);
        buffer
    }

    fn render_failure_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "No route found: {} -> {}",
            self.start.label, self.goal.label
        );
        let _ = writeln!(buffer, "This could be because:");
        for reason in NO_ROUTE_REASONS {
            let _ = writeln!(buffer, " - {reason}");
        }
        let _ = writeln!(buffer, "Tip: {NO_ROUTE_TIP}");
        buffer
    }

    fn render_failure_rich(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "**No route found** _{} → {}_",
            self.start.label, self.goal.label
        );
        let _ = writeln!(buffer, "\nThis could be because:\n");
        for reason in NO_ROUTE_REASONS {
            let _ = writeln!(buffer, "* {reason}");
        }
        let _ = writeln!(buffer, "\n**Tip:** {NO_ROUTE_TIP}");
        buffer
    }
}

/// One-sentence description of a hop.
pub fn describe_step(step: &RouteStep) -> String {
    format!(
        "From {}, use exit {} to {}.",
        step.area_name, step.from_entrance, step.to_destination
    )
}
