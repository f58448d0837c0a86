//! Output formatting for route and listing rendering.
//!
//! Every writer takes an `io::Write` so handlers print to stdout while tests
//! capture into a buffer.

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use entrance_tracker_lib::{EntranceOption, RouteRenderMode, RouteStep, RouteSummary};

use crate::terminal::{arrow, ColorPalette};

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Tagged, optionally colored text.
    #[default]
    Text,
    /// Markdown.
    Rich,
    /// One sentence per hop.
    Steps,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    /// Whether command output should be machine-readable.
    pub fn is_json(self) -> bool {
        matches!(self, OutputFormat::Json)
    }

    /// Write a route summary (successful or not) in this format.
    pub fn write_route<W: Write>(
        self,
        out: &mut W,
        summary: &RouteSummary,
        palette: ColorPalette,
    ) -> io::Result<()> {
        match self {
            OutputFormat::Json => write_json(out, summary),
            OutputFormat::Rich => out.write_all(summary.render(RouteRenderMode::RichText).as_bytes()),
            OutputFormat::Steps => out.write_all(summary.render(RouteRenderMode::Steps).as_bytes()),
            OutputFormat::Text => {
                let text = if summary.route.is_complete {
                    TaggedRenderer::new(palette).render(summary)
                } else {
                    summary.render(RouteRenderMode::PlainText)
                };
                out.write_all(text.as_bytes())
            }
        }
    }
}

/// Serialize any value as pretty JSON followed by a newline.
pub fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).map_err(io::Error::other)?;
    out.write_all(b"\n")
}

/// Renderer for the default text format with inverted tag labels.
pub struct TaggedRenderer {
    palette: ColorPalette,
}

impl TaggedRenderer {
    #[must_use]
    pub const fn new(palette: ColorPalette) -> Self {
        Self { palette }
    }

    /// Render a complete route.
    pub fn render(&self, summary: &RouteSummary) -> String {
        let p = &self.palette;
        let mut lines = vec![format!(
            "Route from {}{}{} {} {}{}{} ({} steps; algorithm: {}):",
            p.white_bold,
            summary.start.label,
            p.reset,
            arrow(),
            p.white_bold,
            summary.goal.label,
            p.reset,
            summary.route.total_steps,
            summary.algorithm
        )];

        lines.push(self.tagged(p.tag_start, "STRT", &summary.start.label));
        if summary.route.steps.is_empty() {
            lines.push(format!("       {}Already at destination.{}", p.gray, p.reset));
        }
        for step in &summary.route.steps {
            lines.push(self.render_step(step));
        }
        lines.push(self.tagged(p.tag_goal, "GOAL", &summary.goal.label));

        let mut text = lines.join("\n");
        text.push('\n');
        text
    }

    fn tagged(&self, tag_color: &str, tag: &str, label: &str) -> String {
        let p = &self.palette;
        format!(
            "{} {} {} {}{}{}",
            tag_color, tag, p.reset, p.white_bold, label, p.reset
        )
    }

    fn render_step(&self, step: &RouteStep) -> String {
        let p = &self.palette;
        format!(
            "{} STEP {} {} {}{}{} {}{}{}\n       {}│ {}{}",
            p.tag_step,
            p.reset,
            step.from_entrance,
            p.gray,
            arrow(),
            p.reset,
            p.white_bold,
            step.to_destination,
            p.reset,
            p.gray,
            step.area_name,
            p.reset
        )
    }
}

/// A recorded connection as listed by the `connections` command.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionRow {
    pub entrance_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub destination: String,
    /// Whether the destination names at least one catalog entrance.
    pub linked: bool,
}

/// An area as listed by the `areas` command.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaRow {
    pub position: usize,
    pub id: String,
    pub name: String,
    pub game: String,
    pub kind: String,
    pub entrances: usize,
}

pub fn write_connections<W: Write>(
    out: &mut W,
    format: OutputFormat,
    rows: &[ConnectionRow],
) -> io::Result<()> {
    if format.is_json() {
        return write_json(out, rows);
    }
    if rows.is_empty() {
        return writeln!(out, "No connections recorded.");
    }
    for row in rows {
        let name = row.label.as_deref().unwrap_or(&row.entrance_id);
        let marker = if row.linked { "" } else { " (unlinked)" };
        writeln!(out, "{} -> {}{}", name, row.destination, marker)?;
    }
    writeln!(out, "{} connection(s)", rows.len())
}

pub fn write_areas<W: Write>(
    out: &mut W,
    format: OutputFormat,
    rows: &[AreaRow],
) -> io::Result<()> {
    if format.is_json() {
        return write_json(out, rows);
    }
    if rows.is_empty() {
        return writeln!(out, "No areas match.");
    }
    for row in rows {
        writeln!(
            out,
            "{:>3}. {} [{}, {}] ({}, {} entrances)",
            row.position, row.name, row.game, row.kind, row.id, row.entrances
        )?;
    }
    Ok(())
}

pub fn write_entrances<W: Write>(
    out: &mut W,
    format: OutputFormat,
    options: &[EntranceOption],
) -> io::Result<()> {
    if format.is_json() {
        return write_json(out, options);
    }
    for option in options {
        writeln!(out, "{} ({})", option.label, option.id)?;
    }
    Ok(())
}
