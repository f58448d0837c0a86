//! Area and entrance listings, and area reordering.

use std::io;

use anyhow::{Context, Result};
use clap::ValueEnum;
use tracing::info;

use entrance_tracker_lib::{AreaFilter, AreaKind, Error as LibError, Game};

use crate::commands::{format_unknown_message, TrackerContext, MAX_SUGGESTIONS};
use crate::output::{write_areas, write_entrances, AreaRow, OutputFormat};

/// `--kind` values for the area filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Overworld,
    Town,
    Special,
}

impl From<KindArg> for AreaKind {
    fn from(value: KindArg) -> Self {
        match value {
            KindArg::Overworld => AreaKind::Overworld,
            KindArg::Town => AreaKind::Town,
            KindArg::Special => AreaKind::Special,
        }
    }
}

/// `--game` values for the area filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GameArg {
    Oot,
    Mm,
}

impl From<GameArg> for Game {
    fn from(value: GameArg) -> Self {
        match value {
            GameArg::Oot => Game::Oot,
            GameArg::Mm => Game::Mm,
        }
    }
}

/// Arguments for the areas command.
#[derive(Debug, Clone, Default)]
pub struct AreasCommandArgs {
    pub search: Option<String>,
    pub kind: Option<KindArg>,
    pub game: Option<GameArg>,
}

impl AreasCommandArgs {
    fn to_filter(&self) -> AreaFilter {
        let mut filter = AreaFilter::default();
        if let Some(term) = &self.search {
            filter = filter.with_term(term.clone());
        }
        if let Some(kind) = self.kind {
            filter = filter.with_kind(kind.into());
        }
        if let Some(game) = self.game {
            filter = filter.with_game(game.into());
        }
        filter
    }
}

/// List areas in the user's order, narrowed by the filters.
///
/// Positions refer to the unfiltered order so they can be passed to `reorder`.
pub fn handle_areas(
    context: &TrackerContext,
    format: OutputFormat,
    args: &AreasCommandArgs,
) -> Result<()> {
    let rows = area_rows(context, &args.to_filter());
    write_areas(&mut io::stdout().lock(), format, &rows).context("failed to write area list")
}

fn area_rows(context: &TrackerContext, filter: &AreaFilter) -> Vec<AreaRow> {
    context
        .state
        .ordered_areas(&context.catalog)
        .into_iter()
        .enumerate()
        .filter(|(_, area)| filter.matches(area))
        .map(|(index, area)| AreaRow {
            position: index,
            id: area.id.clone(),
            name: area.name.clone(),
            game: area.game.to_string(),
            kind: area.kind().label().to_string(),
            entrances: area.entrances.len(),
        })
        .collect()
}

/// List every entrance label, sorted, for use as `route` endpoints.
pub fn handle_entrances(context: &TrackerContext, format: OutputFormat) -> Result<()> {
    let options = context.catalog.entrance_options();
    write_entrances(&mut io::stdout().lock(), format, &options)
        .context("failed to write entrance list")
}

/// Move an area to `position` (zero-based) in the user's order.
pub fn handle_reorder(context: &mut TrackerContext, area_id: &str, position: usize) -> Result<()> {
    let catalog = &context.catalog;
    match context.state.move_area(catalog, area_id, position) {
        Ok(()) => {}
        Err(LibError::UnknownArea { id }) => {
            let suggestions = catalog.fuzzy_area_matches(&id, MAX_SUGGESTIONS);
            anyhow::bail!(format_unknown_message("area", &id, &suggestions));
        }
        Err(other) => return Err(other.into()),
    }
    context.save()?;
    info!(area = area_id, position, "moved area");

    let placed = context
        .state
        .area_order
        .iter()
        .position(|id| id == area_id)
        .unwrap_or(position);
    println!("Moved {} to position {}.", area_id, placed);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::PathBuf;

    use entrance_tracker_lib::{LocationCatalog, TrackerState};

    fn context() -> TrackerContext {
        TrackerContext {
            catalog: LocationCatalog::bundled().clone(),
            state_path: PathBuf::from("unused.json"),
            state: TrackerState::default(),
        }
    }

    #[test]
    fn positions_refer_to_unfiltered_order() {
        let context = context();
        let args = AreasCommandArgs {
            game: Some(GameArg::Mm),
            ..AreasCommandArgs::default()
        };
        let rows = area_rows(&context, &args.to_filter());
        assert!(!rows.is_empty());
        assert!(rows.iter().all(|row| row.game == "MM"));

        let all = area_rows(&context, &AreaFilter::default());
        for row in &rows {
            assert_eq!(all[row.position].id, row.id);
        }
    }

    #[test]
    fn kind_arg_maps_to_area_kind() {
        assert_eq!(AreaKind::from(KindArg::Town), AreaKind::Town);
        assert_eq!(Game::from(GameArg::Mm), Game::Mm);
    }
}
