//! Area search and filtering.

use crate::catalog::{Area, AreaKind, Game};

/// Criteria for narrowing down the area list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AreaFilter {
    /// Case-insensitive text matched against area and entrance names.
    pub term: Option<String>,
    pub kind: Option<AreaKind>,
    pub game: Option<Game>,
}

impl AreaFilter {
    pub fn with_term(mut self, term: impl Into<String>) -> Self {
        self.term = Some(term.into());
        self
    }

    pub fn with_kind(mut self, kind: AreaKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_game(mut self, game: Game) -> Self {
        self.game = Some(game);
        self
    }

    /// Whether an area passes every configured criterion.
    pub fn matches(&self, area: &Area) -> bool {
        if self.kind.is_some_and(|kind| area.kind() != kind) {
            return false;
        }
        if self.game.is_some_and(|game| area.game != game) {
            return false;
        }

        let Some(term) = self
            .term
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
        else {
            return true;
        };
        let needle = term.to_lowercase();
        area.name.to_lowercase().contains(&needle)
            || area
                .entrances
                .iter()
                .any(|entrance| entrance.name.to_lowercase().contains(&needle))
    }

    /// Keep the areas that match, preserving their order.
    pub fn apply<'a>(&self, areas: impl IntoIterator<Item = &'a Area>) -> Vec<&'a Area> {
        areas.into_iter().filter(|area| self.matches(area)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Entrance;

    fn area(id: &str, name: &str, game: Game, entrance: &str) -> Area {
        Area {
            id: id.to_string(),
            name: name.to_string(),
            game,
            color: None,
            entrances: vec![Entrance {
                id: format!("{id}-1"),
                name: entrance.to_string(),
                default_destination: None,
            }],
        }
    }

    fn areas() -> Vec<Area> {
        vec![
            area("market", "Market", Game::Oot, "Bazaar"),
            area("hyrule-field", "Hyrule Field", Game::Oot, "Field to Market"),
            area("clock-town", "Clock Town", Game::Mm, "Clock Tower"),
            area("spawns", "Spawns", Game::Oot, "Child Spawn"),
        ]
    }

    fn ids(found: Vec<&Area>) -> Vec<&str> {
        found.into_iter().map(|area| area.id.as_str()).collect()
    }

    #[test]
    fn empty_filter_keeps_everything() {
        let areas = areas();
        assert_eq!(AreaFilter::default().apply(&areas).len(), areas.len());
    }

    #[test]
    fn term_matches_area_or_entrance_names() {
        let areas = areas();
        let filter = AreaFilter::default().with_term("MARKET");
        assert_eq!(ids(filter.apply(&areas)), vec!["market", "hyrule-field"]);
    }

    #[test]
    fn blank_term_is_ignored() {
        let areas = areas();
        let filter = AreaFilter::default().with_term("   ");
        assert_eq!(filter.apply(&areas).len(), areas.len());
    }

    #[test]
    fn kind_and_game_filters_combine() {
        let areas = areas();
        let towns = AreaFilter::default().with_kind(AreaKind::Town);
        assert_eq!(ids(towns.apply(&areas)), vec!["market"]);

        let mm = AreaFilter::default().with_game(Game::Mm);
        assert_eq!(ids(mm.apply(&areas)), vec!["clock-town"]);

        let none = AreaFilter::default()
            .with_game(Game::Mm)
            .with_kind(AreaKind::Special);
        assert!(none.apply(&areas).is_empty());
    }
}
