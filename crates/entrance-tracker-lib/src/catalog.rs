use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Identifier of an entrance; unique across the whole catalog.
pub type EntranceId = String;

/// Catalog bundled with the library, mirroring the tracker's static data.
const BUNDLED_CATALOG_JSON: &str = include_str!("../data/locations.json");

static BUNDLED_CATALOG: Lazy<LocationCatalog> = Lazy::new(|| {
    LocationCatalog::from_json_str(BUNDLED_CATALOG_JSON).expect("bundled catalog is valid JSON")
});

/// Minimum Jaro-Winkler similarity for a label to be offered as a suggestion.
const FUZZY_MATCH_THRESHOLD: f64 = 0.75;

/// Game an area belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Game {
    #[default]
    #[serde(rename = "OOT", alias = "oot")]
    Oot,
    #[serde(rename = "MM", alias = "mm")]
    Mm,
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Game::Oot => "OOT",
            Game::Mm => "MM",
        };
        f.write_str(value)
    }
}

/// Broad classification used by the area filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AreaKind {
    Overworld,
    Town,
    Special,
}

impl AreaKind {
    /// Classify an area by identifier. Areas missing from the table are overworld.
    pub fn for_area_id(id: &str) -> Self {
        match id {
            "market" | "kakariko-village" | "goron-city" | "zoras-domain" => AreaKind::Town,
            "warp-songs" | "wallmasters-oot" | "dungeons" | "overworld-one-ways" | "spawns" => {
                AreaKind::Special
            }
            _ => AreaKind::Overworld,
        }
    }

    /// Human-readable label shown in listings.
    pub fn label(self) -> &'static str {
        match self {
            AreaKind::Overworld => "overworld",
            AreaKind::Town => "town",
            AreaKind::Special => "special",
        }
    }
}

/// A named transition point owned by exactly one [`Area`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entrance {
    pub id: EntranceId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_destination: Option<String>,
}

impl Entrance {
    /// Default destination, treating blank strings as unset.
    pub fn default_destination(&self) -> Option<&str> {
        self.default_destination
            .as_deref()
            .filter(|value| !value.trim().is_empty())
    }
}

/// A named collection of entrances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Area {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub game: Game,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default)]
    pub entrances: Vec<Entrance>,
}

impl Area {
    /// Classification used by the search filters.
    pub fn kind(&self) -> AreaKind {
        AreaKind::for_area_id(&self.id)
    }
}

/// Entrance choice as offered to a user picking a route endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntranceOption {
    pub id: EntranceId,
    pub label: String,
    pub area_name: String,
}

#[derive(Debug, Deserialize)]
struct LocationsData {
    areas: Vec<Area>,
}

#[derive(Debug, Clone, Copy)]
struct EntranceSlot {
    area: usize,
    entrance: usize,
}

/// Immutable catalog of areas and their entrances with lookup indices.
#[derive(Debug, Clone, Default)]
pub struct LocationCatalog {
    areas: Vec<Area>,
    entrances: HashMap<EntranceId, EntranceSlot>,
    by_name: HashMap<String, Vec<EntranceId>>,
    by_label: HashMap<String, EntranceId>,
}

impl LocationCatalog {
    /// Build a catalog and its indices from a list of areas.
    ///
    /// Duplicate entrance identifiers are tolerated: the first occurrence wins
    /// for lookups and later ones are skipped with a warning.
    pub fn from_areas(areas: Vec<Area>) -> Self {
        let mut entrances = HashMap::new();
        let mut by_name: HashMap<String, Vec<EntranceId>> = HashMap::new();
        let mut by_label = HashMap::new();

        for (area_index, area) in areas.iter().enumerate() {
            for (entrance_index, entrance) in area.entrances.iter().enumerate() {
                if entrances.contains_key(&entrance.id) {
                    warn!(
                        entrance = %entrance.id,
                        area = %area.id,
                        "duplicate entrance id in catalog; keeping first occurrence"
                    );
                    continue;
                }
                entrances.insert(
                    entrance.id.clone(),
                    EntranceSlot {
                        area: area_index,
                        entrance: entrance_index,
                    },
                );
                by_name
                    .entry(entrance.name.clone())
                    .or_default()
                    .push(entrance.id.clone());
                by_label
                    .entry(format_entrance_label(&area.name, &entrance.name))
                    .or_insert_with(|| entrance.id.clone());
            }
        }

        debug!(
            areas = areas.len(),
            entrances = entrances.len(),
            "indexed location catalog"
        );

        Self {
            areas,
            entrances,
            by_name,
            by_label,
        }
    }

    /// Parse a catalog from its JSON representation (`{ "areas": [...] }`).
    pub fn from_json_str(json: &str) -> Result<Self> {
        let data: LocationsData = serde_json::from_str(json)?;
        Ok(Self::from_areas(data.areas))
    }

    /// Catalog bundled with the library.
    pub fn bundled() -> &'static LocationCatalog {
        &BUNDLED_CATALOG
    }

    /// All areas in catalog order.
    pub fn areas(&self) -> &[Area] {
        &self.areas
    }

    /// Lookup an area by identifier.
    pub fn area(&self, id: &str) -> Option<&Area> {
        self.areas.iter().find(|area| area.id == id)
    }

    /// Number of distinct entrances in the catalog.
    pub fn entrance_count(&self) -> usize {
        self.entrances.len()
    }

    /// Whether an entrance identifier is known.
    pub fn contains_entrance(&self, id: &str) -> bool {
        self.entrances.contains_key(id)
    }

    /// Lookup an entrance by identifier.
    pub fn entrance(&self, id: &str) -> Option<&Entrance> {
        self.entrances
            .get(id)
            .map(|slot| &self.areas[slot.area].entrances[slot.entrance])
    }

    /// Area that owns the given entrance.
    pub fn area_of(&self, entrance_id: &str) -> Option<&Area> {
        self.entrances
            .get(entrance_id)
            .map(|slot| &self.areas[slot.area])
    }

    /// Identifiers of every entrance with the given display name, in catalog order.
    pub fn entrances_named(&self, name: &str) -> &[EntranceId] {
        self.by_name.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterate entrance identifiers in catalog order, skipping duplicates.
    pub fn entrance_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.areas.iter().enumerate().flat_map(move |(area_index, area)| {
            area.entrances
                .iter()
                .enumerate()
                .filter(move |(entrance_index, entrance)| {
                    self.entrances.get(&entrance.id).is_some_and(|slot| {
                        slot.area == area_index && slot.entrance == *entrance_index
                    })
                })
                .map(|(_, entrance)| entrance.id.as_str())
        })
    }

    /// `"{area} - {entrance}"` label for an entrance.
    pub fn entrance_label(&self, id: &str) -> Option<String> {
        let area = self.area_of(id)?;
        let entrance = self.entrance(id)?;
        Some(format_entrance_label(&area.name, &entrance.name))
    }

    /// Resolve a user-supplied label to an entrance identifier.
    ///
    /// Accepts either an entrance id or an `"{area} - {entrance}"` label.
    /// Blank labels never resolve.
    pub fn resolve_entrance(&self, label: &str) -> Option<&str> {
        let label = label.trim();
        if label.is_empty() {
            return None;
        }
        if let Some((id, _)) = self.entrances.get_key_value(label) {
            return Some(id.as_str());
        }
        self.by_label.get(label).map(String::as_str)
    }

    /// Every entrance as a selectable option, sorted by label.
    pub fn entrance_options(&self) -> Vec<EntranceOption> {
        let mut options: Vec<EntranceOption> = self
            .entrance_ids()
            .filter_map(|id| {
                let area = self.area_of(id)?;
                let entrance = self.entrance(id)?;
                Some(EntranceOption {
                    id: id.to_string(),
                    label: format_entrance_label(&area.name, &entrance.name),
                    area_name: area.name.clone(),
                })
            })
            .collect();
        options.sort_by(|a, b| {
            a.label
                .to_lowercase()
                .cmp(&b.label.to_lowercase())
                .then_with(|| a.label.cmp(&b.label))
        });
        options
    }

    /// Suggest entrance ids or labels similar to `query`.
    pub fn fuzzy_entrance_matches(&self, query: &str, limit: usize) -> Vec<String> {
        let candidates = self
            .by_label
            .keys()
            .map(String::as_str)
            .chain(self.entrances.keys().map(String::as_str));
        fuzzy_matches(candidates, query, limit)
    }

    /// Suggest destination names similar to `query`.
    pub fn fuzzy_destination_matches(&self, query: &str, limit: usize) -> Vec<String> {
        fuzzy_matches(self.by_name.keys().map(String::as_str), query, limit)
    }

    /// Suggest area ids similar to `query`.
    pub fn fuzzy_area_matches(&self, query: &str, limit: usize) -> Vec<String> {
        fuzzy_matches(self.areas.iter().map(|area| area.id.as_str()), query, limit)
    }
}

/// Load a catalog from a JSON file on disk.
pub fn load_catalog(path: &Path) -> Result<LocationCatalog> {
    if !path.exists() {
        return Err(Error::CatalogNotFound {
            path: path.to_path_buf(),
        });
    }
    let contents = fs::read_to_string(path)?;
    let catalog = LocationCatalog::from_json_str(&contents)?;
    debug!(path = %path.display(), "loaded location catalog");
    Ok(catalog)
}

pub(crate) fn format_entrance_label(area_name: &str, entrance_name: &str) -> String {
    format!("{} - {}", area_name, entrance_name)
}

fn fuzzy_matches<'a>(
    candidates: impl Iterator<Item = &'a str>,
    query: &str,
    limit: usize,
) -> Vec<String> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() || limit == 0 {
        return Vec::new();
    }

    let mut scored: Vec<(f64, &str)> = candidates
        .map(|candidate| {
            (
                strsim::jaro_winkler(&needle, &candidate.to_lowercase()),
                candidate,
            )
        })
        .filter(|(score, _)| *score >= FUZZY_MATCH_THRESHOLD)
        .collect();

    scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
    scored.dedup_by(|a, b| a.1 == b.1);
    scored
        .into_iter()
        .take(limit)
        .map(|(_, candidate)| candidate.to_string())
        .collect()
}
