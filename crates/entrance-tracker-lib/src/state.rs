use std::collections::HashSet;
use std::fs;
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::catalog::{Area, LocationCatalog};
use crate::connections::ConnectionStore;
use crate::error::{Error, Result};

/// Everything the tracker persists between sessions.
///
/// This is also the export document: `{ "connections": {..}, "areaOrder": [..] }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackerState {
    #[serde(default)]
    pub connections: ConnectionStore,
    #[serde(default)]
    pub area_order: Vec<String>,
}

/// Imported document. Absent fields leave the current state untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackerImport {
    #[serde(default)]
    pub connections: Option<ConnectionStore>,
    #[serde(default)]
    pub area_order: Option<Vec<String>>,
}

impl TrackerImport {
    /// Parse an import document from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read an import document from a file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}

impl TrackerState {
    /// Load state from `path`. A missing file yields an empty state.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no tracker state yet; starting empty");
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)?;
        let state: TrackerState = serde_json::from_str(&contents)?;
        debug!(
            path = %path.display(),
            connections = state.connections.len(),
            "loaded tracker state"
        );
        Ok(state)
    }

    /// Write state to `path`, replacing any previous file atomically.
    pub fn save(&self, path: &Path) -> Result<()> {
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent)?;

        let mut temp = NamedTempFile::new_in(parent)?;
        temp.write_all(self.to_json()?.as_bytes())?;
        temp.write_all(b"\n")?;
        temp.persist(path).map_err(|err| Error::StatePersist {
            path: path.to_path_buf(),
            source: err.error,
        })?;

        info!(
            path = %path.display(),
            connections = self.connections.len(),
            "saved tracker state"
        );
        Ok(())
    }

    /// Pretty JSON export of the full state.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Apply an imported document: present fields replace the stored ones.
    pub fn import(&mut self, import: TrackerImport) {
        if let Some(connections) = import.connections {
            self.connections = connections;
        }
        if let Some(area_order) = import.area_order {
            self.area_order = area_order;
        }
    }

    /// Areas in the user's order.
    ///
    /// Unknown or repeated ids in the stored order are skipped; catalog areas
    /// missing from it follow in catalog order.
    pub fn ordered_areas<'a>(&self, catalog: &'a LocationCatalog) -> Vec<&'a Area> {
        let mut seen = HashSet::new();
        let mut ordered: Vec<&Area> = self
            .area_order
            .iter()
            .filter_map(|id| catalog.area(id))
            .filter(|area| seen.insert(area.id.as_str()))
            .collect();
        ordered.extend(
            catalog
                .areas()
                .iter()
                .filter(|area| !seen.contains(area.id.as_str())),
        );
        ordered
    }

    /// Move an area to `position` in the user order (clamped to the end).
    pub fn move_area(
        &mut self,
        catalog: &LocationCatalog,
        area_id: &str,
        position: usize,
    ) -> Result<()> {
        let mut order: Vec<String> = self
            .ordered_areas(catalog)
            .into_iter()
            .map(|area| area.id.clone())
            .collect();
        let current = order
            .iter()
            .position(|id| id == area_id)
            .ok_or_else(|| Error::UnknownArea {
                id: area_id.to_string(),
            })?;
        let id = order.remove(current);
        let position = position.min(order.len());
        order.insert(position, id);
        self.area_order = order;
        Ok(())
    }
}
