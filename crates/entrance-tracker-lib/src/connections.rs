use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::catalog::EntranceId;

/// Mutable mapping from entrance id to the destination label the user recorded.
///
/// Blank labels mean "unset" and are never stored. Entries are kept in
/// ascending id order so every consumer iterates them deterministically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ConnectionStore {
    entries: BTreeMap<EntranceId, String>,
}

impl ConnectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All configured connections.
    pub fn get_all(&self) -> &BTreeMap<EntranceId, String> {
        &self.entries
    }

    /// Destination recorded for an entrance, if any.
    pub fn get(&self, entrance_id: &str) -> Option<&str> {
        self.entries.get(entrance_id).map(String::as_str)
    }

    /// Record a destination for an entrance. A blank destination clears it.
    ///
    /// Returns the previously recorded destination.
    pub fn set(
        &mut self,
        entrance_id: impl Into<EntranceId>,
        destination: impl Into<String>,
    ) -> Option<String> {
        let entrance_id = entrance_id.into();
        let destination = destination.into();
        if destination.trim().is_empty() {
            self.entries.remove(&entrance_id)
        } else {
            self.entries.insert(entrance_id, destination)
        }
    }

    /// Clear the destination recorded for an entrance.
    pub fn remove(&mut self, entrance_id: &str) -> Option<String> {
        self.entries.remove(entrance_id)
    }

    /// Forget every connection.
    pub fn reset(&mut self) {
        self.entries.clear();
    }

    /// Replace the whole store in one step. Blank destinations are dropped.
    pub fn replace_all(&mut self, entries: impl IntoIterator<Item = (EntranceId, String)>) {
        *self = entries.into_iter().collect();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(entrance_id, destination)` pairs in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries
            .iter()
            .map(|(id, destination)| (id.as_str(), destination.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for ConnectionStore
where
    K: Into<EntranceId>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut store = ConnectionStore::new();
        for (entrance_id, destination) in iter {
            store.set(entrance_id, destination);
        }
        store
    }
}

impl<'de> Deserialize<'de> for ConnectionStore {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let entries = BTreeMap::<EntranceId, String>::deserialize(deserializer)?;
        Ok(entries.into_iter().collect())
    }
}
