use crate::season::{SeasonId, SeasonRecord};
use crate::Result;
use std::collections::HashMap;

/// Seasons indexed by id. Built once at startup and never mutated after.
#[derive(Debug, Clone, Default)]
pub struct SeasonCatalog {
    seasons: HashMap<SeasonId, SeasonRecord>,
}

impl SeasonCatalog {
    /// Index a list of records in one pass. A duplicate id replaces the
    /// earlier record.
    pub fn from_records(records: impl IntoIterator<Item = SeasonRecord>) -> Self {
        let mut seasons = HashMap::new();
        for record in records {
            seasons.insert(record.id.clone(), record);
        }
        Self { seasons }
    }

    /// Parse a JSON array of season records.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self> {
        let records: Vec<SeasonRecord> = serde_json::from_slice(bytes)?;
        Ok(Self::from_records(records))
    }

    pub fn get(&self, id: &SeasonId) -> Option<&SeasonRecord> {
        self.seasons.get(id)
    }

    pub fn contains(&self, id: &SeasonId) -> bool {
        self.seasons.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.seasons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seasons.is_empty()
    }

    /// Ids in natural order: numeric ids first, ascending, then the rest
    /// lexicographically. Equal numbers ("1", "01") fall back to text order.
    pub fn ids(&self) -> Vec<&SeasonId> {
        let mut ids: Vec<&SeasonId> = self.seasons.keys().collect();
        ids.sort_by(|a, b| match (a.as_number(), b.as_number()) {
            (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => a.cmp(b),
        });
        ids
    }

    /// Records in the same order as [`SeasonCatalog::ids`].
    pub fn records(&self) -> Vec<&SeasonRecord> {
        self.ids()
            .into_iter()
            .filter_map(|id| self.seasons.get(id))
            .collect()
    }
}
