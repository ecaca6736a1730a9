use plenilunio_types::{ReadingValue, SeasonId};
use serde::Serialize;

/// Everything the season panel displays, as raw data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonViewModel {
    pub id: SeasonId,
    pub name: String,
    pub months: String,
    pub description: String,
    pub cosmovision: CosmovisionViewModel,
    pub natural_signs: Vec<String>,
    pub climate: ClimateViewModel,
    pub practices: Vec<PracticeViewModel>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CosmovisionViewModel {
    pub spirit: String,
    pub biosemiotic_meaning: String,
}

/// Climate block. Exactly one of the two layouts is ever shown.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "source", rename_all = "lowercase")]
pub enum ClimateViewModel {
    Live {
        location: String,
        cycle: String,
        temperature_range: ReadingValue,
        precipitation_today: ReadingValue,
        humidity: ReadingValue,
    },
    Static {
        temperature: String,
        precipitation: String,
        humidity: String,
    },
}

impl ClimateViewModel {
    pub fn is_live(&self) -> bool {
        matches!(self, ClimateViewModel::Live { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PracticeViewModel {
    pub icon: String,
    pub name: String,
    pub description: String,
    pub quote: String,
}

/// Transient content shown while the climate lookup is outstanding.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaceholderViewModel {
    pub season_id: SeasonId,
    pub message: String,
    pub hint: String,
}

/// Terminal startup failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorViewModel {
    pub title: String,
    pub detail: String,
}
