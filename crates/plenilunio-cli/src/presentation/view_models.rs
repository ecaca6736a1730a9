use plenilunio_engine::{ErrorViewModel, PlaceholderViewModel, SeasonViewModel};
use plenilunio_types::SeasonId;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonListViewModel {
    pub seasons: Vec<SeasonListEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonListEntry {
    pub id: SeasonId,
    pub name: String,
    pub months: String,
}

/// One line of `run --format json` output.
#[derive(Debug, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SurfaceEvent<'a> {
    Ready,
    Selected { season_id: &'a SeasonId },
    Placeholder { placeholder: &'a PlaceholderViewModel },
    Season { season: &'a SeasonViewModel },
    Error { error: &'a ErrorViewModel },
    Scroll,
    DefaultSuppressed { season_id: &'a SeasonId },
}
