use crate::presenter::{present_error, present_placeholder, present_season};
use crate::views::{ErrorView, PlaceholderView, SeasonView};
use plenilunio_types::{LiveClimateReading, SeasonId, SeasonRecord};
use serde::Serialize;
use std::fmt;

/// An HTML fragment ready to be placed into a display region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Markup(String);

impl Markup {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.0.contains(needle)
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Render a season panel. Live climate is shown when a reading is supplied,
/// the record's static climate otherwise.
pub fn render(record: &SeasonRecord, reading: Option<&LiveClimateReading>) -> Markup {
    let view_model = present_season(record, reading);
    Markup(SeasonView::new(&view_model).to_string())
}

pub fn render_placeholder(season_id: &SeasonId) -> Markup {
    let view_model = present_placeholder(season_id);
    Markup(PlaceholderView::new(&view_model).to_string())
}

pub fn render_error(detail: &str) -> Markup {
    let view_model = present_error(detail);
    Markup(ErrorView::new(&view_model).to_string())
}
