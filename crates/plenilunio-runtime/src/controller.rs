use crate::state::UiState;
use crate::surface::DisplaySurface;
use plenilunio_engine::{present_placeholder, present_season};
use plenilunio_types::{LiveClimateReading, SeasonCatalog, SeasonId};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Viewports narrower than this get the content scrolled into view.
pub const DEFAULT_NARROW_VIEWPORT_WIDTH: u16 = 768;

/// What to do with a climate lookup that resolves after the user has moved
/// on to another season.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaleResponses {
    /// Drop it; the display keeps showing the current selection.
    #[default]
    Discard,
    /// Render it anyway: the last lookup to resolve wins.
    Render,
}

/// A climate lookup in flight, tagged with the season it was issued for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingFetch {
    pub season_id: SeasonId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Rendered,
    Discarded,
}

/// Resolves selections against the catalog and drives the render cycle.
pub struct SelectionController {
    catalog: SeasonCatalog,
    controls: Vec<SeasonId>,
    state: UiState,
    stale_responses: StaleResponses,
    narrow_viewport_width: u16,
}

impl SelectionController {
    pub fn new(catalog: SeasonCatalog, controls: Vec<SeasonId>) -> Self {
        Self {
            catalog,
            controls,
            state: UiState::default(),
            stale_responses: StaleResponses::default(),
            narrow_viewport_width: DEFAULT_NARROW_VIEWPORT_WIDTH,
        }
    }

    pub fn with_stale_responses(mut self, policy: StaleResponses) -> Self {
        self.stale_responses = policy;
        self
    }

    pub fn with_narrow_viewport_width(mut self, width: u16) -> Self {
        self.narrow_viewport_width = width;
        self
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn catalog(&self) -> &SeasonCatalog {
        &self.catalog
    }

    /// Clear the startup gate. Called once, when startup reaches `Ready`.
    pub fn finish_loading(&mut self) {
        self.state.finish_loading();
    }

    /// First half of the cycle: update selection, mark controls, show the
    /// placeholder. Returns the lookup the caller must perform, or `None`
    /// if the selection was dropped.
    pub fn on_select<S>(&mut self, season_id: &SeasonId, surface: &mut S) -> Option<PendingFetch>
    where
        S: DisplaySurface + ?Sized,
    {
        if self.state.is_loading_app() {
            debug!(season = %season_id, "startup gate active, selection dropped");
            return None;
        }

        let Some(record) = self.catalog.get(season_id) else {
            warn!(season = %season_id, "season not found");
            return None;
        };

        info!(season = %season_id, name = %record.name, "showing season");
        self.state.select(season_id.clone());

        for control in &self.controls {
            surface.set_selected(control, control == season_id);
        }
        surface.show_placeholder(&present_placeholder(season_id));

        Some(PendingFetch {
            season_id: season_id.clone(),
        })
    }

    /// Second half of the cycle: render the season with whatever reading the
    /// lookup produced.
    pub fn on_climate_resolved<S>(
        &mut self,
        fetch: PendingFetch,
        reading: Option<LiveClimateReading>,
        surface: &mut S,
    ) -> Resolution
    where
        S: DisplaySurface + ?Sized,
    {
        let is_current = self.state.current_season_id() == Some(&fetch.season_id);
        if !is_current && self.stale_responses == StaleResponses::Discard {
            debug!(
                season = %fetch.season_id,
                current = ?self.state.current_season_id(),
                "stale climate lookup discarded"
            );
            return Resolution::Discarded;
        }

        let Some(record) = self.catalog.get(&fetch.season_id) else {
            return Resolution::Discarded;
        };

        surface.show_season(&present_season(record, reading.as_ref()));

        if surface.viewport_width() < self.narrow_viewport_width {
            surface.scroll_into_view();
        }

        Resolution::Rendered
    }
}
