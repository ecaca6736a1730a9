use plenilunio_types::SeasonId;

/// Selection state. Owned by the selection controller and mutated only there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiState {
    current_season_id: Option<SeasonId>,
    is_loading_app: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            current_season_id: None,
            is_loading_app: true,
        }
    }
}

impl UiState {
    pub fn current_season_id(&self) -> Option<&SeasonId> {
        self.current_season_id.as_ref()
    }

    /// True until startup completes; input is dropped while set.
    pub fn is_loading_app(&self) -> bool {
        self.is_loading_app
    }

    pub(crate) fn select(&mut self, id: SeasonId) {
        self.current_season_id = Some(id);
    }

    pub(crate) fn finish_loading(&mut self) {
        self.is_loading_app = false;
    }
}
