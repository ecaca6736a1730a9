use plenilunio_engine::{ErrorViewModel, PlaceholderViewModel, SeasonViewModel};
use plenilunio_types::SeasonId;

/// A display the calendar renders into.
///
/// Regions: loading indicator, main content container, season name, season
/// months and season content. Controls are addressed by the season id they
/// are tagged with, never by position.
pub trait DisplaySurface {
    /// Ids of the selectable season controls present on this surface.
    fn controls(&self) -> Vec<SeasonId>;

    /// Replace the season content region with the loading placeholder.
    fn show_placeholder(&mut self, placeholder: &PlaceholderViewModel);

    /// Fill the season name, months and content regions.
    fn show_season(&mut self, season: &SeasonViewModel);

    /// Replace the loading region with a terminal error message.
    fn show_error(&mut self, error: &ErrorViewModel);

    fn set_selected(&mut self, control: &SeasonId, selected: bool);

    /// Suppress the surface's own reaction to the key that activated
    /// `control` (page scroll on Space).
    fn suppress_default_action(&mut self, control: &SeasonId);

    /// Hide the loading region and show the main content container.
    fn reveal(&mut self);

    /// Current viewport width, in the surface's own units.
    fn viewport_width(&self) -> u16;

    /// Bring the main content container into view.
    fn scroll_into_view(&mut self);
}
