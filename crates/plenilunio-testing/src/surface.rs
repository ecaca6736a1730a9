//! Display surface that records every call made on it.

use plenilunio_engine::{ErrorViewModel, PlaceholderViewModel, SeasonViewModel};
use plenilunio_runtime::DisplaySurface;
use plenilunio_types::SeasonId;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Clone, PartialEq)]
pub enum Frame {
    Placeholder(PlaceholderViewModel),
    Season(SeasonViewModel),
    Error(ErrorViewModel),
    Revealed,
    Scrolled,
    DefaultSuppressed(SeasonId),
}

#[derive(Debug, Default)]
struct Recording {
    frames: Vec<Frame>,
    selected: BTreeMap<SeasonId, bool>,
}

/// Recording surface. Clones share one recording, so a test can keep a
/// handle while the runtime owns the surface.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    controls: Vec<SeasonId>,
    width: u16,
    recording: Arc<Mutex<Recording>>,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingSurface {
    /// Surface with controls "1" through "8" and a desktop-width viewport.
    pub fn new() -> Self {
        Self::with_controls((1..=8).map(|id| id.to_string()))
    }

    pub fn with_controls<I, T>(controls: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<SeasonId>,
    {
        Self {
            controls: controls.into_iter().map(Into::into).collect(),
            width: 1280,
            recording: Arc::new(Mutex::new(Recording::default())),
        }
    }

    pub fn narrow(mut self, width: u16) -> Self {
        self.width = width;
        self
    }

    fn recording(&self) -> MutexGuard<'_, Recording> {
        self.recording.lock().expect("recording lock")
    }

    pub fn frames(&self) -> Vec<Frame> {
        self.recording().frames.clone()
    }

    /// Rendered seasons, oldest first.
    pub fn seasons(&self) -> Vec<SeasonViewModel> {
        self.recording()
            .frames
            .iter()
            .filter_map(|frame| match frame {
                Frame::Season(season) => Some(season.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn last_season(&self) -> Option<SeasonViewModel> {
        self.seasons().pop()
    }

    pub fn placeholder_count(&self) -> usize {
        self.count(|frame| matches!(frame, Frame::Placeholder(_)))
    }

    pub fn errors(&self) -> Vec<ErrorViewModel> {
        self.recording()
            .frames
            .iter()
            .filter_map(|frame| match frame {
                Frame::Error(error) => Some(error.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn is_revealed(&self) -> bool {
        self.count(|frame| *frame == Frame::Revealed) > 0
    }

    pub fn scroll_count(&self) -> usize {
        self.count(|frame| *frame == Frame::Scrolled)
    }

    /// Controls currently marked selected.
    pub fn selected_controls(&self) -> Vec<SeasonId> {
        self.recording()
            .selected
            .iter()
            .filter(|(_, selected)| **selected)
            .map(|(id, _)| id.clone())
            .collect()
    }

    /// Controls whose key press had its default action suppressed.
    pub fn suppressed_defaults(&self) -> Vec<SeasonId> {
        self.recording()
            .frames
            .iter()
            .filter_map(|frame| match frame {
                Frame::DefaultSuppressed(id) => Some(id.clone()),
                _ => None,
            })
            .collect()
    }

    fn count(&self, predicate: impl Fn(&Frame) -> bool) -> usize {
        self.recording().frames.iter().filter(|f| predicate(f)).count()
    }

    fn record(&self, frame: Frame) {
        self.recording().frames.push(frame);
    }
}

impl DisplaySurface for RecordingSurface {
    fn controls(&self) -> Vec<SeasonId> {
        self.controls.clone()
    }

    fn show_placeholder(&mut self, placeholder: &PlaceholderViewModel) {
        self.record(Frame::Placeholder(placeholder.clone()));
    }

    fn show_season(&mut self, season: &SeasonViewModel) {
        self.record(Frame::Season(season.clone()));
    }

    fn show_error(&mut self, error: &ErrorViewModel) {
        self.record(Frame::Error(error.clone()));
    }

    fn set_selected(&mut self, control: &SeasonId, selected: bool) {
        self.recording().selected.insert(control.clone(), selected);
    }

    fn suppress_default_action(&mut self, control: &SeasonId) {
        self.record(Frame::DefaultSuppressed(control.clone()));
    }

    fn reveal(&mut self) {
        self.record(Frame::Revealed);
    }

    fn viewport_width(&self) -> u16 {
        self.width
    }

    fn scroll_into_view(&mut self) {
        self.record(Frame::Scrolled);
    }
}
