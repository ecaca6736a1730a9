use std::io::{self, Write};

use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use plenilunio_engine::views::{ErrorView, PlaceholderView, SeasonView};
use plenilunio_engine::{ErrorViewModel, PlaceholderViewModel, SeasonViewModel};
use plenilunio_runtime::DisplaySurface;
use plenilunio_types::SeasonId;
use tracing::{debug, warn};

use super::view_models::SurfaceEvent;
use super::views::{ControlsBarView, ErrorTextView, PlaceholderTextView, SeasonTextView};
use crate::types::OutputFormat;

/// Approximate pixel width of one terminal cell.
const CELL_WIDTH_PX: u16 = 8;

/// Width reported when the output is not a terminal.
const DETACHED_VIEWPORT_WIDTH: u16 = 1280;

/// Viewport width of the attached terminal, in pixels.
pub fn detect_viewport_width() -> u16 {
    if !io::stdout().is_terminal() {
        return DETACHED_VIEWPORT_WIDTH;
    }
    match terminal_size::terminal_size() {
        Some((terminal_size::Width(cols), _)) => cols.saturating_mul(CELL_WIDTH_PX),
        None => DETACHED_VIEWPORT_WIDTH,
    }
}

/// Display surface writing one frame per call to a stream.
///
/// Text frames are meant for a person at a terminal, HTML frames are the
/// region markup, JSON frames are one object per line.
pub struct ConsoleSurface<W: Write> {
    out: W,
    format: OutputFormat,
    enable_color: bool,
    controls: Vec<SeasonId>,
    selected: Option<SeasonId>,
    viewport_width: u16,
}

impl ConsoleSurface<io::Stdout> {
    pub fn stdout(format: OutputFormat, enable_color: bool) -> Self {
        Self::new(io::stdout(), format, enable_color).with_viewport_width(detect_viewport_width())
    }
}

impl<W: Write> ConsoleSurface<W> {
    pub fn new(out: W, format: OutputFormat, enable_color: bool) -> Self {
        Self {
            out,
            format,
            enable_color,
            controls: Vec::new(),
            selected: None,
            viewport_width: DETACHED_VIEWPORT_WIDTH,
        }
    }

    pub fn with_controls(mut self, controls: Vec<SeasonId>) -> Self {
        self.controls = controls;
        self
    }

    pub fn with_viewport_width(mut self, width: u16) -> Self {
        self.viewport_width = width;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, frame: impl std::fmt::Display) {
        let result = write!(self.out, "{}", frame).and_then(|_| self.out.flush());
        if let Err(err) = result {
            warn!(error = %err, "failed to write to output");
        }
    }

    fn emit_json(&mut self, event: &SurfaceEvent<'_>) {
        match serde_json::to_string(event) {
            Ok(line) => self.emit(format_args!("{}\n", line)),
            Err(err) => warn!(error = %err, "failed to serialize output event"),
        }
    }
}

impl<W: Write> DisplaySurface for ConsoleSurface<W> {
    fn controls(&self) -> Vec<SeasonId> {
        self.controls.clone()
    }

    fn show_placeholder(&mut self, placeholder: &PlaceholderViewModel) {
        match self.format {
            OutputFormat::Text => self.emit(PlaceholderTextView::new(placeholder)),
            OutputFormat::Html => self.emit(PlaceholderView::new(placeholder)),
            OutputFormat::Json => self.emit_json(&SurfaceEvent::Placeholder { placeholder }),
        }
    }

    fn show_season(&mut self, season: &SeasonViewModel) {
        match self.format {
            OutputFormat::Text => {
                let bar = ControlsBarView::new(&self.controls, self.selected.as_ref(), self.enable_color)
                    .to_string();
                let body = SeasonTextView::new(season, self.enable_color).to_string();
                self.emit(format_args!("\n{}\n{}\n", bar, body));
            }
            OutputFormat::Html => self.emit(SeasonView::new(season)),
            OutputFormat::Json => self.emit_json(&SurfaceEvent::Season { season }),
        }
    }

    fn show_error(&mut self, error: &ErrorViewModel) {
        match self.format {
            OutputFormat::Text => {
                let view = ErrorTextView::new(error, self.enable_color).to_string();
                self.emit(view);
            }
            OutputFormat::Html => self.emit(ErrorView::new(error)),
            OutputFormat::Json => self.emit_json(&SurfaceEvent::Error { error }),
        }
    }

    fn set_selected(&mut self, control: &SeasonId, selected: bool) {
        if selected {
            self.selected = Some(control.clone());
            if self.format == OutputFormat::Json {
                self.emit_json(&SurfaceEvent::Selected {
                    season_id: control,
                });
            }
        } else if self.selected.as_ref() == Some(control) {
            self.selected = None;
        }
    }

    fn suppress_default_action(&mut self, control: &SeasonId) {
        debug!(control = %control, "default key action suppressed");
        if self.format == OutputFormat::Json {
            self.emit_json(&SurfaceEvent::DefaultSuppressed {
                season_id: control,
            });
        }
    }

    fn reveal(&mut self) {
        match self.format {
            OutputFormat::Text => {
                let title = "Calendario Amazónico";
                if self.enable_color {
                    self.emit(format_args!("🌕 {}\n", title.bold()));
                } else {
                    self.emit(format_args!("🌕 {}\n", title));
                }
            }
            OutputFormat::Html => {}
            OutputFormat::Json => self.emit_json(&SurfaceEvent::Ready),
        }
    }

    fn viewport_width(&self) -> u16 {
        self.viewport_width
    }

    fn scroll_into_view(&mut self) {
        debug!(width = self.viewport_width, "narrow viewport, scrolling content into view");
        if self.format == OutputFormat::Json {
            self.emit_json(&SurfaceEvent::Scroll);
        }
    }
}
