//! Rendering engine.
//!
//! ```text
//! (SeasonRecord, Option<LiveClimateReading>) --> [ presenter ] --> SeasonViewModel --> [ views ] --> Markup
//! ```
//!
//! Everything here is pure: no I/O, no clock, no shared state. View models
//! carry raw data and are what JSON output serializes; views own layout and
//! formatting.

pub mod formatters;
pub mod presenter;
pub mod render;
pub mod view_models;
pub mod views;

pub use presenter::{present_error, present_placeholder, present_season};
pub use render::{Markup, render, render_error, render_placeholder};
pub use view_models::{
    ClimateViewModel, CosmovisionViewModel, ErrorViewModel, PlaceholderViewModel,
    PracticeViewModel, SeasonViewModel,
};
