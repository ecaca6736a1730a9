//! # Presentation Layer
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] ==(JSON)==> serde_json --> stdout
//!                                        |       ==(Text)==> [ text View ] --> stdout
//!                                        |       ==(HTML)==> [ engine View ] --> stdout
//!                                        v
//!                                [ ConsoleSurface ]  (run: one frame per surface call)
//! ```
//!
//! View models carry raw data; JSON output always dumps them whole.

pub mod presenters;
pub mod surface;
pub mod view_models;
pub mod views;

pub use surface::ConsoleSurface;
