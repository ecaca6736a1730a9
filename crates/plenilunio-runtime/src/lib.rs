pub mod bootstrap;
pub mod config;
pub mod controller;
pub mod error;
pub mod events;
pub mod runtime;
pub mod state;
pub mod surface;

pub use bootstrap::{BootPhase, Bootstrapper};
pub use config::Config;
pub use controller::{PendingFetch, Resolution, SelectionController, StaleResponses};
pub use error::{Error, Result};
pub use events::{Activation, AppEvent, InputBindings, InputEvent, Key};
pub use runtime::Runtime;
pub use state::UiState;
pub use surface::DisplaySurface;
