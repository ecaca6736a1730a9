mod args;
mod commands;
mod handlers;
pub mod input;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands};
pub use commands::run;
