//! Testing infrastructure for plenilunio integration tests.
//!
//! This crate provides utilities for writing robust integration tests:
//! - `TestWorld`: Fluent interface for running the CLI in an isolated directory
//! - `fixtures`: Sample season records, catalogs and climate readings
//! - `climate`: Scripted climate source with per-season responses
//! - `surface`: Display surface that records everything drawn on it
//! - `http`: Loopback HTTP stub standing in for the remote services

pub mod climate;
pub mod fixtures;
pub mod http;
pub mod surface;
pub mod world;

pub use climate::ScriptedClimateSource;
pub use http::{StubResponse, StubServer};
pub use surface::{Frame, RecordingSurface};
pub use world::{CliResult, TestWorld};
