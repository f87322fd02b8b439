//! Testing infrastructure for gamelist integration tests.
//!
//! - `TestWorld`: isolated temp environment that runs the `gamelist` binary
//! - `fixtures`: sample catalogs with known search/genre/rating properties
//! - `assertions`: checks against the JSON output envelope

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
