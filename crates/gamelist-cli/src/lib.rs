// gamelist CLI
//
// Layering mirrors the data flow of a single render:
//   args -> commands (wiring) -> handlers (reduce + compute) -> presentation (view model + renderer)
//
// The engine stays pure; everything that touches the filesystem, the terminal
// or stdin lives in this crate.

mod args;
pub mod catalog;
mod commands;
pub mod config;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands};
pub use commands::run;
