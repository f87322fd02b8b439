//! # Presentation Layer
//!
//! Turns a `DerivedView` from the engine into something a person (or a script)
//! can read. The flow is one-way:
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] --> [ Output ]
//! ```
//!
//! * `view_models/`: serializable data contracts. No logic.
//! * `presenters/`: pure functions from engine output to view models, including
//!   status badges and follow-up suggestions.
//! * `views/`: `fmt::Display` layouts for plain-text output.
//! * `renderers/`: picks JSON or text and writes to stdout/stderr.

pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{CommandResultViewModel, Guidance, StatusBadge, StatusLevel};
