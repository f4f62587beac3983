//! TrueMileage - a terminal vehicle-audit prototype.
//!
//! This crate walks a buyer through a used-car audit: VIN entry, engine sound
//! recording and analysis, listing verification and a combined report. Every
//! result comes from an in-process demo backend.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing the screen flow, use cases and DTOs.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing configuration, the demo backend and timers.
pub mod infrastructure;
/// Presentation layer containing UI components and event handling.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "truemileage";
