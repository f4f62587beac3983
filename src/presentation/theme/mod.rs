//! Colour theme derived from the configured accent.

pub mod adapter;
mod service;

pub use service::Theme;
