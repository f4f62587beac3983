//! Infrastructure layer with configuration, demo services and timers.

/// Application configuration.
pub mod config;
/// Demo audit backend.
pub mod demo;
/// Cancellable scheduled tasks.
pub mod scheduler;

pub use config::{AppConfig, CliArgs, LogLevel, StorageManager, TimingConfig};
pub use demo::DemoAuditBackend;
pub use scheduler::{Scheduler, TaskHandle, TaskId, TimerFired};
