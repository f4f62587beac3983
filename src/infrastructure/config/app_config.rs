//! Application configuration.

use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::args::CliArgs;

const APP_NAME: &str = "truemileage";
const APP_QUALIFIER: &str = "com";
const APP_ORGANIZATION: &str = "truemileage";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration, merged from file and CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// UI configuration.
    #[serde(default)]
    pub ui: UiConfig,

    /// Timer durations.
    #[serde(default)]
    pub timing: TimingConfig,

    /// Theme configuration.
    #[serde(default)]
    pub theme: ThemeConfig,
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Enable `TachyonFX` animations.
    #[serde(default = "default_true")]
    pub enable_animations: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            enable_animations: true,
        }
    }
}

/// Durations of the simulated asynchronous steps, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Splash progress increment period.
    pub splash_tick_ms: u64,
    /// Pause between full splash progress and leaving the splash.
    pub splash_finish_delay_ms: u64,
    /// Simulated VIN scan.
    pub vin_scan_delay_ms: u64,
    /// Recording seconds counter period.
    pub record_tick_ms: u64,
    /// Waveform refresh period.
    pub waveform_refresh_ms: u64,
    /// Simulated engine analysis after recording stops.
    pub analysis_delay_ms: u64,
    /// Simulated listing scan.
    pub listing_scan_delay_ms: u64,
}

impl TimingConfig {
    /// Replaces zero repeating periods with their defaults.
    ///
    /// One-shot delays may be zero; a repeating timer needs a non-zero period.
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        for (name, value, default) in [
            ("splash_tick_ms", &mut self.splash_tick_ms, defaults.splash_tick_ms),
            ("record_tick_ms", &mut self.record_tick_ms, defaults.record_tick_ms),
            (
                "waveform_refresh_ms",
                &mut self.waveform_refresh_ms,
                defaults.waveform_refresh_ms,
            ),
        ] {
            if *value == 0 {
                warn!(key = name, default, "Zero timer period in config, using default");
                *value = default;
            }
        }
        self
    }

    /// Returns splash tick period.
    #[must_use]
    pub const fn splash_tick(&self) -> Duration {
        Duration::from_millis(self.splash_tick_ms)
    }

    /// Returns splash finish delay.
    #[must_use]
    pub const fn splash_finish_delay(&self) -> Duration {
        Duration::from_millis(self.splash_finish_delay_ms)
    }

    /// Returns VIN scan delay.
    #[must_use]
    pub const fn vin_scan_delay(&self) -> Duration {
        Duration::from_millis(self.vin_scan_delay_ms)
    }

    /// Returns recording counter period.
    #[must_use]
    pub const fn record_tick(&self) -> Duration {
        Duration::from_millis(self.record_tick_ms)
    }

    /// Returns waveform refresh period.
    #[must_use]
    pub const fn waveform_refresh(&self) -> Duration {
        Duration::from_millis(self.waveform_refresh_ms)
    }

    /// Returns analysis delay.
    #[must_use]
    pub const fn analysis_delay(&self) -> Duration {
        Duration::from_millis(self.analysis_delay_ms)
    }

    /// Returns listing scan delay.
    #[must_use]
    pub const fn listing_scan_delay(&self) -> Duration {
        Duration::from_millis(self.listing_scan_delay_ms)
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            splash_tick_ms: 40,
            splash_finish_delay_ms: 300,
            vin_scan_delay_ms: 1500,
            record_tick_ms: 1000,
            waveform_refresh_ms: 100,
            analysis_delay_ms: 3000,
            listing_scan_delay_ms: 2500,
        }
    }
}

/// Theme configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Accent color (name or hex code).
    #[serde(default = "default_accent_color")]
    pub accent_color: String,
}

fn default_accent_color() -> String {
    "#10b981".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            accent_color: default_accent_color(),
        }
    }
}

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(config_path) = args.config {
            self.config = Some(config_path);
        }
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(accent_color) = args.accent_color {
            self.theme.accent_color = accent_color;
        }
        if let Some(enable_animations) = args.enable_animations {
            self.ui.enable_animations = enable_animations;
        }
    }

    /// Returns default config directory.
    #[must_use]
    pub fn default_config_dir() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("truemileage.log"))
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            log_path: None,
            log_level: LogLevel::Info,
            ui: UiConfig::default(),
            timing: TimingConfig::default(),
            theme: ThemeConfig::default(),
        }
    }
}
