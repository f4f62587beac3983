use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "truemileage",
    version,
    about = "A terminal vehicle auditor: engine sound, listing and report walkthrough",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Enable `TachyonFX` animations.
    #[arg(long)]
    pub enable_animations: Option<bool>,

    /// Accent color (name or hex code).
    #[arg(long)]
    pub accent_color: Option<String>,
}
