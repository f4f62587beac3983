use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use truemileage::infrastructure::{AppConfig, CliArgs, DemoAuditBackend, StorageManager};
use truemileage::presentation::App;

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn load_config() -> Result<AppConfig> {
    let args = CliArgs::parse();

    let (mut config, load_error) = match StorageManager::new() {
        Ok(storage) => match storage.load_config(args.config.as_deref()) {
            Ok(config) => (config, None),
            Err(e) => (AppConfig::default(), Some(e)),
        },
        Err(e) => (AppConfig::default(), Some(e)),
    };
    config.merge_with_args(args);

    init_logging(&config)?;

    if let Some(e) = load_error {
        warn!(error = %e, "Using default configuration");
    }

    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let config = load_config()?;
    info!(
        version = truemileage::VERSION,
        config = ?config.config,
        "Starting TrueMileage"
    );

    let mut terminal = ratatui::init();

    let app = App::new(&config, Arc::new(DemoAuditBackend::new()));
    let result = app.run(&mut terminal).await;

    ratatui::restore();

    result
}
