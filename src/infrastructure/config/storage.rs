use super::app_config::AppConfig;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to determine config directory")]
    ConfigDirNotFound,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

/// Reads and writes `config.toml` under the platform config directory.
pub struct StorageManager {
    config_dir: PathBuf,
}

impl StorageManager {
    /// Creates a manager for the platform config directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration directory cannot be determined.
    pub fn new() -> Result<Self, ConfigError> {
        AppConfig::default_config_dir()
            .map(Self::with_dir)
            .ok_or(ConfigError::ConfigDirNotFound)
    }

    #[must_use]
    pub fn with_dir(path: PathBuf) -> Self {
        Self { config_dir: path }
    }

    #[must_use]
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Returns the default config file location.
    #[must_use]
    pub fn config_path(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE_NAME)
    }

    /// Loads the configuration from `path_override` or [`Self::config_path`].
    ///
    /// A missing file is created with defaults; a malformed one is left
    /// untouched and defaults are used. The returned config remembers the
    /// file it came from.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or the default cannot be written.
    pub fn load_config(&self, path_override: Option<&Path>) -> Result<AppConfig, ConfigError> {
        let path = path_override.map_or_else(|| self.config_path(), Path::to_path_buf);

        let mut config = match fs::read_to_string(&path) {
            Ok(content) => toml::from_str::<AppConfig>(&content).unwrap_or_else(|e| {
                warn!(path = ?path, error = %e, "Malformed config file, using defaults");
                AppConfig::default()
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = ?path, "Config file not found, writing defaults");
                let config = AppConfig::default();
                Self::save_config(&path, &config)?;
                config
            }
            Err(e) => return Err(e.into()),
        };

        config.timing = config.timing.sanitized();
        config.config = Some(path);
        Ok(config)
    }

    /// Writes `config` to `path` atomically, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if serialization or any filesystem step fails.
    pub fn save_config(path: &Path, config: &AppConfig) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(config)?;

        let parent = path
            .parent()
            .ok_or_else(|| std::io::Error::other("config path has no parent directory"))?;
        fs::create_dir_all(parent)?;

        let mut temp_file = tempfile::NamedTempFile::new_in(parent)?;
        temp_file.write_all(content.as_bytes())?;
        temp_file.persist(path).map_err(|e| e.error)?;
        debug!(path = ?path, "Config saved");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::config::LogLevel;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_written_with_defaults() {
        let dir = tempdir().unwrap();
        let config_dir = dir.path().join("truemileage");
        let manager = StorageManager::with_dir(config_dir.clone());

        let config = manager.load_config(None).unwrap();
        assert_eq!(config.timing.analysis_delay_ms, 3000);
        assert_eq!(config.config, Some(config_dir.join(CONFIG_FILE_NAME)));

        let written = fs::read_to_string(manager.config_path()).unwrap();
        assert!(written.contains("[timing]"));
        assert!(written.contains("accent_color"));
    }

    #[test]
    fn test_malformed_file_left_untouched() {
        let dir = tempdir().unwrap();
        let manager = StorageManager::with_dir(dir.path().to_path_buf());
        fs::write(manager.config_path(), "invalid_toml = [").unwrap();

        let config = manager.load_config(None).unwrap();
        assert_eq!(config.log_level, LogLevel::Info);
        let content = fs::read_to_string(manager.config_path()).unwrap();
        assert_eq!(content, "invalid_toml = [");
    }

    #[test]
    fn test_override_path_wins() {
        let dir = tempdir().unwrap();
        let manager = StorageManager::with_dir(dir.path().join("default"));
        let custom = dir.path().join("custom.toml");

        fs::write(&custom, "log_level = \"warn\"\n[timing]\nsplash_tick_ms = 5\n").unwrap();

        let config = manager.load_config(Some(&custom)).unwrap();
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.timing.splash_tick_ms, 5);
        assert!(!manager.config_path().exists());
    }

    #[test]
    fn test_saved_config_reloads() {
        let dir = tempdir().unwrap();
        let manager = StorageManager::with_dir(dir.path().to_path_buf());

        let mut config = AppConfig::default();
        config.theme.accent_color = "#ff8800".to_string();
        config.timing.listing_scan_delay_ms = 10;
        StorageManager::save_config(&manager.config_path(), &config).unwrap();

        let loaded = manager.load_config(None).unwrap();
        assert_eq!(loaded.theme.accent_color, "#ff8800");
        assert_eq!(loaded.timing.listing_scan_delay_ms, 10);
    }

    #[test]
    fn test_zero_periods_fall_back_to_defaults() {
        let dir = tempdir().unwrap();
        let manager = StorageManager::with_dir(dir.path().to_path_buf());
        fs::write(
            manager.config_path(),
            "[timing]\nsplash_tick_ms = 0\nwaveform_refresh_ms = 0\nvin_scan_delay_ms = 0\n",
        )
        .unwrap();

        let config = manager.load_config(None).unwrap();
        assert_eq!(config.timing.splash_tick_ms, 40);
        assert_eq!(config.timing.waveform_refresh_ms, 100);
        assert_eq!(config.timing.record_tick_ms, 1000);
        assert_eq!(config.timing.vin_scan_delay_ms, 0);
    }
}
