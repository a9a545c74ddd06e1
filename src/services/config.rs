use crate::error::{Result, SnipError};
use crate::models::config::AppConfig;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration manager for app settings
pub struct ConfigManager {
    config_dir: PathBuf,
    config_path: PathBuf,
}

impl ConfigManager {
    /// Create a manager rooted at the platform config directory
    ///
    /// This will create the config directory if it doesn't exist.
    pub fn new() -> Result<Self> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| SnipError::Config("Failed to determine config directory".into()))?
            .join("snip-ocr");

        fs::create_dir_all(&config_dir)?;

        Ok(Self::with_dir(config_dir))
    }

    /// Create a manager rooted at an explicit directory (created lazily on save)
    pub fn with_dir(config_dir: impl Into<PathBuf>) -> Self {
        let config_dir = config_dir.into();
        let config_path = config_dir.join("config.json");
        Self {
            config_dir,
            config_path,
        }
    }

    /// Save configuration to disk
    pub fn save(&self, config: &AppConfig) -> Result<()> {
        fs::create_dir_all(&self.config_dir)?;

        // Pretty print for human readability
        let json = serde_json::to_string_pretty(config)?;
        fs::write(&self.config_path, json)?;

        tracing::debug!(path = %self.config_path.display(), "Configuration saved");
        Ok(())
    }

    /// Load configuration from disk
    ///
    /// If config file doesn't exist, returns default configuration
    pub fn load(&self) -> Result<AppConfig> {
        if !self.config_exists() {
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.config_path)?;
        let config: AppConfig = serde_json::from_str(&content).map_err(|e| {
            SnipError::Config(format!(
                "Failed to parse {}: {}",
                self.config_path.display(),
                e
            ))
        })?;

        Ok(config)
    }

    /// Get the config file path
    pub fn config_file_path(&self) -> &Path {
        &self.config_path
    }

    /// Check if config file exists
    pub fn config_exists(&self) -> bool {
        self.config_path.exists()
    }
}
