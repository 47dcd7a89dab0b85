use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::utils::error::{AppError, AppResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub general: GeneralConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// The JSON document holding the whole prompt collection.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
    /// Sort order used by `list` when no --sort flag is given.
    #[serde(default)]
    pub sort_by: SortKey,
    #[serde(default = "default_true")]
    pub color: bool,
    /// How many entries the stats screen shows per top list.
    #[serde(default = "default_top_limit")]
    pub top_limit: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Newest first
    #[default]
    Recent,
    /// Most used first
    Usage,
    /// Highest rated first
    Rating,
}

fn default_true() -> bool {
    true
}

fn default_top_limit() -> usize {
    5
}

fn default_data_file() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("promptarium")
        .join("prompts.json")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            general: GeneralConfig {
                data_file: default_data_file(),
                sort_by: SortKey::default(),
                color: true,
                top_limit: default_top_limit(),
            },
        }
    }
}

impl Config {
    pub fn load() -> AppResult<Self> {
        Self::load_custom(&Self::config_file_path())
    }

    pub fn ensure_config_exists() -> AppResult<()> {
        let config_path = Self::config_file_path();
        if !config_path.exists() {
            Config::default().save()?;
        }
        Ok(())
    }

    pub fn load_custom(config_path: &std::path::Path) -> AppResult<Self> {
        if !config_path.exists() {
            let default_config = Config::default();
            default_config.save()?;
            return Ok(default_config);
        }

        let content =
            std::fs::read_to_string(config_path).map_err(|e| AppError::Io(e.to_string()))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| AppError::System(format!("Failed to parse config file: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.general.data_file.as_os_str().is_empty() {
            return Err(AppError::System("Data file path cannot be empty".to_string()));
        }

        if self.general.top_limit == 0 {
            return Err(AppError::System("top_limit must be at least 1".to_string()));
        }

        Ok(())
    }

    pub fn save(&self) -> AppResult<()> {
        let config_path = Self::config_file_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| AppError::Io(e.to_string()))?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| AppError::System(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(&config_path, content).map_err(|e| AppError::Io(e.to_string()))?;

        Ok(())
    }

    pub fn config_file_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("promptarium")
            .join("config.toml")
    }
}
