//! Configuration management for medrec.
//!
//! Configuration is loaded from multiple sources with precedence:
//! 1. Command line / environment (`--database`, MEDREC_DATABASE_PATH)
//! 2. Config file ($MEDREC_CONFIG or <config dir>/medrec/config.toml)
//! 3. Default values

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Records database settings
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Log output settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// SQLite records database file
    #[serde(default = "default_database_path")]
    pub path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// tracing filter used when RUST_LOG is unset
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

// Default value functions
fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("org", "medrec", "medrec")
}

fn default_data_dir() -> PathBuf {
    if let Some(proj_dirs) = project_dirs() {
        proj_dirs.data_dir().to_path_buf()
    } else {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".medrec")
    }
}

fn default_database_path() -> PathBuf {
    default_data_dir().join("hospital.db")
}

fn default_log_filter() -> String {
    "medrec=warn,medrec_core=warn".to_string()
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_database_path(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

impl Config {
    /// Load configuration from the config file, or defaults when there is none.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from a specific file.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file {}", config_path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", config_path.display()))
    }

    /// Get the config file path.
    pub fn config_path() -> PathBuf {
        if let Ok(path) = std::env::var("MEDREC_CONFIG") {
            PathBuf::from(path)
        } else if let Some(proj_dirs) = project_dirs() {
            proj_dirs.config_dir().join("config.toml")
        } else {
            default_data_dir().join("config.toml")
        }
    }

    /// Resolve the database file, preferring an explicit override.
    pub fn database_path(&self, override_path: Option<&Path>) -> PathBuf {
        override_path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.database.path.clone())
    }
}
