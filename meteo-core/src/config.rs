use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf, time::Duration};

use crate::{
    locale::LocaleTag,
    provider::open_meteo::{DEFAULT_TIMEOUT, OPEN_METEO_BASE},
    units::UnitPreference,
};

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// base_url = "https://api.open-meteo.com/v1"
/// timeout_secs = 30
/// default_units = "imperial"
/// default_language = "en"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Open-Meteo API root; the `forecast` and `warnings` paths are appended.
    pub base_url: String,

    /// Upper bound for a single request, in seconds.
    pub timeout_secs: u64,

    /// Used when a command does not pass `--units`.
    pub default_units: String,

    /// Used when a command does not pass `--language`.
    pub default_language: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: OPEN_METEO_BASE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
            default_units: UnitPreference::default().to_string(),
            default_language: LocaleTag::default().to_string(),
        }
    }
}

impl Config {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }

    /// Store the unit preference in its canonical spelling.
    pub fn set_default_units(&mut self, units: UnitPreference) {
        self.default_units = units.to_string();
    }

    pub fn set_default_language(&mut self, language: impl Into<String>) {
        self.default_language = language.into();
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("Failed to parse configuration TOML")
    }

    /// Load config from disk, or return defaults if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, use defaults.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(path)
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "meteo", "meteo-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}
