//! Study planner configuration types and loading

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::planner::PlannerConfig;

/// Main studyplan configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Subject file read when none is given on the command line
    #[serde(rename = "subjects-path")]
    pub subjects_path: PathBuf,

    /// Daily study budget; prompted for when unset
    #[serde(rename = "hours-per-day")]
    pub hours_per_day: Option<f64>,

    /// Allocation policy
    pub planner: PlannerConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            subjects_path: PathBuf::from(crate::DEFAULT_SUBJECTS_PATH),
            hours_per_day: None,
            planner: PlannerConfig::default(),
        }
    }
}

impl Config {
    /// Validate configuration before use
    pub fn validate(&self) -> Result<()> {
        if let Some(hours) = self.hours_per_day
            && !(hours.is_finite() && hours > 0.0)
        {
            return Err(eyre::eyre!("hours-per-day must be positive, got {}", hours));
        }
        self.planner.validate()?;
        Ok(())
    }

    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        // Try project-local config: .studyplan.yml
        let local_config = PathBuf::from(".studyplan.yml");
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    tracing::warn!("Failed to load config from {}: {}", local_config.display(), e);
                }
            }
        }

        // Try user config: ~/.config/studyplan/studyplan.yml
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("studyplan").join("studyplan.yml");
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        tracing::warn!("Failed to load config from {}: {}", user_config.display(), e);
                    }
                }
            }
        }

        tracing::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}
