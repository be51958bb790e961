use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

use crate::hooks::DEFAULT_HOOK_COUNT;
use crate::scoring::{ScoreWeights, TierThresholds};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid config {path}: {message}")]
    Invalid { path: PathBuf, message: String },

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("failed to write config {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HookConfig {
    pub default_count: usize,
}

impl Default for HookConfig {
    fn default() -> Self {
        Self {
            default_count: DEFAULT_HOOK_COUNT,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub weights: ScoreWeights,
    pub hooks: HookConfig,
    pub tiers: TierThresholds,
}

impl ScoringConfig {
    /// Loads the config at `path`, falling back to `VIRAL_CONFIG_PATH` and then
    /// `config/viral.toml`. A missing file yields the defaults. Returns the path
    /// that was consulted.
    pub fn load(path: Option<PathBuf>) -> Result<(Self, Option<PathBuf>), ConfigError> {
        let config_path = path.or_else(default_config_path);
        let mut config = match config_path.as_ref() {
            Some(path) if path.exists() => Self::from_file(path)?,
            _ => ScoringConfig::default(),
        };

        config.apply_env_overrides();
        Ok((config, config_path))
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: ScoringConfig =
            toml::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        if let Err(message) = config.validate() {
            return Err(ConfigError::Invalid {
                path: path.to_path_buf(),
                message,
            });
        }
        debug!(path = %path.display(), "loaded scoring config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        if !valid_reach_ceiling(self.weights.reach_ceiling) {
            return Err(format!(
                "weights.reach_ceiling must be a finite non-negative number, got {}",
                self.weights.reach_ceiling
            ));
        }
        Ok(())
    }

    pub fn write(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let payload = toml::to_string_pretty(self)?;
        std::fs::write(path, payload).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(ceiling) = env::var("VIRAL_REACH_CEILING") {
            match ceiling.parse::<f64>() {
                Ok(value) if valid_reach_ceiling(value) => {
                    self.weights.reach_ceiling = value;
                }
                _ => warn!(value = %ceiling, "ignoring invalid VIRAL_REACH_CEILING"),
            }
        }
        if let Ok(count) = env::var("VIRAL_HOOK_COUNT") {
            match count.parse::<usize>() {
                Ok(value) => self.hooks.default_count = value,
                Err(_) => warn!(value = %count, "ignoring invalid VIRAL_HOOK_COUNT"),
            }
        }
    }
}

fn valid_reach_ceiling(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

fn default_config_path() -> Option<PathBuf> {
    env::var("VIRAL_CONFIG_PATH")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| Some(PathBuf::from("config/viral.toml")))
}
