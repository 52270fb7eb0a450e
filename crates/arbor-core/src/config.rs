//! Configuration for arbor
//!
//! Read from `config.toml` in `$ARBOR_CONFIG_DIR`, or in the platform config
//! directory (`~/.config/arbor/` on Linux) when the variable is unset. An
//! explicit path always wins. A missing file means defaults.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ArborError, Result};

pub use types::{
    ArborConfig, HalfLives, RecallConfig, ReconcileConfig, DEFAULT_CONTENT_CHANGE_THRESHOLD,
    DEFAULT_DEPTH_DECAY,
};

const CONFIG_DIR: &str = "arbor";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "ARBOR_CONFIG_DIR";

impl ArborConfig {
    /// Default location of the config file
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    ArborError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load from `explicit` if given, otherwise from the default location.
    ///
    /// An explicit path must exist; the default location may be absent.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(ArborError::InvalidConfig {
                        path: path.to_path_buf(),
                        reason: "file does not exist".to_string(),
                    });
                }
                Self::load(path)
            }
            None => match Self::default_path() {
                Ok(path) if path.exists() => Self::load(&path),
                Ok(_) => Ok(Self::default()),
                Err(e) => {
                    tracing::debug!(error = %e, "no config directory, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    /// Load and validate configuration from a file
    #[tracing::instrument(fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| ArborError::io_operation("read config", path.display(), e))?;
        let config: ArborConfig = toml::from_str(&content).map_err(|e| {
            ArborError::InvalidConfig {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
        })?;

        config.validate().map_err(|e| ArborError::InvalidConfig {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }
        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Render as TOML, every field spelled out
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| ArborError::Other(format!("failed to serialize config: {}", e)))
    }

    /// Reject values the algorithms cannot work with
    pub fn validate(&self) -> Result<()> {
        let threshold = self.reconcile.content_change_threshold;
        if !threshold.is_finite() || threshold <= 0.0 {
            crate::bail_invalid!("reconcile.content_change_threshold", threshold);
        }

        let decay = self.recall.depth_decay;
        if !(0.0..=1.0).contains(&decay) {
            crate::bail_invalid!("recall.depth_decay", decay);
        }

        let half_lives = &self.recall.half_life_days;
        for (name, days) in [
            ("flash_cards", half_lives.flash_cards),
            ("multiple_choice", half_lives.multiple_choice),
            ("open_ended", half_lives.open_ended),
            ("chat", half_lives.chat),
        ] {
            if !days.is_finite() || days <= 0.0 {
                return Err(ArborError::invalid_value(
                    &format!("recall.half_life_days.{}", name),
                    days,
                ));
            }
        }

        Ok(())
    }
}
