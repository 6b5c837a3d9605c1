//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults (heights 1..=10, 5 repeats, root 10)
//! 2. Global config: `$XDG_CONFIG_HOME/treebench/treebench.toml`
//! 3. Explicit config file passed with `--config`
//! 4. Environment variables: `TREEBENCH_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError as SourceError, Environment};
use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::application::DEFAULT_REPEAT;
use crate::domain::DEFAULT_ROOT;

/// Prefix of environment variables that override settings.
pub const ENV_PREFIX: &str = "TREEBENCH";

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid environment override for '{key}': {source}")]
    Env {
        key: String,
        #[source]
        source: SourceError,
    },
}

/// Benchmark parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// First tested height (inclusive)
    pub min_height: u32,
    /// Last tested height (inclusive)
    pub max_height: u32,
    /// Timed runs per height, the fastest is kept
    pub repeat: usize,
    /// Value of the root node
    pub root: i64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            min_height: 1,
            max_height: 10,
            repeat: DEFAULT_REPEAT,
            root: DEFAULT_ROOT,
        }
    }
}

/// Raw settings for intermediate parsing (`None` = not specified, inherit).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct RawSettings {
    pub min_height: Option<u32>,
    pub max_height: Option<u32>,
    pub repeat: Option<usize>,
    pub root: Option<i64>,
}

/// Get the XDG config directory for treebench.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "treebench").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("treebench.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, SettingsError> {
    let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads one key from the env source; a missing key is not an error.
fn env_value<T: DeserializeOwned>(config: &Config, key: &str) -> Result<Option<T>, SettingsError> {
    match config.get::<T>(key) {
        Ok(val) => Ok(Some(val)),
        Err(SourceError::NotFound(_)) => Ok(None),
        Err(source) => Err(SettingsError::Env {
            key: key.to_string(),
            source,
        }),
    }
}

impl Settings {
    /// Heights to benchmark, empty when `min_height > max_height`.
    pub fn heights(&self) -> Vec<u32> {
        (self.min_height..=self.max_height).collect()
    }

    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            min_height: overlay.min_height.unwrap_or(self.min_height),
            max_height: overlay.max_height.unwrap_or(self.max_height),
            repeat: overlay.repeat.unwrap_or(self.repeat),
            root: overlay.root.unwrap_or(self.root),
        }
    }

    /// Load settings with layered precedence, using the XDG global config file
    /// and `TREEBENCH_*` environment variables.
    pub fn load(explicit: Option<&Path>) -> Result<Self, SettingsError> {
        Self::load_layers(global_config_path().as_deref(), explicit, ENV_PREFIX)
    }

    /// Load settings from the given layers.
    ///
    /// # Arguments
    /// * `global` - Global config file, skipped if it does not exist
    /// * `explicit` - Config file that must exist if given
    /// * `env_prefix` - Prefix of environment variable overrides
    #[instrument(level = "debug")]
    pub fn load_layers(
        global: Option<&Path>,
        explicit: Option<&Path>,
        env_prefix: &str,
    ) -> Result<Self, SettingsError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config, optional
        if let Some(global_path) = global {
            if global_path.exists() {
                let raw = load_raw_settings(global_path)?;
                current = current.merge_with(&raw);
            }
        }

        // 3. Explicit config, required
        if let Some(path) = explicit {
            let raw = load_raw_settings(path)?;
            current = current.merge_with(&raw);
        }

        // 4. Environment variables
        current = Self::apply_env_overrides(current, env_prefix)?;

        debug!(?current, "settings loaded");
        Ok(current)
    }

    /// Apply `<PREFIX>_*` environment variables as explicit overrides.
    fn apply_env_overrides(settings: Self, env_prefix: &str) -> Result<Self, SettingsError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix(env_prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|source| SettingsError::Env {
                key: env_prefix.to_string(),
                source,
            })?;

        let raw = RawSettings {
            min_height: env_value(&config, "min_height")?,
            max_height: env_value(&config, "max_height")?,
            repeat: env_value(&config, "repeat")?,
            root: env_value(&config, "root")?,
        };
        Ok(settings.merge_with(&raw))
    }
}
