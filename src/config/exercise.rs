//! Settings for the stanza reading exercise.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::ConfigFormat;
use crate::error::ConfigError;

/// Environment variable naming the config file read by `from_env`.
pub const CONFIG_ENV: &str = "STANZAIO_CONFIG";

/// Configuration for the demonstration routines.
///
/// Every field has a default, so an empty file is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExerciseConfig {
    /// Directory the stanza paths and the write target are relative to
    pub base_dir: PathBuf,
    /// Number of stanzas in poem two
    pub stanza_count: usize,
    /// Upper bound of the random delay before each read, in milliseconds
    pub jitter_ms: u64,
    /// Target of the single write routine
    pub write_target: String,
    /// Content written by the single write routine
    pub write_content: String,
    /// Fixed index of the stanza replaced by a missing file; random when absent
    pub fault_index: Option<usize>,
}

impl Default for ExerciseConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            stanza_count: 8,
            jitter_ms: 200,
            write_target: "poem-three.txt".to_string(),
            write_content: "Lina and Caryn say hi".to_string(),
            fault_index: None,
        }
    }
}

impl ExerciseConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base directory.
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = dir.into();
        self
    }

    /// Set the jitter bound in milliseconds.
    pub fn with_jitter_ms(mut self, ms: u64) -> Self {
        self.jitter_ms = ms;
        self
    }

    /// Pin the fault-injected stanza.
    pub fn with_fault_index(mut self, index: usize) -> Self {
        self.fault_index = Some(index);
        self
    }

    /// Load a config file, picking the parser from the file extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)
            .ok_or_else(|| ConfigError::UnknownFormat(path.display().to_string()))?;

        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_str_with(&text, format)
    }

    /// Parse config text in the given format.
    pub fn from_str_with(text: &str, format: ConfigFormat) -> Result<Self, ConfigError> {
        let config: Self = match format {
            #[cfg(feature = "yaml")]
            ConfigFormat::Yaml => {
                // serde_yaml rejects an empty document; treat it as all defaults.
                if text.trim().is_empty() {
                    return Ok(Self::default());
                }
                serde_yaml::from_str(text)?
            }
            #[cfg(feature = "json")]
            ConfigFormat::Json => serde_json::from_str(text)?,
            #[allow(unreachable_patterns)]
            other => {
                return Err(ConfigError::UnknownFormat(format!(
                    "{other:?} (feature disabled)"
                )));
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Check that `fault_index`, when set, names an existing stanza.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.fault_index {
            Some(index) if index >= self.stanza_count => Err(ConfigError::FaultIndexOutOfRange {
                index,
                stanza_count: self.stanza_count,
            }),
            _ => Ok(()),
        }
    }

    /// Load the file named by `STANZAIO_CONFIG`, or the defaults when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_path(PathBuf::from(path)),
            None => Ok(Self::default()),
        }
    }
}
