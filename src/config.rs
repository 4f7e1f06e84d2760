//! YAML configuration file support.
//!
//! Hosts that keep their pipeline settings in a file can describe the
//! processor there and load it at runtime. Every field has a default, so an
//! empty `processor:` section (or none at all) gives
//! [`ProcessorConfig::default`].
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! # doctext configuration
//! version: "1.0"
//! name: "pdf uploads"
//!
//! processor:
//!   version: 1
//!   chunk_size: 100
//!   strip_special_chars: false
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use processor::{DEFAULT_CHUNK_SIZE, ProcessorConfig};

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level YAML configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DoctextConfig {
    /// Configuration format version
    pub version: String,

    /// Optional configuration name/description
    #[serde(default)]
    pub name: Option<String>,

    /// Text processor configuration
    #[serde(default)]
    pub processor: ProcessorYamlConfig,
}

impl DoctextConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: DoctextConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// The processor section as the config type the pipeline takes.
    pub fn processor_config(&self) -> ProcessorConfig {
        ProcessorConfig {
            version: self.processor.version,
            chunk_size: self.processor.chunk_size,
            strip_special_chars: self.processor.strip_special_chars,
        }
    }

    fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.processor.validate()?;

        Ok(())
    }
}

impl Default for DoctextConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            processor: ProcessorYamlConfig::default(),
        }
    }
}

/// Processor YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessorYamlConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    #[serde(default)]
    pub strip_special_chars: bool,
}

impl ProcessorYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.version == 0 {
            return Err(ConfigLoadError::Validation(
                "processor.version must be >= 1".to_string(),
            ));
        }
        if self.chunk_size == 0 {
            return Err(ConfigLoadError::Validation(
                "processor.chunk_size must be >= 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ProcessorYamlConfig {
    fn default() -> Self {
        Self {
            version: 1,
            chunk_size: DEFAULT_CHUNK_SIZE,
            strip_special_chars: false,
        }
    }
}

fn default_version() -> u32 {
    1
}
fn default_chunk_size() -> usize {
    DEFAULT_CHUNK_SIZE
}
