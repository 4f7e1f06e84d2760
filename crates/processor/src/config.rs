//! Configuration for the text processing pipeline.
//!
//! [`ProcessorConfig`] only matters to [`process_text`](crate::process_text);
//! the standalone operations take their parameters directly.
//!
//! # Examples
//!
//! ```rust
//! use processor::{ProcessorConfig, DEFAULT_CHUNK_SIZE};
//!
//! let config = ProcessorConfig::default();
//! assert_eq!(config.version, 1);
//! assert_eq!(config.chunk_size, DEFAULT_CHUNK_SIZE);
//! assert!(!config.strip_special_chars);
//!
//! let small = ProcessorConfig::new().with_chunk_size(16);
//! assert!(small.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ProcessorError;

/// Words per chunk when the caller does not pick a size.
pub const DEFAULT_CHUNK_SIZE: usize = 100;

/// Configuration for [`process_text`](crate::process_text).
///
/// Serializes as:
///
/// ```json
/// {
///   "version": 1,
///   "chunk_size": 100,
///   "strip_special_chars": false
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ProcessorConfig {
    /// Configuration schema version.
    ///
    /// Must be >= 1; version 0 is reserved and rejected by
    /// [`validate`](Self::validate).
    pub version: u32,
    /// Number of words per chunk. Must be >= 1.
    pub chunk_size: usize,
    /// Run [`strip_special_chars`](crate::strip_special_chars) before
    /// cleaning.
    ///
    /// Off by default. Turning it on changes word counts for text with
    /// free-standing symbols (`"a & b"` has three words raw, two stripped).
    pub strip_special_chars: bool,
}

impl ProcessorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of words per chunk.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Enable or disable special character stripping.
    pub fn with_strip_special_chars(mut self, strip_special_chars: bool) -> Self {
        self.strip_special_chars = strip_special_chars;
        self
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ProcessorError> {
        if self.version == 0 {
            return Err(ProcessorError::InvalidConfig(
                "config version must be >= 1".into(),
            ));
        }
        if self.chunk_size == 0 {
            return Err(ProcessorError::InvalidChunkSize { chunk_size: 0 });
        }
        Ok(())
    }
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            version: 1,
            chunk_size: DEFAULT_CHUNK_SIZE,
            strip_special_chars: false,
        }
    }
}
