//! Configuration file support
//!
//! Settings given on the command line take precedence over the file.

use crate::error::CliError;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Processing configuration
    #[serde(default)]
    pub processing: ProcessingConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

/// Processing-related configuration
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct ProcessingConfig {
    /// Emit join markers and honor protected spans
    #[serde(default)]
    pub protected_dash_split: bool,
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct PerformanceConfig {
    /// Number of worker threads
    pub num_threads: Option<i64>,

    /// Lines per chunk
    pub chunk_size: Option<usize>,

    /// Cap on chunks submitted but not yet written
    pub max_in_flight: Option<usize>,
}

impl CliConfig {
    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Parse configuration from TOML text
    pub fn parse(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| CliError::ConfigError(e.to_string()).into())
    }
}
