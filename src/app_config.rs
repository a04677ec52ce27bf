use anyhow::{anyhow, Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::path::Path;

use crate::renderers::OutputFormat;
use crate::validation::ValidationConfig;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// JSON-Schema used for structural conformance
    #[serde(default)]
    pub schema_path: Option<String>,

    /// Validation settings
    #[serde(default)]
    pub validation: ValidationConfig,

    /// Subtitle output settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Configuration for subtitle rendering
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OutputConfig {
    /// Format used when none is given on the command line
    #[serde(default)]
    pub default_format: OutputFormat,

    /// Prefix SRT/WebVTT cue text with the speaker id
    #[serde(default = "default_true")]
    pub include_speaker: bool,

    /// ASS script horizontal resolution
    #[serde(default = "default_play_res_x")]
    pub ass_play_res_x: u32,

    /// ASS script vertical resolution
    #[serde(default = "default_play_res_y")]
    pub ass_play_res_y: u32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::default(),
            include_speaker: true,
            ass_play_res_x: default_play_res_x(),
            ass_play_res_y: default_play_res_y(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<&LogLevel> for log::LevelFilter {
    fn from(level: &LogLevel) -> Self {
        match level {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_play_res_x() -> u32 {
    1920
}

fn default_play_res_y() -> u32 {
    1080
}

impl Config {
    /// Load configuration from a JSON file, or defaults if it does not exist
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            warn!("Config file not found at {:?}, using defaults.", path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to open config file: {:?}", path))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Save configuration as pretty JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let config_json = serde_json::to_string_pretty(self)
            .context("Failed to serialize config to JSON")?;
        std::fs::write(path.as_ref(), config_json)
            .with_context(|| format!("Failed to write config to file: {:?}", path.as_ref()))
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if let Some(schema_path) = &self.schema_path {
            if !Path::new(schema_path).is_file() {
                return Err(anyhow!("Schema file not found: {}", schema_path));
            }
        }

        if self.output.ass_play_res_x == 0 || self.output.ass_play_res_y == 0 {
            return Err(anyhow!("ASS play resolution must be non-zero"));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            schema_path: None,
            validation: ValidationConfig::default(),
            output: OutputConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
