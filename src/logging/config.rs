//! Logging configuration
//!
//! Per-component log levels and output destinations.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const VALID_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Global log level (trace, debug, info, warn, error)
    pub global_level: String,

    /// Enable console output
    pub console_output: bool,

    /// Directory for daily rolling JSON log files (None = no file logging)
    pub log_directory: Option<PathBuf>,

    /// Include file location in logs
    pub include_file_location: bool,

    /// Level for the recognizer facade
    pub recognizer_level: String,

    /// Level for resample/normalize stages
    pub pipeline_level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            global_level: "info".to_string(),
            console_output: true,
            log_directory: None,
            include_file_location: false,
            recognizer_level: "info".to_string(),
            pipeline_level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Verbose configuration for local development
    pub fn development() -> Self {
        Self {
            global_level: "debug".to_string(),
            console_output: true,
            log_directory: Some(PathBuf::from("logs")),
            include_file_location: true,
            recognizer_level: "trace".to_string(),
            pipeline_level: "debug".to_string(),
        }
    }

    /// Console-only configuration with a single level for every component.
    pub fn with_level(level: &str) -> Self {
        Self {
            global_level: level.to_string(),
            recognizer_level: level.to_string(),
            pipeline_level: level.to_string(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        for (name, level) in [
            ("global_level", &self.global_level),
            ("recognizer_level", &self.recognizer_level),
            ("pipeline_level", &self.pipeline_level),
        ] {
            if !VALID_LEVELS.contains(&level.as_str()) {
                return Err(format!(
                    "Invalid {}: {}. Must be one of: {:?}",
                    name, level, VALID_LEVELS
                ));
            }
        }

        if let Some(ref log_dir) = self.log_directory {
            if let Some(parent) = log_dir.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    return Err(format!("Log directory parent does not exist: {:?}", parent));
                }
            }
        }

        Ok(())
    }

    /// Get the effective log level for a specific component
    pub fn get_component_level(&self, component: &str) -> &str {
        match component {
            "recognizer" => &self.recognizer_level,
            "pipeline" | "algorithms" => &self.pipeline_level,
            _ => &self.global_level,
        }
    }

    /// `EnvFilter` directives for `crate_name`, used when `RUST_LOG` is unset.
    pub fn filter_directives(&self, crate_name: &str) -> String {
        format!(
            "{krate}={global},{krate}::recognizer={recognizer},{krate}::pipeline={pipeline},{krate}::algorithms={pipeline}",
            krate = crate_name,
            global = self.global_level,
            recognizer = self.get_component_level("recognizer"),
            pipeline = self.get_component_level("pipeline"),
        )
    }
}
