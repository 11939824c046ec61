use crate::algorithms::{AngleMetric, DEFAULT_RESAMPLE_COUNT};
use crate::logging::LoggingConfig;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub recognizer: RecognizerConfig,
    pub augmentation: AugmentationConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecognizerConfig {
    /// Points every stroke is resampled to before comparison
    pub resample_count: usize,
    /// `raw` reproduces plain angle subtraction; `wrapped` takes the shortest arc
    pub angle_metric: AngleMetric,
    /// Preprocess templates once at construction instead of on every call
    pub precompute_templates: bool,
}

/// Ranges for synthetic stroke variants used by benchmarks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AugmentationConfig {
    pub translation_range: (f64, f64),
    pub scale_range: (f64, f64),
    pub rotation_range_degrees: (f64, f64),
    /// Standard deviation of per-point jitter, as a fraction of the stroke's bounding-box diagonal
    pub jitter_std: f64,
    /// Number of points each variant is re-densified to before jitter
    pub point_count_range: (usize, usize),
    pub variants_per_template: usize,
    pub seed: Option<u64>,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            resample_count: DEFAULT_RESAMPLE_COUNT,
            angle_metric: AngleMetric::Wrapped,
            precompute_templates: true,
        }
    }
}

impl Default for AugmentationConfig {
    fn default() -> Self {
        Self {
            translation_range: (-100.0, 100.0),
            scale_range: (50.0, 300.0),
            rotation_range_degrees: (-10.0, 10.0),
            jitter_std: 0.01,
            point_count_range: (10, 80),
            variants_per_template: 25,
            seed: None,
        }
    }
}

impl Config {
    /// Loads TOML, or JSON when the content starts with `{`.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;

        if content.trim_start().starts_with('{') {
            serde_json::from_str(&content).with_context(|| format!("Invalid JSON config {:?}", path))
        } else {
            toml::from_str(&content).with_context(|| format!("Invalid TOML config {:?}", path))
        }
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P, format: ConfigFormat) -> anyhow::Result<()> {
        let content = match format {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };

        fs::write(path.as_ref(), content)
            .with_context(|| format!("Failed to write config file {:?}", path.as_ref()))?;
        Ok(())
    }

    /// Collects every problem rather than stopping at the first.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.recognizer.resample_count < 2 {
            errors.push("Recognizer resample_count must be at least 2".to_string());
        }

        let aug = &self.augmentation;
        if aug.translation_range.0 > aug.translation_range.1 {
            errors.push("Augmentation translation_range min must not exceed max".to_string());
        }
        if aug.scale_range.0 <= 0.0 || aug.scale_range.0 > aug.scale_range.1 {
            errors.push("Augmentation scale_range must be positive with min <= max".to_string());
        }
        if aug.rotation_range_degrees.0 > aug.rotation_range_degrees.1 {
            errors.push("Augmentation rotation_range_degrees min must not exceed max".to_string());
        }
        if aug.jitter_std < 0.0 || !aug.jitter_std.is_finite() {
            errors.push("Augmentation jitter_std must be a non-negative number".to_string());
        }
        if aug.point_count_range.0 < 2 || aug.point_count_range.0 > aug.point_count_range.1 {
            errors.push("Augmentation point_count_range must start at 2 or more with min <= max".to_string());
        }

        if let Err(e) = self.logging.validate() {
            errors.push(e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum ConfigFormat {
    Json,
    Toml,
}

pub fn load_config_or_default(config_path: Option<&Path>) -> Config {
    match config_path {
        Some(path) => match Config::load_from_file(path) {
            Ok(config) => {
                if let Err(errors) = config.validate() {
                    eprintln!("Configuration validation errors:");
                    for error in errors {
                        eprintln!("  - {}", error);
                    }
                    eprintln!("Using default configuration instead.");
                    Config::default()
                } else {
                    config
                }
            }
            Err(e) => {
                eprintln!("Failed to load config from {:?}: {:#}", path, e);
                eprintln!("Using default configuration.");
                Config::default()
            }
        },
        None => Config::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.recognizer.resample_count, 64);
        assert_eq!(config.recognizer.angle_metric, AngleMetric::Wrapped);
    }

    #[test]
    fn test_validation_reports_all_errors() {
        let mut config = Config::default();
        config.recognizer.resample_count = 1;
        config.augmentation.scale_range = (0.0, 1.0);
        config.logging.global_level = "noisy".to_string();

        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_toml_and_json_round_trip() {
        let dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.recognizer.angle_metric = AngleMetric::Raw;
        config.augmentation.seed = Some(7);

        let toml_path = dir.path().join("config.toml");
        config.save_to_file(&toml_path, ConfigFormat::Toml).unwrap();
        assert_eq!(Config::load_from_file(&toml_path).unwrap(), config);

        let json_path = dir.path().join("config.json");
        config.save_to_file(&json_path, ConfigFormat::Json).unwrap();
        assert_eq!(Config::load_from_file(&json_path).unwrap(), config);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("partial.toml");
        fs::write(&path, "[recognizer]\nresample_count = 32\nangle_metric = \"raw\"\n").unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.recognizer.resample_count, 32);
        assert_eq!(config.recognizer.angle_metric, AngleMetric::Raw);
        assert!(config.recognizer.precompute_templates);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_invalid_file_falls_back_to_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[recognizer]\nresample_count = 1\n").unwrap();

        assert_eq!(load_config_or_default(Some(path.as_path())), Config::default());
        assert_eq!(load_config_or_default(Some(dir.path().join("missing.toml").as_path())), Config::default());
    }
}
