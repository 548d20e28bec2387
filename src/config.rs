//! TOML configuration

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::types::AnalysisMode;
use crate::DEFAULT_MODEL_PATH;

/// Default config file looked up in the working directory
pub const DEFAULT_CONFIG_PATH: &str = "chatlens.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Your own display name in the chat, excluded from per-speaker reports
    #[serde(default)]
    pub self_name: Option<String>,
    #[serde(default)]
    pub mode: AnalysisMode,
    #[serde(default)]
    pub include_self: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    #[serde(default = "default_model_path")]
    pub path: String,
}

fn default_model_path() -> String {
    DEFAULT_MODEL_PATH.to_string()
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            path: default_model_path(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> crate::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load `chatlens.toml` if present, defaults otherwise
    pub fn load() -> crate::Result<Self> {
        if Path::new(DEFAULT_CONFIG_PATH).exists() {
            Self::from_file(DEFAULT_CONFIG_PATH)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config.model.path, DEFAULT_MODEL_PATH);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.analysis.mode, AnalysisMode::Both);
        assert!(config.analysis.self_name.is_none());
        assert!(!config.analysis.include_self);
    }

    #[test]
    fn test_partial_config() {
        let config = AppConfig::from_toml_str(
            r#"
            [analysis]
            self_name = "영희"
            mode = "rule"

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.analysis.self_name.as_deref(), Some("영희"));
        assert_eq!(config.analysis.mode, AnalysisMode::Rule);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.model.path, DEFAULT_MODEL_PATH);
    }

    #[test]
    fn test_bad_toml_is_config_error() {
        let err = AppConfig::from_toml_str("[analysis\nmode = 1").unwrap_err();
        assert!(matches!(err, crate::ChatlensError::Config(_)));
    }
}
