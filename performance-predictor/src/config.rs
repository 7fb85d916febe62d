use std::env;
use std::fmt;
use std::path::PathBuf;

const DEFAULT_MODEL_PATH: &str = "model/forest.json";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Top-level configuration for the predictor tools.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictorConfig {
    pub model: ModelConfig,
    pub telemetry: TelemetryConfig,
}

impl PredictorConfig {
    /// Read configuration from the process environment, after loading a
    /// `.env` file if one exists.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let path = lookup("PREDICTOR_MODEL_PATH")
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL_PATH.to_string());

        let disabled = match lookup("PREDICTOR_DISABLE_MODEL") {
            Some(value) => parse_flag("PREDICTOR_DISABLE_MODEL", &value)?,
            None => false,
        };

        let log_level =
            lookup("PREDICTOR_LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Ok(Self {
            model: ModelConfig {
                path: PathBuf::from(path),
                disabled,
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            model: ModelConfig {
                path: PathBuf::from(DEFAULT_MODEL_PATH),
                disabled: false,
            },
            telemetry: TelemetryConfig {
                log_level: DEFAULT_LOG_LEVEL.to_string(),
            },
        }
    }
}

/// Where the pretrained forest lives, and whether to use it at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelConfig {
    pub path: PathBuf,
    pub disabled: bool,
}

/// Tracing controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidFlag { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidFlag { key, value } => {
                write!(f, "{key} must be a boolean (1/0/true/false), got '{value}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            key,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = PredictorConfig::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config, PredictorConfig::default());
        assert_eq!(config.model.path, PathBuf::from("model/forest.json"));
        assert!(!config.model.disabled);
        assert_eq!(config.telemetry.log_level, "info");
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = PredictorConfig::from_lookup(lookup(&[
            ("PREDICTOR_MODEL_PATH", "/srv/models/v2.json"),
            ("PREDICTOR_DISABLE_MODEL", "TRUE"),
            ("PREDICTOR_LOG_LEVEL", "debug"),
        ]))
        .unwrap();

        assert_eq!(config.model.path, PathBuf::from("/srv/models/v2.json"));
        assert!(config.model.disabled);
        assert_eq!(config.telemetry.log_level, "debug");
    }

    #[test]
    fn blank_model_path_falls_back_to_default() {
        let config =
            PredictorConfig::from_lookup(lookup(&[("PREDICTOR_MODEL_PATH", "  ")])).unwrap();

        assert_eq!(config.model.path, PathBuf::from("model/forest.json"));
    }

    #[test]
    fn invalid_flag_is_rejected() {
        let err = PredictorConfig::from_lookup(lookup(&[("PREDICTOR_DISABLE_MODEL", "maybe")]))
            .unwrap_err();

        assert_eq!(
            err,
            ConfigError::InvalidFlag {
                key: "PREDICTOR_DISABLE_MODEL",
                value: "maybe".to_string(),
            }
        );
    }
}
