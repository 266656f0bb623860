// ABOUTME: Configuration management for the service url evaluator
// ABOUTME: Handles loading endpoint settings from files and environment variables

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::template::{ServiceUrlEvaluator, UndefinedVariables};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub endpoint: EndpointConfig,

    #[serde(default)]
    pub undefined_variables: UndefinedVariables,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EndpointConfig {
    pub host: Option<String>,
    pub base: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// Output style for log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Compact,
    Full,
}

impl LoggingConfig {
    /// Unknown format names fall back to tracing-subscriber's full format
    pub fn log_format(&self) -> LogFormat {
        match self.format.to_ascii_lowercase().as_str() {
            "pretty" => LogFormat::Pretty,
            "compact" => LogFormat::Compact,
            _ => LogFormat::Full,
        }
    }
}

impl Config {
    /// Load configuration from file path or default locations
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) if !p.exists() => {
                return Err(anyhow!("Configuration file not found: {}", p.display()));
            }
            Some(p) => p,
            None => Self::find_config_file(),
        };

        let mut config = if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            serde_yaml::from_str(&contents)?
        } else {
            Config::default()
        };

        config.merge_env()?;
        Ok(config)
    }

    /// Find configuration file in standard locations
    fn find_config_file() -> PathBuf {
        let possible_paths = [
            "service-url.yaml",
            "service-url.yml",
            ".service-url.yaml",
            ".service-url.yml",
        ];

        for path in possible_paths {
            let path = PathBuf::from(path);
            if path.exists() {
                return path;
            }
        }

        if let Some(home_dir) = dirs::home_dir() {
            let home_config = home_dir.join(".service-url").join("config.yaml");
            if home_config.exists() {
                return home_config;
            }
        }

        // Default path (may not exist)
        PathBuf::from("service-url.yaml")
    }

    /// Merge environment variables into configuration
    fn merge_env(&mut self) -> Result<()> {
        if let Ok(host) = std::env::var("SERVICE_URL_ENDPOINT_HOST") {
            self.endpoint.host = Some(host);
        }
        if let Ok(base) = std::env::var("SERVICE_URL_ENDPOINT_BASE") {
            self.endpoint.base = Some(base);
        }
        if let Ok(policy) = std::env::var("SERVICE_URL_UNDEFINED_VARIABLES") {
            self.undefined_variables = policy.parse().map_err(|e: String| anyhow!(e))?;
        }

        if let Ok(level) = std::env::var("SERVICE_URL_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("SERVICE_URL_LOG_FORMAT") {
            self.logging.format = format;
        }

        Ok(())
    }

    /// Build an evaluator from the endpoint settings
    pub fn evaluator(&self) -> ServiceUrlEvaluator {
        ServiceUrlEvaluator::new(self.endpoint.host.clone(), self.endpoint.base.clone())
            .with_undefined_variables(self.undefined_variables)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = Config::default();

        assert!(config.endpoint.host.is_none());
        assert!(config.endpoint.base.is_none());
        assert_eq!(config.undefined_variables, UndefinedVariables::Empty);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = r#"
endpoint:
  host: https://api.example.org
  base: /services
undefined_variables: error
logging:
  level: debug
  format: compact
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.endpoint.host.as_deref(), Some("https://api.example.org"));
        assert_eq!(config.endpoint.base.as_deref(), Some("/services"));
        assert_eq!(config.undefined_variables, UndefinedVariables::Error);
        assert_eq!(config.logging.format, "compact");
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config: Config = serde_yaml::from_str("endpoint:\n  host: https://h\n").unwrap();

        assert_eq!(config.endpoint.host.as_deref(), Some("https://h"));
        assert!(config.endpoint.base.is_none());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_explicit_missing_config_file_fails() {
        let temp_dir = tempdir().unwrap();
        let missing = temp_dir.path().join("typo.yaml");

        let err = Config::load(Some(missing.clone())).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("Configuration file not found: {}", missing.display())
        );
    }

    #[test]
    fn test_log_format_names() {
        let mut logging = LoggingConfig::default();
        assert_eq!(logging.log_format(), LogFormat::Pretty);

        logging.format = "compact".to_string();
        assert_eq!(logging.log_format(), LogFormat::Compact);

        logging.format = "full".to_string();
        assert_eq!(logging.log_format(), LogFormat::Full);

        logging.format = "json".to_string();
        assert_eq!(logging.log_format(), LogFormat::Full);
    }

    #[test]
    fn test_evaluator_from_config() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("service-url.yaml");
        fs::write(
            &config_path,
            "endpoint:\n  host: https://api.example.org\n  base: /services\n",
        )
        .unwrap();

        let config = Config::load(Some(config_path)).unwrap();
        let evaluator = config.evaluator();
        assert_eq!(evaluator.endpoint(), Some("https://api.example.org/services"));
    }
}
