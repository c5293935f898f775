//! Configuration loading utilities

use crate::Config;
use sca_common::{LogFormat, Result as ScaResult, ScaError};
use sca_i18n::{I18nError, Locale};
use std::env;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML configuration: {0}")]
    ParseError(#[from] serde_yaml::Error),

    /// Configuration validation error
    #[error("Configuration validation failed: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParseError {
        var: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl From<ConfigError> for ScaError {
    fn from(err: ConfigError) -> Self {
        ScaError::config_with_source(err.to_string(), err)
    }
}

/// Variable naming an explicit configuration file
pub const CONFIG_PATH_VAR: &str = "SCA_CONFIG_PATH";

/// Configuration loader for the application
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a YAML file with environment variable overrides
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        Self::load_config_with(path, |var| env::var(var).ok())
    }

    /// Load a YAML file, taking overrides from `lookup` instead of the
    /// process environment
    pub fn load_config_with<P, F>(path: P, lookup: F) -> Result<Config, ConfigError>
    where
        P: AsRef<Path>,
        F: Fn(&str) -> Option<String>,
    {
        let path = path.as_ref();
        debug!("Reading configuration from {}", path.display());

        let content = std::fs::read_to_string(path)?;
        Self::load_str_with(&content, lookup)
    }

    /// Parse a YAML document, apply overrides and validate
    pub fn load_str_with<F>(content: &str, lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config: Config = serde_yaml::from_str(content)?;
        Self::apply_env_overrides_from(&mut config, lookup)?;
        config.validate_all()?;
        Ok(config)
    }

    /// Load configuration from environment variables and files
    ///
    /// Looks at `SCA_CONFIG_PATH`, then `config.yaml` and `config.yml` in the
    /// working directory, and falls back to defaults.
    pub fn load() -> ScaResult<Config> {
        Self::load_with(Path::new("."), |var| env::var(var).ok())
    }

    /// Same search as [`ConfigLoader::load`], rooted at `dir` and reading
    /// variables through `lookup`
    pub fn load_with<F>(dir: &Path, lookup: F) -> ScaResult<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let candidates = [dir.join("config.yaml"), dir.join("config.yml")];

        let config = if let Some(config_path) = lookup(CONFIG_PATH_VAR) {
            info!("Loading configuration from {}", config_path);
            Self::load_config_with(&config_path, lookup)?
        } else if let Some(path) = candidates.iter().find(|path| path.exists()) {
            info!("Loading configuration from {}", path.display());
            Self::load_config_with(path, lookup)?
        } else {
            info!("No configuration file found, using defaults");
            let mut config = Config::default();
            Self::apply_env_overrides_from(&mut config, &lookup)?;
            config.validate_all().map_err(ConfigError::ValidationError)?;
            config
        };

        Ok(config)
    }

    /// Apply `SCA_*` overrides read through `lookup`
    pub fn apply_env_overrides_from<F>(config: &mut Config, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Site configuration overrides
        if let Some(addr) = lookup("SCA_BIND_ADDRESS") {
            config.site.bind_address = addr;
        }

        if let Some(url) = lookup("SCA_BASE_URL") {
            config.site.base_url = url;
        }

        if let Some(code) = lookup("SCA_DEFAULT_LOCALE") {
            config.site.default_locale =
                Locale::from_short_code(code.trim()).ok_or_else(|| ConfigError::EnvParseError {
                    var: "SCA_DEFAULT_LOCALE".to_string(),
                    source: Box::new(I18nError::UnsupportedLocale(code.clone())),
                })?;
        }

        if let Some(dir) = lookup("SCA_LOCALES_DIR") {
            config.site.locales_dir = Some(dir);
        }

        // Logging configuration overrides
        if let Some(level) = lookup("SCA_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Some(json) = lookup("SCA_LOG_JSON") {
            let json: bool = json.trim().parse().map_err(|e| ConfigError::EnvParseError {
                var: "SCA_LOG_JSON".to_string(),
                source: Box::new(e),
            })?;
            config.logging.format = if json { LogFormat::Json } else { LogFormat::Pretty };
        }

        // Explicit format wins over SCA_LOG_JSON
        if let Some(format) = lookup("SCA_LOG_FORMAT") {
            config.logging.format =
                format.parse::<LogFormat>().map_err(|e| ConfigError::EnvParseError {
                    var: "SCA_LOG_FORMAT".to_string(),
                    source: Box::new(e),
                })?;
        }

        if let Some(file) = lookup("SCA_LOG_FILE") {
            config.logging.file = Some(file);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sca_common::test_utils::{create_temp_dir, fixtures, write_fixture};
    use std::collections::HashMap;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var: &str| vars.get(var).cloned()
    }

    #[test]
    fn test_load_full_yaml_config() {
        let config = ConfigLoader::load_str_with(fixtures::full_config_yaml(), no_env).unwrap();

        assert_eq!(config.site.bind_address, "0.0.0.0:9000");
        assert_eq!(config.site.base_url, "https://sca.example.com");
        assert_eq!(config.site.default_locale, Locale::Spanish);
        assert_eq!(config.site.locales_dir.as_deref(), Some("/srv/sca/locales"));
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert!(config.logging.include_spans);
    }

    #[test]
    fn test_load_minimal_config_uses_defaults() {
        let config = ConfigLoader::load_str_with(fixtures::minimal_config_yaml(), no_env).unwrap();

        assert_eq!(config.site.base_url, "https://www.saddlecompanyargentina.com");
        assert_eq!(config.site.bind_address, "127.0.0.1:8080");
        assert_eq!(config.site.default_locale, Locale::English);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_invalid_yaml() {
        let result = ConfigLoader::load_str_with("site:\n  base_url: [unclosed", no_env);
        assert!(matches!(result.unwrap_err(), ConfigError::ParseError(_)));
    }

    #[test]
    fn test_unsupported_locale_in_yaml() {
        let result = ConfigLoader::load_str_with("site:\n  default_locale: \"fr\"\n", no_env);
        assert!(matches!(result.unwrap_err(), ConfigError::ParseError(_)));
    }

    #[test]
    fn test_validation_error() {
        let result = ConfigLoader::load_str_with("site:\n  base_url: \"not_a_url\"\n", no_env);
        assert!(matches!(result.unwrap_err(), ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_environment_variable_overrides() {
        let lookup = env_from(&[
            ("SCA_BIND_ADDRESS", "0.0.0.0:80"),
            ("SCA_BASE_URL", "https://env.example.com"),
            ("SCA_DEFAULT_LOCALE", "de"),
            ("SCA_LOCALES_DIR", "/etc/sca/locales"),
            ("SCA_LOG_LEVEL", "warn"),
            ("SCA_LOG_JSON", "true"),
            ("SCA_LOG_FILE", "/tmp/sca.log"),
        ]);
        let config = ConfigLoader::load_str_with(fixtures::minimal_config_yaml(), lookup).unwrap();

        assert_eq!(config.site.bind_address, "0.0.0.0:80");
        assert_eq!(config.site.base_url, "https://env.example.com");
        assert_eq!(config.site.default_locale, Locale::German);
        assert_eq!(config.site.locales_dir.as_deref(), Some("/etc/sca/locales"));
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.file.as_deref(), Some("/tmp/sca.log"));
    }

    #[test]
    fn test_log_format_override() {
        let yaml = fixtures::minimal_config_yaml();

        let config =
            ConfigLoader::load_str_with(yaml, env_from(&[("SCA_LOG_FORMAT", "Compact")])).unwrap();
        assert_eq!(config.logging.format, LogFormat::Compact);

        let lookup = env_from(&[("SCA_LOG_JSON", "true"), ("SCA_LOG_FORMAT", "pretty")]);
        let config = ConfigLoader::load_str_with(yaml, lookup).unwrap();
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_env_parse_errors() {
        let yaml = fixtures::minimal_config_yaml();

        let result = ConfigLoader::load_str_with(yaml, env_from(&[("SCA_LOG_JSON", "maybe")]));
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::EnvParseError { ref var, .. } if var == "SCA_LOG_JSON"
        ));

        let result = ConfigLoader::load_str_with(yaml, env_from(&[("SCA_LOG_FORMAT", "xml")]));
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::EnvParseError { ref var, .. } if var == "SCA_LOG_FORMAT"
        ));

        let result = ConfigLoader::load_str_with(yaml, env_from(&[("SCA_DEFAULT_LOCALE", "fr")]));
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::EnvParseError { ref var, .. } if var == "SCA_DEFAULT_LOCALE"
        ));
    }

    #[test]
    fn test_missing_config_file() {
        let result = ConfigLoader::load_config_with("/nonexistent/path/config.yaml", no_env);
        assert!(matches!(result.unwrap_err(), ConfigError::IoError(_)));
    }

    #[test]
    fn test_load_with_falls_back_to_defaults() {
        let dir = create_temp_dir();
        let config = ConfigLoader::load_with(dir.path(), no_env).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_with_finds_config_yml() {
        let dir = create_temp_dir();
        write_fixture(dir.path(), "config.yml", fixtures::full_config_yaml());

        let config = ConfigLoader::load_with(dir.path(), no_env).unwrap();
        assert_eq!(config.site.bind_address, "0.0.0.0:9000");
    }

    #[test]
    fn test_config_error_converts_to_sca_error() {
        let err: ScaError = ConfigLoader::load_config_with("/nonexistent.yaml", no_env)
            .unwrap_err()
            .into();
        assert!(matches!(err, ScaError::Config { .. }));
    }
}
