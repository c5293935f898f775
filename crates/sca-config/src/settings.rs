//! Application configuration structures

use sca_common::{LogFormat, LoggingConfig};
use sca_i18n::{Locale, LocaleResolver};
use serde::{Deserialize, Serialize};
use std::net::{AddrParseError, SocketAddr};
use url::Url;
use validator::Validate;

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct Config {
    /// HTTP front end and locale settings
    #[validate]
    pub site: SiteConfig,

    /// Logging configuration
    #[validate]
    pub logging: LoggingSettings,
}

/// Site configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct SiteConfig {
    /// Address the HTTP server listens on
    #[validate(custom(
        function = "crate::validation::validate_socket_addr",
        message = "Bind address must be host:port"
    ))]
    pub bind_address: String,

    /// Public origin used for canonical and alternate links
    #[validate(url(message = "Base URL must be a valid URL"))]
    #[validate(custom(
        function = "crate::validation::validate_base_url",
        message = "Base URL must be an http(s) origin"
    ))]
    pub base_url: String,

    /// Locale used when neither the path nor the visitor names one
    pub default_locale: Locale,

    /// Directory with `{code}/main.ftl` overrides; embedded catalogs when unset
    #[validate(custom(
        function = "crate::validation::validate_file_path",
        message = "Locales directory must be a valid path"
    ))]
    pub locales_dir: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".to_string(),
            base_url: "http://localhost:8080".to_string(),
            default_locale: Locale::default(),
            locales_dir: None,
        }
    }
}

impl SiteConfig {
    /// Parsed listen address
    pub fn socket_addr(&self) -> Result<SocketAddr, AddrParseError> {
        self.bind_address.parse()
    }

    /// Parsed public origin
    pub fn base_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.base_url)
    }

    /// Resolver falling back to the configured default locale
    pub fn resolver(&self) -> LocaleResolver {
        LocaleResolver::new(self.default_locale)
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LoggingSettings {
    /// Level or filter directives (`info`, `sca_site=debug,warn`)
    #[validate(custom(
        function = "crate::validation::validate_log_level",
        message = "Log level must be trace, debug, info, warn or error"
    ))]
    pub level: String,

    /// Output format
    pub format: LogFormat,

    /// Optional log file path
    #[validate(custom(
        function = "crate::validation::validate_file_path",
        message = "Log file must be a valid path"
    ))]
    pub file: Option<String>,

    /// Whether to log span open/close events
    pub include_spans: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
            file: None,
            include_spans: false,
        }
    }
}

impl LoggingSettings {
    /// Settings for `sca_common::init_logging`
    pub fn to_logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.level.clone(),
            format: self.format,
            file_path: self.file.clone(),
            include_spans: self.include_spans,
            ..LoggingConfig::default()
        }
    }
}

impl Config {
    /// Comprehensive validation of the entire configuration
    pub fn validate_all(&self) -> Result<(), validator::ValidationErrors> {
        self.validate()
    }
}
