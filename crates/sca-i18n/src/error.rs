//! Error types for internationalization operations
//!
//! Only catalog loading can fail. Resolution and lookup are total and
//! degrade to the default locale or the key itself instead.

use sca_common::ScaError;
use thiserror::Error;

/// Errors that can occur while building a translation catalog
#[derive(Error, Debug)]
pub enum I18nError {
    /// Failed to parse a language identifier
    #[error("Invalid language identifier: {0}")]
    InvalidLanguageId(String),

    /// Locale code outside the supported set
    #[error("Unsupported locale: {0}")]
    UnsupportedLocale(String),

    /// Failed to load a resource file
    #[error("Failed to load resource file: {path}")]
    ResourceLoadError {
        /// File that could not be read
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a Fluent resource
    #[error("Failed to parse Fluent resource for {locale}: {errors:?}")]
    FluentParseError {
        /// Locale of the resource
        locale: String,
        /// Parser messages
        errors: Vec<String>,
    },

    /// Bundle creation failed
    #[error("Failed to create bundle for locale {locale}: {errors:?}")]
    BundleCreationError {
        /// Locale of the bundle
        locale: String,
        /// Messages from `add_resource`
        errors: Vec<String>,
    },

    /// A page or link URL could not be built
    #[error("Invalid URL {url}: {source}")]
    InvalidUrl {
        /// URL as it would have been built
        url: String,
        /// Parser error
        #[source]
        source: url::ParseError,
    },
}

/// Result type for i18n operations
pub type I18nResult<T> = Result<T, I18nError>;

impl From<I18nError> for ScaError {
    fn from(err: I18nError) -> Self {
        let locale = match &err {
            I18nError::FluentParseError { locale, .. }
            | I18nError::BundleCreationError { locale, .. } => Some(locale.clone()),
            I18nError::UnsupportedLocale(code) | I18nError::InvalidLanguageId(code) => {
                Some(code.clone())
            }
            I18nError::ResourceLoadError { .. } | I18nError::InvalidUrl { .. } => None,
        };
        ScaError::localization_with_source(err.to_string(), locale, err)
    }
}
