//! Application-wide error types using thiserror.

use sca_common::ScaError;

/// Errors raised while starting or running the site server.
#[derive(thiserror::Error, Debug)]
pub enum SiteError {
    /// Configuration or logging setup failed.
    #[error(transparent)]
    Config(#[from] ScaError),

    /// Translation catalog could not be loaded.
    #[error("Catalog error: {0}")]
    Catalog(#[from] sca_i18n::I18nError),

    /// The configured base URL is unusable.
    #[error("Invalid base URL: {0}")]
    BaseUrl(#[from] url::ParseError),

    /// The configured bind address is unusable.
    #[error("Invalid bind address: {0}")]
    BindAddress(#[from] std::net::AddrParseError),

    /// Binding the listener failed.
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        /// Address the server tried to listen on.
        addr: std::net::SocketAddr,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<sca_config::ConfigError> for SiteError {
    fn from(err: sca_config::ConfigError) -> Self {
        Self::Config(err.into())
    }
}

impl From<SiteError> for ScaError {
    fn from(err: SiteError) -> Self {
        match err {
            SiteError::Config(inner) => inner,
            other => ScaError::server_with_source(other.to_string(), other),
        }
    }
}

/// Result type for the site application.
pub type SiteResult<T> = Result<T, SiteError>;
