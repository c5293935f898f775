//! Configuration management for the SCA site
//!
//! Settings come from a YAML file (or built-in defaults) with `SCA_*`
//! environment variables layered on top, and are validated before use.

pub mod loader;
pub mod settings;
pub mod validation;

pub use loader::{ConfigError, ConfigLoader};
pub use settings::{Config, LoggingSettings, SiteConfig};
