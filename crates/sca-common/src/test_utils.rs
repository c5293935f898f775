//! Test utilities and shared test helpers for the SCA site workspace.
//!
//! Enabled for this crate's own tests and, through the `testing` feature, for
//! the dev-dependencies of the other workspace crates.

use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// Safe to call multiple times; only the first call installs a subscriber.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        // Another test harness may already own the global subscriber.
        let _ = fmt()
            .with_test_writer()
            .with_env_filter(filter)
            .try_init();
    });
}

/// Create a temporary directory for tests that automatically cleans up.
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Write `content` to `relative` under `root`, creating parent directories.
pub fn write_fixture(root: &Path, relative: &str, content: &str) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create fixture directory");
    }
    std::fs::write(&path, content).expect("Failed to write fixture file");
    path
}

/// Sample configuration documents shared by config and site tests.
pub mod fixtures {
    /// Smallest valid configuration: everything else falls back to defaults.
    pub fn minimal_config_yaml() -> &'static str {
        "site:\n  base_url: \"https://www.saddlecompanyargentina.com\"\n"
    }

    /// Configuration touching every section.
    pub fn full_config_yaml() -> &'static str {
        r#"site:
  bind_address: "0.0.0.0:9000"
  base_url: "https://sca.example.com"
  default_locale: "es"
  locales_dir: "/srv/sca/locales"
logging:
  level: "debug"
  format: "json"
  file: "/var/log/sca/site.log"
  include_spans: true
"#
    }
}
