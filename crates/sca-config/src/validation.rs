//! Custom validators for configuration fields

use std::net::SocketAddr;
use url::Url;
use validator::ValidationError;

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Validate a `host:port` socket address
pub fn validate_socket_addr(addr: &str) -> Result<(), ValidationError> {
    addr.parse::<SocketAddr>()
        .map(|_| ())
        .map_err(|_| ValidationError::new("invalid_socket_address"))
}

/// Validate that a URL is an absolute http(s) origin usable as a base
///
/// Redirects and in-page links are rooted at `/`, so the base may not carry
/// a path prefix, a query or a fragment.
pub fn validate_base_url(url: &str) -> Result<(), ValidationError> {
    let parsed = Url::parse(url).map_err(|_| ValidationError::new("invalid_url"))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ValidationError::new("unsupported_url_scheme"));
    }
    if parsed.cannot_be_a_base() || parsed.host_str().is_none() {
        return Err(ValidationError::new("url_without_host"));
    }
    if parsed.path() != "/" || parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(ValidationError::new("url_not_an_origin"));
    }
    Ok(())
}

/// Validate a level or a comma-separated list of `target=level` directives
pub fn validate_log_level(level: &str) -> Result<(), ValidationError> {
    let valid = !level.trim().is_empty()
        && level.split(',').all(|directive| {
            let level = directive
                .rsplit_once('=')
                .map_or(directive, |(_, level)| level)
                .trim()
                .to_ascii_lowercase();
            LOG_LEVELS.contains(&level.as_str())
        });

    if valid {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_log_level"))
    }
}

/// Validate file path (basic check for valid path characters)
pub fn validate_file_path(path: &str) -> Result<(), ValidationError> {
    if path.is_empty() {
        return Err(ValidationError::new("empty_file_path"));
    }

    let invalid_chars = ['<', '>', '"', '|', '?', '*', '\0'];
    if path.chars().any(|c| invalid_chars.contains(&c)) {
        return Err(ValidationError::new("invalid_file_path_characters"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_socket_addr() {
        assert!(validate_socket_addr("127.0.0.1:8080").is_ok());
        assert!(validate_socket_addr("[::1]:3000").is_ok());

        assert!(validate_socket_addr("").is_err());
        assert!(validate_socket_addr("localhost:8080").is_err());
        assert!(validate_socket_addr("127.0.0.1").is_err());
    }

    #[test]
    fn test_validate_base_url() {
        assert!(validate_base_url("https://www.saddlecompanyargentina.com").is_ok());
        assert!(validate_base_url("http://localhost:8080/").is_ok());

        assert!(validate_base_url("www.saddlecompanyargentina.com").is_err());
        assert!(validate_base_url("mailto:info@example.com").is_err());
        assert!(validate_base_url("ftp://example.com").is_err());
        assert!(validate_base_url("https://sca.example.com/site").is_err());
        assert!(validate_base_url("https://sca.example.com/?ref=qr").is_err());
    }

    #[test]
    fn test_validate_log_level() {
        assert!(validate_log_level("info").is_ok());
        assert!(validate_log_level("DEBUG").is_ok());
        assert!(validate_log_level("sca_site=debug,warn").is_ok());

        assert!(validate_log_level("").is_err());
        assert!(validate_log_level("loud").is_err());
        assert!(validate_log_level("sca_site=loud").is_err());
    }

    #[test]
    fn test_validate_file_path() {
        assert!(validate_file_path("/srv/sca/locales").is_ok());
        assert!(validate_file_path("./logs/site.log").is_ok());

        assert!(validate_file_path("").is_err());
        assert!(validate_file_path("logs/site?.log").is_err());
        assert!(validate_file_path("logs|site.log").is_err());
    }
}
