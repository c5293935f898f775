//! Locale resolution
//!
//! Precedence, first match wins:
//! 1. the URL path segment, when it is a supported short code
//! 2. the caller's language preference, by primary subtag
//! 3. the default locale

use crate::Locale;
use std::env;
use tracing::trace;

/// Resolve the active locale with the built-in default
pub fn resolve(path_segment: Option<&str>, browser_preference: Option<&str>) -> Locale {
    LocaleResolver::default().resolve(path_segment, browser_preference)
}

/// Resolver with a configurable fallback locale
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocaleResolver {
    default_locale: Locale,
}

impl LocaleResolver {
    /// Create a resolver falling back to `default_locale`
    pub const fn new(default_locale: Locale) -> Self {
        Self { default_locale }
    }

    /// The locale returned when nothing else matches
    pub const fn default_locale(&self) -> Locale {
        self.default_locale
    }

    /// Resolve the active locale. Total: always yields a supported locale.
    pub fn resolve(&self, path_segment: Option<&str>, browser_preference: Option<&str>) -> Locale {
        if let Some(locale) = path_segment.and_then(Locale::from_short_code) {
            trace!(%locale, "Locale from path segment");
            return locale;
        }

        if let Some(locale) = browser_preference.and_then(Locale::from_language_tag) {
            trace!(%locale, "Locale from language preference");
            return locale;
        }

        self.default_locale
    }
}

/// Source of the caller's preferred language
pub trait LanguagePreference {
    /// A language tag such as `es` or `de-AT`, if the caller expressed one
    fn preferred_language(&self) -> Option<String>;
}

impl LanguagePreference for Option<String> {
    fn preferred_language(&self) -> Option<String> {
        self.clone()
    }
}

impl LanguagePreference for &str {
    fn preferred_language(&self) -> Option<String> {
        Some((*self).to_string())
    }
}

/// Preference taken from an HTTP `Accept-Language` header
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AcceptLanguage {
    ranges: Vec<String>,
}

impl AcceptLanguage {
    /// Parse a header value
    pub fn parse(header: &str) -> Self {
        Self {
            ranges: parse_accept_language(header),
        }
    }

    /// Language ranges, most preferred first
    pub fn ranges(&self) -> &[String] {
        &self.ranges
    }
}

impl LanguagePreference for AcceptLanguage {
    fn preferred_language(&self) -> Option<String> {
        self.ranges
            .iter()
            .find(|range| Locale::from_language_tag(range).is_some())
            .or_else(|| self.ranges.first())
            .cloned()
    }
}

/// Preference taken from the process environment
///
/// Checks `LANGUAGE`, `LC_ALL`, `LC_MESSAGES` and `LANG` in that order; the
/// first non-empty variable wins. `LANGUAGE` may hold a colon-separated list.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvPreference;

impl EnvPreference {
    const VARS: [&'static str; 4] = ["LANGUAGE", "LC_ALL", "LC_MESSAGES", "LANG"];

    /// Same lookup against an arbitrary variable source
    pub fn lookup_with<F>(lookup: F) -> Option<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::VARS
            .iter()
            .filter_map(|var| lookup(*var))
            .map(|value| value.trim().to_string())
            .find(|value| !value.is_empty())
            .and_then(|value| {
                value
                    .split(':')
                    .map(str::trim)
                    .find(|entry| !entry.is_empty())
                    .map(str::to_string)
            })
            // "C" and "POSIX" carry no language.
            .filter(|value| !matches!(value.as_str(), "C" | "POSIX"))
    }
}

impl LanguagePreference for EnvPreference {
    fn preferred_language(&self) -> Option<String> {
        Self::lookup_with(|var| env::var(var).ok())
    }
}

/// Parse an `Accept-Language` header into language ranges ordered by
/// descending quality. Ties keep header order; `q=0` and `*` are dropped.
pub fn parse_accept_language(header: &str) -> Vec<String> {
    let mut weighted: Vec<(u16, usize, String)> = header
        .split(',')
        .enumerate()
        .filter_map(|(position, item)| {
            let mut parts = item.split(';');
            let range = parts.next()?.trim();
            if range.is_empty() || range == "*" {
                return None;
            }

            let quality = parts
                .filter_map(|param| {
                    let (name, value) = param.split_once('=')?;
                    (name.trim().eq_ignore_ascii_case("q")).then(|| parse_quality(value.trim()))
                })
                .next()
                .unwrap_or(Some(1000))?;

            (quality > 0).then(|| (quality, position, range.to_string()))
        })
        .collect();

    weighted.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
    weighted.into_iter().map(|(_, _, range)| range).collect()
}

/// `q` value in thousandths; `None` when malformed.
fn parse_quality(value: &str) -> Option<u16> {
    let q: f32 = value.parse().ok()?;
    if !(0.0..=1.0).contains(&q) {
        return None;
    }
    Some((q * 1000.0).round() as u16)
}

/// Pick a language tag from an `Accept-Language` header, preferring ranges
/// whose primary subtag is supported
pub fn preferred_from_accept_language(header: &str) -> Option<String> {
    AcceptLanguage::parse(header).preferred_language()
}
