//! Route-locale binding
//!
//! URLs follow `/{locale}/{rest}`. The binder reads the active locale from the
//! live path on every call and switches locale by navigating to the same
//! path, query and fragment under a different locale prefix.

use crate::catalog::Catalog;
use crate::context::LocaleContext;
use crate::resolver::{LanguagePreference, LocaleResolver};
use crate::Locale;
use std::fmt;
use tracing::{debug, warn};

/// First path segment, ignoring any query or fragment
pub fn first_segment(path: &str) -> Option<&str> {
    path.trim_start_matches('/')
        .split(|c| c == '/' || c == '?' || c == '#')
        .next()
        .filter(|segment| !segment.is_empty())
}

/// Split a leading locale segment off `path`.
///
/// Matches whole segments only: `/english` keeps its prefix. The remainder is
/// empty or starts with `/`.
pub fn strip_locale(path: &str) -> (Option<Locale>, &str) {
    let Some(rest) = path.strip_prefix('/') else {
        return (None, path);
    };

    let (segment, remainder) = match rest.find('/') {
        Some(index) => rest.split_at(index),
        None => (rest, ""),
    };

    match Locale::from_short_code(segment) {
        Some(locale) => (Some(locale), remainder),
        None => (None, path),
    }
}

/// Prefix a locale-agnostic path with `/{locale}`
///
/// A relative `path` is made absolute first, so [`strip_locale`] inverts this
/// only for paths that are empty or start with `/`: `"connect"` comes back
/// as `"/connect"`.
pub fn localized_path(locale: Locale, path: &str) -> String {
    if path.is_empty() {
        format!("/{}", locale.short_code())
    } else if path.starts_with('/') {
        format!("/{}{}", locale.short_code(), path)
    } else {
        format!("/{}/{}", locale.short_code(), path)
    }
}

/// A navigable location: path plus optional query and fragment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    pub query: Option<String>,
    pub fragment: Option<String>,
}

impl Location {
    /// Parse `path?query#fragment`. An empty path becomes `/`.
    pub fn parse(target: &str) -> Self {
        let (rest, fragment) = match target.split_once('#') {
            Some((rest, fragment)) => (rest, Some(fragment.to_string())),
            None => (target, None),
        };
        let (path, query) = match rest.split_once('?') {
            Some((path, query)) => (path, Some(query.to_string())),
            None => (rest, None),
        };

        Self {
            path: if path.is_empty() { "/".to_string() } else { path.to_string() },
            query,
            fragment,
        }
    }

    /// Same query and fragment under `locale`. An empty remainder lands on
    /// the locale's root.
    pub fn with_locale(&self, locale: Locale) -> Self {
        let (_, rest) = strip_locale(&self.path);
        let rest = if rest == "/" { "" } else { rest };

        Self {
            path: localized_path(locale, rest),
            query: self.query.clone(),
            fragment: self.fragment.clone(),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)?;
        if let Some(query) = &self.query {
            write!(f, "?{}", query)?;
        }
        if let Some(fragment) = &self.fragment {
            write!(f, "#{}", fragment)?;
        }
        Ok(())
    }
}

/// Routing layer the binder drives
pub trait Navigator {
    /// Current location
    fn location(&self) -> Location;

    /// Navigate to `target`, adding a history entry
    fn push(&mut self, target: &str);

    /// Navigate to `target`, replacing the current history entry
    fn replace(&mut self, target: &str);
}

/// In-memory navigation history
#[derive(Debug, Clone)]
pub struct MemoryNavigator {
    entries: Vec<Location>,
    index: usize,
}

impl MemoryNavigator {
    /// History holding a single entry
    pub fn new(initial: &str) -> Self {
        Self {
            entries: vec![Location::parse(initial)],
            index: 0,
        }
    }

    /// Number of history entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: a history holds at least its initial entry
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All history entries, oldest first
    pub fn entries(&self) -> &[Location] {
        &self.entries
    }

    /// Step back one entry. Returns false at the start of history.
    pub fn back(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Step forward one entry. Returns false at the end of history.
    pub fn forward(&mut self) -> bool {
        if self.index + 1 >= self.entries.len() {
            return false;
        }
        self.index += 1;
        true
    }
}

impl Navigator for MemoryNavigator {
    fn location(&self) -> Location {
        self.entries
            .get(self.index)
            .cloned()
            .unwrap_or_else(|| Location::parse("/"))
    }

    fn push(&mut self, target: &str) {
        self.entries.truncate(self.index + 1);
        self.entries.push(Location::parse(target));
        self.index = self.entries.len() - 1;
    }

    fn replace(&mut self, target: &str) {
        let location = Location::parse(target);
        match self.entries.get_mut(self.index) {
            Some(entry) => *entry = location,
            None => self.entries.push(location),
        }
    }
}

/// Ties the URL path to the active locale and switches locale by navigation
#[derive(Debug)]
pub struct RouteLocaleBinder<N, P> {
    navigator: N,
    preference: P,
    resolver: LocaleResolver,
}

impl<N, P> RouteLocaleBinder<N, P>
where
    N: Navigator,
    P: LanguagePreference,
{
    /// Binder using the built-in default locale
    pub fn new(navigator: N, preference: P) -> Self {
        Self::with_resolver(navigator, preference, LocaleResolver::default())
    }

    /// Binder with a custom resolver
    pub fn with_resolver(navigator: N, preference: P, resolver: LocaleResolver) -> Self {
        Self {
            navigator,
            preference,
            resolver,
        }
    }

    /// Locale derived from the live path
    pub fn current_locale(&self) -> Locale {
        let location = self.navigator.location();
        let preference = self.preference.preferred_language();
        self.resolver
            .resolve(first_segment(&location.path), preference.as_deref())
    }

    /// Switch to the locale with short code `target`.
    ///
    /// Unsupported codes are ignored with a warning. Returns the location
    /// navigated to.
    pub fn switch_locale(&mut self, target: &str) -> Option<String> {
        match Locale::from_short_code(target) {
            Some(locale) => Some(self.switch_to(locale)),
            None => {
                warn!(
                    "Invalid locale: {}. Staying on {}",
                    target,
                    self.current_locale()
                );
                None
            }
        }
    }

    /// Switch to `locale`, keeping path, query and fragment
    pub fn switch_to(&mut self, locale: Locale) -> String {
        let target = self.navigator.location().with_locale(locale).to_string();
        debug!(%locale, "Switching locale to {}", target);
        self.navigator.push(&target);
        target
    }

    /// Prefix `path` with the current locale
    pub fn localized_path(&self, path: &str) -> String {
        localized_path(self.current_locale(), path)
    }

    /// Locale context for the current location
    pub fn context<'c>(&self, catalog: &'c Catalog) -> LocaleContext<'c> {
        LocaleContext::new(self.current_locale(), catalog)
    }

    /// Underlying navigator
    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Mutable access to the navigator, e.g. for back/forward
    pub fn navigator_mut(&mut self) -> &mut N {
        &mut self.navigator
    }
}
