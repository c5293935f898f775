//! URL routing table.

use sca_i18n::{strip_locale, Locale};

/// Health check path.
pub const HEALTH_PATH: &str = "/healthz";

/// Localized pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    /// Landing page with the concept, services and contact sections.
    Home,
    /// Digital business card reached from the trade fair QR code.
    Connect,
    /// vCard download for the connect page.
    ContactCard,
    /// Anything else under a locale prefix.
    NotFound,
}

/// Where a request path leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route<'a> {
    /// `/healthz`
    Health,
    /// The unqualified root.
    Root,
    /// A path without a locale prefix; redirected under the resolved locale.
    Unlocalized(&'a str),
    /// A page under `/{locale}`.
    Page {
        /// Locale named by the first segment.
        locale: Locale,
        /// Page addressed by the rest of the path.
        page: Page,
    },
}

impl<'a> Route<'a> {
    /// Match a request path (without query).
    pub fn parse(path: &'a str) -> Self {
        if path.is_empty() || path == "/" {
            return Self::Root;
        }
        if path == HEALTH_PATH {
            return Self::Health;
        }

        match strip_locale(path) {
            (Some(locale), rest) => Self::Page {
                locale,
                page: Page::from_rest(rest),
            },
            (None, _) => Self::Unlocalized(path),
        }
    }
}

impl Page {
    fn from_rest(rest: &str) -> Self {
        match rest.trim_end_matches('/') {
            "" => Self::Home,
            "/connect" | "/qr" => Self::Connect,
            "/connect/vcard" => Self::ContactCard,
            _ => Self::NotFound,
        }
    }

    /// Locale-agnostic path of the page, used for canonical links.
    pub fn canonical_path(self, requested: &str) -> &str {
        match self {
            Self::Home => "",
            Self::Connect => "/connect",
            Self::ContactCard => "/connect/vcard",
            Self::NotFound => requested,
        }
    }
}
