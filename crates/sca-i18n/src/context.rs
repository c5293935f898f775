//! Locale context: the locale active for one request or render pass
//!
//! A context is derived from explicit inputs (path and preference) every
//! time it is needed and borrows an immutable catalog, so nothing has to be
//! kept in sync between the URL and the rendered language.

use crate::accessor;
use crate::catalog::{self, Catalog};
use crate::keys::TranslationKey;
use crate::resolver::LocaleResolver;
use crate::routing;
use crate::Locale;
use fluent::{FluentArgs, FluentValue};

/// Locale bound to a catalog
#[derive(Debug, Clone, Copy)]
pub struct LocaleContext<'c> {
    locale: Locale,
    catalog: &'c Catalog,
}

impl<'c> LocaleContext<'c> {
    /// Bind `locale` to `catalog`
    pub const fn new(locale: Locale, catalog: &'c Catalog) -> Self {
        Self { locale, catalog }
    }

    /// Derive the context for a request path
    pub fn from_path(
        resolver: &LocaleResolver,
        path: &str,
        preference: Option<&str>,
        catalog: &'c Catalog,
    ) -> Self {
        let locale = resolver.resolve(routing::first_segment(path), preference);
        Self::new(locale, catalog)
    }

    /// Active locale
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    /// Catalog the context reads from
    pub const fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    /// Translate `key` in the active locale
    pub fn t(&self, key: TranslationKey) -> String {
        accessor::translate(self.catalog, self.locale, key)
    }

    /// Translate `key` with variables in the active locale
    pub fn t_with<'a, I, V>(&self, key: TranslationKey, args: I) -> String
    where
        I: IntoIterator<Item = (&'a str, V)>,
        V: Into<FluentValue<'a>>,
    {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(name, value);
        }
        accessor::translate_with_args(self.catalog, self.locale, key, &fluent_args)
    }

    /// Prefix a locale-agnostic path with the active locale
    pub fn localized_path(&self, path: &str) -> String {
        routing::localized_path(self.locale, path)
    }
}

impl LocaleContext<'static> {
    /// Context over the embedded catalog
    pub fn embedded(locale: Locale) -> Self {
        Self::new(locale, catalog::global())
    }
}
