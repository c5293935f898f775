//! Translation accessor
//!
//! Lookups never fail: a key that has no message for the requested locale
//! renders as the key itself, so untranslated text stays visible on the page.

use crate::catalog::{self, Catalog};
use crate::keys::TranslationKey;
use crate::Locale;
use fluent::FluentArgs;
use tracing::warn;

/// Look up `key` for `locale` in `catalog`
pub fn translate(catalog: &Catalog, locale: Locale, key: TranslationKey) -> String {
    translate_id(catalog, locale, key.id())
}

/// Look up `key` with variables for `locale` in `catalog`
pub fn translate_with_args(
    catalog: &Catalog,
    locale: Locale,
    key: TranslationKey,
    args: &FluentArgs,
) -> String {
    lookup(catalog, locale, key.id(), Some(args))
}

/// Look up a message by its raw id, for callers holding dynamic keys
pub fn translate_id(catalog: &Catalog, locale: Locale, id: &str) -> String {
    lookup(catalog, locale, id, None)
}

/// Look up `key` in the embedded catalog
pub fn t(locale: Locale, key: TranslationKey) -> String {
    translate(catalog::global(), locale, key)
}

fn lookup(catalog: &Catalog, locale: Locale, id: &str, args: Option<&FluentArgs>) -> String {
    match catalog.format(locale, id, args) {
        Some(text) => text,
        None => {
            warn!(%locale, "Missing translation for '{}'", id);
            id.to_string()
        }
    }
}
