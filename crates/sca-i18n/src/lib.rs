//! Locale resolution and translation delivery for the SCA site
//!
//! This crate decides which language a page is rendered in and supplies the
//! text for it. It includes:
//!
//! - The supported [`Locale`] set and a total [`resolve`] function
//!   (path segment, then language preference, then default)
//! - An embedded Fluent [`Catalog`] checked for completeness at build time
//! - A closed [`TranslationKey`] enum and a lookup that falls back to the key
//! - Route-locale binding over a [`Navigator`], including locale switching
//!   that preserves path, query and fragment
//! - The root redirect, page metadata and contact deep links
//!
//! # Example
//!
//! ```rust
//! use sca_i18n::{LocaleContext, LocaleResolver, TranslationKey, catalog};
//!
//! let resolver = LocaleResolver::default();
//! let ctx = LocaleContext::from_path(&resolver, "/es/connect", None, catalog::global());
//!
//! assert_eq!(ctx.t(TranslationKey::NavServices), "Servicios");
//! assert_eq!(ctx.localized_path("/connect"), "/es/connect");
//! ```

pub mod accessor;
pub mod catalog;
pub mod contact;
pub mod context;
pub mod error;
pub mod keys;
pub mod locale;
pub mod redirect;
pub mod resolver;
pub mod routing;
pub mod seo;

pub use accessor::{t, translate, translate_id, translate_with_args};
pub use catalog::Catalog;
pub use contact::{mailto_link, whatsapp_link, ContactCard};
pub use context::LocaleContext;
pub use error::{I18nError, I18nResult};
pub use keys::TranslationKey;
pub use locale::Locale;
pub use redirect::{redirect_root, resolve_root_redirect, root_redirect_target};
pub use resolver::{
    parse_accept_language, preferred_from_accept_language, resolve, AcceptLanguage,
    EnvPreference, LanguagePreference, LocaleResolver,
};
pub use routing::{
    localized_path, strip_locale, Location, MemoryNavigator, Navigator, RouteLocaleBinder,
};
pub use seo::PageMetadata;

// Re-export commonly used Fluent types
pub use fluent::{FluentArgs, FluentValue};
