//! Translation catalog: one Fluent bundle per supported locale
//!
//! The embedded catalog is compiled into the binary and validated for
//! completeness by the build script. Catalogs can also be built from a
//! directory on disk or from in-memory sources; those are not checked for
//! completeness, and missing messages surface through the accessor's
//! key fallback.

use crate::error::{I18nError, I18nResult};
use crate::keys::TranslationKey;
use crate::Locale;
use fluent::{FluentArgs, FluentResource};
use fluent_bundle::concurrent::FluentBundle;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::{debug, error, info, warn};

static EMBEDDED: Lazy<Catalog> = Lazy::new(Catalog::embedded);

/// The process-wide catalog compiled into the binary.
pub fn global() -> &'static Catalog {
    &EMBEDDED
}

fn embedded_source(locale: Locale) -> &'static str {
    match locale {
        Locale::English => include_str!("../locales/en/main.ftl"),
        Locale::Spanish => include_str!("../locales/es/main.ftl"),
        Locale::German => include_str!("../locales/de/main.ftl"),
    }
}

/// Immutable mapping of (locale, message id) to localized text
pub struct Catalog {
    bundles: HashMap<Locale, FluentBundle<FluentResource>>,
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog")
            .field("locales", &self.locales())
            .finish()
    }
}

impl Catalog {
    /// Build the catalog from the sources embedded at compile time
    pub fn embedded() -> Self {
        let mut bundles = HashMap::new();
        for locale in Locale::all() {
            match build_bundle(locale, embedded_source(locale).to_string()) {
                Ok(bundle) => {
                    bundles.insert(locale, bundle);
                }
                Err(e) => error!(%locale, "Skipping embedded catalog: {}", e),
            }
        }
        debug!("Embedded catalog ready with {} locales", bundles.len());
        Self { bundles }
    }

    /// Build a catalog from `(locale, fluent source)` pairs
    pub fn from_sources<I, S>(sources: I) -> I18nResult<Self>
    where
        I: IntoIterator<Item = (Locale, S)>,
        S: Into<String>,
    {
        let mut bundles = HashMap::new();
        for (locale, source) in sources {
            bundles.insert(locale, build_bundle(locale, source.into())?);
        }
        Ok(Self { bundles })
    }

    /// Load `{dir}/{code}/main.ftl` for every supported locale
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> I18nResult<Self> {
        let dir = dir.as_ref();
        let mut sources = Vec::new();

        for locale in Locale::all() {
            let path = dir.join(locale.resource_file());
            debug!("Loading resource file: {:?}", path);

            let content =
                fs::read_to_string(&path).map_err(|source| I18nError::ResourceLoadError {
                    path: path.to_string_lossy().to_string(),
                    source,
                })?;
            sources.push((locale, content));
        }

        let catalog = Self::from_sources(sources)?;
        info!("Loaded catalog from {}", dir.display());
        Ok(catalog)
    }

    /// Format message `id` for `locale`. `None` when the locale or the
    /// message is absent.
    pub fn format(&self, locale: Locale, id: &str, args: Option<&FluentArgs>) -> Option<String> {
        let bundle = self.bundles.get(&locale)?;
        let message = bundle.get_message(id)?;
        let pattern = message.value()?;

        let mut errors = Vec::new();
        let formatted = bundle.format_pattern(pattern, args, &mut errors);

        if !errors.is_empty() {
            debug!(
                %locale,
                "Formatting errors for message '{}': {:?}",
                id,
                errors
            );
        }

        Some(formatted.into_owned())
    }

    /// Check whether `locale` defines message `id`
    pub fn contains(&self, locale: Locale, id: &str) -> bool {
        self.bundles
            .get(&locale)
            .map(|bundle| bundle.has_message(id))
            .unwrap_or(false)
    }

    /// Locales with a bundle, in declaration order
    pub fn locales(&self) -> Vec<Locale> {
        let mut locales: Vec<Locale> = self.bundles.keys().copied().collect();
        locales.sort();
        locales
    }

    /// Keys without a message in `locale`
    pub fn missing_keys(&self, locale: Locale) -> Vec<TranslationKey> {
        let missing: Vec<TranslationKey> = TranslationKey::ALL
            .iter()
            .copied()
            .filter(|key| !self.contains(locale, key.id()))
            .collect();

        if !missing.is_empty() {
            warn!(%locale, "{} translation keys missing", missing.len());
        }
        missing
    }
}

fn build_bundle(locale: Locale, source: String) -> I18nResult<FluentBundle<FluentResource>> {
    let resource = FluentResource::try_new(source).map_err(|(_, errors)| {
        let error_messages: Vec<String> = errors.into_iter().map(|e| format!("{:?}", e)).collect();

        error!("Failed to parse Fluent resource: {:?}", error_messages);

        I18nError::FluentParseError {
            locale: locale.short_code().to_string(),
            errors: error_messages,
        }
    })?;

    let lang_id = locale.to_language_identifier()?;
    let mut bundle = FluentBundle::new_concurrent(vec![lang_id]);
    // Plain text output: no Unicode isolation marks around placeables.
    bundle.set_use_isolating(false);

    bundle.add_resource(resource).map_err(|errors| {
        let error_messages: Vec<String> = errors.into_iter().map(|e| format!("{:?}", e)).collect();

        error!("Failed to add resource to bundle: {:?}", error_messages);

        I18nError::BundleCreationError {
            locale: locale.short_code().to_string(),
            errors: error_messages,
        }
    })?;

    debug!(%locale, "Built bundle");
    Ok(bundle)
}
