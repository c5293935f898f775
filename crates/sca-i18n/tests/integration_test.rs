//! Integration tests for the sca-i18n crate

use sca_common::test_utils::{create_temp_dir, init_test_logging, write_fixture};
use sca_i18n::{
    catalog, redirect_root, translate, AcceptLanguage, Catalog, I18nError, LanguagePreference,
    Locale, LocaleContext, MemoryNavigator, Navigator, PageMetadata, RouteLocaleBinder,
    TranslationKey,
};
use url::Url;

#[test]
fn test_every_key_is_translated_in_every_locale() {
    let catalog = catalog::global();
    for locale in Locale::all() {
        for key in TranslationKey::ALL {
            let text = translate(catalog, locale, *key);
            assert_ne!(text, key.id(), "{} missing for {}", key, locale);
            assert!(!text.is_empty());
        }
    }
}

#[test]
fn test_locales_differ_for_shared_keys() {
    let catalog = catalog::global();
    assert_eq!(translate(catalog, Locale::Spanish, TranslationKey::NavServices), "Servicios");
    assert_eq!(translate(catalog, Locale::German, TranslationKey::NavServices), "Leistungen");
    assert_eq!(translate(catalog, Locale::English, TranslationKey::NavServices), "Services");
}

#[test]
fn test_switch_then_read_back() {
    init_test_logging();

    for from in Locale::all() {
        for to in Locale::all() {
            let start = format!("/{}/connect", from.short_code());
            let mut binder = RouteLocaleBinder::new(MemoryNavigator::new(&start), None);

            binder.switch_to(to);
            assert_eq!(binder.current_locale(), to);
        }
    }
}

#[test]
fn test_switch_preserves_path_and_fragment() {
    let mut binder = RouteLocaleBinder::new(MemoryNavigator::new("/en/products#brands"), None);

    assert_eq!(binder.switch_locale("de").as_deref(), Some("/de/products#brands"));

    let location = binder.navigator().location();
    assert_eq!(location.path, "/de/products");
    assert_eq!(location.fragment.as_deref(), Some("brands"));
}

#[test]
fn test_switch_preserves_query() {
    let mut binder = RouteLocaleBinder::new(MemoryNavigator::new("/es/connect?ref=qr"), None);
    assert_eq!(binder.switch_locale("en").as_deref(), Some("/en/connect?ref=qr"));
}

#[test]
fn test_switch_adds_history_entry() {
    let mut binder = RouteLocaleBinder::new(MemoryNavigator::new("/en"), None);
    binder.switch_locale("es");
    binder.switch_locale("de");

    let paths: Vec<&str> = binder
        .navigator()
        .entries()
        .iter()
        .map(|entry| entry.path.as_str())
        .collect();
    assert_eq!(paths, vec!["/en", "/es", "/de"]);

    assert!(binder.navigator_mut().back());
    assert_eq!(binder.current_locale(), Locale::Spanish);
}

#[test]
fn test_root_redirect_replaces_history_entry() {
    let mut navigator = MemoryNavigator::new("/");
    let target = redirect_root(&mut navigator, &AcceptLanguage::parse("es-AR,es;q=0.9,en;q=0.5"));

    assert_eq!(target, "/es");
    assert_eq!(navigator.len(), 1);
    assert!(navigator.entries().iter().all(|entry| entry.path != "/"));
    assert_eq!(navigator.location().path, "/es");
}

#[test]
fn test_accept_language_honours_quality() {
    let preference = AcceptLanguage::parse("en;q=0.3, de;q=0.9, fr");
    assert_eq!(preference.ranges(), ["fr", "de", "en"]);
    assert_eq!(preference.preferred_language().as_deref(), Some("de"));
}

#[test]
fn test_context_from_binder() {
    let binder = RouteLocaleBinder::new(MemoryNavigator::new("/de/qr"), None);
    let ctx = binder.context(catalog::global());

    assert_eq!(ctx.locale(), Locale::German);
    assert_eq!(ctx.t(TranslationKey::NavContact), "Kontakt");
}

#[test]
fn test_catalog_from_dir() {
    let dir = create_temp_dir();
    write_fixture(dir.path(), "en/main.ftl", "nav_concept = Concept (override)");
    write_fixture(dir.path(), "es/main.ftl", "nav_concept = Concepto (override)");
    write_fixture(dir.path(), "de/main.ftl", "nav_concept = Konzept (override)");

    let catalog = Catalog::from_dir(dir.path()).unwrap();
    assert_eq!(
        translate(&catalog, Locale::Spanish, TranslationKey::NavConcept),
        "Concepto (override)"
    );
    assert_eq!(
        translate(&catalog, Locale::Spanish, TranslationKey::NavServices),
        "nav_services"
    );
    assert_eq!(catalog.missing_keys(Locale::German).len(), TranslationKey::ALL.len() - 1);
}

#[test]
fn test_catalog_from_dir_requires_every_locale() {
    let dir = create_temp_dir();
    write_fixture(dir.path(), "en/main.ftl", "nav_concept = Concept");

    let result = Catalog::from_dir(dir.path());
    assert!(matches!(result, Err(I18nError::ResourceLoadError { .. })));

    let err: sca_common::ScaError = result.unwrap_err().into();
    assert!(err.to_string().contains("main.ftl"));
}

#[test]
fn test_page_metadata_for_localized_page() {
    let base = Url::parse("https://sca.example.com").unwrap();
    let ctx = LocaleContext::embedded(Locale::Spanish);
    let meta = PageMetadata::for_page(&ctx, &base, "/connect").unwrap();

    assert_eq!(meta.canonical_url, "https://sca.example.com/es/connect");
    assert!(meta.to_html().contains(r#"hreflang="x-default" href="https://sca.example.com/connect""#));
}
