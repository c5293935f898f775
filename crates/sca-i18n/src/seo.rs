//! Per-locale page metadata: title, description, canonical URL and
//! `hreflang` alternates

use crate::context::LocaleContext;
use crate::error::{I18nError, I18nResult};
use crate::keys::TranslationKey;
use crate::routing;
use crate::Locale;
use std::fmt::Write;
use url::Url;

/// One `<link rel="alternate">` entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alternate {
    /// Short code, or `x-default`
    pub hreflang: String,
    pub href: String,
}

/// Head metadata for a localized page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMetadata {
    pub lang: Locale,
    pub title: String,
    pub description: String,
    pub canonical_url: String,
    pub og_locale: &'static str,
    pub alternates: Vec<Alternate>,
}

impl PageMetadata {
    /// Metadata for the locale-agnostic `path` rendered in `ctx`
    pub fn for_page(ctx: &LocaleContext<'_>, base_url: &Url, path: &str) -> I18nResult<Self> {
        let locale = ctx.locale();
        let canonical_url = join(base_url, &routing::localized_path(locale, path))?;

        let mut alternates = Locale::all()
            .into_iter()
            .map(|alt| {
                Ok(Alternate {
                    hreflang: alt.short_code().to_string(),
                    href: join(base_url, &routing::localized_path(alt, path))?,
                })
            })
            .collect::<I18nResult<Vec<_>>>()?;

        let default_path = if path.is_empty() { "/" } else { path };
        alternates.push(Alternate {
            hreflang: "x-default".to_string(),
            href: join(base_url, default_path)?,
        });

        Ok(Self {
            lang: locale,
            title: ctx.t(TranslationKey::MetaTitle),
            description: ctx.t(TranslationKey::MetaDescription),
            canonical_url,
            og_locale: locale.og_locale(),
            alternates,
        })
    }

    /// Replace the page title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Render the `<head>` tags
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        let title = escape_html(&self.title);
        let description = escape_html(&self.description);
        let canonical = escape_html(&self.canonical_url);

        // Writing into a String cannot fail.
        let _ = writeln!(html, "<title>{}</title>", title);
        let _ = writeln!(html, r#"<meta name="description" content="{}">"#, description);
        let _ = writeln!(html, r#"<meta property="og:title" content="{}">"#, title);
        let _ = writeln!(html, r#"<meta property="og:description" content="{}">"#, description);
        let _ = writeln!(html, r#"<meta property="og:url" content="{}">"#, canonical);
        let _ = writeln!(html, r#"<meta property="og:locale" content="{}">"#, self.og_locale);
        let _ = writeln!(html, r#"<link rel="canonical" href="{}">"#, canonical);
        for alternate in &self.alternates {
            let _ = writeln!(
                html,
                r#"<link rel="alternate" hreflang="{}" href="{}">"#,
                escape_html(&alternate.hreflang),
                escape_html(&alternate.href)
            );
        }
        html
    }
}

/// Escape text for HTML element content and quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Resolve `path` below `base_url`, keeping any path prefix of the base.
///
/// The path is always joined as a relative reference, so a request path
/// such as `//other.host/x` or `http:x` cannot leave the base URL.
fn join(base_url: &Url, path: &str) -> I18nResult<String> {
    let mut base = base_url.clone();
    base.set_query(None);
    base.set_fragment(None);
    if !base.path().ends_with('/') {
        let prefixed = format!("{}/", base.path());
        base.set_path(&prefixed);
    }

    let relative = format!("./{}", path.trim_start_matches(['/', '\\']));
    base.join(&relative)
        .map(String::from)
        .map_err(|source| I18nError::InvalidUrl {
            url: format!("{}{}", base_url, path),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://www.saddlecompanyargentina.com").unwrap()
    }

    #[test]
    fn test_for_page_home() {
        let ctx = LocaleContext::embedded(Locale::German);
        let meta = PageMetadata::for_page(&ctx, &base(), "").unwrap();

        assert_eq!(meta.lang, Locale::German);
        assert_eq!(meta.canonical_url, "https://www.saddlecompanyargentina.com/de");
        assert_eq!(meta.og_locale, "de_DE");
        assert_eq!(meta.title, ctx.t(TranslationKey::MetaTitle));
        assert_eq!(meta.alternates.len(), 4);
        assert_eq!(meta.alternates[3].hreflang, "x-default");
        assert_eq!(meta.alternates[3].href, "https://www.saddlecompanyargentina.com/");
    }

    #[test]
    fn test_for_page_subpath_alternates() {
        let ctx = LocaleContext::embedded(Locale::Spanish);
        let meta = PageMetadata::for_page(&ctx, &base(), "/connect").unwrap();

        let hrefs: Vec<&str> = meta.alternates.iter().map(|a| a.href.as_str()).collect();
        assert_eq!(
            hrefs,
            vec![
                "https://www.saddlecompanyargentina.com/en/connect",
                "https://www.saddlecompanyargentina.com/es/connect",
                "https://www.saddlecompanyargentina.com/de/connect",
                "https://www.saddlecompanyargentina.com/connect",
            ]
        );
    }

    #[test]
    fn test_for_page_keeps_links_on_base_host() {
        let ctx = LocaleContext::embedded(Locale::Spanish);

        for path in ["//evil.example/x", "/\\evil.example/x", "/http:evil.example/x"] {
            let meta = PageMetadata::for_page(&ctx, &base(), path).unwrap();
            assert!(meta
                .canonical_url
                .starts_with("https://www.saddlecompanyargentina.com/es/"));
            for alternate in &meta.alternates {
                assert!(
                    alternate.href.starts_with("https://www.saddlecompanyargentina.com/"),
                    "{} escaped the base URL",
                    alternate.href
                );
            }
        }
    }

    #[test]
    fn test_for_page_keeps_base_path_prefix() {
        let ctx = LocaleContext::embedded(Locale::German);
        let base = Url::parse("https://sca.example.com/site").unwrap();
        let meta = PageMetadata::for_page(&ctx, &base, "/connect").unwrap();

        assert_eq!(meta.canonical_url, "https://sca.example.com/site/de/connect");
        assert_eq!(meta.alternates[3].href, "https://sca.example.com/site/connect");
    }

    #[test]
    fn test_to_html_escapes() {
        let ctx = LocaleContext::embedded(Locale::English);
        let meta = PageMetadata::for_page(&ctx, &base(), "")
            .unwrap()
            .with_title("Saddles & \"Bridles\"");
        let html = meta.to_html();

        assert!(html.contains("<title>Saddles &amp; &quot;Bridles&quot;</title>"));
        assert!(html.contains(r#"<link rel="alternate" hreflang="es" href="https://www.saddlecompanyargentina.com/es">"#));
        assert!(html.contains(r#"<meta property="og:locale" content="en_US">"#));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<a href='x'>"), "&lt;a href=&#39;x&#39;&gt;");
        assert_eq!(escape_html("Español"), "Español");
    }
}
