//! Request handling, independent of the HTTP stack.

use crate::render::{self, PageView};
use crate::routes::{Page, Route};
use chrono::Datelike;
use sca_i18n::{
    localized_path, preferred_from_accept_language, root_redirect_target, Catalog, ContactCard,
    Locale, LocaleContext, LocaleResolver, Location, PageMetadata, TranslationKey,
};
use std::sync::Arc;
use tracing::{debug, error};
use url::Url;

const HTML: &str = "text/html; charset=utf-8";
const TEXT: &str = "text/plain; charset=utf-8";

/// An incoming request, reduced to what routing needs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteRequest {
    /// HTTP method, upper case.
    pub method: String,
    /// Request path without query.
    pub path: String,
    /// Raw query string, if any.
    pub query: Option<String>,
    /// `Accept-Language` header value, if any.
    pub accept_language: Option<String>,
}

impl SiteRequest {
    /// A `GET` request for `target` (`path?query`).
    pub fn get(target: &str) -> Self {
        let location = Location::parse(target);
        Self {
            method: "GET".to_string(),
            path: location.path,
            query: location.query,
            accept_language: None,
        }
    }

    /// Attach an `Accept-Language` header.
    pub fn with_accept_language(mut self, header: impl Into<String>) -> Self {
        self.accept_language = Some(header.into());
        self
    }

    fn is_head(&self) -> bool {
        self.method.eq_ignore_ascii_case("HEAD")
    }
}

/// Response produced by [`SiteHandler::handle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteResponse {
    /// Status code.
    pub status: u16,
    /// Header name/value pairs.
    pub headers: Vec<(String, String)>,
    /// Response body.
    pub body: String,
}

impl SiteResponse {
    fn new(status: u16, content_type: &str, body: String) -> Self {
        Self {
            status,
            headers: vec![("Content-Type".to_string(), content_type.to_string())],
            body,
        }
    }

    fn redirect(location: String) -> Self {
        Self {
            status: 302,
            headers: vec![
                ("Location".to_string(), location),
                ("Vary".to_string(), "Accept-Language".to_string()),
                ("Cache-Control".to_string(), "no-store".to_string()),
            ],
            body: String::new(),
        }
    }

    fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.push((name.to_string(), value.into()));
        self
    }

    /// First value of header `name`, case-insensitive.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Pure request handler: one immutable instance is shared by all connections.
#[derive(Debug)]
pub struct SiteHandler {
    catalog: Arc<Catalog>,
    resolver: LocaleResolver,
    base_url: Url,
    contact: ContactCard,
    year: i32,
}

impl SiteHandler {
    /// Handler serving `catalog` with links under `base_url`.
    pub fn new(catalog: Arc<Catalog>, resolver: LocaleResolver, base_url: Url) -> Self {
        Self {
            catalog,
            resolver,
            base_url,
            contact: ContactCard::company_contact(),
            year: chrono::Utc::now().year(),
        }
    }

    /// Handler over the embedded catalog.
    pub fn embedded(resolver: LocaleResolver, base_url: Url) -> Self {
        Self::new(Arc::new(Catalog::embedded()), resolver, base_url)
    }

    /// Fix the footer year.
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    /// Replace the contact shown on the connect page.
    pub fn with_contact(mut self, contact: ContactCard) -> Self {
        self.contact = contact;
        self
    }

    /// Route and render one request.
    pub fn handle(&self, request: &SiteRequest) -> SiteResponse {
        if !matches!(request.method.to_ascii_uppercase().as_str(), "GET" | "HEAD") {
            return SiteResponse::new(405, TEXT, "Method Not Allowed".to_string())
                .with_header("Allow", "GET, HEAD");
        }

        let mut response = match Route::parse(&request.path) {
            Route::Health => SiteResponse::new(200, TEXT, "ok".to_string()),
            Route::Root => {
                let locale = self.preferred_locale(request);
                SiteResponse::redirect(root_redirect_target(locale))
            }
            Route::Unlocalized(path) => {
                let locale = self.preferred_locale(request);
                let target = Location {
                    path: localized_path(locale, path),
                    query: request.query.clone(),
                    fragment: None,
                };
                SiteResponse::redirect(target.to_string())
            }
            Route::Page { locale, page } => self.page(request, locale, page),
        };

        debug!(
            method = %request.method,
            path = %request.path,
            status = response.status,
            "Handled request"
        );

        if request.is_head() {
            response.body.clear();
        }
        response
    }

    fn preferred_locale(&self, request: &SiteRequest) -> Locale {
        let preference = request
            .accept_language
            .as_deref()
            .and_then(preferred_from_accept_language);
        self.resolver.resolve(None, preference.as_deref())
    }

    fn page(&self, request: &SiteRequest, locale: Locale, page: Page) -> SiteResponse {
        match page {
            Page::ContactCard => self.contact_card(),
            _ => self.html_page(request, locale, page),
        }
    }

    fn contact_card(&self) -> SiteResponse {
        SiteResponse::new(200, "text/vcard; charset=utf-8", self.contact.to_vcard()).with_header(
            "Content-Disposition",
            format!("attachment; filename=\"{}\"", self.contact.vcard_filename()),
        )
    }

    fn html_page(&self, request: &SiteRequest, locale: Locale, page: Page) -> SiteResponse {
        let ctx = LocaleContext::new(locale, &self.catalog);
        let requested = localized_rest(&request.path);
        let meta = match PageMetadata::for_page(&ctx, &self.base_url, page.canonical_path(requested)) {
            Ok(meta) => meta,
            Err(e) => {
                error!(%locale, "Failed to build page metadata: {}", e);
                return SiteResponse::new(500, TEXT, "Internal Server Error".to_string());
            }
        };

        let view = PageView {
            meta: match page {
                Page::NotFound => meta.with_title(ctx.t(TranslationKey::NotFoundTitle)),
                _ => meta,
            },
            ctx,
            location: Location {
                path: request.path.clone(),
                query: request.query.clone(),
                fragment: None,
            },
            year: self.year,
        };

        let response = match page {
            Page::Home => SiteResponse::new(200, HTML, render::home_page(&view)),
            Page::Connect => SiteResponse::new(200, HTML, render::connect_page(&view, &self.contact)),
            _ => SiteResponse::new(404, HTML, render::not_found_page(&view)),
        };
        response.with_header("Content-Language", locale.short_code())
    }
}

/// Path below the locale segment.
fn localized_rest(path: &str) -> &str {
    sca_i18n::strip_locale(path).1
}
