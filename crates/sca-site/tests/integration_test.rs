//! Integration tests for the sca-site server

use sca_common::test_utils::init_test_logging;
use sca_i18n::{Catalog, Locale, LocaleResolver};
use sca_site::{bind, serve_with_shutdown, SiteHandler, SiteRequest};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use url::Url;

struct TestServer {
    addr: SocketAddr,
    shutdown: oneshot::Sender<()>,
    task: JoinHandle<sca_site::SiteResult<()>>,
}

impl TestServer {
    async fn start(resolver: LocaleResolver) -> Self {
        init_test_logging();

        let handler = SiteHandler::new(
            Arc::new(Catalog::embedded()),
            resolver,
            Url::parse("https://www.saddlecompanyargentina.com").unwrap(),
        );
        let listener = bind("127.0.0.1:0".parse().unwrap()).await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (shutdown, rx) = oneshot::channel::<()>();
        let task = tokio::spawn(serve_with_shutdown(listener, Arc::new(handler), async move {
            let _ = rx.await;
        }));

        Self {
            addr,
            shutdown,
            task,
        }
    }

    async fn get(&self, path: &str, accept_language: Option<&str>) -> RawResponse {
        let mut stream = TcpStream::connect(self.addr).await.unwrap();
        let mut request = format!("GET {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n");
        if let Some(value) = accept_language {
            request.push_str(&format!("Accept-Language: {value}\r\n"));
        }
        request.push_str("\r\n");
        stream.write_all(request.as_bytes()).await.unwrap();

        let mut raw = Vec::new();
        stream.read_to_end(&mut raw).await.unwrap();
        RawResponse::parse(&String::from_utf8(raw).unwrap())
    }

    async fn stop(self) {
        self.shutdown.send(()).unwrap();
        self.task.await.unwrap().unwrap();
    }
}

struct RawResponse {
    status: u16,
    headers: Vec<(String, String)>,
    body: String,
}

impl RawResponse {
    fn parse(raw: &str) -> Self {
        let (head, body) = raw.split_once("\r\n\r\n").unwrap();
        let mut lines = head.lines();
        let status = lines.next().unwrap().split_whitespace().nth(1).unwrap().parse().unwrap();
        let headers = lines
            .filter_map(|line| line.split_once(':'))
            .map(|(name, value)| (name.trim().to_ascii_lowercase(), value.trim().to_string()))
            .collect();
        Self {
            status,
            headers,
            body: body.to_string(),
        }
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

#[tokio::test]
async fn test_root_redirect_follows_accept_language() {
    let server = TestServer::start(LocaleResolver::default()).await;

    let response = server.get("/", Some("es-AR,es;q=0.9,en;q=0.8")).await;
    assert_eq!(response.status, 302);
    assert_eq!(response.header("location"), Some("/es"));

    let response = server.get("/", Some("fr-FR")).await;
    assert_eq!(response.header("location"), Some("/en"));

    server.stop().await;
}

#[tokio::test]
async fn test_configured_default_applies_without_preference() {
    let server = TestServer::start(LocaleResolver::new(Locale::German)).await;

    let response = server.get("/", None).await;
    assert_eq!(response.status, 302);
    assert_eq!(response.header("location"), Some("/de"));

    server.stop().await;
}

#[tokio::test]
async fn test_unprefixed_page_is_redirected() {
    let server = TestServer::start(LocaleResolver::default()).await;

    let response = server.get("/connect", Some("de")).await;
    assert_eq!(response.status, 302);
    assert_eq!(response.header("location"), Some("/de/connect"));

    server.stop().await;
}

#[tokio::test]
async fn test_localized_pages_are_served() {
    let server = TestServer::start(LocaleResolver::default()).await;

    let home = server.get("/de", Some("es")).await;
    assert_eq!(home.status, 200);
    assert_eq!(home.header("content-language"), Some("de"));
    assert!(home.body.contains(r#"<html lang="de">"#));
    assert!(home
        .body
        .contains(r#"<link rel="alternate" hreflang="es" href="https://www.saddlecompanyargentina.com/es">"#));

    let connect = server.get("/es/qr", None).await;
    assert_eq!(connect.status, 200);
    assert!(connect.body.contains("wa.me/5401156650533"));

    let missing = server.get("/en/catalogue", None).await;
    assert_eq!(missing.status, 404);
    assert!(missing.body.contains(r#"<html lang="en">"#));

    server.stop().await;
}

#[tokio::test]
async fn test_health_endpoint() {
    let server = TestServer::start(LocaleResolver::default()).await;

    let response = server.get("/healthz", None).await;
    assert_eq!(response.status, 200);
    assert_eq!(response.body, "ok");

    server.stop().await;
}

#[test]
fn test_every_locale_prefix_renders_in_its_language() {
    let handler = SiteHandler::embedded(
        LocaleResolver::default(),
        Url::parse("https://www.saddlecompanyargentina.com").unwrap(),
    );

    for locale in Locale::all() {
        let response = handler.handle(&SiteRequest::get(&format!("/{}", locale.short_code())));
        assert_eq!(response.status, 200);
        assert_eq!(response.header("Content-Language"), Some(locale.short_code()));
        assert!(response
            .body
            .contains(&format!(r#"<html lang="{}">"#, locale.short_code())));
    }
}
