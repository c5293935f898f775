//! HTTP/1.1 front end on hyper and tokio.
//!
//! The server only adapts types: every request is answered by
//! [`SiteHandler::handle`], shared immutably across connections.

use crate::error::{SiteError, SiteResult};
use crate::handler::{SiteHandler, SiteRequest, SiteResponse};
use http_body_util::Full;
use hyper::body::{Bytes, Incoming};
use hyper::header::{HeaderName, HeaderValue, ACCEPT_LANGUAGE};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use std::convert::Infallible;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{debug, error, info, warn};

/// Bind a listener on `addr`.
pub async fn bind(addr: SocketAddr) -> SiteResult<TcpListener> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| SiteError::Bind { addr, source })
}

/// Serve until Ctrl-C.
pub async fn serve(listener: TcpListener, handler: Arc<SiteHandler>) -> SiteResult<()> {
    serve_with_shutdown(listener, handler, shutdown_signal()).await
}

/// Serve until `shutdown` resolves. Connections already accepted finish on
/// their own tasks.
pub async fn serve_with_shutdown<F>(
    listener: TcpListener,
    handler: Arc<SiteHandler>,
    shutdown: F,
) -> SiteResult<()>
where
    F: Future<Output = ()>,
{
    let local_addr = listener.local_addr()?;
    info!("Listening on http://{}", local_addr);

    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = &mut shutdown => {
                info!("Shutdown requested, no longer accepting connections");
                break;
            }
            accept = listener.accept() => {
                let (stream, remote_addr) = match accept {
                    Ok(value) => value,
                    Err(e) => {
                        warn!("Failed to accept connection: {}", e);
                        continue;
                    }
                };
                let handler = handler.clone();
                let service = service_fn(move |req| {
                    let handler = handler.clone();
                    async move { handle_request(req, remote_addr, &handler) }
                });
                tokio::spawn(async move {
                    if let Err(e) = http1::Builder::new()
                        .keep_alive(true)
                        .serve_connection(TokioIo::new(stream), service)
                        .await
                    {
                        debug!(%remote_addr, "Connection closed with error: {}", e);
                    }
                });
            }
        }
    }

    Ok(())
}

/// Resolves on Ctrl-C.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}

fn handle_request(
    req: Request<Incoming>,
    remote_addr: SocketAddr,
    handler: &SiteHandler,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let request = build_request(&req);
    let response = handler.handle(&request);

    info!(
        %remote_addr,
        method = %request.method,
        path = %request.path,
        status = response.status,
        "Request served"
    );

    Ok(convert_response(response).unwrap_or_else(|message| {
        error!("Failed to build response: {}", message);
        let mut response = Response::new(Full::from(Bytes::from("Internal Server Error")));
        *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
        response
    }))
}

fn build_request<B>(req: &Request<B>) -> SiteRequest {
    SiteRequest {
        method: req.method().as_str().to_string(),
        path: req.uri().path().to_string(),
        query: req.uri().query().map(str::to_string),
        accept_language: req
            .headers()
            .get(ACCEPT_LANGUAGE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string),
    }
}

fn convert_response(response: SiteResponse) -> Result<Response<Full<Bytes>>, String> {
    let status = StatusCode::from_u16(response.status).map_err(|e| e.to_string())?;
    let mut builder = Response::builder().status(status);
    {
        let headers = builder
            .headers_mut()
            .ok_or_else(|| "failed to access headers".to_string())?;
        for (name, value) in response.headers {
            let name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| e.to_string())?;
            let value = HeaderValue::from_str(&value).map_err(|e| e.to_string())?;
            headers.append(name, value);
        }
    }
    builder
        .body(Full::from(Bytes::from(response.body)))
        .map_err(|e| e.to_string())
}
