//! Static host for the compiled DeepDoc site.
//!
//! Serves the output of the frontend build. Any path that is not a file
//! falls back to `index.html` so the client-side router can handle it.

use std::path::Path;

use axum::{Router, routing::get};
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

/// Create the site router.
pub fn create_router(site_root: &Path) -> Router {
    let index = site_root.join("index.html");

    Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(ServeDir::new(site_root).fallback(ServeFile::new(index)))
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> &'static str {
    "ok"
}

/// Initialize tracing with the specified verbosity level.
///
/// * `verbose` - Verbosity level (0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE)
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}

#[cfg(test)]
mod tests {
    use axum::body::{Body, to_bytes};
    use http::{Request, StatusCode, header};
    use tower::ServiceExt;

    use super::*;

    fn site() -> tempfile::TempDir {
        let dir = tempfile::tempdir().expect("create temp dir");
        std::fs::write(dir.path().join("index.html"), "<!DOCTYPE html><title>DeepDoc</title>")
            .expect("write index");
        std::fs::create_dir_all(dir.path().join("pkg")).expect("create pkg");
        std::fs::write(dir.path().join("pkg/deepdoc.wasm"), b"\0asm").expect("write wasm");
        dir
    }

    async fn get(router: Router, uri: &str) -> (StatusCode, Option<String>, Vec<u8>) {
        let response = router
            .oneshot(Request::get(uri).body(Body::empty()).expect("request"))
            .await
            .expect("response");
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body")
            .to_vec();
        (status, content_type, body)
    }

    #[tokio::test]
    async fn test_serves_index() {
        let site = site();
        let (status, _, body) = get(create_router(site.path()), "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.ends_with(b"<title>DeepDoc</title>"));
    }

    #[tokio::test]
    async fn test_unknown_path_falls_back_to_index() {
        let site = site();
        let (status, _, body) = get(create_router(site.path()), "/resultados").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.starts_with(b"<!DOCTYPE html>"));
    }

    #[tokio::test]
    async fn test_serves_wasm_with_mime_type() {
        let site = site();
        let (status, content_type, _) = get(create_router(site.path()), "/pkg/deepdoc.wasm").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("application/wasm"));
    }

    #[tokio::test]
    async fn test_healthz() {
        let site = site();
        let (status, _, body) = get(create_router(site.path()), "/healthz").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"ok");
    }
}
