//! # Server Setup
//!
//! Router construction and HTTP server startup.
//!
//! Every path that is not `/health` is looked up in the dist directory.
//! Unknown paths get `index.html`, so reloading the page on any URL works.

// region: --- Imports
use std::path::Path;

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::DevServerConfig;
// endregion: --- Imports

// region: --- Router
/// Build the router serving `dist_dir`.
pub fn create_router(dist_dir: &Path) -> Router {
    let index = dist_dir.join("index.html");
    let static_files = ServeDir::new(dist_dir).fallback(ServeFile::new(index));

    Router::new()
        .route("/health", get(|| async { "OK" }))
        .fallback_service(static_files)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
// endregion: --- Router

// region: --- Server Setup
/// Initialize logging and serve until the process is stopped.
///
/// # Errors
///
/// Fails if the tracing subscriber is already set or the address cannot be bound.
pub async fn start_server(config: DevServerConfig) -> anyhow::Result<()> {
    init_tracing(&config.log_level)?;

    info!("Starbot dev server starting");
    info!("Serving from: {}", config.dist_dir.display());

    let app = create_router(&config.dist_dir);
    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;

    info!("SERVER READY: http://{}", config.bind_address);
    axum::serve(listener, app).await?;
    Ok(())
}

fn init_tracing(log_level: &str) -> anyhow::Result<()> {
    let filter = match log_level {
        "trace" | "debug" | "info" | "warn" | "error" => EnvFilter::new(log_level),
        _ => EnvFilter::new("info"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set tracing subscriber: {}", e))
}
// endregion: --- Server Setup

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use std::path::PathBuf;
    use tower::ServiceExt;

    fn web_dir() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("../web")
    }

    async fn get(uri: &str) -> (StatusCode, Option<String>, String) {
        let response = create_router(&web_dir())
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|v| v.to_str().unwrap().to_string());
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, content_type, String::from_utf8_lossy(&body).into_owned())
    }

    #[tokio::test]
    async fn test_health() {
        let (status, _, body) = get("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "OK");
    }

    #[tokio::test]
    async fn test_root_serves_index() {
        let (status, content_type, body) = get("/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(content_type.unwrap().starts_with("text/html"));
        assert!(body.contains("<title>Starbot</title>"));
    }

    #[tokio::test]
    async fn test_serves_assets() {
        let (status, content_type, body) = get("/style.css").await;
        assert_eq!(status, StatusCode::OK);
        assert!(content_type.unwrap().starts_with("text/css"));
        assert!(body.contains(".starfield"));
    }

    #[tokio::test]
    async fn test_unknown_path_falls_back_to_index() {
        let (status, _, body) = get("/some/client/route").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<title>Starbot</title>"));
    }

    #[tokio::test]
    async fn test_cors_header_present() {
        let response = create_router(&web_dir())
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header(header::ORIGIN, "http://localhost:3000")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "*"
        );
    }
}
