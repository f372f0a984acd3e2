pub mod config;

use axum::http::{header, HeaderValue, Method};
use axum::{routing::get, Router};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::{ConfigError, ServerConfig};

async fn health_check() -> &'static str {
    "OK"
}

/// Static site router: the health probe plus the built frontend, with any
/// unknown path answered by `index.html` so client-side routes resolve.
pub fn build_router(config: &ServerConfig) -> Result<Router, ConfigError> {
    let origin = config
        .frontend_url
        .parse::<HeaderValue>()
        .map_err(|_| ConfigError::InvalidFrontendUrl(config.frontend_url.clone()))?;

    let index = config.static_dir.join("index.html");
    let site = ServeDir::new(&config.static_dir).fallback(ServeFile::new(index));

    let app = Router::new()
        .route("/api/health", get(health_check))
        .fallback_service(site)
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(
            CorsLayer::new()
                .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
                .allow_origin(AllowOrigin::exact(origin))
                .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::ORIGIN])
                .expose_headers([header::CONTENT_TYPE, header::CONTENT_LENGTH]),
        );

    Ok(app)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use std::path::PathBuf;
    use tower::ServiceExt;

    const INDEX_HTML: &str = "<!DOCTYPE html><title>HACKTROPICA</title>";

    struct TempSite {
        dir: PathBuf,
    }

    impl TempSite {
        fn new() -> Self {
            let dir = std::env::temp_dir().join(format!("hacktropica-site-{}", uuid::Uuid::new_v4()));
            std::fs::create_dir_all(&dir).unwrap();
            std::fs::write(dir.join("index.html"), INDEX_HTML).unwrap();
            std::fs::write(dir.join("robots.txt"), "User-agent: *\n").unwrap();
            Self { dir }
        }

        fn config(&self) -> ServerConfig {
            ServerConfig {
                environment: config::Environment::Development,
                port: 0,
                static_dir: self.dir.clone(),
                frontend_url: "http://localhost:8080".to_string(),
            }
        }
    }

    impl Drop for TempSite {
        fn drop(&mut self) {
            let _ = std::fs::remove_dir_all(&self.dir);
        }
    }

    async fn send_get(app: Router, uri: &str) -> (StatusCode, axum::http::HeaderMap, String) {
        let response = app
            .oneshot(
                Request::builder()
                    .uri(uri)
                    .header(header::ORIGIN, "http://localhost:8080")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, headers, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_health_check() {
        let site = TempSite::new();
        let app = build_router(&site.config()).unwrap();
        let (status, _, body) = send_get(app, "/api/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "OK");
    }

    #[tokio::test]
    async fn test_serves_static_file() {
        let site = TempSite::new();
        let app = build_router(&site.config()).unwrap();
        let (status, _, body) = send_get(app, "/robots.txt").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "User-agent: *\n");
    }

    #[tokio::test]
    async fn test_root_serves_index() {
        let site = TempSite::new();
        let app = build_router(&site.config()).unwrap();
        let (status, _, body) = send_get(app, "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, INDEX_HTML);
    }

    #[tokio::test]
    async fn test_unknown_route_falls_back_to_index() {
        let site = TempSite::new();
        let app = build_router(&site.config()).unwrap();
        let (status, _, body) = send_get(app, "/some/client/route").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, INDEX_HTML);
    }

    #[tokio::test]
    async fn test_response_headers() {
        let site = TempSite::new();
        let app = build_router(&site.config()).unwrap();
        let (_, headers, _) = send_get(app, "/api/health").await;
        assert_eq!(headers.get(header::X_CONTENT_TYPE_OPTIONS).unwrap(), "nosniff");
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "http://localhost:8080"
        );
    }

    #[test]
    fn test_invalid_frontend_url_rejected() {
        let site = TempSite::new();
        let mut config = site.config();
        config.frontend_url = "http://bad\nhost".to_string();
        assert!(matches!(
            build_router(&config),
            Err(ConfigError::InvalidFrontendUrl(_))
        ));
    }
}
