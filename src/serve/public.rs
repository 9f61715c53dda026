//! Router exposing the public surface as JSON.

use std::{net::SocketAddr, sync::Arc};

use axum::{
    extract::State,
    http::{header, HeaderValue},
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::config::ConfigurationSet;

/// Route serving the public surface.
pub const PUBLIC_CONFIG_PATH: &str = "/_config/public";

async fn public_config_handler(State(config): State<Arc<ConfigurationSet>>) -> impl IntoResponse {
    tracing::debug!(keys = config.public_values().len(), "serving public configuration");
    (
        [(header::CACHE_CONTROL, HeaderValue::from_static("no-store"))],
        Json(config.public_values().clone()),
    )
}

/// Build a router that serves `GET /_config/public`.
///
/// # Example
///
/// ```rust,ignore
/// use runtime_config::{public_router, startup};
///
/// let config = startup("app.config.toml")?;
/// let router = my_routes().merge(public_router(config.clone()));
/// ```
pub fn public_router(config: Arc<ConfigurationSet>) -> Router {
    Router::new()
        .route(PUBLIC_CONFIG_PATH, get(public_config_handler))
        .with_state(config)
}

/// Bind `addr` and serve [`public_router`] until the server fails.
pub async fn serve(addr: SocketAddr, config: Arc<ConfigurationSet>) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, path = PUBLIC_CONFIG_PATH, "serving public configuration");
    axum::serve(listener, public_router(config)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigDefinition, ConfigProvider, MapEnv};
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    fn test_config() -> Arc<ConfigurationSet> {
        let definition = ConfigDefinition::new("2025-07-15")
            .private("EDITING_CODE", "")
            .private("apiSecret", "hunter2")
            .public("EDITING_CODE", "");
        let env = MapEnv::new().with("EDITING_CODE", "abc123");
        Arc::new(ConfigProvider::with_env(env).load(&definition).unwrap())
    }

    #[tokio::test]
    async fn test_serves_public_values() {
        let app = public_router(test_config());

        let request = Request::builder()
            .uri(PUBLIC_CONFIG_PATH)
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CACHE_CONTROL).unwrap(),
            "no-store"
        );

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json, serde_json::json!({ "EDITING_CODE": "abc123" }));
    }

    #[tokio::test]
    async fn test_private_values_not_served() {
        let app = public_router(test_config());

        let request = Request::builder()
            .uri(PUBLIC_CONFIG_PATH)
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert!(!text.contains("apiSecret"));
        assert!(!text.contains("hunter2"));
    }

    #[tokio::test]
    async fn test_unknown_path() {
        let app = public_router(test_config());

        let request = Request::builder()
            .uri("/_config/private")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
