//! HTTP API surface.
//!
//! Routes:
//! - `GET /health`: status + version
//! - `POST /api/analyze`: full appraisal pipeline

pub mod analyze;
pub mod health;

use crate::server::config::AppConfig;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
}

/// Builds the full API router.
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/api/analyze", post(analyze::analyze))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn test_router() -> Router {
        routes(AppState {
            config: Arc::new(AppConfig::default()),
        })
    }

    #[tokio::test]
    async fn test_health_route() {
        let response = test_router()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_analyze_rejects_missing_fields() {
        let body = serde_json::json!({
            "name": "",
            "birthDate": "1990-05-15",
            "gender": "男性",
            "keyword": "料理"
        });
        let request = Request::builder()
            .method("POST")
            .uri("/api/analyze")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = test_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let response = test_router()
            .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
