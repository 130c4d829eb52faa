//! Route definitions and router setup
//!
//! Configures all routes and middleware.

mod index;

use crate::config::IndexMode;
use crate::state::SharedState;
use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    request_id::MakeRequestUuid,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
    ServiceBuilderExt,
};
use tracing::Level;

/// Create the application router with all routes and middleware
pub fn create_router(state: SharedState, mode: IndexMode) -> Router {
    // Build tracing/logging layer
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    // Build middleware stack
    let middleware = ServiceBuilder::new()
        .set_x_request_id(MakeRequestUuid)
        .layer(trace_layer)
        .layer(CompressionLayer::new())
        .propagate_x_request_id();

    // The root route serves exactly one of the two variants
    let index_route = match mode {
        IndexMode::Tables => get(index::index),
        IndexMode::Hello => get(index::hello),
    };

    // Build the router
    Router::new()
        .route("/", index_route)
        .route("/health", get(health_check))
        .layer(middleware)
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "success": true,
        "message": "Server is running fine.",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use pretty_assertions::assert_eq;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn hello_app() -> Router {
        create_router(Arc::new(AppState::without_pool()), IndexMode::Hello)
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_hello_mode_serves_quoted_greeting() {
        let response = hello_app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "\"Hello World!\"");
    }

    #[tokio::test]
    async fn test_hello_mode_is_repeatable() {
        let app = hello_app();

        let first = app
            .clone()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let second = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(first.status(), StatusCode::OK);
        assert_eq!(second.status(), StatusCode::OK);
        assert_eq!(body_string(first).await, body_string(second).await);
    }

    #[tokio::test]
    async fn test_health_reports_success() {
        let response = hello_app()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let payload: serde_json::Value =
            serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(payload["success"], serde_json::json!(true));
        assert_eq!(payload["version"], serde_json::json!(env!("CARGO_PKG_VERSION")));
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let response = hello_app()
            .oneshot(
                Request::builder()
                    .uri("/missing")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
