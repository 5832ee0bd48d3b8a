//! Route definitions

use std::any::Any;

use axum::{
    Router,
    http::Method,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any as AnyOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::{error::ApiError, handlers, state::AppState};

/// Create the main router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    let cors_layer = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods([Method::GET])
        .allow_headers(AnyOrigin);

    Router::new()
        // Weather endpoints
        .route("/", get(handlers::weather::get_weather))
        .route("/weather", get(handlers::weather::get_weather))
        // Health endpoint
        .route("/health", get(handlers::health::health_check))
        .fallback(handlers::fallback::not_found)
        .with_state(state)
        // Middleware (first added = innermost)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
}

/// Convert a handler panic into the uniform 500 body
fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let reason = panic
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| panic.downcast_ref::<&str>().map(ToString::to_string))
        .unwrap_or_else(|| "handler panicked".to_string());

    ApiError::Internal { city: None, reason }.into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, http::StatusCode};
    use infrastructure::{AppConfig, build_services};
    use tower::ServiceExt;

    fn router() -> Router {
        let config = AppConfig::default();
        let services = build_services(&config).expect("services");
        create_router(AppState::new(services.weather, config))
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let response = router()
            .oneshot(Request::get("/v1/chat").body(Body::empty()).expect("request"))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn health_route_is_registered() {
        let response = router()
            .oneshot(Request::get("/health").body(Body::empty()).expect("request"))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn cors_headers_are_added() {
        let response = router()
            .oneshot(
                Request::get("/health")
                    .header("origin", "https://example.com")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");
        assert_eq!(
            response.headers().get("access-control-allow-origin"),
            Some(&axum::http::HeaderValue::from_static("*"))
        );
    }

    #[test]
    fn panic_becomes_internal_error() {
        let response = handle_panic(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn owned_panic_message_is_accepted() {
        let response = handle_panic(Box::new(String::from("boom")));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
