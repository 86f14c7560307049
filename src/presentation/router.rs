use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::middleware;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    analyze_handler, health_handler, upload_handler, ErrorResponse,
};
use crate::presentation::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    // Analyze bodies carry whole videos, raw or base64-encoded.
    let body_limit = DefaultBodyLimit::max(state.settings.upload.max_file_size_mb * 1024 * 1024);

    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/api/analyze",
            post(analyze_handler).fallback(method_fallback),
        )
        .route(
            "/api/analyze/upload",
            post(upload_handler).fallback(method_fallback),
        )
        .layer(body_limit)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}

/// Unsupported methods on the analyze routes land here. OPTIONS never does:
/// the CORS layer answers it with an empty 200 before routing.
async fn method_fallback() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorResponse {
            error: "Method not allowed".to_string(),
        }),
    )
        .into_response()
}
