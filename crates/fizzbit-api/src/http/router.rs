//! Axum router configuration with middleware.
//!
//! API routes live under `/api`. Anything else is looked up in the web
//! directory (`index.html` for `/`); a miss there, or a wrong method on an
//! API route, gets the JSON 404 body.
//! Middleware: panic catcher, CORS, tracing.

use std::any::Any;
use std::path::Path;

use axum::handler::HandlerWithoutStateExt;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::http::error::AppError;
use crate::http::handlers;
use crate::state::AppState;

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState, web_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods(AnyOrigin)
        .allow_headers(AnyOrigin);

    let api_routes = Router::new()
        .route("/chat", post(handlers::chat::chat).fallback(not_found))
        .route("/health", get(handlers::health::health).fallback(not_found))
        .route(
            "/space-fact",
            get(handlers::fact::space_fact).fallback(not_found),
        );

    if web_dir.is_dir() {
        tracing::info!(path = %web_dir.display(), "Static file serving enabled");
    } else {
        tracing::warn!(path = %web_dir.display(), "Web directory missing; only the API is served");
    }
    let static_files = ServeDir::new(web_dir).not_found_service(not_found.into_service());

    Router::new()
        .nest("/api", api_routes)
        .fallback_service(static_files)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found() -> AppError {
    AppError::NotFound
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    AppError::Internal(detail).into_response()
}
