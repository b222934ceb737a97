//! Application error type mapping to HTTP status codes and JSON bodies.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use fizzbit_types::api::{ChatFailure, RouteFailure};
use fizzbit_types::error::GatewayError;

pub const NOT_FOUND_ERROR: &str = "404 — Lost in the void";
pub const NOT_FOUND_MESSAGE: &str =
    "😿 This route doesn’t exist in this galaxy. Fizzbit can’t find what you’re lookin’ for, Earthling!";
pub const INTERNAL_ERROR: &str = "Internal server error";
pub const INTERNAL_MESSAGE: &str =
    "👾 Oops! Fizzbit encountered a space-time hiccup. Try again or reboot the vibes 💫";

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// A failed chat exchange; already logged by the gateway.
    Gateway(GatewayError),
    /// No route or static file matched.
    NotFound,
    /// A handler panicked or something else unexpected happened.
    Internal(String),
}

impl From<GatewayError> for AppError {
    fn from(e: GatewayError) -> Self {
        AppError::Gateway(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Gateway(err) => {
                let status = StatusCode::from_u16(err.category().status_code())
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                let body =
                    ChatFailure::new(err.error_text(), err.response_text().map(String::from));
                (status, Json(body)).into_response()
            }
            AppError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(RouteFailure::new(NOT_FOUND_ERROR, NOT_FOUND_MESSAGE)),
            )
                .into_response(),
            AppError::Internal(detail) => {
                tracing::error!(%detail, "Fizzbit tripped on a server wire");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(RouteFailure::new(INTERNAL_ERROR, INTERNAL_MESSAGE)),
                )
                    .into_response()
            }
        }
    }
}
