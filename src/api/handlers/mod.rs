pub mod booking;
pub mod health;
pub mod notification;
pub mod profile;

use axum::http::StatusCode;
use crate::error::AppError;

/// Fallback for verbs a resource does not serve.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// OPTIONS without a preflight request method; `CorsLayer` answers the rest.
pub async fn options_ok() -> StatusCode {
    StatusCode::OK
}
