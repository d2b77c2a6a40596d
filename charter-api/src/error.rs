use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use charter_booking::{messages::user_message, BookingError};
use charter_core::{CoreError, ResolveFailure};
use serde_json::json;

#[derive(Debug)]
pub enum AppError {
    Validation(Vec<String>),
    Unresolved(ResolveFailure),
    NotFound(String),
    Conflict(String),
    Anyhow(anyhow::Error),
}

impl AppError {
    pub fn repository(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        AppError::Anyhow(anyhow::anyhow!(err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Validation(problems) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Request is invalid", "details": problems }),
            ),
            AppError::Unresolved(reason) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({ "error": user_message(reason), "reason": reason }),
            ),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, json!({ "error": msg })),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, json!({ "error": msg })),
            AppError::Anyhow(err) => {
                tracing::error!("Internal Server Error: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": "Internal Server Error" }))
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::Validation(problems) => AppError::Validation(problems),
            BookingError::Unresolved(reason) => AppError::Unresolved(reason),
            BookingError::NotFound(id) => AppError::NotFound(format!("Booking not found: {}", id)),
            err @ BookingError::InsufficientSeats { .. } => AppError::Conflict(err.to_string()),
            err @ BookingError::InvalidTransition { .. } => AppError::Conflict(err.to_string()),
        }
    }
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(msg) => AppError::Validation(vec![msg]),
        }
    }
}
