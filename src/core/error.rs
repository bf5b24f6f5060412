use crate::dtos::ApiResponse;
use axum::{Json, http::StatusCode, response::IntoResponse};
use std::fmt::Display;
use tracing::error;

/// Errore a livello di richiesta, reso al client come envelope con `status: "error"`
#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    message: String,
}

impl AppError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    // Common error constructors
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, Json(ApiResponse::error(self.message))).into_response()
    }
}

/// Errore infrastrutturale non recuperabile (begin/commit di una transazione,
/// preparazione di uno statement): non diventa una risposta HTTP, viene
/// loggato e il processo termina.
pub fn fatal(operation: &str, err: impl Display) -> ! {
    error!(operation, error = %err, "Unrecoverable database failure, shutting down");
    std::process::exit(1)
}
