use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::domain::store::StoreError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

/// Application-level error surfaced to HTTP clients.
///
/// Both variants render as a 500 response; the body `code` distinguishes a
/// store that stayed unreachable from any other failure.
#[derive(Debug)]
pub enum AppError {
    Store { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn store(message: impl Into<String>, details: Value) -> Self {
        Self::Store {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Connection(reason) => {
                AppError::store("Counter store unreachable", json!({ "reason": reason }))
            }
            StoreError::Protocol(reason) => {
                AppError::internal("Counter store protocol error", json!({ "reason": reason }))
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            AppError::Store { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "store_unavailable",
                message,
                details,
            ),
            AppError::Internal { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                message,
                details,
            ),
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}
