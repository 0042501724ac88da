//! Error responses
//!
//! Faults are caught at the handler boundary and rendered as
//! `{ "message": ..., "error": ... }` carrying the raw error text.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::{error, warn};

use crate::error::VaultError;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
    pub error: String,
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorBody,
}

impl ApiError {
    /// Wraps a service error under an operation-level message
    pub fn new(message: &str, err: VaultError) -> Self {
        let status = match err {
            VaultError::Validation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        Self {
            status,
            body: ErrorBody {
                message: message.to_string(),
                error: err.to_string(),
            },
        }
    }

    /// Wraps a request body the JSON extractor could not accept
    ///
    /// Keeps the extractor's status (400, 415 or 422).
    pub fn rejected(message: &str, rejection: JsonRejection) -> Self {
        Self {
            status: rejection.status(),
            body: ErrorBody {
                message: message.to_string(),
                error: rejection.body_text(),
            },
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = %self.status, error = %self.body.error, "{}", self.body.message);
        } else {
            warn!(status = %self.status, error = %self.body.error, "{}", self.body.message);
        }
        (self.status, Json(self.body)).into_response()
    }
}
