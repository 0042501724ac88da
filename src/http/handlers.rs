//! Credential endpoints
//!
//! Each handler maps one REST call onto one service operation.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::http::error::ApiError;
use crate::store::{CredentialRecord, NewCredential};
use crate::SharedState;

/// `POST /api/passwords`
pub async fn create_password(
    State(state): State<SharedState>,
    payload: Result<Json<NewCredential>, JsonRejection>,
) -> Result<(StatusCode, Json<CredentialRecord>), ApiError> {
    let Json(input) = payload.map_err(|e| ApiError::rejected("Error saving password", e))?;

    let record = state
        .service
        .create(input)
        .await
        .map_err(|e| ApiError::new("Error saving password", e))?;

    Ok((StatusCode::CREATED, Json(record)))
}

/// `GET /api/passwords`
pub async fn list_passwords(
    State(state): State<SharedState>,
) -> Result<Json<Vec<CredentialRecord>>, ApiError> {
    let records = state
        .service
        .list()
        .await
        .map_err(|e| ApiError::new("Error fetching passwords", e))?;

    Ok(Json(records))
}

/// `DELETE /api/passwords/:id`
pub async fn delete_password(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state
        .service
        .delete(&id)
        .await
        .map_err(|e| ApiError::new("Error deleting password", e))?;

    Ok(StatusCode::NO_CONTENT)
}
