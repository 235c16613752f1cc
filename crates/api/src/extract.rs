//! Request extractors that report failures in the API's JSON error shape.
//!
//! Axum's built-in `Json` and `Path` rejections answer with plain-text
//! bodies. These wrappers convert them into [`AppError`] so every error
//! response is `{"error": "..."}`.

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use axum::Json;
use duties_core::duty::ENTITY_DUTY;
use duties_core::types::DbId;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Message for request bodies that are not valid JSON.
pub const INVALID_JSON_MESSAGE: &str = "Invalid JSON body";

/// JSON body extractor whose rejection is a 400 `AppError`.
///
/// A body that is empty, whitespace only, or not declared as JSON decodes
/// to `T::default()`, so handlers report the missing fields themselves.
/// Only a declared JSON body that fails to parse is rejected.
#[derive(Debug)]
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let declared_json = has_json_content_type(req.headers());

        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            tracing::debug!(reason = %rejection.body_text(), "Failed to read request body");
            invalid_json()
        })?;

        if !declared_json || bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(AppJson(T::default()));
        }

        match Json::<T>::from_bytes(&bytes) {
            Ok(Json(value)) => Ok(AppJson(value)),
            Err(rejection) => {
                tracing::debug!(reason = %rejection.body_text(), "Rejected request body");
                Err(invalid_json())
            }
        }
    }
}

fn invalid_json() -> AppError {
    AppError::BadRequest(INVALID_JSON_MESSAGE.to_string())
}

/// `application/json` or any `application/*+json` media type.
fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(essence) = headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
    else {
        return false;
    };
    let essence = essence.trim().to_ascii_lowercase();
    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

/// The `{id}` path segment of a `/duties/{id}` route.
///
/// An id that is not an integer cannot name any duty, so it is reported as
/// not found rather than as a malformed request.
#[derive(Debug, Clone, Copy)]
pub struct DutyIdPath(pub DbId);

impl<S> FromRequestParts<S> for DutyIdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| not_found())?;

        raw.parse::<DbId>().map(DutyIdPath).map_err(|_| {
            tracing::debug!(id = %raw, "Rejected non-numeric duty id");
            not_found()
        })
    }
}

fn not_found() -> AppError {
    AppError::NotFound(format!("{ENTITY_DUTY} not found"))
}
