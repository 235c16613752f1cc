//! Handlers for the `/duties` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use duties_core::duty::{DutyName, ENTITY_DUTY};
use duties_core::error::CoreError;
use duties_db::models::duty::Duty;
use duties_db::repositories::DutyRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, DutyIdPath};
use crate::state::AppState;

/// Request body for create and update.
///
/// `name` is kept as a raw JSON value so that a missing field, `null`, and a
/// non-string value all reach validation and are reported the same way as an
/// empty name.
#[derive(Debug, Default, Deserialize)]
pub struct DutyInput {
    #[serde(default)]
    pub name: Option<serde_json::Value>,
}

impl DutyInput {
    /// The submitted name, if it was a JSON string.
    pub fn name(&self) -> Option<&str> {
        self.name.as_ref().and_then(serde_json::Value::as_str)
    }

    /// Validate the submitted name, producing the trimmed canonical form.
    fn validated_name(&self) -> Result<DutyName, CoreError> {
        DutyName::parse(self.name()).map_err(CoreError::from)
    }
}

fn duty_not_found(id: i64) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: ENTITY_DUTY,
        id,
    })
}

/// GET /duties
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Duty>>> {
    let duties = DutyRepo::list(&state.pool).await?;
    Ok(Json(duties))
}

/// POST /duties
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<DutyInput>,
) -> AppResult<(StatusCode, Json<Duty>)> {
    let name = input.validated_name()?;

    let duty = DutyRepo::create(&state.pool, &name).await?;
    tracing::info!(duty_id = duty.id, "Duty created");

    Ok((StatusCode::CREATED, Json(duty)))
}

/// PUT /duties/{id}
///
/// The name is validated before the id is looked up, so an invalid name on
/// a missing duty is a 400, not a 404.
pub async fn update(
    State(state): State<AppState>,
    DutyIdPath(id): DutyIdPath,
    AppJson(input): AppJson<DutyInput>,
) -> AppResult<Json<Duty>> {
    let name = input.validated_name()?;

    let duty = DutyRepo::update(&state.pool, id, &name)
        .await?
        .ok_or_else(|| duty_not_found(id))?;
    tracing::info!(duty_id = id, "Duty renamed");

    Ok(Json(duty))
}

/// DELETE /duties/{id}
pub async fn delete(
    State(state): State<AppState>,
    DutyIdPath(id): DutyIdPath,
) -> AppResult<StatusCode> {
    if DutyRepo::delete(&state.pool, id).await? {
        tracing::info!(duty_id = id, "Duty deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(duty_not_found(id))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    fn input(body: serde_json::Value) -> DutyInput {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn string_name_is_exposed() {
        assert_eq!(input(json!({"name": "Cook"})).name(), Some("Cook"));
    }

    #[test]
    fn missing_null_and_non_string_names_are_absent() {
        assert_eq!(input(json!({})).name(), None);
        assert_eq!(input(json!({"name": null})).name(), None);
        assert_eq!(input(json!({"name": 42})).name(), None);
        assert_eq!(input(json!({"name": ["a"]})).name(), None);
    }

    #[test]
    fn absent_name_fails_with_required_message() {
        assert_matches!(
            input(json!({"name": 7})).validated_name(),
            Err(CoreError::Validation(msg)) if msg == "Name is required and must be a non-empty string"
        );
    }

    #[test]
    fn valid_name_is_trimmed() {
        let name = input(json!({"name": "  Buy milk  "})).validated_name().unwrap();
        assert_eq!(name.as_str(), "Buy milk");
    }
}
