//! /type handlers.

use crate::error::AppError;
use crate::extractors::FormFields;
use crate::response::success;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

/// GET /type/:guid — the resource acting as the type of `guid`.
pub async fn read(
    State(state): State<AppState>,
    Path(resource_guid): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let resource_type = state
        .types
        .get_type(&resource_guid)
        .await
        .map_err(|e| e.internal("An error occurred while retrieving resourceType information"))?;
    Ok(success(resource_type))
}

/// POST /type — form: resource, type. `data` is the created association.
pub async fn create(
    State(state): State<AppState>,
    form: FormFields,
) -> Result<impl IntoResponse, AppError> {
    let [resource_guid, type_guid] = form.require(["resource", "type"], "Unable to process request")?;
    let association = state
        .types
        .insert(&resource_guid, &type_guid)
        .await
        .map_err(|e| e.internal("An error has occurred"))?;
    Ok(success(association))
}
