//! /verbs handlers. `:guid` is the owning resource for GET and the association otherwise.

use crate::error::AppError;
use crate::extractors::FormFields;
use crate::models::ResourceVerb;
use crate::response::{success, success_ack};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

/// GET /verbs/:guid — verbs of resource `guid`. Unlike resource reads, a failure here is a 500.
pub async fn list_for_resource(
    State(state): State<AppState>,
    Path(resource_guid): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let verbs = state
        .verbs
        .get_by_resource(&resource_guid)
        .await
        .map_err(|e| e.internal("An error occurred while retrieving resources"))?;
    Ok(success(verbs))
}

/// POST /verbs — form: resourceGUID, verb, description. `data` is the created verb with its new guid.
pub async fn add(
    State(state): State<AppState>,
    form: FormFields,
) -> Result<impl IntoResponse, AppError> {
    let [resource_guid, verb, description] = form.require(
        ["resourceGUID", "verb", "description"],
        "Not enough information given",
    )?;
    let created = state
        .verbs
        .add(ResourceVerb {
            guid: String::new(),
            resource_guid,
            verb,
            description,
        })
        .await
        .map_err(|e| e.internal("An error has occurred"))?;
    tracing::info!(guid = %created.guid, resource_guid = %created.resource_guid, "verb added");
    Ok(success(created))
}

/// PUT /verbs/:guid — form: description.
pub async fn update(
    State(state): State<AppState>,
    Path(guid): Path<String>,
    form: FormFields,
) -> Result<impl IntoResponse, AppError> {
    let description = form
        .get("description")
        .ok_or_else(|| AppError::BadRequest("No new description has been specified".into()))?;
    state
        .verbs
        .get(&guid)
        .await
        .map_err(|e| e.internal("An unexpected error occurred"))?;
    state
        .verbs
        .update(&guid, description)
        .await
        .map_err(|e| e.internal("An error has occurred"))?;
    Ok(success_ack())
}

/// DELETE /verbs/:guid
pub async fn remove(
    State(state): State<AppState>,
    Path(guid): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state
        .verbs
        .remove(&guid)
        .await
        .map_err(|e| e.internal("An error has occurred"))?;
    Ok(success_ack())
}
