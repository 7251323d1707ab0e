//! /resources handlers.

use crate::error::AppError;
use crate::extractors::FormFields;
use crate::models::Resource;
use crate::response::{success, success_ack};
use crate::service::{with_verbs, with_verbs_all};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

/// GET /resources — every resource with its verbs.
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let resources = state
        .resources
        .get_all()
        .await
        .map_err(|e| e.internal("An error occurred while retrieving resources"))?;
    let resources = with_verbs_all(&state.verbs, resources).await;
    Ok(success(resources))
}

/// GET /resources/:guid
pub async fn read(
    State(state): State<AppState>,
    Path(guid): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let resource = state
        .resources
        .get(&guid)
        .await
        .map_err(|e| e.internal("An error occurred while retrieving resource information"))?;
    Ok(success(with_verbs(&state.verbs, resource).await))
}

/// POST /resources — form: name, description, api. `data` is the created resource, guid included.
pub async fn create(
    State(state): State<AppState>,
    form: FormFields,
) -> Result<impl IntoResponse, AppError> {
    let [name, description, api] =
        form.require(["name", "description", "api"], "Unable to process request")?;
    let created = state
        .resources
        .insert(Resource::new(name, description, api))
        .await
        .map_err(|e| e.internal("An error has occurred"))?;
    tracing::info!(guid = %created.guid, "resource created");
    Ok(success(created))
}

/// PUT /resources/:guid — any of name, description, api from the form body or query string.
/// Absent fields keep their stored value; a request with no fields rewrites the row unchanged.
pub async fn update(
    State(state): State<AppState>,
    Path(guid): Path<String>,
    form: FormFields,
) -> Result<impl IntoResponse, AppError> {
    let mut resource = state
        .resources
        .get(&guid)
        .await
        .map_err(|e| e.internal("An unexpected error occurred"))?;
    if let Some(name) = form.get("name") {
        resource.name = name.to_string();
    }
    if let Some(description) = form.get("description") {
        resource.description = description.to_string();
    }
    if let Some(api) = form.get("api") {
        resource.api_endpoint = api.to_string();
    }
    state
        .resources
        .update(&resource)
        .await
        .map_err(|e| e.internal("An error has occurred"))?;
    Ok(success_ack())
}

/// DELETE /resources/:guid
pub async fn delete(
    State(state): State<AppState>,
    Path(guid): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state
        .resources
        .delete(&guid)
        .await
        .map_err(|e| e.internal("An error has occurred"))?;
    Ok(success_ack())
}
