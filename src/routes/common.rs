//! Common routes: health, readiness, version. Never behind authorization.
//! Bodies use the same `{status, data}` envelope as the API.

use crate::response::{success, Envelope, STATUS_ERROR};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize, Debug)]
struct Readiness {
    database: &'static str,
}

async fn health() -> impl IntoResponse {
    success("healthy")
}

async fn ready(State(state): State<AppState>) -> impl IntoResponse {
    if let Err(e) = sqlx::query("SELECT 1").fetch_optional(&state.pool).await {
        tracing::warn!(error = %e, "readiness check failed");
        let body = Envelope {
            status: STATUS_ERROR.to_string(),
            data: Readiness {
                database: "unavailable",
            },
        };
        return (StatusCode::SERVICE_UNAVAILABLE, Json(body));
    }
    success(Readiness { database: "ok" })
}

#[derive(Serialize, Debug)]
struct Version {
    name: &'static str,
    version: &'static str,
}

async fn version() -> impl IntoResponse {
    success(Version {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /health, GET /ready (database round trip), GET /version.
pub fn common_routes_with_ready(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .with_state(state)
}
