//! Resource, verb and type routes. All of them require [`Authorized`].

use crate::extractors::Authorized;
use crate::handlers::{resource, resource_type, verb};
use crate::state::AppState;
use axum::{
    middleware,
    routing::{get, post},
    Router,
};

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/resources", get(resource::list).post(resource::create))
        .route(
            "/resources/:guid",
            get(resource::read)
                .put(resource::update)
                .delete(resource::delete),
        )
        .route("/verbs", post(verb::add))
        .route(
            "/verbs/:guid",
            get(verb::list_for_resource)
                .put(verb::update)
                .delete(verb::remove),
        )
        .route("/type", post(resource_type::create))
        .route("/type/:guid", get(resource_type::read))
        .route_layer(middleware::from_extractor_with_state::<Authorized, AppState>(
            state.clone(),
        ))
        .with_state(state)
}
