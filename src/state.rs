//! Shared application state for all routes.

use crate::accessors::{ResourceStore, TypeStore, VerbStore};
use crate::guid::IdGenerator;
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub resources: ResourceStore,
    pub verbs: VerbStore,
    pub types: TypeStore,
    /// Required bearer token on API routes; `None` disables the check.
    pub api_token: Option<Arc<str>>,
}

impl AppState {
    pub fn new(pool: PgPool, ids: Arc<dyn IdGenerator>) -> Self {
        AppState {
            resources: ResourceStore::new(pool.clone(), ids.clone()),
            verbs: VerbStore::new(pool.clone(), ids.clone()),
            types: TypeStore::new(pool.clone(), ids),
            pool,
            api_token: None,
        }
    }

    pub fn with_api_token(mut self, token: Option<String>) -> Self {
        self.api_token = token.map(Arc::from);
        self
    }
}
