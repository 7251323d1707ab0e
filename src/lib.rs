//! Resources service: resources, the verbs allowed on them, and resource types, stored in PostgreSQL.

pub mod accessors;
pub mod config;
pub mod error;
pub mod extractors;
pub mod guid;
pub mod handlers;
pub mod models;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use accessors::{ResourceStore, TypeStore, VerbLookup, VerbStore};
pub use config::{DatabaseConfig, ServiceConfig};
pub use error::{AppError, ConfigError};
pub use guid::{FixedIdGenerator, IdGenerator, LocalIdGenerator, RemoteIdGenerator};
pub use models::{Resource, ResourceVerb, TypeAssociation};
pub use routes::app;
pub use state::AppState;
pub use store::{connect, connect_lazy, ensure_tables};
