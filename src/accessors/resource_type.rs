//! Resource-to-type links in `resourceTypes`. A type is itself a row in `resources`.

use crate::error::AppError;
use crate::guid::IdGenerator;
use crate::models::{Resource, TypeAssociation};
use crate::store::{RESOURCES_TABLE, TYPES_TABLE};
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct TypeStore {
    pool: PgPool,
    ids: Arc<dyn IdGenerator>,
}

impl TypeStore {
    pub fn new(pool: PgPool, ids: Arc<dyn IdGenerator>) -> Self {
        TypeStore { pool, ids }
    }

    /// The resource acting as the type of `resource_guid`, e.g. the whiteboard type for one whiteboard.
    /// With several associations the first row in storage order wins.
    pub async fn get_type(&self, resource_guid: &str) -> Result<Resource, AppError> {
        let sql = format!(
            "SELECT r.guid, r.name, r.description, r.apiEndpoint FROM {} r \
             JOIN {} t ON r.guid = t.type WHERE t.resourceGUID = $1 LIMIT 1",
            RESOURCES_TABLE, TYPES_TABLE
        );
        tracing::debug!(sql = %sql, resource_guid = %resource_guid, "query");
        let row: (String, String, String, String) = sqlx::query_as(&sql)
            .bind(resource_guid)
            .fetch_one(&self.pool)
            .await?;
        Ok(row.into())
    }

    /// Record that `resource_guid` is of type `type_guid`. Duplicates are allowed.
    pub async fn insert(&self, resource_guid: &str, type_guid: &str) -> Result<TypeAssociation, AppError> {
        let guid = self.ids.new_id().await;
        let sql = format!(
            "INSERT INTO {} (guid, resourceGUID, type) VALUES ($1, $2, $3)",
            TYPES_TABLE
        );
        tracing::debug!(sql = %sql, guid = %guid, resource_guid = %resource_guid, type_guid = %type_guid, "query");
        sqlx::query(&sql)
            .bind(&guid)
            .bind(resource_guid)
            .bind(type_guid)
            .execute(&self.pool)
            .await?;
        Ok(TypeAssociation {
            guid,
            resource_guid: resource_guid.to_string(),
            type_guid: type_guid.to_string(),
        })
    }
}
