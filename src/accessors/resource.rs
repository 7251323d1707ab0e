//! CRUD on the `resources` table.

use crate::error::AppError;
use crate::guid::IdGenerator;
use crate::models::Resource;
use crate::store::RESOURCES_TABLE;
use sqlx::PgPool;
use std::sync::Arc;

type ResourceRow = (String, String, String, String);

impl From<ResourceRow> for Resource {
    fn from((guid, name, description, api_endpoint): ResourceRow) -> Self {
        Resource {
            guid,
            name,
            description,
            api_endpoint,
            verbs: Vec::new(),
        }
    }
}

#[derive(Clone)]
pub struct ResourceStore {
    pool: PgPool,
    ids: Arc<dyn IdGenerator>,
}

impl ResourceStore {
    pub fn new(pool: PgPool, ids: Arc<dyn IdGenerator>) -> Self {
        ResourceStore { pool, ids }
    }

    /// Fetch one resource. A missing row is an error like any other (`RowNotFound`). `verbs` is left empty.
    pub async fn get(&self, guid: &str) -> Result<Resource, AppError> {
        let sql = format!(
            "SELECT guid, name, description, apiEndpoint FROM {} WHERE guid = $1",
            RESOURCES_TABLE
        );
        tracing::debug!(sql = %sql, guid = %guid, "query");
        let row: ResourceRow = sqlx::query_as(&sql).bind(guid).fetch_one(&self.pool).await?;
        Ok(row.into())
    }

    /// All resources in storage order, `verbs` empty.
    pub async fn get_all(&self) -> Result<Vec<Resource>, AppError> {
        let sql = format!(
            "SELECT guid, name, description, apiEndpoint FROM {}",
            RESOURCES_TABLE
        );
        tracing::debug!(sql = %sql, "query");
        let rows: Vec<ResourceRow> = sqlx::query_as(&sql).fetch_all(&self.pool).await?;
        Ok(rows.into_iter().map(Resource::from).collect())
    }

    /// Insert under a freshly generated guid; any guid or verbs on `resource` are ignored.
    /// Returns the stored resource.
    pub async fn insert(&self, resource: Resource) -> Result<Resource, AppError> {
        let guid = self.ids.new_id().await;
        let sql = format!(
            "INSERT INTO {} (guid, name, description, apiEndpoint) VALUES ($1, $2, $3, $4)",
            RESOURCES_TABLE
        );
        tracing::debug!(sql = %sql, guid = %guid, "query");
        sqlx::query(&sql)
            .bind(&guid)
            .bind(&resource.name)
            .bind(&resource.description)
            .bind(&resource.api_endpoint)
            .execute(&self.pool)
            .await?;
        Ok(Resource {
            guid,
            verbs: Vec::new(),
            ..resource
        })
    }

    /// Overwrite name, description and apiEndpoint of the row with `resource.guid`.
    /// Succeeds even when no row matches.
    pub async fn update(&self, resource: &Resource) -> Result<(), AppError> {
        let sql = format!(
            "UPDATE {} SET name = $1, description = $2, apiEndpoint = $3 WHERE guid = $4",
            RESOURCES_TABLE
        );
        tracing::debug!(sql = %sql, guid = %resource.guid, "query");
        sqlx::query(&sql)
            .bind(&resource.name)
            .bind(&resource.description)
            .bind(&resource.api_endpoint)
            .bind(&resource.guid)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Hard delete. Succeeds even when no row matches.
    pub async fn delete(&self, guid: &str) -> Result<(), AppError> {
        let sql = format!("DELETE FROM {} WHERE guid = $1", RESOURCES_TABLE);
        tracing::debug!(sql = %sql, guid = %guid, "query");
        sqlx::query(&sql).bind(guid).execute(&self.pool).await?;
        Ok(())
    }
}
