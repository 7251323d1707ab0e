//! Verb-to-resource associations in `resourceVerbs`.

use crate::error::AppError;
use crate::guid::IdGenerator;
use crate::models::ResourceVerb;
use crate::store::VERBS_TABLE;
use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

type VerbRow = (String, String, String, String);

impl From<VerbRow> for ResourceVerb {
    fn from((guid, resource_guid, verb, description): VerbRow) -> Self {
        ResourceVerb {
            guid,
            resource_guid,
            verb,
            description,
        }
    }
}

/// Lookup of the verbs attached to a resource.
#[async_trait]
pub trait VerbLookup: Send + Sync {
    async fn verbs_for(&self, resource_guid: &str) -> Result<Vec<ResourceVerb>, AppError>;
}

#[derive(Clone)]
pub struct VerbStore {
    pool: PgPool,
    ids: Arc<dyn IdGenerator>,
}

impl VerbStore {
    pub fn new(pool: PgPool, ids: Arc<dyn IdGenerator>) -> Self {
        VerbStore { pool, ids }
    }

    pub async fn get(&self, guid: &str) -> Result<ResourceVerb, AppError> {
        let sql = format!(
            "SELECT guid, resourceGUID, verb, description FROM {} WHERE guid = $1",
            VERBS_TABLE
        );
        tracing::debug!(sql = %sql, guid = %guid, "query");
        let row: VerbRow = sqlx::query_as(&sql).bind(guid).fetch_one(&self.pool).await?;
        Ok(row.into())
    }

    /// All verbs of one resource, storage order.
    pub async fn get_by_resource(&self, resource_guid: &str) -> Result<Vec<ResourceVerb>, AppError> {
        let sql = format!(
            "SELECT guid, resourceGUID, verb, description FROM {} WHERE resourceGUID = $1",
            VERBS_TABLE
        );
        tracing::debug!(sql = %sql, resource_guid = %resource_guid, "query");
        let rows: Vec<VerbRow> = sqlx::query_as(&sql)
            .bind(resource_guid)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(ResourceVerb::from).collect())
    }

    /// Attach a verb to a resource under a fresh guid (the one on `verb` is ignored).
    /// The resource is not checked for existence.
    pub async fn add(&self, verb: ResourceVerb) -> Result<ResourceVerb, AppError> {
        let guid = self.ids.new_id().await;
        let sql = format!(
            "INSERT INTO {} (guid, resourceGUID, verb, description) VALUES ($1, $2, $3, $4)",
            VERBS_TABLE
        );
        tracing::debug!(sql = %sql, guid = %guid, resource_guid = %verb.resource_guid, "query");
        sqlx::query(&sql)
            .bind(&guid)
            .bind(&verb.resource_guid)
            .bind(&verb.verb)
            .bind(&verb.description)
            .execute(&self.pool)
            .await?;
        Ok(ResourceVerb { guid, ..verb })
    }

    /// Change the description of an association. Verb text and resource binding never change.
    pub async fn update(&self, guid: &str, description: &str) -> Result<(), AppError> {
        let sql = format!("UPDATE {} SET description = $1 WHERE guid = $2", VERBS_TABLE);
        tracing::debug!(sql = %sql, guid = %guid, "query");
        sqlx::query(&sql)
            .bind(description)
            .bind(guid)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn remove(&self, guid: &str) -> Result<(), AppError> {
        let sql = format!("DELETE FROM {} WHERE guid = $1", VERBS_TABLE);
        tracing::debug!(sql = %sql, guid = %guid, "query");
        sqlx::query(&sql).bind(guid).execute(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl VerbLookup for VerbStore {
    async fn verbs_for(&self, resource_guid: &str) -> Result<Vec<ResourceVerb>, AppError> {
        self.get_by_resource(resource_guid).await
    }
}
