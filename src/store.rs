//! Pool construction and table DDL for `resources`, `resourceVerbs` and `resourceTypes`.

use crate::config::DatabaseConfig;
use crate::error::AppError;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

pub const RESOURCES_TABLE: &str = "resources";
pub const VERBS_TABLE: &str = "resourceVerbs";
pub const TYPES_TABLE: &str = "resourceTypes";

/// Open the shared connection pool.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, AppError> {
    let pool = pool_options(config).connect(&config.url).await?;
    Ok(pool)
}

/// Build the pool without connecting; the first query opens a connection.
pub fn connect_lazy(config: &DatabaseConfig) -> Result<PgPool, AppError> {
    let pool = pool_options(config).connect_lazy(&config.url)?;
    Ok(pool)
}

fn pool_options(config: &DatabaseConfig) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
}

/// Create the three tables if missing. Ids are opaque text; no foreign keys are declared.
pub async fn ensure_tables(pool: &PgPool) -> Result<(), AppError> {
    let ddl = [
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS {} (
                guid TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                description TEXT NOT NULL,
                apiEndpoint TEXT NOT NULL
            )
            "#,
            RESOURCES_TABLE
        ),
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS {} (
                guid TEXT PRIMARY KEY,
                resourceGUID TEXT NOT NULL,
                verb TEXT NOT NULL,
                description TEXT NOT NULL
            )
            "#,
            VERBS_TABLE
        ),
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS {} (
                guid TEXT PRIMARY KEY,
                resourceGUID TEXT NOT NULL,
                type TEXT NOT NULL
            )
            "#,
            TYPES_TABLE
        ),
    ];
    for sql in &ddl {
        sqlx::query(sql).execute(pool).await?;
    }
    // Lookups by owning resource.
    sqlx::query(&format!(
        "CREATE INDEX IF NOT EXISTS resourceverbs_resourceguid_idx ON {} (resourceGUID)",
        VERBS_TABLE
    ))
    .execute(pool)
    .await?;
    sqlx::query(&format!(
        "CREATE INDEX IF NOT EXISTS resourcetypes_resourceguid_idx ON {} (resourceGUID)",
        TYPES_TABLE
    ))
    .execute(pool)
    .await?;
    Ok(())
}
