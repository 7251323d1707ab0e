//! Service entry point: config from env, pool, id generator, router.

use std::sync::Arc;
use tmt_resources::{app, connect, ensure_tables, AppState, IdGenerator, LocalIdGenerator, RemoteIdGenerator, ServiceConfig};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServiceConfig::from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("tmt_resources=info,tower_http=info")),
        )
        .init();

    let pool = connect(&config.database).await?;
    if config.ensure_schema {
        ensure_tables(&pool).await?;
        tracing::info!("schema ensured");
    }

    let ids: Arc<dyn IdGenerator> = match &config.guid_service_url {
        Some(url) => {
            let remote = RemoteIdGenerator::new(url.clone());
            tracing::info!(url = %remote.url(), "using guid service");
            Arc::new(remote)
        }
        None => {
            tracing::info!("no guid service configured, generating ids locally");
            Arc::new(LocalIdGenerator)
        }
    };

    let state = AppState::new(pool, ids).with_api_token(config.api_token.clone());
    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app(state)).await?;
    Ok(())
}
