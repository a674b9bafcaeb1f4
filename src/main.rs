//! Stockroom server binary

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use stockroom::api::{create_router, AppState};
use stockroom::catalog::StaticCatalog;
use stockroom::config::{AppConfig, LogFormat};
use stockroom::db::Database;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;

    init_tracing(&config)?;

    let catalog = Arc::new(StaticCatalog::new(&config.catalog.data_path));
    tracing::info!(path = %catalog.path().display(), "Using static catalog");

    let database = if config.database.enabled {
        Some(Arc::new(Database::new(config.database.resolved_url())))
    } else {
        tracing::info!("Database disabled; serving from the static catalog only");
        None
    };

    // Best-effort bootstrap. A failure here leaves the process serving
    // static data, not dead.
    if let Some(db) = &database {
        match db.initialize(&catalog).await {
            Ok(()) => tracing::info!("Database initialised"),
            Err(err) => {
                tracing::warn!(error = %err, "Database initialisation failed; continuing degraded");
            }
        }
    }

    let router = create_router(AppState::new(catalog, database));

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind to {}", addr))?;
    tracing::info!(%addr, "Listening for HTTP traffic");

    axum::serve(listener, router).await?;

    Ok(())
}

fn init_tracing(config: &AppConfig) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.logging.level.clone()))
        .unwrap_or_else(|_| EnvFilter::new("stockroom=info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    match config.logging.format {
        LogFormat::Json => {
            registry
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        LogFormat::Text => {
            registry.with(tracing_subscriber::fmt::layer()).init();
        }
    }

    Ok(())
}
