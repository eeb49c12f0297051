use std::sync::Arc;

use clap::Parser;
use relink_core::Repository;
use relink_gateway::cli::{Cli, StorageBackendArg};
use relink_gateway::{App, AppState};
use relink_generator::RandomGenerator;
use relink_redirector::{CacheConfig, CachedRepository, MokaUrlCache, RedirectorService};
use relink_shortener::{HtmlShortener, ShortenerService, ShortenerSettings};
use relink_storage::{InMemoryRepository, MySqlRepository};
use relink_telemetry::TelemetryConfig;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Cli::try_parse()?;

    relink_telemetry::init(
        &TelemetryConfig::builder()
            .format(config.log_format.into())
            .build(),
    )?;

    info!(
        listen_addr = %config.listen_addr,
        public_base_url = %config.public_base_url,
        storage_backend = %config.storage,
        code_length = config.code_length,
        "starting relink gateway"
    );

    match config.storage {
        StorageBackendArg::InMemory => {
            run_server(&config, Arc::new(InMemoryRepository::new())).await?;
        }
        StorageBackendArg::Mysql => {
            let mysql_dsn = config
                .mysql_dsn
                .as_deref()
                .ok_or("mysql dsn is required when storage backend is mysql")?;
            let repository = MySqlRepository::connect(mysql_dsn).await?;
            repository.ensure_schema().await?;
            run_server(&config, Arc::new(repository)).await?;
        }
    }

    Ok(())
}

async fn run_server<R: Repository>(
    config: &Cli,
    repository: Arc<R>,
) -> Result<(), Box<dyn std::error::Error>> {
    let settings = ShortenerSettings::builder()
        .max_attempts(config.max_attempts)
        .build();
    let shortener = ShortenerService::with_settings(
        Arc::clone(&repository),
        RandomGenerator::new(config.code_length),
        settings,
    );

    let cache = MokaUrlCache::new(
        CacheConfig::builder()
            .capacity(config.cache_capacity)
            .ttl(config.cache_ttl())
            .build(),
    );
    let redirector = RedirectorService::new(CachedRepository::new(repository, cache));

    let state = AppState::new(
        HtmlShortener::new(Arc::new(shortener)),
        Arc::new(redirector),
        config.public_base_url.clone(),
    );
    let app = App::router_with_body_limit(state, config.max_body_bytes);

    let listener = TcpListener::bind(config.listen_addr).await?;
    info!(listen_addr = %listener.local_addr()?, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to listen for shutdown signal");
    }
}
