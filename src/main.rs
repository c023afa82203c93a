//! Chirpy server binary.
//!
//! Configuration comes from `CHIRPY__*` environment variables (and `.env`).

use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use chirpy::adapters::{app_router, AppState, FileRecordStore, InMemoryRecordStore};
use chirpy::config::{AppConfig, LogFormat, StorageBackend};
use chirpy::ports::RecordStore;

#[tokio::main]
async fn main() -> ExitCode {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config);

    if let Err(e) = config.validate() {
        error!(error = %e, "Invalid configuration");
        return ExitCode::FAILURE;
    }

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Server exited with an error");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.server.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match config.server.log_format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}

async fn run(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let state = match config.storage.backend {
        StorageBackend::File => {
            let store = FileRecordStore::new(&config.storage.path);
            store.initialize().await?;
            info!(path = %store.path().display(), "Using file record store");
            AppState::with_store(store, &config)
        }
        StorageBackend::Memory => {
            info!("Using in-memory record store; data is lost on exit");
            AppState::with_store(InMemoryRecordStore::new(), &config)
        }
    };

    let app = app_router(state, &config.server);

    let listener = tokio::net::TcpListener::bind(config.server.bind_address()).await?;
    info!(
        addr = %listener.local_addr()?,
        environment = ?config.server.environment,
        "Chirpy listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
