//! Idea search server.
//!
//! Serves idea search and management over HTTP, backed by Manticore Search.

use clap::Parser;
use ideas_rest::{ServerConfig, create_app_with_config, init_logging};
use tracing::info;

#[cfg(feature = "manticore")]
use ideas_persistence::backends::manticore::{ManticoreBackend, ManticoreConfig};

/// Creates the Manticore backend from the server configuration.
#[cfg(feature = "manticore")]
fn create_manticore_backend(config: &ServerConfig) -> anyhow::Result<ManticoreBackend> {
    info!(
        url = %config.manticore_url,
        index = %config.manticore_index,
        "Initializing Manticore backend"
    );

    let backend_config = ManticoreConfig {
        url: config.manticore_url.clone(),
        index: config.manticore_index.clone(),
        request_timeout_ms: config.manticore_timeout_ms,
        ..Default::default()
    };

    Ok(ManticoreBackend::new(backend_config)?)
}

/// Starts the Axum HTTP server.
async fn serve(app: axum::Router, config: &ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    info!(address = %addr, "Server listening");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    init_logging(&config.log_level);

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    info!(
        port = config.port,
        host = %config.host,
        index = %config.manticore_index,
        "Starting idea search server"
    );

    start(config).await
}

#[cfg(feature = "manticore")]
async fn start(config: ServerConfig) -> anyhow::Result<()> {
    let backend = create_manticore_backend(&config)?;
    let app = create_app_with_config(backend, config.clone());
    serve(app, &config).await
}

/// Fallback when no search backend is compiled in.
#[cfg(not(feature = "manticore"))]
async fn start(_config: ServerConfig) -> anyhow::Result<()> {
    anyhow::bail!(
        "No search backend compiled in. \
         Build with: cargo build -p ideas-server --features manticore"
    )
}
