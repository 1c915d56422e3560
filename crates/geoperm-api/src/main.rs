//! geoperm server binary
//!
//! Distributor region-permission HTTP service.
//!
//! # Usage
//!
//! ```bash
//! # With config file
//! geoperm --config config.yaml
//!
//! # With environment variables only
//! GEOPERM_SERVER__PORT=9090 geoperm
//! ```

use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use tokio::signal;
use tracing::{info, warn};

use geoperm_api::http::{create_router, AppState};
use geoperm_api::logging::{init_logging, parse_log_level, LoggingConfig};
use geoperm_api::ServerConfig;
use geoperm_domain::RegionTable;
use geoperm_storage::MemoryRegistry;

/// geoperm - Distributor region-permission service
#[derive(Parser, Debug)]
#[command(name = "geoperm")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file (YAML)
    #[arg(short, long)]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Load configuration
    let config = if let Some(config_path) = args.config {
        ServerConfig::load(&config_path)?
    } else {
        ServerConfig::from_env()?
    };

    // Initialize logging
    init_logging(LoggingConfig {
        json_format: config.logging.json,
        default_level: parse_log_level(&config.logging.level),
    });

    info!(version = env!("CARGO_PKG_VERSION"), "Starting geoperm server");

    // Load the region code table. This must succeed before the server
    // binds: a missing or unreadable table is a fatal startup error.
    let load = RegionTable::load(&config.regions.path)?;
    info!(
        path = %config.regions.path,
        rows = load.rows_loaded,
        "Region code table loaded"
    );
    if let Some(reason) = &load.stopped {
        // Lenient partial load: everything before the bad row is kept.
        warn!(%reason, "Region table load stopped at a malformed row");
    }

    let registry = MemoryRegistry::new_shared();
    let state = AppState::new(registry, Arc::new(load.table));
    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    info!(%addr, "HTTP server listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_args_parsing() {
        let args = Args::try_parse_from(["geoperm"]).unwrap();
        assert!(args.config.is_none());

        let args = Args::try_parse_from(["geoperm", "--config", "config.yaml"]).unwrap();
        assert_eq!(args.config, Some("config.yaml".to_string()));

        let args = Args::try_parse_from(["geoperm", "-c", "test.yaml"]).unwrap();
        assert_eq!(args.config, Some("test.yaml".to_string()));
    }
}
