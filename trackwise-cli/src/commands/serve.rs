//! HTTP server command for the TrackWise API
//!
//! Builds the connection pool and runs the server until shutdown.

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;

use trackwise_server::db::create_pool;
use trackwise_server::http::{run_server, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:5000)
    #[arg(long, short = 'b', default_value = "127.0.0.1:5000")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Database URL for the TrackWise store
    #[arg(long, env = "TRACKWISE_DB", default_value = "sqlite:trackwise.db")]
    pub database_url: String,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    tracing::info!("Starting trackwise server on {}", args.bind);

    // Create database pool; the schema is owned externally
    let pool = create_pool(&args.database_url)
        .await
        .with_context(|| format!("Failed to open database {}", args.database_url))?;

    // Configure server
    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    // Run server (blocks until shutdown)
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
