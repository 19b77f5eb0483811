//! trackwise CLI - inventory and sales tracking backend
//!
//! This is the main entry point for the trackwise command-line tool, which
//! provides:
//! - HTTP API server over the TrackWise SQLite store (`serve` subcommand)
//! - Credential hashing for seeding Employee rows (`hash-password` subcommand)

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "trackwise",
    author,
    version,
    about = "Inventory and sales tracking backend over a SQLite store"
)]
struct Cli {
    /// Enable debug logging (overridable via RUST_LOG)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Hash a password for seeding Employee rows
    HashPassword(commands::hash::HashPasswordArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_setup::init(&TracingConfig { debug: cli.debug })?;

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::HashPassword(args) => commands::run_hash_password(args)?,
    }
    Ok(())
}
