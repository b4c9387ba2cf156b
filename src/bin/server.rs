//! Todo List Backing Store
//!
//! Run with: cargo run --bin todolist-server
//!
//! # Configuration
//!
//! Config file (`--config`, `~/.config/todolist/config.toml` or
//! `./todolist.toml`), then environment variables:
//! - `TODOLIST_HOST`: Host to bind to (default: 0.0.0.0)
//! - `TODOLIST_PORT`: Port to listen on (default: 8080)
//! - `TODOLIST_LOG_LEVEL`, `TODOLIST_LOG_FORMAT`
//! - `RUST_LOG`: Log filter (overrides the level)

use clap::Parser;
use std::path::PathBuf;

use todolist::config::Config;
use todolist::server::{serve, AppState};

#[derive(Parser)]
#[command(name = "todolist-server")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "In-memory backing store for the todolist client")]
struct Args {
    /// Host to bind to (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Config file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = Config::resolve(args.config.as_deref())?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    todolist::logging::init(&config.logging, "tower_http=debug");

    tracing::info!("Starting todolist backing store v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Items are kept in memory and lost on shutdown");

    serve(AppState::new(), &config.server).await?;

    tracing::info!("Backing store stopped");
    Ok(())
}
