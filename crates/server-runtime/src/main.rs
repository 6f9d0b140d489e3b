//! # Retro-Chat BART Server
//!
//! Runs the buddy-icon service with an in-memory content store until Ctrl-C.
//!
//! ## Environment
//!
//! - `BART_NOTIFY_POLICY` - `propagate` (default) or `log-and-continue`
//! - `BART_BUS_CAPACITY` - presence event bus capacity
//! - `BART_LOG_LEVEL` - log level used when `RUST_LOG` is unset

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use server_runtime::{ServerConfig, ServerRuntime};

fn init_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level))?;
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::from_env().context("invalid configuration")?;
    init_logging(&config.logging.level)?;

    let runtime = ServerRuntime::new(config);
    runtime.start()?;

    info!("Server is running. Press Ctrl+C to stop.");
    tokio::signal::ctrl_c().await?;

    runtime.shutdown().await;

    Ok(())
}
