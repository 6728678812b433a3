//! Binary crate for the weather web server.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Process startup (logging, configuration)
//! - The HTTP route and HTML rendering

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod page;
mod server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
