//! Main module.
mod greeter;

use std::io;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only the greeting line.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let user = "Rustacean";
    info!(name = user, "greeting");
    greeter::greet(&mut io::stdout().lock(), user)?;
    Ok(())
}
