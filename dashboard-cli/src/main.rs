//! Binary crate for the `weather-dashboard` tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive configuration
//! - The terminal dashboard and plain-text output

use clap::Parser;

mod cli;
mod configure;
mod logging;
mod output;
mod tui;

#[cfg(test)]
mod fixtures;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();
    cmd.run().await
}
