//! # greeter — terminal shell
//!
//! Composition root for running the greeter client outside the browser.
//!
//! ## Responsibilities
//! - Parse CLI arguments and load configuration (file, env vars, flags)
//! - Install the `tracing` subscriber
//! - Construct the native HTTP adapter and inject it into the home view
//! - Render the routed page to stdout
//!
//! ## Dependency rule
//! This is the only native crate that depends on every other crate.
//! It is the wiring layer — no view logic belongs here.

mod config;
mod shell;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use greeter_adapter_http_reqwest::ReqwestGreetingClient;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Config, DEFAULT_CONFIG_PATH};

/// Fetch the greeting page and print it.
#[derive(Debug, Parser)]
#[command(name = "greeter", version, about)]
struct Cli {
    /// Location to open.
    #[arg(default_value = "/")]
    path: String,

    /// Configuration file.
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Override the API base URL (e.g. `http://127.0.0.1:8000/`).
    #[arg(long)]
    api_base: Option<String>,
}

fn init_tracing(filter: EnvFilter) {
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::load(&cli.config, cli.api_base)
        .with_context(|| format!("failed to load {}", cli.config.display()))?;
    init_tracing(config.log_filter()?);

    let base = config.api_base()?;
    tracing::debug!(%base, "starting greeter shell");
    let client = ReqwestGreetingClient::new(base);

    let mut stdout = std::io::stdout().lock();
    shell::run(&cli.path, client, &mut stdout).await?;

    Ok(())
}
