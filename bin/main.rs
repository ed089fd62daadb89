use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use graphql_mcp_server::runtime::{self, logging::Logging, logging::LoggingLayerBuilder};
use graphql_mcp_server::server::Server;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Clap styling
const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Debug, Parser)]
#[command(
    version,
    styles = STYLES,
    about = "GraphQL MCP Bridge - list, describe and invoke GraphQL operations from an AI agent",
)]
struct Args {
    /// Path to the YAML config file. Without one, configuration is read from the
    /// environment (`GRAPHQL_MCP_*`, or `ADDRESS` and `GRAPHQL_HEADERS`).
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = match Args::parse().config {
        Some(path) => runtime::read_config(&path)
            .with_context(|| format!("Could not load config from {}", path.display()))?,
        None => runtime::read_config_from_env()
            .context("Could not load config from the environment, is ADDRESS set?")?,
    };

    let (logging_layer, _guard) = LoggingLayerBuilder::new().build(&config.logging)?;
    tracing_subscriber::registry()
        .with(logging_layer)
        .with(Logging::env_filter(&config.logging)?)
        .try_init()?;

    info!(
        endpoint = %config.endpoint,
        headers = config.headers.len(),
        "GraphQL MCP Bridge v{}",
        env!("CARGO_PKG_VERSION")
    );

    Server::builder()
        .transport(config.transport)
        .endpoint(config.endpoint)
        .headers(config.headers)
        .build()
        .start()
        .await?;

    Ok(())
}
