//! mcp-server - MCP demo server
//!
//! Exposes the demo tools, resources, and prompts over plain HTTP

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use mcp_server::{app, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .pretty()
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("🚀 Starting mcp-server...");

    let config = ServerConfig::from_env();
    info!("📁 Resource directory: {}", config.resources_dir.display());

    let router = app(&config);

    info!("🌐 MCP server listening on http://{}", config.bind_addr);
    info!("📋 Available tools: echo, calculator, word_counter");

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
