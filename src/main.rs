//! AC TECH site - Main entry point
//!
//! Serves the site's contact and quote forms as Model Context Protocol (MCP) tools
//! over stdio.

use actech_site::relay::{AsyncRelay, AsyncRelayClient};
use actech_site::{Config, LeadCaptureServer, Metrics, RelayClient, SiteConfig};
use anyhow::Result;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env before the config reads LOG_LEVEL
    let _ = dotenvy::dotenv();

    let config = Config::from_env();

    // Initialize logging (stderr only to avoid polluting stdout/MCP communication)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = config.as_ref().map(|c| c.log_level.as_str()).unwrap_or("error");
        EnvFilter::new(level)
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let site = SiteConfig::default();
    let metrics = Metrics::new();

    let client = RelayClient::new(&config, site.form_submit_email, metrics.clone());
    info!("Submissions go to {}", client.endpoint());
    if config.request_timeout_secs > 0 {
        info!("Relay timeout: {} seconds", config.request_timeout_secs);
    }

    let relay = Arc::new(AsyncRelayClient::new(client)) as Arc<dyn AsyncRelay>;
    let server = LeadCaptureServer::new(site, relay, metrics);

    info!("Starting MCP server with stdio transport");
    actech_site::server::run_server(server).await?;

    info!("Lead-capture server shutdown complete");
    Ok(())
}
