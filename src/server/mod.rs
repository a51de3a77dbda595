//! MCP server for the AC TECH lead forms.
//!
//! This module provides the MCP protocol server that exposes the contact and quote
//! forms, and the site's static information, to AI assistants.

pub mod handlers;

pub use handlers::LeadCaptureServer;

use anyhow::Result;
use rmcp::transport::io::stdio;
use rmcp::ServiceExt;

/// Run the lead-capture server with stdio transport.
///
/// This function starts the MCP server and runs it until the client disconnects.
pub async fn run_server(server: LeadCaptureServer) -> Result<()> {
    let service = server.serve(stdio()).await?;

    service.waiting().await?;

    Ok(())
}
