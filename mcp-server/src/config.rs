//! Server configuration

use std::path::PathBuf;

/// Runtime configuration, sourced from the environment
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (host:port)
    pub bind_addr: String,
    /// Directory holding the resource backing files
    pub resources_dir: PathBuf,
}

impl ServerConfig {
    /// Load configuration from `MCP_HOST`, `MCP_PORT`, and
    /// `MCP_RESOURCES_DIR`, with development defaults
    pub fn from_env() -> Self {
        let host = std::env::var("MCP_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = std::env::var("MCP_PORT").unwrap_or_else(|_| "8080".to_string());
        let resources_dir = std::env::var("MCP_RESOURCES_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("mcp-server/resources"));

        Self {
            bind_addr: format!("{}:{}", host, port),
            resources_dir,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
