//! mcp-core - Model Context Protocol core
//!
//! Protocol types, registries, and handlers shared by the MCP demo server
//! and its clients. Everything in here is synchronous and stateless: the
//! registries are fixed tables built once at startup, handlers are pure
//! transforms over their arguments, and the only I/O is the fresh-per-call
//! resource file read. Concurrency is the HTTP boundary's problem.

pub mod capabilities;
pub mod envelope;
pub mod error;
pub mod prompts;
pub mod protocol;
pub mod resources;
pub mod tools;

pub use capabilities::Capabilities;
pub use error::{McpCoreError, Result};
pub use prompts::PromptRegistry;
pub use protocol::{
    McpContent, McpError, McpMessage, McpPrompt, McpPromptArgument, McpRequest, McpResource,
    McpResponse, McpTool, Method,
};
pub use resources::ResourceRegistry;
pub use tools::ToolRegistry;
