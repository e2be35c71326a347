//! MCP wire protocol types
//!
//! The request/response envelope shared by every operation, the error
//! object, and the descriptor tables (tools, resources, prompts). All
//! descriptors are created once at startup and never mutated.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The closed set of supported operation kinds
///
/// Unknown method strings are rejected at the HTTP boundary, never inside
/// the registries; keeping this an enum makes the dispatch exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    ToolsList,
    ToolsCall,
    ResourcesList,
    ResourcesRead,
    PromptsList,
    PromptsGet,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ToolsList => "tools/list",
            Self::ToolsCall => "tools/call",
            Self::ResourcesList => "resources/list",
            Self::ResourcesRead => "resources/read",
            Self::PromptsList => "prompts/list",
            Self::PromptsGet => "prompts/get",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "tools/list" => Some(Self::ToolsList),
            "tools/call" => Some(Self::ToolsCall),
            "resources/list" => Some(Self::ResourcesList),
            "resources/read" => Some(Self::ResourcesRead),
            "prompts/list" => Some(Self::PromptsList),
            "prompts/get" => Some(Self::PromptsGet),
            _ => None,
        }
    }

    /// Whether this operation requires a `name` field in the envelope
    pub fn requires_name(&self) -> bool {
        matches!(self, Self::ToolsCall | Self::PromptsGet)
    }

    /// Whether this operation requires a `uri` field in the envelope
    pub fn requires_uri(&self) -> bool {
        matches!(self, Self::ResourcesRead)
    }
}

/// MCP request envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McpRequest {
    pub method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arguments: Option<HashMap<String, serde_json::Value>>,
}

impl McpRequest {
    /// Create a bare request (list operations)
    pub fn new(method: Method) -> Self {
        Self {
            method: method.as_str().to_string(),
            name: None,
            uri: None,
            arguments: None,
        }
    }

    /// Create a tool call request
    pub fn tool_call(
        tool_name: impl Into<String>,
        arguments: HashMap<String, serde_json::Value>,
    ) -> Self {
        Self {
            method: Method::ToolsCall.as_str().to_string(),
            name: Some(tool_name.into()),
            uri: None,
            arguments: Some(arguments),
        }
    }

    /// Create a prompt get request
    pub fn prompt_get(
        prompt_name: impl Into<String>,
        arguments: HashMap<String, serde_json::Value>,
    ) -> Self {
        Self {
            method: Method::PromptsGet.as_str().to_string(),
            name: Some(prompt_name.into()),
            uri: None,
            arguments: Some(arguments),
        }
    }

    /// Create a resource read request
    pub fn resource_read(uri: impl Into<String>) -> Self {
        Self {
            method: Method::ResourcesRead.as_str().to_string(),
            name: None,
            uri: Some(uri.into()),
            arguments: None,
        }
    }
}

/// MCP response envelope
///
/// Exactly one of `result`/`error` is populated; use the constructors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McpResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<McpError>,
}

impl McpResponse {
    /// Create a successful response
    pub fn success(result: serde_json::Value) -> Self {
        Self {
            result: Some(result),
            error: None,
        }
    }

    /// Create an error response
    pub fn error(error: McpError) -> Self {
        Self {
            result: None,
            error: Some(error),
        }
    }
}

/// MCP wire error object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McpError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl McpError {
    pub fn parse_error(message: impl Into<String>) -> Self {
        Self {
            code: -32700,
            message: message.into(),
            data: None,
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self {
            code: -32600,
            message: message.into(),
            data: None,
        }
    }
}

/// Content block used uniformly across tool results, resource contents,
/// and prompt messages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McpContent {
    #[serde(rename = "type")]
    pub content_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(rename = "mimeType", skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
}

impl McpContent {
    /// Plain text block
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content_type: "text".to_string(),
            text: Some(text.into()),
            mime_type: None,
        }
    }

    /// Text block tagged with a mime type (resource contents)
    pub fn text_with_mime(text: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            content_type: "text".to_string(),
            text: Some(text.into()),
            mime_type: Some(mime_type.into()),
        }
    }
}

/// Role-tagged message produced by prompts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McpMessage {
    pub role: String,
    pub content: McpContent,
}

impl McpMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: McpContent::text(text),
        }
    }
}

/// Tool descriptor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McpTool {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: serde_json::Value,
}

/// Resource descriptor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McpResource {
    pub uri: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "mimeType")]
    pub mime_type: String,
}

/// Prompt descriptor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McpPrompt {
    pub name: String,
    pub description: String,
    pub arguments: Vec<McpPromptArgument>,
}

/// Prompt argument spec
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McpPromptArgument {
    pub name: String,
    pub description: String,
    pub required: bool,
}
