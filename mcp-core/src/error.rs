//! Error taxonomy for mcp-core

use thiserror::Error;

use crate::protocol::McpError;

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, McpCoreError>;

/// Core error taxonomy
///
/// Every handler failure is one of these; none of them escapes the
/// dispatcher as a panic or a raw I/O error.
#[derive(Error, Debug)]
pub enum McpCoreError {
    /// Missing or malformed call arguments
    #[error("{0}")]
    InvalidArguments(String),

    /// Unknown tool or prompt name
    #[error("Unknown {kind}: {name}")]
    UnsupportedOperation { kind: &'static str, name: String },

    /// Unknown resource URI or missing backing file
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Division with a zero divisor
    #[error("Cannot divide by zero")]
    DivideByZero,

    /// Handler fault caught at the dispatcher boundary
    #[error("{0}")]
    Internal(String),
}

impl McpCoreError {
    /// Wire error code for this failure
    ///
    /// Caught handler faults are reported as -32602 alongside argument
    /// errors; unknown tool/prompt names and unknown resource URIs keep
    /// their own codes so the two "no such thing" cases stay distinguishable.
    pub fn code(&self) -> i32 {
        match self {
            Self::InvalidArguments(_) | Self::DivideByZero | Self::Internal(_) => -32602,
            Self::UnsupportedOperation { .. } => -32601,
            Self::NotFound(_) => -32603,
        }
    }

    pub fn unknown_tool(name: impl Into<String>) -> Self {
        Self::UnsupportedOperation {
            kind: "tool",
            name: name.into(),
        }
    }

    pub fn unknown_prompt(name: impl Into<String>) -> Self {
        Self::UnsupportedOperation {
            kind: "prompt",
            name: name.into(),
        }
    }
}

impl From<McpCoreError> for McpError {
    fn from(err: McpCoreError) -> Self {
        McpError {
            code: err.code(),
            message: err.to_string(),
            data: None,
        }
    }
}
