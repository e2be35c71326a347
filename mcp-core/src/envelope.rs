//! Envelope codec
//!
//! Pure byte-level transform between the wire and [`McpRequest`] /
//! [`McpResponse`]. Decoding rejects malformed envelopes (invalid JSON,
//! missing `method`, or a missing `name`/`uri` where the operation requires
//! one); encoding guarantees that exactly one of `result`/`error` is present.

use crate::protocol::{McpError, McpRequest, McpResponse, Method};

/// Decode a request envelope, returning its parsed operation kind
pub fn decode(bytes: &[u8]) -> Result<(Method, McpRequest), McpError> {
    let request: McpRequest = serde_json::from_slice(bytes)
        .map_err(|e| McpError::parse_error(format!("Malformed envelope: {}", e)))?;

    let method = Method::parse(&request.method)
        .ok_or_else(|| McpError::invalid_request(format!("Unknown method: {}", request.method)))?;

    if method.requires_name() && request.name.as_deref().map_or(true, str::is_empty) {
        return Err(McpError::invalid_request(format!(
            "Missing name for method: {}",
            method.as_str()
        )));
    }
    if method.requires_uri() && request.uri.as_deref().map_or(true, str::is_empty) {
        return Err(McpError::invalid_request(format!(
            "Missing uri for method: {}",
            method.as_str()
        )));
    }

    Ok((method, request))
}

/// Encode a response envelope
pub fn encode(response: &McpResponse) -> Vec<u8> {
    // Constructors keep result/error mutually exclusive
    debug_assert!(response.result.is_some() != response.error.is_some());
    serde_json::to_vec(response).unwrap_or_else(|_| b"{}".to_vec())
}
