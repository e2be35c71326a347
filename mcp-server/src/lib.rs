//! mcp-server - HTTP boundary for the MCP demo
//!
//! An axum router over the mcp-core registries. The boundary decodes the
//! request envelope, routes it to the matching registry operation, and maps
//! core error codes onto HTTP statuses (unknown resources are 404, every
//! other failure is 400). Router construction lives here so integration
//! tests can serve it on an ephemeral port in-process.

pub mod config;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

use mcp_core::{
    envelope, Capabilities, McpError, McpRequest, McpResponse, Method, PromptRegistry,
    ResourceRegistry, ToolRegistry,
};

pub use config::ServerConfig;

/// Application state: the static registries
pub struct AppState {
    tools: ToolRegistry,
    resources: ResourceRegistry,
    prompts: PromptRegistry,
}

/// Build the application router
pub fn app(config: &ServerConfig) -> Router {
    let state = Arc::new(AppState {
        tools: ToolRegistry::new(),
        resources: ResourceRegistry::new(&config.resources_dir),
        prompts: PromptRegistry::new(),
    });

    Router::new()
        .route("/", get(health_check))
        .route("/health", get(health_check))
        .route("/api/mcp/capabilities", get(capabilities))
        .route("/api/mcp/tools/list", post(tools_list))
        .route("/api/mcp/tools/call", post(tools_call))
        .route("/api/mcp/resources/list", post(resources_list))
        .route("/api/mcp/resources/read", post(resources_read))
        .route("/api/mcp/resources/download/:file", get(download))
        .route("/api/mcp/prompts/list", post(prompts_list))
        .route("/api/mcp/prompts/get", post(prompts_get))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check
async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "service": "mcp-server",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Capability report (no envelope)
async fn capabilities() -> impl IntoResponse {
    info!("Getting server capabilities");
    Json(Capabilities::current())
}

async fn tools_list(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    if let Err(error) = decode_expecting(&body, Method::ToolsList) {
        return reply(McpResponse::error(error));
    }

    info!("Listing available tools");
    reply(McpResponse::success(
        json!({ "tools": state.tools.list_tools() }),
    ))
}

async fn tools_call(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    let request = match decode_expecting(&body, Method::ToolsCall) {
        Ok(request) => request,
        Err(error) => return reply(McpResponse::error(error)),
    };

    // Presence validated by the codec
    let name = request.name.unwrap_or_default();
    let arguments = request.arguments.unwrap_or_default();

    info!("Calling tool: {}", name);

    match state.tools.call_tool(&name, &arguments) {
        Ok(content) => reply(McpResponse::success(json!({ "content": content }))),
        Err(error) => {
            warn!("Tool call failed: {}", error);
            reply(McpResponse::error(error.into()))
        }
    }
}

async fn resources_list(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    if let Err(error) = decode_expecting(&body, Method::ResourcesList) {
        return reply(McpResponse::error(error));
    }

    info!("Listing available resources");
    reply(McpResponse::success(
        json!({ "resources": state.resources.list_resources() }),
    ))
}

async fn resources_read(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    let request = match decode_expecting(&body, Method::ResourcesRead) {
        Ok(request) => request,
        Err(error) => return reply(McpResponse::error(error)),
    };

    let uri = request.uri.unwrap_or_default();
    info!("Reading resource: {}", uri);

    match state.resources.read_resource(&uri) {
        Ok(contents) => reply(McpResponse::success(json!({ "contents": contents }))),
        Err(error) => {
            warn!("Resource read failed: {}", error);
            reply(McpResponse::error(error.into()))
        }
    }
}

async fn prompts_list(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    if let Err(error) = decode_expecting(&body, Method::PromptsList) {
        return reply(McpResponse::error(error));
    }

    info!("Listing available prompts");
    reply(McpResponse::success(
        json!({ "prompts": state.prompts.list_prompts() }),
    ))
}

async fn prompts_get(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    let request = match decode_expecting(&body, Method::PromptsGet) {
        Ok(request) => request,
        Err(error) => return reply(McpResponse::error(error)),
    };

    let name = request.name.unwrap_or_default();
    let arguments = request.arguments.unwrap_or_default();

    info!("Getting prompt: {}", name);

    match state.prompts.get_prompt(&name, &arguments) {
        Ok(messages) => reply(McpResponse::success(json!({ "messages": messages }))),
        Err(error) => {
            warn!("Prompt get failed: {}", error);
            reply(McpResponse::error(error.into()))
        }
    }
}

/// Raw resource bytes, content type negotiated by filename extension
async fn download(State(state): State<Arc<AppState>>, Path(file): Path<String>) -> Response {
    info!("Downloading resource file: {}", file);

    match state.resources.download(&file) {
        Ok((bytes, content_type)) => {
            ([(header::CONTENT_TYPE, content_type)], bytes).into_response()
        }
        Err(error) => {
            warn!("Download failed: {}", error);
            (StatusCode::NOT_FOUND, "File not found").into_response()
        }
    }
}

/// Decode the envelope and reject a method that does not match the endpoint
fn decode_expecting(body: &[u8], expected: Method) -> Result<McpRequest, McpError> {
    let (method, request) = envelope::decode(body)?;
    if method != expected {
        debug!(
            "Method mismatch: got {}, endpoint handles {}",
            method.as_str(),
            expected.as_str()
        );
        return Err(McpError::invalid_request(format!(
            "Expected method {}, got {}",
            expected.as_str(),
            method.as_str()
        )));
    }
    Ok(request)
}

/// Encode the envelope and map its error code to an HTTP status
fn reply(response: McpResponse) -> Response {
    let status = match &response.error {
        None => StatusCode::OK,
        Some(error) if error.code == -32603 => StatusCode::NOT_FOUND,
        Some(_) => StatusCode::BAD_REQUEST,
    };
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        envelope::encode(&response),
    )
        .into_response()
}
