use serde_json::json;
use std::path::PathBuf;

use mcp_server::{app, ServerConfig};

/// Serve the router on an ephemeral port and return its base URL
async fn spawn_server() -> String {
    let config = ServerConfig {
        bind_addr: "127.0.0.1:0".to_string(),
        resources_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("resources"),
    };
    let router = app(&config);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind failed");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{}", addr)
}

#[tokio::test]
async fn test_health_check() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/health", base))
        .send()
        .await
        .expect("Request failed");

    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.expect("Invalid JSON");
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "mcp-server");
}

#[tokio::test]
async fn test_capabilities() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/api/mcp/capabilities", base))
        .send()
        .await
        .expect("Request failed");

    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.expect("Invalid JSON");
    assert_eq!(body["tools"], true);
    assert_eq!(body["resources"], true);
    assert_eq!(body["prompts"], true);
    assert_eq!(body["logging"], false);
}

#[tokio::test]
async fn test_tools_list() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/mcp/tools/list", base))
        .json(&json!({ "method": "tools/list" }))
        .send()
        .await
        .expect("Request failed");

    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.expect("Invalid JSON");
    let tools = body["result"]["tools"].as_array().expect("No tools array");

    let names: Vec<&str> = tools.iter().map(|t| t["name"].as_str().unwrap()).collect();
    assert_eq!(names, ["echo", "calculator", "word_counter"]);
    assert_eq!(tools[0]["inputSchema"]["required"][0], "text");
}

#[tokio::test]
async fn test_echo_tool() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/mcp/tools/call", base))
        .json(&json!({
            "method": "tools/call",
            "name": "echo",
            "arguments": { "text": "hi" }
        }))
        .send()
        .await
        .expect("Request failed");

    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.expect("Invalid JSON");
    assert_eq!(body["result"]["content"][0]["text"], "Echo: hi");
    assert!(body.get("error").is_none());
}

#[tokio::test]
async fn test_calculator_addition() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/mcp/tools/call", base))
        .json(&json!({
            "method": "tools/call",
            "name": "calculator",
            "arguments": { "operation": "+", "a": 10, "b": 5 }
        }))
        .send()
        .await
        .expect("Request failed");

    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.expect("Invalid JSON");
    let text = body["result"]["content"][0]["text"].as_str().unwrap();
    assert!(text.ends_with("= 15"), "unexpected result text: {}", text);
}

#[tokio::test]
async fn test_calculator_fractional_division() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/mcp/tools/call", base))
        .json(&json!({
            "method": "tools/call",
            "name": "calculator",
            "arguments": { "operation": "/", "a": 7, "b": 2 }
        }))
        .send()
        .await
        .expect("Request failed");

    let body: serde_json::Value = response.json().await.expect("Invalid JSON");
    let text = body["result"]["content"][0]["text"].as_str().unwrap();
    assert!(text.ends_with("= 3.5"), "unexpected result text: {}", text);
}

#[tokio::test]
async fn test_calculator_divide_by_zero() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/mcp/tools/call", base))
        .json(&json!({
            "method": "tools/call",
            "name": "calculator",
            "arguments": { "operation": "/", "a": 10, "b": 0 }
        }))
        .send()
        .await
        .expect("Request failed");

    assert_eq!(response.status(), 400);
    let body: serde_json::Value = response.json().await.expect("Invalid JSON");
    assert!(body.get("result").is_none(), "must not carry a numeric result");
    assert_eq!(body["error"]["code"], -32602);
    assert_eq!(body["error"]["message"], "Cannot divide by zero");
}

#[tokio::test]
async fn test_unknown_tool() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/mcp/tools/call", base))
        .json(&json!({
            "method": "tools/call",
            "name": "teleport",
            "arguments": {}
        }))
        .send()
        .await
        .expect("Request failed");

    assert_eq!(response.status(), 400);
    let body: serde_json::Value = response.json().await.expect("Invalid JSON");
    assert_eq!(body["error"]["code"], -32601);
    assert!(body["error"]["message"].as_str().unwrap().contains("teleport"));
}

#[tokio::test]
async fn test_word_counter_tool() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/mcp/tools/call", base))
        .json(&json!({
            "method": "tools/call",
            "name": "word_counter",
            "arguments": { "text": "Hello world. Bye!", "include_spaces": true }
        }))
        .send()
        .await
        .expect("Request failed");

    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.expect("Invalid JSON");
    let report = body["result"]["content"][0]["text"].as_str().unwrap();
    assert!(report.contains("Words: 3"));
    assert!(report.contains("Sentences: 2"));
}

#[tokio::test]
async fn test_resources_list_and_read() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/mcp/resources/list", base))
        .json(&json!({ "method": "resources/list" }))
        .send()
        .await
        .expect("Request failed");

    let body: serde_json::Value = response.json().await.expect("Invalid JSON");
    let resources = body["result"]["resources"].as_array().unwrap();
    let uris: Vec<&str> = resources
        .iter()
        .map(|r| r["uri"].as_str().unwrap())
        .collect();
    assert_eq!(uris, ["file:///sample.txt", "file:///data.json"]);

    for (uri, mime) in [
        ("file:///sample.txt", "text/plain"),
        ("file:///data.json", "application/json"),
    ] {
        let response = client
            .post(format!("{}/api/mcp/resources/read", base))
            .json(&json!({ "method": "resources/read", "uri": uri }))
            .send()
            .await
            .expect("Request failed");

        assert!(response.status().is_success(), "read failed for {}", uri);
        let body: serde_json::Value = response.json().await.expect("Invalid JSON");
        let contents = body["result"]["contents"].as_array().unwrap();
        assert_eq!(contents.len(), 1);
        assert_eq!(contents[0]["mimeType"], mime);
        assert!(!contents[0]["text"].as_str().unwrap().is_empty());
    }
}

#[tokio::test]
async fn test_read_unknown_resource() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/mcp/resources/read", base))
        .json(&json!({ "method": "resources/read", "uri": "file:///secret.txt" }))
        .send()
        .await
        .expect("Request failed");

    assert_eq!(response.status(), 404);
    let body: serde_json::Value = response.json().await.expect("Invalid JSON");
    assert_eq!(body["error"]["code"], -32603);
}

#[tokio::test]
async fn test_download_resources() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/api/mcp/resources/download/sample.txt", base))
        .send()
        .await
        .expect("Request failed");

    assert!(response.status().is_success());
    assert_eq!(
        response.headers()["content-type"].to_str().unwrap(),
        "text/plain"
    );
    assert!(!response.bytes().await.unwrap().is_empty());

    let response = client
        .get(format!("{}/api/mcp/resources/download/missing.bin", base))
        .send()
        .await
        .expect("Request failed");
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_prompts_list_and_get() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/mcp/prompts/list", base))
        .json(&json!({ "method": "prompts/list" }))
        .send()
        .await
        .expect("Request failed");

    let body: serde_json::Value = response.json().await.expect("Invalid JSON");
    let prompts = body["result"]["prompts"].as_array().unwrap();
    let names: Vec<&str> = prompts.iter().map(|p| p["name"].as_str().unwrap()).collect();
    assert_eq!(names, ["greeting", "summarize"]);

    // greeting without arguments falls back to "there"
    let response = client
        .post(format!("{}/api/mcp/prompts/get", base))
        .json(&json!({ "method": "prompts/get", "name": "greeting" }))
        .send()
        .await
        .expect("Request failed");

    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.expect("Invalid JSON");
    let message = &body["result"]["messages"][0];
    assert_eq!(message["role"], "user");
    assert!(message["content"]["text"].as_str().unwrap().contains("there"));
}

#[tokio::test]
async fn test_unknown_prompt() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/mcp/prompts/get", base))
        .json(&json!({ "method": "prompts/get", "name": "haiku" }))
        .send()
        .await
        .expect("Request failed");

    assert_eq!(response.status(), 400);
    let body: serde_json::Value = response.json().await.expect("Invalid JSON");
    assert_eq!(body["error"]["code"], -32601);
}

#[tokio::test]
async fn test_malformed_envelope() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/mcp/tools/call", base))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .expect("Request failed");

    assert_eq!(response.status(), 400);
    let body: serde_json::Value = response.json().await.expect("Invalid JSON");
    assert_eq!(body["error"]["code"], -32700);
}

#[tokio::test]
async fn test_method_endpoint_mismatch() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/mcp/tools/list", base))
        .json(&json!({ "method": "prompts/list" }))
        .send()
        .await
        .expect("Request failed");

    assert_eq!(response.status(), 400);
    let body: serde_json::Value = response.json().await.expect("Invalid JSON");
    assert_eq!(body["error"]["code"], -32600);
}
