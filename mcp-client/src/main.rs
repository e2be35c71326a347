//! mcp-client - console calculator client
//!
//! Calls the MCP demo server's calculator tool over HTTP.
//!
//! Usage: mcp-client <first_number> <operation> <second_number> [api_url] [--number-only]

use regex::Regex;
use std::collections::HashMap;
use std::process::ExitCode;
use std::time::Duration;
use thiserror::Error;

use mcp_core::McpRequest;

const DEFAULT_API_URL: &str = "http://localhost:8080";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client failure categories: transport problems are distinct from
/// errors the API itself reported
#[derive(Error, Debug)]
enum ClientError {
    #[error("Failed to connect to API at {endpoint}. Make sure the MCP server is running. Details: {details}")]
    Connection { endpoint: String, details: String },

    #[error("Request to {0} timed out. Make sure the MCP server is running and accessible.")]
    Timeout(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("Unexpected response format")]
    UnexpectedResponse,
}

#[derive(Debug)]
struct ClientArgs {
    first_number: f64,
    operation: String,
    second_number: f64,
    api_url: String,
    number_only: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let parsed = match parse_arguments(&args) {
        Some(parsed) => parsed,
        None => {
            show_usage();
            return ExitCode::FAILURE;
        }
    };

    if !parsed.number_only {
        println!("🧮 MCP Calculator Client");
        println!("========================");
        println!(
            "📊 Calculating: {} {} {}",
            parsed.first_number, parsed.operation, parsed.second_number
        );
        println!("🌐 API URL: {}", parsed.api_url);
        println!();
    }

    match call_calculator_api(&parsed).await {
        Ok(result_text) => {
            if parsed.number_only {
                println!("{}", extract_numeric_result(&result_text));
            } else {
                println!("✅ Success!");
                println!("📋 Result: {}", result_text);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            println!("❌ Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn parse_arguments(args: &[String]) -> Option<ClientArgs> {
    let mut args: Vec<&String> = args.iter().collect();
    let number_only = args.iter().any(|a| a.as_str() == "--number-only");
    args.retain(|a| a.as_str() != "--number-only");

    if args.len() < 3 {
        return None;
    }

    let first_number: f64 = match args[0].parse() {
        Ok(n) => n,
        Err(_) => {
            if !number_only {
                println!("❌ Invalid first number: {}", args[0]);
            }
            return None;
        }
    };

    let operation = args[1].clone();
    if !matches!(operation.as_str(), "+" | "-" | "*" | "/") {
        if !number_only {
            println!("❌ Invalid operation: {}", operation);
            println!("Valid operations: +, -, *, /");
        }
        return None;
    }

    let second_number: f64 = match args[2].parse() {
        Ok(n) => n,
        Err(_) => {
            if !number_only {
                println!("❌ Invalid second number: {}", args[2]);
            }
            return None;
        }
    };

    let api_url = if args.len() >= 4 {
        let url = args[3].clone();
        if !url.starts_with("http://") && !url.starts_with("https://") {
            if !number_only {
                println!("❌ Invalid API URL: {}", url);
            }
            return None;
        }
        url
    } else {
        DEFAULT_API_URL.to_string()
    };

    Some(ClientArgs {
        first_number,
        operation,
        second_number,
        api_url,
        number_only,
    })
}

async fn call_calculator_api(args: &ClientArgs) -> Result<String, ClientError> {
    let endpoint = format!("{}/api/mcp/tools/call", args.api_url.trim_end_matches('/'));

    let mut arguments = HashMap::new();
    arguments.insert(
        "operation".to_string(),
        serde_json::json!(args.operation),
    );
    arguments.insert("a".to_string(), serde_json::json!(args.first_number));
    arguments.insert("b".to_string(), serde_json::json!(args.second_number));

    let request = McpRequest::tool_call("calculator", arguments);

    if !args.number_only {
        println!("🔗 Sending request to: {}", endpoint);
        println!(
            "📤 Request body: {}",
            serde_json::to_string(&request).unwrap_or_default()
        );
        println!();
    }

    let client = reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|e| ClientError::Connection {
            endpoint: endpoint.clone(),
            details: e.to_string(),
        })?;

    let response = client
        .post(&endpoint)
        .json(&request)
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                ClientError::Timeout(endpoint.clone())
            } else {
                ClientError::Connection {
                    endpoint: endpoint.clone(),
                    details: e.to_string(),
                }
            }
        })?;

    let status = response.status();
    let body = response.text().await.map_err(|e| ClientError::Connection {
        endpoint: endpoint.clone(),
        details: e.to_string(),
    })?;

    if !args.number_only {
        println!("📥 Response status: {}", status);
        println!("📥 Response body: {}", body);
        println!();
    }

    let value: serde_json::Value =
        serde_json::from_str(&body).map_err(|_| ClientError::UnexpectedResponse)?;

    if let Some(text) = value["result"]["content"][0]["text"].as_str() {
        return Ok(text.to_string());
    }

    if let Some(message) = value["error"]["message"].as_str() {
        return Err(ClientError::Api(message.to_string()));
    }

    if !status.is_success() {
        return Err(ClientError::Api(format!(
            "API call failed with status {}: {}",
            status, body
        )));
    }

    Err(ClientError::UnexpectedResponse)
}

/// Extract just the number from a result text like `Result: 10 + 5 = 15`
fn extract_numeric_result(result_text: &str) -> String {
    if let Some(equal_index) = result_text.rfind('=') {
        let after_equal = result_text[equal_index + 1..].trim();
        if !after_equal.is_empty() {
            return after_equal.to_string();
        }
    }

    // Fallback: trailing number anywhere in the string
    if let Ok(re) = Regex::new(r"-?\d+(?:\.\d+)?$") {
        if let Some(m) = re.find(result_text.trim()) {
            return m.as_str().to_string();
        }
    }

    result_text.trim().to_string()
}

fn show_usage() {
    println!();
    println!("📖 Usage:");
    println!("  mcp-client <first_number> <operation> <second_number> [api_url] [--number-only]");
    println!();
    println!("🔧 Parameters:");
    println!("  first_number  : First operand (decimal number)");
    println!("  operation     : Mathematical operation (+, -, *, /)");
    println!("  second_number : Second operand (decimal number)");
    println!("  api_url       : Optional. MCP API base URL (default: {})", DEFAULT_API_URL);
    println!("  --number-only : Optional. Output only the numeric result, no other text");
    println!();
    println!("💡 Examples:");
    println!("  mcp-client 10 + 5");
    println!("  mcp-client 7.5 '*' 2.5 --number-only");
    println!("  mcp-client 50 - 30 http://localhost:8080");
    println!();
    println!("⚠️  Note: Make sure the MCP server is running before using this client.");
}
