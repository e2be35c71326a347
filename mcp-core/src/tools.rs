//! Tool registry and dispatcher
//!
//! A fixed table of three tools (echo, calculator, word_counter) with
//! string-keyed dispatch. Handlers are pure; the dispatcher wraps every
//! invocation in a panic boundary so a handler fault comes back as a
//! structured error instead of unwinding through the HTTP boundary.

use serde_json::json;
use std::collections::HashMap;
use std::panic::{self, AssertUnwindSafe};
use tracing::debug;

use crate::error::{McpCoreError, Result};
use crate::protocol::{McpContent, McpTool};

type Arguments = HashMap<String, serde_json::Value>;

/// Registry of the built-in tools
pub struct ToolRegistry {
    tools: Vec<McpTool>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        let tools = vec![
            McpTool {
                name: "echo".to_string(),
                description: "Echo back the provided text".to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "text": { "type": "string", "description": "Text to echo back" }
                    },
                    "required": ["text"]
                }),
            },
            McpTool {
                name: "calculator".to_string(),
                description: "Perform basic mathematical calculations".to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "operation": { "type": "string", "description": "Mathematical operation (+, -, *, /)" },
                        "a": { "type": "number", "description": "First operand" },
                        "b": { "type": "number", "description": "Second operand" }
                    },
                    "required": ["operation", "a", "b"]
                }),
            },
            McpTool {
                name: "word_counter".to_string(),
                description: "Count words, characters, and sentences in text".to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "text": { "type": "string", "description": "Text to analyze" },
                        "include_spaces": { "type": "boolean", "description": "Include spaces in character count (default: true)" }
                    },
                    "required": ["text"]
                }),
            },
        ];

        Self { tools }
    }

    /// All tool descriptors, in stable order
    pub fn list_tools(&self) -> &[McpTool] {
        &self.tools
    }

    /// Dispatch a tool call by name
    pub fn call_tool(&self, name: &str, arguments: &Arguments) -> Result<Vec<McpContent>> {
        debug!("Calling tool: {} with {} arguments", name, arguments.len());

        let handler: fn(&Arguments) -> Result<Vec<McpContent>> = match name {
            "echo" => echo_tool,
            "calculator" => calculator_tool,
            "word_counter" => word_counter_tool,
            _ => return Err(McpCoreError::unknown_tool(name)),
        };

        // Fault boundary: a panicking handler becomes a structured error
        panic::catch_unwind(AssertUnwindSafe(|| handler(arguments)))
            .unwrap_or_else(|payload| Err(McpCoreError::Internal(panic_message(payload))))
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn panic_message(payload: Box<dyn std::any::Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "tool handler panicked".to_string()
    }
}

/// Echo handler: one text block `Echo: {text}`
fn echo_tool(arguments: &Arguments) -> Result<Vec<McpContent>> {
    let text = require_text(arguments, "text")?;
    Ok(vec![McpContent::text(format!("Echo: {}", text))])
}

/// Calculator handler: `Result: {a} {op} {b} = {result}`
fn calculator_tool(arguments: &Arguments) -> Result<Vec<McpContent>> {
    if !arguments.contains_key("operation")
        || !arguments.contains_key("a")
        || !arguments.contains_key("b")
    {
        return Err(McpCoreError::InvalidArguments(
            "Missing required arguments: operation, a, b".to_string(),
        ));
    }

    let operation = require_text(arguments, "operation")?;
    let a = require_number(arguments, "a")?;
    let b = require_number(arguments, "b")?;

    let result = match operation.as_str() {
        "+" => a + b,
        "-" => a - b,
        "*" => a * b,
        "/" if b != 0.0 => a / b,
        "/" => return Err(McpCoreError::DivideByZero),
        _ => {
            return Err(McpCoreError::InvalidArguments(format!(
                "Unsupported operation: {}",
                operation
            )))
        }
    };

    Ok(vec![McpContent::text(format!(
        "Result: {} {} {} = {}",
        a, operation, b, result
    ))])
}

/// Word counter handler: multi-line text analysis report
fn word_counter_tool(arguments: &Arguments) -> Result<Vec<McpContent>> {
    let text = require_text(arguments, "text")?;
    let include_spaces = optional_bool(arguments, "include_spaces", true)?;

    let word_count = text
        .split([' ', '\t', '\n', '\r'])
        .filter(|w| !w.is_empty())
        .count();

    let character_count = if include_spaces {
        text.chars().count()
    } else {
        text.chars()
            .filter(|c| !matches!(c, ' ' | '\t' | '\n' | '\r'))
            .count()
    };

    let sentence_count = text
        .split(['.', '!', '?'])
        .filter(|s| !s.trim().is_empty())
        .count();

    let paragraph_count = text
        .replace("\r\n\r\n", "\n\n")
        .split("\n\n")
        .filter(|p| !p.trim().is_empty())
        .count();

    let spaces_note = if include_spaces {
        " (with spaces)"
    } else {
        " (without spaces)"
    };

    let mut report = format!(
        "Text Analysis Results:\n\
         📝 Words: {}\n\
         🔤 Characters: {}{}\n\
         📄 Sentences: {}\n\
         📋 Paragraphs: {}",
        word_count, character_count, spaces_note, sentence_count, paragraph_count
    );

    if word_count > 0 {
        let avg_words_per_sentence = if sentence_count > 0 {
            round_one(word_count as f64 / sentence_count as f64)
        } else {
            0.0
        };
        let avg_chars_per_word = round_one(character_count as f64 / word_count as f64);
        report.push_str(&format!(
            "\n\n📊 Averages:\n\
             • Words per sentence: {}\n\
             • Characters per word: {}",
            avg_words_per_sentence, avg_chars_per_word
        ));
    }

    Ok(vec![McpContent::text(report)])
}

fn round_one(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Extract a string-coercible argument (strings, numbers, and booleans
/// coerce; anything else is invalid)
fn require_text(arguments: &Arguments, key: &str) -> Result<String> {
    match arguments.get(key) {
        Some(serde_json::Value::String(s)) => Ok(s.clone()),
        Some(serde_json::Value::Number(n)) => Ok(n.to_string()),
        Some(serde_json::Value::Bool(b)) => Ok(b.to_string()),
        Some(_) => Err(McpCoreError::InvalidArguments(format!(
            "Argument '{}' must be a string",
            key
        ))),
        None => Err(McpCoreError::InvalidArguments(format!(
            "Missing required argument: {}",
            key
        ))),
    }
}

/// Extract a numeric argument, accepting native numbers and
/// string-encoded JSON numbers
fn require_number(arguments: &Arguments, key: &str) -> Result<f64> {
    let value = arguments.get(key).ok_or_else(|| {
        McpCoreError::InvalidArguments(format!("Missing required argument: {}", key))
    })?;

    match value {
        serde_json::Value::Number(n) => n.as_f64().ok_or_else(|| {
            McpCoreError::InvalidArguments(format!("Invalid numeric argument: {}", key))
        }),
        serde_json::Value::String(s) => s.trim().parse::<f64>().map_err(|_| {
            McpCoreError::InvalidArguments(format!("Invalid numeric argument: {}", key))
        }),
        _ => Err(McpCoreError::InvalidArguments(format!(
            "Invalid numeric argument: {}",
            key
        ))),
    }
}

fn optional_bool(arguments: &Arguments, key: &str, default: bool) -> Result<bool> {
    match arguments.get(key) {
        None => Ok(default),
        Some(serde_json::Value::Bool(b)) => Ok(*b),
        Some(serde_json::Value::String(s)) => s.trim().parse::<bool>().map_err(|_| {
            McpCoreError::InvalidArguments(format!("Argument '{}' must be a boolean", key))
        }),
        Some(_) => Err(McpCoreError::InvalidArguments(format!(
            "Argument '{}' must be a boolean",
            key
        ))),
    }
}
