//! Prompt registry
//!
//! Two templated prompts (greeting, summarize) producing user-role
//! messages from a caller-supplied argument mapping, with defaults for
//! absent arguments.

use std::collections::HashMap;
use tracing::debug;

use crate::error::{McpCoreError, Result};
use crate::protocol::{McpMessage, McpPrompt, McpPromptArgument};

type Arguments = HashMap<String, serde_json::Value>;

/// Registry of the built-in prompts
pub struct PromptRegistry {
    prompts: Vec<McpPrompt>,
}

impl PromptRegistry {
    pub fn new() -> Self {
        let prompts = vec![
            McpPrompt {
                name: "greeting".to_string(),
                description: "Generate a personalized greeting".to_string(),
                arguments: vec![McpPromptArgument {
                    name: "name".to_string(),
                    description: "Name of the person to greet".to_string(),
                    required: true,
                }],
            },
            McpPrompt {
                name: "summarize".to_string(),
                description: "Summarize the provided text".to_string(),
                arguments: vec![
                    McpPromptArgument {
                        name: "text".to_string(),
                        description: "Text to summarize".to_string(),
                        required: true,
                    },
                    McpPromptArgument {
                        name: "length".to_string(),
                        description: "Desired summary length".to_string(),
                        required: false,
                    },
                ],
            },
        ];

        Self { prompts }
    }

    /// All prompt descriptors, in stable order
    pub fn list_prompts(&self) -> &[McpPrompt] {
        &self.prompts
    }

    /// Expand a prompt template into role-tagged messages
    pub fn get_prompt(&self, name: &str, arguments: &Arguments) -> Result<Vec<McpMessage>> {
        debug!("Getting prompt: {}", name);

        match name {
            "greeting" => {
                let who = arg_or(arguments, "name", "there");
                Ok(vec![McpMessage::user(format!(
                    "Generate a friendly greeting for {}",
                    who
                ))])
            }
            "summarize" => {
                let length = arg_or(arguments, "length", "a few sentences");
                let text = arg_or(arguments, "text", "[no text provided]");
                Ok(vec![McpMessage::user(format!(
                    "Please summarize the following text in {}: {}",
                    length, text
                ))])
            }
            _ => Err(McpCoreError::unknown_prompt(name)),
        }
    }
}

impl Default for PromptRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Argument value as text, falling back to a default when absent or
/// not string-coercible
fn arg_or(arguments: &Arguments, key: &str, default: &str) -> String {
    match arguments.get(key) {
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(serde_json::Value::Number(n)) => n.to_string(),
        Some(serde_json::Value::Bool(b)) => b.to_string(),
        _ => default.to_string(),
    }
}
