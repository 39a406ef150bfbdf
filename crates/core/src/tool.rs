//! Tool trait: the abstraction over agent capabilities.
//!
//! Tools are the only surface the tutor agents see: the calculator, the
//! physics formula resolver, the constants catalog and the progress memo
//! tools all sit behind this trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use crate::error::ToolError;
use crate::failure::Failure;

/// A request to execute a tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    /// Unique call ID (matches the LLM's tool_call.id)
    #[serde(default)]
    pub id: String,

    /// Name of the tool to execute
    pub name: String,

    /// Arguments as a JSON value
    #[serde(default)]
    pub arguments: serde_json::Value,
}

/// The result of a tool execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    /// The call ID this result is for
    pub call_id: String,

    /// Whether the tool executed successfully
    pub success: bool,

    /// The output content
    pub output: String,

    /// Optional structured data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl ToolResult {
    /// A successful result whose output is the pretty-printed data.
    pub fn success(data: serde_json::Value) -> Self {
        Self {
            call_id: String::new(),
            success: true,
            output: serde_json::to_string_pretty(&data).unwrap_or_default(),
            data: Some(data),
        }
    }

    /// A call that never reached an engine: unknown tool, bad arguments,
    /// or an unreadable request.
    pub fn rejected(call_id: impl Into<String>, message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            call_id: call_id.into(),
            success: false,
            data: Some(serde_json::json!({ "error": message })),
            output: message,
        }
    }

    /// A structured failure the agent is expected to act on.
    pub fn failure(failure: &Failure) -> Self {
        let data = failure.to_value();
        Self {
            call_id: String::new(),
            success: false,
            output: serde_json::to_string_pretty(&data).unwrap_or_default(),
            data: Some(data),
        }
    }
}

/// Tool description handed to the LLM.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// The tool name
    pub name: String,

    /// Description of what the tool does
    pub description: String,

    /// JSON Schema describing the tool's parameters
    pub parameters: serde_json::Value,
}

/// The core Tool trait.
///
/// Each tool (calculator, physics_calc, physics_constants_lookup, memorize,
/// etc.) implements this trait. Tools are registered in the ToolRegistry and
/// made available to the agent layer.
#[async_trait]
pub trait Tool: Send + Sync {
    /// The unique name of this tool (e.g., "calculator", "physics_calc").
    fn name(&self) -> &str;

    /// A description of what this tool does (sent to the LLM).
    fn description(&self) -> &str;

    /// JSON Schema describing this tool's parameters.
    fn parameters_schema(&self) -> serde_json::Value;

    /// Execute the tool with the given arguments.
    async fn execute(&self, arguments: serde_json::Value) -> std::result::Result<ToolResult, ToolError>;

    /// Convert this tool into a ToolDefinition for sending to the LLM.
    fn to_definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: self.name().to_string(),
            description: self.description().to_string(),
            parameters: self.parameters_schema(),
        }
    }
}

/// A registry of available tools.
///
/// The agent layer uses this to:
/// 1. Get tool definitions to send to the LLM
/// 2. Look up and execute tools when the LLM requests them
pub struct ToolRegistry {
    tools: HashMap<String, Box<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Register a tool. Replaces any existing tool with the same name.
    pub fn register(&mut self, tool: Box<dyn Tool>) {
        let name = tool.name().to_string();
        self.tools.insert(name, tool);
    }

    /// Get a tool by name.
    pub fn get(&self, name: &str) -> Option<&dyn Tool> {
        self.tools.get(name).map(|t| t.as_ref())
    }

    /// Get all tool definitions, sorted by name.
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        let mut defs: Vec<ToolDefinition> = self.tools.values().map(|t| t.to_definition()).collect();
        defs.sort_by(|a, b| a.name.cmp(&b.name));
        defs
    }

    /// Execute a tool call. The result carries the call's ID.
    pub async fn execute(&self, call: &ToolCall) -> std::result::Result<ToolResult, ToolError> {
        let tool = self.tools.get(&call.name).ok_or_else(|| ToolError::NotFound(call.name.clone()))?;
        tracing::debug!(tool = %call.name, call_id = %call.id, "Executing tool call");
        let mut result = tool.execute(call.arguments.clone()).await?;
        result.call_id = call.id.clone();
        Ok(result)
    }

    /// List all registered tool names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tools.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
