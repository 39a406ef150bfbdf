//! Tool façade for tutorlab.
//!
//! Tools give the tutor agents deterministic answers they must not
//! compute themselves: arithmetic, physical constants, physics laws,
//! plus the memo tools that track a student's learning progress.
//!
//! Argument-shape mistakes come back as `Err(ToolError::InvalidArguments)`.
//! Engine failures come back as `Ok` with `success: false` and a
//! structured failure mapping the agent can act on.

pub mod calculator;
pub mod constants_lookup;
pub mod physics_calc;
pub mod progress;

use serde::Serialize;
use std::sync::Arc;
use tutorlab_core::error::ToolError;
use tutorlab_core::failure::Failure;
use tutorlab_core::progress::ProgressStore;
use tutorlab_core::tool::{Tool, ToolRegistry, ToolResult};

pub use calculator::CalculatorTool;
pub use constants_lookup::ConstantsLookupTool;
pub use physics_calc::PhysicsCalcTool;
pub use progress::{ForgetTool, InMemoryProgressStore, MemorizeListTool, MemorizeTool};

/// Names of every built-in tool, in registration order.
pub const TOOL_NAMES: [&str; 6] = [
    "calculator",
    "physics_calc",
    "physics_constants_lookup",
    "memorize",
    "memorize_list",
    "forget",
];

/// Serialize an engine response into the `data` mapping of a result.
pub(crate) fn to_data<T: Serialize>(tool: &str, value: &T) -> Result<serde_json::Value, ToolError> {
    serde_json::to_value(value).map_err(|e| ToolError::ExecutionFailed {
        tool_name: tool.to_string(),
        reason: e.to_string(),
    })
}

/// Wrap an engine failure as an unsuccessful result.
pub(crate) fn failed(tool: &str, failure: Failure) -> ToolResult {
    if failure.is_fatal() {
        tracing::debug!(tool, kind = %failure.kind, "Engine reported failure");
    } else {
        tracing::debug!(tool, kind = %failure.kind, "Engine asked for disambiguation");
    }
    ToolResult::failure(&failure)
}

fn build(name: &str, store: &Arc<dyn ProgressStore>) -> Option<Box<dyn Tool>> {
    let tool: Box<dyn Tool> = match name {
        "calculator" => Box::new(CalculatorTool),
        "physics_calc" => Box::new(PhysicsCalcTool),
        "physics_constants_lookup" => Box::new(ConstantsLookupTool),
        "memorize" => Box::new(MemorizeTool::new(store.clone())),
        "memorize_list" => Box::new(MemorizeListTool::new(store.clone())),
        "forget" => Box::new(ForgetTool::new(store.clone())),
        _ => return None,
    };
    Some(tool)
}

/// Create a registry with all built-in tools on a fresh in-memory
/// progress store.
pub fn default_registry() -> ToolRegistry {
    let store: Arc<dyn ProgressStore> = Arc::new(InMemoryProgressStore::new());
    let enabled: Vec<String> = TOOL_NAMES.iter().map(|n| n.to_string()).collect();
    registry_with(&enabled, store)
}

/// Create a registry with only the named tools. Unknown names are
/// skipped with a warning.
pub fn registry_with(enabled: &[String], store: Arc<dyn ProgressStore>) -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    for name in enabled {
        match build(name.trim(), &store) {
            Some(tool) => registry.register(tool),
            None => tracing::warn!(tool = %name, "Unknown tool name in enabled list, skipping"),
        }
    }
    tracing::debug!(tools = registry.len(), store = store.name(), "Tool registry ready");
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use tutorlab_core::tool::ToolCall;

    #[test]
    fn default_registry_has_every_tool() {
        let registry = default_registry();
        assert_eq!(registry.len(), TOOL_NAMES.len());
        let mut expected = TOOL_NAMES.to_vec();
        expected.sort_unstable();
        assert_eq!(registry.names(), expected);
    }

    #[test]
    fn definitions_carry_schemas() {
        for def in default_registry().definitions() {
            assert!(!def.description.is_empty(), "{} has no description", def.name);
            assert_eq!(def.parameters["type"], "object", "{}", def.name);
        }
    }

    #[test]
    fn registry_with_subset_skips_unknown() {
        let store: Arc<dyn ProgressStore> = Arc::new(InMemoryProgressStore::new());
        let enabled = vec!["calculator".to_string(), " forget ".to_string(), "shell".to_string()];
        let registry = registry_with(&enabled, store);
        assert_eq!(registry.names(), vec!["calculator", "forget"]);
    }

    #[tokio::test]
    async fn memo_tools_share_one_store() {
        let store: Arc<dyn ProgressStore> = Arc::new(InMemoryProgressStore::new());
        let enabled: Vec<String> = TOOL_NAMES.iter().map(|n| n.to_string()).collect();
        let registry = registry_with(&enabled, store.clone());

        let call = ToolCall {
            id: "call_1".into(),
            name: "memorize_list".into(),
            arguments: serde_json::json!({"key": "topics", "value": "optics"}),
        };
        let result = registry.execute(&call).await.unwrap();
        assert_eq!(result.call_id, "call_1");
        assert!(store.get("topics").await.unwrap().is_some());
    }
}
