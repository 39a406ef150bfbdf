//! Learning-progress memo tools and the in-memory progress store.
//!
//! The tutor agents record what a student has covered with `memorize`
//! (single value), `memorize_list` (set-like list) and `forget`. These are
//! the only stateful tools; the engines never see the store.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;
use tutorlab_core::error::{ProgressError, ToolError};
use tutorlab_core::progress::{ProgressEntry, ProgressStore};
use tutorlab_core::tool::{Tool, ToolResult};

/// A per-process progress store. Cloning shares the underlying map.
#[derive(Clone)]
pub struct InMemoryProgressStore {
    entries: Arc<RwLock<HashMap<String, ProgressEntry>>>,
}

impl InMemoryProgressStore {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for InMemoryProgressStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProgressStore for InMemoryProgressStore {
    fn name(&self) -> &str { "in_memory" }

    async fn set(&self, key: &str, value: Value) -> Result<(), ProgressError> {
        self.entries.write().await.insert(key.to_string(), ProgressEntry::new(value));
        Ok(())
    }

    async fn append_unique(&self, key: &str, value: Value) -> Result<bool, ProgressError> {
        let mut entries = self.entries.write().await;
        let entry = entries
            .entry(key.to_string())
            .or_insert_with(|| ProgressEntry::new(Value::Array(Vec::new())));

        let Value::Array(items) = &mut entry.value else {
            return Err(ProgressError::NotAList { key: key.to_string() });
        };
        if items.contains(&value) {
            return Ok(false);
        }
        items.push(value);
        entry.updated_at = chrono::Utc::now();
        Ok(true)
    }

    async fn remove(&self, key: &str, value: &Value) -> Result<bool, ProgressError> {
        let mut entries = self.entries.write().await;
        let Some(entry) = entries.get_mut(key) else {
            return Ok(false);
        };

        let Value::Array(items) = &mut entry.value else {
            return Err(ProgressError::NotAList { key: key.to_string() });
        };
        let before = items.len();
        items.retain(|item| item != value);
        let removed = items.len() < before;
        if removed {
            entry.updated_at = chrono::Utc::now();
        }
        Ok(removed)
    }

    async fn get(&self, key: &str) -> Result<Option<ProgressEntry>, ProgressError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn snapshot(&self) -> Result<BTreeMap<String, ProgressEntry>, ProgressError> {
        let entries = self.entries.read().await;
        Ok(entries.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
    }
}

fn memo_schema(value_description: &str) -> Value {
    serde_json::json!({
        "type": "object",
        "properties": {
            "key": {
                "type": "string",
                "description": "The label indexing the memory, e.g. 'topics_covered'"
            },
            "value": {
                "type": "string",
                "description": value_description
            }
        },
        "required": ["key", "value"]
    })
}

fn key_and_value(arguments: &Value) -> Result<(&str, &str), ToolError> {
    let key = arguments["key"]
        .as_str()
        .ok_or_else(|| ToolError::InvalidArguments("Missing 'key' argument".into()))?;
    let value = arguments["value"]
        .as_str()
        .ok_or_else(|| ToolError::InvalidArguments("Missing 'value' argument".into()))?;
    Ok((key, value))
}

fn store_failed(tool: &str, err: ProgressError) -> ToolError {
    ToolError::ExecutionFailed {
        tool_name: tool.to_string(),
        reason: err.to_string(),
    }
}

fn status(message: String) -> ToolResult {
    ToolResult::success(serde_json::json!({ "status": message }))
}

/// Store one value under a key, replacing what was there.
pub struct MemorizeTool {
    store: Arc<dyn ProgressStore>,
}

impl MemorizeTool {
    pub fn new(store: Arc<dyn ProgressStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Tool for MemorizeTool {
    fn name(&self) -> &str {
        "memorize"
    }

    fn description(&self) -> &str {
        "Remember one piece of information about the student's learning progress, \
         one key-value pair at a time. Overwrites any previous value for the key."
    }

    fn parameters_schema(&self) -> Value {
        memo_schema("The information to store")
    }

    async fn execute(&self, arguments: Value) -> Result<ToolResult, ToolError> {
        let (key, value) = key_and_value(&arguments)?;
        self.store
            .set(key, Value::from(value))
            .await
            .map_err(|e| store_failed(self.name(), e))?;
        tracing::debug!(key, "Memorized value");
        Ok(status(format!("Stored \"{key}\": \"{value}\"")))
    }
}

/// Add a value to the list under a key, skipping duplicates.
pub struct MemorizeListTool {
    store: Arc<dyn ProgressStore>,
}

impl MemorizeListTool {
    pub fn new(store: Arc<dyn ProgressStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Tool for MemorizeListTool {
    fn name(&self) -> &str {
        "memorize_list"
    }

    fn description(&self) -> &str {
        "Add an item to a list in the student's learning progress, e.g. a topic just covered. \
         Items already in the list are not duplicated."
    }

    fn parameters_schema(&self) -> Value {
        memo_schema("The item to add to the list")
    }

    async fn execute(&self, arguments: Value) -> Result<ToolResult, ToolError> {
        let (key, value) = key_and_value(&arguments)?;
        let added = self
            .store
            .append_unique(key, Value::from(value))
            .await
            .map_err(|e| store_failed(self.name(), e))?;
        tracing::debug!(key, added, "Memorized list item");
        Ok(status(format!("Stored \"{key}\": \"{value}\"")))
    }
}

/// Remove a value from the list under a key.
pub struct ForgetTool {
    store: Arc<dyn ProgressStore>,
}

impl ForgetTool {
    pub fn new(store: Arc<dyn ProgressStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Tool for ForgetTool {
    fn name(&self) -> &str {
        "forget"
    }

    fn description(&self) -> &str {
        "Remove an item from a list in the student's learning progress."
    }

    fn parameters_schema(&self) -> Value {
        memo_schema("The item to remove from the list")
    }

    async fn execute(&self, arguments: Value) -> Result<ToolResult, ToolError> {
        let (key, value) = key_and_value(&arguments)?;
        let removed = self
            .store
            .remove(key, &Value::from(value))
            .await
            .map_err(|e| store_failed(self.name(), e))?;
        tracing::debug!(key, removed, "Forgot list item");
        Ok(status(format!("Removed \"{key}\": \"{value}\"")))
    }
}
