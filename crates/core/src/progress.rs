//! ProgressStore trait: the learning-progress key-value store.
//!
//! The tutor agents remember what a student has covered (topics, mastered
//! concepts, open questions) through the memo tools. The store is opaque
//! to the computation engines; only the memo tools touch it.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use crate::error::ProgressError;

/// A single stored value with its last write time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressEntry {
    pub value: serde_json::Value,
    pub updated_at: DateTime<Utc>,
}

impl ProgressEntry {
    pub fn new(value: serde_json::Value) -> Self {
        Self {
            value,
            updated_at: Utc::now(),
        }
    }
}

/// The core ProgressStore trait.
///
/// Implementations: in-memory (per process). A persistent backend only has
/// to implement these five calls.
#[async_trait]
pub trait ProgressStore: Send + Sync {
    /// The backend name (e.g., "in_memory").
    fn name(&self) -> &str;

    /// Overwrite the value under `key`.
    async fn set(&self, key: &str, value: serde_json::Value) -> std::result::Result<(), ProgressError>;

    /// Append `value` to the list under `key` unless already present.
    /// A missing key starts a new list. Returns whether the value was added.
    async fn append_unique(&self, key: &str, value: serde_json::Value) -> std::result::Result<bool, ProgressError>;

    /// Remove `value` from the list under `key`. A missing key is an empty
    /// list. Returns whether anything was removed.
    async fn remove(&self, key: &str, value: &serde_json::Value) -> std::result::Result<bool, ProgressError>;

    /// Get the entry under `key`.
    async fn get(&self, key: &str) -> std::result::Result<Option<ProgressEntry>, ProgressError>;

    /// All entries, ordered by key.
    async fn snapshot(&self) -> std::result::Result<BTreeMap<String, ProgressEntry>, ProgressError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_serialization() {
        let entry = ProgressEntry::new(serde_json::json!(["kinematics", "ohms_law"]));
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("ohms_law"));
        assert!(json.contains("updated_at"));
    }
}
