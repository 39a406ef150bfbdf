pub mod batch;
pub mod config_cmd;
pub mod invoke;
pub mod tools;

use std::sync::Arc;
use tutorlab_config::AppConfig;
use tutorlab_core::tool::ToolRegistry;
use tutorlab_tools::InMemoryProgressStore;

/// Build the registry of enabled tools on a fresh progress store.
pub fn registry(config: &AppConfig) -> ToolRegistry {
    tutorlab_tools::registry_with(&config.tools.enabled, Arc::new(InMemoryProgressStore::new()))
}

/// Serialize for stdout, honoring `tools.pretty_output`.
pub fn render<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String, serde_json::Error> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}
