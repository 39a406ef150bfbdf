//! Error types for the tutorlab domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Engine failures that the calling agent should see as data live in
//! [`crate::failure`]; the types here are for faults in the plumbing.

use thiserror::Error;

/// The top-level error type for tutorlab operations.
#[derive(Debug, Error)]
pub enum Error {
    // --- Tool errors ---
    #[error("Tool error: {0}")]
    Tool(#[from] ToolError),

    // --- Serialization ---
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // --- I/O ---
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

// --- Bounded context errors ---

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ToolError {
    #[error("Tool not found: {0}")]
    NotFound(String),

    #[error("Tool execution failed: {tool_name}: {reason}")]
    ExecutionFailed { tool_name: String, reason: String },

    #[error("Invalid tool arguments: {0}")]
    InvalidArguments(String),
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProgressError {
    #[error("Key '{key}' does not hold a list")]
    NotAList { key: String },
}
