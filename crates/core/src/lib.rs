//! # tutorlab Core
//!
//! Domain types, traits, and error definitions for the tutorlab
//! computation layer. This crate has **no engine logic**; it defines the
//! contract that the science engines and the tool façade implement against.
//!
//! ## Design Philosophy
//!
//! Every seam is defined here:
//! - [`Tool`] / [`ToolRegistry`]: what the agents can call
//! - [`Failure`] / [`ErrorKind`]: how engines report recoverable failures
//! - [`ProgressStore`]: where learning progress lives
//! - [`normalize_key`]: the one key-matching rule used everywhere

pub mod error;
pub mod failure;
pub mod normalize;
pub mod progress;
pub mod tool;

// Re-export key types at crate root for ergonomics
pub use error::{Error, ProgressError, Result, ToolError};
pub use failure::{ErrorKind, Failure};
pub use normalize::{normalize_key, normalize_opt};
pub use progress::{ProgressEntry, ProgressStore};
pub use tool::{Tool, ToolCall, ToolDefinition, ToolRegistry, ToolResult};
