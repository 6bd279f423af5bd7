//! Error types for tool dispatch.
//!
//! Schema conversion and response normalization are total functions and never
//! fail. Errors only arise when the registry dispatches a call: the tool may be
//! unknown, the arguments may not match the tool's input type, or the handler
//! itself may fail.

use thiserror::Error;

/// Errors raised while dispatching a tool call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolError {
    /// No tool is registered under the requested name.
    #[error("Unknown tool: {0}")]
    NotFound(String),

    /// The call arguments could not be deserialized into the tool's input type.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The handler ran and reported a failure.
    #[error("Execution failed: {0}")]
    Execution(String),
}

impl ToolError {
    /// Shorthand for handlers reporting a failure.
    pub fn execution(message: impl Into<String>) -> Self {
        Self::Execution(message.into())
    }

    /// JSON-RPC error code the protocol runtime should report for this error.
    pub fn code(&self) -> i32 {
        match self {
            Self::NotFound(_) => -32601,        // Method not found
            Self::InvalidArguments(_) => -32602, // Invalid params
            Self::Execution(_) => -32603,        // Internal error
        }
    }
}
