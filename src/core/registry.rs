//! Tool Registry
//!
//! Holds the tools a server exposes, in registration order, and connects them
//! to the two adapter transformations:
//! - `list` builds the `tools/list` payload with converted schemas
//! - `call` runs a handler and normalizes what it returns
//!
//! Transport and JSON-RPC framing belong to the protocol runtime that owns the
//! registry.

use indexmap::IndexMap;
use serde_json::Value;

use crate::core::error::ToolError;
use crate::core::response::{self, CallToolResult, HandlerResponse};
use crate::core::schema::{self, ToolInfo};
use crate::core::tool::ToolDescriptor;

/// Registry of available MCP tools.
///
/// Tools are kept in an insertion-ordered map so `tools/list` reports them in
/// the order they were registered.
#[derive(Debug, Default)]
pub struct ToolRegistry {
    tools: IndexMap<String, ToolDescriptor>,
}

impl ToolRegistry {
    /// Create a new empty tool registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool with the registry.
    ///
    /// Registering a name twice replaces the earlier tool but keeps its
    /// position in the listing.
    ///
    /// # Arguments
    /// * `name` - Unique tool identifier (e.g., "echo")
    /// * `tool` - Tool descriptor with description, schema and handler
    pub fn register(&mut self, name: impl Into<String>, tool: ToolDescriptor) {
        let name = name.into();
        tracing::debug!(tool = %name, "registering tool");
        if self.tools.insert(name.clone(), tool).is_some() {
            tracing::warn!(tool = %name, "tool registered twice, keeping the latest definition");
        }
    }

    /// Look up a tool by name.
    pub fn get(&self, name: &str) -> Option<&ToolDescriptor> {
        self.tools.get(name)
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether no tools are registered.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Registered tools in registration order.
    pub fn tools(&self) -> &IndexMap<String, ToolDescriptor> {
        &self.tools
    }

    /// Build the `tools/list` payload.
    ///
    /// # Errors
    /// Propagates the failure of a tool schema that cannot be serialized.
    pub fn list(&self) -> Result<Vec<ToolInfo>, serde_json::Error> {
        schema::build_tool_listing(&self.tools)
    }

    /// Execute a tool with the provided arguments.
    ///
    /// The handler's return value is normalized into a `tools/call` result. A
    /// handler failure is reported to the client as a result flagged with
    /// `isError` rather than as an `Err`.
    ///
    /// # Arguments
    /// * `name` - Name of the tool to call
    /// * `arguments` - Raw JSON arguments from the request
    ///
    /// # Errors
    /// * [`ToolError::NotFound`] if no tool has that name
    /// * [`ToolError::InvalidArguments`] if the arguments do not match the
    ///   tool's input type
    pub async fn call(&self, name: &str, arguments: Value) -> Result<CallToolResult, ToolError> {
        let tool = self
            .tools
            .get(name)
            .ok_or_else(|| ToolError::NotFound(name.to_string()))?;

        tracing::debug!(tool = name, "calling tool");
        match tool.invoke(arguments).await {
            Ok(response) => Ok(response::normalize(response)),
            Err(ToolError::Execution(message)) => {
                tracing::warn!(tool = name, error = %message, "tool execution failed");
                let text = HandlerResponse::Text(format!("Error: {}", message));
                let mut result = response::normalize(text);
                result.is_error = Some(true);
                Ok(result)
            }
            Err(e) => Err(e),
        }
    }
}
