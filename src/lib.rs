//! MCP Tool Adapter
//!
//! Sits between a Model Context Protocol runtime and the functions that
//! implement individual tools. It converts each tool's input type into the
//! JSON Schema advertised by `tools/list`, and turns whatever a handler
//! returns into the content-block envelope expected by `tools/call`,
//! truncating oversized text along the way.
//!
//! ```rust
//! use mcp_tool_adapter::{ToolDescriptor, ToolRegistry};
//!
//! let mut registry = ToolRegistry::new();
//! registry.register(
//!     "ping",
//!     ToolDescriptor::without_input("Reply with pong", || async { Ok("pong") }),
//! );
//! let listing = registry.list()?;
//! assert_eq!(listing[0].name, "ping");
//! # Ok::<(), serde_json::Error>(())
//! ```

pub mod core;
pub mod tools;

pub use crate::core::error::ToolError;
pub use crate::core::registry::ToolRegistry;
pub use crate::core::response::{
    CallToolResult, ContentBlock, HandlerResponse, normalize, normalize_with_limit,
};
pub use crate::core::schema::{ToolInfo, build_tool_listing, convert_schema, input_schema};
pub use crate::core::tool::{ToolDescriptor, ToolHandler};
pub use crate::core::utils::{DEFAULT_MAX_MESSAGE_LENGTH, TRUNCATION_MARKER, max_message_length};
