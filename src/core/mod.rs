//! Core Adapter Module
//!
//! This module contains the adapter between the MCP runtime and tool handlers:
//! - tool.rs: Tool descriptor and handler type
//! - schema.rs: Input schema conversion and `tools/list` entries
//! - response.rs: Handler response normalization into `tools/call` results
//! - registry.rs: Ordered tool registry wiring the two together
//! - error.rs: Dispatch errors
//! - utils.rs: Process-wide settings and environment helpers

pub mod error;
pub mod registry;
pub mod response;
pub mod schema;
pub mod tool;
pub mod utils;
