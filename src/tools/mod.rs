//! Tools Module
//!
//! This module contains the bundled MCP tool implementations. Each tool is a
//! separate module exporting a `register` function that adds it to the
//! registry during server initialization.

pub mod echo;

use crate::core::registry::ToolRegistry;

/// Initialize and register all bundled tools.
///
/// Add new tool registrations here when implementing additional tools:
/// `your_tool::register(&mut registry);`
pub fn initialize_tools() -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    echo::register(&mut registry);
    registry
}
