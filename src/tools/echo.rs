//! Echo Tool Implementation
//!
//! Example tool showing the basic structure of an MCP tool: a typed input
//! deriving `Deserialize` and `JsonSchema`, and an async handler returning
//! plain text. The reply can carry a prefix configured through the
//! `ECHO_PREFIX` environment variable.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::core::error::ToolError;
use crate::core::registry::ToolRegistry;
use crate::core::tool::ToolDescriptor;
use crate::core::utils;

/// Environment variable holding an optional reply prefix.
pub const PREFIX_ENV: &str = "ECHO_PREFIX";

/// Input accepted by the echo tool.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct EchoInput {
    /// The message to echo
    pub message: String,
    /// Number of times to repeat the message, one text block each
    #[serde(default)]
    pub repeat: Option<usize>,
}

/// Build the echo tool.
///
/// # Arguments
/// * `prefix` - Text prepended to every echoed message
pub fn tool(prefix: String) -> ToolDescriptor {
    ToolDescriptor::new(
        "Echo a message back to the client.",
        move |input: EchoInput| {
            let prefix = prefix.clone();
            async move { echo(&prefix, input) }
        },
    )
}

/// Register the echo tool with the tool registry.
pub fn register(registry: &mut ToolRegistry) {
    let prefix = utils::get_env_var(PREFIX_ENV, "");
    registry.register("echo", tool(prefix));
}

fn echo(prefix: &str, input: EchoInput) -> Result<Vec<String>, ToolError> {
    let repeat = input.repeat.unwrap_or(1);
    if repeat == 0 {
        return Err(ToolError::execution("repeat must be at least 1"));
    }

    // Pre-allocate when a prefix is configured
    let reply = if prefix.is_empty() {
        input.message
    } else {
        let mut reply = String::with_capacity(prefix.len() + input.message.len());
        reply.push_str(prefix);
        reply.push_str(&input.message);
        reply
    };

    Ok(vec![reply; repeat])
}
