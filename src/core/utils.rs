//! Process-wide settings and environment helpers.
//!
//! The adapter has exactly one tunable: the maximum length of a text content
//! block before it is truncated. It is read from the environment once per
//! process and cached, so every tool sees the same limit.

use std::sync::OnceLock;

/// Environment variable overriding the maximum message length.
pub const MAX_MESSAGE_LENGTH_ENV: &str = "MAX_MESSAGE_LENGTH";

/// Maximum message length, in characters, when no override is configured.
pub const DEFAULT_MAX_MESSAGE_LENGTH: usize = 10_000;

/// Suffix appended to text cut off at the maximum message length.
pub const TRUNCATION_MARKER: &str = "... (truncated)";

static MAX_MESSAGE_LENGTH: OnceLock<usize> = OnceLock::new();

/// Get the process-wide maximum message length.
///
/// The first call reads `MAX_MESSAGE_LENGTH` from the environment; later calls
/// return the cached value. Missing, unparsable or zero values fall back to
/// [`DEFAULT_MAX_MESSAGE_LENGTH`].
pub fn max_message_length() -> usize {
    *MAX_MESSAGE_LENGTH.get_or_init(|| {
        let raw = get_env_var(MAX_MESSAGE_LENGTH_ENV, "");
        parse_max_message_length(&raw)
    })
}

/// Parse a configured maximum message length.
///
/// # Returns
/// The parsed value, or [`DEFAULT_MAX_MESSAGE_LENGTH`] if `raw` is empty, not a
/// positive integer, or zero.
pub fn parse_max_message_length(raw: &str) -> usize {
    let raw = raw.trim();
    if raw.is_empty() {
        return DEFAULT_MAX_MESSAGE_LENGTH;
    }
    match raw.parse::<usize>() {
        Ok(0) | Err(_) => {
            tracing::warn!(
                value = raw,
                default = DEFAULT_MAX_MESSAGE_LENGTH,
                "ignoring invalid {MAX_MESSAGE_LENGTH_ENV}"
            );
            DEFAULT_MAX_MESSAGE_LENGTH
        }
        Ok(limit) => limit,
    }
}

/// Get environment variable value with a default fallback.
///
/// # Arguments
/// * `key` - Environment variable name to look up
/// * `default` - Default value to return if the environment variable is not set
///
/// # Example
/// ```rust
/// use mcp_tool_adapter::core::utils::get_env_var;
///
/// let port = get_env_var("SOME_UNSET_PORT_VARIABLE", "3000");
/// assert_eq!(port, "3000");
/// ```
pub fn get_env_var(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
