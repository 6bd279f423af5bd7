//! Response Normalization
//!
//! Tool handlers may return a single string, a list of strings, or a complete
//! MCP `tools/call` result. This module turns any of those into the result
//! envelope the protocol expects, cutting oversized text blocks down to the
//! configured maximum message length.

use serde::{Deserialize, Serialize};

use crate::core::utils::{self, TRUNCATION_MARKER};

/// One unit of a `tools/call` result payload.
///
/// The normalizer only ever produces `Text` blocks. The other kinds reach the
/// client when a handler returns a complete [`CallToolResult`] itself.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    /// Plain text content
    Text { text: String },
    /// Base64-encoded image data
    Image {
        data: String,
        #[serde(rename = "mimeType")]
        mime_type: String,
    },
    /// Embedded resource, passed to the client verbatim
    Resource { resource: serde_json::Value },
}

impl ContentBlock {
    /// Create a text content block.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }
}

/// MCP `tools/call` result envelope.
///
/// Serializes as `{"content": [...]}` with an optional `isError` flag.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct CallToolResult {
    /// Content blocks in display order
    pub content: Vec<ContentBlock>,
    /// Set when the tool reports a failure to the client
    #[serde(rename = "isError", default, skip_serializing_if = "Option::is_none")]
    pub is_error: Option<bool>,
}

impl CallToolResult {
    /// Build a successful result from content blocks.
    pub fn new(content: Vec<ContentBlock>) -> Self {
        Self { content, is_error: None }
    }

    /// Build a failed result carrying a single `"Error: ..."` text block.
    pub fn error(message: impl std::fmt::Display) -> Self {
        Self {
            content: vec![ContentBlock::text(format!("Error: {}", message))],
            is_error: Some(true),
        }
    }

    /// Whether the result is flagged as a tool failure.
    pub fn is_error(&self) -> bool {
        self.is_error.unwrap_or(false)
    }
}

/// The value a tool handler resolves with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Displayed as a single text block
    Text(String),
    /// Each string displayed as a separate text block
    Texts(Vec<String>),
    /// Complete result, returned to the client untouched
    Envelope(CallToolResult),
}

impl From<String> for HandlerResponse {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for HandlerResponse {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<Vec<String>> for HandlerResponse {
    fn from(texts: Vec<String>) -> Self {
        Self::Texts(texts)
    }
}

impl From<CallToolResult> for HandlerResponse {
    fn from(result: CallToolResult) -> Self {
        Self::Envelope(result)
    }
}

/// Normalize a handler response using the process-wide maximum message length.
pub fn normalize(response: HandlerResponse) -> CallToolResult {
    normalize_with_limit(response, utils::max_message_length())
}

/// Normalize a handler response into a `tools/call` result.
///
/// Text responses are truncated element by element to `max_length` characters
/// and wrapped as text blocks in their original order. Envelopes are returned
/// as-is: no truncation and no wrapping.
///
/// # Arguments
/// * `response` - Value the handler resolved with
/// * `max_length` - Maximum characters per text block before truncation
pub fn normalize_with_limit(response: HandlerResponse, max_length: usize) -> CallToolResult {
    let texts = match response {
        HandlerResponse::Text(text) => vec![text],
        HandlerResponse::Texts(texts) => texts,
        HandlerResponse::Envelope(result) => return result,
    };

    let content = texts
        .into_iter()
        .map(|text| ContentBlock::Text {
            text: truncate(text, max_length),
        })
        .collect();

    CallToolResult::new(content)
}

/// Cut `text` to its first `max_length` characters and append the marker.
///
/// Text at or under the limit is returned unchanged. Lengths count Unicode
/// scalar values, so a multi-byte character is never split.
fn truncate(text: String, max_length: usize) -> String {
    match text.char_indices().nth(max_length) {
        Some((cut, _)) => {
            tracing::warn!(
                bytes = text.len(),
                max_length,
                "truncating tool output"
            );
            let mut text = text;
            text.truncate(cut);
            text.push_str(TRUNCATION_MARKER);
            text
        }
        None => text,
    }
}
