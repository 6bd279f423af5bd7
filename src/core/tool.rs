//! Tool Descriptor
//!
//! The shape every tool conforms to: a description, an optional input schema
//! and an async handler. Typed handlers receive arguments already
//! deserialized into their input type; `serde` does the validation.

use std::fmt;
use std::future::Future;

use futures_util::future::{self, BoxFuture, FutureExt};
use schemars::JsonSchema;
use schemars::schema::RootSchema;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::core::error::ToolError;
use crate::core::response::HandlerResponse;
use crate::core::schema;

/// Tool handler function type definition.
///
/// Handlers take the raw JSON arguments of a `tools/call` request and resolve
/// with a [`HandlerResponse`]. They must be Send + Sync so a registry can be
/// shared across threads.
pub type ToolHandler =
    Box<dyn Fn(Value) -> BoxFuture<'static, Result<HandlerResponse, ToolError>> + Send + Sync>;

/// A callable tool exposed to MCP clients.
pub struct ToolDescriptor {
    /// Human-readable description of what the tool does
    pub description: String,
    /// Schema of the accepted input; `None` means an object with no fields
    pub input_schema: Option<RootSchema>,
    /// Function that executes the tool
    pub handler: ToolHandler,
}

impl ToolDescriptor {
    /// Create a tool whose handler takes a typed input.
    ///
    /// The input schema is generated from `I`. Arguments that fail to
    /// deserialize into `I` are rejected with [`ToolError::InvalidArguments`]
    /// before the handler runs.
    ///
    /// # Arguments
    /// * `description` - Human-readable description of the tool
    /// * `handler` - Async function executing the tool
    pub fn new<I, F, Fut, R>(description: impl Into<String>, handler: F) -> Self
    where
        I: DeserializeOwned + JsonSchema + Send + 'static,
        F: Fn(I) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<R, ToolError>> + Send + 'static,
        R: Into<HandlerResponse> + 'static,
    {
        let handler: ToolHandler = Box::new(move |args: Value| {
            match serde_json::from_value::<I>(args) {
                Ok(input) => handler(input)
                    .map(|res| res.map(Into::<HandlerResponse>::into))
                    .boxed(),
                Err(e) => {
                    let err = ToolError::InvalidArguments(e.to_string());
                    future::ready(Err::<HandlerResponse, _>(err)).boxed()
                }
            }
        });

        Self {
            description: description.into(),
            input_schema: Some(schema::input_schema::<I>()),
            handler,
        }
    }

    /// Create a tool that takes no input.
    ///
    /// No schema is recorded, so the tool is listed with the empty object
    /// schema. Any arguments sent by the client are ignored.
    pub fn without_input<F, Fut, R>(description: impl Into<String>, handler: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<R, ToolError>> + Send + 'static,
        R: Into<HandlerResponse> + 'static,
    {
        Self {
            description: description.into(),
            input_schema: None,
            handler: Box::new(move |_args: Value| {
                handler()
                    .map(|res| res.map(Into::<HandlerResponse>::into))
                    .boxed()
            }),
        }
    }

    /// Run the handler against raw call arguments.
    pub fn invoke(&self, arguments: Value) -> BoxFuture<'static, Result<HandlerResponse, ToolError>> {
        (self.handler)(arguments)
    }
}

impl fmt::Debug for ToolDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolDescriptor")
            .field("description", &self.description)
            .field("input_schema", &self.input_schema.is_some())
            .finish_non_exhaustive()
    }
}
