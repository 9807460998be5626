//! Tool-call dispatch for a voice assistant.
//!
//! The model layer hands each function call to a [`Dispatcher`](dispatcher::types::Dispatcher),
//! which routes it to a registered tool and always answers with a JSON
//! [`ToolResult`](tools::result::ToolResult) the assistant can speak from.
//! Two tools ship with the crate: a knowledge-base search over an HTTP
//! retrieval backend and a support-ticket handover posted to a Slack webhook.

pub mod retrieval;
pub mod notify;
pub mod tools;
pub mod dispatcher;
pub mod config;
pub mod error;
pub mod prelude;

pub use error::{Error, Result};
