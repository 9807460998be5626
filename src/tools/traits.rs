use super::error::ToolError;
use super::result::ToolResult;

// re-export schema types for tool implementors
pub use super::schema::{ArgSchema, ToolSchema};

/// Spoken fallback when a tool fails and has no message of its own.
pub const DEFAULT_FAILURE_MESSAGE: &str =
    "Sorry, something went wrong while I was handling that. Please try again, or I can connect you with a human agent.";

#[async_trait::async_trait]
pub trait Tool: Send + Sync {
    fn schema(&self) -> &ToolSchema;

    fn name(&self) -> &str {
        &self.schema().name
    }

    fn description(&self) -> &str {
        &self.schema().description
    }

    fn args(&self) -> &[ArgSchema] {
        &self.schema().args
    }

    /// Envelope reported when `run` returns an error.
    fn failure(&self, err: &ToolError) -> ToolResult {
        ToolResult::failure(format!("{} failed", self.name()), DEFAULT_FAILURE_MESSAGE)
            .with_details(err.to_string())
    }

    async fn run(&self, input: serde_json::Value) -> Result<ToolResult, ToolError>;
}
