use super::types::ToolCall;
use crate::tools::result::ToolResult;

/// Entry point used by the model layer to execute tool calls.
#[async_trait::async_trait]
pub trait ToolDispatcher: Send + Sync {
    /// Execute `call`. Never fails: every problem is reported as a failure envelope.
    async fn dispatch(&self, call: ToolCall) -> ToolResult;

    /// Execute `call` and serialize the envelope for the conversation transcript.
    async fn dispatch_json(&self, call: ToolCall) -> String {
        self.dispatch(call).await.to_json_string()
    }
}
