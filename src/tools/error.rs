use crate::retrieval::error::RetrievalError;
use crate::notify::error::NotifyError;


#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("Tool execution error in '{name}': {reason}")]
    ExecutionError {
        name: String,
        reason: String,
    },

    #[error("Retrieval error: {0}")]
    Retrieval(#[from] RetrievalError),

    #[error("Notification error: {0}")]
    Notify(#[from] NotifyError),

    #[error("Tool parameters do not match: {0}")]
    ParamsNotMatched(String),
}

impl ToolError {
    pub fn params(err: impl std::fmt::Display) -> Self {
        ToolError::ParamsNotMatched(err.to_string())
    }
}
