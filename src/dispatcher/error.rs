
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("Tool already registered: {0}")]
    DuplicateTool(String),

    #[error("Tool not found: {0}")]
    UnknownTool(String),

    #[error("Invalid arguments for '{name}': {reason}")]
    InvalidArguments {
        name: String,
        reason: String,
    },

    #[error("Invalid value for '{name}': {reason}")]
    InvalidValue {
        name: String,
        reason: String,
    },
}
