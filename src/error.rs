use crate::retrieval::error::RetrievalError;
use crate::notify::error::NotifyError;
use crate::tools::error::ToolError;
use crate::dispatcher::error::DispatchError;
use crate::config::ConfigError;


#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Retrieval error: {0}")]
    Retrieval(#[from] RetrievalError),

    #[error("Notification error: {0}")]
    Notify(#[from] NotifyError),

    #[error("Tool error: {0}")]
    Tool(#[from] ToolError),

    #[error("Dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, Error>;
