
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("Retrieval backend returned status {status}")]
    Backend {
        status: u16,
    },

    #[error("Retrieval transport error: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Invalid retrieval response: {0}")]
    InvalidResponse(String),
}

impl RetrievalError {
    /// Wrap a transport failure, dropping the request URL from the error.
    pub fn transport(err: reqwest::Error) -> Self {
        RetrievalError::Transport(err.without_url())
    }
}
