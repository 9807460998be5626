
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("Notification webhook returned status {status}")]
    Delivery {
        status: u16,
    },

    #[error("Notification transport error: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Notification payload error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl NotifyError {
    /// Wrap a transport failure, dropping the webhook URL (it embeds a secret).
    pub fn transport(err: reqwest::Error) -> Self {
        NotifyError::Transport(err.without_url())
    }
}
