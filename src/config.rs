use std::path::Path;
use serde::{Serialize, Deserialize};

use crate::notify::id::DEFAULT_TICKET_PREFIX;
use crate::retrieval::{http::DEFAULT_BASE_URL, DEFAULT_COLLECTION, DEFAULT_MAX_RESULTS};

pub const ENV_RETRIEVAL_URL: &str = "VOICE_TOOLS_RETRIEVAL_URL";
pub const ENV_COLLECTION: &str = "VOICE_TOOLS_COLLECTION";
pub const ENV_WEBHOOK_URL: &str = "VOICE_TOOLS_WEBHOOK_URL";
pub const ENV_TICKET_PREFIX: &str = "VOICE_TOOLS_TICKET_PREFIX";
pub const ENV_LOG_LEVEL: &str = "VOICE_TOOLS_LOG_LEVEL";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Missing configuration: {0}")]
    MissingConfig(String),
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Settings for the document search backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RetrievalConfig {
    pub base_url: String,
    pub collection_name: String,
    pub default_max_results: u32,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            collection_name: DEFAULT_COLLECTION.to_string(),
            default_max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

/// Settings for ticket notifications.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NotifierConfig {
    /// Incoming webhook URL. Treated as a secret; usually supplied through the environment.
    pub webhook_url: Option<String>,
    pub ticket_prefix: String,
}

impl NotifierConfig {
    pub fn webhook_url(&self) -> Result<&str, ConfigError> {
        self.webhook_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| {
                ConfigError::MissingConfig(format!("notifier.webhook_url (or {})", ENV_WEBHOOK_URL))
            })
    }
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            webhook_url: None,
            ticket_prefix: DEFAULT_TICKET_PREFIX.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub retrieval: RetrievalConfig,
    pub notifier: NotifierConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            retrieval: RetrievalConfig::default(),
            notifier: NotifierConfig::default(),
        }
    }
}

fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

impl Config {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    /// Override settings from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_env_from(|key| std::env::var(key).ok());
    }

    /// Override settings from `lookup`; blank values are ignored.
    pub fn apply_env_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        if let Some(url) = get(ENV_RETRIEVAL_URL) {
            self.retrieval.base_url = url;
        }
        if let Some(collection) = get(ENV_COLLECTION) {
            self.retrieval.collection_name = collection;
        }
        if let Some(url) = get(ENV_WEBHOOK_URL) {
            self.notifier.webhook_url = Some(url);
        }
        if let Some(prefix) = get(ENV_TICKET_PREFIX) {
            self.notifier.ticket_prefix = prefix;
        }
        if let Some(level) = get(ENV_LOG_LEVEL) {
            self.log_level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_http_url(&self.retrieval.base_url) {
            return Err(ConfigError::InvalidConfig(format!(
                "retrieval.base_url must be an http(s) URL, got '{}'",
                self.retrieval.base_url
            )));
        }
        if self.retrieval.collection_name.trim().is_empty() {
            return Err(ConfigError::InvalidConfig("retrieval.collection_name is empty".into()));
        }
        if self.retrieval.default_max_results == 0 {
            return Err(ConfigError::InvalidConfig(
                "retrieval.default_max_results must be at least 1".into(),
            ));
        }
        if self.notifier.ticket_prefix.trim().is_empty() {
            return Err(ConfigError::InvalidConfig("notifier.ticket_prefix is empty".into()));
        }
        // The webhook URL is a secret; keep it out of the message.
        if !is_http_url(self.notifier.webhook_url()?) {
            return Err(ConfigError::InvalidConfig(
                "notifier.webhook_url must be an http(s) URL".into(),
            ));
        }
        Ok(())
    }
}
