pub mod traits;
pub mod http;
pub mod error;

use serde::{Serialize, Deserialize};

/// Number of documents requested when the caller does not ask for a specific count.
pub const DEFAULT_MAX_RESULTS: u32 = 3;

/// Collection searched when none is configured.
pub const DEFAULT_COLLECTION: &str = "zocket_collectionV2";

/// Separator placed between consecutive documents in a context blob.
pub const DOCUMENT_SEPARATOR: &str = "\n\n---\n\n";

/// Body of `POST /search` on the retrieval backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchRequest {
    pub query: String,
    pub max_results: u32,
    pub collection_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_type: Option<String>,
}

/// Response of `POST /search`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<SearchHit>,
    #[serde(default)]
    pub query: String,
}

/// A single retrieved snippet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchHit {
    pub content: String,
}

/// Join retrieved snippets into one context blob, keeping backend order.
///
/// Every snippet is introduced by a `[Document N]` header (1-based) so the
/// model can tell sources apart. No hits yields an empty string.
pub fn format_context(hits: &[SearchHit]) -> String {
    hits.iter()
        .enumerate()
        .map(|(index, hit)| format!("[Document {}]\n{}", index + 1, hit.content))
        .collect::<Vec<_>>()
        .join(DOCUMENT_SEPARATOR)
}

/// Result type for retrieval operations.
pub type RetrievalResult<T> = std::result::Result<T, error::RetrievalError>;
