use futures::{FutureExt, future::BoxFuture};
use tracing::{debug, error, info, warn};

use crate::config::RetrievalConfig;
use crate::retrieval::{
    traits::Retriever,
    error::RetrievalError,
    format_context,
    RetrievalResult,
    SearchRequest,
    SearchResponse,
    DEFAULT_COLLECTION,
};

/// Default address of the retrieval backend.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8001";

/// Retriever talking to the document search service over HTTP.
#[derive(Debug, Clone)]
pub struct HttpRetriever {
    pub(crate) client: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) collection_name: String,
}

impl HttpRetriever {
    /// Create a retriever for the backend at `base_url`, searching the default collection.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            collection_name: DEFAULT_COLLECTION.to_string(),
        }
    }

    pub fn from_config(config: &RetrievalConfig) -> Self {
        Self::new(config.base_url.clone()).with_collection(config.collection_name.clone())
    }

    /// Search a different collection.
    pub fn with_collection(mut self, collection_name: impl Into<String>) -> Self {
        self.collection_name = collection_name.into();
        self
    }

    /// Use a preconfigured HTTP client (timeouts, proxies, ...).
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn collection_name(&self) -> &str {
        &self.collection_name
    }

    fn search_request(&self, query: &str, max_results: u32, document_type: Option<&str>) -> SearchRequest {
        SearchRequest {
            query: query.to_string(),
            max_results,
            collection_name: self.collection_name.clone(),
            document_type: document_type.map(str::to_string),
        }
    }
}

impl Default for HttpRetriever {
    fn default() -> Self {
        HttpRetriever::new(DEFAULT_BASE_URL)
    }
}

impl Retriever for HttpRetriever {
    fn search<'a>(
        &'a self,
        query: &'a str,
        max_results: u32,
        document_type: Option<&'a str>,
    ) -> BoxFuture<'a, RetrievalResult<String>> {
        async move {
            info!(query, max_results, document_type, "searching knowledge base");
            let request = self.search_request(query, max_results, document_type);
            debug!(collection = %request.collection_name, "retrieval request built");

            let response = self
                .client
                .post(format!("{}/search", self.base_url))
                .json(&request)
                .send()
                .await
                .map_err(RetrievalError::transport)?;

            let status = response.status();
            if !status.is_success() {
                error!(status = status.as_u16(), "retrieval backend returned an error");
                return Err(RetrievalError::Backend { status: status.as_u16() });
            }

            let body: SearchResponse = response
                .json()
                .await
                .map_err(|e| RetrievalError::InvalidResponse(e.without_url().to_string()))?;

            if body.results.is_empty() {
                warn!(query, "no relevant documents found");
                return Ok(String::new());
            }

            info!(count = body.results.len(), "retrieved relevant documents");
            Ok(format_context(&body.results))
        }
        .boxed()
    }

    fn health_check(&self) -> BoxFuture<'_, bool> {
        async move {
            match self.client.get(format!("{}/health", self.base_url)).send().await {
                Ok(response) => response.status().is_success(),
                Err(e) => {
                    error!(error = %e.without_url(), "retrieval health check failed");
                    false
                }
            }
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let retriever = HttpRetriever::new("http://rag.internal:8001/");
        assert_eq!(retriever.base_url(), "http://rag.internal:8001");
    }

    #[test]
    fn request_carries_collection_and_filter() {
        let retriever = HttpRetriever::default().with_collection("docs_v3");
        let req = retriever.search_request("refunds", 5, Some("troubleshooting"));
        assert_eq!(req.collection_name, "docs_v3");
        assert_eq!(req.max_results, 5);
        assert_eq!(req.document_type.as_deref(), Some("troubleshooting"));
    }

    #[test]
    fn health_check_is_false_when_unreachable() {
        // Port 9 (discard) on localhost is not expected to serve HTTP.
        let retriever = HttpRetriever::new("http://127.0.0.1:9");
        assert!(!tokio_test::block_on(retriever.health_check()));
    }
}
