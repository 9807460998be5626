use futures::future::BoxFuture;
use crate::retrieval::RetrievalResult;

/// Document search backend.
///
/// The returned futures may borrow their inputs, so implementations don't
/// need to clone the query.
pub trait Retriever: Send + Sync {
    /// Search for documents matching `query`, returning at most `max_results`
    /// snippets joined into one context blob. An empty string means nothing
    /// relevant was found; it is not an error.
    fn search<'a>(
        &'a self,
        query: &'a str,
        max_results: u32,
        document_type: Option<&'a str>,
    ) -> BoxFuture<'a, RetrievalResult<String>>;

    /// Liveness probe. Network failures report `false` rather than an error.
    fn health_check(&self) -> BoxFuture<'_, bool>;
}
