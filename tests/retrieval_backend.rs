//! HttpRetriever against a mock retrieval backend.

use mockito::{Matcher, Server};
use serde_json::json;
use voice_agent_tools::retrieval::{error::RetrievalError, http::HttpRetriever, traits::Retriever};

#[tokio::test]
async fn two_documents_become_numbered_context() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/search")
        .match_body(Matcher::Json(json!({
            "query": "how to create campaigns",
            "max_results": 2,
            "collection_name": "zocket_collectionV2"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "results": [
                    {"content": "Open the campaign wizard."},
                    {"content": "Pick an objective and budget."}
                ],
                "query": "how to create campaigns"
            })
            .to_string(),
        )
        .create_async()
        .await;

    let retriever = HttpRetriever::new(server.url());
    let context = retriever.search("how to create campaigns", 2, None).await.unwrap();

    mock.assert_async().await;
    assert_eq!(
        context,
        "[Document 1]\nOpen the campaign wizard.\n\n---\n\n[Document 2]\nPick an objective and budget."
    );
}

#[tokio::test]
async fn document_type_and_collection_are_forwarded() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/search")
        .match_body(Matcher::PartialJson(json!({
            "document_type": "troubleshooting",
            "collection_name": "support_v3"
        })))
        .with_status(200)
        .with_body(r#"{"results":[],"query":"ads rejected"}"#)
        .create_async()
        .await;

    let retriever = HttpRetriever::new(server.url()).with_collection("support_v3");
    let context = retriever.search("ads rejected", 3, Some("troubleshooting")).await.unwrap();

    mock.assert_async().await;
    assert_eq!(context, "");
}

#[tokio::test]
async fn server_error_carries_status() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/search")
        .with_status(500)
        .with_body("internal error")
        .create_async()
        .await;

    let retriever = HttpRetriever::new(server.url());
    let err = retriever.search("anything", 3, None).await.unwrap_err();
    assert!(matches!(err, RetrievalError::Backend { status: 500 }));
}

#[tokio::test]
async fn malformed_body_is_invalid_response() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/search")
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    let retriever = HttpRetriever::new(server.url());
    let err = retriever.search("anything", 3, None).await.unwrap_err();
    assert!(matches!(err, RetrievalError::InvalidResponse(_)));
}

#[tokio::test]
async fn unreachable_backend_hides_url() {
    let retriever = HttpRetriever::new("http://127.0.0.1:9");
    let err = retriever.search("anything", 3, None).await.unwrap_err();
    assert!(matches!(err, RetrievalError::Transport(_)));
    assert!(!err.to_string().contains("127.0.0.1"));
}

#[tokio::test]
async fn health_reflects_status() {
    let mut server = Server::new_async().await;
    let healthy = server
        .mock("GET", "/health")
        .with_status(200)
        .with_body(r#"{"status":"healthy"}"#)
        .create_async()
        .await;

    let retriever = HttpRetriever::new(server.url());
    assert!(retriever.health_check().await);
    healthy.assert_async().await;
    healthy.remove_async().await;

    let _unhealthy = server
        .mock("GET", "/health")
        .with_status(503)
        .create_async()
        .await;
    assert!(!retriever.health_check().await);
}
