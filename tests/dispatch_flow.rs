//! Full dispatch path: config -> dispatcher -> tools -> mock HTTP backends.

use std::sync::Arc;

use mockito::{Matcher, Mock, Server, ServerGuard};
use serde_json::{json, Value};
use voice_agent_tools::prelude::*;

struct Backends {
    server: ServerGuard,
    dispatcher: Dispatcher,
}

impl Backends {
    async fn new() -> Self {
        let server = Server::new_async().await;
        let mut config = Config::default();
        config.retrieval.base_url = server.url();
        config.notifier.webhook_url = Some(format!("{}/webhook", server.url()));
        let dispatcher = Dispatcher::from_config(&config).expect("valid config");
        Self { server, dispatcher }
    }

    async fn search_returns(&mut self, status: usize, body: Value) -> Mock {
        self.server
            .mock("POST", "/search")
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .create_async()
            .await
    }

    async fn webhook_returns(&mut self, status: usize, expect: usize) -> Mock {
        self.server
            .mock("POST", "/webhook")
            .with_status(status)
            .expect(expect)
            .create_async()
            .await
    }
}

fn ticket_args() -> Value {
    json!({
        "customer_name": "Ana",
        "customer_lastname": "Ruiz",
        "company_name": "Acme",
        "issue_summary": "Ads rejected",
        "issue_details": "Every ad is rejected for policy reasons",
        "priority": "urgent",
        "category": "bug_report"
    })
}

#[tokio::test]
async fn every_tool_succeeds_with_healthy_backends() {
    let mut backends = Backends::new().await;
    let _search = backends
        .search_returns(200, json!({"results": [{"content": "Use the wizard."}], "query": "q"}))
        .await;
    let _hook = backends.webhook_returns(200, 1).await;

    let valid_args = [
        ("search_zocket_knowledge", json!({"query": "how to create campaigns"})),
        ("raise_support_ticket", ticket_args()),
    ];
    assert_eq!(backends.dispatcher.tool_names().len(), valid_args.len());
    for (name, args) in valid_args {
        let res = backends.dispatcher.dispatch(ToolCall::new(name, args)).await;
        assert!(res.success, "{} failed: {:?}", name, res);
    }
}

#[tokio::test]
async fn search_result_is_model_ready_json() {
    let mut backends = Backends::new().await;
    let _search = backends
        .search_returns(
            200,
            json!({"results": [{"content": "Step one."}, {"content": "Step two."}], "query": "campaigns"}),
        )
        .await;

    let call = ToolCall::new(
        "search_zocket_knowledge",
        json!("{\"query\":\"campaigns\",\"max_results\":2}"),
    );
    let raw = backends.dispatcher.dispatch_json(call).await;
    let value: Value = serde_json::from_str(&raw).unwrap();

    assert_eq!(value["success"], true);
    assert_eq!(value["query"], "campaigns");
    let context = value["context"].as_str().unwrap();
    assert!(context.contains("[Document 1]\nStep one."));
    assert!(context.contains("[Document 2]\nStep two."));
    assert!(context.contains("---"));
}

#[tokio::test]
async fn no_results_is_a_graceful_success() {
    let mut backends = Backends::new().await;
    let _search = backends.search_returns(200, json!({"results": [], "query": "unicorns"})).await;

    let res = backends
        .dispatcher
        .dispatch(ToolCall::new("search_zocket_knowledge", json!({"query": "unicorns"})))
        .await;

    assert!(res.success);
    assert!(res.get("context").is_none());
    assert_eq!(res.get("results"), Some(&json!([])));
    assert!(res.message.contains("couldn't find"));
}

#[tokio::test]
async fn backend_failure_does_not_leak_details_to_speech() {
    let mut backends = Backends::new().await;
    let url = backends.server.url();
    let _search = backends.search_returns(500, json!({"detail": "Search failed: boom"})).await;

    let res = backends
        .dispatcher
        .dispatch(ToolCall::new("search_zocket_knowledge", json!({"query": "billing"})))
        .await;

    assert!(!res.success);
    assert_eq!(res.error.as_deref(), Some("Knowledge base search failed"));
    assert!(!res.message.contains(&url));
    assert!(!res.message.contains("500"));
    assert!(!res.message.contains("boom"));
}

#[tokio::test]
async fn failed_ticket_delivery_asks_user_to_retry() {
    let mut backends = Backends::new().await;
    let hook = backends.webhook_returns(500, 1).await;

    let res = backends
        .dispatcher
        .dispatch(ToolCall::new("raise_support_ticket", ticket_args()))
        .await;

    hook.assert_async().await;
    assert!(!res.success);
    assert!(res.message.contains("try again or contact support directly"));
    assert!(res.get("ticket_id").is_none());
    assert!(res.details.unwrap().contains("500"));
}

#[tokio::test]
async fn incomplete_ticket_never_reaches_webhook() {
    let mut backends = Backends::new().await;
    let hook = backends.webhook_returns(200, 0).await;

    let mut args = ticket_args();
    args.as_object_mut().unwrap().remove("company_name");
    let res = backends
        .dispatcher
        .dispatch(ToolCall::new("raise_support_ticket", args))
        .await;

    hook.assert_async().await;
    assert!(!res.success);
    assert_eq!(res.error.as_deref(), Some("invalid_arguments"));
    assert!(res.details.unwrap().contains("company_name"));
}

#[tokio::test]
async fn mistyped_max_results_searches_with_default() {
    let mut backends = Backends::new().await;
    let search = backends
        .server
        .mock("POST", "/search")
        .match_body(Matcher::PartialJson(json!({"query": "x", "max_results": 3})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"results": [{"content": "Use the wizard."}], "query": "x"}).to_string())
        .expect(1)
        .create_async()
        .await;

    let res = backends
        .dispatcher
        .dispatch(ToolCall::new(
            "search_zocket_knowledge",
            json!({"query": "x", "max_results": "two"}),
        ))
        .await;

    search.assert_async().await;
    assert!(res.success, "{:?}", res);
    assert!(res.get("context").is_some());
}

#[tokio::test]
async fn unknown_priority_is_reported_as_invalid_value() {
    let mut backends = Backends::new().await;
    let hook = backends.webhook_returns(200, 0).await;

    let mut args = ticket_args();
    args["priority"] = json!("critical");
    let res = backends
        .dispatcher
        .dispatch(ToolCall::new("raise_support_ticket", args))
        .await;

    hook.assert_async().await;
    assert!(!res.success);
    assert_eq!(res.error.as_deref(), Some("invalid_value"));
    assert!(!res.message.contains("missing"));
    assert!(res.details.unwrap().contains("critical"));
}

#[tokio::test]
async fn unknown_tool_gets_failure_envelope() {
    let backends = Backends::new().await;
    let res = backends
        .dispatcher
        .dispatch(ToolCall::new("nonexistent", json!({})))
        .await;
    assert!(!res.success);
    assert_eq!(res.error.as_deref(), Some("unknown_tool"));
}

#[tokio::test]
async fn concurrent_dispatches_are_independent() {
    let mut backends = Backends::new().await;
    let hook = backends.webhook_returns(200, 4).await;
    let dispatcher = Arc::new(std::mem::take(&mut backends.dispatcher));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let dispatcher = Arc::clone(&dispatcher);
            tokio::spawn(async move {
                dispatcher
                    .dispatch(ToolCall::new("raise_support_ticket", ticket_args()))
                    .await
            })
        })
        .collect();

    let mut ids = Vec::new();
    for handle in handles {
        let res = handle.await.unwrap();
        assert!(res.success);
        ids.push(res.get("ticket_id").and_then(Value::as_str).unwrap().to_string());
    }
    hook.assert_async().await;
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 4);
}
