use std::sync::Arc;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{error, info};

use crate::retrieval::{traits::Retriever, DEFAULT_MAX_RESULTS};
use super::{
    error::ToolError,
    result::ToolResult,
    traits::{ArgSchema, Tool, ToolSchema},
};

pub const TOOL_NAME: &str = "search_zocket_knowledge";

const NO_MATCH_MESSAGE: &str = "I couldn't find specific information about that in our knowledge base. Let me know if you'd like me to search for something else, or I can connect you with a specialist who can help.";

const UNAVAILABLE_MESSAGE: &str = "I'm experiencing technical difficulties accessing our knowledge base. Please try again, or I can connect you with a human agent for immediate assistance.";

fn knowledge_schema() -> ToolSchema {
    ToolSchema::new(
        TOOL_NAME,
        "Search Zocket's comprehensive knowledge base including product features, tutorials, troubleshooting guides, and marketing strategies. Use this when users ask about Zocket-specific topics.",
        vec![
            ArgSchema::required(
                "query",
                "string",
                "The search query to find relevant information about Zocket (e.g., 'how to create campaigns', 'product features', 'troubleshooting ads', 'marketing strategies', 'tutorials')",
            ),
            ArgSchema::optional(
                "document_type",
                "string",
                "Optional: Filter by document type. Use 'troubleshooting' for fixing troubleshooting issues/problems, or 'product_features_or_tutorials' for features, capabilities, and how-to guides. Leave empty to search all documents.",
            ),
            ArgSchema::optional(
                "max_results",
                "number",
                "Maximum number of relevant documents to return (default: 3)",
            ),
        ],
    )
}

#[derive(Debug, Deserialize)]
struct SearchArgs {
    query: String,
    #[serde(default)]
    document_type: Option<String>,
    #[serde(default)]
    max_results: Option<Value>,
}

/// Knowledge-base search backed by a [`Retriever`].
pub struct KnowledgeSearchTool {
    retriever: Arc<dyn Retriever>,
    default_max_results: u32,
    schema: ToolSchema,
}

impl KnowledgeSearchTool {
    pub fn new(retriever: Arc<dyn Retriever>) -> Self {
        Self {
            retriever,
            default_max_results: DEFAULT_MAX_RESULTS,
            schema: knowledge_schema(),
        }
    }

    pub fn with_default_max_results(mut self, max_results: u32) -> Self {
        self.default_max_results = max_results.max(1);
        self
    }

    /// Missing, zero, negative or non-numeric counts fall back to the default.
    fn max_results(&self, requested: Option<&Value>) -> u32 {
        requested
            .and_then(Value::as_f64)
            .filter(|n| *n >= 1.0)
            .map(|n| n.min(u32::MAX as f64) as u32)
            .unwrap_or(self.default_max_results)
    }
}

#[async_trait::async_trait]
impl Tool for KnowledgeSearchTool {
    fn schema(&self) -> &ToolSchema {
        &self.schema
    }

    async fn run(&self, input: Value) -> Result<ToolResult, ToolError> {
        let args: SearchArgs = serde_json::from_value(input).map_err(ToolError::params)?;
        let max_results = self.max_results(args.max_results.as_ref());
        let document_type = args
            .document_type
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty());
        info!(query = %args.query, "searching knowledge base for tool call");

        let outcome = self.retriever.search(&args.query, max_results, document_type).await;
        match outcome {
            Ok(context) if context.trim().is_empty() => {
                Ok(ToolResult::success(NO_MATCH_MESSAGE).with("results", json!([])))
            }
            Ok(context) => Ok(ToolResult::success(format!(
                "Found relevant information about \"{}\". Here's what I found:",
                args.query
            ))
            .with("context", context)
            .with("query", args.query)),
            Err(err) => {
                error!(error = %err, "knowledge search failed");
                Ok(ToolResult::failure("Knowledge base search failed", UNAVAILABLE_MESSAGE)
                    .with_details(err.to_string()))
            }
        }
    }
}
