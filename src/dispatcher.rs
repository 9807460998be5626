use std::collections::HashMap;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use futures::FutureExt;
use serde_json::Value;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::notify::{slack::SlackNotifier, traits::TicketNotifier};
use crate::retrieval::{http::HttpRetriever, traits::Retriever};
use crate::tools::{
    error::ToolError,
    result::ToolResult,
    schema::{FunctionDefinition, ToolSchema},
    traits::{Tool, DEFAULT_FAILURE_MESSAGE},
    validate::validate_args,
    KnowledgeSearchTool,
    SupportTicketTool,
};

pub mod types;
pub mod error;
pub mod traits;

use traits::ToolDispatcher;
use types::{Dispatcher, ToolCall};
use error::DispatchError;

const UNKNOWN_TOOL_MESSAGE: &str = "Sorry, I'm not able to do that right now. Is there something else I can help you with?";

const INVALID_ARGUMENTS_MESSAGE: &str = "I'm missing some details I need to do that. Could you go over them with me again?";

const INVALID_VALUE_MESSAGE: &str = "One of the details I have for that doesn't look right. Could you check it with me again?";

impl DispatchError {
    /// Failure envelope describing this error to the model.
    pub fn to_result(&self) -> ToolResult {
        match self {
            DispatchError::UnknownTool(_) => {
                ToolResult::failure("unknown_tool", UNKNOWN_TOOL_MESSAGE).with_details(self.to_string())
            }
            DispatchError::InvalidArguments { reason, .. } => {
                ToolResult::failure("invalid_arguments", INVALID_ARGUMENTS_MESSAGE).with_details(reason.clone())
            }
            DispatchError::InvalidValue { reason, .. } => {
                ToolResult::failure("invalid_value", INVALID_VALUE_MESSAGE).with_details(reason.clone())
            }
            // Not produced by dispatch; lets callers report a failed `register` the same way.
            DispatchError::DuplicateTool(_) => {
                ToolResult::failure("duplicate_tool", DEFAULT_FAILURE_MESSAGE).with_details(self.to_string())
            }
        }
    }
}

impl Dispatcher {
    /// Create an empty dispatcher.
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Dispatcher with the knowledge search and support ticket tools wired to the given backends.
    pub fn with_default_tools(
        retriever: Arc<dyn Retriever>,
        notifier: Arc<dyn TicketNotifier>,
        default_max_results: u32,
    ) -> Result<Self, DispatchError> {
        let mut dispatcher = Self::new();
        dispatcher
            .register(Arc::new(
                KnowledgeSearchTool::new(retriever).with_default_max_results(default_max_results),
            ))?
            .register(Arc::new(SupportTicketTool::new(notifier)))?;
        Ok(dispatcher)
    }

    /// Build the HTTP-backed dispatcher described by `config`.
    pub fn from_config(config: &Config) -> crate::error::Result<Self> {
        config.validate()?;
        let webhook_url = config.notifier.webhook_url()?;
        let retriever = HttpRetriever::from_config(&config.retrieval);
        let notifier = SlackNotifier::from_config(webhook_url, &config.notifier);
        let dispatcher = Self::with_default_tools(
            Arc::new(retriever),
            Arc::new(notifier),
            config.retrieval.default_max_results,
        )?;
        Ok(dispatcher)
    }

    /// Register a tool under its schema name. Returns &mut Self for chaining.
    pub fn register(&mut self, tool: Arc<dyn Tool>) -> Result<&mut Self, DispatchError> {
        let name = tool.name().to_string();
        if self.tools.contains_key(&name) {
            return Err(DispatchError::DuplicateTool(name));
        }
        self.tools.insert(name, tool);
        Ok(self)
    }

    /// Look up a tool by name.
    pub fn get_tool(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    /// Registered tool names, sorted.
    pub fn tool_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tools.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Schemas of all registered tools, sorted by name.
    pub fn schemas(&self) -> Vec<&ToolSchema> {
        let mut schemas: Vec<&ToolSchema> = self.tools.values().map(|t| t.schema()).collect();
        schemas.sort_by(|a, b| a.name.cmp(&b.name));
        schemas
    }

    /// Function definitions to hand to the model when the session starts.
    pub fn function_definitions(&self) -> Vec<FunctionDefinition> {
        self.schemas().into_iter().map(ToolSchema::to_function_definition).collect()
    }

    /// Execute `call`, reporting lookup and argument problems as errors.
    ///
    /// Tool failures (errors or panics inside a tool) still come back as
    /// `Ok` failure envelopes built by the tool itself.
    pub async fn try_dispatch(&self, call: ToolCall) -> Result<ToolResult, DispatchError> {
        let tool = self.get_tool(&call.name).ok_or_else(|| {
            warn!(tool = %call.name, "model requested an unknown tool");
            DispatchError::UnknownTool(call.name.clone())
        })?;

        let invalid = |reason: String| {
            warn!(tool = %call.name, reason = %reason, "rejected tool arguments");
            DispatchError::InvalidArguments {
                name: call.name.clone(),
                reason,
            }
        };
        let mut args = call.arguments_object().map_err(invalid)?;
        validate_args(tool.schema(), &mut args).map_err(|e| invalid(e.to_string()))?;

        info!(tool = %call.name, "dispatching tool call");
        let outcome = AssertUnwindSafe(tool.run(Value::Object(args))).catch_unwind().await;
        match outcome {
            Ok(Ok(result)) => {
                info!(tool = %call.name, success = result.success, "tool call finished");
                Ok(result)
            }
            Ok(Err(ToolError::ParamsNotMatched(reason))) => {
                warn!(tool = %call.name, reason = %reason, "tool rejected an argument value");
                Err(DispatchError::InvalidValue {
                    name: call.name.clone(),
                    reason,
                })
            }
            Ok(Err(err)) => {
                error!(tool = %call.name, error = %err, "tool call failed");
                Ok(tool.failure(&err))
            }
            Err(_) => {
                error!(tool = %call.name, "tool panicked");
                Ok(ToolResult::failure(format!("{} failed", call.name), DEFAULT_FAILURE_MESSAGE)
                    .with_details("tool panicked"))
            }
        }
    }
}

#[async_trait::async_trait]
impl ToolDispatcher for Dispatcher {
    async fn dispatch(&self, call: ToolCall) -> ToolResult {
        match self.try_dispatch(call).await {
            Ok(result) => result,
            Err(err) => err.to_result(),
        }
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Dispatcher::new()
    }
}
