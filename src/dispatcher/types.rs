use std::collections::HashMap;
use std::sync::Arc;
use serde::{Serialize, Deserialize};
use serde_json::{Map, Value};
use crate::tools::traits::Tool;

/// Routes tool calls to registered tools by name.
///
/// Built once at startup; dispatching only reads the table, so a shared
/// `Arc<Dispatcher>` serves concurrent calls without locking.
pub struct Dispatcher {
    /// Registered tools keyed by their schema name.
    pub(crate) tools: HashMap<String, Arc<dyn Tool>>,
}

/// A function call emitted by the model.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ToolCall {
    pub name: String,
    /// Arguments object, or that object encoded as a JSON string.
    #[serde(default, alias = "args")]
    pub arguments: Value,
}

impl ToolCall {
    pub fn new(name: impl Into<String>, arguments: Value) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }

    /// Decode the arguments into a JSON object.
    ///
    /// Missing arguments (null or an empty string) decode to an empty object.
    pub fn arguments_object(&self) -> Result<Map<String, Value>, String> {
        match &self.arguments {
            Value::Null => Ok(Map::new()),
            Value::Object(map) => Ok(map.clone()),
            Value::String(raw) if raw.trim().is_empty() => Ok(Map::new()),
            Value::String(raw) => match serde_json::from_str::<Value>(raw) {
                Ok(Value::Object(map)) => Ok(map),
                Ok(_) => Err("arguments must be a JSON object".to_string()),
                Err(e) => Err(format!("arguments are not valid JSON: {}", e)),
            },
            _ => Err("arguments must be a JSON object".to_string()),
        }
    }
}
