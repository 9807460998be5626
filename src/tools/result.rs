use serde::{Serialize, Deserialize};
use serde_json::{Map, Value};

/// Envelope returned to the model for every tool call.
///
/// `message` is always something the assistant can say out loud. Failures
/// additionally carry a machine-readable `error` and optional `details`.
/// Tool-specific payload (context, ticket id, ...) sits alongside at the top level.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolResult {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(flatten)]
    pub data: Map<String, Value>,
}

/// Serialized form used if an envelope somehow fails to serialize.
const FALLBACK_JSON: &str = r#"{"success":false,"message":"Something went wrong on my side. Please try again.","error":"serialization_failed"}"#;

impl ToolResult {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            error: None,
            details: None,
            data: Map::new(),
        }
    }

    pub fn failure(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            error: Some(error.into()),
            details: None,
            data: Map::new(),
        }
    }

    /// Attach a payload field.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    /// JSON text ready to be placed in the conversation transcript.
    pub fn to_json_string(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| FALLBACK_JSON.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_flattens_payload() {
        let res = ToolResult::success("done").with("ticket_id", "ZOCKET-1");
        let value: Value = serde_json::from_str(&res.to_json_string()).unwrap();
        assert_eq!(value, json!({"success": true, "message": "done", "ticket_id": "ZOCKET-1"}));
    }

    #[test]
    fn failure_carries_error_and_details() {
        let res = ToolResult::failure("boom", "Please try again").with_details("status 500");
        let value = serde_json::to_value(&res).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["error"], "boom");
        assert_eq!(value["details"], "status 500");
        assert_eq!(value["message"], "Please try again");
    }

    #[test]
    fn parses_back_with_extra_fields() {
        let res: ToolResult =
            serde_json::from_str(r#"{"success":true,"message":"m","context":"c"}"#).unwrap();
        assert_eq!(res.get("context"), Some(&json!("c")));
        assert_eq!(res.error, None);
    }

    #[test]
    fn fallback_is_valid_json() {
        let value: Value = serde_json::from_str(FALLBACK_JSON).unwrap();
        assert_eq!(value["success"], false);
    }
}
