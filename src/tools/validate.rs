use serde_json::{Map, Value};
use tracing::warn;

use super::error::ToolError;
use super::schema::ToolSchema;

fn type_matches(arg_type: &str, value: &Value) -> bool {
    match arg_type {
        "string" => value.is_string(),
        "number" => value.is_number(),
        "integer" => value.is_i64() || value.is_u64(),
        "boolean" => value.is_boolean(),
        "object" => value.is_object(),
        "array" => value.is_array(),
        // Types we don't know about are left to the handler.
        _ => true,
    }
}

/// Check call arguments against a tool's declared parameters.
///
/// Required parameters must be present, non-null and of their declared type.
/// Optional parameters with the wrong type are dropped so the handler falls
/// back to its default. Undeclared keys pass through.
pub fn validate_args(schema: &ToolSchema, args: &mut Map<String, Value>) -> Result<(), ToolError> {
    let missing: Vec<&str> = schema
        .required_args()
        .filter(|a| args.get(&a.name).is_none_or(Value::is_null))
        .map(|a| a.name.as_str())
        .collect();
    if !missing.is_empty() {
        return Err(ToolError::ParamsNotMatched(format!(
            "missing required parameter(s): {}",
            missing.join(", ")
        )));
    }

    for arg in &schema.args {
        match args.get(&arg.name) {
            Some(Value::Null) | None => {}
            Some(value) if type_matches(&arg.arg_type, value) => {}
            Some(_) if arg.required => {
                return Err(ToolError::ParamsNotMatched(format!(
                    "parameter '{}' must be of type {}",
                    arg.name, arg.arg_type
                )));
            }
            Some(_) => {
                warn!(tool = %schema.name, param = %arg.name, "dropping optional parameter with wrong type");
                args.remove(&arg.name);
            }
        }
    }
    Ok(())
}
