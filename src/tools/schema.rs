use serde::{Serialize, Deserialize};
use serde_json::{json, Map, Value};

/// One parameter accepted by a tool.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArgSchema {
    pub name: String,
    /// JSON type name: `string`, `number`, `integer`, `boolean`, `object` or `array`.
    pub arg_type: String,
    pub description: String,
    pub required: bool,
}

impl ArgSchema {
    pub fn required(name: impl Into<String>, arg_type: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arg_type: arg_type.into(),
            description: description.into(),
            required: true,
        }
    }

    pub fn optional(name: impl Into<String>, arg_type: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            required: false,
            ..Self::required(name, arg_type, description)
        }
    }
}

/// Declarative description of a callable tool, as shown to the model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolSchema {
    pub name: String,
    pub description: String,
    pub args: Vec<ArgSchema>,
}

/// Function definition in the shape realtime model sessions expect.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FunctionDefinition {
    #[serde(rename = "type")]
    pub f_type: &'static str,
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

impl ToolSchema {
    pub fn new(name: impl Into<String>, description: impl Into<String>, args: Vec<ArgSchema>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            args,
        }
    }

    pub fn arg(&self, name: &str) -> Option<&ArgSchema> {
        self.args.iter().find(|a| a.name == name)
    }

    pub fn required_args(&self) -> impl Iterator<Item = &ArgSchema> {
        self.args.iter().filter(|a| a.required)
    }

    /// JSON Schema object describing the parameters.
    pub fn parameters(&self) -> Value {
        let properties: Map<String, Value> = self
            .args
            .iter()
            .map(|a| {
                (
                    a.name.clone(),
                    json!({ "type": a.arg_type, "description": a.description }),
                )
            })
            .collect();
        let required: Vec<&str> = self.required_args().map(|a| a.name.as_str()).collect();
        json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }

    pub fn to_function_definition(&self) -> FunctionDefinition {
        FunctionDefinition {
            f_type: "function",
            name: self.name.clone(),
            description: self.description.clone(),
            parameters: self.parameters(),
        }
    }
}
