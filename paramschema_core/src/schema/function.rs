use serde::Serialize;
use serde_json::Value;

use crate::{generate_schema, Definition, Reflect, Result};

/// Function declaration handed to an LLM alongside a request.
///
/// Only describes the function; executing it is left to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionDecl {
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub strict: bool,
    pub parameters: Definition,
}

impl FunctionDecl {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: Definition,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            strict: false,
            parameters,
        }
    }

    /// Declaration whose parameters are the schema of `T`.
    pub fn for_type<T: Reflect + ?Sized>(
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self::new(name, description, generate_schema::<T>()?))
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Wraps the declaration as an element of a chat-completion `tools` list.
    pub fn to_tool_json(&self) -> Result<Value> {
        Ok(serde_json::json!({
            "type": "function",
            "function": serde_json::to_value(self)?,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DataType, Field, Kind, TypeInfo};
    use serde_json::json;

    struct Lookup;

    impl Reflect for Lookup {
        fn type_info() -> TypeInfo {
            TypeInfo::of::<Self>(Kind::Struct(vec![Field::new(
                "Query",
                true,
                <String as Reflect>::type_info,
            )
            .tag("json", "query")
            .tag("description", "Search terms")]))
        }
    }

    #[test]
    fn test_for_type_builds_parameters() {
        let decl = FunctionDecl::for_type::<Lookup>("lookup", "Look something up").unwrap();
        assert_eq!(decl.parameters.data_type, DataType::Object);
        assert_eq!(
            serde_json::to_value(&decl).unwrap(),
            json!({
                "name": "lookup",
                "description": "Look something up",
                "parameters": {
                    "type": "object",
                    "properties": {
                        "query": { "type": "string", "description": "Search terms" }
                    },
                    "required": ["query"],
                    "additionalProperties": false
                }
            })
        );
    }

    #[test]
    fn test_tool_json_envelope() {
        let decl = FunctionDecl::new("noop", "", Definition::object()).strict(true);
        assert_eq!(
            decl.to_tool_json().unwrap(),
            json!({
                "type": "function",
                "function": {
                    "name": "noop",
                    "strict": true,
                    "parameters": {
                        "type": "object",
                        "properties": {},
                        "additionalProperties": false
                    }
                }
            })
        );
    }
}
