//! The JSON-Schema subset emitted for tool parameters.

use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

mod function;

pub use function::FunctionDecl;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    Object,
    Number,
    Integer,
    String,
    Array,
    Null,
    Boolean,
}

/// One node of a schema tree.
///
/// Which of `properties`/`items` is meaningful is decided by `data_type`; the
/// constructors only ever populate the one that matches. Empty collections and
/// `None` are left out when serializing, except that object nodes always carry a
/// `properties` map.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Definition {
    #[serde(rename = "type")]
    pub data_type: DataType,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "enum")]
    pub enum_values: Vec<String>,
    #[serde(default)]
    pub properties: BTreeMap<String, Definition>,
    #[serde(default)]
    pub required: Vec<String>,
    #[serde(default)]
    pub items: Option<Box<Definition>>,
    #[serde(default, rename = "additionalProperties")]
    pub additional_properties: Option<Value>,
}

impl Definition {
    pub fn new(data_type: DataType) -> Self {
        Self {
            data_type,
            description: None,
            enum_values: Vec::new(),
            properties: BTreeMap::new(),
            required: Vec::new(),
            items: None,
            additional_properties: None,
        }
    }

    /// Closed object with no properties yet.
    pub fn object() -> Self {
        Self {
            additional_properties: Some(Value::Bool(false)),
            ..Self::new(DataType::Object)
        }
    }

    pub fn array(items: Definition) -> Self {
        Self {
            items: Some(Box::new(items)),
            ..Self::new(DataType::Array)
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_enum<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enum_values = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_object(&self) -> bool {
        self.data_type == DataType::Object
    }

    pub fn to_value(&self) -> crate::Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

impl Serialize for Definition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("type", &self.data_type)?;
        if let Some(description) = self.description.as_deref().filter(|d| !d.is_empty()) {
            map.serialize_entry("description", description)?;
        }
        if !self.enum_values.is_empty() {
            map.serialize_entry("enum", &self.enum_values)?;
        }
        if self.is_object() || !self.properties.is_empty() {
            map.serialize_entry("properties", &self.properties)?;
        }
        if !self.required.is_empty() {
            map.serialize_entry("required", &self.required)?;
        }
        if let Some(items) = &self.items {
            map.serialize_entry("items", items)?;
        }
        if let Some(additional) = &self.additional_properties {
            map.serialize_entry("additionalProperties", additional)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_primitive_serializes_type_only() {
        let value = Definition::new(DataType::Integer).to_value().unwrap();
        assert_eq!(value, json!({ "type": "integer" }));
    }

    #[test]
    fn test_empty_object_keeps_properties() {
        let value = Definition::object().to_value().unwrap();
        assert_eq!(
            value,
            json!({
                "type": "object",
                "properties": {},
                "additionalProperties": false
            })
        );
    }

    #[test]
    fn test_metadata_emitted_when_present() {
        let node = Definition::new(DataType::String)
            .with_description("Temperature unit")
            .with_enum(["celsius", "fahrenheit"]);
        assert_eq!(
            node.to_value().unwrap(),
            json!({
                "type": "string",
                "description": "Temperature unit",
                "enum": ["celsius", "fahrenheit"]
            })
        );
    }

    #[test]
    fn test_empty_description_is_omitted() {
        let node = Definition::new(DataType::Boolean).with_description("");
        assert_eq!(node.to_value().unwrap(), json!({ "type": "boolean" }));
    }

    #[test]
    fn test_array_carries_items() {
        let node = Definition::array(Definition::new(DataType::Number));
        assert_eq!(
            node.to_value().unwrap(),
            json!({ "type": "array", "items": { "type": "number" } })
        );
    }

    #[test]
    fn test_deserialize_reads_back() {
        let raw = json!({
            "type": "object",
            "properties": {
                "city": { "type": "string", "description": "City name" },
                "days": { "type": "array", "items": { "type": "integer" } }
            },
            "required": ["city"],
            "additionalProperties": false
        });
        let node: Definition = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(node.required, vec!["city".to_string()]);
        assert_eq!(node.properties["days"].items.as_deref().map(|i| i.data_type), Some(DataType::Integer));
        assert_eq!(node.to_value().unwrap(), raw);
    }
}
