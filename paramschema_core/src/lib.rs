#![deny(unsafe_code)]
//! Reflection from Rust types to the JSON-Schema subset used for LLM
//! function-calling parameters.
//!
//! A type describes itself through [`Reflect`] (usually derived), and a
//! [`Reflector`] walks that description into a [`Definition`] tree:
//!
//! ```
//! use paramschema_core::{generate_schema, Reflect};
//!
//! #[derive(Reflect)]
//! struct GetWeather {
//!     /// City and state, e.g. San Francisco, CA
//!     pub location: String,
//!     #[schema(enum = "celsius,fahrenheit", json = "unit,omitempty")]
//!     pub unit: Option<String>,
//! }
//!
//! let schema = generate_schema::<GetWeather>().unwrap();
//! assert_eq!(schema.required, vec!["location"]);
//! ```

// Lets derived impls name this crate by path from inside it too.
extern crate self as paramschema_core;

pub mod error;
pub mod models;
pub mod reflect;
pub mod schema;

use serde_json::Value;

pub use error::{Result, SchemaError};
pub use models::{Field, FloatWidth, IntWidth, Kind, Reflect, Tags, TypeInfo, TypeRef};
pub use paramschema_macros::Reflect;
pub use reflect::{FieldSchema, Reflector, Settings};
pub use schema::{DataType, Definition, FunctionDecl};

/// Schema for `T` using default [`Settings`].
pub fn generate_schema<T: Reflect + ?Sized>() -> Result<Definition> {
    Reflector::default().reflect_type::<T>()
}

/// Schema for the type of `value`; the value itself is never inspected.
pub fn generate_schema_of<T: Reflect + ?Sized>(_value: &T) -> Result<Definition> {
    generate_schema::<T>()
}

/// Schema for `T`, already serialized to JSON.
pub fn generate_schema_value<T: Reflect + ?Sized>() -> Result<Value> {
    generate_schema::<T>()?.to_value()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Reflect)]
    #[allow(dead_code)]
    struct Search {
        /// Free-text query
        pub query: String,
        #[schema(json = "limit,omitempty")]
        pub limit: Option<u32>,
        hidden: bool,
    }

    #[test]
    fn test_derive_inside_core() {
        assert_eq!(
            generate_schema_value::<Search>().unwrap(),
            json!({
                "type": "object",
                "properties": {
                    "query": { "type": "string", "description": "Free-text query" },
                    "limit": { "type": "integer" }
                },
                "required": ["query"],
                "additionalProperties": false
            })
        );
    }

    #[test]
    fn test_schema_of_value_matches_type() {
        let tags: Vec<String> = vec!["a".into()];
        assert_eq!(
            generate_schema_of(&tags).unwrap(),
            generate_schema::<Vec<String>>().unwrap()
        );
    }
}
