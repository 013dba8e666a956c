//! Error handling for schema generation.

use thiserror::Error;

/// Convenient alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SchemaError>;

/// Errors that can occur while reflecting a type into a schema.
///
/// Every variant aborts the whole conversion: no partial schema is ever
/// handed back to the caller.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The type (or one nested inside it) has no JSON representation.
    #[error("unsupported type: {kind}")]
    UnsupportedType {
        kind: &'static str,
        type_name: &'static str,
    },

    /// A record type was reached again while it was still being reflected.
    #[error("cyclic type: `{type_name}` references itself")]
    CyclicType { type_name: &'static str },

    /// Nesting went deeper than the configured limit.
    #[error("maximum nesting depth of {limit} exceeded at `{type_name}`")]
    DepthExceeded {
        limit: usize,
        type_name: &'static str,
    },

    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SchemaError {
    pub(crate) fn unsupported(kind: &'static str, type_name: &'static str) -> Self {
        SchemaError::UnsupportedType { kind, type_name }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_type_names_the_kind() {
        let err = SchemaError::unsupported("map", "std::collections::HashMap<String, i32>");
        assert_eq!(err.to_string(), "unsupported type: map");
    }

    #[test]
    fn test_cyclic_type_message() {
        let err = SchemaError::CyclicType {
            type_name: "tree::Node",
        };
        assert_eq!(err.to_string(), "cyclic type: `tree::Node` references itself");
    }
}
