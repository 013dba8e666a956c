//! Convenient re-exports for common usage patterns.
//!
//! ```rust
//! use paramschema::prelude::*;
//! ```

// Core functionality
pub use crate::{generate_schema, generate_schema_of, generate_schema_value};

// Essential types
pub use crate::{DataType, Definition, FunctionDecl, Reflect, Reflector, SchemaError, Settings};

// Commonly used external types
pub use serde_json::{json, Value};
