#![deny(unsafe_code)]
//! Generate function-calling parameter schemas from plain Rust structs.
//!
//! ```rust
//! use paramschema::prelude::*;
//!
//! #[derive(Reflect)]
//! struct GetWeather {
//!     /// City and state, e.g. San Francisco, CA
//!     pub location: String,
//!     #[schema(json = "unit,omitempty", enum = "celsius, fahrenheit")]
//!     pub unit: Option<String>,
//! }
//!
//! let decl = FunctionDecl::for_type::<GetWeather>("get_weather", "Current weather").unwrap();
//! assert_eq!(
//!     decl.parameters.to_value().unwrap(),
//!     json!({
//!         "type": "object",
//!         "properties": {
//!             "location": { "type": "string", "description": "City and state, e.g. San Francisco, CA" },
//!             "unit": { "type": "string", "enum": ["celsius", "fahrenheit"] }
//!         },
//!         "required": ["location"],
//!         "additionalProperties": false
//!     })
//! );
//! ```

pub mod prelude;

pub use paramschema_core::*;
