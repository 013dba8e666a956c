use tracing::{debug, warn};

use super::Reflector;
use crate::error::Result;
use crate::models::Field;
use crate::schema::Definition;

/// What a single field contributes to its parent object.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSchema {
    pub name: String,
    pub schema: Definition,
    pub required: bool,
}

impl Reflector {
    /// Resolves one field's serialized name, value schema and required flag.
    ///
    /// Returns `Ok(None)` for a field marked to be skipped. Annotations are
    /// applied as description, then enum values, then the `required` override.
    pub fn process_field(&mut self, field: &Field) -> Result<Option<FieldSchema>> {
        let (name, mut required) = match parse_json_tag(field.tags.get("json"), field.ident) {
            JsonTag::Skip => {
                debug!(field = field.ident, "skipping field");
                return Ok(None);
            }
            JsonTag::Named { name, omitempty } => (name.to_owned(), !omitempty),
        };

        let mut schema = self.reflect(&field.type_info())?;

        if let Some(description) = field.tags.get("description").map(str::trim) {
            if !description.is_empty() {
                schema.description = Some(description.to_owned());
            }
        }

        if let Some(values) = field.tags.get("enum").map(parse_enum) {
            if !values.is_empty() {
                schema.enum_values = values;
            }
        }

        if let Some(raw) = field.tags.get("required") {
            match parse_bool(raw) {
                Some(parsed) => required = parsed,
                None => warn!(
                    field = field.ident,
                    value = raw,
                    "ignoring unparseable `required` annotation"
                ),
            }
        }

        Ok(Some(FieldSchema {
            name,
            schema,
            required,
        }))
    }
}

#[derive(Debug, PartialEq, Eq)]
enum JsonTag<'a> {
    Skip,
    Named { name: &'a str, omitempty: bool },
}

/// Splits a `name,opt,opt` serialization tag.
///
/// An absent tag or an empty name portion falls back to the declared identifier;
/// a name portion of `-` drops the field.
fn parse_json_tag<'a>(tag: Option<&'a str>, ident: &'a str) -> JsonTag<'a> {
    let Some(tag) = tag else {
        return JsonTag::Named {
            name: ident,
            omitempty: false,
        };
    };

    let mut parts = tag.split(',');
    let name = parts.next().unwrap_or_default();
    if name == "-" {
        return JsonTag::Skip;
    }

    JsonTag::Named {
        name: if name.is_empty() { ident } else { name },
        omitempty: parts.any(|opt| opt.trim() == "omitempty"),
    }
}

fn parse_enum(tag: &str) -> Vec<String> {
    tag.split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Boolean spellings accepted in `required` annotations.
fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}
