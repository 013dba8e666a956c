//! Turns type descriptors into schema trees.

use std::collections::BTreeMap;

use tracing::{debug, trace};

use crate::error::{Result, SchemaError};
use crate::models::{Field, Kind, Reflect, TypeInfo};
use crate::schema::{DataType, Definition};

mod field;
mod settings;

pub use field::FieldSchema;
pub use settings::Settings;

/// Recursive walk from a [`TypeInfo`] to a [`Definition`].
///
/// A reflector keeps only the bookkeeping of the walk in progress (depth and the
/// records currently open), so one instance can be reused for any number of
/// conversions, each producing an independent tree.
#[derive(Debug, Default)]
pub struct Reflector {
    settings: Settings,
    depth: usize,
    open_records: Vec<&'static str>,
}

impl Reflector {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            depth: 0,
            open_records: Vec::new(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn reflect_type<T: Reflect + ?Sized>(&mut self) -> Result<Definition> {
        self.reflect(&T::type_info())
    }

    pub fn reflect(&mut self, info: &TypeInfo) -> Result<Definition> {
        if self.depth >= self.settings.max_depth {
            return Err(SchemaError::DepthExceeded {
                limit: self.settings.max_depth,
                type_name: info.name,
            });
        }
        self.depth += 1;
        let result = self.reflect_kind(info);
        self.depth -= 1;
        result
    }

    fn reflect_kind(&mut self, info: &TypeInfo) -> Result<Definition> {
        trace!(type_name = info.name, kind = info.kind.name(), "reflecting type");

        match &info.kind {
            Kind::Str | Kind::Char => Ok(Definition::new(DataType::String)),
            Kind::Int(_) | Kind::Uint(_) => Ok(Definition::new(DataType::Integer)),
            Kind::Float(_) => Ok(Definition::new(DataType::Number)),
            Kind::Bool => Ok(Definition::new(DataType::Boolean)),
            Kind::Unit => Ok(Definition::new(DataType::Null)),
            Kind::Array(elem, _) | Kind::Seq(elem) => {
                let items = self.reflect(&elem())?;
                Ok(Definition::array(items))
            }
            Kind::Struct(fields) => self.reflect_object(info, fields),
            Kind::Indirect(pointee) => self.reflect(&pointee()),
            Kind::Tuple(_)
            | Kind::Map(..)
            | Kind::RawPointer
            | Kind::Complex
            | Kind::Channel
            | Kind::Function
            | Kind::Dynamic
            | Kind::Invalid => Err(SchemaError::unsupported(info.kind.name(), info.name)),
        }
    }

    /// Builds the closed object schema for a record from its fields.
    ///
    /// Unexported and skipped fields are left out. `required` keeps declaration
    /// order. The first field that fails aborts the whole object.
    pub fn reflect_object(&mut self, info: &TypeInfo, fields: &[Field]) -> Result<Definition> {
        if self.settings.detect_cycles && self.open_records.contains(&info.name) {
            return Err(SchemaError::CyclicType {
                type_name: info.name,
            });
        }

        self.open_records.push(info.name);
        let assembled = self.assemble(fields);
        self.open_records.pop();
        let (properties, required) = assembled?;

        debug!(
            type_name = info.name,
            properties = properties.len(),
            required = required.len(),
            "assembled object schema"
        );

        Ok(Definition {
            properties,
            required,
            ..Definition::object()
        })
    }

    fn assemble(
        &mut self,
        fields: &[Field],
    ) -> Result<(BTreeMap<String, Definition>, Vec<String>)> {
        let mut properties = BTreeMap::new();
        let mut required = Vec::new();

        for field in fields.iter().filter(|f| f.exported) {
            let Some(FieldSchema {
                name,
                schema,
                required: is_required,
            }) = self.process_field(field)?
            else {
                continue;
            };

            if is_required {
                required.push(name.clone());
            }
            properties.insert(name, schema);
        }

        Ok((properties, required))
    }
}
