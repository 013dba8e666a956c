//! Type descriptors consumed by the reflector.
//!
//! Rust has no runtime reflection, so a type describes its own shape through
//! [`Reflect`]. Primitive and standard-library types are covered by the impls in
//! this module; records get theirs from `#[derive(Reflect)]` or by hand.

use std::borrow::Cow;

mod impls;

/// Lazily produces the descriptor of a nested type.
///
/// Children are referenced through function pointers rather than stored inline so
/// that a self-referential type can still be described in finite space.
pub type TypeRef = fn() -> TypeInfo;

/// Types that can describe their own shape.
pub trait Reflect {
    fn type_info() -> TypeInfo;
}

/// Descriptor of a single type: its name plus the kind of value it holds.
#[derive(Debug, Clone)]
pub struct TypeInfo {
    pub name: &'static str,
    pub kind: Kind,
}

impl TypeInfo {
    pub fn new(name: &'static str, kind: Kind) -> Self {
        Self { name, kind }
    }

    /// Descriptor named after `T` as reported by [`std::any::type_name`].
    pub fn of<T: ?Sized>(kind: Kind) -> Self {
        Self::new(std::any::type_name::<T>(), kind)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntWidth {
    W8,
    W16,
    W32,
    W64,
    W128,
    Size,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloatWidth {
    F32,
    F64,
}

/// The class a type falls into.
#[derive(Debug, Clone)]
pub enum Kind {
    Bool,
    Int(IntWidth),
    Uint(IntWidth),
    Float(FloatWidth),
    Char,
    Str,
    Unit,
    /// Fixed-length sequence.
    Array(TypeRef, usize),
    /// Variable-length sequence.
    Seq(TypeRef),
    /// Record with named fields, in declaration order.
    Struct(Vec<Field>),
    /// Pointer-like or optional wrapper around a single value.
    Indirect(TypeRef),
    Tuple(Vec<TypeRef>),
    Map(TypeRef, TypeRef),
    RawPointer,
    Complex,
    Channel,
    Function,
    /// Open-ended value whose shape is only known at runtime.
    Dynamic,
    Invalid,
}

impl Kind {
    /// Short human-readable name, used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Kind::Bool => "bool",
            Kind::Int(_) => "signed integer",
            Kind::Uint(_) => "unsigned integer",
            Kind::Float(_) => "float",
            Kind::Char => "char",
            Kind::Str => "string",
            Kind::Unit => "unit",
            Kind::Array(..) => "array",
            Kind::Seq(_) => "sequence",
            Kind::Struct(_) => "struct",
            Kind::Indirect(_) => "pointer",
            Kind::Tuple(_) => "tuple",
            Kind::Map(..) => "map",
            Kind::RawPointer => "raw pointer",
            Kind::Complex => "complex",
            Kind::Channel => "channel",
            Kind::Function => "function",
            Kind::Dynamic => "interface",
            Kind::Invalid => "invalid",
        }
    }
}

/// One field of a record type.
#[derive(Debug, Clone)]
pub struct Field {
    /// Identifier as declared in source.
    pub ident: &'static str,
    /// Whether the field is visible outside its defining crate.
    pub exported: bool,
    pub ty: TypeRef,
    pub tags: Tags,
}

impl Field {
    pub fn new(ident: &'static str, exported: bool, ty: TypeRef) -> Self {
        Self {
            ident,
            exported,
            ty,
            tags: Tags::new(),
        }
    }

    /// Attach an annotation, replacing any previous value under `key`.
    pub fn tag(mut self, key: &'static str, value: impl Into<Cow<'static, str>>) -> Self {
        self.tags.insert(key, value);
        self
    }

    pub fn type_info(&self) -> TypeInfo {
        (self.ty)()
    }
}

/// Declarative key/value annotations attached to a field.
///
/// Recognised keys are `json`, `description`, `enum` and `required`; anything
/// else is carried along and ignored.
#[derive(Debug, Clone, Default)]
pub struct Tags(Vec<(&'static str, Cow<'static, str>)>);

impl Tags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: &'static str, value: impl Into<Cow<'static, str>>) {
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.0.push((key, value)),
        }
    }

    /// Value stored under `key`. An empty value reads the same as a missing one.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_ref())
            .filter(|v| !v.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.0.iter().map(|(k, v)| (*k, v.as_ref()))
    }
}
