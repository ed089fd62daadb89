//! Typed view of an introspected schema

use std::fmt;

/// A reference to a type, possibly wrapped in non-null and list modifiers
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    Named(String),
    NonNull(Box<TypeRef>),
    List(Box<TypeRef>),
}

impl TypeRef {
    pub fn named(name: impl Into<String>) -> Self {
        TypeRef::Named(name.into())
    }

    pub fn non_null(inner: TypeRef) -> Self {
        TypeRef::NonNull(Box::new(inner))
    }

    pub fn list(inner: TypeRef) -> Self {
        TypeRef::List(Box::new(inner))
    }

    /// The named type at the bottom of any wrappers
    pub fn base_name(&self) -> &str {
        match self {
            TypeRef::Named(name) => name,
            TypeRef::NonNull(inner) | TypeRef::List(inner) => inner.base_name(),
        }
    }
}

/// An argument of an operation, or an input field of an input object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    pub name: String,
    pub ty: TypeRef,
}

impl Argument {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// An output field of an object or interface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub ty: TypeRef,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// A single query or mutation entry point
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationField {
    pub name: String,
    pub arguments: Vec<Argument>,
    pub return_type: TypeRef,
}

impl OperationField {
    pub fn new(name: impl Into<String>, arguments: Vec<Argument>, return_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            arguments,
            return_type,
        }
    }
}

/// The kind of a named schema type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Object,
    InputObject,
    Enum,
    Scalar,
    Interface,
    Union,
}

impl TypeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeKind::Object => "OBJECT",
            TypeKind::InputObject => "INPUT_OBJECT",
            TypeKind::Enum => "ENUM",
            TypeKind::Scalar => "SCALAR",
            TypeKind::Interface => "INTERFACE",
            TypeKind::Union => "UNION",
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The kind-specific contents of a named type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeBody {
    Object { fields: Vec<Field> },
    InputObject { input_fields: Vec<Argument> },
    Enum { values: Vec<String> },
    Scalar,
    Interface { fields: Vec<Field> },
    Union { possible_types: Vec<String> },
}

/// A named type declared by the schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDefinition {
    pub name: String,
    pub body: TypeBody,
}

impl TypeDefinition {
    pub fn new(name: impl Into<String>, body: TypeBody) -> Self {
        Self {
            name: name.into(),
            body,
        }
    }

    pub fn kind(&self) -> TypeKind {
        match self.body {
            TypeBody::Object { .. } => TypeKind::Object,
            TypeBody::InputObject { .. } => TypeKind::InputObject,
            TypeBody::Enum { .. } => TypeKind::Enum,
            TypeBody::Scalar => TypeKind::Scalar,
            TypeBody::Interface { .. } => TypeKind::Interface,
            TypeBody::Union { .. } => TypeKind::Union,
        }
    }
}

/// The root of an introspected schema.
///
/// `types` holds every named type in declaration order, built-in introspection types
/// excluded. `queries` and `mutations` are the fields of the query and mutation root types.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaDocument {
    pub types: Vec<TypeDefinition>,
    pub queries: Vec<OperationField>,
    pub mutations: Vec<OperationField>,
}
