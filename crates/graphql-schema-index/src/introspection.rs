//! Decoding of the standard GraphQL introspection response
//!
//! The raw shapes here mirror the JSON returned for [`INTROSPECTION_QUERY`]. They are
//! converted into a [`SchemaDocument`] with [`IntrospectionResponse::into_schema`] or
//! [`SchemaDocument::try_from`].

use itertools::Itertools as _;
use serde::Deserialize;
use tracing::debug;

use crate::error::SchemaError;
use crate::schema::{
    Argument, Field, OperationField, SchemaDocument, TypeBody, TypeDefinition, TypeRef,
};

/// The introspection query sent to the GraphQL endpoint
pub const INTROSPECTION_QUERY: &str = r#"query IntrospectionQuery {
  __schema {
    queryType { name }
    mutationType { name }
    types { ...FullType }
  }
}

fragment FullType on __Type {
  kind
  name
  fields(includeDeprecated: true) {
    name
    args { ...InputValue }
    type { ...TypeRef }
  }
  inputFields { ...InputValue }
  enumValues(includeDeprecated: true) { name }
  possibleTypes { ...TypeRef }
}

fragment InputValue on __InputValue {
  name
  type { ...TypeRef }
}

fragment TypeRef on __Type {
  kind
  name
  ofType {
    kind
    name
    ofType {
      kind
      name
      ofType {
        kind
        name
        ofType {
          kind
          name
          ofType {
            kind
            name
            ofType {
              kind
              name
              ofType {
                kind
                name
              }
            }
          }
        }
      }
    }
  }
}"#;

/// The `__TypeKind` enum of the introspection system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RawTypeKind {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
    List,
    NonNull,
}

impl RawTypeKind {
    fn as_str(&self) -> &'static str {
        match self {
            RawTypeKind::Scalar => "SCALAR",
            RawTypeKind::Object => "OBJECT",
            RawTypeKind::Interface => "INTERFACE",
            RawTypeKind::Union => "UNION",
            RawTypeKind::Enum => "ENUM",
            RawTypeKind::InputObject => "INPUT_OBJECT",
            RawTypeKind::List => "LIST",
            RawTypeKind::NonNull => "NON_NULL",
        }
    }
}

/// A full introspection HTTP response body
#[derive(Debug, Deserialize)]
pub struct IntrospectionResponse {
    #[serde(default)]
    pub data: Option<IntrospectionData>,
    #[serde(default)]
    pub errors: Option<Vec<ResponseError>>,
}

#[derive(Debug, Deserialize)]
pub struct ResponseError {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct IntrospectionData {
    #[serde(rename = "__schema")]
    pub schema: IntrospectionSchema,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionSchema {
    pub query_type: Option<RootType>,
    pub mutation_type: Option<RootType>,
    pub types: Vec<FullType>,
}

#[derive(Debug, Deserialize)]
pub struct RootType {
    pub name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullType {
    pub kind: RawTypeKind,
    pub name: Option<String>,
    pub fields: Option<Vec<RawField>>,
    pub input_fields: Option<Vec<RawInputValue>>,
    pub enum_values: Option<Vec<RawEnumValue>>,
    pub possible_types: Option<Vec<RawTypeRef>>,
}

#[derive(Debug, Deserialize)]
pub struct RawField {
    pub name: String,
    #[serde(default)]
    pub args: Vec<RawInputValue>,
    #[serde(rename = "type")]
    pub ty: RawTypeRef,
}

#[derive(Debug, Deserialize)]
pub struct RawInputValue {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: RawTypeRef,
}

#[derive(Debug, Deserialize)]
pub struct RawEnumValue {
    pub name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTypeRef {
    pub kind: RawTypeKind,
    pub name: Option<String>,
    pub of_type: Option<Box<RawTypeRef>>,
}

impl IntrospectionResponse {
    /// Convert the response into a schema document.
    ///
    /// GraphQL errors in the response take precedence over any partial data.
    pub fn into_schema(self) -> Result<SchemaDocument, SchemaError> {
        if let Some(errors) = self.errors.filter(|errors| !errors.is_empty()) {
            return Err(SchemaError::Response(
                errors.iter().map(|error| error.message.as_str()).join("; "),
            ));
        }
        self.data
            .ok_or(SchemaError::NoData)
            .and_then(|data| SchemaDocument::try_from(data.schema))
    }
}

impl RawTypeRef {
    fn to_type_ref(&self, location: &str) -> Result<TypeRef, SchemaError> {
        let malformed = |reason| SchemaError::MalformedTypeRef {
            location: location.to_string(),
            reason,
        };
        match self.kind {
            RawTypeKind::NonNull => self
                .of_type
                .as_deref()
                .ok_or_else(|| malformed("NON_NULL without an inner type"))
                .and_then(|inner| inner.to_type_ref(location))
                .map(TypeRef::non_null),
            RawTypeKind::List => self
                .of_type
                .as_deref()
                .ok_or_else(|| malformed("LIST without an inner type"))
                .and_then(|inner| inner.to_type_ref(location))
                .map(TypeRef::list),
            _ => self
                .name
                .clone()
                .map(TypeRef::Named)
                .ok_or_else(|| malformed("named type without a name")),
        }
    }
}

fn convert_fields(owner: &str, fields: Option<&[RawField]>) -> Result<Vec<Field>, SchemaError> {
    fields
        .unwrap_or_default()
        .iter()
        .map(|field| {
            let location = format!("{owner}.{}", field.name);
            Ok(Field::new(&field.name, field.ty.to_type_ref(&location)?))
        })
        .collect()
}

fn convert_input_values(
    owner: &str,
    values: Option<&[RawInputValue]>,
) -> Result<Vec<Argument>, SchemaError> {
    values
        .unwrap_or_default()
        .iter()
        .map(|value| {
            let location = format!("{owner}({})", value.name);
            Ok(Argument::new(&value.name, value.ty.to_type_ref(&location)?))
        })
        .collect()
}

fn convert_operations(root: &FullType, root_name: &str) -> Result<Vec<OperationField>, SchemaError> {
    root.fields
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(|field| {
            let location = format!("{root_name}.{}", field.name);
            Ok(OperationField::new(
                &field.name,
                convert_input_values(&location, Some(field.args.as_slice()))?,
                field.ty.to_type_ref(&location)?,
            ))
        })
        .collect()
}

impl TryFrom<&FullType> for TypeDefinition {
    type Error = SchemaError;

    fn try_from(full_type: &FullType) -> Result<Self, Self::Error> {
        let name = full_type
            .name
            .as_deref()
            .ok_or_else(|| SchemaError::UnnamedType {
                kind: full_type.kind.as_str().to_string(),
            })?;
        let body = match full_type.kind {
            RawTypeKind::Object => TypeBody::Object {
                fields: convert_fields(name, full_type.fields.as_deref())?,
            },
            RawTypeKind::Interface => TypeBody::Interface {
                fields: convert_fields(name, full_type.fields.as_deref())?,
            },
            RawTypeKind::InputObject => TypeBody::InputObject {
                input_fields: convert_input_values(name, full_type.input_fields.as_deref())?,
            },
            RawTypeKind::Enum => TypeBody::Enum {
                values: full_type
                    .enum_values
                    .iter()
                    .flatten()
                    .map(|value| value.name.clone())
                    .collect(),
            },
            RawTypeKind::Union => TypeBody::Union {
                possible_types: full_type
                    .possible_types
                    .iter()
                    .flatten()
                    .map(|possible| possible.to_type_ref(name).map(|ty| ty.base_name().to_string()))
                    .collect::<Result<_, _>>()?,
            },
            RawTypeKind::Scalar => TypeBody::Scalar,
            RawTypeKind::List | RawTypeKind::NonNull => {
                return Err(SchemaError::WrapperKindType {
                    name: name.to_string(),
                    kind: full_type.kind.as_str().to_string(),
                });
            }
        };
        Ok(TypeDefinition::new(name, body))
    }
}

impl TryFrom<IntrospectionSchema> for SchemaDocument {
    type Error = SchemaError;

    fn try_from(schema: IntrospectionSchema) -> Result<Self, Self::Error> {
        let root_fields = |root: Option<&RootType>, operation: &'static str| match root {
            None => Ok(Vec::new()),
            Some(RootType { name }) => schema
                .types
                .iter()
                .find(|full_type| full_type.name.as_deref() == Some(name.as_str()))
                .ok_or_else(|| SchemaError::MissingRootType {
                    operation,
                    name: name.clone(),
                })
                .and_then(|root| convert_operations(root, name)),
        };

        let queries = root_fields(schema.query_type.as_ref(), "query")?;
        let mutations = root_fields(schema.mutation_type.as_ref(), "mutation")?;
        let types = schema
            .types
            .iter()
            .filter(|full_type| {
                !full_type
                    .name
                    .as_deref()
                    .is_some_and(|name| name.starts_with("__"))
            })
            .map(TypeDefinition::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            queries = queries.len(),
            mutations = mutations.len(),
            types = types.len(),
            "Decoded introspection schema"
        );

        Ok(SchemaDocument {
            types,
            queries,
            mutations,
        })
    }
}
