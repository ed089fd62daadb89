/// An introspection result that cannot be turned into a [`crate::SchemaDocument`].
///
/// A conforming GraphQL server never produces these; they indicate a broken or
/// truncated introspection response.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("malformed type reference at {location}: {reason}")]
    MalformedTypeRef {
        location: String,
        reason: &'static str,
    },

    #[error("schema type of kind {kind} has no name")]
    UnnamedType { kind: String },

    #[error("type '{name}' has wrapper kind {kind}, expected a named type kind")]
    WrapperKindType { name: String, kind: String },

    #[error("root {operation} type '{name}' is not defined in the schema")]
    MissingRootType {
        operation: &'static str,
        name: String,
    },

    #[error("introspection response contained no schema data")]
    NoData,

    #[error("introspection request returned errors: {0}")]
    Response(String),
}
