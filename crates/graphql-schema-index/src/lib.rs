#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Turns a GraphQL introspection result into text an agent can read.
//!
//! The crate decodes the standard introspection response shape into a [`SchemaDocument`],
//! renders type references and operation signatures, and builds an [`EntityIndex`] mapping
//! every query, mutation and named type to a description block. Everything here is pure and
//! synchronous; fetching the introspection result is left to the caller.

pub mod describe;
pub mod error;
pub mod index;
pub mod introspection;
pub mod listing;
pub mod render;
pub mod schema;

pub use describe::{EntityNotFound, describe};
pub use error::SchemaError;
pub use index::{EntityIndex, Namespace};
pub use introspection::{INTROSPECTION_QUERY, IntrospectionResponse, IntrospectionSchema};
pub use listing::{list_mutations, list_queries, mutations_listing, queries_listing};
pub use render::format_field;
pub use schema::{
    Argument, Field, OperationField, SchemaDocument, TypeBody, TypeDefinition, TypeKind, TypeRef,
};
