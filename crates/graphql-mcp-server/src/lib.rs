#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod errors;
pub mod graphql;
pub mod headers;
pub(crate) mod json_schema;
pub mod runtime;
pub mod server;
pub mod tools;
