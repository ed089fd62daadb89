//! MCP tool to describe operations and types of a GraphQL schema

use graphql_schema_index::{EntityIndex, describe};
use reqwest::header::HeaderMap;
use rmcp::model::{CallToolResult, Content, Tool};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::debug;

use super::AUTH_HINT;
use crate::graphql::GraphQLClient;
use crate::schema_from_type;

/// The name of the tool to describe schema entities
pub const DESCRIBE_TOOL_NAME: &str = "describe";

/// A tool to describe the arguments, fields and values of schema entities
#[derive(Clone)]
pub struct Describe {
    pub tool: Tool,
}

/// Input for the describe tool
#[derive(JsonSchema, Deserialize, Debug)]
pub struct Input {
    /// Comma-separated list of operations or types to describe, such as `jobs,JobsPage`.
    /// Prefix a name with `query.`, `mutation.` or `type.` to pick one of several entities
    /// sharing that name.
    pub entities: String,
}

impl Describe {
    pub fn new() -> Self {
        Self {
            tool: Tool::new(
                DESCRIBE_TOOL_NAME,
                "Describe one or more GraphQL operations or types in detail: \
                arguments and return type for operations; fields, input fields, \
                enum values or possible types for types. \
                Pass a comma-separated list, for example `jobs,JobQueryParams,JobsPage`. \
                Every name must exist in the schema; unknown names fail the whole call.",
                schema_from_type!(Input),
            ),
        }
    }

    #[tracing::instrument(skip(self, client, headers))]
    pub async fn execute(
        &self,
        input: Input,
        client: &GraphQLClient,
        headers: &HeaderMap,
    ) -> CallToolResult {
        let described = match client.introspect(headers).await {
            Ok(schema) => {
                let index = EntityIndex::build(&schema);
                debug!(entities = index.len(), "Indexed schema");
                describe(&index, &input.entities).map_err(|e| e.to_string())
            }
            Err(e) => Err(e.to_string()),
        };

        match described {
            Ok(text) => CallToolResult::success(vec![Content::text(text)]),
            Err(e) => CallToolResult::error(vec![Content::text(format!(
                "Failed to describe entities: {e}. {AUTH_HINT}"
            ))]),
        }
    }
}

impl Default for Describe {
    fn default() -> Self {
        Self::new()
    }
}
