//! MCP tool to execute an arbitrary GraphQL operation

use reqwest::header::HeaderMap;
use rmcp::model::{CallToolResult, Content, Tool};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::graphql::GraphQLClient;
use crate::schema_from_type;

/// The name of the tool to execute a GraphQL operation
pub const INVOKE_TOOL_NAME: &str = "invoke_graphql";

/// A tool to execute a query or mutation with optional variables
#[derive(Clone)]
pub struct Invoke {
    pub tool: Tool,
}

/// Input for the invoke tool
#[derive(JsonSchema, Deserialize, Debug, Default)]
pub struct Input {
    /// The entire GraphQL query
    #[serde(default)]
    pub query: Option<String>,

    /// The entire GraphQL mutation, used instead of `query` when both are given
    #[serde(default)]
    pub mutation: Option<String>,

    /// Variables for the operation, as a JSON object or a JSON-encoded string
    #[serde(default)]
    pub variables: Option<Variables>,
}

/// Operation variables as sent by agents
#[derive(JsonSchema, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Variables {
    Object(Map<String, Value>),
    Encoded(String),
}

impl Variables {
    /// The variables object, or `None` when an empty string was given
    fn into_object(self) -> Result<Option<Map<String, Value>>, serde_json::Error> {
        match self {
            Variables::Object(object) => Ok(Some(object)),
            Variables::Encoded(encoded) if encoded.trim().is_empty() => Ok(None),
            Variables::Encoded(encoded) => serde_json::from_str(&encoded).map(Some),
        }
    }
}

impl Input {
    /// The operation to run; a non-empty mutation wins over the query
    fn operation(&self) -> Option<&str> {
        [self.mutation.as_deref(), self.query.as_deref()]
            .into_iter()
            .flatten()
            .find(|operation| !operation.trim().is_empty())
    }
}

impl Invoke {
    pub fn new() -> Self {
        Self {
            tool: Tool::new(
                INVOKE_TOOL_NAME,
                "Execute a GraphQL query or mutation against the API and return the response data \
                as JSON. Pass the full operation text in `query` or `mutation`, and any \
                `variables` the operation declares, for example \
                `{\"input\": {\"name\": \"John Doe\"}}`. \
                Use `list_queries`, `list_mutations` and `describe` first to build the operation.",
                schema_from_type!(Input),
            ),
        }
    }

    #[tracing::instrument(skip_all, fields(tool = %self.tool.name))]
    pub async fn execute(
        &self,
        input: Input,
        client: &GraphQLClient,
        headers: &HeaderMap,
    ) -> CallToolResult {
        let Some(operation) = input.operation() else {
            return CallToolResult::error(vec![Content::text(
                "No valid query or mutation provided",
            )]);
        };

        let variables = match input.variables.clone().map(Variables::into_object) {
            None => None,
            Some(Ok(variables)) => variables.map(Value::Object),
            Some(Err(e)) => {
                return CallToolResult::error(vec![Content::text(format!(
                    "Failed to parse variables JSON: {e}"
                ))]);
            }
        };

        match client.execute(operation, variables, headers).await {
            Ok(data) => match serde_json::to_string_pretty(&data) {
                Ok(pretty) => CallToolResult::success(vec![Content::text(pretty)]),
                Err(e) => CallToolResult::error(vec![Content::text(e.to_string())]),
            },
            Err(e) => CallToolResult::error(vec![Content::text(format!(
                "Failed to invoke GraphQL operation: {e}"
            ))]),
        }
    }
}

impl Default for Invoke {
    fn default() -> Self {
        Self::new()
    }
}
