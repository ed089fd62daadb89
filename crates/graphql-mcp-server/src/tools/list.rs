//! MCP tools to list the root operations of a GraphQL schema

use graphql_schema_index::{mutations_listing, queries_listing};
use reqwest::header::HeaderMap;
use rmcp::model::{CallToolResult, Content, Tool};
use schemars::JsonSchema;
use serde::Deserialize;

use super::AUTH_HINT;
use crate::graphql::GraphQLClient;
use crate::schema_from_type;

/// The name of the tool to list queries
pub const LIST_QUERIES_TOOL_NAME: &str = "list_queries";

/// The name of the tool to list mutations
pub const LIST_MUTATIONS_TOOL_NAME: &str = "list_mutations";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Root {
    Query,
    Mutation,
}

/// A tool listing the signatures of every query or every mutation
#[derive(Clone)]
pub struct ListOperations {
    root: Root,
    pub tool: Tool,
}

/// Input for the listing tools, which take no arguments
#[derive(JsonSchema, Deserialize, Debug, Default)]
pub struct Input {}

impl ListOperations {
    pub fn queries() -> Self {
        Self {
            root: Root::Query,
            tool: Tool::new(
                LIST_QUERIES_TOOL_NAME,
                "List every query of the GraphQL API as a signature line such as \
                `candidate(id: String!): Candidate`. \
                Call this first to see what can be read, then use `describe` for details.",
                schema_from_type!(Input),
            ),
        }
    }

    pub fn mutations() -> Self {
        Self {
            root: Root::Mutation,
            tool: Tool::new(
                LIST_MUTATIONS_TOOL_NAME,
                "List every mutation of the GraphQL API as a signature line such as \
                `createCandidate(input: CandidateInput!): Candidate!`. \
                Use it to find the operations that change state.",
                schema_from_type!(Input),
            ),
        }
    }

    #[tracing::instrument(skip_all, fields(tool = %self.tool.name))]
    pub async fn execute(&self, client: &GraphQLClient, headers: &HeaderMap) -> CallToolResult {
        match client.introspect(headers).await {
            Ok(schema) => CallToolResult::success(vec![Content::text(match self.root {
                Root::Query => queries_listing(&schema),
                Root::Mutation => mutations_listing(&schema),
            })]),
            Err(e) => {
                let what = match self.root {
                    Root::Query => "queries",
                    Root::Mutation => "mutations",
                };
                CallToolResult::error(vec![Content::text(format!(
                    "Failed to list {what}: {e}. {AUTH_HINT}"
                ))])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::tools::result_text as text;

    async fn endpoint_with_schema(server: &mut mockito::Server) -> GraphQLClient {
        server
            .mock("POST", "/")
            .with_body(
                json!({
                    "data": {
                        "__schema": {
                            "queryType": { "name": "Query" },
                            "mutationType": { "name": "Mutation" },
                            "types": [
                                {
                                    "kind": "OBJECT",
                                    "name": "Query",
                                    "fields": [{
                                        "name": "healthcheck",
                                        "args": [{
                                            "name": "input",
                                            "type": {
                                                "kind": "NON_NULL",
                                                "ofType": { "kind": "SCALAR", "name": "String" }
                                            }
                                        }],
                                        "type": {
                                            "kind": "NON_NULL",
                                            "ofType": { "kind": "SCALAR", "name": "String" }
                                        }
                                    }]
                                },
                                {
                                    "kind": "OBJECT",
                                    "name": "Mutation",
                                    "fields": [{
                                        "name": "ping",
                                        "args": [],
                                        "type": { "kind": "SCALAR", "name": "Boolean" }
                                    }]
                                }
                            ]
                        }
                    }
                })
                .to_string(),
            )
            .create_async()
            .await;
        GraphQLClient::new(server.url().parse().unwrap())
    }

    #[tokio::test]
    async fn lists_queries() {
        let mut server = mockito::Server::new_async().await;
        let client = endpoint_with_schema(&mut server).await;

        let result = ListOperations::queries()
            .execute(&client, &HeaderMap::new())
            .await;

        assert_ne!(result.is_error, Some(true));
        assert_eq!(text(&result), "Queries:\nhealthcheck(input: String!): String!\n");
    }

    #[tokio::test]
    async fn lists_mutations() {
        let mut server = mockito::Server::new_async().await;
        let client = endpoint_with_schema(&mut server).await;

        let result = ListOperations::mutations()
            .execute(&client, &HeaderMap::new())
            .await;

        assert_eq!(text(&result), "Mutations:\nping: Boolean\n");
    }

    #[tokio::test]
    async fn fetch_failure_suggests_authorization() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/")
            .with_status(401)
            .with_body("missing token")
            .create_async()
            .await;
        let client = GraphQLClient::new(server.url().parse().unwrap());

        let result = ListOperations::mutations()
            .execute(&client, &HeaderMap::new())
            .await;

        assert_eq!(result.is_error, Some(true));
        let text = text(&result);
        assert!(text.starts_with("Failed to list mutations: "));
        assert!(text.ends_with(". Do you need to send an Authorization header?"));
    }
}
