use rmcp::model::{
    CallToolRequestParam, CallToolResult, ErrorCode, Implementation, JsonObject, ListToolsResult,
    PaginatedRequestParam, ServerCapabilities, ServerInfo, ToolsCapability,
};
use rmcp::service::RequestContext;
use rmcp::{RoleServer, ServerHandler};
use serde_json::Value;
use tracing::debug;

use crate::errors::McpError;
use crate::graphql::GraphQLClient;
use crate::headers::HeaderStore;
use crate::tools::{
    describe::{DESCRIBE_TOOL_NAME, Describe},
    invoke::{INVOKE_TOOL_NAME, Invoke},
    list::{LIST_MUTATIONS_TOOL_NAME, LIST_QUERIES_TOOL_NAME, ListOperations},
    set_headers::{SET_HEADERS_TOOL_NAME, SetHeaders},
};

#[derive(Clone)]
pub(super) struct Running {
    client: GraphQLClient,
    headers: HeaderStore,
    list_queries: ListOperations,
    list_mutations: ListOperations,
    describe: Describe,
    invoke: Invoke,
    set_headers: SetHeaders,
}

impl Running {
    pub(super) fn new(client: GraphQLClient, headers: HeaderStore) -> Self {
        Self {
            client,
            headers,
            list_queries: ListOperations::queries(),
            list_mutations: ListOperations::mutations(),
            describe: Describe::new(),
            invoke: Invoke::new(),
            set_headers: SetHeaders::new(),
        }
    }

    async fn call_tool_impl(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, McpError> {
        debug!(tool = name, endpoint = %self.client.endpoint(), "Calling tool");
        match name {
            LIST_QUERIES_TOOL_NAME => Ok(self
                .list_queries
                .execute(&self.client, &self.headers.snapshot())
                .await),
            LIST_MUTATIONS_TOOL_NAME => Ok(self
                .list_mutations
                .execute(&self.client, &self.headers.snapshot())
                .await),
            DESCRIBE_TOOL_NAME => Ok(self
                .describe
                .execute(
                    convert_arguments(arguments)?,
                    &self.client,
                    &self.headers.snapshot(),
                )
                .await),
            INVOKE_TOOL_NAME => Ok(self
                .invoke
                .execute(
                    convert_arguments(arguments)?,
                    &self.client,
                    &self.headers.snapshot(),
                )
                .await),
            SET_HEADERS_TOOL_NAME => Ok(self
                .set_headers
                .execute(convert_arguments(arguments)?, &self.headers)),
            _ => Err(tool_not_found(name)),
        }
    }

    fn list_tools_impl(&self) -> ListToolsResult {
        ListToolsResult::with_all_items(vec![
            self.list_queries.tool.clone(),
            self.list_mutations.tool.clone(),
            self.describe.tool.clone(),
            self.invoke.tool.clone(),
            self.set_headers.tool.clone(),
        ])
    }
}

impl ServerHandler for Running {
    #[tracing::instrument(skip_all, fields(tool_name = request.name.as_ref(), request_id = %context.id.clone()))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        self.call_tool_impl(&request.name, request.arguments).await
    }

    #[tracing::instrument(skip_all)]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(self.list_tools_impl())
    }

    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: "graphql-mcp-bridge".to_string(),
                description: None,
                icons: None,
                title: Some("GraphQL MCP Bridge".to_string()),
                version: env!("CARGO_PKG_VERSION").to_string(),
                website_url: None,
            },
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: Some(false),
                }),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

fn tool_not_found(name: &str) -> McpError {
    McpError::new(
        ErrorCode::METHOD_NOT_FOUND,
        format!("Tool {name} not found"),
        None,
    )
}

/// Tools without arguments may be called with none at all
fn convert_arguments<T: serde::de::DeserializeOwned>(
    arguments: Option<JsonObject>,
) -> Result<T, McpError> {
    serde_json::from_value(Value::Object(arguments.unwrap_or_default()))
        .map_err(|_| McpError::new(ErrorCode::INVALID_PARAMS, "Invalid input".to_string(), None))
}
