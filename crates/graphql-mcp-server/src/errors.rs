use graphql_schema_index::SchemaError;
use reqwest::StatusCode;
use reqwest::header::{InvalidHeaderName, InvalidHeaderValue};
use tokio::task::JoinError;

/// An error in server initialization
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Could not bind server address: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to start server: {0}")]
    StartupError(#[from] JoinError),

    #[error("Failed to initialize MCP server: {0}")]
    McpInitializeError(#[from] Box<rmcp::service::ServerInitializeError>),
}

/// Headers that could not be parsed or applied
#[derive(Debug, thiserror::Error)]
pub enum HeaderError {
    #[error("failed to parse headers JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid header name: {0}")]
    Name(#[from] InvalidHeaderName),

    #[error("invalid header value: {0}")]
    Value(#[from] InvalidHeaderValue),
}

/// A failed round trip to the GraphQL endpoint
#[derive(Debug, thiserror::Error)]
pub enum GraphQLError {
    #[error("request to GraphQL endpoint failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("GraphQL endpoint returned status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("invalid introspection result: {0}")]
    Schema(#[from] SchemaError),

    #[error("graphql: {0}")]
    Response(String),
}

/// An MCP tool error
pub type McpError = rmcp::model::ErrorData;
