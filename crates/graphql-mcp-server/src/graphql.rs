//! Execute GraphQL requests against the configured endpoint

use graphql_schema_index::{INTROSPECTION_QUERY, IntrospectionResponse, SchemaDocument};
use reqwest::header::HeaderMap;
use serde_json::{Map, Value};
use tracing::debug;
use url::Url;

use crate::errors::GraphQLError;

/// A client for one GraphQL endpoint.
///
/// Headers are supplied per call so that updates made through `set_headers` apply to the
/// next request.
#[derive(Debug, Clone)]
pub struct GraphQLClient {
    endpoint: Url,
    http: reqwest::Client,
}

impl GraphQLClient {
    pub fn new(endpoint: Url) -> Self {
        Self {
            endpoint,
            http: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Fetch and decode the schema of the endpoint.
    ///
    /// Every call performs a fresh introspection so schema changes show up immediately.
    #[tracing::instrument(skip_all, fields(endpoint = %self.endpoint))]
    pub async fn introspect(&self, headers: &HeaderMap) -> Result<SchemaDocument, GraphQLError> {
        let response: IntrospectionResponse = self
            .post(INTROSPECTION_QUERY, None, headers)
            .await?
            .json()
            .await?;
        Ok(response.into_schema()?)
    }

    /// Execute an operation and return the `data` of the response
    #[tracing::instrument(skip(self, variables, headers), fields(endpoint = %self.endpoint))]
    pub async fn execute(
        &self,
        operation: &str,
        variables: Option<Value>,
        headers: &HeaderMap,
    ) -> Result<Value, GraphQLError> {
        let mut response: Value = self.post(operation, variables, headers).await?.json().await?;

        if let Some(messages) = error_messages(&response) {
            return Err(GraphQLError::Response(messages));
        }

        Ok(response
            .get_mut("data")
            .map(Value::take)
            .unwrap_or(Value::Null))
    }

    async fn post(
        &self,
        query: &str,
        variables: Option<Value>,
        headers: &HeaderMap,
    ) -> Result<reqwest::Response, GraphQLError> {
        let mut body = Map::new();
        body.insert("query".to_string(), Value::String(query.to_string()));
        if let Some(variables) = variables {
            body.insert("variables".to_string(), variables);
        }

        let response = self
            .http
            .post(self.endpoint.clone())
            .headers(headers.clone())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        debug!(%status, "GraphQL endpoint responded");
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            if let Some(messages) = serde_json::from_str::<Value>(&body)
                .ok()
                .as_ref()
                .and_then(error_messages)
            {
                return Err(GraphQLError::Response(messages));
            }
            return Err(GraphQLError::Status { status, body });
        }
        Ok(response)
    }
}

/// The messages of a non-empty `errors` array, joined with `; `
fn error_messages(response: &Value) -> Option<String> {
    let errors = response
        .get("errors")
        .and_then(Value::as_array)
        .filter(|errors| !errors.is_empty())?;

    Some(
        errors
            .iter()
            .map(|error| {
                error
                    .get("message")
                    .and_then(Value::as_str)
                    .map(str::to_string)
                    .unwrap_or_else(|| error.to_string())
            })
            .collect::<Vec<_>>()
            .join("; "),
    )
}
