//! MCP tool to change the headers sent to the GraphQL endpoint

use std::collections::BTreeMap;

use rmcp::model::{CallToolResult, Content, Tool};
use schemars::JsonSchema;
use serde::Deserialize;

use crate::headers::HeaderStore;
use crate::schema_from_type;

/// The name of the tool to set request headers
pub const SET_HEADERS_TOOL_NAME: &str = "set_headers";

/// A tool to set or overwrite HTTP headers for later GraphQL requests
#[derive(Clone)]
pub struct SetHeaders {
    pub tool: Tool,
}

/// Input for the set headers tool
#[derive(JsonSchema, Deserialize, Debug)]
pub struct Input {
    /// Headers to set, as a JSON object of strings or a JSON-encoded string of one
    pub headers: HeadersInput,
}

#[derive(JsonSchema, Deserialize, Debug)]
#[serde(untagged)]
pub enum HeadersInput {
    Map(BTreeMap<String, String>),
    Encoded(String),
}

impl SetHeaders {
    pub fn new() -> Self {
        Self {
            tool: Tool::new(
                SET_HEADERS_TOOL_NAME,
                "Set or overwrite HTTP headers sent with every later GraphQL request, \
                such as authentication. Headers persist until changed again. \
                Example: `{\"Authorization\": \"Bearer token123\", \"X-API-Key\": \"abc123\"}`.",
                schema_from_type!(Input),
            ),
        }
    }

    #[tracing::instrument(skip_all)]
    pub fn execute(&self, input: Input, store: &HeaderStore) -> CallToolResult {
        let result = match &input.headers {
            HeadersInput::Map(headers) => store.merge(headers),
            HeadersInput::Encoded(json) => store.merge_json(json),
        };
        match result {
            Ok(()) => CallToolResult::success(vec![Content::text("Headers updated successfully")]),
            Err(e) => {
                CallToolResult::error(vec![Content::text(format!("Failed to set headers: {e}"))])
            }
        }
    }
}

impl Default for SetHeaders {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use reqwest::header::HeaderMap;
    use serde_json::json;

    use super::*;
    use crate::tools::result_text;

    #[test]
    fn accepts_an_encoded_object() {
        let store = HeaderStore::new(HeaderMap::new());
        let input: Input = serde_json::from_value(json!({
            "headers": "{\"Authorization\": \"Bearer token123\"}"
        }))
        .unwrap();

        let result = SetHeaders::new().execute(input, &store);

        assert_eq!(result_text(&result), "Headers updated successfully");
        assert_eq!(
            store.snapshot().get("authorization").unwrap(),
            "Bearer token123"
        );
    }

    #[test]
    fn accepts_a_plain_object() {
        let store = HeaderStore::new(HeaderMap::new());
        let input: Input = serde_json::from_value(json!({
            "headers": { "X-API-Key": "abc123" }
        }))
        .unwrap();

        let result = SetHeaders::new().execute(input, &store);

        assert_ne!(result.is_error, Some(true));
        assert_eq!(store.snapshot().get("x-api-key").unwrap(), "abc123");
    }

    #[test]
    fn malformed_json_is_reported() {
        let store = HeaderStore::new(HeaderMap::new());
        let input = Input {
            headers: HeadersInput::Encoded("{not json".to_string()),
        };

        let result = SetHeaders::new().execute(input, &store);

        assert_eq!(result.is_error, Some(true));
        assert!(result_text(&result).starts_with("Failed to set headers: failed to parse headers JSON"));
    }
}
