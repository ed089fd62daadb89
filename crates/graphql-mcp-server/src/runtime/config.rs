use reqwest::header::HeaderMap;
use schemars::JsonSchema;
use serde::Deserialize;
use url::Url;

use super::logging::Logging;
use super::parsers;
use crate::server::Transport;

/// Configuration for the MCP server
#[derive(Debug, Deserialize, JsonSchema)]
pub struct Config {
    /// The target GraphQL endpoint
    pub endpoint: Url,

    /// Headers to include in all GraphQL requests, before any set by agents
    #[serde(default, deserialize_with = "parsers::header_map")]
    #[schemars(schema_with = "header_map")]
    pub headers: HeaderMap,

    /// Logging configuration
    #[serde(default)]
    pub logging: Logging,

    /// The type of server transport to use
    #[serde(default)]
    pub transport: Transport,
}

fn header_map(generator: &mut schemars::SchemaGenerator) -> schemars::Schema {
    // A header map is a map of header names to header values, or the same map JSON-encoded
    #[derive(JsonSchema)]
    #[serde(untagged)]
    #[allow(dead_code)]
    enum HeaderMap {
        Map(std::collections::BTreeMap<String, String>),
        Encoded(String),
    }

    HeaderMap::json_schema(generator)
}
