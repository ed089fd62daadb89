//! MCP tools exposing a GraphQL API to agents

pub mod describe;
pub mod invoke;
pub mod list;
pub mod set_headers;

/// Appended to schema fetch failures, which are most often missing credentials
const AUTH_HINT: &str = "Do you need to send an Authorization header?";

#[cfg(test)]
pub(crate) fn result_text(result: &rmcp::model::CallToolResult) -> String {
    result
        .content
        .iter()
        .filter_map(|content| match &content.raw {
            rmcp::model::RawContent::Text(text) => Some(text.text.clone()),
            _ => None,
        })
        .collect()
}
