use std::collections::BTreeMap;
use std::str::FromStr;
use std::sync::Arc;

use parking_lot::RwLock;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use tracing::warn;

use crate::errors::HeaderError;

/// Headers sent with every request to the GraphQL endpoint.
///
/// Starts from the configured defaults. Headers set by an agent persist across calls
/// until overwritten; every update re-applies the defaults before the new values.
#[derive(Debug, Clone, Default)]
pub struct HeaderStore {
    defaults: HeaderMap,
    current: Arc<RwLock<HeaderMap>>,
}

impl HeaderStore {
    pub fn new(mut defaults: HeaderMap) -> Self {
        for (name, value) in defaults.iter_mut() {
            mark_sensitive(name, value);
        }
        Self {
            current: Arc::new(RwLock::new(defaults.clone())),
            defaults,
        }
    }

    /// The headers to use for one request
    pub fn snapshot(&self) -> HeaderMap {
        let mut headers = self.current.read().clone();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }

    /// Overlay `headers` on the stored headers.
    ///
    /// Nothing is applied if any name or value is invalid.
    pub fn merge(&self, headers: &BTreeMap<String, String>) -> Result<(), HeaderError> {
        let parsed = parse_headers(headers)?;

        let mut current = self.current.write();
        for (name, value) in self.defaults.iter() {
            current.insert(name.clone(), value.clone());
        }
        for (name, value) in parsed {
            current.insert(name, value);
        }
        Ok(())
    }

    /// Overlay headers given as a JSON object of strings
    pub fn merge_json(&self, json: &str) -> Result<(), HeaderError> {
        let headers: BTreeMap<String, String> = serde_json::from_str(json)?;
        self.merge(&headers)
    }
}

fn parse_headers(
    headers: &BTreeMap<String, String>,
) -> Result<Vec<(HeaderName, HeaderValue)>, HeaderError> {
    headers
        .iter()
        .map(|(name, value)| {
            let name = HeaderName::from_str(name.trim())?;
            if name == CONTENT_TYPE {
                warn!("Ignoring content-type header, GraphQL requests are always JSON");
            }
            let mut value = HeaderValue::from_str(value)?;
            mark_sensitive(&name, &mut value);
            Ok((name, value))
        })
        .collect()
}

/// Credentials print as `Sensitive` in `Debug` output, keeping them out of logs
fn mark_sensitive(name: &HeaderName, value: &mut HeaderValue) {
    if matches!(
        name.as_str(),
        "authorization" | "cookie" | "proxy-authorization" | "x-api-key"
    ) {
        value.set_sensitive(true);
    }
}

/// Parse a JSON object of header names to values into a header map
pub fn header_map_from_json(json: &str) -> Result<HeaderMap, HeaderError> {
    let headers: BTreeMap<String, String> = serde_json::from_str(json)?;
    Ok(parse_headers(&headers)?.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("x-api-key", HeaderValue::from_static("from-env"));
        headers
    }

    #[test]
    fn snapshot_starts_from_defaults() {
        let store = HeaderStore::new(defaults());
        let headers = store.snapshot();

        assert_eq!(headers.get("x-api-key").unwrap(), "from-env");
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
    }

    #[test]
    fn merge_overwrites_and_keeps_earlier_headers() {
        let store = HeaderStore::new(defaults());
        store
            .merge_json(r#"{"Authorization": "Bearer first", "X-Tenant": "acme"}"#)
            .unwrap();
        store
            .merge_json(r#"{"Authorization": "Bearer second"}"#)
            .unwrap();

        let headers = store.snapshot();
        assert_eq!(headers.get("authorization").unwrap(), "Bearer second");
        assert_eq!(headers.get("x-tenant").unwrap(), "acme");
        assert_eq!(headers.get("x-api-key").unwrap(), "from-env");
    }

    #[test]
    fn merge_can_override_a_default() {
        let store = HeaderStore::new(defaults());
        store.merge_json(r#"{"X-API-Key": "from-agent"}"#).unwrap();

        assert_eq!(store.snapshot().get("x-api-key").unwrap(), "from-agent");
    }

    #[test]
    fn defaults_are_reapplied_on_merge() {
        let store = HeaderStore::new(defaults());
        store.merge_json(r#"{"X-API-Key": "from-agent"}"#).unwrap();
        store.merge_json(r#"{"X-Other": "1"}"#).unwrap();

        assert_eq!(store.snapshot().get("x-api-key").unwrap(), "from-env");
    }

    #[test]
    fn invalid_json_leaves_store_unchanged() {
        let store = HeaderStore::new(defaults());
        let result = store.merge_json("not json");

        assert!(matches!(result, Err(HeaderError::Json(_))));
        assert_eq!(store.snapshot().len(), 2);
    }

    #[test]
    fn non_string_values_are_rejected() {
        let store = HeaderStore::new(HeaderMap::new());
        assert!(matches!(
            store.merge_json(r#"{"X-Count": 3}"#),
            Err(HeaderError::Json(_))
        ));
    }

    #[test]
    fn invalid_header_name_applies_nothing() {
        let store = HeaderStore::new(HeaderMap::new());
        let result = store.merge_json(r#"{"Authorization": "Bearer token", "bad header": "x"}"#);

        assert!(matches!(result, Err(HeaderError::Name(_))));
        assert!(store.snapshot().get("authorization").is_none());
    }

    #[test]
    fn credentials_are_redacted_in_debug_output() {
        let store = HeaderStore::new(defaults());
        store
            .merge_json(r#"{"Authorization": "Bearer secret-token", "X-Tenant": "acme"}"#)
            .unwrap();

        let headers = store.snapshot();
        let debug = format!("{headers:?}");
        assert!(!debug.contains("secret-token"));
        assert!(!debug.contains("from-env"));
        assert!(debug.contains("acme"));
        assert_eq!(headers.get("authorization").unwrap(), "Bearer secret-token");
        assert!(headers.get("authorization").unwrap().is_sensitive());
    }

    #[test]
    fn clones_share_state() {
        let store = HeaderStore::new(HeaderMap::new());
        let clone = store.clone();
        store.merge_json(r#"{"X-Tenant": "acme"}"#).unwrap();

        assert_eq!(clone.snapshot().get("x-tenant").unwrap(), "acme");
    }

    #[test]
    fn header_map_from_json_parses_object() {
        let headers =
            header_map_from_json(r#"{"Authorization": "Bearer token123", "X-API-Key": "abc123"}"#)
                .unwrap();

        assert_eq!(headers.len(), 2);
        assert_eq!(headers.get("authorization").unwrap(), "Bearer token123");
    }
}
