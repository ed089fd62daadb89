//! Runtime utilities
//!
//! Configuration loading and logging setup used by the binary.

mod config;
pub mod logging;
mod parsers;

use std::path::Path;

pub use config::Config;
use figment::{
    Figment,
    providers::{Env, Format, Yaml},
};

/// Separator to use when drilling down into nested options in the env figment
const ENV_NESTED_SEPARATOR: &str = "__";

/// Prefix of environment variables holding configuration
const ENV_PREFIX: &str = "GRAPHQL_MCP_";

/// Read configuration from environment variables only (when no config file is provided)
#[allow(clippy::result_large_err)]
pub fn read_config_from_env() -> Result<Config, figment::Error> {
    Figment::new()
        .join(Env::prefixed(ENV_PREFIX).split(ENV_NESTED_SEPARATOR))
        .join(legacy_env())
        .extract()
}

/// Read in a config from a YAML file, filling in any missing values from the environment
#[allow(clippy::result_large_err)]
pub fn read_config(yaml_path: impl AsRef<Path>) -> Result<Config, figment::Error> {
    Figment::new()
        .join(Env::prefixed(ENV_PREFIX).split(ENV_NESTED_SEPARATOR))
        .join(legacy_env())
        .join(Yaml::file_exact(yaml_path.as_ref()))
        .extract()
}

/// Figment provider for the unprefixed variables older deployments of the bridge set
fn legacy_env() -> Env {
    Env::raw()
        .only(&["ADDRESS", "GRAPHQL_HEADERS"])
        .map(|key| match key.to_string().to_lowercase().as_str() {
            "address" => "endpoint".into(),
            "graphql_headers" => "headers".into(),

            // Filtered out by `only`
            other => other.to_string().into(),
        })
}
