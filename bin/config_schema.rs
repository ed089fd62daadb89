//! Print the JSON schema of the config file

use graphql_mcp_server::runtime::Config;

fn main() -> anyhow::Result<()> {
    let schema = schemars::schema_for!(Config);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
