/// Generate the JSON schema of a tool input type as an MCP input schema object
#[macro_export]
macro_rules! schema_from_type {
    ($type:ty) => {{
        // Draft-07 keeps clients that lag behind newer drafts working
        let settings = schemars::generate::SchemaSettings::draft07();
        let generator = settings.into_generator();
        let schema = generator.into_root_schema_for::<$type>();
        match serde_json::to_value(schema) {
            Ok(serde_json::Value::Object(schema)) => schema,
            _ => panic!("Failed to generate schema for {}", stringify!($type)),
        }
    }};
}
