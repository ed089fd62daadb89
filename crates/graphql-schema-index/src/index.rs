//! Lookup table from entity name to a rendered description block

use std::collections::HashMap;
use std::fmt;

use indexmap::IndexMap;
use indexmap::map::Entry;
use tracing::debug;

use crate::schema::{OperationField, SchemaDocument, TypeBody, TypeDefinition};

/// Which part of the schema an entity was registered from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    Query,
    Mutation,
    Type,
}

impl Namespace {
    /// The prefix of the qualified key, as in `query.jobs` or `type.JobsPage`
    pub fn prefix(&self) -> &'static str {
        match self {
            Namespace::Query => "query",
            Namespace::Mutation => "mutation",
            Namespace::Type => "type",
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

#[derive(Debug, Clone)]
struct Entity {
    namespace: Namespace,
    description: String,
}

/// Every query, mutation and named type of a schema, each with its description.
///
/// Entities are registered queries first, then mutations, then types, each group in
/// declaration order. A bare name belongs to the first entity registered under it, so
/// operations shadow types of the same name. Every entity also answers to its qualified
/// key (`query.<name>`, `mutation.<name>`, `type.<name>`), which keeps shadowed entities
/// reachable.
#[derive(Debug, Clone, Default)]
pub struct EntityIndex {
    entities: Vec<Entity>,
    by_name: IndexMap<String, usize>,
    by_qualified_name: HashMap<String, usize>,
}

impl EntityIndex {
    pub fn build(schema: &SchemaDocument) -> Self {
        let mut index = Self::default();
        for query in &schema.queries {
            index.register(Namespace::Query, &query.name, describe_operation(query, "Query"));
        }
        for mutation in &schema.mutations {
            index.register(
                Namespace::Mutation,
                &mutation.name,
                describe_operation(mutation, "Mutation"),
            );
        }
        for ty in &schema.types {
            index.register(Namespace::Type, &ty.name, describe_type(ty));
        }
        index
    }

    fn register(&mut self, namespace: Namespace, name: &str, description: String) {
        let position = self.entities.len();
        self.entities.push(Entity {
            namespace,
            description,
        });
        self.by_qualified_name
            .entry(format!("{namespace}.{name}"))
            .or_insert(position);

        match self.by_name.entry(name.to_string()) {
            Entry::Vacant(entry) => {
                entry.insert(position);
            }
            Entry::Occupied(entry) => {
                let owner = self
                    .entities
                    .get(*entry.get())
                    .map(|entity| entity.namespace.prefix())
                    .unwrap_or_default();
                debug!(
                    entity = name,
                    owner,
                    shadowed = namespace.prefix(),
                    "Entity name already taken, only reachable as {namespace}.{name}"
                );
            }
        }
    }

    /// Look up an entity by bare name or qualified key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.by_name
            .get(key)
            .or_else(|| self.by_qualified_name.get(key))
            .and_then(|position| self.entities.get(*position))
            .map(|entity| entity.description.as_str())
    }

    /// Bare entity names in registration order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.by_name.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

impl From<&SchemaDocument> for EntityIndex {
    fn from(schema: &SchemaDocument) -> Self {
        Self::build(schema)
    }
}

fn describe_operation(field: &OperationField, label: &str) -> String {
    let mut block = format!("# {} ({label})\n", field.name);
    if !field.arguments.is_empty() {
        block.push_str("Arguments:\n");
        for argument in &field.arguments {
            block.push_str(&format!("\t{}: {}\n", argument.name, argument.ty));
        }
    }
    block.push_str(&format!("Return Type: {}", field.return_type));
    block
}

fn describe_type(ty: &TypeDefinition) -> String {
    let header = format!("# {} ({})", ty.name, ty.kind());
    let (heading, lines): (&str, Vec<String>) = match &ty.body {
        TypeBody::Object { fields } | TypeBody::Interface { fields } => (
            "Fields",
            fields
                .iter()
                .map(|field| format!("{}: {}", field.name, field.ty))
                .collect(),
        ),
        TypeBody::InputObject { input_fields } => (
            "Input Fields",
            input_fields
                .iter()
                .map(|field| format!("{}: {}", field.name, field.ty))
                .collect(),
        ),
        TypeBody::Enum { values } => ("Values", values.clone()),
        TypeBody::Union { possible_types } => ("Possible Types", possible_types.clone()),
        TypeBody::Scalar => return header,
    };

    if lines.is_empty() {
        return header;
    }

    let mut block = format!("{header}\n{heading}:");
    for line in lines {
        block.push_str("\n\t");
        block.push_str(&line);
    }
    block
}
