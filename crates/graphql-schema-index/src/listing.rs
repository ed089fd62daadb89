//! Flat signature listings of the query and mutation roots

use crate::render::format_field;
use crate::schema::{OperationField, SchemaDocument};

/// One signature line per query, in declaration order
pub fn list_queries(schema: &SchemaDocument) -> Vec<String> {
    signatures(&schema.queries)
}

/// One signature line per mutation, in declaration order
pub fn list_mutations(schema: &SchemaDocument) -> Vec<String> {
    signatures(&schema.mutations)
}

/// The `Queries:` listing text returned to agents
pub fn queries_listing(schema: &SchemaDocument) -> String {
    render_listing("Queries", &list_queries(schema))
}

/// The `Mutations:` listing text returned to agents
pub fn mutations_listing(schema: &SchemaDocument) -> String {
    render_listing("Mutations", &list_mutations(schema))
}

/// A header line followed by one newline-terminated line per signature
pub fn render_listing(header: &str, signatures: &[String]) -> String {
    let mut listing = format!("{header}:\n");
    for signature in signatures {
        listing.push_str(signature);
        listing.push('\n');
    }
    listing
}

fn signatures(fields: &[OperationField]) -> Vec<String> {
    fields.iter().map(format_field).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Argument, TypeRef};

    fn schema() -> SchemaDocument {
        SchemaDocument {
            queries: vec![
                OperationField::new(
                    "healthcheck",
                    vec![Argument::new(
                        "input",
                        TypeRef::non_null(TypeRef::named("String")),
                    )],
                    TypeRef::non_null(TypeRef::named("String")),
                ),
                OperationField::new(
                    "candidate",
                    vec![Argument::new(
                        "id",
                        TypeRef::non_null(TypeRef::named("String")),
                    )],
                    TypeRef::named("Candidate"),
                ),
            ],
            mutations: vec![OperationField::new(
                "createCandidate",
                vec![Argument::new(
                    "input",
                    TypeRef::non_null(TypeRef::named("CandidateInput")),
                )],
                TypeRef::non_null(TypeRef::named("Candidate")),
            )],
            types: vec![],
        }
    }

    #[test]
    fn lists_queries_in_declaration_order() {
        assert_eq!(
            list_queries(&schema()),
            vec![
                "healthcheck(input: String!): String!",
                "candidate(id: String!): Candidate"
            ]
        );
    }

    #[test]
    fn queries_listing_text() {
        assert_eq!(
            queries_listing(&schema()),
            "Queries:\nhealthcheck(input: String!): String!\ncandidate(id: String!): Candidate\n"
        );
    }

    #[test]
    fn mutations_listing_text() {
        assert_eq!(
            mutations_listing(&schema()),
            "Mutations:\ncreateCandidate(input: CandidateInput!): Candidate!\n"
        );
    }

    #[test]
    fn empty_schema_lists_header_only() {
        let schema = SchemaDocument::default();
        assert!(list_queries(&schema).is_empty());
        assert_eq!(queries_listing(&schema), "Queries:\n");
        assert_eq!(mutations_listing(&schema), "Mutations:\n");
    }
}
