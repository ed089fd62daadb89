//! Resolution of comma-separated entity names into description text

use crate::index::EntityIndex;

/// How many example names accompany an [`EntityNotFound`]
pub const MAX_EXAMPLES: usize = 3;

/// A requested entity is not in the index.
///
/// Carries a few names that do exist so the caller can retry with one of them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "entity '{}' not found in schema. Example entities in the schema: {}",
    .name,
    .examples.join(", ")
)]
pub struct EntityNotFound {
    pub name: String,
    pub examples: Vec<String>,
}

/// Describe every entity named in `requested`, separated by commas.
///
/// Names are trimmed and resolved in order; the descriptions are joined with a blank line.
/// Resolution is all-or-nothing: the first unknown name aborts with [`EntityNotFound`].
pub fn describe(index: &EntityIndex, requested: &str) -> Result<String, EntityNotFound> {
    let descriptions = requested
        .split(',')
        .map(str::trim)
        .map(|name| {
            index.get(name).ok_or_else(|| EntityNotFound {
                name: name.to_string(),
                examples: index
                    .keys()
                    .take(MAX_EXAMPLES)
                    .map(str::to_string)
                    .collect(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(descriptions.join("\n\n"))
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;

    use super::*;
    use crate::schema::{Argument, OperationField, SchemaDocument, TypeBody, TypeDefinition, TypeRef};

    fn index() -> EntityIndex {
        EntityIndex::build(&SchemaDocument {
            queries: vec![
                OperationField::new(
                    "candidate",
                    vec![Argument::new(
                        "id",
                        TypeRef::non_null(TypeRef::named("String")),
                    )],
                    TypeRef::named("Candidate"),
                ),
                OperationField::new(
                    "jobs",
                    vec![
                        Argument::new("page", TypeRef::named("Int")),
                        Argument::new("size", TypeRef::named("Int")),
                    ],
                    TypeRef::named("JobsPage"),
                ),
            ],
            mutations: vec![],
            types: vec![
                TypeDefinition::new(
                    "JobStatus",
                    TypeBody::Enum {
                        values: vec!["OPEN".into()],
                    },
                ),
                TypeDefinition::new("DateTime", TypeBody::Scalar),
            ],
        })
    }

    #[test]
    fn joins_descriptions_in_request_order() {
        let text = describe(&index(), "JobStatus,candidate").unwrap();
        assert_eq!(
            text,
            "# JobStatus (ENUM)\nValues:\n\tOPEN\n\n# candidate (Query)\nArguments:\n\tid: String!\nReturn Type: Candidate"
        );
    }

    #[test]
    fn trims_whitespace_around_names() {
        let index = index();
        assert_eq!(
            describe(&index, "candidate").unwrap(),
            describe(&index, " candidate ").unwrap()
        );
        assert_eq!(
            describe(&index, "candidate, jobs").unwrap(),
            describe(&index, "candidate,jobs").unwrap()
        );
    }

    #[test]
    fn miss_aborts_the_whole_request() {
        let error = describe(&index(), "candidate,NoSuchType").unwrap_err();
        assert_eq!(error.name, "NoSuchType");
        assert_eq!(error.examples, vec!["candidate", "jobs", "JobStatus"]);
        assert_snapshot!(
            error.to_string(),
            @"entity 'NoSuchType' not found in schema. Example entities in the schema: candidate, jobs, JobStatus"
        );
    }

    #[test]
    fn first_miss_is_reported() {
        let error = describe(&index(), "Missing,AlsoMissing").unwrap_err();
        assert_eq!(error.name, "Missing");
    }

    #[test]
    fn empty_token_is_a_miss() {
        let error = describe(&index(), "candidate,,jobs").unwrap_err();
        assert_eq!(error.name, "");

        let error = describe(&index(), "").unwrap_err();
        assert_eq!(error.name, "");
    }

    #[test]
    fn qualified_names_are_accepted() {
        let index = index();
        assert_eq!(
            describe(&index, "query.jobs, type.JobStatus").unwrap(),
            describe(&index, "jobs,JobStatus").unwrap()
        );
    }

    #[test]
    fn empty_index_has_no_examples() {
        let error = describe(&EntityIndex::default(), "anything").unwrap_err();
        assert_eq!(
            error,
            EntityNotFound {
                name: "anything".into(),
                examples: vec![],
            }
        );
    }
}
