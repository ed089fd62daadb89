//! Text rendering of type references and operation signatures

use std::fmt;

use itertools::Itertools as _;

use crate::schema::{OperationField, TypeRef};

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Named(name) => f.write_str(name),
            TypeRef::List(inner) => write!(f, "[{inner}]"),
            TypeRef::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}

/// Render a single-line callable signature, e.g. `jobs(page: Int, size: Int): JobsPage!`
pub fn format_field(field: &OperationField) -> String {
    if field.arguments.is_empty() {
        format!("{}: {}", field.name, field.return_type)
    } else {
        format!(
            "{}({}): {}",
            field.name,
            field
                .arguments
                .iter()
                .format_with(", ", |arg, f| f(&format_args!("{}: {}", arg.name, arg.ty))),
            field.return_type
        )
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::schema::Argument;

    #[rstest]
    #[case(TypeRef::named("Int"), "Int")]
    #[case(TypeRef::list(TypeRef::named("Job")), "[Job]")]
    #[case(TypeRef::non_null(TypeRef::named("String")), "String!")]
    #[case(
        TypeRef::non_null(TypeRef::list(TypeRef::non_null(TypeRef::named("String")))),
        "[String!]!"
    )]
    #[case(
        TypeRef::list(TypeRef::list(TypeRef::non_null(TypeRef::named("Float")))),
        "[[Float!]]"
    )]
    fn renders_type_refs(#[case] ty: TypeRef, #[case] expected: &str) {
        assert_eq!(ty.to_string(), expected);
    }

    #[test]
    fn field_without_arguments() {
        let field = OperationField::new(
            "healthcheck",
            vec![],
            TypeRef::non_null(TypeRef::named("String")),
        );
        assert_eq!(format_field(&field), "healthcheck: String!");
    }

    #[test]
    fn field_with_arguments_keeps_declared_order() {
        let field = OperationField::new(
            "jobs",
            vec![
                Argument::new("page", TypeRef::named("Int")),
                Argument::new("size", TypeRef::named("Int")),
            ],
            TypeRef::named("JobsPage"),
        );
        assert_eq!(format_field(&field), "jobs(page: Int, size: Int): JobsPage");
    }

    #[test]
    fn field_with_wrapped_argument_types() {
        let field = OperationField::new(
            "updateInterviewScorecard",
            vec![
                Argument::new("id", TypeRef::non_null(TypeRef::named("String"))),
                Argument::new("input", TypeRef::non_null(TypeRef::named("ScorecardInput"))),
            ],
            TypeRef::non_null(TypeRef::named("InterviewScorecard")),
        );
        assert_eq!(
            format_field(&field),
            "updateInterviewScorecard(id: String!, input: ScorecardInput!): InterviewScorecard!"
        );
    }
}
