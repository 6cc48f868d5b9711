use miette::Diagnostic;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Conditions that abort generation. Nothing is emitted when one occurs.
#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
pub enum Error {
    #[error("Unknown scalar type {name}")]
    #[diagnostic(
        code(gqlts::codegen::unknown_scalar),
        help("map `{name}` in `scalars`, set `defaultScalarType`, or disable `strictScalars`")
    )]
    UnknownScalar { name: String },

    #[error(
        "Fields on an input object type can not be non-nullable. It seems like the schema was not validated."
    )]
    #[diagnostic(
        code(gqlts::codegen::one_of_non_null),
        help("make `{input}.{field}` nullable; `@oneOf` inputs only allow nullable fields")
    )]
    NonNullOneOfField { input: String, field: String },
}
