use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for schema loading (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(
        code(gqlts::schema::io),
        help("check the `schema` path in gqlts.toml")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse GraphQL schema")]
    #[diagnostic(code(gqlts::schema::parse))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: async_graphql_parser::Error,
    },
}

impl Error {
    /// Create a parse error pointing at the first position the parser reported
    pub fn parse(source: async_graphql_parser::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source
            .positions()
            .next()
            .map(|pos| SourceSpan::from((offset_of(src, pos.line, pos.column), 1)));
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }
}

/// Byte offset of a 1-based line/column position.
fn offset_of(src: &str, line: usize, column: usize) -> usize {
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    let rest = &src[line_start..];
    let column_offset: usize = rest
        .chars()
        .take(column.saturating_sub(1))
        .map(char::len_utf8)
        .sum();
    (line_start + column_offset).min(src.len().saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_of() {
        let src = "type A {\n  a: Int\n}\n";
        assert_eq!(offset_of(src, 1, 1), 0);
        assert_eq!(offset_of(src, 2, 3), 11);
        assert_eq!(&src[offset_of(src, 2, 3)..offset_of(src, 2, 3) + 1], "a");
    }
}
