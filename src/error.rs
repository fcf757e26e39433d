//! Error types for the scene parser

use std::path::PathBuf;
use thiserror::Error;

/// Scene parsing errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Scene source could not be opened or read
    ///
    /// **Triggered by:** Missing file, permission failure, non-UTF-8 bytes
    /// **Recovery:** None; parse construction aborts immediately
    #[error("cannot open scene source '{}': {reason}", .path.display())]
    SourceUnavailable {
        /// Path that failed to open
        path: PathBuf,
        /// Underlying I/O failure description
        reason: String,
    },

    /// Dereferenced a token stream that has not been advanced, or is exhausted
    ///
    /// This is protocol misuse by the caller, not a data error.
    #[error("no current token: stream not yet advanced or already exhausted")]
    NoCurrentToken,

    /// Statement keyword not present in the keyword table
    #[error("unknown statement '{keyword}' at line {line}, column {column}")]
    UnknownStatement {
        /// The unrecognized keyword text
        keyword: String,
        /// Line where the keyword starts (1-indexed)
        line: usize,
        /// Column where the keyword starts (1-indexed)
        column: usize,
    },

    /// Statement argument could not be coerced to its declared kind
    #[error("malformed argument at line {line}, column {column}: expected {expected}, got '{actual}'")]
    MalformedArgument {
        /// Declared argument kind name
        expected: String,
        /// Token text that failed coercion
        actual: String,
        /// Line where the argument starts (1-indexed)
        line: usize,
        /// Column where the argument starts (1-indexed)
        column: usize,
    },

    /// Source ended while a statement's arguments were still being read
    #[error("truncated '{keyword}' statement at line {line}, column {column}: source ended mid-arguments")]
    TruncatedStatement {
        /// Keyword of the incomplete statement
        keyword: String,
        /// Line where the statement starts (1-indexed)
        line: usize,
        /// Column where the statement starts (1-indexed)
        column: usize,
    },

    /// Block scoping keywords do not pair up
    ///
    /// **Triggered by:** `AttributeEnd` with no open block, or end of source
    /// with a block still open
    #[error("unbalanced '{keyword}' at line {line}, column {column}")]
    UnbalancedBlock {
        /// The scoping keyword involved
        keyword: String,
        /// Line of the offending keyword or unclosed opener (1-indexed)
        line: usize,
        /// Column of the offending keyword or unclosed opener (1-indexed)
        column: usize,
    },
}

impl Error {
    /// Source position carried by the error, if it is a data error.
    pub fn location(&self) -> Option<(usize, usize)> {
        match self {
            Error::UnknownStatement { line, column, .. }
            | Error::MalformedArgument { line, column, .. }
            | Error::TruncatedStatement { line, column, .. }
            | Error::UnbalancedBlock { line, column, .. } => Some((*line, *column)),
            Error::SourceUnavailable { .. } | Error::NoCurrentToken => None,
        }
    }
}

/// Result type for scene parsing operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_errors_carry_location() {
        let err = Error::UnknownStatement {
            keyword: "Bogus".to_string(),
            line: 3,
            column: 7,
        };
        assert_eq!(err.location(), Some((3, 7)));
        assert!(err.to_string().contains("Bogus"));
        assert!(err.to_string().contains("line 3"));
    }

    #[test]
    fn test_protocol_errors_have_no_location() {
        assert_eq!(Error::NoCurrentToken.location(), None);
    }
}
