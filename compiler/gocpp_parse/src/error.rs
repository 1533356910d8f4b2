//! Parse error types.

use gocpp_ir::Span;

/// Failure to produce a syntax tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The Go grammar could not be loaded into the parser.
    #[error("failed to load the Go grammar: {0}")]
    Language(String),

    /// tree-sitter gave up without producing a tree.
    #[error("parser produced no syntax tree")]
    NoTree,

    /// The source contains text the grammar cannot place.
    #[error("syntax error near `{text}`")]
    Syntax { span: Span, text: String },

    /// The parser had to assume a token that is not in the source.
    #[error("syntax error: missing `{expected}`")]
    Missing { span: Span, expected: String },

    /// Offsets of this file do not fit in a 32-bit span.
    #[error("source of {len} bytes exceeds the 4 GiB span limit")]
    SourceTooLarge { len: usize },
}

impl ParseError {
    /// Location of the error, when it has one.
    pub fn span(&self) -> Option<Span> {
        match self {
            ParseError::Syntax { span, .. } | ParseError::Missing { span, .. } => Some(*span),
            ParseError::Language(_) | ParseError::NoTree | ParseError::SourceTooLarge { .. } => {
                None
            }
        }
    }
}
