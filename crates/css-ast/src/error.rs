//! Error types for CSS document parsing.

use thiserror::Error;

/// Errors that can occur while parsing a stylesheet into a [`Root`](crate::Root).
///
/// Every variant carries the byte offset into the source where the problem
/// was detected.
///
/// # Examples
///
/// ```rust
/// use css_ast::{parse, ParseError};
///
/// let result = parse(".a { color: red;");
/// assert_eq!(result.unwrap_err(), ParseError::UnclosedBlock(3));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A `{` was never matched by a closing `}`.
    #[error("unclosed block starting at offset {0}")]
    UnclosedBlock(usize),

    /// A `/*` comment was never terminated.
    #[error("unclosed comment starting at offset {0}")]
    UnclosedComment(usize),

    /// A quoted string was never terminated.
    #[error("unclosed string starting at offset {0}")]
    UnclosedString(usize),

    /// A `}` appeared outside of any block.
    #[error("unexpected '}}' at offset {0}")]
    UnexpectedCloseBrace(usize),

    /// A statement that is neither a rule, an at-rule nor a `prop: value` declaration.
    #[error("unknown word {word:?} at offset {offset}")]
    UnknownWord { word: String, offset: usize },

    /// An `@` that is not followed by an at-rule name.
    #[error("at-rule without a name at offset {0}")]
    MissingAtRuleName(usize),
}
