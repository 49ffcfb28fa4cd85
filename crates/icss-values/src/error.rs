//! Error types for `@value` processing.
//!
//! Malformed `@value` statements are never errors: they surface as
//! [`Warning`](crate::Warning)s and processing continues. The only failure
//! mode is a document that cannot be parsed in the first place.

use thiserror::Error;

/// Errors returned by [`process_css`](crate::process_css).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValuesError {
    /// The stylesheet could not be parsed into a document tree.
    #[error("CSS syntax error: {0}")]
    Parse(#[from] css_ast::ParseError),
}
