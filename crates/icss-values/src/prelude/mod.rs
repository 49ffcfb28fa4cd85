//! `@value` prelude grammar.
//!
//! The text after `@value` takes one of three legal shapes:
//!
//! ```css
//! @value primary: #BF4040;                  /* local, colon form */
//! @value secondary #1F4F7F;                 /* local, whitespace form */
//! @value primary, secondary as accent from './colors.css';
//! @value (
//!   primary,
//!   secondary
//! ) from "./colors.css";                    /* import list, may span lines */
//! ```
//!
//! Anything else is rejected with a [`PreludeError`] describing why. The
//! caller reports every rejection with the same warning, so the variants are
//! mostly useful for logging and tests.

pub mod tokens;

use thiserror::Error;

use tokens::{Token, tokenize, trim_spaces};

/// Words that can never be used as a value name.
pub const RESERVED_WORDS: [&str; 2] = ["as", "from"];

/// One `name [as alias]` entry of an import list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportedName {
    /// Name exported by the imported module.
    pub source: String,
    /// Name the value is visible under in this document.
    pub alias: String,
}

/// A successfully parsed `@value` prelude.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValueDeclaration {
    Local { name: String, value: String },
    Import { path: String, names: Vec<ImportedName> },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PreludeError {
    #[error("prelude contains another @value statement")]
    MergedStatements,
    #[error("missing value name")]
    MissingName,
    #[error("missing value for \"{0}\"")]
    MissingValue(String),
    #[error("unexpected separator after \"{0}\"")]
    UnexpectedSeparator(String),
    #[error("\"{0}\" is a reserved word")]
    ReservedName(String),
    #[error("quoted string used where a name was expected")]
    QuotedName,
    #[error("missing import path")]
    MissingPath,
    #[error("import path must be a quoted string")]
    UnquotedPath,
    #[error("unexpected tokens after import path")]
    TrailingTokens,
    #[error("malformed import list")]
    InvalidImportList,
}

/// Parses the text following `@value`.
///
/// ```
/// use icss_values::prelude::{parse_prelude, ImportedName, ValueDeclaration};
///
/// assert_eq!(
///     parse_prelude("primary: #BF4040").unwrap(),
///     ValueDeclaration::Local { name: "primary".into(), value: "#BF4040".into() }
/// );
///
/// match parse_prelude("red as danger from './colors.css'").unwrap() {
///     ValueDeclaration::Import { path, names } => {
///         assert_eq!(path, "./colors.css");
///         assert_eq!(names, vec![ImportedName { source: "red".into(), alias: "danger".into() }]);
///     }
///     other => panic!("unexpected {other:?}"),
/// }
/// ```
pub fn parse_prelude(params: &str) -> Result<ValueDeclaration, PreludeError> {
    // A missing `;` makes the document parser glue the next statement on.
    if params.contains("@value") {
        return Err(PreludeError::MergedStatements);
    }

    if let Some(tokens) = tokenize(params) {
        if let Some(from) = tokens.iter().rposition(|t| t.is_word("from")) {
            return parse_import(&tokens[..from], &tokens[from + 1..]);
        }
    }

    parse_local(params)
}

fn check_name(name: &str) -> Result<(), PreludeError> {
    if RESERVED_WORDS.contains(&name) {
        return Err(PreludeError::ReservedName(name.to_string()));
    }
    Ok(())
}

fn parse_local(params: &str) -> Result<ValueDeclaration, PreludeError> {
    let text = params.trim();
    if text.starts_with(['\'', '"']) {
        return Err(PreludeError::QuotedName);
    }

    let name_end = text
        .find(|c: char| c.is_whitespace() || c == ':' || c == ',')
        .unwrap_or(text.len());
    let name = &text[..name_end];
    if name.is_empty() {
        return Err(PreludeError::MissingName);
    }
    check_name(name)?;

    let rest = &text[name_end..];
    let after_space = rest.trim_start();
    let value = if let Some(value) = after_space.strip_prefix(':') {
        value.trim()
    } else if after_space.starts_with(',') {
        return Err(PreludeError::UnexpectedSeparator(name.to_string()));
    } else {
        after_space
    };

    if strip_comments(value).trim().is_empty() {
        return Err(PreludeError::MissingValue(name.to_string()));
    }

    Ok(ValueDeclaration::Local {
        name: name.to_string(),
        value: value.to_string(),
    })
}

fn parse_import(names: &[Token<'_>], path: &[Token<'_>]) -> Result<ValueDeclaration, PreludeError> {
    let path_tokens: Vec<&Token<'_>> = path.iter().filter(|t| !t.is_space()).collect();
    let path = match path_tokens.as_slice() {
        [] => return Err(PreludeError::MissingPath),
        [Token::String { value, .. }] => value.to_string(),
        [Token::String { .. }, ..] => return Err(PreludeError::TrailingTokens),
        _ => return Err(PreludeError::UnquotedPath),
    };

    let mut list = trim_spaces(names);
    if let [Token::Function { name: "", nodes }] = list {
        list = trim_spaces(nodes);
    }
    if list.is_empty() {
        return Err(PreludeError::MissingName);
    }

    let names = list
        .split(|t| matches!(t, Token::Div(',')))
        .map(parse_imported_name)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ValueDeclaration::Import { path, names })
}

fn parse_imported_name(chunk: &[Token<'_>]) -> Result<ImportedName, PreludeError> {
    let parts: Vec<&Token<'_>> = chunk.iter().filter(|t| !t.is_space()).collect();
    if parts.iter().any(|t| matches!(t, Token::String { .. })) {
        return Err(PreludeError::QuotedName);
    }

    let (source, alias) = match parts.as_slice() {
        [Token::Word(source)] => (*source, *source),
        [Token::Word(source), as_word, Token::Word(alias)] if as_word.is_word("as") => {
            (*source, *alias)
        }
        _ => return Err(PreludeError::InvalidImportList),
    };
    check_name(source)?;
    check_name(alias)?;

    Ok(ImportedName {
        source: source.to_string(),
        alias: alias.to_string(),
    })
}

/// Removes `/* ... */` comments; used only to decide whether a value is empty.
fn strip_comments(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;
    while let Some(start) = rest.find("/*") {
        out.push_str(&rest[..start]);
        match rest[start + 2..].find("*/") {
            Some(end) => rest = &rest[start + 2 + end + 2..],
            None => return out,
        }
    }
    out.push_str(rest);
    out
}
