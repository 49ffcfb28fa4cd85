//! Low-level scanning helpers shared by the statement parser.

use nom::{
    IResult,
    bytes::complete::{tag, take_until, take_while, take_while1},
    sequence::{delimited, preceded},
};

use crate::error::ParseError;

/// Characters allowed in an at-rule name.
pub fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}

/// Consumes CSS whitespace. Stray `;` separators are swallowed with it.
pub fn whitespace(input: &str) -> IResult<&str, &str> {
    take_while(|c: char| c.is_whitespace() || c == ';')(input)
}

/// Parses a complete `/* ... */` comment, returning its inner text.
pub fn comment(input: &str) -> IResult<&str, &str> {
    delimited(tag("/*"), take_until("*/"), tag("*/"))(input)
}

/// Parses `@name`, returning the name.
pub fn at_keyword(input: &str) -> IResult<&str, &str> {
    preceded(tag("@"), take_while1(is_name_char))(input)
}

/// How a statement ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Terminator {
    Semicolon,
    OpenBrace,
    CloseBrace,
    Eof,
}

/// Finds the end of the statement starting at `start`.
///
/// Returns the byte offset of the terminator (or the source length at EOF)
/// together with its kind. Quoted strings, backslash escapes, comments and
/// parenthesized groups are skipped over, so `url(a;b)` or `"}"` never end
/// a statement.
pub fn statement_end(source: &str, start: usize) -> Result<(usize, Terminator), ParseError> {
    let bytes = source.as_bytes();
    let mut depth = 0usize;
    let mut i = start;

    while i < bytes.len() {
        match bytes[i] {
            b'\\' => {
                i += 2;
                continue;
            }
            quote @ (b'"' | b'\'') => {
                i = string_end(source, i, quote)?;
                continue;
            }
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                match source[i + 2..].find("*/") {
                    Some(offset) => i += offset + 4,
                    None => return Err(ParseError::UnclosedComment(i)),
                }
                continue;
            }
            b'(' => depth += 1,
            b')' => depth = depth.saturating_sub(1),
            b';' if depth == 0 => return Ok((i, Terminator::Semicolon)),
            b'{' if depth == 0 => return Ok((i, Terminator::OpenBrace)),
            b'}' if depth == 0 => return Ok((i, Terminator::CloseBrace)),
            _ => {}
        }
        i += 1;
    }

    Ok((bytes.len(), Terminator::Eof))
}

/// Returns the offset just past the closing quote of the string opened at `start`.
fn string_end(source: &str, start: usize, quote: u8) -> Result<usize, ParseError> {
    let bytes = source.as_bytes();
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b if b == quote => return Ok(i + 1),
            _ => i += 1,
        }
    }
    Err(ParseError::UnclosedString(start))
}

/// Finds the first `:` outside of strings and parentheses.
pub fn find_colon(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut depth = 0usize;
    let mut quote = None;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        match quote {
            Some(q) => {
                if b == b'\\' {
                    i += 1;
                } else if b == q {
                    quote = None;
                }
            }
            None => match b {
                b'"' | b'\'' => quote = Some(b),
                b'(' => depth += 1,
                b')' => depth = depth.saturating_sub(1),
                b':' if depth == 0 => return Some(i),
                _ => {}
            },
        }
        i += 1;
    }
    None
}

/// Splits `text` into (leading whitespace, body, trailing whitespace).
pub fn split_padding(text: &str) -> (&str, &str, &str) {
    let body_start = text.len() - text.trim_start().len();
    let body_end = text.trim_end().len().max(body_start);
    (&text[..body_start], &text[body_start..body_end], &text[body_end..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statement_end_skips_strings_and_parens() {
        let src = r#"a: url(x;y) "}" ; b"#;
        assert_eq!(statement_end(src, 0).unwrap(), (16, Terminator::Semicolon));
    }

    #[test]
    fn test_statement_end_eof() {
        assert_eq!(statement_end("a: b", 0).unwrap(), (4, Terminator::Eof));
    }

    #[test]
    fn test_unclosed_string() {
        assert_eq!(
            statement_end("a: 'oops", 0),
            Err(ParseError::UnclosedString(3))
        );
    }

    #[test]
    fn test_find_colon_ignores_quoted() {
        assert_eq!(find_colon("'a:b' x: y"), Some(7));
        assert_eq!(find_colon("fn(a:b)"), None);
    }

    #[test]
    fn test_split_padding() {
        assert_eq!(split_padding("  a b \n"), ("  ", "a b", " \n"));
        assert_eq!(split_padding("   "), ("   ", "", ""));
    }
}
