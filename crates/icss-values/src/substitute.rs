//! Whole-token symbol substitution.
//!
//! A token is a maximal run of letters, digits, `-`, `_`, `.` and `#`. The
//! extra `.` and `#` characters keep class/id fragments and hex colors in one
//! piece, so a symbol named `red` never matches inside `darkred`, `red2`,
//! `.red` or `#red`. Custom properties such as `--gap` are single tokens too.
//!
//! Substitution is a single pass over the original text: a replacement value
//! is never scanned again in the same call.

use std::borrow::Cow;

/// Characters that extend a substitution token.
pub fn is_token_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '-' | '_' | '.' | '#')
}

/// Characters that extend a plain identifier. Used for scoped identifiers,
/// which may legitimately follow a `.` or `#`.
fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '-' | '_')
}

/// Replaces every token of `text` for which `lookup` returns a value.
///
/// ```
/// use icss_values::substitute::substitute_tokens;
///
/// let lookup = |token: &str| (token == "base").then_some("8px");
/// assert_eq!(substitute_tokens("calc(base * 2)", lookup), "calc(8px * 2)");
/// assert_eq!(substitute_tokens("database", lookup), "database");
/// ```
pub fn substitute_tokens<'t, 'v, F>(text: &'t str, lookup: F) -> Cow<'t, str>
where
    F: Fn(&str) -> Option<&'v str>,
{
    let mut output: Option<String> = None;
    let mut copied = 0;
    let mut token_start: Option<usize> = None;

    let flush = |start: usize, end: usize, output: &mut Option<String>, copied: &mut usize| {
        let token = &text[start..end];
        if let Some(value) = lookup(token) {
            log::trace!("substituting {token:?} -> {value:?}");
            let out = output.get_or_insert_with(|| String::with_capacity(text.len()));
            out.push_str(&text[*copied..start]);
            out.push_str(value);
            *copied = end;
        }
    };

    for (i, c) in text.char_indices() {
        match (token_start, is_token_char(c)) {
            (None, true) => token_start = Some(i),
            (Some(start), false) => {
                flush(start, i, &mut output, &mut copied);
                token_start = None;
            }
            _ => {}
        }
    }
    if let Some(start) = token_start {
        flush(start, text.len(), &mut output, &mut copied);
    }

    match output {
        Some(mut out) => {
            out.push_str(&text[copied..]);
            Cow::Owned(out)
        }
        None => Cow::Borrowed(text),
    }
}

/// Replaces literal occurrences of `identifier` that are not part of a
/// larger identifier. A leading `.` or `#` is allowed, so selector fragments
/// like `.identifier` are rewritten too.
///
/// ```
/// use icss_values::substitute::replace_identifier;
///
/// assert_eq!(
///     replace_identifier(".__scope__a, .__scope__ab", "__scope__a", "x"),
///     ".x, .__scope__ab"
/// );
/// ```
pub fn replace_identifier<'t>(text: &'t str, identifier: &str, replacement: &str) -> Cow<'t, str> {
    if identifier.is_empty() {
        return Cow::Borrowed(text);
    }

    let mut output: Option<String> = None;
    let mut copied = 0;

    for (start, _) in text.match_indices(identifier) {
        let end = start + identifier.len();
        let before_ok = !text[..start].chars().next_back().is_some_and(is_ident_char);
        let after_ok = !text[end..].chars().next().is_some_and(is_ident_char);
        if before_ok && after_ok && start >= copied {
            let out = output.get_or_insert_with(|| String::with_capacity(text.len()));
            out.push_str(&text[copied..start]);
            out.push_str(replacement);
            copied = end;
        }
    }

    match output {
        Some(mut out) => {
            out.push_str(&text[copied..]);
            Cow::Owned(out)
        }
        None => Cow::Borrowed(text),
    }
}
