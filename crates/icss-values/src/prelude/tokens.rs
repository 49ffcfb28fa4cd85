//! Tokenizer for `@value` preludes.
//!
//! Splits the text after `@value` into a flat list of words, strings,
//! whitespace and divider characters. A word directly followed by `(` (or a
//! bare `(`) opens a [`Token::Function`] whose contents are tokenized
//! recursively, which is how `(a, b) from 'x'` and `fn(a, b)` are told apart.

use nom::{
    IResult,
    branch::alt,
    bytes::complete::{escaped, is_not, take_while1},
    character::complete::{anychar, char, multispace1, one_of},
    combinator::{map, opt},
    multi::many0,
    sequence::{delimited, pair},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token<'a> {
    Word(&'a str),
    /// A quoted string; `value` excludes the quotes.
    String { quote: char, value: &'a str },
    Space(&'a str),
    /// One of `,`, `:` or `/`.
    Div(char),
    /// `name(...)`; `name` is empty for a bare parenthesized group.
    Function { name: &'a str, nodes: Vec<Token<'a>> },
}

impl<'a> Token<'a> {
    pub fn is_space(&self) -> bool {
        matches!(self, Token::Space(_))
    }

    pub fn is_word(&self, word: &str) -> bool {
        matches!(self, Token::Word(w) if *w == word)
    }
}

fn is_word_char(c: char) -> bool {
    !c.is_whitespace() && !matches!(c, ',' | ':' | '/' | '(' | ')' | '\'' | '"')
}

fn word(input: &str) -> IResult<&str, &str> {
    take_while1(is_word_char)(input)
}

fn quoted(quote: char) -> impl FnMut(&str) -> IResult<&str, Token<'_>> {
    move |input| {
        let stop = if quote == '"' { "\"\\" } else { "'\\" };
        let (input, value) = delimited(
            char(quote),
            map(opt(escaped(is_not(stop), '\\', anychar)), Option::unwrap_or_default),
            char(quote),
        )(input)?;
        Ok((input, Token::String { quote, value }))
    }
}

fn function(input: &str) -> IResult<&str, Token<'_>> {
    let (input, (name, nodes)) = pair(
        map(opt(word), Option::unwrap_or_default),
        delimited(char('('), many0(token), char(')')),
    )(input)?;
    Ok((input, Token::Function { name, nodes }))
}

fn token(input: &str) -> IResult<&str, Token<'_>> {
    alt((
        map(multispace1, Token::Space),
        map(one_of(",:/"), Token::Div),
        quoted('"'),
        quoted('\''),
        function,
        map(word, Token::Word),
    ))(input)
}

/// Tokenizes a whole prelude. Returns `None` when the text cannot be fully
/// tokenized, e.g. because of an unbalanced parenthesis or quote.
pub fn tokenize(input: &str) -> Option<Vec<Token<'_>>> {
    match many0(token)(input) {
        Ok(("", tokens)) => Some(tokens),
        _ => None,
    }
}

/// Drops leading and trailing whitespace tokens.
pub fn trim_spaces<'t, 'a>(tokens: &'t [Token<'a>]) -> &'t [Token<'a>] {
    let start = tokens.iter().position(|t| !t.is_space()).unwrap_or(tokens.len());
    let end = tokens.iter().rposition(|t| !t.is_space()).map_or(start, |i| i + 1);
    &tokens[start..end]
}
