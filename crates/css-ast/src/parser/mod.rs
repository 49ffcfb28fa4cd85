//! Lossless stylesheet parser.
//!
//! The parser works statement by statement: after skipping whitespace it
//! looks at the next character to decide between a comment, an at-rule, or a
//! rule/declaration, then scans to the first top-level `;`, `{` or `}` to find
//! where the statement ends. Everything it skips over is recorded in the
//! node's raws so the tree prints back identically.
//!
//! ## Example
//!
//! ```rust
//! use css_ast::{parse, Node};
//!
//! let root = parse("@value red: #f00;\n.a { color: red }").unwrap();
//! assert_eq!(root.nodes.len(), 2);
//! assert!(matches!(&root.nodes[0], Node::AtRule(at) if at.params == "red: #f00"));
//! assert_eq!(root.to_string(), "@value red: #f00;\n.a { color: red }");
//! ```

pub mod scan;

use crate::error::ParseError;
use crate::node::{AtRule, Comment, Declaration, Node, Raws, Root, RootRaws, Rule};
use scan::Terminator;

/// Parses CSS source into a [`Root`].
pub fn parse(source: &str) -> Result<Root, ParseError> {
    let mut parser = Parser::new(source);
    let (nodes, after) = parser.parse_nodes(None)?;
    log::trace!("parsed {} top-level nodes", nodes.len());
    Ok(Root {
        nodes,
        raws: RootRaws { after },
    })
}

struct Parser<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    /// Moves the cursor to where a nom parser left off.
    fn advance_to(&mut self, remaining: &'a str) {
        self.pos = self.source.len() - remaining.len();
    }

    fn skip_whitespace(&mut self) -> &'a str {
        let start = self.pos;
        // `whitespace` uses take_while and cannot fail.
        if let Ok((remaining, _)) = scan::whitespace(self.rest()) {
            self.advance_to(remaining);
        }
        &self.source[start..self.pos]
    }

    /// Parses statements until EOF (top level) or the `}` closing the block
    /// opened at `block_start`. Returns the nodes and the whitespace that
    /// preceded the end.
    fn parse_nodes(&mut self, block_start: Option<usize>) -> Result<(Vec<Node>, String), ParseError> {
        let mut nodes = Vec::new();

        loop {
            let before = self.skip_whitespace().to_string();
            let rest = self.rest();

            if rest.is_empty() {
                return match block_start {
                    Some(offset) => Err(ParseError::UnclosedBlock(offset)),
                    None => Ok((nodes, before)),
                };
            }

            if rest.starts_with('}') {
                return match block_start {
                    Some(_) => {
                        self.pos += 1;
                        Ok((nodes, before))
                    }
                    None => Err(ParseError::UnexpectedCloseBrace(self.pos)),
                };
            }

            let node = if rest.starts_with("/*") {
                self.parse_comment(before)?
            } else if rest.starts_with('@') {
                self.parse_at_rule(before)?
            } else {
                self.parse_rule_or_declaration(before)?
            };
            nodes.push(node);
        }
    }

    fn parse_comment(&mut self, before: String) -> Result<Node, ParseError> {
        let start = self.pos;
        let (remaining, text) =
            scan::comment(self.rest()).map_err(|_| ParseError::UnclosedComment(start))?;
        self.advance_to(remaining);
        Ok(Node::Comment(Comment {
            text: text.to_string(),
            raws: Raws {
                before,
                ..Raws::default()
            },
        }))
    }

    fn parse_at_rule(&mut self, before: String) -> Result<Node, ParseError> {
        let start = self.pos;
        let (remaining, name) =
            scan::at_keyword(self.rest()).map_err(|_| ParseError::MissingAtRuleName(start))?;
        self.advance_to(remaining);

        let (end, terminator) = scan::statement_end(self.source, self.pos)?;
        let (after_name, params, between) = match scan::split_padding(&self.source[self.pos..end]) {
            (leading, "", _) => ("", "", leading),
            padded => padded,
        };

        let mut raws = Raws {
            before,
            between: between.to_string(),
            after_name: after_name.to_string(),
            ..Raws::default()
        };
        self.pos = end;

        let nodes = match terminator {
            Terminator::OpenBrace => {
                self.pos += 1;
                let (children, after) = self.parse_nodes(Some(end))?;
                raws.after = after;
                Some(children)
            }
            Terminator::Semicolon => {
                self.pos += 1;
                raws.semicolon = true;
                None
            }
            Terminator::CloseBrace | Terminator::Eof => None,
        };

        Ok(Node::AtRule(AtRule {
            name: name.to_string(),
            params: params.to_string(),
            nodes,
            raws,
        }))
    }

    fn parse_rule_or_declaration(&mut self, before: String) -> Result<Node, ParseError> {
        let start = self.pos;
        let (end, terminator) = scan::statement_end(self.source, start)?;
        let text = &self.source[start..end];
        self.pos = end;

        if terminator == Terminator::OpenBrace {
            let selector = text.trim_end();
            let between = &text[selector.len()..];
            self.pos += 1;
            let (nodes, after) = self.parse_nodes(Some(end))?;
            return Ok(Node::Rule(Rule {
                selector: selector.to_string(),
                nodes,
                raws: Raws {
                    before,
                    between: between.to_string(),
                    after,
                    ..Raws::default()
                },
            }));
        }

        let unknown = || ParseError::UnknownWord {
            word: text.trim().to_string(),
            offset: start,
        };
        let colon = scan::find_colon(text).ok_or_else(unknown)?;
        let prop = text[..colon].trim_end();
        if prop.is_empty() {
            return Err(unknown());
        }

        let (leading, value, trailing) = scan::split_padding(&text[colon + 1..]);
        let between = format!("{}:{}", &text[prop.len()..colon], leading);

        let semicolon = terminator == Terminator::Semicolon;
        if semicolon {
            self.pos += 1;
        }

        Ok(Node::Declaration(Declaration {
            prop: prop.to_string(),
            value: value.to_string(),
            raws: Raws {
                before,
                between,
                after: trailing.to_string(),
                semicolon,
                ..Raws::default()
            },
        }))
    }
}
