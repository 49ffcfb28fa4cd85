//! # css-ast - Lossless CSS document tree
//!
//! A small CSS tree in the spirit of PostCSS: at-rules, rules, declarations
//! and comments, each carrying the raw whitespace it was written with. It is
//! the substrate the ICSS passes operate on.
//!
//! - **Parsing**: [`parse`] turns source text into a [`Root`]
//! - **Mutation**: nodes are plain structs; [`Root::walk_mut`],
//!   [`Root::at_rule_paths`] and [`Root::remove_at`] cover traversal and removal
//! - **Serialization**: every node implements [`Display`](std::fmt::Display);
//!   an unmodified tree prints back byte-for-byte
//!
//! ## Quick Start
//!
//! ```rust
//! use css_ast::{parse, Declaration, Node, Rule};
//!
//! let mut root = parse(".a { color: red; }").unwrap();
//! root.nodes.push(Node::Rule(Rule::new(
//!     ":export",
//!     vec![Node::Declaration(Declaration::new("primary", "red"))],
//! )));
//!
//! assert_eq!(
//!     root.to_string(),
//!     ".a { color: red; }\n:export {\n  primary: red;\n}"
//! );
//! ```
//!
//! ## Not Supported
//!
//! - Selector or value grammars: selectors, params and values are opaque strings
//! - `!important` is left inside the declaration value

pub mod error;
pub mod node;
pub mod parser;
mod stringify;

pub use error::ParseError;
pub use node::{AtRule, Comment, Declaration, Node, Raws, Root, RootRaws, Rule};
pub use parser::parse;
