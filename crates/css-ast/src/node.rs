//! Document tree data structures.
//!
//! A stylesheet is a [`Root`] holding a list of [`Node`]s. Container nodes
//! (rules and block at-rules) hold their own children. Every node keeps the
//! formatting it was parsed with in its [`Raws`], so serializing an untouched
//! tree reproduces the source exactly.

/// Formatting captured around a node.
///
/// Only the fields that make sense for a given node kind are populated; the
/// rest stay empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Raws {
    /// Whitespace (and stray semicolons) preceding the node.
    pub before: String,
    /// Text between the selector/params/property and the block or value.
    /// For declarations this is the colon with its surrounding whitespace.
    pub between: String,
    /// Whitespace between an at-rule name and its params.
    pub after_name: String,
    /// Whitespace before the closing `}` of a block, or before the `;` of a declaration.
    pub after: String,
    /// Whether a statement node was terminated by its own `;`.
    pub semicolon: bool,
}

/// Formatting captured at the document level.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RootRaws {
    /// Trailing whitespace after the last node.
    pub after: String,
}

/// An at-rule such as `@media screen { ... }` or `@value red: #f00;`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AtRule {
    pub name: String,
    pub params: String,
    /// `None` for statement at-rules that end with `;`.
    pub nodes: Option<Vec<Node>>,
    pub raws: Raws,
}

impl AtRule {
    /// Creates a statement at-rule (no block).
    pub fn new(name: impl Into<String>, params: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: params.into(),
            nodes: None,
            raws: Raws {
                before: "\n".to_string(),
                after_name: " ".to_string(),
                semicolon: true,
                ..Raws::default()
            },
        }
    }
}

/// A qualified rule: a selector followed by a block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    pub selector: String,
    pub nodes: Vec<Node>,
    pub raws: Raws,
}

impl Rule {
    /// Creates a rule with pretty default formatting:
    ///
    /// ```text
    /// selector {
    ///   child: value;
    /// }
    /// ```
    pub fn new(selector: impl Into<String>, nodes: Vec<Node>) -> Self {
        Self {
            selector: selector.into(),
            nodes,
            raws: Raws {
                before: "\n".to_string(),
                between: " ".to_string(),
                after: "\n".to_string(),
                ..Raws::default()
            },
        }
    }

    /// Iterates over the declarations directly inside this rule.
    pub fn declarations(&self) -> impl Iterator<Item = &Declaration> + '_ {
        self.nodes.iter().filter_map(|node| match node {
            Node::Declaration(decl) => Some(decl),
            _ => None,
        })
    }
}

/// A `property: value` pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    pub prop: String,
    pub value: String,
    pub raws: Raws,
}

impl Declaration {
    /// Creates a declaration indented by two spaces and terminated by `;`.
    pub fn new(prop: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            prop: prop.into(),
            value: value.into(),
            raws: Raws {
                before: "\n  ".to_string(),
                between: ": ".to_string(),
                semicolon: true,
                ..Raws::default()
            },
        }
    }
}

/// A `/* ... */` comment. `text` excludes the delimiters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Comment {
    pub text: String,
    pub raws: Raws,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    AtRule(AtRule),
    Rule(Rule),
    Declaration(Declaration),
    Comment(Comment),
}

impl Node {
    pub fn raws(&self) -> &Raws {
        match self {
            Node::AtRule(n) => &n.raws,
            Node::Rule(n) => &n.raws,
            Node::Declaration(n) => &n.raws,
            Node::Comment(n) => &n.raws,
        }
    }

    pub fn raws_mut(&mut self) -> &mut Raws {
        match self {
            Node::AtRule(n) => &mut n.raws,
            Node::Rule(n) => &mut n.raws,
            Node::Declaration(n) => &mut n.raws,
            Node::Comment(n) => &mut n.raws,
        }
    }

    /// Children of a container node, `None` for leaves.
    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Node::AtRule(n) => n.nodes.as_deref(),
            Node::Rule(n) => Some(&n.nodes),
            _ => None,
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::AtRule(n) => n.nodes.as_mut(),
            Node::Rule(n) => Some(&mut n.nodes),
            _ => None,
        }
    }

    pub fn as_rule(&self) -> Option<&Rule> {
        match self {
            Node::Rule(rule) => Some(rule),
            _ => None,
        }
    }

    pub fn as_rule_mut(&mut self) -> Option<&mut Rule> {
        match self {
            Node::Rule(rule) => Some(rule),
            _ => None,
        }
    }

    pub fn as_at_rule(&self) -> Option<&AtRule> {
        match self {
            Node::AtRule(at_rule) => Some(at_rule),
            _ => None,
        }
    }
}

impl From<AtRule> for Node {
    fn from(value: AtRule) -> Self {
        Node::AtRule(value)
    }
}

impl From<Rule> for Node {
    fn from(value: Rule) -> Self {
        Node::Rule(value)
    }
}

impl From<Declaration> for Node {
    fn from(value: Declaration) -> Self {
        Node::Declaration(value)
    }
}

impl From<Comment> for Node {
    fn from(value: Comment) -> Self {
        Node::Comment(value)
    }
}

/// A parsed stylesheet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Root {
    pub nodes: Vec<Node>,
    pub raws: RootRaws,
}

impl Root {
    /// Visits every node depth-first in document order.
    pub fn walk<F: FnMut(&Node)>(&self, mut f: F) {
        fn visit<F: FnMut(&Node)>(nodes: &[Node], f: &mut F) {
            for node in nodes {
                f(node);
                if let Some(children) = node.children() {
                    visit(children, f);
                }
            }
        }
        visit(&self.nodes, &mut f);
    }

    /// Visits every node depth-first in document order, allowing mutation.
    ///
    /// A node is visited before its children, so a callback may replace the
    /// children it is about to descend into.
    pub fn walk_mut<F: FnMut(&mut Node)>(&mut self, mut f: F) {
        fn visit<F: FnMut(&mut Node)>(nodes: &mut [Node], f: &mut F) {
            for node in nodes.iter_mut() {
                f(node);
                if let Some(children) = node.children_mut() {
                    visit(children, f);
                }
            }
        }
        visit(&mut self.nodes, &mut f);
    }

    /// Index paths of every at-rule named `name` (ASCII case-insensitive),
    /// in document order.
    pub fn at_rule_paths(&self, name: &str) -> Vec<Vec<usize>> {
        fn visit(nodes: &[Node], name: &str, prefix: &mut Vec<usize>, out: &mut Vec<Vec<usize>>) {
            for (index, node) in nodes.iter().enumerate() {
                prefix.push(index);
                if let Node::AtRule(at_rule) = node {
                    if at_rule.name.eq_ignore_ascii_case(name) {
                        out.push(prefix.clone());
                    }
                }
                if let Some(children) = node.children() {
                    visit(children, name, prefix, out);
                }
                prefix.pop();
            }
        }
        let mut out = Vec::new();
        visit(&self.nodes, name, &mut Vec::new(), &mut out);
        out
    }

    /// Looks up a node by its index path.
    pub fn node_at(&self, path: &[usize]) -> Option<&Node> {
        let (first, rest) = path.split_first()?;
        let mut node = self.nodes.get(*first)?;
        for index in rest {
            node = node.children()?.get(*index)?;
        }
        Some(node)
    }

    /// Removes and returns the node at `path`.
    ///
    /// Removing shifts the indices of later siblings, so callers removing
    /// several nodes should go from the last path to the first.
    pub fn remove_at(&mut self, path: &[usize]) -> Option<Node> {
        let (last, parents) = path.split_last()?;
        let siblings = match parents.split_first() {
            None => &mut self.nodes,
            Some((first, rest)) => {
                let mut node = self.nodes.get_mut(*first)?;
                for index in rest {
                    node = node.children_mut()?.get_mut(*index)?;
                }
                node.children_mut()?
            }
        };
        if *last < siblings.len() {
            Some(siblings.remove(*last))
        } else {
            None
        }
    }
}
