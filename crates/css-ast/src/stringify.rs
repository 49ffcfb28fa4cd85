//! Serialization of the document tree back to CSS text.
//!
//! Output is driven entirely by each node's [`Raws`](crate::Raws), so an
//! unmodified tree prints exactly the text it was parsed from.

use std::fmt::{self, Display, Formatter, Write};

use crate::node::{AtRule, Comment, Declaration, Node, Root, Rule};

fn write_block(f: &mut Formatter<'_>, nodes: &[Node], after: &str) -> fmt::Result {
    f.write_char('{')?;
    for node in nodes {
        write!(f, "{node}")?;
    }
    f.write_str(after)?;
    f.write_char('}')
}

impl Display for Declaration {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}{}",
            self.raws.before, self.prop, self.raws.between, self.value, self.raws.after
        )?;
        if self.raws.semicolon {
            f.write_char(';')?;
        }
        Ok(())
    }
}

impl Display for Comment {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}/*{}*/", self.raws.before, self.text)
    }
}

impl Display for Rule {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.raws.before, self.selector, self.raws.between)?;
        write_block(f, &self.nodes, &self.raws.after)
    }
}

impl Display for AtRule {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}@{}{}{}{}",
            self.raws.before, self.name, self.raws.after_name, self.params, self.raws.between
        )?;
        match &self.nodes {
            Some(nodes) => write_block(f, nodes, &self.raws.after),
            None if self.raws.semicolon => f.write_char(';'),
            None => Ok(()),
        }
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Node::AtRule(n) => n.fmt(f),
            Node::Rule(n) => n.fmt(f),
            Node::Declaration(n) => n.fmt(f),
            Node::Comment(n) => n.fmt(f),
        }
    }
}

impl Display for Root {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for node in &self.nodes {
            write!(f, "{node}")?;
        }
        f.write_str(&self.raws.after)
    }
}
