//! `:export` block management.

use css_ast::{Declaration, Node, Root, Rule};

use crate::imports::terminate_declarations;
use crate::symbols::SymbolTable;

pub const EXPORT_SELECTOR: &str = ":export";

pub fn is_export_selector(selector: &str) -> bool {
    selector.trim() == EXPORT_SELECTOR
}

/// Top-level index of the first `:export` block, if any.
pub fn find_export_block(root: &Root) -> Option<usize> {
    root.nodes
        .iter()
        .position(|node| node.as_rule().is_some_and(|rule| is_export_selector(&rule.selector)))
}

/// Writes every symbol into `rule`.
///
/// Entries that already exist keep their position and take the symbol's
/// value; new names are appended in first-declaration order.
pub fn merge_into(rule: &mut Rule, symbols: &SymbolTable) {
    let before = rule.declarations().last().map(|decl| decl.raws.before.clone());
    let mut appended = 0;

    for symbol in symbols.iter() {
        let existing = rule.nodes.iter_mut().find_map(|node| match node {
            Node::Declaration(decl) if decl.prop == symbol.name => Some(decl),
            _ => None,
        });

        match existing {
            Some(decl) => {
                if decl.value != symbol.value {
                    log::debug!("updating :export entry {} -> {}", symbol.name, symbol.value);
                    decl.value.clone_from(&symbol.value);
                }
            }
            None => {
                let mut decl = Declaration::new(symbol.name.clone(), symbol.value.clone());
                if let Some(before) = &before {
                    decl.raws.before.clone_from(before);
                }
                rule.nodes.push(Node::Declaration(decl));
                appended += 1;
            }
        }
    }

    if appended > 0 {
        terminate_declarations(rule);
    }
}

/// Builds a fresh `:export` block for `symbols`.
pub fn export_rule(symbols: &SymbolTable) -> Rule {
    let nodes = symbols
        .iter()
        .map(|symbol| Node::Declaration(Declaration::new(symbol.name.clone(), symbol.value.clone())))
        .collect();
    Rule::new(EXPORT_SELECTOR, nodes)
}
