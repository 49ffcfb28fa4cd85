//! Per-document symbol table.
//!
//! Symbols are kept in first-declaration order. Redefining a name replaces
//! its value but keeps its original position, which is the order used for
//! the `:export` block and the `icss-value` messages.

use std::borrow::Cow;

use indexmap::IndexMap;

use crate::substitute::substitute_tokens;

/// Where a symbol's value came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SymbolOrigin {
    Local,
    /// Imported from the given path; the value is a placeholder token.
    Imported(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Symbol {
    pub name: String,
    pub value: String,
    pub origin: SymbolOrigin,
}

#[derive(Clone, Debug, Default)]
pub struct SymbolTable {
    symbols: IndexMap<String, Symbol>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defines `name`, returning the symbol it replaced, if any.
    ///
    /// ```
    /// use icss_values::symbols::{SymbolOrigin, SymbolTable};
    ///
    /// let mut table = SymbolTable::new();
    /// table.define("a", "1", SymbolOrigin::Local);
    /// table.define("b", "2", SymbolOrigin::Local);
    /// let previous = table.define("a", "3", SymbolOrigin::Local);
    ///
    /// assert_eq!(previous.unwrap().value, "1");
    /// let names: Vec<_> = table.iter().map(|s| (s.name.as_str(), s.value.as_str())).collect();
    /// assert_eq!(names, vec![("a", "3"), ("b", "2")]);
    /// ```
    pub fn define(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
        origin: SymbolOrigin,
    ) -> Option<Symbol> {
        let name = name.into();
        let symbol = Symbol {
            name: name.clone(),
            value: value.into(),
            origin,
        };
        // IndexMap::insert keeps the slot of an existing key.
        self.symbols.insert(name, symbol)
    }

    /// Looks up the symbol currently bound to `name`.
    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(name)
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.symbols.get(name).map(|symbol| symbol.value.as_str())
    }

    /// Substitutes every known symbol name in `text` with its current value.
    pub fn resolve<'t>(&self, text: &'t str) -> Cow<'t, str> {
        if self.symbols.is_empty() {
            return Cow::Borrowed(text);
        }
        substitute_tokens(text, |token| self.value(token))
    }

    /// Symbols in first-declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Symbol> + '_ {
        self.symbols.values()
    }

    /// Mutable access to every symbol, in first-declaration order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Symbol> + '_ {
        self.symbols.values_mut()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transitive_resolution() {
        let mut table = SymbolTable::new();
        table.define("aaa", "red", SymbolOrigin::Local);
        let resolved = table.resolve("aaa").into_owned();
        table.define("bbb", resolved, SymbolOrigin::Local);
        assert_eq!(table.value("bbb"), Some("red"));
    }

    #[test]
    fn test_override_changes_origin() {
        let mut table = SymbolTable::new();
        table.define("a", "red", SymbolOrigin::Local);
        table.define("a", "__value__a__0", SymbolOrigin::Imported("./x.css".into()));
        let symbol = table.get("a").unwrap();
        assert_eq!(symbol.origin, SymbolOrigin::Imported("./x.css".into()));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_resolve_nested_expression() {
        let mut table = SymbolTable::new();
        table.define("base", "4px", SymbolOrigin::Local);
        assert_eq!(table.resolve("calc(base * 2)"), "calc(4px * 2)");
    }
}
