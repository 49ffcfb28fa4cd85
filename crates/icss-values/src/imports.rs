//! `:import(path)` block management.
//!
//! Every imported name gets a placeholder token from a counter owned by the
//! registry, so tokens are unique within one run and never shared between
//! documents.

use std::collections::HashSet;

use css_ast::{Declaration, Node, Root, Rule};
use indexmap::IndexMap;

use crate::config::ValuesConfig;

/// Extracts the normalized path from an `:import(...)` selector.
///
/// ```
/// use icss_values::imports::import_path;
///
/// assert_eq!(import_path(":import('./a.css')").as_deref(), Some("./a.css"));
/// assert_eq!(import_path(":import( \"./a.css\" )").as_deref(), Some("./a.css"));
/// assert_eq!(import_path(":import(./a.css)").as_deref(), Some("./a.css"));
/// assert_eq!(import_path(":export"), None);
/// ```
pub fn import_path(selector: &str) -> Option<String> {
    let inner = selector
        .trim()
        .strip_prefix(":import(")?
        .strip_suffix(')')?
        .trim();
    Some(normalize_path(inner).to_string())
}

/// Strips one level of matching quotes.
pub fn normalize_path(path: &str) -> &str {
    let path = path.trim();
    for quote in ['\'', '"'] {
        if let Some(inner) = path.strip_prefix(quote).and_then(|p| p.strip_suffix(quote)) {
            return inner;
        }
    }
    path
}

/// Builds the selector for a new import block.
pub fn import_selector(path: &str) -> String {
    if path.contains('\'') {
        format!(":import(\"{path}\")")
    } else {
        format!(":import('{path}')")
    }
}

/// One `placeholder: imported_name;` line of an `:import` block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportEntry {
    pub placeholder: String,
    /// Name as exported by the imported file.
    pub imported_name: String,
}

/// Entries destined for one `:import(path)` block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportBlock {
    /// Path as written in the first statement that used it, quotes stripped.
    pub path: String,
    /// Entries added by this run, in allocation order.
    pub entries: Vec<ImportEntry>,
    /// Top-level index of a pre-existing block for this path.
    pub existing: Option<usize>,
    /// Top-level index of the `@value` statement that first used the path.
    pub anchor: usize,
}

/// Placeholder allocation and import bookkeeping for a single run.
#[derive(Debug)]
pub struct ImportRegistry {
    prefix: String,
    counter: usize,
    /// Placeholders already present in the document's import blocks.
    taken: HashSet<String>,
    /// Pre-existing blocks by normalized path.
    existing: IndexMap<String, usize>,
    blocks: IndexMap<String, ImportBlock>,
}

impl ImportRegistry {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: 0,
            taken: HashSet::new(),
            existing: IndexMap::new(),
            blocks: IndexMap::new(),
        }
    }

    /// Scans the top level of `root` for existing `:import(...)` blocks.
    pub fn from_root(root: &Root, config: &ValuesConfig) -> Self {
        let mut existing = IndexMap::new();
        let mut taken = HashSet::new();

        for (index, node) in root.nodes.iter().enumerate() {
            let Some(rule) = node.as_rule() else { continue };
            let Some(path) = import_path(&rule.selector) else { continue };
            taken.extend(rule.declarations().map(|decl| decl.prop.clone()));
            existing.entry(path).or_insert(index);
        }

        Self {
            prefix: config.placeholder_prefix.clone(),
            counter: 0,
            taken,
            existing,
            blocks: IndexMap::new(),
        }
    }

    /// Returns the next unused placeholder for `alias`.
    ///
    /// ```
    /// use icss_values::imports::ImportRegistry;
    ///
    /// let mut registry = ImportRegistry::new("__value__");
    /// assert_eq!(registry.allocate("red"), "__value__red__0");
    /// assert_eq!(registry.allocate("blue"), "__value__blue__1");
    /// ```
    pub fn allocate(&mut self, alias: &str) -> String {
        loop {
            let placeholder = format!("{}{}__{}", self.prefix, alias, self.counter);
            self.counter += 1;
            if !self.taken.contains(&placeholder) {
                self.taken.insert(placeholder.clone());
                return placeholder;
            }
        }
    }

    /// Records that `source` is imported from `path` and returns its placeholder.
    pub fn register(&mut self, path: &str, source: &str, alias: &str, anchor: usize) -> String {
        let placeholder = self.allocate(alias);
        let existing = self.existing.get(path).copied();
        let block = self
            .blocks
            .entry(path.to_string())
            .or_insert_with(|| ImportBlock {
                path: path.to_string(),
                entries: Vec::new(),
                existing,
                anchor,
            });
        block.entries.push(ImportEntry {
            placeholder: placeholder.clone(),
            imported_name: source.to_string(),
        });
        placeholder
    }

    /// Blocks in first-use order.
    pub fn blocks(&self) -> impl Iterator<Item = &ImportBlock> + '_ {
        self.blocks.values()
    }

    /// Appends the entries of blocks that already exist in `root`.
    pub fn apply_existing(&self, root: &mut Root) {
        for block in self.blocks() {
            let Some(index) = block.existing else { continue };
            if let Some(rule) = root.nodes.get_mut(index).and_then(Node::as_rule_mut) {
                log::debug!("appending {} entries to existing :import({})", block.entries.len(), block.path);
                append_entries(rule, &block.entries);
            }
        }
    }

    /// Builds new rules for paths without an existing block, with their anchors.
    pub fn new_rules(&self) -> Vec<(usize, Rule)> {
        self.blocks()
            .filter(|block| block.existing.is_none())
            .map(|block| {
                log::debug!("creating :import({}) with {} entries", block.path, block.entries.len());
                let mut rule = Rule::new(import_selector(&block.path), Vec::new());
                append_entries(&mut rule, &block.entries);
                (block.anchor, rule)
            })
            .collect()
    }
}

/// Appends `placeholder: name` declarations, matching the indentation of the
/// block's last declaration when there is one.
fn append_entries(rule: &mut Rule, entries: &[ImportEntry]) {
    let before = rule.declarations().last().map(|decl| decl.raws.before.clone());
    for entry in entries {
        let mut decl = Declaration::new(entry.placeholder.clone(), entry.imported_name.clone());
        if let Some(before) = &before {
            decl.raws.before.clone_from(before);
        }
        rule.nodes.push(Node::Declaration(decl));
    }
    terminate_declarations(rule);
}

/// Gives every declaration but the last its own `;` so appended entries never
/// run into an unterminated predecessor, and moves the closing `}` of a
/// compact block onto its own line.
pub(crate) fn terminate_declarations(rule: &mut Rule) {
    let count = rule.nodes.len();
    for node in rule.nodes.iter_mut().take(count.saturating_sub(1)) {
        if let Node::Declaration(decl) = node {
            decl.raws.semicolon = true;
        }
    }
    if rule.raws.after.is_empty() && count > 0 {
        rule.raws.after = "\n".to_string();
    }
}
