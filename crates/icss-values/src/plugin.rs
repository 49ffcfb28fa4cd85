//! The `@value` pass.
//!
//! Processing happens in three phases over one document:
//!
//! 1. **Collect**: every `@value` at-rule is parsed in document order. Symbols,
//!    placeholders and warnings are computed against that snapshot; the tree
//!    is not touched.
//! 2. **Rewrite**: `@value` rules are removed, `:import`/`:export` blocks are
//!    created or extended.
//! 3. **Substitute**: a final pass replaces symbol names (and scoped
//!    identifiers redirected to symbols) everywhere outside the ICSS blocks.

use std::collections::HashMap;

use css_ast::{Node, Root, Rule};

use crate::config::{SubstitutionTargets, ValuesConfig};
use crate::diagnostics::{Diagnostics, Message, Warning, WarningKind};
use crate::error::ValuesError;
use crate::exports::{export_rule, find_export_block, is_export_selector, merge_into};
use crate::imports::{ImportRegistry, import_path};
use crate::prelude::{ValueDeclaration, parse_prelude};
use crate::substitute::replace_identifier;
use crate::symbols::{SymbolOrigin, SymbolTable};

/// What a run produced besides the rewritten tree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Output {
    /// One `icss-value` message per symbol, in first-declaration order.
    pub messages: Vec<Message>,
    pub warnings: Vec<Warning>,
}

/// Result of [`process_css`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Processed {
    pub css: String,
    pub messages: Vec<Message>,
    pub warnings: Vec<Warning>,
}

/// A `@value` statement found during collection.
struct Statement {
    path: Vec<usize>,
    params: String,
    source: String,
}

impl Statement {
    /// Top-level index of the statement or of its outermost ancestor.
    fn anchor(&self) -> usize {
        self.path[0]
    }
}

/// Resolves `@value` declarations in a document.
///
/// ```
/// use icss_values::{ValuesConfig, ValuesPlugin};
///
/// let mut root = css_ast::parse("@value primary: #BF4040;\n.a { color: primary; }").unwrap();
/// let output = ValuesPlugin::new(ValuesConfig::default()).run(&mut root, &[]);
///
/// assert!(output.warnings.is_empty());
/// assert_eq!(
///     root.to_string(),
///     ":export {\n  primary: #BF4040;\n}\n.a { color: #BF4040; }"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct ValuesPlugin {
    config: ValuesConfig,
}

impl ValuesPlugin {
    /// Creates a plugin that runs with `config`.
    pub fn new(config: ValuesConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this plugin runs with.
    pub fn config(&self) -> &ValuesConfig {
        &self.config
    }

    /// Runs the pass over `root`. `input` carries messages from earlier
    /// stages; only `icss-scoped` entries are consulted.
    pub fn run(&self, root: &mut Root, input: &[Message]) -> Output {
        let statements = collect_statements(root);
        log::debug!("found {} @value statements", statements.len());

        let mut run = Run {
            symbols: SymbolTable::new(),
            imports: ImportRegistry::from_root(root, &self.config),
            diagnostics: Diagnostics::new(),
        };
        for statement in &statements {
            run.process(statement);
        }

        let Run {
            mut symbols,
            imports,
            diagnostics,
        } = run;

        // Symbol values take the scoped redirects before any block is written.
        let redirects = scoped_redirects(input, &symbols);
        for symbol in symbols.iter_mut() {
            redirect(&mut symbol.value, &redirects);
        }

        rewrite(root, &statements, &symbols, &imports);
        substitute_nodes(&mut root.nodes, &symbols, &redirects, &self.config);

        let messages = symbols
            .iter()
            .map(|symbol| Message::value(&self.config.plugin_name, &symbol.name, &symbol.value))
            .collect();

        Output {
            messages,
            warnings: diagnostics.into_warnings(),
        }
    }
}

/// Parses `source`, runs the pass and serializes the result.
///
/// ```
/// use icss_values::{process_css, ValuesConfig};
///
/// let processed = process_css("@value red: blue;\n@value red: green;", &ValuesConfig::default(), &[]).unwrap();
/// assert_eq!(processed.warnings[0].to_string(), "\"red\" value already declared");
/// assert_eq!(processed.css, ":export {\n  red: green;\n}");
/// ```
pub fn process_css(
    source: &str,
    config: &ValuesConfig,
    input: &[Message],
) -> Result<Processed, ValuesError> {
    let mut root = css_ast::parse(source)?;
    let output = ValuesPlugin::new(config.clone()).run(&mut root, input);
    Ok(Processed {
        css: root.to_string(),
        messages: output.messages,
        warnings: output.warnings,
    })
}

fn collect_statements(root: &Root) -> Vec<Statement> {
    root.at_rule_paths("value")
        .into_iter()
        .filter_map(|path| {
            let at_rule = root.node_at(&path)?.as_at_rule()?;
            Some(Statement {
                params: at_rule.params.clone(),
                source: at_rule.to_string().trim().to_string(),
                path,
            })
        })
        .collect()
}

/// Mutable state of a single run.
struct Run {
    symbols: SymbolTable,
    imports: ImportRegistry,
    diagnostics: Diagnostics,
}

impl Run {
    fn process(&mut self, statement: &Statement) {
        let declaration = match parse_prelude(&statement.params) {
            Ok(declaration) => declaration,
            Err(err) => {
                log::debug!("rejecting @value {:?}: {err}", statement.params);
                self.warn(statement, WarningKind::InvalidDefinition(statement.params.clone()));
                return;
            }
        };

        match declaration {
            ValueDeclaration::Local { name, value } => {
                let resolved = self.symbols.resolve(&value).into_owned();
                log::debug!("defining {name} = {resolved}");
                self.define(statement, name, resolved, SymbolOrigin::Local);
            }
            ValueDeclaration::Import { path, names } => {
                for imported in names {
                    let placeholder = self.imports.register(
                        &path,
                        &imported.source,
                        &imported.alias,
                        statement.anchor(),
                    );
                    log::debug!(
                        "importing {} as {} from {path} ({placeholder})",
                        imported.source,
                        imported.alias
                    );
                    self.define(
                        statement,
                        imported.alias,
                        placeholder,
                        SymbolOrigin::Imported(path.clone()),
                    );
                }
            }
        }
    }

    fn define(&mut self, statement: &Statement, name: String, value: String, origin: SymbolOrigin) {
        if name.contains(['.', '#']) {
            self.warn(statement, WarningKind::DotOrHash(name.clone()));
        }
        if self.symbols.define(name.clone(), value, origin).is_some() {
            self.warn(statement, WarningKind::AlreadyDeclared(name));
        }
    }

    fn warn(&mut self, statement: &Statement, kind: WarningKind) {
        self.diagnostics
            .warn(Warning::new(kind).with_node(statement.source.clone()));
    }
}

/// Removes the `@value` statements and inserts or extends the ICSS blocks.
fn rewrite(root: &mut Root, statements: &[Statement], symbols: &SymbolTable, imports: &ImportRegistry) {
    // Existing blocks are updated in place before indices shift.
    imports.apply_existing(root);
    let existing_export = find_export_block(root);
    if let Some(index) = existing_export {
        if let Some(rule) = root.nodes[index].as_rule_mut() {
            merge_into(rule, symbols);
        }
    }

    let mut insertions: HashMap<usize, Vec<Rule>> = HashMap::new();
    for (anchor, rule) in imports.new_rules() {
        insertions.entry(anchor).or_default().push(rule);
    }
    if existing_export.is_none() && !symbols.is_empty() {
        if let Some(last) = statements.last() {
            log::debug!("creating :export with {} entries", symbols.len());
            insertions
                .entry(last.anchor())
                .or_default()
                .push(export_rule(symbols));
        }
    }

    // Removing in reverse document order keeps the remaining paths valid.
    for statement in statements.iter().rev().filter(|s| s.path.len() > 1) {
        root.remove_at(&statement.path);
    }

    let removed: Vec<usize> = statements
        .iter()
        .filter(|s| s.path.len() == 1)
        .map(Statement::anchor)
        .collect();

    // Spacing of a removed statement that directly precedes the next
    // generated block.
    let mut carried: Option<String> = None;

    let old = std::mem::take(&mut root.nodes);
    for (index, mut node) in old.into_iter().enumerate() {
        let is_removed = removed.contains(&index);

        if let Some(rules) = insertions.remove(&index) {
            let mut rules = rules.into_iter().map(Node::from);
            if let Some(mut first) = rules.next() {
                // The first generated block takes over the anchor's spacing.
                let anchor_before = if is_removed {
                    std::mem::take(&mut node.raws_mut().before)
                } else {
                    std::mem::replace(&mut node.raws_mut().before, "\n".to_string())
                };
                first.raws_mut().before = carried.take().unwrap_or(anchor_before);
                root.nodes.push(first);
            }
            root.nodes.extend(rules);
        } else if is_removed && carried.is_none() {
            carried = Some(std::mem::take(&mut node.raws_mut().before));
        }

        if !is_removed {
            carried = None;
            root.nodes.push(node);
        }
    }
}

/// Maps scoped identifiers to the values of the symbols they were derived from.
fn scoped_redirects(input: &[Message], symbols: &SymbolTable) -> Vec<(String, String)> {
    input
        .iter()
        .filter_map(|message| match message {
            Message::Scoped { name, value } => {
                let target = symbols.value(name)?;
                log::debug!("redirecting scoped {value} ({name}) -> {target}");
                Some((value.clone(), target.to_string()))
            }
            _ => None,
        })
        .collect()
}

fn is_icss_block(rule: &Rule) -> bool {
    is_export_selector(&rule.selector) || import_path(&rule.selector).is_some()
}

fn redirect(text: &mut String, redirects: &[(String, String)]) {
    for (scoped, value) in redirects {
        let replaced = replace_identifier(text, scoped, value).into_owned();
        *text = replaced;
    }
}

fn resolve_in_place(text: &mut String, symbols: &SymbolTable) {
    let resolved = symbols.resolve(text).into_owned();
    *text = resolved;
}

/// Final document-wide substitution pass.
fn substitute_nodes(
    nodes: &mut [Node],
    symbols: &SymbolTable,
    redirects: &[(String, String)],
    config: &ValuesConfig,
) {
    if symbols.is_empty() {
        return;
    }

    for node in nodes {
        match node {
            Node::Declaration(decl) => {
                if config.targets.contains(SubstitutionTargets::DECLARATIONS) {
                    resolve_in_place(&mut decl.value, symbols);
                }
                redirect(&mut decl.value, redirects);
            }
            Node::Rule(rule) => {
                if is_icss_block(rule) {
                    continue;
                }
                if config.targets.contains(SubstitutionTargets::SELECTORS) {
                    resolve_in_place(&mut rule.selector, symbols);
                }
                redirect(&mut rule.selector, redirects);
                substitute_nodes(&mut rule.nodes, symbols, redirects, config);
            }
            Node::AtRule(at_rule) => {
                if config.substitutes_at_rule(&at_rule.name) {
                    resolve_in_place(&mut at_rule.params, symbols);
                }
                redirect(&mut at_rule.params, redirects);
                if let Some(children) = at_rule.nodes.as_mut() {
                    substitute_nodes(children, symbols, redirects, config);
                }
            }
            Node::Comment(_) => {}
        }
    }
}
