//! Warnings and contract messages.
//!
//! Warnings are the only user-visible failure channel of the pass. Messages
//! are the machine-readable contract exchanged with other ICSS stages: the
//! pass consumes `icss-scoped` messages and produces `icss-value` messages.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WarningKind {
    /// The `@value` prelude could not be parsed. Holds the raw prelude.
    InvalidDefinition(String),
    /// A name was declared more than once.
    AlreadyDeclared(String),
    /// A name contains `.` or `#`.
    DotOrHash(String),
}

/// A non-fatal problem found while processing a document.
///
/// `Display` renders the exact user-facing text:
///
/// ```
/// use icss_values::{Warning, WarningKind};
///
/// let warning = Warning::new(WarningKind::AlreadyDeclared("red".into()));
/// assert_eq!(warning.to_string(), "\"red\" value already declared");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Warning {
    pub kind: WarningKind,
    /// The serialized statement that triggered the warning.
    pub node: Option<String>,
}

impl Warning {
    pub fn new(kind: WarningKind) -> Self {
        Self { kind, node: None }
    }

    pub fn with_node(mut self, node: impl Into<String>) -> Self {
        self.node = Some(node.into());
        self
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            WarningKind::InvalidDefinition(raw) => write!(f, "Invalid value definition \"{raw}\""),
            WarningKind::AlreadyDeclared(name) => write!(f, "\"{name}\" value already declared"),
            WarningKind::DotOrHash(name) => {
                write!(f, "Dot and hash symbols are not allowed in value \"{name}\"")
            }
        }
    }
}

/// A contract message exchanged between ICSS stages.
///
/// Serialized with a `type` discriminant:
///
/// ```
/// use icss_values::Message;
///
/// let json = r#"{"type":"icss-scoped","name":"a","value":"__scope__a"}"#;
/// let message: Message = serde_json::from_str(json).unwrap();
/// assert_eq!(message, Message::scoped("a", "__scope__a"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Message {
    /// `name` was renamed to the scoped identifier `value` by an earlier pass.
    #[serde(rename = "icss-scoped")]
    Scoped { name: String, value: String },
    /// `name` resolves to `value` in this document.
    #[serde(rename = "icss-value")]
    Value {
        plugin: String,
        name: String,
        value: String,
    },
}

impl Message {
    pub fn scoped(name: impl Into<String>, value: impl Into<String>) -> Self {
        Message::Scoped {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn value(plugin: impl Into<String>, name: impl Into<String>, value: impl Into<String>) -> Self {
        Message::Value {
            plugin: plugin.into(),
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Collects warnings in the order they are raised.
#[derive(Debug, Default)]
pub struct Diagnostics {
    warnings: Vec<Warning>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warn(&mut self, warning: Warning) {
        log::warn!("{warning}");
        self.warnings.push(warning);
    }

    pub fn into_warnings(self) -> Vec<Warning> {
        self.warnings
    }
}
