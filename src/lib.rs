//! `@value` support for ICSS stylesheets.
//!
//! This crate bundles the workspace into one entry point: the lossless CSS
//! tree from [`css_ast`] and the `@value` pass from [`icss_values`], plus the
//! command-line front end of the `icss-values` binary.
//!
//! ```rust
//! use icss_values_rs::{process_css, ValuesConfig};
//!
//! let processed = process_css(
//!     "@value gap: 4px;\n.a { margin: gap; }",
//!     &ValuesConfig::default(),
//!     &[],
//! )
//! .unwrap();
//! assert!(processed.css.ends_with(".a { margin: 4px; }"));
//! ```

pub mod cli;
pub mod error;
pub mod log_init;

pub use css_ast::{self, ParseError, Root, parse};
pub use error::{CliError, Result};
pub use icss_values::{
    self, Message, Output, Processed, SubstitutionTargets, ValuesConfig, ValuesError, ValuesPlugin,
    Warning, WarningKind, process_css,
};
