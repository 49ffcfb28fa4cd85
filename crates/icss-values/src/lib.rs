//! # icss-values - `@value` resolution for Interoperable CSS
//!
//! Resolves named value declarations inside a stylesheet and publishes them
//! through the ICSS contract: `:import(path)` blocks for values pulled from
//! other modules and a single `:export` block for everything the document
//! defines.
//!
//! ## Quick Start
//!
//! ```rust
//! use icss_values::{process_css, Message, ValuesConfig};
//!
//! let source = "\
//! @value primary: #BF4040;
//! @value secondary from './colors.css';
//! .button { color: primary; border-color: secondary; }";
//!
//! let processed = process_css(source, &ValuesConfig::default(), &[]).unwrap();
//! assert!(processed.warnings.is_empty());
//! assert_eq!(
//!     processed.css,
//!     "\
//! :import('./colors.css') {
//!   __value__secondary__0: secondary;
//! }
//! :export {
//!   primary: #BF4040;
//!   secondary: __value__secondary__0;
//! }
//! .button { color: #BF4040; border-color: __value__secondary__0; }"
//! );
//! assert_eq!(
//!     processed.messages[0],
//!     Message::value("icss-values", "primary", "#BF4040")
//! );
//! ```
//!
//! ## Statement Shapes
//!
//! - `@value name: value;` and `@value name value;` define a local value
//! - `@value a, b as c from './path.css';` imports values
//! - `@value (a, b) from './path.css';` imports a parenthesized list
//!
//! Malformed statements, redeclarations and names containing `.` or `#`
//! produce [`Warning`]s; they never abort processing.
//!
//! ## Modules
//!
//! - [`prelude`]: grammar of the text after `@value`
//! - [`symbols`]: ordered symbol table
//! - [`imports`]: `:import` blocks and placeholder allocation
//! - [`exports`]: the `:export` block
//! - [`substitute`]: whole-token substitution
//! - [`diagnostics`]: warnings and contract messages
//! - [`plugin`]: the pass itself

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod exports;
pub mod imports;
pub mod plugin;
pub mod prelude;
pub mod substitute;
pub mod symbols;

pub use config::{SubstitutionTargets, ValuesConfig};
pub use diagnostics::{Message, Warning, WarningKind};
pub use error::ValuesError;
pub use plugin::{Output, Processed, ValuesPlugin, process_css};
