//! Configuration for the `@value` pass.

use bitflags::bitflags;

bitflags! {
    /// Which parts of the document receive ordinary symbol substitution.
    ///
    /// Scoped-identifier redirects ignore these flags and always rewrite
    /// declaration values, selectors and at-rule params.
    ///
    /// # Example
    ///
    /// ```
    /// use icss_values::SubstitutionTargets;
    ///
    /// let targets = SubstitutionTargets::all() - SubstitutionTargets::SELECTORS;
    /// assert!(targets.contains(SubstitutionTargets::DECLARATIONS));
    /// assert!(!targets.contains(SubstitutionTargets::SELECTORS));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct SubstitutionTargets: u8 {
        /// Declaration values (`color: primary`)
        const DECLARATIONS   = 0b0000_0001;
        /// Rule selectors
        const SELECTORS      = 0b0000_0010;
        /// Params of the at-rules listed in [`ValuesConfig::at_rules`]
        const AT_RULE_PARAMS = 0b0000_0100;
    }
}

impl Default for SubstitutionTargets {
    fn default() -> Self {
        Self::all()
    }
}

pub const DEFAULT_PLACEHOLDER_PREFIX: &str = "__value__";
pub const DEFAULT_PLUGIN_NAME: &str = "icss-values";

/// Options for [`ValuesPlugin`](crate::ValuesPlugin).
///
/// ```
/// use icss_values::{SubstitutionTargets, ValuesConfig};
///
/// let config = ValuesConfig::default()
///     .with_placeholder_prefix("__v_")
///     .with_targets(SubstitutionTargets::DECLARATIONS);
/// assert_eq!(config.placeholder_prefix, "__v_");
/// assert_eq!(config.plugin_name, "icss-values");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValuesConfig {
    /// Prefix for generated import placeholders.
    pub placeholder_prefix: String,
    /// Written to the `plugin` field of every `icss-value` message.
    pub plugin_name: String,
    pub targets: SubstitutionTargets,
    /// At-rules whose params receive substitution (ASCII case-insensitive).
    pub at_rules: Vec<String>,
}

impl Default for ValuesConfig {
    fn default() -> Self {
        Self {
            placeholder_prefix: DEFAULT_PLACEHOLDER_PREFIX.to_string(),
            plugin_name: DEFAULT_PLUGIN_NAME.to_string(),
            targets: SubstitutionTargets::default(),
            at_rules: vec!["media".to_string(), "custom-media".to_string()],
        }
    }
}

impl ValuesConfig {
    pub fn with_placeholder_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.placeholder_prefix = prefix.into();
        self
    }

    pub fn with_plugin_name(mut self, name: impl Into<String>) -> Self {
        self.plugin_name = name.into();
        self
    }

    pub fn with_targets(mut self, targets: SubstitutionTargets) -> Self {
        self.targets = targets;
        self
    }

    pub fn with_at_rules<I, S>(mut self, at_rules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.at_rules = at_rules.into_iter().map(Into::into).collect();
        self
    }

    /// Whether `name` is one of the at-rules that receive substitution.
    pub fn substitutes_at_rule(&self, name: &str) -> bool {
        self.targets.contains(SubstitutionTargets::AT_RULE_PARAMS)
            && self.at_rules.iter().any(|at| at.eq_ignore_ascii_case(name))
    }
}
