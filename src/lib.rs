//! Attrweave - combine user properties, attributes, and text into attribute values
//!
//! This library resolves a small backtick template language against a user
//! record and assembles the ordered value collection a host merges into an
//! outbound attribute statement (SAML/OIDC style).
//!
//! # Example
//!
//! ```rust
//! use attrweave::{combine, CombineConfig, UserRecord};
//!
//! let user = UserRecord::new()
//!     .with_username("alice")
//!     .with_attribute("user:`username`", ["from-raw-lookup"]);
//!
//! let values = combine("user:`username`", &user, &CombineConfig::default());
//! assert_eq!(values, vec!["from-raw-lookup", "user:alice"]);
//! ```

pub mod template;
pub mod user;

pub use template::{resolve, resolve_name, Segment, WELL_KNOWN_PROPERTIES};
pub use user::{UserError, UserRecord};

/// Configuration for the combine pipeline
#[derive(Debug, Clone, Default)]
pub struct CombineConfig {
    /// When set, the raw-name pass takes every value of a matching attribute
    /// instead of only the first.
    pub aggregate: bool,
}

impl CombineConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable aggregate attribute lookup
    pub fn with_aggregate(mut self, aggregate: bool) -> Self {
        self.aggregate = aggregate;
        self
    }
}

/// An outbound attribute ready for the host to emit.
///
/// The attribute name and wire format are host-controlled; this crate only
/// fills in the value collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedAttribute {
    pub name: String,
    pub values: Vec<String>,
}

/// Produce the ordered value collection for a template.
///
/// Two independent passes contribute to the output:
/// 1. the *raw-name* pass looks up the unparsed template string as an
///    attribute name (all values or just the first, per
///    [`CombineConfig::aggregate`]);
/// 2. the template pass substitutes placeholders via [`resolve`] and appends
///    its single result.
///
/// The two passes stay separate on purpose: either one is independently
/// useful to host configurations, and their union is the contract.
pub fn combine(template: &str, user: &UserRecord, config: &CombineConfig) -> Vec<String> {
    let mut values = user.resolve_attribute(template, config.aggregate);
    values.push(resolve(template, user));
    values
}

/// Build the outbound attribute for a host statement.
///
/// Returns `None` when the combined value collection is empty, in which case
/// the host emits no attribute at all.
pub fn map_attribute(
    name: &str,
    template: &str,
    user: &UserRecord,
    config: &CombineConfig,
) -> Option<MappedAttribute> {
    let values = combine(template, user, config);
    if values.is_empty() {
        return None;
    }
    Some(MappedAttribute {
        name: name.to_string(),
        values,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_combine_template_pass_only() {
        let user = UserRecord::new().with_username("alice");
        let values = combine("user:`username`", &user, &CombineConfig::new());
        assert_eq!(values, vec!["user:alice"]);
    }

    #[test]
    fn test_combine_empty_template_still_appended() {
        let values = combine("", &UserRecord::new(), &CombineConfig::new());
        assert_eq!(values, vec![String::new()]);
    }

    #[test]
    fn test_combine_raw_name_pass_contributes() {
        // The raw template string doubles as an attribute name.
        let user = UserRecord::new()
            .with_username("alice")
            .with_attribute("`username`", ["raw-1", "raw-2"]);

        let first_only = combine("`username`", &user, &CombineConfig::new());
        assert_eq!(first_only, vec!["raw-1", "alice"]);

        let aggregated = combine(
            "`username`",
            &user,
            &CombineConfig::new().with_aggregate(true),
        );
        assert_eq!(aggregated, vec!["raw-1", "raw-2", "alice"]);
    }

    #[test]
    fn test_combine_resolved_value_is_last() {
        let user = UserRecord::new()
            .with_attribute("greeting", ["hi"])
            .with_attribute("greeting `name`", ["whole-template"]);
        let values = combine("greeting `name`", &user, &CombineConfig::new());
        assert_eq!(values, vec!["whole-template", "greeting name"]);
    }

    #[test]
    fn test_map_attribute_wraps_combined_values() {
        let user = UserRecord::new().with_username("alice");
        let attr = map_attribute("displayName", "`username`", &user, &CombineConfig::new())
            .expect("template pass always contributes a value");
        assert_eq!(attr.name, "displayName");
        assert_eq!(attr.values, vec!["alice"]);
    }
}
