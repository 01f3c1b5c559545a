//! Template resolution - substitutes placeholder segments with user values

use crate::template::scanner::{scan, Segment};
use crate::user::UserRecord;

/// Accessor for a single well-known property on a user record
pub type PropertyAccessor = fn(&UserRecord) -> Option<&str>;

/// Ordered lookup table of well-known property names.
///
/// Placeholder names are matched case-sensitively against this table before
/// any attribute lookup happens.
pub const WELL_KNOWN_PROPERTIES: &[(&str, PropertyAccessor)] = &[
    ("email", |user: &UserRecord| user.email.as_deref()),
    ("federationLink", |user: &UserRecord| {
        user.federation_link.as_deref()
    }),
    ("firstName", |user: &UserRecord| user.first_name.as_deref()),
    ("id", |user: &UserRecord| user.id.as_deref()),
    ("lastName", |user: &UserRecord| user.last_name.as_deref()),
    ("serviceAccountClientLink", |user: &UserRecord| {
        user.service_account_client_link.as_deref()
    }),
    ("username", |user: &UserRecord| user.username.as_deref()),
];

/// Resolve a single placeholder name against a user record.
///
/// Resolution order:
/// 1. A well-known property name substitutes that property's value, or the
///    empty string when the property is absent.
/// 2. Otherwise, an attribute with at least one value substitutes its first
///    value.
/// 3. Otherwise, the literal name itself. Unknown placeholders stay visible
///    in the output rather than vanishing.
pub fn resolve_name<'a>(name: &'a str, user: &'a UserRecord) -> &'a str {
    if let Some((_, accessor)) = WELL_KNOWN_PROPERTIES.iter().find(|(n, _)| *n == name) {
        return accessor(user).unwrap_or("");
    }

    match user.attributes.get(name).and_then(|values| values.first()) {
        Some(value) => value.as_str(),
        None => name,
    }
}

/// Resolve a template against a user record.
///
/// Scans the template into segments, maps placeholder segments through
/// [`resolve_name`], and concatenates everything in order. Never fails:
/// unresolvable placeholders fall back to their literal name.
pub fn resolve(template: &str, user: &UserRecord) -> String {
    scan(template)
        .iter()
        .map(|segment| match segment {
            Segment::Literal(text) => text.as_str(),
            Segment::Placeholder(name) => resolve_name(name, user),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_user() -> UserRecord {
        UserRecord::new()
            .with_id("u-1")
            .with_username("alice")
            .with_email("alice@example.com")
            .with_first_name("Alice")
            .with_last_name("Smith")
            .with_attribute("customAttrib", ["42", "43"])
    }

    #[test]
    fn test_empty_template() {
        assert_eq!(resolve("", &sample_user()), "");
    }

    #[test]
    fn test_literal_passthrough() {
        assert_eq!(resolve("hello", &sample_user()), "hello");
    }

    #[test]
    fn test_no_backticks_is_identity() {
        let template = "plain text, no placeholders at all";
        assert_eq!(resolve(template, &UserRecord::new()), template);
    }

    #[test]
    fn test_well_known_property() {
        assert_eq!(resolve("user:`username`", &sample_user()), "user:alice");
    }

    #[test]
    fn test_every_well_known_property_has_an_accessor() {
        let user = sample_user()
            .with_federation_link("fed-1")
            .with_service_account_client_link("svc-1");
        assert_eq!(
            resolve(
                "`email`|`federationLink`|`firstName`|`id`|`lastName`|`serviceAccountClientLink`|`username`",
                &user
            ),
            "alice@example.com|fed-1|Alice|u-1|Smith|svc-1|alice"
        );
    }

    #[test]
    fn test_absent_property_substitutes_empty() {
        let user = UserRecord::new();
        assert_eq!(resolve("<`email`>", &user), "<>");
    }

    #[test]
    fn test_property_match_is_case_sensitive() {
        // "Username" is not a well-known property and not an attribute,
        // so it falls back to the literal name.
        assert_eq!(resolve("`Username`", &sample_user()), "Username");
    }

    #[test]
    fn test_attribute_uses_first_value() {
        assert_eq!(resolve("`customAttrib`", &sample_user()), "42");
    }

    #[test]
    fn test_unknown_name_falls_back_to_itself() {
        assert_eq!(resolve("`nope`", &sample_user()), "nope");
    }

    #[test]
    fn test_empty_placeholder_name() {
        assert_eq!(resolve("a``b", &sample_user()), "ab");
    }

    #[test]
    fn test_attribute_with_no_values_behaves_as_absent() {
        let user = UserRecord::new().with_attribute("empty", Vec::<String>::new());
        assert_eq!(resolve("`empty`", &user), "empty");
    }

    #[test]
    fn test_unterminated_placeholder_dropped() {
        assert_eq!(resolve("abc`def", &sample_user()), "abc");
    }

    #[test]
    fn test_escaped_backtick() {
        assert_eq!(resolve(r"a\`b`customAttrib`", &sample_user()), "a`b42");
        // the escaped pair collapses; "c" is unknown and stays as-is
        assert_eq!(resolve(r"a\`b`c`", &sample_user()), "a`bc");
    }

    #[test]
    fn test_help_text_example() {
        assert_eq!(
            resolve(
                r"`username`-last:\``lastName`\`_`customAttrib`",
                &sample_user()
            ),
            "alice-last:`Smith`_42"
        );
    }

    #[test]
    fn test_never_fails_on_empty_context() {
        let user = UserRecord::new();
        for template in ["", "`", "``", r"\`", "`x`y`z", r"a\b\`c`d`"] {
            // resolution is total; only the output differs
            let _ = resolve(template, &user);
        }
    }
}
