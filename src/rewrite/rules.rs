use once_cell::sync::Lazy;

use crate::core::types::{ExceptionRule, PatternRule};

// The default tables reproduce the Jooble -> Jobin migration. The
// multi-word and domain-qualified forms must be consumed before the bare
// token rules, otherwise the bare rules would fire first and destroy the
// context the specific rules key on.
static BRAND_MIGRATION: Lazy<Ruleset> = Lazy::new(|| {
    let substitutions = vec![
        PatternRule::new_unchecked(r"Jooble\.az", "Jobin.az"),
        PatternRule::new_unchecked("Jooble Azərbaycan", "Jobin Azərbaycan"),
        PatternRule::new_unchecked("Jooble Haqqında", "Jobin Haqqında"),
        PatternRule::new_unchecked("Jooble", "Jobin"),
        PatternRule::new_unchecked(r"jooble\.az", "jobin.az"),
        PatternRule::new_unchecked("jooble", "jobin"),
    ];

    // Anchor hrefs keep pointing at the original domain. Only straight
    // quotes, only http/https, only the exact `www.` subdomain form; other
    // attributes (src=) and protocol-relative URLs are not protected.
    let exceptions = vec![
        ExceptionRule::new_unchecked(r#"href=["']https?://jobin\.az"#, "jobin", "jooble"),
        ExceptionRule::new_unchecked(r#"href=["']https?://www\.jobin\.az"#, "jobin", "jooble"),
    ];

    Ruleset { substitutions, exceptions }
});

/// An ordered substitution policy: pattern rules applied in sequence over
/// whole-file text, then exception rules reverting protected contexts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ruleset {
    pub substitutions: Vec<PatternRule>,
    pub exceptions: Vec<ExceptionRule>,
}

impl Ruleset {
    pub fn new(substitutions: Vec<PatternRule>, exceptions: Vec<ExceptionRule>) -> Self {
        Self { substitutions, exceptions }
    }

    /// The default Jooble -> Jobin brand migration tables.
    pub fn brand_migration() -> Self {
        BRAND_MIGRATION.clone()
    }
}

impl Default for Ruleset {
    fn default() -> Self {
        Self::brand_migration()
    }
}
