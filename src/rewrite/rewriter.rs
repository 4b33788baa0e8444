use regex::{Captures, NoExpand, Regex};

use std::borrow::Cow;

use crate::core::error::Result;
use crate::rewrite::rules::Ruleset;

pub trait RewriteText {
    fn transform(&self, content: &str) -> String;
}

#[derive(Debug)]
struct CompiledSubstitution {
    matcher: Regex,
    replacement: String,
}

#[derive(Debug)]
struct CompiledException {
    context: Regex,
    from: String,
    to: String,
}

/// Pure text transformation implementing the brand migration with
/// link-preservation exceptions.
///
/// Substitutions are applied in table order, case-sensitive,
/// non-overlapping, leftmost-first, each one over the output of the
/// previous. Exceptions then revert the protected literal inside each
/// context match only. `transform` performs no I/O and cannot fail; all
/// patterns are compiled once at construction.
#[derive(Debug)]
pub struct Rewriter {
    substitutions: Vec<CompiledSubstitution>,
    exceptions: Vec<CompiledException>,
}

impl Rewriter {
    pub fn new(ruleset: &Ruleset) -> Result<Self> {
        let mut substitutions = Vec::with_capacity(ruleset.substitutions.len());
        for rule in &ruleset.substitutions {
            substitutions.push(CompiledSubstitution {
                matcher: Regex::new(rule.pattern())?,
                replacement: rule.replacement().to_string(),
            });
        }

        let mut exceptions = Vec::with_capacity(ruleset.exceptions.len());
        for rule in &ruleset.exceptions {
            exceptions.push(CompiledException {
                context: Regex::new(rule.context())?,
                from: rule.from().to_string(),
                to: rule.to().to_string(),
            });
        }

        Ok(Self { substitutions, exceptions })
    }

    /// Rewriter for the default Jooble -> Jobin tables.
    pub fn brand_migration() -> Self {
        Self::new(&Ruleset::brand_migration()).expect("default ruleset patterns must compile")
    }
}

impl RewriteText for Rewriter {
    fn transform(&self, content: &str) -> String {
        let mut text = content.to_string();

        for sub in &self.substitutions {
            // Replacements are literal; NoExpand keeps `$` in replacement
            // text from being treated as a capture reference
            if let Cow::Owned(replaced) =
                sub.matcher.replace_all(&text, NoExpand(&sub.replacement))
            {
                text = replaced;
            }
        }

        for exc in &self.exceptions {
            if let Cow::Owned(replaced) = exc.context.replace_all(&text, |caps: &Captures| {
                caps[0].replacen(exc.from.as_str(), exc.to.as_str(), 1)
            }) {
                text = replaced;
            }
        }

        text
    }
}
