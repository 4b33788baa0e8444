use std::fmt;

/// Validation errors for rule construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    /// The match pattern is empty
    EmptyPattern,
    /// The context pattern of an exception is empty
    EmptyContext,
    /// The literal to revert inside an exception match is empty
    EmptyRevertTarget,
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleError::EmptyPattern => write!(f, "pattern must not be empty"),
            RuleError::EmptyContext => write!(f, "exception context must not be empty"),
            RuleError::EmptyRevertTarget => write!(f, "exception revert target must not be empty"),
        }
    }
}

impl std::error::Error for RuleError {}

/// An ordered match/replace instruction applied to whole-file text.
///
/// The pattern is a regex over the file content; the replacement is a
/// literal (no capture-group expansion). Rules are applied in sequence, each
/// one seeing the output of the previous, so ordering is part of the policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternRule {
    pattern: String,
    replacement: String,
}

impl PatternRule {
    pub fn new(
        pattern: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Result<Self, RuleError> {
        let pattern = pattern.into();
        if pattern.is_empty() {
            return Err(RuleError::EmptyPattern);
        }
        Ok(Self { pattern, replacement: replacement.into() })
    }

    /// Construct without validation, for built-in tables known to be
    /// well-formed and for tests.
    pub fn new_unchecked(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self { pattern: pattern.into(), replacement: replacement.into() }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }
}

/// A post-processing rule that reverts a prior substitution within a
/// narrowly scoped structural context.
///
/// The context regex matches over already-substituted text; within each
/// match, the first occurrence of `from` is replaced with `to`. Text outside
/// the match is never touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExceptionRule {
    context: String,
    from: String,
    to: String,
}

impl ExceptionRule {
    pub fn new(
        context: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Result<Self, RuleError> {
        let context = context.into();
        let from = from.into();
        if context.is_empty() {
            return Err(RuleError::EmptyContext);
        }
        if from.is_empty() {
            return Err(RuleError::EmptyRevertTarget);
        }
        Ok(Self { context, from, to: to.into() })
    }

    /// Construct without validation, for built-in tables known to be
    /// well-formed and for tests.
    pub fn new_unchecked(
        context: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        Self { context: context.into(), from: from.into(), to: to.into() }
    }

    pub fn context(&self) -> &str {
        &self.context
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn to(&self) -> &str {
        &self.to
    }
}
