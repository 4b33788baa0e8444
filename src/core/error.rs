use std::fmt;

/// Comprehensive error types for rebrand operations
#[derive(Debug)]
pub enum RebrandError {
    /// Configuration error
    Config(String),

    /// Rule validation error
    Rule(String),

    /// Regex compilation error
    Regex(regex::Error),

    /// File walking/ignore error
    FileWalking(ignore::Error),
}

impl fmt::Display for RebrandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RebrandError::Config(msg) => write!(f, "Configuration error: {msg}"),
            RebrandError::Rule(msg) => write!(f, "Rule error: {msg}"),
            RebrandError::Regex(err) => write!(f, "Regex error: {err}"),
            RebrandError::FileWalking(err) => write!(f, "File walking error: {err}"),
        }
    }
}

impl std::error::Error for RebrandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RebrandError::Regex(err) => Some(err),
            RebrandError::FileWalking(err) => Some(err),
            _ => None,
        }
    }
}

impl From<regex::Error> for RebrandError {
    fn from(err: regex::Error) -> Self {
        RebrandError::Regex(err)
    }
}

impl From<ignore::Error> for RebrandError {
    fn from(err: ignore::Error) -> Self {
        RebrandError::FileWalking(err)
    }
}

/// Type alias for Results using RebrandError
pub type Result<T> = std::result::Result<T, RebrandError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_error_display() {
        let config_error = RebrandError::Config("Invalid root".to_string());
        assert_eq!(format!("{config_error}"), "Configuration error: Invalid root");

        let rule_error = RebrandError::Rule("Empty pattern".to_string());
        assert_eq!(format!("{rule_error}"), "Rule error: Empty pattern");
    }

    #[test]
    #[allow(clippy::invalid_regex)]
    fn test_error_from_regex() {
        let regex_error = regex::Regex::new("[invalid").unwrap_err();
        let rebrand_error = RebrandError::from(regex_error);

        match rebrand_error {
            RebrandError::Regex(_) => {} // Expected
            _ => panic!("Expected Regex variant"),
        }
    }

    #[test]
    fn test_error_from_ignore() {
        let ignore_error = ignore::WalkBuilder::new("/non/existent/path/12345")
            .build()
            .next()
            .unwrap()
            .unwrap_err();
        let rebrand_error = RebrandError::from(ignore_error);

        match rebrand_error {
            RebrandError::FileWalking(_) => {} // Expected
            _ => panic!("Expected FileWalking variant"),
        }
    }

    #[test]
    #[allow(clippy::invalid_regex)]
    fn test_all_variants_display_with_colon() {
        // Every variant produced by a production path renders "kind: detail"
        let errors = vec![
            RebrandError::Config("Bad config".to_string()),
            RebrandError::Rule("Bad rule".to_string()),
            RebrandError::Regex(regex::Regex::new("[invalid").unwrap_err()),
            RebrandError::FileWalking(
                ignore::WalkBuilder::new("/non/existent/path/12345")
                    .build()
                    .next()
                    .unwrap()
                    .unwrap_err(),
            ),
        ];

        for error in errors {
            let display_str = format!("{error}");
            assert!(!display_str.is_empty());
            assert!(display_str.contains(":"));
        }
    }

    #[test]
    #[allow(clippy::invalid_regex)]
    fn test_error_source() {
        let regex_error = RebrandError::Regex(regex::Regex::new("[invalid").unwrap_err());
        assert!(regex_error.source().is_some());

        let config_error = RebrandError::Config("test".to_string());
        assert!(config_error.source().is_none());

        let rule_error = RebrandError::Rule("test".to_string());
        assert!(rule_error.source().is_none());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RebrandError>();
    }

    #[test]
    fn test_result_type_alias() {
        let success: Result<i32> = Ok(42);
        let error: Result<i32> = Err(RebrandError::Config("test".to_string()));

        assert!(success.is_ok());
        assert!(error.is_err());
        if let Ok(value) = success {
            assert_eq!(value, 42);
        }
    }
}
