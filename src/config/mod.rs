//! Configuration management
//!
//! This module handles loading and managing configuration from
//! TOML files and CLI arguments. The defaults reproduce the original
//! hardcoded migration: root `src`, the six-extension allow-list, and the
//! Jooble -> Jobin rule tables.

use regex::Regex;
use serde::{Deserialize, Serialize};

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::core::constants::{config_files, files, paths};
use crate::core::error::{RebrandError, Result};
use crate::core::types::{ExceptionRule, PatternRule};
use crate::rewrite::Ruleset;

/// A substitution table entry as written in TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstitutionEntry {
    pub pattern: String,
    pub replacement: String,
}

/// An exception table entry as written in TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExceptionEntry {
    pub context: String,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Root directory to migrate when no path argument is given
    pub root: Option<String>,

    /// File extensions to process
    pub file_types: Option<Vec<String>>,

    /// Enable verbose logging
    pub verbose: Option<bool>,

    /// Suppress non-essential output
    pub quiet: Option<bool>,

    /// Ordered substitution rules; defaults to the brand migration table
    pub substitutions: Option<Vec<SubstitutionEntry>>,

    /// Exception rules applied after all substitutions
    pub exceptions: Option<Vec<ExceptionEntry>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: Some(paths::DEFAULT_ROOT.to_string()),
            file_types: Some(
                files::DEFAULT_FILE_TYPES.iter().map(|s| s.to_string()).collect(),
            ),
            verbose: Some(false),
            quiet: Some(false),
            substitutions: None, // Fall back to the built-in brand tables
            exceptions: None,
        }
    }
}

impl Config {
    /// Load configuration from file, falling back to defaults
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            RebrandError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            RebrandError::Config(format!(
                "Invalid TOML in config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        // Validate the loaded configuration
        config.validate()?;
        Ok(config)
    }

    /// Try to find and load a config file in standard locations
    pub fn load_from_standard_locations() -> Self {
        // Check for .rebrand.toml in current directory
        if let Ok(config) = Self::load_from_file(config_files::STANDARD_NAME) {
            return config;
        }

        // Check for .rebrand.toml in parent directories
        for i in 1..=config_files::PARENT_SEARCH_DEPTH {
            let path = format!("{}{}", "../".repeat(i), config_files::STANDARD_NAME);
            if let Ok(config) = Self::load_from_file(&path) {
                return config;
            }
        }

        // Fall back to defaults
        Self::default()
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        if let Some(ref root) = cli_config.root {
            self.root = Some(root.clone());
        }
        if let Some(ref file_types) = cli_config.file_types {
            self.file_types = Some(file_types.clone());
        }
        if cli_config.verbose {
            self.verbose = Some(true);
        }
        if cli_config.quiet {
            self.quiet = Some(true);
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if let Some(ref root) = self.root
            && root.is_empty()
        {
            return Err(RebrandError::Config(
                "Root directory cannot be empty.".to_string(),
            ));
        }

        if let Some(ref file_types) = self.file_types {
            if file_types.is_empty() {
                return Err(RebrandError::Config(
                    "File type list cannot be empty. Expected at least one extension.".to_string(),
                ));
            }
            for ext in file_types {
                if ext.is_empty() || ext.starts_with('.') {
                    return Err(RebrandError::Config(format!(
                        "File type '{ext}' is invalid. Expected a bare extension such as 'tsx'."
                    )));
                }
            }
        }

        if let Some(ref substitutions) = self.substitutions {
            if substitutions.is_empty() {
                return Err(RebrandError::Config(
                    "Substitution table cannot be empty when given.".to_string(),
                ));
            }
            for entry in substitutions {
                Regex::new(&entry.pattern).map_err(|e| {
                    RebrandError::Config(format!(
                        "Substitution pattern '{}' is not a valid regex: {e}",
                        entry.pattern
                    ))
                })?;
            }
        }

        if let Some(ref exceptions) = self.exceptions {
            for entry in exceptions {
                Regex::new(&entry.context).map_err(|e| {
                    RebrandError::Config(format!(
                        "Exception context '{}' is not a valid regex: {e}",
                        entry.context
                    ))
                })?;
            }
        }

        Ok(())
    }

    /// Build the substitution policy from the configured tables, falling
    /// back to the built-in brand migration when none are given.
    pub fn ruleset(&self) -> Result<Ruleset> {
        match (&self.substitutions, &self.exceptions) {
            (None, None) => Ok(Ruleset::brand_migration()),
            (substitutions, exceptions) => {
                let defaults = Ruleset::brand_migration();

                let substitutions = match substitutions {
                    Some(entries) => {
                        let mut rules = Vec::with_capacity(entries.len());
                        for entry in entries {
                            rules.push(
                                PatternRule::new(&entry.pattern, &entry.replacement)
                                    .map_err(|e| RebrandError::Rule(e.to_string()))?,
                            );
                        }
                        rules
                    }
                    None => defaults.substitutions,
                };

                let exceptions = match exceptions {
                    Some(entries) => {
                        let mut rules = Vec::with_capacity(entries.len());
                        for entry in entries {
                            rules.push(
                                ExceptionRule::new(&entry.context, &entry.from, &entry.to)
                                    .map_err(|e| RebrandError::Rule(e.to_string()))?,
                            );
                        }
                        rules
                    }
                    None => defaults.exceptions,
                };

                Ok(Ruleset::new(substitutions, exceptions))
            }
        }
    }

    /// Convert file_types to HashSet for the traversal filter
    pub fn file_types_as_set(&self) -> HashSet<String> {
        self.file_types
            .as_ref()
            .map(|types| types.iter().cloned().collect())
            .unwrap_or_else(|| {
                files::DEFAULT_FILE_TYPES.iter().map(|s| s.to_string()).collect()
            })
    }

    /// Root directory for a run without path arguments
    pub fn root_path(&self) -> &str {
        self.root.as_deref().unwrap_or(paths::DEFAULT_ROOT)
    }
}

/// CLI argument overlay merged over file-based configuration
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub root: Option<String>,
    pub file_types: Option<Vec<String>>,
    pub verbose: bool,
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use std::io::Write;

    type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn test_default_config_matches_original_behavior() {
        let config = Config::default();

        assert_eq!(config.root_path(), "src");
        let types = config.file_types_as_set();
        assert_eq!(types.len(), 6);
        for ext in ["tsx", "ts", "js", "json", "html", "css"] {
            assert!(types.contains(ext), "missing extension {ext}");
        }
    }

    #[test]
    fn test_default_ruleset_is_brand_migration() -> TestResult {
        let config = Config::default();
        assert_eq!(config.ruleset()?, Ruleset::brand_migration());
        Ok(())
    }

    #[test]
    fn test_load_from_file() -> TestResult {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(
            br#"
root = "site"
file_types = ["html", "css"]
verbose = true
"#,
        )?;

        let config = Config::load_from_file(file.path())?;

        assert_eq!(config.root_path(), "site");
        assert_eq!(config.file_types, Some(vec!["html".to_string(), "css".to_string()]));
        assert_eq!(config.verbose, Some(true));
        Ok(())
    }

    #[test]
    fn test_load_from_file__with_rule_tables() -> TestResult {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(
            r##"
[[substitutions]]
pattern = 'Acme\.io'
replacement = "Apex.io"

[[substitutions]]
pattern = "Acme"
replacement = "Apex"

[[exceptions]]
context = "href=[\"']https?://apex\\.io"
from = "apex"
to = "acme"
"##
            .as_bytes(),
        )?;

        let config = Config::load_from_file(file.path())?;
        let ruleset = config.ruleset()?;

        assert_eq!(ruleset.substitutions.len(), 2);
        assert_eq!(ruleset.substitutions[0].pattern(), r"Acme\.io");
        assert_eq!(ruleset.exceptions.len(), 1);
        assert_eq!(ruleset.exceptions[0].from(), "apex");
        Ok(())
    }

    #[test]
    fn test_load_from_file__invalid_toml() -> TestResult {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(b"root = [unterminated")?;

        let result = Config::load_from_file(file.path());

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid TOML"));
        Ok(())
    }

    #[test]
    fn test_load_from_file__missing_file() {
        let result = Config::load_from_file("/definitely/missing/.rebrand.toml");

        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Could not read config file")
        );
    }

    #[test]
    fn test_validate__rejects_invalid_substitution_regex() -> TestResult {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(
            br#"
[[substitutions]]
pattern = "[unclosed"
replacement = "x"
"#,
        )?;

        let result = Config::load_from_file(file.path());

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not a valid regex"));
        Ok(())
    }

    #[test]
    fn test_validate__rejects_empty_file_types() {
        let config = Config { file_types: Some(vec![]), ..Config::default() };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate__rejects_dotted_extension() {
        let config = Config {
            file_types: Some(vec![".tsx".to_string()]),
            ..Config::default()
        };

        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("bare extension"));
    }

    #[test]
    fn test_validate__rejects_empty_root() {
        let config = Config { root: Some(String::new()), ..Config::default() };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_merge_with_cli__cli_takes_precedence() {
        let mut config = Config::default();
        let cli_config = CliConfig {
            root: Some("app".to_string()),
            file_types: Some(vec!["html".to_string()]),
            verbose: true,
            quiet: false,
        };

        config.merge_with_cli(&cli_config);

        assert_eq!(config.root_path(), "app");
        assert_eq!(config.file_types, Some(vec!["html".to_string()]));
        assert_eq!(config.verbose, Some(true));
        assert_eq!(config.quiet, Some(false));
    }

    #[test]
    fn test_merge_with_cli__absent_flags_keep_file_values() {
        let mut config = Config { verbose: Some(true), ..Config::default() };

        config.merge_with_cli(&CliConfig::default());

        assert_eq!(config.verbose, Some(true));
        assert_eq!(config.root_path(), "src");
    }

    #[test]
    fn test_ruleset__custom_substitutions_keep_default_exceptions() -> TestResult {
        let config = Config {
            substitutions: Some(vec![SubstitutionEntry {
                pattern: "Jooble".to_string(),
                replacement: "Jobin".to_string(),
            }]),
            ..Config::default()
        };

        let ruleset = config.ruleset()?;

        assert_eq!(ruleset.substitutions.len(), 1);
        assert_eq!(ruleset.exceptions, Ruleset::brand_migration().exceptions);
        Ok(())
    }
}
