// Command-line interface definitions and parsing for rebrand

use clap::Parser;

use crate::config::CliConfig;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Files or directories to migrate (default: configured root, `src`)
    pub paths: Vec<String>,

    // Filtering & Content
    /// File extensions to process (e.g., tsx,ts,js,json,html,css)
    #[arg(long, value_name = "EXTENSIONS", help_heading = "Filtering & Content")]
    pub include: Option<String>,

    // Output & Verbosity
    /// Suppress non-essential output
    #[arg(short = 'q', long, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, help_heading = "Configuration")]
    pub no_config: bool,
}

/// Map parsed CLI arguments into the CliConfig overlay
pub fn cli_to_config(cli: &Cli) -> CliConfig {
    let mut cli_config = CliConfig {
        verbose: cli.verbose,
        quiet: cli.quiet,
        ..CliConfig::default()
    };

    if let Some(ref include_str) = cli.include {
        cli_config.file_types = Some(
            include_str
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        );
    }

    // A single path argument overrides the configured root; multiple paths
    // are handled by the binary directly
    if cli.paths.len() == 1 {
        cli_config.root = Some(cli.paths[0].clone());
    }

    cli_config
}
