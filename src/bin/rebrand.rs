use clap::Parser;
use rebrand::config::{CliConfig, Config};
use rebrand::core::constants::messages;
use rebrand::discovery::expand_paths;
use rebrand::migration::{MigrateFiles, Migrator};
use rebrand::reporting::logging;
use rebrand::rewrite::Rewriter;
use rebrand::ui::{Cli, cli_to_config};

use std::path::Path;
use std::time::Instant;

fn main() {
    let cli = Cli::parse();

    match run_rebrand_logic(&cli) {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Main migration logic extracted from main() for testing
pub fn run_rebrand_logic(cli: &Cli) -> Result<i32, Box<dyn std::error::Error>> {
    let cli_config = cli_to_config(cli);

    // Load and merge configuration
    let config = load_and_merge_config(cli, &cli_config)?;

    // Setup logging
    let verbose = config.verbose.unwrap_or(false);
    let quiet = config.quiet.unwrap_or(false);
    logging::init_logger(verbose, quiet);

    // Compile the substitution policy once for the whole run
    let ruleset = config.ruleset()?;
    logging::log_config_info(&config, ruleset.substitutions.len(), ruleset.exceptions.len());
    let rewriter = Rewriter::new(&ruleset)?;

    // Enumerate candidate files
    let roots: Vec<String> = if cli.paths.is_empty() {
        vec![config.root_path().to_string()]
    } else {
        cli.paths.clone()
    };
    let root_paths: Vec<&Path> = roots.iter().map(Path::new).collect();
    let candidates = expand_paths(root_paths, &config.file_types_as_set())?;
    logging::log_file_info(candidates.len(), &candidates);

    // Rewrite files sequentially; per-file errors are reported and swallowed
    let start = Instant::now();
    let summary = Migrator::new(&rewriter).migrate(&candidates);
    logging::log_migration_complete(&summary, start.elapsed().as_millis());

    // The per-file Updated/Error lines are the run's contract and always
    // print; quiet only drops the closing summary line
    if !quiet {
        println!("{}", messages::MIGRATION_COMPLETE);
    }

    // Per-file failures do not change the exit status
    Ok(0)
}

/// Load configuration from file (or defaults) and merge CLI arguments over it
fn load_and_merge_config(
    cli: &Cli,
    cli_config: &CliConfig,
) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = if cli.no_config {
        Config::default()
    } else if let Some(ref config_path) = cli.config {
        Config::load_from_file(config_path)?
    } else {
        Config::load_from_standard_locations()
    };

    config.merge_with_cli(cli_config);
    config.validate()?;
    Ok(config)
}
