use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use log::info;

use sass_migrator_helper::cli::Cli;
use sass_migrator_helper::config::MigrationConfig;
use sass_migrator_helper::runner;

fn main() -> Result<()> {
    env_logger::Builder::from_default_env().init();

    let cli = Cli::parse();
    let config = MigrationConfig::from_cli(cli);
    info!("Starting sass-migrator-helper for {}", config.source_dir.display());

    let summary = runner::run(&config)?;

    println!(
        "{}",
        format!(
            "Done: {} of {} files updated, {} migration run(s), {} failure(s)",
            summary.files_updated,
            summary.files_scanned,
            summary.migrations_attempted,
            summary.rewrite_failures + summary.migration_failures
        )
        .dimmed()
    );
    Ok(())
}
