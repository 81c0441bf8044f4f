use std::path::{Path, PathBuf};

use anyhow::Result;
use colored::Colorize;
use log::{info, warn};

use crate::config::MigrationConfig;
use crate::migrate::run_sass_migrator;
use crate::rewrite::AliasRewriter;
use crate::scan::find_scss_files;

/// Aggregate counts for one complete run.
#[derive(Debug, Default, Clone, Copy)]
pub struct RunSummary {
    pub files_scanned: usize,
    pub files_updated: usize,
    pub rewrite_failures: usize,
    pub migrations_attempted: usize,
    pub migration_failures: usize,
}

/// The whole run, strictly sequential: scan the tree, rewrite each file,
/// then invoke sass-migrator on every updated file (in discovery order) and
/// finally on the entry file. Only a scan failure is fatal; every per-file
/// and per-invocation failure is reported and the run continues.
pub fn run(config: &MigrationConfig) -> Result<RunSummary> {
    let rewriter = AliasRewriter::new(&config.alias, &config.source_dir)?;
    let files = find_scss_files(&config.source_dir)?;
    info!("Found {} .scss file(s) under {}", files.len(), config.source_dir.display());

    let mut summary = RunSummary {
        files_scanned: files.len(),
        ..Default::default()
    };

    let mut files_to_migrate: Vec<PathBuf> = Vec::new();
    for file in &files {
        match rewriter.rewrite_file(file) {
            Ok(outcome) if outcome.changed => files_to_migrate.push(file.clone()),
            Ok(_) => {}
            Err(e) => {
                eprintln!("{} {:#}", "Error:".red(), e);
                warn!("Skipping {}: {:#}", file.display(), e);
                summary.rewrite_failures += 1;
            }
        }
    }
    summary.files_updated = files_to_migrate.len();

    for file in &files_to_migrate {
        println!("Running sass-migrator on updated file: {}", file.display());
        migrate_one(file, &mut summary);
    }

    println!(
        "Running sass-migrator on entry file: {}",
        config.entry_file.display()
    );
    migrate_one(&config.entry_file, &mut summary);

    Ok(summary)
}

fn migrate_one(file: &Path, summary: &mut RunSummary) {
    summary.migrations_attempted += 1;
    if let Err(e) = run_sass_migrator(file) {
        eprintln!("{} {:#}", "Error:".red(), e);
        warn!("sass-migrator failed for {}: {:#}", file.display(), e);
        summary.migration_failures += 1;
    }
}
