use std::path::PathBuf;

use crate::cli::Cli;

/// Everything one run needs, carried explicitly instead of read from
/// ambient state.
#[derive(Debug, Clone)]
pub struct MigrationConfig {
    /// Root directory to scan for stylesheets.
    pub source_dir: PathBuf,
    /// Main stylesheet handed to sass-migrator after all updated files.
    pub entry_file: PathBuf,
    /// Alias token to replace in import paths.
    pub alias: String,
}

impl MigrationConfig {
    pub fn from_cli(cli: Cli) -> Self {
        Self {
            source_dir: cli.source_dir,
            entry_file: cli.entry_file,
            alias: cli.alias,
        }
    }
}
