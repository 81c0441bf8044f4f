use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "sass-migrator-helper")]
#[command(
    about = "Rewrites @import paths that use a path alias in SCSS files to relative paths, then runs sass-migrator on each updated file and the main entry file"
)]
pub struct Cli {
    /// The root directory containing all SCSS files (e.g., src)
    #[arg(long)]
    pub source_dir: PathBuf,

    /// The main SCSS entry file for sass-migrator
    #[arg(long)]
    pub entry_file: PathBuf,

    /// The alias in import paths to replace with relative paths (e.g., @styles)
    #[arg(long)]
    pub alias: String,
}
