use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result};

/// Runs `sass-migrator --migrate-deps module <file>` with inherited stdio,
/// so the tool's own output streams straight to the operator. A spawn
/// failure or a non-success exit status is an error for this invocation
/// only; the caller decides whether to continue.
pub fn run_sass_migrator(file: &Path) -> Result<()> {
    let status = Command::new("sass-migrator")
        .args(["--migrate-deps", "module"])
        .arg(file)
        .status()
        .with_context(|| format!("Failed to launch sass-migrator for {}", file.display()))?;

    if !status.success() {
        anyhow::bail!(
            "sass-migrator exited with {} for {}",
            status,
            file.display()
        );
    }
    Ok(())
}
