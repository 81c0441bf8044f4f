use std::path::{Path, PathBuf};

use anyhow::Result;
use walkdir::WalkDir;

/// Recursively collect every regular file under `root` whose name ends in
/// `.scss` (literal, case-sensitive suffix). Any traversal failure aborts
/// the whole scan; partial results are discarded.
pub fn find_scss_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root).follow_links(true) {
        let entry = entry.map_err(|e| {
            let failing = e
                .path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| root.display().to_string());
            anyhow::anyhow!("Failed to traverse {}: {}", failing, e)
        })?;
        if entry.file_type().is_file()
            && entry.file_name().to_string_lossy().ends_with(".scss")
        {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}
