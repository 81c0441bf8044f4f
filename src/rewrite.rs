use std::fs;
use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;
use log::{debug, warn};
use regex::{Captures, Regex};

/// Fixed subdirectory of the source root that aliased imports resolve into.
const STYLES_SUBDIR: &str = "assets/styles";

/// Result of one rewrite pass over one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewriteOutcome {
    /// Whether the file content changed (and was written back).
    pub changed: bool,
    /// Number of import statements rewritten.
    pub rewritten: usize,
}

/// Rewrites `@import` statements whose path starts with an alias token into
/// paths relative to the importing file's directory.
pub struct AliasRewriter {
    pattern: Regex,
    source_root: PathBuf,
}

impl AliasRewriter {
    pub fn new(alias: &str, source_root: &Path) -> Result<Self> {
        let alias = regex::escape(alias);
        // One arm per quote style so the closing quote matches the opener;
        // the captured suffix excludes both quote kinds either way. The
        // alias is escaped, so it matches literally even when it contains
        // regex metacharacters.
        let pattern = Regex::new(&format!(
            r#"@import (?:'{alias}([^'"]+)'|"{alias}([^'"]+)");"#
        ))
        .context("Failed to compile alias import pattern")?;
        Ok(Self {
            pattern,
            source_root: source_root.to_path_buf(),
        })
    }

    /// Pure text transform: returns the (possibly) rewritten content plus
    /// the number of import statements rewritten. `file_dir` is the
    /// directory containing the file the content came from.
    pub fn rewrite_content(&self, content: &str, file_dir: &Path) -> (String, usize) {
        let mut rewritten = 0;
        let result = self.pattern.replace_all(content, |caps: &Captures| {
            let matched = caps.get(0).map(|m| m.as_str()).unwrap_or_default();
            let suffix = caps
                .get(1)
                .or_else(|| caps.get(2))
                .map(|g| g.as_str())
                .unwrap_or_default();

            let target = join_clean(&self.source_root, suffix);
            match pathdiff::diff_paths(&target, file_dir) {
                Some(rel) => {
                    rewritten += 1;
                    // A candidate equal to the importing directory diffs to
                    // an empty path; the import must say "." instead.
                    let rel = if rel.as_os_str().is_empty() {
                        PathBuf::from(".")
                    } else {
                        rel
                    };
                    let replacement = format!("@import '{}';", rel.display());
                    debug!("Rewrote {} -> {}", matched, replacement);
                    replacement
                }
                None => {
                    eprintln!(
                        "{} cannot express {} relative to {}",
                        "Error:".red(),
                        target.display(),
                        file_dir.display()
                    );
                    warn!("Import left unmodified: {}", matched);
                    matched.to_string()
                }
            }
        });
        (result.into_owned(), rewritten)
    }

    /// Reads one file, rewrites its aliased imports, and overwrites it in
    /// place when the content changed. Never creates, deletes, or renames
    /// files.
    pub fn rewrite_file(&self, file_path: &Path) -> Result<RewriteOutcome> {
        let content = fs::read_to_string(file_path)
            .with_context(|| format!("Failed to read {}", file_path.display()))?;
        let file_dir = file_path.parent().unwrap_or_else(|| Path::new(""));

        let (new_content, rewritten) = self.rewrite_content(&content, file_dir);
        if new_content != content {
            fs::write(file_path, &new_content)
                .with_context(|| format!("Failed to write {}", file_path.display()))?;
            println!("Updated imports in: {}", file_path.display());
            return Ok(RewriteOutcome {
                changed: true,
                rewritten,
            });
        }
        Ok(RewriteOutcome {
            changed: false,
            rewritten,
        })
    }
}

/// Joins the import suffix onto `<root>/assets/styles` lexically: a leading
/// separator on the suffix extends the path instead of restarting it, and
/// `.`/`..` segments are folded.
fn join_clean(source_root: &Path, suffix: &str) -> PathBuf {
    let mut joined = source_root.join(STYLES_SUBDIR);
    for component in Path::new(suffix).components() {
        match component {
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
            Component::ParentDir => {
                joined.pop();
            }
            Component::Normal(segment) => joined.push(segment),
        }
    }
    joined
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rewriter(alias: &str) -> AliasRewriter {
        AliasRewriter::new(alias, Path::new("src")).unwrap()
    }

    #[test]
    fn test_single_import_in_subdirectory() {
        let (out, n) = rewriter("@styles")
            .rewrite_content("@import \"@styles/colors\";\n", Path::new("src/components"));
        assert_eq!(out, "@import '../assets/styles/colors';\n");
        assert_eq!(n, 1);
    }

    #[test]
    fn test_double_quotes_normalized_to_single() {
        let (out, _) = rewriter("@styles")
            .rewrite_content("@import \"@styles/mixins\";", Path::new("src"));
        assert!(out.starts_with("@import '"));
        assert!(out.ends_with("';"));
    }

    #[test]
    fn test_file_at_source_root() {
        let (out, n) =
            rewriter("@styles").rewrite_content("@import '@styles/colors';", Path::new("src"));
        assert_eq!(out, "@import 'assets/styles/colors';");
        assert_eq!(n, 1);
    }

    #[test]
    fn test_two_imports_on_one_line() {
        let (out, n) = rewriter("@styles").rewrite_content(
            "@import '@styles/a'; @import '@styles/b';",
            Path::new("src/components"),
        );
        assert_eq!(
            out,
            "@import '../assets/styles/a'; @import '../assets/styles/b';"
        );
        assert_eq!(n, 2);
    }

    #[test]
    fn test_imports_across_lines() {
        let content = "@import '@styles/a';\nbody { color: red; }\n@import '@styles/deep/b';\n";
        let (out, n) =
            rewriter("@styles").rewrite_content(content, Path::new("src/pages/admin"));
        assert_eq!(
            out,
            "@import '../../assets/styles/a';\nbody { color: red; }\n@import '../../assets/styles/deep/b';\n"
        );
        assert_eq!(n, 2);
    }

    #[test]
    fn test_no_alias_no_change() {
        let content = "@import './local';\nbody { margin: 0; }\n";
        let (out, n) = rewriter("@styles").rewrite_content(content, Path::new("src/components"));
        assert_eq!(out, content);
        assert_eq!(n, 0);
    }

    #[test]
    fn test_alias_matches_as_strict_prefix() {
        // Legacy behavior: no path-segment boundary check, so @styles also
        // matches @stylesheets/x via the suffix "heets/x".
        let (out, n) = rewriter("@styles")
            .rewrite_content("@import '@stylesheets/x';", Path::new("src/components"));
        assert_eq!(out, "@import '../assets/styles/heets/x';");
        assert_eq!(n, 1);
    }

    #[test]
    fn test_alias_metacharacters_are_literal() {
        let rw = rewriter("lib+styles");
        let (out, n) =
            rw.rewrite_content("@import 'lib+styles/colors';", Path::new("src/components"));
        assert_eq!(out, "@import '../assets/styles/colors';");
        assert_eq!(n, 1);

        // The `+` must not act as a quantifier.
        let (out, n) = rw.rewrite_content("@import 'libbstyles/colors';", Path::new("src"));
        assert_eq!(out, "@import 'libbstyles/colors';");
        assert_eq!(n, 0);
    }

    #[test]
    fn test_mismatched_quotes_left_alone() {
        let content = "@import '@styles/colors\";";
        let (out, n) = rewriter("@styles").rewrite_content(content, Path::new("src"));
        assert_eq!(out, content);
        assert_eq!(n, 0);
    }

    #[test]
    fn test_idempotent_after_rewrite() {
        let rw = rewriter("@styles");
        let (once, n) =
            rw.rewrite_content("@import \"@styles/colors\";", Path::new("src/components"));
        assert_eq!(n, 1);
        let (twice, n) = rw.rewrite_content(&once, Path::new("src/components"));
        assert_eq!(twice, once);
        assert_eq!(n, 0);
    }

    #[test]
    fn test_leading_separator_in_suffix_extends_path() {
        let rw = AliasRewriter::new("@styles", Path::new("src")).unwrap();
        let (out, _) =
            rw.rewrite_content("@import '@styles//colors';", Path::new("src/components"));
        assert_eq!(out, "@import '../assets/styles/colors';");
    }

    #[test]
    fn test_parent_segments_in_suffix_are_folded() {
        let (out, _) = rewriter("@styles")
            .rewrite_content("@import '@styles/../fonts/a';", Path::new("src/components"));
        assert_eq!(out, "@import '../assets/fonts/a';");
    }

    #[test]
    fn test_candidate_equal_to_importing_dir_yields_dot() {
        // From inside assets/styles itself, a suffix that folds away
        // entirely points at the importing directory.
        let (out, n) = rewriter("@styles")
            .rewrite_content("@import '@styles/.';", Path::new("src/assets/styles"));
        assert_eq!(out, "@import '.';");
        assert_eq!(n, 1);
    }

    #[test]
    fn test_incompatible_roots_keep_original_match() {
        let rw = AliasRewriter::new("@styles", Path::new("src")).unwrap();
        // Relative candidate against an absolute importing directory has no
        // lexical relative form.
        let content = "@import '@styles/colors';";
        let (out, n) = rw.rewrite_content(content, Path::new("/abs/components"));
        assert_eq!(out, content);
        assert_eq!(n, 0);
    }
}
