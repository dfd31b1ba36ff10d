/*!
 * Utility functions for nbscript
 */

use std::ffi::OsStr;
use std::path::Path;
use std::sync::Arc;

use ignore::WalkBuilder;
use indicatif::ProgressBar;
use walkdir::WalkDir;

use crate::config::Config;
use crate::error::Result;
use crate::scanner::Scanner;
use crate::types::is_candidate;

/// Count candidate notebooks for progress tracking
///
/// Walks the whole tree once with the same filters the scanner applies,
/// so the progress bar length matches what the scan will consider.
pub fn count_notebooks(dir: &Path, config: &Config) -> Result<u64> {
    let scanner = Scanner::new(config.clone(), Arc::new(ProgressBar::hidden()));
    let mut count = 0;

    if config.respect_gitignore {
        // Use ignore crate's Walk to handle .gitignore patterns
        let mut walker = WalkBuilder::new(dir);
        walker.hidden(false);

        // Custom gitignore file if specified
        if let Some(gitignore_path) = &config.gitignore_path {
            walker.add_custom_ignore_filename(gitignore_path);
        }

        walker.filter_entry(|entry| {
            entry.depth() == 0
                || !(entry.file_type().map_or(false, |ft| ft.is_dir())
                    && is_hidden_name(entry.file_name()))
        });

        for entry in walker.build() {
            let entry = entry?;
            if !entry.path().is_dir()
                && is_candidate(&entry.file_name().to_string_lossy())
                && !scanner.is_excluded(entry.path())
            {
                count += 1;
            }
        }
    } else {
        // Use walkdir without gitignore support
        let walk = WalkDir::new(dir).into_iter();
        for entry in walk.filter_entry(|entry| {
            entry.depth() == 0
                || !(entry.file_type().is_dir() && is_hidden_name(entry.file_name()))
        }) {
            let entry = entry?;
            if !entry.path().is_dir()
                && is_candidate(&entry.file_name().to_string_lossy())
                && !scanner.is_excluded(entry.path())
            {
                count += 1;
            }
        }
    }

    Ok(count)
}

/// Check whether a filename carries the hidden-file marker
pub fn is_hidden_name(name: &OsStr) -> bool {
    name.to_string_lossy().starts_with('.')
}

/// Rewrite backslash separators to forward slashes
///
/// Applied unconditionally on every platform, so generated scripts are
/// byte-identical wherever they were produced.
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}

/// Format a human-readable file size
pub fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{} bytes", size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_separators() {
        assert_eq!(normalize_separators("a\\b\\c.ipynb"), "a/b/c.ipynb");
        assert_eq!(normalize_separators("a/b/c.ipynb"), "a/b/c.ipynb");
        assert_eq!(normalize_separators("plain.ipynb"), "plain.ipynb");
    }

    #[test]
    fn test_is_hidden_name() {
        assert!(is_hidden_name(OsStr::new(".git")));
        assert!(is_hidden_name(OsStr::new(".ipynb_checkpoints")));
        assert!(!is_hidden_name(OsStr::new("notebooks")));
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(512), "512 bytes");
        assert_eq!(format_file_size(2048), "2.00 KB");
        assert_eq!(format_file_size(5 * 1024 * 1024), "5.00 MB");
    }
}
