/*!
 * Directory scanning and notebook collection
 */

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use glob_match::glob_match;
use ignore::WalkBuilder;
use indicatif::ProgressBar;
use walkdir::WalkDir;

use crate::config::Config;
use crate::error::{Result, ResultExt};
use crate::types::{is_candidate, Notebook};
use crate::utils::{is_hidden_name, normalize_separators};

/// Scanner statistics
#[derive(Debug, Clone, Default)]
pub struct ScanStatistics {
    /// Number of directories listed
    pub dirs_scanned: usize,
    /// Number of non-directory entries seen
    pub files_seen: usize,
    /// Number of notebooks collected
    pub notebooks_found: usize,
    /// Number of candidate notebooks dropped by exclusion patterns
    pub files_excluded: usize,
    /// Number of hidden directories pruned from the walk
    pub hidden_dirs_skipped: usize,
    /// Total size of collected notebooks in bytes
    pub total_bytes: u64,
}

/// Scanner for notebook files
pub struct Scanner {
    /// Scanner configuration
    config: Config,
    /// Progress bar
    pub progress: Arc<ProgressBar>,
    /// Scanner statistics
    statistics: ScanStatistics,
}

impl Scanner {
    /// Create a new scanner
    pub fn new(config: Config, progress: Arc<ProgressBar>) -> Self {
        Self {
            config,
            progress,
            statistics: ScanStatistics::default(),
        }
    }

    /// Get scanner statistics
    pub fn get_statistics(&self) -> ScanStatistics {
        self.statistics.clone()
    }

    /// Scan the target directory and return the collected notebooks,
    /// sorted lexicographically by relative path
    ///
    /// The walk is iterative: a worklist of pending directories replaces
    /// recursion, so tree depth never grows the call stack. An unreadable
    /// directory aborts the scan; there is no skip-and-continue.
    pub fn scan(&mut self) -> Result<Vec<Notebook>> {
        let root = fs::canonicalize(&self.config.target_dir)
            .with_context(|| format!("resolving scan root {}", self.config.target_dir.display()))?;

        let mut notebooks = Vec::new();
        let mut pending: Vec<(PathBuf, PathBuf)> = vec![(root, PathBuf::new())];

        while let Some((abs_dir, rel_dir)) = pending.pop() {
            self.scan_directory(&abs_dir, &rel_dir, &mut pending, &mut notebooks)?;
        }

        notebooks.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(notebooks)
    }

    /// List a single directory level and classify its entries
    fn scan_directory(
        &mut self,
        abs_dir: &Path,
        rel_dir: &Path,
        pending: &mut Vec<(PathBuf, PathBuf)>,
        notebooks: &mut Vec<Notebook>,
    ) -> Result<()> {
        self.statistics.dirs_scanned += 1;

        if self.config.respect_gitignore {
            // Use ignore crate's Walk to handle .gitignore patterns
            let mut walker = WalkBuilder::new(abs_dir);
            walker.max_depth(Some(1));
            // Hidden-entry handling stays in process_entry: only hidden
            // directories prune the walk, hidden notebooks are collected.
            walker.hidden(false);

            // Use custom gitignore file if specified
            if let Some(gitignore_path) = &self.config.gitignore_path {
                walker.add_custom_ignore_filename(gitignore_path);
            }

            for entry in walker.build() {
                let entry = entry?;
                if entry.depth() == 0 {
                    continue;
                }
                self.process_entry(entry.path(), rel_dir, pending, notebooks)?;
            }
        } else {
            // Traditional walkdir listing when not respecting .gitignore
            for entry in WalkDir::new(abs_dir).min_depth(1).max_depth(1) {
                let entry = entry?;
                self.process_entry(entry.path(), rel_dir, pending, notebooks)?;
            }
        }

        Ok(())
    }

    /// Classify one entry: queue directories, collect notebook files
    fn process_entry(
        &mut self,
        abs_path: &Path,
        rel_dir: &Path,
        pending: &mut Vec<(PathBuf, PathBuf)>,
        notebooks: &mut Vec<Notebook>,
    ) -> Result<()> {
        let file_name = abs_path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        // Directory test resolves symlinks, so linked trees are walked too.
        if abs_path.is_dir() {
            if is_hidden_name(abs_path.file_name().unwrap_or_default()) {
                self.statistics.hidden_dirs_skipped += 1;
            } else {
                pending.push((abs_path.to_path_buf(), rel_dir.join(&file_name)));
            }
            return Ok(());
        }

        self.statistics.files_seen += 1;

        if !is_candidate(&file_name) {
            return Ok(());
        }

        if self.is_excluded(abs_path) {
            self.statistics.files_excluded += 1;
            return Ok(());
        }

        self.progress.inc(1);
        self.progress
            .set_message(format!("Current notebook: {}", file_name));

        let metadata = fs::metadata(abs_path).or_else(|_| fs::symlink_metadata(abs_path))?;
        let path = normalize_separators(&rel_dir.join(&file_name).to_string_lossy());

        self.statistics.notebooks_found += 1;
        self.statistics.total_bytes += metadata.len();

        notebooks.push(Notebook {
            name: file_name,
            path,
            size: metadata.len(),
            modified: metadata.modified()?,
        });

        Ok(())
    }

    /// Check if a file is dropped by the exclusion patterns
    ///
    /// Patterns are matched against the base filename only, so a bare
    /// entry like `task5-solutions.ipynb` excludes that name anywhere in
    /// the tree. Glob syntax is supported; a literal name matches exactly.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let file_name = path.file_name().unwrap_or_default().to_string_lossy();

        for pattern in &self.config.exclude_patterns {
            if glob_match(pattern, &file_name) {
                return true;
            }
        }

        // Don't list the output script itself
        if path.ends_with(&self.config.output_file) {
            return true;
        }

        false
    }
}
