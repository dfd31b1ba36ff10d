/*!
 * Configuration handling for nbscript
 */

use std::path::PathBuf;

use clap::Parser;
use clap_complete::Shell;

use crate::error::Result;
use crate::report::ReportFormat;
use crate::{bail, ensure};

/// Command-line arguments for nbscript
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "nbscript",
    version = env!("CARGO_PKG_VERSION"),
    about = "Generate pytest --nbmake runner scripts from notebook directory trees",
    long_about = "Scans a directory tree for notebook files and writes a shell script that \
                  invokes pytest --nbmake over every collected path, prefixed by a verbatim \
                  copy of a header file."
)]
pub struct Args {
    /// Directory tree to scan for notebooks
    #[clap(default_value = ".")]
    pub directory_path: String,

    /// Generated script file name
    #[clap(default_value = "pytest.bash")]
    pub output_file: String,

    /// Header file copied verbatim to the top of the generated script
    #[clap(long = "header", default_value = "header.bash")]
    pub header_file: String,

    /// Comma-separated list of notebook filename patterns to exclude
    #[clap(long = "exclude", value_delimiter = ',')]
    pub exclude_patterns: Vec<String>,

    /// Respect .gitignore files while scanning
    #[clap(long)]
    pub respect_gitignore: bool,

    /// Path to custom .gitignore file
    #[clap(long)]
    pub gitignore_path: Option<String>,

    /// Report format printed after generation
    #[clap(long, value_enum, default_value_t = ReportFormat::default())]
    pub report: ReportFormat,

    /// Generate shell completions
    #[clap(long = "generate", value_enum)]
    pub generate: Option<Shell>,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Target directory to scan
    pub target_dir: PathBuf,

    /// Generated script path
    pub output_file: PathBuf,

    /// Header file prepended to the generated script
    pub header_file: PathBuf,

    /// Notebook filename patterns to exclude, matched against base names
    pub exclude_patterns: Vec<String>,

    /// Whether to respect .gitignore files
    pub respect_gitignore: bool,

    /// Path to custom .gitignore file
    pub gitignore_path: Option<PathBuf>,

    /// Report format printed after generation
    pub report_format: ReportFormat,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Self {
        Self {
            target_dir: PathBuf::from(args.directory_path),
            output_file: PathBuf::from(args.output_file),
            header_file: PathBuf::from(args.header_file),
            exclude_patterns: args.exclude_patterns,
            respect_gitignore: args.respect_gitignore,
            gitignore_path: args.gitignore_path.map(PathBuf::from),
            report_format: args.report,
        }
    }

    /// Validate the configuration
    ///
    /// Every failure here is fatal before any scanning starts: a missing
    /// header or target is never papered over with a fallback.
    pub fn validate(&self) -> Result<()> {
        if !self.target_dir.exists() {
            bail!(
                PathNotFound,
                "Target directory not found: {}",
                self.target_dir.display()
            );
        }
        if !self.target_dir.is_dir() {
            bail!(
                Config,
                "Target is not a directory: {}",
                self.target_dir.display()
            );
        }

        if !self.header_file.is_file() {
            bail!(
                PathNotFound,
                "Header file not found: {}",
                self.header_file.display()
            );
        }

        // Writing the script must never truncate its own header.
        ensure!(
            self.header_file != self.output_file,
            Config,
            "Header and output refer to the same file: {}",
            self.output_file.display()
        );

        // Check if output file directory exists and is writable
        if let Some(parent) = self.output_file.parent() {
            if !parent.exists() && parent != PathBuf::from("") {
                bail!(
                    PathNotFound,
                    "Output directory not found: {}",
                    parent.display()
                );
            }
        }

        // Check if custom gitignore file exists
        if let Some(path) = &self.gitignore_path {
            ensure!(
                path.exists(),
                PathNotFound,
                "Custom .gitignore file not found: {}",
                path.display()
            );
        }

        Ok(())
    }
}
