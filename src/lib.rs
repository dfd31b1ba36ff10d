/*!
 * nbscript - Generate pytest --nbmake runner scripts from notebook trees
 *
 * This library scans a directory tree for notebook files and assembles a
 * shell script that hands every collected path to the notebook test
 * runner, prefixed by a verbatim copy of a header file.
 */

pub mod config;
pub mod error;
pub mod report;
pub mod scanner;
pub mod types;
pub mod utils;
pub mod writer;


// Re-export main components for easier access
pub use config::{Args, Config};
pub use error::{NbScriptError, Result};
pub use report::{ReportFormat, Reporter, ScanReport};
pub use scanner::{ScanStatistics, Scanner};
pub use types::{is_candidate, Notebook, NOTEBOOK_EXT, PACKAGE_SENTINEL};
pub use utils::{count_notebooks, format_file_size, normalize_separators};
pub use writer::{ScriptWriter, COMMAND_PREFIX};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
