/*!
 * Core types and filename classification rules for nbscript
 */

use std::time::SystemTime;

/// Extension identifying notebook files
pub const NOTEBOOK_EXT: &str = ".ipynb";

/// Package-marker filename that is never collected, whatever it looks like
pub const PACKAGE_SENTINEL: &str = "__init__.py";

/// Check whether a base filename is a collectable notebook
///
/// The sentinel check mirrors the generated-suite contract: a file named
/// exactly `__init__.py` is never a notebook, even in the contradictory
/// case where such a name also carried the notebook extension.
pub fn is_candidate(name: &str) -> bool {
    name.ends_with(NOTEBOOK_EXT) && name != PACKAGE_SENTINEL
}

/// A notebook discovered during the scan
#[derive(Debug, Clone)]
pub struct Notebook {
    /// Base filename
    pub name: String,
    /// Path relative to the scan root, forward-slash separated
    pub path: String,
    /// Size in bytes
    pub size: u64,
    /// Last modification time
    pub modified: SystemTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_classification() {
        assert!(is_candidate("analysis.ipynb"));
        assert!(is_candidate(".hidden.ipynb"));
        assert!(!is_candidate("analysis.py"));
        assert!(!is_candidate("notes.txt"));
        assert!(!is_candidate("ipynb"));
    }

    #[test]
    fn test_sentinel_never_a_candidate() {
        assert!(!is_candidate(PACKAGE_SENTINEL));
    }
}
