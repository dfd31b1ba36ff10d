/*!
 * Script writer for nbscript
 */

use std::fs::File;
use std::io::{self, BufWriter, Write};

use crate::config::Config;
use crate::error::{Result, ResultExt};
use crate::types::Notebook;

/// Command line invoking the notebook test runner, copied into the script
/// ahead of the collected paths. The trailing space is part of the format:
/// every emitted path is likewise followed by a single space.
pub const COMMAND_PREFIX: &str = "pytest --nbmake ";

/// Writer for the generated runner script
pub struct ScriptWriter {
    /// Writer configuration
    config: Config,
}

impl ScriptWriter {
    /// Create a new script writer
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Write the runner script to the configured output path
    ///
    /// The header file is copied byte-for-byte, then the runner command is
    /// appended with every collected path. Existing output content is
    /// overwritten, never appended to, and the output handle is flushed
    /// and released on every exit path.
    pub fn write(&self, notebooks: &[Notebook]) -> Result<()> {
        let mut header = File::open(&self.config.header_file)
            .with_context(|| format!("opening header {}", self.config.header_file.display()))?;

        let file = File::create(&self.config.output_file)?;
        let mut writer = BufWriter::new(file);

        io::copy(&mut header, &mut writer)?;
        writer.write_all(COMMAND_PREFIX.as_bytes())?;

        for notebook in notebooks {
            writer.write_all(notebook.path.as_bytes())?;
            writer.write_all(b" ")?;
        }

        writer.flush()?;
        Ok(())
    }

    /// Render the runner invocation as a single display line
    pub fn command_line(notebooks: &[Notebook]) -> String {
        let paths: Vec<&str> = notebooks.iter().map(|n| n.path.as_str()).collect();
        format!("{}{}", COMMAND_PREFIX, paths.join(" "))
            .trim_end()
            .to_string()
    }
}
