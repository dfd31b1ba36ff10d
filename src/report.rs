/*!
 * Reporting functionality for nbscript
 *
 * Provides formatted reports of a generation run, either as console
 * tables rendered with the tabled library or as JSON for machine
 * consumption.
 */

use std::time::Duration;

use clap::ValueEnum;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

use crate::error::Result;
use crate::types::Notebook;
use crate::utils::format_file_size;

/// Statistics for a generation run
#[derive(Debug, Clone)]
pub struct ScanReport {
    /// Generated script path
    pub output_file: String,
    /// Runner invocation written into the script
    pub command: String,
    /// Time taken to scan and write
    pub duration: Duration,
    /// Number of directories listed
    pub dirs_scanned: usize,
    /// Number of non-directory entries seen
    pub files_seen: usize,
    /// Number of candidate notebooks dropped by exclusion patterns
    pub files_excluded: usize,
    /// Number of hidden directories pruned from the walk
    pub hidden_dirs_skipped: usize,
    /// Total size of collected notebooks in bytes
    pub total_bytes: u64,
    /// The collected notebooks, in script order
    pub notebooks: Vec<Notebook>,
}

/// Format of the report output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Console table output
    #[value(name = "table")]
    ConsoleTable,
    /// JSON output
    #[value(name = "json")]
    Json,
}

impl Default for ReportFormat {
    fn default() -> Self {
        Self::ConsoleTable
    }
}

/// Report generator for generation runs
pub struct Reporter {
    format: ReportFormat,
}

impl Reporter {
    /// Create a new reporter
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    /// Format a number with human-readable units
    fn format_number(&self, num: usize) -> String {
        if num >= 1_000_000 {
            format!("{:.1}M", num as f64 / 1_000_000.0)
        } else if num >= 1_000 {
            format!("{:.1}K", num as f64 / 1_000.0)
        } else {
            num.to_string()
        }
    }

    /// Generate a report string based on run statistics
    pub fn generate_report(&self, report: &ScanReport) -> Result<String> {
        match self.format {
            ReportFormat::ConsoleTable => Ok(self.generate_console_report(report)),
            ReportFormat::Json => self.generate_json_report(report),
        }
    }

    /// Print the report to stdout
    pub fn print_report(&self, report: &ScanReport) -> Result<()> {
        println!("\n{}", self.generate_report(report)?);
        Ok(())
    }

    // Truncate long paths from the left, keeping the end meaningful
    fn format_path(&self, path: &str, max_len: usize) -> String {
        let count = path.chars().count();
        if count <= max_len {
            return path.to_string();
        }
        let tail: String = path.chars().skip(count - (max_len - 3)).collect();
        format!("...{}", tail)
    }

    // Create a summary table using the tabled crate
    fn create_summary_table(&self, report: &ScanReport) -> String {
        #[derive(Tabled)]
        struct SummaryRow {
            #[tabled(rename = "Metric")]
            key: String,

            #[tabled(rename = "Value")]
            value: String,
        }

        let mut rows = Vec::new();

        rows.push(SummaryRow {
            key: "📂 Output File".to_string(),
            value: report.output_file.clone(),
        });

        rows.push(SummaryRow {
            key: "🚀 Runner Command".to_string(),
            value: self.format_path(&report.command, 60),
        });

        rows.push(SummaryRow {
            key: "⏱️ Process Time".to_string(),
            value: format!("{:.4?}", report.duration),
        });

        rows.push(SummaryRow {
            key: "📓 Notebooks Collected".to_string(),
            value: self.format_number(report.notebooks.len()),
        });

        rows.push(SummaryRow {
            key: "🚫 Excluded".to_string(),
            value: self.format_number(report.files_excluded),
        });

        rows.push(SummaryRow {
            key: "📁 Directories Scanned".to_string(),
            value: self.format_number(report.dirs_scanned),
        });

        rows.push(SummaryRow {
            key: "📄 Files Seen".to_string(),
            value: self.format_number(report.files_seen),
        });

        rows.push(SummaryRow {
            key: "🙈 Hidden Dirs Skipped".to_string(),
            value: self.format_number(report.hidden_dirs_skipped),
        });

        rows.push(SummaryRow {
            key: "💾 Total Size".to_string(),
            value: format_file_size(report.total_bytes),
        });

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }

    // Create a notebooks table using the tabled crate
    fn create_notebooks_table(&self, report: &ScanReport) -> String {
        #[derive(Tabled)]
        struct NotebookRow {
            #[tabled(rename = "Notebook")]
            path: String,

            #[tabled(rename = "Size")]
            size: String,

            #[tabled(rename = "Modified")]
            modified: String,
        }

        // Sort notebooks by size for display
        let mut notebooks: Vec<&Notebook> = report.notebooks.iter().collect();
        notebooks.sort_by(|a, b| b.size.cmp(&a.size));

        // Determine if we show all notebooks or just the top 10
        let to_show = if report.notebooks.len() > 15 {
            &notebooks[0..10]
        } else {
            &notebooks[..]
        };

        let rows: Vec<NotebookRow> = to_show
            .iter()
            .map(|notebook| NotebookRow {
                path: self.format_path(&notebook.path, 60),
                size: format_file_size(notebook.size),
                modified: chrono::DateTime::<chrono::Local>::from(notebook.modified).to_rfc3339(),
            })
            .collect();

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }

    // Generate a console table report
    fn generate_console_report(&self, report: &ScanReport) -> String {
        let summary_table = self.create_summary_table(report);
        let notebooks_table = self.create_notebooks_table(report);

        let summary_title = "✅  SCRIPT GENERATED";
        let notebooks_title = if report.notebooks.len() > 15 {
            "📋  TOP 10 LARGEST NOTEBOOKS  📋"
        } else {
            "📋  COLLECTED NOTEBOOKS"
        };

        format!(
            "{}\n{}\n\n{}\n{}",
            notebooks_title, notebooks_table, summary_title, summary_table
        )
    }

    // Generate a JSON report
    fn generate_json_report(&self, report: &ScanReport) -> Result<String> {
        #[derive(Serialize)]
        struct JsonNotebook<'a> {
            name: &'a str,
            path: &'a str,
            size: u64,
            modified: String,
        }

        #[derive(Serialize)]
        struct JsonReport<'a> {
            output_file: &'a str,
            command: &'a str,
            duration_secs: f64,
            directories_scanned: usize,
            files_seen: usize,
            notebooks_collected: usize,
            files_excluded: usize,
            hidden_dirs_skipped: usize,
            total_bytes: u64,
            notebooks: Vec<JsonNotebook<'a>>,
        }

        let view = JsonReport {
            output_file: &report.output_file,
            command: &report.command,
            duration_secs: report.duration.as_secs_f64(),
            directories_scanned: report.dirs_scanned,
            files_seen: report.files_seen,
            notebooks_collected: report.notebooks.len(),
            files_excluded: report.files_excluded,
            hidden_dirs_skipped: report.hidden_dirs_skipped,
            total_bytes: report.total_bytes,
            notebooks: report
                .notebooks
                .iter()
                .map(|notebook| JsonNotebook {
                    name: &notebook.name,
                    path: &notebook.path,
                    size: notebook.size,
                    modified: chrono::DateTime::<chrono::Local>::from(notebook.modified)
                        .to_rfc3339(),
                })
                .collect(),
        };

        Ok(serde_json::to_string_pretty(&view)?)
    }
}
