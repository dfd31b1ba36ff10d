/*!
 * Command-line interface for nbscript
 */

use std::io;
use std::sync::Arc;
use std::time::Instant;

use clap::{CommandFactory, Parser};
use indicatif::{ProgressBar, ProgressStyle};

use nbscript::config::{Args, Config};
use nbscript::error::Result;
use nbscript::report::{Reporter, ScanReport};
use nbscript::scanner::Scanner;
use nbscript::utils::count_notebooks;
use nbscript::writer::ScriptWriter;

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Generate shell completions if requested
    if let Some(shell) = args.generate {
        let mut cmd = Args::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
        return Ok(());
    }

    // Create configuration
    let config = Config::from_args(args);

    // Validate configuration
    config.validate()?;

    // Create progress bar
    let progress = ProgressBar::new(0);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} {wide_msg:.dim.white} {pos}/{len} ({percent}%) ⏱️  Elapsed: {elapsed_precise}")
            .unwrap(),
    );
    progress.enable_steady_tick(std::time::Duration::from_millis(100));
    progress.set_prefix("📓 Setup");

    progress.set_message(format!(
        "📂 Scanning directory: {}",
        config.target_dir.display()
    ));

    // Add gitignore status message
    if config.respect_gitignore {
        progress.set_message(match &config.gitignore_path {
            Some(path) => format!("🔍 Using custom gitignore file: {}", path.display()),
            None => "🔍 Respecting .gitignore files in the project".to_string(),
        });
    }

    // Count candidate notebooks for progress tracking
    let total_notebooks = match count_notebooks(&config.target_dir, &config) {
        Ok(count) => {
            progress.set_message(format!("🔎 Found {} notebooks to collect", count));
            count
        }
        Err(e) => {
            progress.set_message(format!("⚠️ Warning: Failed to count notebooks: {}", e));
            0
        }
    };

    progress.set_length(total_notebooks);
    progress.set_prefix("📓 Collecting");
    progress.set_message("Starting scan...");

    // Create scanner and writer
    let mut scanner = Scanner::new(config.clone(), Arc::new(progress.clone()));
    let writer = ScriptWriter::new(config.clone());

    // Start timing both scan and write operations
    let start_time = Instant::now();

    // Scan directory tree
    let notebooks = scanner.scan()?;

    // Write the runner script
    writer.write(&notebooks)?;

    // Calculate total duration (scan + write)
    let total_duration = start_time.elapsed();

    // Clear the progress bar
    progress.finish_and_clear();

    // Get scanner statistics
    let stats = scanner.get_statistics();

    // Prepare the run report
    let report = ScanReport {
        output_file: config.output_file.display().to_string(),
        command: ScriptWriter::command_line(&notebooks),
        duration: total_duration,
        dirs_scanned: stats.dirs_scanned,
        files_seen: stats.files_seen,
        files_excluded: stats.files_excluded,
        hidden_dirs_skipped: stats.hidden_dirs_skipped,
        total_bytes: stats.total_bytes,
        notebooks,
    };

    // Create a reporter and print the report
    let reporter = Reporter::new(config.report_format);
    reporter.print_report(&report)?;

    Ok(())
}
