/*!
 * Integration tests for end-to-end script generation
 */

use std::fs::{self, File};
use std::io::Write;
use std::process::Command;
use std::sync::Arc;

use indicatif::ProgressBar;
use tempfile::tempdir;

use nbscript::{Config, ReportFormat, Reporter, ScanReport, Scanner, ScriptWriter};

const HEADER: &str = "#!/bin/bash\nset -euo pipefail\n";

// Build a tree with notebooks at several depths plus distractors
fn setup_fixture() -> tempfile::TempDir {
    let temp_dir = tempdir().unwrap();
    let tree = temp_dir.path().join("notebooks");

    fs::create_dir(&tree).unwrap();
    fs::create_dir(tree.join("lessons")).unwrap();
    fs::create_dir(tree.join("lessons").join("week2")).unwrap();
    fs::create_dir(tree.join(".ipynb_checkpoints")).unwrap();

    fs::write(tree.join("intro.ipynb"), "{}").unwrap();
    fs::write(tree.join("lessons").join("setup.ipynb"), "{}").unwrap();
    fs::write(
        tree.join("lessons").join("week2").join("graphs.ipynb"),
        "{}",
    )
    .unwrap();
    fs::write(
        tree.join("lessons").join("task5-solutions.ipynb"),
        "{}",
    )
    .unwrap();
    fs::write(tree.join(".ipynb_checkpoints").join("intro.ipynb"), "{}").unwrap();
    fs::write(tree.join("README.md"), "docs\n").unwrap();

    let mut header = File::create(temp_dir.path().join("header.bash")).unwrap();
    header.write_all(HEADER.as_bytes()).unwrap();

    temp_dir
}

#[test]
fn test_generate_script_end_to_end() {
    let temp_dir = setup_fixture();
    let config = Config {
        target_dir: temp_dir.path().join("notebooks"),
        output_file: temp_dir.path().join("pytest.bash"),
        header_file: temp_dir.path().join("header.bash"),
        exclude_patterns: vec!["task*-solutions.ipynb".to_string()],
        respect_gitignore: false,
        gitignore_path: None,
        report_format: ReportFormat::ConsoleTable,
    };
    config.validate().unwrap();

    let mut scanner = Scanner::new(config.clone(), Arc::new(ProgressBar::hidden()));
    let notebooks = scanner.scan().unwrap();
    ScriptWriter::new(config.clone()).write(&notebooks).unwrap();

    let content = fs::read_to_string(&config.output_file).unwrap();
    assert_eq!(
        content,
        "#!/bin/bash\nset -euo pipefail\n\
         pytest --nbmake intro.ipynb lessons/setup.ipynb lessons/week2/graphs.ipynb "
    );

    // The report renders from the same run without touching the tree again
    let stats = scanner.get_statistics();
    let report = ScanReport {
        output_file: config.output_file.display().to_string(),
        command: ScriptWriter::command_line(&notebooks),
        duration: std::time::Duration::from_millis(3),
        dirs_scanned: stats.dirs_scanned,
        files_seen: stats.files_seen,
        files_excluded: stats.files_excluded,
        hidden_dirs_skipped: stats.hidden_dirs_skipped,
        total_bytes: stats.total_bytes,
        notebooks,
    };
    let rendered = Reporter::new(ReportFormat::ConsoleTable)
        .generate_report(&report)
        .unwrap();
    assert!(rendered.contains("pytest.bash"));
    assert!(rendered.contains("graphs.ipynb"));
}

#[test]
fn test_cli_generates_script() {
    let temp_dir = setup_fixture();
    let tree = temp_dir.path().join("notebooks");
    let output_file = temp_dir.path().join("pytest.bash");
    let header_file = temp_dir.path().join("header.bash");

    let status = Command::new(env!("CARGO_BIN_EXE_nbscript"))
        .args([
            &tree.to_string_lossy() as &str,
            &output_file.to_string_lossy(),
            "--header",
            &header_file.to_string_lossy(),
            "--exclude",
            "task5-solutions.ipynb",
        ])
        .status()
        .unwrap();
    assert!(status.success());

    let content = fs::read_to_string(&output_file).unwrap();
    assert_eq!(
        content,
        "#!/bin/bash\nset -euo pipefail\n\
         pytest --nbmake intro.ipynb lessons/setup.ipynb lessons/week2/graphs.ipynb "
    );
}

#[test]
fn test_cli_rerun_produces_identical_bytes() {
    let temp_dir = setup_fixture();
    let tree = temp_dir.path().join("notebooks");
    let output_file = temp_dir.path().join("pytest.bash");
    let header_file = temp_dir.path().join("header.bash");

    let run = || {
        let status = Command::new(env!("CARGO_BIN_EXE_nbscript"))
            .args([
                &tree.to_string_lossy() as &str,
                &output_file.to_string_lossy(),
                "--header",
                &header_file.to_string_lossy(),
            ])
            .status()
            .unwrap();
        assert!(status.success());
        fs::read(&output_file).unwrap()
    };

    let first = run();
    let second = run();
    assert_eq!(first, second);
}

#[test]
fn test_cli_missing_header_fails() {
    let temp_dir = setup_fixture();
    let tree = temp_dir.path().join("notebooks");
    let output_file = temp_dir.path().join("pytest.bash");

    let output = Command::new(env!("CARGO_BIN_EXE_nbscript"))
        .args([
            &tree.to_string_lossy() as &str,
            &output_file.to_string_lossy(),
            "--header",
            &temp_dir.path().join("nope.bash").to_string_lossy(),
        ])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(!output_file.exists());
}
