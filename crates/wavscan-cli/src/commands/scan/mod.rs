//! Scan command implementation
//!
//! Walks a folder for `.wav` files, checks each header for DJ-player
//! compatibility and prints the results as a table, list, JSON or CSV.

mod csv;
mod types;
mod walker;

pub use csv::format_csv;
pub use types::{FileCheckResult, OutputFormat, ScanOutput, ScanSummary, SkippedEntry};
pub use walker::{has_wav_extension, scan, scan_dir, Scan, ScanError, ScanOptions};

use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;
use tracing::info;
use wavscan_header::Outcome;

use super::json_output::{error_codes, warning_codes, JsonError, JsonWarning};

/// Exit code used by `--fail-on-invalid` when incompatible files were found.
pub const EXIT_INVALID_FOUND: u8 = 2;

/// Run the scan command.
///
/// # Arguments
/// * `folder` - Directory to scan recursively
/// * `only_invalid` - Print only files whose result is not `ok`
/// * `format` - Output format
/// * `options` - Walker settings
/// * `fail_on_invalid` - Exit with [`EXIT_INVALID_FOUND`] if any file is not `ok`
///
/// # Returns
/// Exit code: 0 on completion, 1 if the folder cannot be scanned
pub fn run(
    folder: &str,
    only_invalid: bool,
    format: OutputFormat,
    options: &ScanOptions,
    fail_on_invalid: bool,
) -> Result<ExitCode> {
    let scan = match scan_dir(Path::new(folder), options) {
        Ok(scan) => scan,
        Err(e) => {
            if format == OutputFormat::Json {
                let error = JsonError::new(error_codes::INVALID_INPUT, e.to_string())
                    .with_file(folder)
                    .with_suggestion("pass an existing, readable directory");
                let output = ScanOutput::failed(folder, only_invalid, error);
                println!("{}", serde_json::to_string_pretty(&output)?);
                return Ok(ExitCode::from(1));
            }
            return Err(e.into());
        }
    };

    let summary = ScanSummary::from_results(&scan.results);
    info!(
        root = %scan.root.display(),
        total = summary.total,
        invalid = summary.invalid,
        skipped = scan.skipped.len(),
        "scan finished"
    );

    let root = scan.root.display().to_string();
    let skipped = scan.skipped;
    let shown = report(scan.results, only_invalid);

    match format {
        OutputFormat::Table => {
            print_skipped(&skipped);
            print_table(&shown);
            print_summary(&summary, only_invalid);
        }
        OutputFormat::List => {
            print_skipped(&skipped);
            print_list(&shown);
            print_summary(&summary, only_invalid);
        }
        OutputFormat::Csv => {
            print_skipped(&skipped);
            print!("{}", format_csv(&shown)?);
        }
        OutputFormat::Json => {
            let warnings = skipped.iter().map(skipped_to_warning).collect();
            let output = ScanOutput {
                success: true,
                root,
                only_invalid,
                results: shown,
                summary: summary.clone(),
                warnings,
                errors: vec![],
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    if fail_on_invalid && summary.invalid > 0 {
        Ok(ExitCode::from(EXIT_INVALID_FOUND))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

/// Keep every result, or only the non-`ok` ones. Order is preserved.
pub fn report(results: Vec<FileCheckResult>, only_invalid: bool) -> Vec<FileCheckResult> {
    if only_invalid {
        results.into_iter().filter(|r| !r.is_ok()).collect()
    } else {
        results
    }
}

fn skipped_to_warning(entry: &SkippedEntry) -> JsonWarning {
    let warning = JsonWarning::new(warning_codes::SKIPPED_ENTRY, entry.reason.clone());
    match &entry.path {
        Some(path) => warning.with_file(path.clone()),
        None => warning,
    }
}

fn colorize_label(result: Outcome, width: usize) -> String {
    let padded = format!("{:<width$}", result.label(), width = width);
    match result {
        Outcome::Ok => padded.green().to_string(),
        Outcome::Truncated | Outcome::Unreadable => padded.yellow().to_string(),
        _ => padded.red().bold().to_string(),
    }
}

/// Print an aligned `RESULT  FILE  PATH` table.
fn print_table(results: &[FileCheckResult]) {
    if results.is_empty() {
        println!("{}", "No matching .wav files.".dimmed());
        return;
    }

    let result_width = results
        .iter()
        .map(|r| r.result().label().len())
        .max()
        .unwrap_or(0)
        .max("RESULT".len());
    let name_width = results
        .iter()
        .map(|r| r.file_name().chars().count())
        .max()
        .unwrap_or(0)
        .max("FILE".len());

    println!(
        "{}",
        format!(
            "{:<rw$}  {:<nw$}  {}",
            "RESULT",
            "FILE",
            "PATH",
            rw = result_width,
            nw = name_width
        )
        .bold()
    );

    for result in results {
        println!(
            "{}  {:<nw$}  {}",
            colorize_label(result.result(), result_width),
            result.file_name(),
            result.full_path().dimmed(),
            nw = name_width
        );
        if let Some(detail) = result.detail() {
            println!("{:<rw$}  {} {}", "", "-".yellow(), detail, rw = result_width);
        }
    }
}

/// Print one block of fields per file.
fn print_list(results: &[FileCheckResult]) {
    if results.is_empty() {
        println!("{}", "No matching .wav files.".dimmed());
        return;
    }

    for (i, result) in results.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!(
            "{} {} ({})",
            "result:  ".dimmed(),
            colorize_label(result.result(), 0),
            result.result().description()
        );
        println!("{} {}", "fileName:".dimmed(), result.file_name());
        println!("{} {}", "fullPath:".dimmed(), result.full_path());
        if let Some(detail) = result.detail() {
            println!("{} {}", "detail:  ".dimmed(), detail);
        }
    }
}

fn print_summary(summary: &ScanSummary, only_invalid: bool) {
    println!("\n{}", "Summary".cyan().bold());
    println!("{}", "-------".dimmed());
    println!("Total:   {}", summary.total);
    println!("OK:      {}", format!("{}", summary.ok).green());
    if summary.invalid > 0 {
        println!("Invalid: {}", format!("{}", summary.invalid).red());
    } else {
        println!("Invalid: 0");
    }

    for (result, count) in &summary.by_result {
        if result.is_ok() {
            continue;
        }
        println!("  {} {}: {}", "-".red(), result.description(), count);
    }

    if only_invalid && summary.ok > 0 {
        println!(
            "{}",
            format!("({} compatible file(s) hidden)", summary.ok).dimmed()
        );
    }

    if summary.invalid == 0 {
        println!("\n{}", "All files are compatible.".green().bold());
    } else {
        println!("\n{}", "Some files are not compatible.".red().bold());
    }
}

fn print_skipped(skipped: &[SkippedEntry]) {
    for entry in skipped {
        eprintln!(
            "  {} Skipped {}: {}",
            "!".yellow(),
            entry.path.as_deref().unwrap_or("<unknown>"),
            entry.reason
        );
    }
}

#[cfg(test)]
mod tests;
