//! Type definitions for the scan command.
//!
//! Contains the per-file result record, summary counts and the JSON output shape.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use wavscan_header::{Inspection, Outcome};

use super::super::json_output::{JsonError, JsonWarning};

/// Result of checking a single `.wav` file.
///
/// Built once per file and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileCheckResult {
    result: Outcome,
    file_name: String,
    full_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
}

impl FileCheckResult {
    pub fn new(path: &Path, result: Outcome, detail: Option<String>) -> Self {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            result,
            file_name,
            full_path: path.display().to_string(),
            detail,
        }
    }

    pub fn from_inspection(path: &Path, inspection: Inspection) -> Self {
        Self::new(path, inspection.outcome, inspection.detail)
    }

    pub fn result(&self) -> Outcome {
        self.result
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn full_path(&self) -> &str {
        &self.full_path
    }

    /// Extra context for truncated or unreadable files.
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// An entry the walker could not descend into or stat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    pub path: Option<String>,
    pub reason: String,
}

/// How scan results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Aligned, colored table with a summary
    #[default]
    Table,
    /// One block of fields per file
    List,
    /// Pretty-printed JSON document
    Json,
    /// Comma-separated values with a header row
    Csv,
}

/// Summary of scan results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanSummary {
    /// Total files checked
    pub total: usize,
    /// Files with a compatible header
    pub ok: usize,
    /// Files with any other outcome
    pub invalid: usize,
    /// Count per outcome code, outcomes with no files omitted
    pub by_result: BTreeMap<Outcome, usize>,
}

impl ScanSummary {
    pub fn from_results(results: &[FileCheckResult]) -> Self {
        let mut by_result = BTreeMap::new();
        for result in results {
            *by_result.entry(result.result()).or_insert(0) += 1;
        }
        let ok = by_result.get(&Outcome::Ok).copied().unwrap_or(0);

        Self {
            total: results.len(),
            ok,
            invalid: results.len() - ok,
            by_result,
        }
    }
}

/// JSON output for the scan command. Every key is camelCase.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanOutput {
    /// Whether the scan ran to completion
    pub success: bool,
    /// Directory that was scanned
    pub root: String,
    /// Whether `results` was restricted to non-ok files
    pub only_invalid: bool,
    /// Per-file results, in traversal order
    pub results: Vec<FileCheckResult>,
    /// Counts over every scanned file, including filtered ones
    pub summary: ScanSummary,
    /// Entries skipped during the walk
    pub warnings: Vec<JsonWarning>,
    /// Fatal errors
    pub errors: Vec<JsonError>,
}

impl ScanOutput {
    /// Output for a scan that could not start.
    pub fn failed(root: impl Into<String>, only_invalid: bool, error: JsonError) -> Self {
        Self {
            success: false,
            root: root.into(),
            only_invalid,
            results: Vec::new(),
            summary: ScanSummary::from_results(&[]),
            warnings: Vec::new(),
            errors: vec![error],
        }
    }
}
