//! CSV formatting for scan results.

use anyhow::Result;
use std::io::Write;

use super::types::FileCheckResult;

const HEADER: [&str; 4] = ["result", "fileName", "fullPath", "detail"];

/// Format results as CSV, one row per file.
pub fn format_csv(results: &[FileCheckResult]) -> Result<String> {
    let mut output = Vec::new();

    writeln!(output, "{}", HEADER.join(","))?;

    for item in results {
        let row = [
            item.result().code().to_string(),
            csv_escape(item.file_name()),
            csv_escape(item.full_path()),
            item.detail().map(csv_escape).unwrap_or_default(),
        ];
        writeln!(output, "{}", row.join(","))?;
    }

    Ok(String::from_utf8(output)?)
}

fn csv_escape(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
