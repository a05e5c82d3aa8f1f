//! Inspect command implementation
//!
//! Prints the named fields of a single file's header together with its check
//! result.

use anyhow::Result;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::process::ExitCode;
use wavscan_header::layout::fourcc_to_string;
use wavscan_header::{inspect_file, Outcome, WavHeader};

use super::json_output::{error_codes, JsonError};

/// Header fields as reported by `inspect`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderFields {
    pub container_id: String,
    pub riff_size: u32,
    pub form_type: String,
    pub chunk_id: String,
    pub chunk_size: u32,
    pub format_tag: u16,
    pub channels: u16,
    pub sample_rate: u32,
    pub byte_rate: u32,
    pub block_align: u16,
    pub bits_per_sample: u16,
    pub data_id: String,
    pub data_size: u32,
}

impl From<&WavHeader> for HeaderFields {
    fn from(h: &WavHeader) -> Self {
        Self {
            container_id: fourcc_to_string(&h.container_id()),
            riff_size: h.riff_size(),
            form_type: fourcc_to_string(&h.form_type()),
            chunk_id: fourcc_to_string(&h.chunk_id()),
            chunk_size: h.chunk_size(),
            format_tag: h.format_tag(),
            channels: h.channels(),
            sample_rate: h.sample_rate(),
            byte_rate: h.byte_rate(),
            block_align: h.block_align(),
            bits_per_sample: h.bits_per_sample(),
            data_id: fourcc_to_string(&h.data_id()),
            data_size: h.data_size(),
        }
    }
}

/// JSON output for the inspect command.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectOutput {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Outcome>,
    pub full_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<HeaderFields>,
    pub errors: Vec<JsonError>,
}

/// Run the inspect command.
///
/// # Returns
/// Exit code: 0 when the file was inspected (whatever its result), 1 if it is
/// not a regular file
pub fn run(file: &str, json_output: bool) -> Result<ExitCode> {
    let path = Path::new(file);
    if !path.is_file() {
        if json_output {
            let output = InspectOutput {
                success: false,
                result: None,
                full_path: file.to_string(),
                detail: None,
                header: None,
                errors: vec![JsonError::new(
                    error_codes::INVALID_INPUT,
                    format!("Input path is not a file: {}", file),
                )
                .with_file(file)],
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
            return Ok(ExitCode::from(1));
        }
        anyhow::bail!("Input path is not a file: {}", file);
    }

    let inspection = inspect_file(path);
    let header = inspection.header.as_ref().map(HeaderFields::from);

    if json_output {
        let output = InspectOutput {
            success: true,
            result: Some(inspection.outcome),
            full_path: path.display().to_string(),
            detail: inspection.detail,
            header,
            errors: vec![],
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{} {}", "File:".dimmed(), path.display());
    if let Some(h) = &header {
        print_fields(h);
    }

    let verdict = format!(
        "{} ({})",
        inspection.outcome.label(),
        inspection.outcome.description()
    );
    if inspection.outcome.is_ok() {
        println!("\n{} {}", "Result:".bold(), verdict.green());
    } else {
        println!("\n{} {}", "Result:".bold(), verdict.red());
    }
    if let Some(detail) = &inspection.detail {
        println!("  {} {}", "-".yellow(), detail);
    }

    Ok(ExitCode::SUCCESS)
}

fn print_fields(h: &HeaderFields) {
    let rows: [(&str, &str, String); 13] = [
        ("0", "container id", h.container_id.clone()),
        ("4", "riff size", h.riff_size.to_string()),
        ("8", "form type", h.form_type.clone()),
        ("12", "chunk id", h.chunk_id.clone()),
        ("16", "chunk size", h.chunk_size.to_string()),
        ("20", "format tag", format!("{} (0x{:04X})", h.format_tag, h.format_tag)),
        ("22", "channels", h.channels.to_string()),
        ("24", "sample rate", h.sample_rate.to_string()),
        ("28", "byte rate", h.byte_rate.to_string()),
        ("32", "block align", h.block_align.to_string()),
        ("34", "bits per sample", h.bits_per_sample.to_string()),
        ("36", "data id", h.data_id.clone()),
        ("40", "data size", h.data_size.to_string()),
    ];

    for (offset, name, value) in rows {
        println!("  {}  {:<16} {}", format!("{:>2}", offset).dimmed(), name, value);
    }
}
