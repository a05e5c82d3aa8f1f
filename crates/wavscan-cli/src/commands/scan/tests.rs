//! Tests for the scan command.

use super::*;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn create_test_header(bits_per_sample: u16, format_tag: u16) -> Vec<u8> {
    let channels: u16 = 2;
    let sample_rate: u32 = 44100;
    let block_align = channels * bits_per_sample / 8;
    let byte_rate = sample_rate * block_align as u32;

    let mut wav = Vec::new();
    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&36u32.to_le_bytes());
    wav.extend_from_slice(b"WAVE");
    wav.extend_from_slice(b"fmt ");
    wav.extend_from_slice(&16u32.to_le_bytes());
    wav.extend_from_slice(&format_tag.to_le_bytes());
    wav.extend_from_slice(&channels.to_le_bytes());
    wav.extend_from_slice(&sample_rate.to_le_bytes());
    wav.extend_from_slice(&byte_rate.to_le_bytes());
    wav.extend_from_slice(&block_align.to_le_bytes());
    wav.extend_from_slice(&bits_per_sample.to_le_bytes());
    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&0u32.to_le_bytes());
    wav
}

/// Folder with one file per header outcome: a=ok, b=RIFX, c=JUNK, d=32 bit, e=extensible.
fn setup_scenario_dir() -> TempDir {
    let tmp = tempfile::tempdir().unwrap();

    fs::write(tmp.path().join("a.wav"), create_test_header(16, 1)).unwrap();

    let mut rifx = create_test_header(16, 1);
    rifx[0..4].copy_from_slice(b"RIFX");
    fs::write(tmp.path().join("b.wav"), rifx).unwrap();

    let mut junk = create_test_header(16, 1);
    junk[12..16].copy_from_slice(b"JUNK");
    fs::write(tmp.path().join("c.wav"), junk).unwrap();

    fs::write(tmp.path().join("d.wav"), create_test_header(32, 1)).unwrap();
    fs::write(tmp.path().join("e.wav"), create_test_header(16, 0xFFFE)).unwrap();

    tmp
}

fn names(results: &[FileCheckResult]) -> Vec<&str> {
    results.iter().map(|r| r.file_name()).collect()
}

#[test]
fn test_scan_scenario_all_results() {
    let tmp = setup_scenario_dir();

    let results = scan(tmp.path()).unwrap();

    assert_eq!(names(&results), vec!["a.wav", "b.wav", "c.wav", "d.wav", "e.wav"]);
    let outcomes: Vec<Outcome> = results.iter().map(|r| r.result()).collect();
    assert_eq!(
        outcomes,
        vec![
            Outcome::Ok,
            Outcome::InvalidContainer,
            Outcome::JunkPadding,
            Outcome::UnsupportedBitDepth,
            Outcome::UnsupportedFormatExtensible,
        ]
    );
}

#[test]
fn test_scan_scenario_only_invalid() {
    let tmp = setup_scenario_dir();

    let results = report(scan(tmp.path()).unwrap(), true);

    assert_eq!(names(&results), vec!["b.wav", "c.wav", "d.wav", "e.wav"]);
}

#[test]
fn test_report_without_filter_is_unchanged() {
    let tmp = setup_scenario_dir();
    let results = scan(tmp.path()).unwrap();

    assert_eq!(report(results.clone(), false), results);
}

#[test]
fn test_full_path_is_absolute() {
    let tmp = setup_scenario_dir();
    let results = scan(tmp.path()).unwrap();

    for result in &results {
        let path = PathBuf::from(result.full_path());
        assert!(path.is_absolute(), "{}", result.full_path());
        assert!(result.full_path().ends_with(result.file_name()));
    }
}

#[test]
fn test_scan_recurses_and_ignores_other_files() {
    let tmp = tempfile::tempdir().unwrap();
    let nested = tmp.path().join("crate").join("house");
    fs::create_dir_all(&nested).unwrap();

    fs::write(nested.join("deep.WAV"), create_test_header(24, 1)).unwrap();
    fs::write(tmp.path().join("notes.txt"), b"not audio").unwrap();
    fs::write(tmp.path().join("cover.jpg"), b"\xFF\xD8").unwrap();
    fs::write(tmp.path().join("top.wav"), create_test_header(16, 1)).unwrap();

    let results = scan(tmp.path()).unwrap();

    assert_eq!(names(&results), vec!["deep.WAV", "top.wav"]);
    assert!(results.iter().all(|r| r.is_ok()));
}

#[test]
fn test_scan_respects_max_depth() {
    let tmp = tempfile::tempdir().unwrap();
    let nested = tmp.path().join("sub");
    fs::create_dir_all(&nested).unwrap();
    fs::write(nested.join("deep.wav"), create_test_header(16, 1)).unwrap();
    fs::write(tmp.path().join("top.wav"), create_test_header(16, 1)).unwrap();

    let options = ScanOptions {
        max_depth: Some(1),
        ..ScanOptions::default()
    };
    let scan = scan_dir(tmp.path(), &options).unwrap();

    assert_eq!(names(&scan.results), vec!["top.wav"]);
}

#[test]
fn test_scan_records_truncated_files() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(tmp.path().join("short.wav"), b"RIFF").unwrap();

    let results = scan(tmp.path()).unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].result(), Outcome::Truncated);
    assert!(results[0].detail().unwrap().contains("4 of 44"));
}

#[test]
fn test_scan_empty_directory() {
    let tmp = tempfile::tempdir().unwrap();

    let scan = scan_dir(tmp.path(), &ScanOptions::default()).unwrap();

    assert!(scan.results.is_empty());
    assert!(scan.skipped.is_empty());
}

#[test]
fn test_scan_nonexistent_directory() {
    let tmp = tempfile::tempdir().unwrap();
    let missing = tmp.path().join("missing");

    let err = scan(&missing).unwrap_err();

    match err {
        ScanError::InvalidInput { path, .. } => assert_eq!(path, missing),
    }
}

#[test]
fn test_scan_file_as_root_is_invalid() {
    let tmp = tempfile::tempdir().unwrap();
    let file = tmp.path().join("a.wav");
    fs::write(&file, create_test_header(16, 1)).unwrap();

    let err = scan(&file).unwrap_err();

    assert!(err.to_string().contains("not a directory"));
}

#[test]
fn test_summary_counts() {
    let tmp = setup_scenario_dir();
    fs::write(tmp.path().join("f.wav"), create_test_header(24, 1)).unwrap();

    let results = scan(tmp.path()).unwrap();
    let summary = ScanSummary::from_results(&results);

    assert_eq!(summary.total, 6);
    assert_eq!(summary.ok, 2);
    assert_eq!(summary.invalid, 4);
    assert_eq!(summary.by_result.get(&Outcome::JunkPadding), Some(&1));
    assert_eq!(summary.by_result.get(&Outcome::Truncated), None);
}

#[test]
fn test_json_output_shape() {
    let tmp = setup_scenario_dir();
    let results = scan(tmp.path()).unwrap();
    let summary = ScanSummary::from_results(&results);

    let output = ScanOutput {
        success: true,
        root: tmp.path().display().to_string(),
        only_invalid: true,
        results: report(results, true),
        summary,
        warnings: vec![],
        errors: vec![],
    };
    let json = serde_json::to_value(&output).unwrap();

    assert_eq!(json["results"].as_array().unwrap().len(), 4);
    assert_eq!(json["results"][0]["result"], "invalid_container");
    assert_eq!(json["results"][0]["fileName"], "b.wav");
    assert!(json["results"][0]["fullPath"].as_str().unwrap().ends_with("b.wav"));
    assert!(json["results"][0].get("detail").is_none());
    assert_eq!(json["summary"]["total"], 5);
    assert_eq!(json["onlyInvalid"], true);
    assert_eq!(json["summary"]["byResult"]["ok"], 1);
    assert!(json.get("only_invalid").is_none());
    assert!(json["summary"].get("by_result").is_none());
}

#[test]
fn test_run_on_directory() {
    let tmp = setup_scenario_dir();

    let result = run(
        tmp.path().to_str().unwrap(),
        false,
        OutputFormat::Json,
        &ScanOptions::default(),
        false,
    );
    assert_eq!(result.unwrap(), ExitCode::SUCCESS);
}

#[test]
fn test_run_fail_on_invalid() {
    let tmp = setup_scenario_dir();

    let result = run(
        tmp.path().to_str().unwrap(),
        true,
        OutputFormat::Csv,
        &ScanOptions::default(),
        true,
    );
    assert_eq!(result.unwrap(), ExitCode::from(EXIT_INVALID_FOUND));
}

#[test]
fn test_run_empty_directory() {
    let tmp = tempfile::tempdir().unwrap();

    let result = run(
        tmp.path().to_str().unwrap(),
        true,
        OutputFormat::Table,
        &ScanOptions::default(),
        true,
    );
    assert_eq!(result.unwrap(), ExitCode::SUCCESS);
}

#[test]
fn test_run_nonexistent_directory_json() {
    let result = run(
        "/nonexistent/path",
        false,
        OutputFormat::Json,
        &ScanOptions::default(),
        false,
    );
    assert_eq!(result.unwrap(), ExitCode::from(1));
}

#[test]
fn test_run_nonexistent_directory_text() {
    let result = run(
        "/nonexistent/path",
        false,
        OutputFormat::Table,
        &ScanOptions::default(),
        false,
    );
    assert!(result.is_err());
}

#[cfg(unix)]
#[test]
fn test_broken_symlink_is_unreadable() {
    let tmp = tempfile::tempdir().unwrap();
    std::os::unix::fs::symlink(tmp.path().join("gone.wav"), tmp.path().join("link.wav")).unwrap();

    let results = scan(tmp.path()).unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].file_name(), "link.wav");
    assert_eq!(results[0].result(), Outcome::Unreadable);
}

#[cfg(unix)]
#[test]
fn test_unfollowed_symlink_gets_a_record() {
    let tmp = tempfile::tempdir().unwrap();
    let elsewhere = tempfile::tempdir().unwrap();
    let target = elsewhere.path().join("target.wav");
    fs::write(&target, create_test_header(24, 1)).unwrap();
    fs::write(tmp.path().join("plain.wav"), create_test_header(16, 1)).unwrap();
    std::os::unix::fs::symlink(&target, tmp.path().join("link.wav")).unwrap();

    let options = ScanOptions {
        follow_links: false,
        ..ScanOptions::default()
    };
    let scan = scan_dir(tmp.path(), &options).unwrap();

    assert_eq!(names(&scan.results), vec!["link.wav", "plain.wav"]);
    assert!(scan.results.iter().all(|r| r.is_ok()));
    assert!(scan.skipped.is_empty());
}

#[cfg(unix)]
#[test]
fn test_unfollowed_non_file_links_are_unreadable() {
    let tmp = tempfile::tempdir().unwrap();
    let folder = tmp.path().join("folder");
    fs::create_dir(&folder).unwrap();
    std::os::unix::fs::symlink(&folder, tmp.path().join("dir.wav")).unwrap();
    std::os::unix::fs::symlink(tmp.path().join("gone"), tmp.path().join("gone.wav")).unwrap();

    let options = ScanOptions {
        follow_links: false,
        ..ScanOptions::default()
    };
    let scan = scan_dir(tmp.path(), &options).unwrap();

    assert_eq!(names(&scan.results), vec!["dir.wav", "gone.wav"]);
    assert_eq!(scan.results[0].result(), Outcome::Unreadable);
    assert_eq!(scan.results[0].detail(), Some("not a regular file"));
    assert_eq!(scan.results[1].result(), Outcome::Unreadable);
    assert!(scan.results[1].detail().is_some());
}
