//! wavscan CLI library.
//!
//! This crate provides the `scan` and `inspect` commands behind the `wavscan`
//! binary: recursive discovery of `.wav` files, per-file header checks and
//! human or machine-readable reports.

pub mod commands;
pub mod logging;

pub use commands::scan::{report, scan, scan_dir, FileCheckResult, Scan, ScanError, ScanOptions};
