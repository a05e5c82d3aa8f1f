//! wavscan - find WAV files that DJ players refuse to load
//!
//! Scans folders for `.wav` files whose header uses a layout, bit depth or
//! format tag the players do not support.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use wavscan_cli::commands;
use wavscan_cli::commands::scan::{OutputFormat, ScanOptions};
use wavscan_cli::logging;

/// wavscan - WAV header compatibility scanner
#[derive(Parser)]
#[command(name = "wavscan")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Log progress to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log every checked file to stderr
    #[arg(long, global = true)]
    debug: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recursively check every .wav file under a folder
    Scan {
        /// Folder to scan
        folder: String,

        /// Only report files that are not compatible
        #[arg(short = 'i', long)]
        only_invalid: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Output machine-readable JSON (same as --format json)
        #[arg(long)]
        json: bool,

        /// Exit with code 2 if any file is not compatible
        #[arg(long)]
        fail_on_invalid: bool,

        /// Maximum directory depth to descend
        #[arg(long)]
        max_depth: Option<usize>,

        /// Do not follow symbolic links
        #[arg(long)]
        no_follow_links: bool,
    },

    /// Show the header fields and check result of a single file
    Inspect {
        /// Path to the .wav file
        file: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    logging::init(cli.verbose, cli.debug);
    if cli.no_color {
        colored::control::set_override(false);
    }

    let result = match cli.command {
        Commands::Scan {
            folder,
            only_invalid,
            format,
            json,
            fail_on_invalid,
            max_depth,
            no_follow_links,
        } => {
            let format = if json { OutputFormat::Json } else { format };
            let options = ScanOptions {
                follow_links: !no_follow_links,
                max_depth,
            };
            commands::scan::run(&folder, only_invalid, format, &options, fail_on_invalid)
        }
        Commands::Inspect { file, json } => commands::inspect::run(&file, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
