//! milestones - how long ago was each milestone?

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use chrono::NaiveDate;
use clap::Parser;
use colored::Colorize;
use tracing::{info, warn};

use milestones::{clock, elapsed, logging, MilestoneFile};

/// milestones - years, months and days since each milestone date
#[derive(Parser)]
#[command(name = "milestones")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Milestone file (JSON)
    #[arg(short, long)]
    milestones: PathBuf,

    /// IANA time zone used for "today" (overrides the file)
    #[arg(long)]
    tz: Option<String>,

    /// Use this date instead of today (YYYY-MM-DD)
    #[arg(long)]
    today: Option<NaiveDate>,

    /// Output machine-readable JSON
    #[arg(long)]
    json: bool,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Log debug detail to stderr
    #[arg(long)]
    debug: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    logging::init(cli.verbose, cli.debug);
    if cli.no_color {
        colored::control::set_override(false);
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {}", "error".red(), e);
            ExitCode::from(1)
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    // Every input is checked before anything is printed.
    let file = MilestoneFile::from_file(&cli.milestones)?;
    let tz = file.resolve_time_zone(cli.tz.as_deref())?;

    let today = cli.today.unwrap_or_else(|| clock::today_in(tz));
    info!(time_zone = %tz, %today, count = file.milestones.len(), "Computing periods");

    if file.milestones.is_empty() {
        warn!("{} lists no milestones", cli.milestones.display());
    }

    let periods = elapsed(&file.milestones, today);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&periods)?);
    } else {
        for entry in &periods {
            println!("{}", entry.line());
        }
    }

    Ok(())
}
