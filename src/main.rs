use std::path::PathBuf;
use std::process::ExitCode;

use baln_engine::calculation::compute_ledger;
use baln_engine::config::ConfigLoader;
use baln_engine::error::EngineResult;
use baln_engine::report::{OutputMode, render};
use chrono::{Local, NaiveDate};
use clap::{Parser, ValueEnum};
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "baln",
    version,
    about = "Bills due before the next paycheck"
)]
struct Cli {
    /// Reference date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Directory holding expenses.yaml, recurring.yaml and paycheck.yaml
    #[arg(long, default_value = "config/household")]
    config: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "markdown")]
    format: Format,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Markdown,
    Json,
}

impl From<Format> for OutputMode {
    fn from(format: Format) -> Self {
        match format {
            Format::Markdown => OutputMode::Markdown,
            Format::Json => OutputMode::Json,
        }
    }
}

/// Initialize tracing on stderr based on CLI verbosity level.
///
/// `RUST_LOG` overrides the flag if set.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("baln_engine={level},baln={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> EngineResult<bool> {
    let config = ConfigLoader::load(&cli.config)?.into_config();
    let today = cli.date.unwrap_or_else(|| Local::now().date_naive());

    let report = compute_ledger(today, &config)?;
    println!("{}", render(&report, cli.format.into())?);

    Ok(report.is_pass())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            error!(error = %err, "Ledger computation aborted");
            eprintln!("error: {err}");
            ExitCode::from(2)
        }
    }
}
