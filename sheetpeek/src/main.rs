use anyhow::{Context, Result};
use clap::Parser;
use clap::error::ErrorKind;
use sheetpeek_core::DEFAULT_PAGE_SIZE;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::debug;

mod dispatch;

use dispatch::{Invocation, dispatch};

#[derive(Parser, Debug)]
#[command(name = "sheetpeek")]
#[command(about = "List sheets or read a page of rows from an Excel/ODS file as JSON", long_about = None)]
#[command(version)]
struct Cli {
    /// List every sheet with its header columns
    #[arg(long)]
    list_sheets: bool,

    /// Read one page of rows from a sheet
    #[arg(long)]
    read: bool,

    /// Path to the Excel/ODS file
    #[arg(value_name = "FILE")]
    path: Option<PathBuf>,

    /// Sheet to read (exact, case-sensitive name)
    #[arg(long, value_name = "SHEET")]
    sheet: Option<String>,

    /// Page number, starting at 1
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    page: i64,

    /// Rows per page
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE, allow_negative_numbers = true)]
    size: i64,

    /// Log filter for diagnostics on stderr (RUST_LOG takes precedence)
    #[arg(long, value_name = "FILTER", default_value = "warn")]
    log_level: String,
}

impl From<Cli> for Invocation {
    fn from(cli: Cli) -> Self {
        Invocation::select(
            cli.list_sheets,
            cli.read,
            cli.path,
            cli.sheet,
            cli.page,
            cli.size,
        )
    }
}

fn main() -> Result<()> {
    let invocation = match Cli::try_parse() {
        Ok(cli) => {
            init_logging(&cli.log_level)?;
            Invocation::from(cli)
        }
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            // Malformed arguments still produce a JSON report on stdout
            init_logging("warn")?;
            debug!(kind = ?err.kind(), "argument parsing failed");
            Invocation::Invalid
        }
    };

    let report = dispatch(&invocation);

    let mut stdout = io::stdout().lock();
    let exit_code = report
        .emit(&mut stdout)
        .context("Failed to write report to stdout")?;
    stdout.flush()?;

    std::process::exit(exit_code);
}

/// Send tracing output to stderr, keeping stdout for the report
fn init_logging(level: &str) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .try_init()
        .ok();

    Ok(())
}
