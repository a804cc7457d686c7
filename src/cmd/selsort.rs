//! Sorts integers with selection sort and prints them space-delimited.
//!
//! e.g.
//! ```text
//! $ selsort 5 3 8 1
//! 1 3 5 8
//! $ echo "2 2 1" | selsort
//! 1 2 2
//! ```
//!
//! Logs go to stderr and are controlled with `RUST_LOG` or `--verbose`.

use clap::Parser;
use selsort::{SelectionSort, SortError};
use std::io::{self, Read};
use std::num::ParseIntError;
use std::process::ExitCode;
use thiserror::Error;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Integers to sort. Whitespace-separated integers are read from stdin when none are given.
    #[arg(allow_negative_numbers = true)]
    values: Vec<i64>,

    /// Only sort and print the first N values. A negative N prints nothing.
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    len: Option<i64>,

    /// Log at debug level.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("invalid integer {token:?}: {source}")]
    Parse {
        token: String,
        #[source]
        source: ParseIntError,
    },

    #[error("failed to read stdin: {0}")]
    Stdin(#[from] io::Error),

    #[error(transparent)]
    Sort(#[from] SortError),
}

fn init_logging(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };

    let subscriber = Registry::default()
        .with(
            fmt::layer()
                .compact()
                .with_writer(io::stderr)
                .with_thread_ids(false)
                .with_thread_names(false),
        )
        .with(
            EnvFilter::builder()
                .with_default_directive(default_level.into())
                .from_env_lossy(),
        );

    // Only fails if a global subscriber was already installed
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn parse_values(input: &str) -> Result<Vec<i64>, CliError> {
    input
        .split_whitespace()
        .map(|token| {
            token.parse().map_err(|source| CliError::Parse {
                token: token.to_owned(),
                source,
            })
        })
        .collect()
}

/// Maps the requested length onto a prefix length. Negative lengths sort and print nothing.
fn resolve_len(len: Option<i64>, available: usize) -> usize {
    match len {
        None => available,
        Some(n) if n < 0 => {
            tracing::warn!(len = n, "negative length, nothing will be sorted");
            0
        }
        // Lengths beyond usize are necessarily out of bounds
        Some(n) => usize::try_from(n).unwrap_or(usize::MAX),
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let mut values = if args.values.is_empty() {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        parse_values(&input)?
    } else {
        args.values
    };

    let len = resolve_len(args.len, values.len());
    tracing::debug!(count = values.len(), len, "sorting");

    values
        .selection_sort_builder()
        .with_len(len)
        .sort_and_print()?;

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "selsort failed");
            eprintln!("selsort: {}", err);
            ExitCode::FAILURE
        }
    }
}
