use core::cmp::Ordering;

use clap::{ArgAction, Parser, Subcommand};
use numver::{compare, increment, segment_count, Version, VersionError};
use tracing_subscriber::EnvFilter;

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Version(#[from] VersionError),
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log more. Repeat for more detail (`-vv`, `-vvv`). `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
#[command(arg_required_else_help(true))]
enum Commands {
    /// Compares two versions, printing `-1`, `0` or `1` when the first is older, equal or newer.
    Compare {
        /// The first version
        #[arg(allow_hyphen_values = true)]
        first: String,

        /// The second version
        #[arg(allow_hyphen_values = true)]
        second: String,
    },

    /// Increments one segment of a version and resets the segments after it to `0`.
    ///
    /// Segments are counted from zero. Numbers are incremented, known qualifiers (`alpha`, `beta`,
    /// `milestone`, `rc`, `ga`) advance to the next one, and other text is bumped like an odometer.
    Bump {
        /// The version string to increment
        #[arg(allow_hyphen_values = true)]
        version: String,

        /// The segment to increment. Use the segment count to append a segment. Defaults to the
        /// last segment.
        #[arg(short, long)]
        segment: Option<usize>,
    },

    /// Sorts versions from oldest to newest, printing one per line.
    Sort {
        /// Sort from newest to oldest instead
        #[arg(short, long)]
        reverse: bool,

        /// The versions to sort
        #[arg(required = true, allow_hyphen_values = true)]
        versions: Vec<String>,
    },

    /// Prints the number of `.`-separated segments in a version.
    Segments {
        /// The version to inspect
        #[arg(allow_hyphen_values = true)]
        version: String,
    },
}

type Output = (String, i32);

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    tracing::debug!(?cli, "parsed arguments");

    match do_work(cli) {
        Ok((output, exit_code)) => {
            println!("{output}");
            std::process::exit(exit_code);
        }
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}

/// Installs a stderr subscriber filtered by `RUST_LOG`, or by the verbosity when it is unset.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // a subscriber may already be installed, e.g. when embedded; keep that one
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn do_work(cli: Cli) -> Result<Output, CliError> {
    match cli.command {
        Commands::Compare { first, second } => {
            let output = match compare(&first, &second) {
                Ordering::Less => "-1",
                Ordering::Equal => "0",
                Ordering::Greater => "1",
            };
            Ok((output.to_string(), 0))
        }
        Commands::Bump { version, segment } => {
            let segment = segment.unwrap_or_else(|| segment_count(&version) - 1);
            let next = increment(&version, segment)?;
            tracing::info!(%version, %next, segment, "bumped");
            Ok((next, 0))
        }
        Commands::Sort { reverse, versions } => {
            let mut versions: Vec<Version> = versions.into_iter().map(Version::from).collect();
            versions.sort();
            if reverse {
                versions.reverse();
            }
            let lines: Vec<&str> = versions.iter().map(Version::as_str).collect();
            Ok((lines.join("\n"), 0))
        }
        Commands::Segments { version } => Ok((segment_count(&version).to_string(), 0)),
    }
}
