#![forbid(unsafe_code)]

mod output;

use std::env;
use std::io::{self, Write as _};
use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use output::{OutputMode, render_streaks, resolve_output_mode};
use streak_core::{load_events, longest_contiguous_sequence, write_streaks};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "streak: longest contiguous login streak per user",
    long_about = "Compute, for each user in a JSON login log, the longest run of \
                  calendar days with at least one login and no gap greater than one day."
)]
struct Cli {
    /// Path to the input JSON array of login records.
    input: PathBuf,

    /// Also write the results to this path as a JSON array.
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Output format (defaults to pretty on a TTY, text when piped).
    #[arg(long, value_enum)]
    format: Option<OutputMode>,

    /// Emit JSON output (alias for --format json).
    #[arg(long, hide = true)]
    json: bool,

    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("STREAK_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if env::var("DEBUG").is_ok() {
            "streak=debug,info"
        } else {
            "streak=info,warn"
        })
    });

    let format = env::var("STREAK_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry.with(fmt::layer().json().with_ansi(false)).init();
        }
        _ => {
            registry.with(fmt::layer().compact()).init();
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let mode = resolve_output_mode(cli.format, cli.json);

    let events = load_events(&cli.input)
        .with_context(|| format!("failed to load login events from '{}'", cli.input.display()))?;
    let streaks = longest_contiguous_sequence(&events);

    if let Some(path) = cli.output.as_ref() {
        write_streaks(path, &streaks)
            .with_context(|| format!("failed to write results to '{}'", path.display()))?;
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_streaks(&mut out, &streaks, mode)?;
    out.flush()?;

    Ok(())
}
