//! Output layer for pretty/text/JSON parity.
//!
//! # Output mode resolution
//!
//! Precedence (highest wins):
//! 1. `--format` / hidden `--json` flag
//! 2. `FORMAT` env var → `"pretty"` | `"text"` | `"json"`
//! 3. Default: [`OutputMode::Pretty`] if stdout is a TTY; [`OutputMode::Text`] if piped.

use std::io::{self, IsTerminal, Write};

use clap::ValueEnum;
use streak_core::UserStreak;

/// Shared width for human pretty separators.
const PRETTY_RULE_WIDTH: usize = 56;

/// The three output modes supported by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Human-optimized output (aligned table, visual framing).
    Pretty,
    /// Token-efficient plain text for agents and pipes.
    Text,
    /// Machine-readable JSON array, stable field order.
    Json,
}

/// Core resolution logic, separated from I/O for testability.
///
/// `format_flag` — explicit `--format` value if provided.
/// `json_flag` — hidden `--json` alias.
/// `format_env` — the value of `FORMAT` if set.
/// `is_tty` — true if stdout is a TTY.
fn resolve_output_mode_inner(
    format_flag: Option<OutputMode>,
    json_flag: bool,
    format_env: Option<&str>,
    is_tty: bool,
) -> OutputMode {
    if let Some(mode) = format_flag {
        return mode;
    }

    if json_flag {
        return OutputMode::Json;
    }

    if let Some(val) = format_env {
        match val.to_lowercase().as_str() {
            "json" => return OutputMode::Json,
            "text" => return OutputMode::Text,
            "pretty" => return OutputMode::Pretty,
            _ => {} // unknown value — fall through to TTY detection
        }
    }

    if is_tty {
        OutputMode::Pretty
    } else {
        OutputMode::Text
    }
}

/// Resolve the effective output mode from flags, environment, and TTY state.
pub fn resolve_output_mode(format_flag: Option<OutputMode>, json_flag: bool) -> OutputMode {
    resolve_output_mode_inner(
        format_flag,
        json_flag,
        std::env::var("FORMAT").ok().as_deref(),
        io::stdout().is_terminal(),
    )
}

/// Render a date cell, with `-` standing in for an absent date in
/// human-facing modes.
fn date_cell(date: Option<chrono::NaiveDate>) -> String {
    date.map_or_else(|| "-".to_string(), |d| d.to_string())
}

/// Render the result collection to `w` in the requested mode.
pub fn render_streaks(
    w: &mut dyn Write,
    streaks: &[UserStreak],
    mode: OutputMode,
) -> anyhow::Result<()> {
    match mode {
        OutputMode::Json => {
            writeln!(w, "{}", serde_json::to_string_pretty(streaks)?)?;
        }
        OutputMode::Text => {
            for s in streaks {
                writeln!(
                    w,
                    "{}\t{}\t{}\t{}",
                    s.user_id,
                    s.longest_sequence,
                    date_cell(s.start_date),
                    date_cell(s.end_date)
                )?;
            }
        }
        OutputMode::Pretty => {
            writeln!(
                w,
                "{:<8} {:>7} {:<12} {:<12}",
                "user", "streak", "start", "end"
            )?;
            writeln!(w, "{:-<width$}", "", width = PRETTY_RULE_WIDTH)?;
            for s in streaks {
                writeln!(
                    w,
                    "{:<8} {:>7} {:<12} {:<12}",
                    s.user_id,
                    s.longest_sequence,
                    date_cell(s.start_date),
                    date_cell(s.end_date)
                )?;
            }
            writeln!(w, "{} users", streaks.len())?;
        }
    }
    Ok(())
}
