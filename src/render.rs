use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::info;

use janus_calendar::{dates, dates_from};
use janus_layout::render_calendar;

use crate::cli::Cli;

/// Resolved end of the requested span.
enum Stop {
    /// Render `[start, year)` and finish.
    Year(i32),
    /// Render from the start year onward, forever.
    Never,
}

/// Render the requested calendar to stdout.
pub fn run(cli: &Cli) -> Result<()> {
    match resolve_stop(cli)? {
        Stop::Year(stop) => {
            info!(start = cli.start, stop, "rendering bounded calendar");
            let days = dates(cli.start, stop)?;
            let lines: Vec<String> = render_calendar(days, cli.first_weekday).collect();
            info!(n_lines = lines.len(), "calendar rendered");

            let mut out = io::stdout().lock();
            if !lines.is_empty() {
                writeln!(out, "{}", lines.join("\n")).context("failed to write calendar")?;
            }
        }
        Stop::Never => {
            info!(start = cli.start, "rendering endless calendar");
            let days = dates_from(cli.start);

            // Emit each line as soon as it is produced; the stream never ends,
            // so nothing may buffer it whole.
            let mut out = io::stdout().lock();
            for line in render_calendar(days, cli.first_weekday) {
                writeln!(out, "{line}").context("failed to write calendar")?;
            }
        }
    }
    Ok(())
}

/// Parse the stop argument: a year, the literal "never", or absent
/// (one year after the start).
fn resolve_stop(cli: &Cli) -> Result<Stop> {
    match cli.stop.as_deref() {
        None => {
            let stop = cli
                .start
                .checked_add(1)
                .context("start year is too large")?;
            Ok(Stop::Year(stop))
        }
        Some("never") => Ok(Stop::Never),
        Some(s) => {
            let stop: i32 = s
                .parse()
                .with_context(|| format!("stop must be a year or \"never\", got {s:?}"))?;
            Ok(Stop::Year(stop))
        }
    }
}
