//! Console output for a run: one line per file, a summary, or the whole report as JSON.

use chrono::NaiveDateTime;
use colored::Colorize;
use std::io::{self, IsTerminal, Write};
use tracing::warn;

use crate::update::{FileOutcome, FileResult, RunReport};

/// Check if we should use colors in output
pub fn should_use_colors() -> bool {
    color_choice(
        // Check NO_COLOR env (standard: https://no-color.org/)
        std::env::var("NO_COLOR").is_ok(),
        std::env::var("FORCE_COLOR").is_ok(),
        io::stdout().is_terminal(),
    )
}

fn color_choice(no_color: bool, force_color: bool, is_terminal: bool) -> bool {
    if no_color {
        return false;
    }
    force_color || is_terminal
}

/// Decide on colors once and make `colored` follow that decision either way
pub fn init_colors() -> bool {
    let colors_enabled = should_use_colors();
    colored::control::set_override(colors_enabled);
    colors_enabled
}

/// Streams one line per file as results come in.
///
/// After the first write error (e.g. a closed pipe) it logs once and prints nothing more,
/// so the caller's loop keeps going.
pub struct ResultPrinter<W: Write> {
    writer: W,
    colors_enabled: bool,
    broken: bool,
}

impl<W: Write> ResultPrinter<W> {
    pub fn new(writer: W, colors_enabled: bool) -> Self {
        Self {
            writer,
            colors_enabled,
            broken: false,
        }
    }

    pub fn print(&mut self, result: &FileResult) {
        if self.broken {
            return;
        }
        if let Err(e) = display_file_result(result, &mut self.writer, self.colors_enabled) {
            warn!(error = %e, "Cannot write to output, per-file lines stop here");
            self.broken = true;
        }
    }

    pub fn is_broken(&self) -> bool {
        self.broken
    }
}

pub fn format_datetime(datetime: &NaiveDateTime) -> String {
    datetime.format("%Y-%m-%d %H:%M:%S%.3f").to_string()
}

/// Print `name -> date (matcher)`, or `name -> ???` when nothing resolved
pub fn display_file_result(
    result: &FileResult,
    writer: &mut impl Write,
    colors_enabled: bool,
) -> io::Result<()> {
    let name = format!("{:>30}", result.name);

    let Some((matcher, datetime)) = result.outcome.resolution() else {
        if colors_enabled {
            return writeln!(writer, "{} -> {}", name.dimmed(), "???".yellow());
        }
        return writeln!(writer, "{} -> ???", name);
    };

    let date = format!("{:<30}", format_datetime(&datetime));
    let matcher = format!("({})", matcher);

    match &result.outcome {
        FileOutcome::Failed { error, .. } => {
            if colors_enabled {
                writeln!(
                    writer,
                    "{} -> {} {} {}",
                    name,
                    date.red(),
                    matcher.dimmed(),
                    format!("failed: {}", error).red()
                )
            } else {
                writeln!(writer, "{} -> {} {} failed: {}", name, date, matcher, error)
            }
        }
        _ => {
            if colors_enabled {
                writeln!(writer, "{} -> {} {}", name, date.green(), matcher.dimmed())
            } else {
                writeln!(writer, "{} -> {} {}", name, date, matcher)
            }
        }
    }
}

pub fn display_summary(
    report: &RunReport,
    writer: &mut impl Write,
    colors_enabled: bool,
) -> io::Result<()> {
    writeln!(writer)?;

    if report.is_empty() {
        writeln!(writer, "No files found.")?;
        return Ok(());
    }

    let verb = if report.dry_run { "would be updated" } else { "updated" };
    let updated = format!("{} files {}", report.updated_count(), verb);
    if colors_enabled {
        writeln!(writer, "{}", updated.green())?;
    } else {
        writeln!(writer, "{}", updated)?;
    }

    let unresolved = report.unresolved_count();
    if unresolved > 0 {
        let line = format!("{} files without a recognizable date", unresolved);
        if colors_enabled {
            writeln!(writer, "{}", line.yellow())?;
        } else {
            writeln!(writer, "{}", line)?;
        }
    }

    let failed = report.failed_count();
    if failed > 0 {
        let line = format!("{} files could not be updated", failed);
        if colors_enabled {
            writeln!(writer, "{}", line.red())?;
        } else {
            writeln!(writer, "{}", line)?;
        }
    }

    if report.dry_run {
        writeln!(writer)?;
        writeln!(writer, "Run without --dry to apply these changes.")?;
    }

    Ok(())
}

/// Print the whole report as pretty JSON
pub fn display_json(report: &RunReport, writer: &mut impl Write) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, report)?;
    writeln!(writer)
}
