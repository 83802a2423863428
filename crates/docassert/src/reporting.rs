//! Plain-text rendering of run results.

use std::io::{self, Write};

use docassert_diagnostic::emitter::{ColorMode, TerminalEmitter};

use crate::runner::{CaseReport, RunSummary, SymbolReport};

/// Write `summary` to `out`.
///
/// Passing cases are listed only when `verbose` is set. Rejected cases are
/// rendered as diagnostics.
pub fn write_summary<W: Write>(
    out: &mut W,
    summary: &RunSummary,
    verbose: bool,
    colors: ColorMode,
) -> io::Result<()> {
    for symbol in &summary.symbols {
        write_symbol(out, symbol, verbose, colors)?;
    }

    writeln!(out)?;
    writeln!(out, "Test Summary:")?;
    writeln!(
        out,
        "  {} passed, {} failed, {} errors, {} rejected ({} total)",
        summary.passed,
        summary.failed,
        summary.errors,
        summary.rejected,
        summary.total()
    )?;
    writeln!(out)?;
    if summary.has_failures() {
        writeln!(out, "FAILED")
    } else if summary.total() == 0 {
        writeln!(out, "NO TESTS FOUND")
    } else {
        writeln!(out, "OK")
    }
}

fn write_symbol<W: Write>(
    out: &mut W,
    report: &SymbolReport,
    verbose: bool,
    colors: ColorMode,
) -> io::Result<()> {
    if report.total() == 0 || !(verbose || report.has_failures()) {
        return Ok(());
    }

    writeln!(out, "\n{}", report.symbol)?;
    for case in &report.cases {
        match case {
            CaseReport::Ran(verdict) => {
                if verdict.outcome.is_pass() && !verbose {
                    continue;
                }
                match verdict.detail() {
                    Some(detail) => {
                        writeln!(out, "  {}: {} - {detail}", verdict.outcome, verdict.identity)?;
                    }
                    None => writeln!(out, "  {}: {}", verdict.outcome, verdict.identity)?,
                }
            }
            CaseReport::Rejected {
                identity,
                diagnostic,
            } => {
                writeln!(out, "  REJECTED: {identity}")?;
                let mut emitter = TerminalEmitter::with_color_mode(&mut *out, colors, false);
                emitter.emit(diagnostic);
                emitter.flush();
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
