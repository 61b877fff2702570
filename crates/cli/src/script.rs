//! Batch replay of JSON-lines command scripts.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use stockroom_inventory::{InventoryCommand, InventoryView};
use stockroom_reference::ReferenceData;

/// Counts from one script run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptReport {
    pub applied: usize,
    pub failed: usize,
}

/// Apply every command in `input` to `view`.
///
/// Blank lines and lines starting with `#` are skipped. A line that is not a
/// valid command aborts the run; a command the view rejects is reported to
/// `out` and the run continues.
pub fn run<R, I, W>(view: &mut InventoryView<R>, input: I, out: &mut W) -> Result<ScriptReport>
where
    R: ReferenceData,
    I: BufRead,
    W: Write,
{
    let mut report = ScriptReport::default();

    for (index, line) in input.lines().enumerate() {
        let line_no = index + 1;
        let line = line.with_context(|| format!("failed to read script line {line_no}"))?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let command: InventoryCommand = serde_json::from_str(trimmed)
            .with_context(|| format!("invalid command on line {line_no}"))?;

        match view.dispatch(command) {
            Ok(outcome) => {
                tracing::debug!(line = line_no, ?outcome, "script command applied");
                report.applied += 1;
            }
            Err(e) => {
                writeln!(out, "line {line_no}: {e}")?;
                report.failed += 1;
            }
        }
    }

    tracing::info!(
        session = %view.session_id(),
        applied = report.applied,
        failed = report.failed,
        "script finished"
    );
    Ok(report)
}
