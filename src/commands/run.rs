//! Run command lines without the TUI

use std::io::{self, BufRead};

use anyhow::{bail, Context, Result};

use folio::shell::{LineBuffer, TerminalLine, TerminalWidget, Viewport};
use folio::Config;

use super::Output;

/// Feed each line to a fresh terminal and return the rows it ends with.
///
/// `clear` behaves as on the page: rows before it are gone.
pub fn collect_rows<S: AsRef<str>>(lines: &[S], prompt_marker: &str) -> Vec<TerminalLine> {
    let mut terminal = TerminalWidget::new(LineBuffer::new()).with_prompt_marker(prompt_marker);
    for line in lines {
        terminal.submit(line.as_ref());
    }
    terminal.viewport_mut().scroll_to_end();
    terminal.into_viewport().drain()
}

fn read_stdin_lines() -> Result<Vec<String>> {
    if atty::is(atty::Stream::Stdin) {
        bail!("No command lines given. Pass LINE arguments or pipe lines on stdin.");
    }
    io::stdin()
        .lock()
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .context("Failed to read command lines from stdin")
}

pub fn handle(lines: Vec<String>, json: bool) -> Result<()> {
    let config = Config::load()?;
    let lines = if lines.is_empty() {
        read_stdin_lines()?
    } else {
        lines
    };

    let rows = collect_rows(&lines, &config.terminal.prompt_marker);
    tracing::debug!(lines = lines.len(), rows = rows.len(), "ran command lines");

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    let out = Output::detect();
    for row in &rows {
        println!("{}", out.line(row.kind, &row.text));
    }
    Ok(())
}
