//! Shared helpers for integration tests

use std::path::Path;
use std::process::Command;
use std::time::Duration;

use chrono::{Local, TimeZone};
use folio::shell::{FixedClock, LineBuffer, LineKind, TerminalWidget};

pub type TestWidget = TerminalWidget<LineBuffer, FixedClock>;

/// Clock pinned to 2025-09-15 09:30:00 local time with 7 s uptime.
pub fn fixed_clock() -> FixedClock {
    FixedClock::new(
        Local.with_ymd_and_hms(2025, 9, 15, 9, 30, 0).unwrap(),
        Duration::from_secs(7),
    )
}

pub fn widget() -> TestWidget {
    TerminalWidget::with_clock(LineBuffer::new(), fixed_clock())
}

pub fn kinds(widget: &TestWidget) -> Vec<LineKind> {
    widget.viewport().lines().map(|line| line.kind).collect()
}

pub fn texts(widget: &TestWidget) -> Vec<String> {
    widget
        .viewport()
        .lines()
        .map(|line| line.text.clone())
        .collect()
}

/// Run the folio binary with an isolated config directory.
pub fn run_folio(config_dir: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_folio"))
        .args(args)
        .env("FOLIO_CONFIG_DIR", config_dir)
        .env("NO_COLOR", "1")
        .env_remove("FOLIO_LOG")
        .output()
        .expect("Failed to execute folio");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}
