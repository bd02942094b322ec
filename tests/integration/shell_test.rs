//! Behavior of the simulated shell through its public API

use std::time::Duration;

use chrono::NaiveDateTime;
use folio::shell::{
    Command, LineBuffer, LineKind, Row, TerminalWidget, Viewport, ECHO_USAGE, HELP_TEXT,
};

use crate::helpers::{fixed_clock, kinds, texts, widget};

fn input_is_last(buffer: &LineBuffer) -> bool {
    matches!(buffer.rows().last(), Some(Row::Input(_)))
}

// ============================================================================
// Dispatch
// ============================================================================

#[test]
fn every_registered_command_appends_prompt_and_at_most_one_output() {
    for command in Command::ALL {
        if command == Command::Clear {
            continue;
        }
        for raw in [command.name().to_string(), format!("{} extra args", command.name())] {
            let mut w = widget();
            w.submit(&raw);
            let kinds = kinds(&w);
            assert_eq!(kinds[0], LineKind::Prompt, "{}", raw);
            assert!(kinds.len() <= 2, "{}", raw);
            assert!(!kinds.contains(&LineKind::Error), "{}", raw);
            assert!(input_is_last(w.viewport()));
        }
    }
}

#[test]
fn clear_takes_its_own_prompt_with_it() {
    let mut w = widget();
    w.submit("whoami");
    w.submit("clear");
    assert_eq!(w.viewport().line_count(), 0);
    assert!(input_is_last(w.viewport()));
}

#[test]
fn clear_is_idempotent() {
    let mut w = widget();
    w.submit("skills");
    w.clear();
    w.clear();
    assert_eq!(w.viewport().line_count(), 0);
    assert_eq!(w.viewport().rows().count(), 1);
}

#[test]
fn unregistered_input_appends_prompt_and_error() {
    for raw in ["ls", "sudo rm -rf /", "hel", "helpme", "ECHOO hi"] {
        let mut w = widget();
        w.submit(raw);
        assert_eq!(kinds(&w), vec![LineKind::Prompt, LineKind::Error], "{}", raw);
        assert!(input_is_last(w.viewport()));
    }
}

#[test]
fn error_line_names_the_lowercased_command() {
    let mut w = widget();
    w.submit("LS -la");
    assert_eq!(
        texts(&w)[1],
        "Command not found: ls. Type 'help' for available commands."
    );
}

#[test]
fn blank_input_appends_only_a_prompt() {
    for raw in ["", "   ", "\t"] {
        let mut w = widget();
        w.submit(raw);
        assert_eq!(kinds(&w), vec![LineKind::Prompt]);
    }
}

#[test]
fn names_are_case_insensitive() {
    let mut upper = widget();
    let mut lower = widget();
    upper.submit("HELP");
    lower.submit("help");
    assert_eq!(texts(&upper)[1], texts(&lower)[1]);
    assert_eq!(texts(&lower)[1], HELP_TEXT);
}

// ============================================================================
// Command output
// ============================================================================

#[test]
fn echo_joins_arguments() {
    let mut w = widget();
    w.submit("echo a b c");
    assert_eq!(texts(&w)[1], "a b c");
}

#[test]
fn echo_collapses_repeated_spaces() {
    let mut w = widget();
    w.submit("echo   a    b");
    assert_eq!(texts(&w)[1], "a b");
}

#[test]
fn bare_echo_prints_usage() {
    let mut w = widget();
    w.submit("echo");
    assert_eq!(texts(&w)[1], ECHO_USAGE);
}

#[test]
fn date_output_parses_and_follows_the_clock() {
    let mut w = widget();
    w.submit("date");
    let first = texts(&w)[1].clone();
    assert_eq!(first, "9/15/2025, 9:30:00 AM");
    assert!(NaiveDateTime::parse_from_str(&first, "%m/%d/%Y, %I:%M:%S %p").is_ok());

    w.clock_mut().advance(Duration::from_secs(61));
    w.submit("date");
    let second = texts(&w)[3].clone();
    assert_ne!(first, second);
    assert_eq!(second, "9/15/2025, 9:31:01 AM");
}

#[test]
fn neofetch_reports_clock_uptime() {
    let mut w = widget();
    w.submit("neofetch");
    assert!(texts(&w)[1].contains("Uptime: 7 seconds"));
}

#[test]
fn prompt_echo_keeps_raw_input() {
    let mut w = TerminalWidget::with_clock(LineBuffer::new(), fixed_clock()).with_prompt_marker(">");
    w.submit("  Echo   spaced  ");
    assert_eq!(texts(&w)[0], ">   Echo   spaced  ");
    assert_eq!(texts(&w)[1], "spaced");
}

// ============================================================================
// Viewport
// ============================================================================

#[test]
fn submit_scrolls_back_to_the_end() {
    let mut w = widget();
    for _ in 0..5 {
        w.submit("skills");
    }
    w.viewport_mut().scroll_up(4, 10);
    assert_eq!(w.viewport().scroll_back(), 4);
    w.submit("whoami");
    assert_eq!(w.viewport().scroll_back(), 0);
}

#[test]
fn focus_marks_the_input_line() {
    let mut w = widget();
    assert!(!w.viewport().input().is_focused());
    w.focus();
    assert!(w.viewport().input().is_focused());
}

#[test]
fn updates_to_cleared_lines_are_ignored() {
    let mut buffer = LineBuffer::new();
    let id = buffer.append_line(folio::TerminalLine::output("x"));
    buffer.clear_lines();
    assert!(!buffer.update_line(id, "y"));
    assert_eq!(buffer.line_count(), 0);
}
