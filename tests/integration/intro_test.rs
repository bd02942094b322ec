//! Intro playback through the widget

use std::time::{Duration, Instant};

use folio::shell::{IntroPlayer, IntroStep, LineKind, HELP_TEXT};

use crate::helpers::{kinds, texts, widget};

fn at(start: Instant, ms: u64) -> Instant {
    start + Duration::from_millis(ms)
}

#[test]
fn intro_reserves_one_slot_per_entry() {
    let mut w = widget();
    let start = Instant::now();
    assert!(w.start_intro(start));
    assert_eq!(
        kinds(&w),
        vec![
            LineKind::Prompt,
            LineKind::Output,
            LineKind::Prompt,
            LineKind::Output
        ]
    );
    assert_eq!(texts(&w), vec!["$ ", "", "$ ", ""]);
}

#[test]
fn intro_types_then_reveals() {
    let mut w = widget();
    let start = Instant::now();
    w.start_intro(start);

    w.tick(at(start, 999));
    assert_eq!(texts(&w)[0], "$ ");

    w.tick(at(start, 1000));
    assert_eq!(texts(&w)[0], "$ e");

    w.tick(at(start, 1100));
    assert_eq!(texts(&w)[0], "$ ech");

    w.tick(at(start, 2000));
    assert_eq!(texts(&w)[0], "$ echo \"Hi I'm Lukas!\"");
    assert_eq!(texts(&w)[1], "Hi I'm Lukas!");

    w.tick(at(start, 4500));
    assert_eq!(texts(&w)[2], "$ help");
    assert_eq!(texts(&w)[3], HELP_TEXT);
    assert!(w.intro_finished());
}

#[test]
fn a_late_tick_applies_everything_due() {
    let mut w = widget();
    let start = Instant::now();
    w.start_intro(start);
    assert!(w.tick(at(start, 60_000)) > 0);
    assert_eq!(w.tick(at(start, 61_000)), 0);
    assert!(w.intro_finished());
}

#[test]
fn second_start_is_a_noop() {
    let mut w = widget();
    let start = Instant::now();
    assert!(w.start_intro(start));
    w.tick(at(start, 5000));
    let before = texts(&w);

    assert!(!w.start_intro(at(start, 6000)));
    w.tick(at(start, 12_000));
    assert_eq!(texts(&w), before);
}

#[test]
fn clear_during_intro_drops_pending_updates() {
    let mut w = widget();
    let start = Instant::now();
    w.start_intro(start);
    w.tick(at(start, 1500));
    w.clear();

    w.tick(at(start, 5000));
    assert_eq!(w.viewport().line_count(), 0);
}

#[test]
fn user_input_lands_after_intro_slots() {
    let mut w = widget();
    let start = Instant::now();
    w.start_intro(start);
    w.submit("whoami");
    w.tick(at(start, 5000));

    let t = texts(&w);
    assert_eq!(t.len(), 6);
    assert_eq!(t[3], HELP_TEXT);
    assert_eq!(t[4], "$ whoami");
}

#[test]
fn default_intro_uses_widget_prompt_marker() {
    let mut w = widget().with_prompt_marker(">");
    let start = Instant::now();
    w.start_intro(start);
    w.tick(at(start, 10_000));

    let t = texts(&w);
    assert_eq!(t[0], "> echo \"Hi I'm Lukas!\"");
    assert_eq!(t[2], "> help");
}

#[test]
fn custom_script_and_type_delay() {
    let script = vec![IntroStep::typed("hi", 0), IntroStep::output("there", 10)];
    let player = IntroPlayer::new(script, Duration::from_millis(5), ">");
    let mut w = widget().with_intro(player);
    let start = Instant::now();
    w.start_intro(start);

    w.tick(at(start, 0));
    assert_eq!(texts(&w), vec!["> h", ""]);
    w.tick(at(start, 10));
    assert_eq!(texts(&w), vec!["> hi", "there"]);
}
