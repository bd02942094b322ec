//! Whole-page rendering on a test backend

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use folio::preferences::MemoryThemeStore;
use folio::site::Section;
use folio::tui::{Portfolio, PortfolioOptions};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn portfolio(width: u16, height: u16, intro: bool) -> (Portfolio, Instant) {
    let now = Instant::now();
    let options = PortfolioOptions {
        intro,
        ..PortfolioOptions::default()
    };
    let mut p = Portfolio::new(options, Box::new(MemoryThemeStore::new(None)), now);
    p.resize(width, height);
    (p, now)
}

fn screen(p: &mut Portfolio, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| p.render(frame)).unwrap();
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

#[test]
fn wide_layout_lists_sections_in_nav() {
    let (mut p, _) = portfolio(100, 30, false);
    let text = screen(&mut p, 100, 30);
    let nav = text.lines().next().unwrap();
    for label in ["Home", "About", "Projects", "Contact"] {
        assert!(nav.contains(label), "nav missing {}", label);
    }
    assert!(!nav.contains('\u{2261}'));
}

#[test]
fn narrow_layout_collapses_nav() {
    let (mut p, _) = portfolio(50, 24, false);
    let text = screen(&mut p, 50, 24);
    let nav = text.lines().next().unwrap();
    assert!(nav.contains('\u{2261}'));
    assert!(!nav.contains("Projects"));
}

#[test]
fn unfocused_terminal_shows_placeholder() {
    let (mut p, _) = portfolio(80, 24, false);
    let text = screen(&mut p, 80, 24);
    assert!(text.contains("press Tab to type a command"));
}

#[test]
fn intro_output_appears_on_screen() {
    let (mut p, start) = portfolio(80, 24, true);
    p.tick(start);
    p.tick(start + Duration::from_secs(10));
    let text = screen(&mut p, 80, 24);
    assert!(text.contains("Hi I'm Lukas!"));
    assert!(text.contains("$ help"));
}

#[test]
fn typed_error_is_rendered() {
    let (mut p, now) = portfolio(80, 24, false);
    p.handle_key(key(KeyCode::Tab), now);
    for c in "ls".chars() {
        p.handle_key(key(KeyCode::Char(c)), now);
    }
    p.handle_key(key(KeyCode::Enter), now);

    let text = screen(&mut p, 80, 24);
    assert!(text.contains("Command not found: ls"));
}

#[test]
fn help_listing_wraps_inside_standard_width() {
    let (mut p, now) = portfolio(80, 24, false);
    p.handle_key(key(KeyCode::Tab), now);
    for c in "help".chars() {
        p.handle_key(key(KeyCode::Char(c)), now);
    }
    p.handle_key(key(KeyCode::Enter), now);

    let text = screen(&mut p, 80, 24);
    assert!(text.contains("echo [text],"));
    assert!(text.contains("neofetch"));
}

#[test]
fn help_overlay_draws_over_page() {
    let (mut p, now) = portfolio(80, 24, false);
    p.handle_key(key(KeyCode::F(1)), now);
    let text = screen(&mut p, 80, 24);
    assert!(text.contains(" Help "));
}

#[test]
fn theme_picker_marks_current_theme() {
    let (mut p, now) = portfolio(80, 24, false);
    p.handle_key(key(KeyCode::F(2)), now);
    let text = screen(&mut p, 80, 24);
    let marked: Vec<&str> = text.lines().filter(|l| l.contains('\u{25cf}')).collect();
    assert_eq!(marked.len(), 1);
    assert!(marked[0].contains("Dark"));
}

#[test]
fn scrolled_page_shows_section_heading() {
    let (mut p, _) = portfolio(80, 24, false);
    p.scroll_to(Section::About);
    assert_eq!(p.active_section(), Section::About);
    let text = screen(&mut p, 80, 24);
    assert!(text.contains("full-stack software engineer at Swimage"));
}
