//! Portfolio TUI application
//!
//! One scrollable page: the terminal (home) followed by the about,
//! projects and contact sections. Overlays: help, theme picker, contact
//! form and project details.

use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    widgets::{Block, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::app::modals::{
    render_contact_form, render_help_modal, render_notification, render_project_details,
    render_theme_picker,
};
use super::app::overlay::{Overlay, OverlayKind};
use super::app::status_footer::{render_footer, render_status_line};
use super::app::{App, TuiApp};
use super::theme::Theme;
use super::ui::page_chunks;
use super::widgets::nav_bar::is_narrow;
use super::widgets::{
    render_nav_bar, render_nav_menu, render_terminal, section_height, section_lines, TerminalView,
};
use crate::config::Config;
use crate::preferences::{resolve_theme, ThemeName, ThemeStore};
use crate::schedule::Timeline;
use crate::shell::{default_script, IntroPlayer, LineBuffer, TerminalWidget};
use crate::site::{ContactForm, Field, NavMenu, NotificationKind, Notifier, PageLayout, Section, PROJECTS};

/// Smallest terminal panel, in rows, on short screens.
const MIN_TERMINAL_ROWS: usize = 8;

/// Rows moved per mouse wheel step.
const WHEEL_STEP: isize = 3;

/// Shortest useful event-loop tick for 50 ms typing.
const TICK_RATE: Duration = Duration::from_millis(20);

/// Startup settings taken from the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioOptions {
    pub prompt_marker: String,
    pub type_delay: Duration,
    pub intro: bool,
    pub autofocus_delay: Duration,
}

impl Default for PortfolioOptions {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for PortfolioOptions {
    fn from(config: &Config) -> Self {
        Self {
            prompt_marker: config.terminal.prompt_marker.clone(),
            type_delay: Duration::from_millis(config.terminal.type_delay_ms),
            intro: config.terminal.intro,
            autofocus_delay: Duration::from_millis(config.terminal.autofocus_delay_ms),
        }
    }
}

/// Work scheduled relative to startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Deferred {
    FocusInput,
}

/// Screen state, independent of the real terminal.
pub struct Portfolio {
    terminal: TerminalWidget<LineBuffer>,
    store: Box<dyn ThemeStore>,
    theme: Theme,
    overlay: Overlay,
    picker_idx: usize,
    form: ContactForm,
    form_field: Field,
    project_idx: usize,
    notifier: Notifier,
    menu: NavMenu,
    layout: PageLayout,
    /// Page rows scrolled past the top of the body
    scroll: usize,
    view_height: usize,
    width: u16,
    terminal_view: TerminalView,
    intro_enabled: bool,
    deferred: Timeline<Deferred>,
    opened_at: Instant,
    should_quit: bool,
}

impl Portfolio {
    pub fn new(options: PortfolioOptions, store: Box<dyn ThemeStore>, now: Instant) -> Self {
        let theme = Theme::for_name(resolve_theme(store.as_ref()));
        let intro = IntroPlayer::new(
            default_script(),
            options.type_delay,
            options.prompt_marker.clone(),
        );
        let terminal = TerminalWidget::new(LineBuffer::new())
            .with_prompt_marker(options.prompt_marker)
            .with_intro(intro);

        let mut deferred = Timeline::new();
        deferred.push(options.autofocus_delay, Deferred::FocusInput);

        Self {
            terminal,
            store,
            theme,
            overlay: Overlay::default(),
            picker_idx: 0,
            form: ContactForm::default(),
            form_field: Field::Name,
            project_idx: 0,
            notifier: Notifier::new(),
            menu: NavMenu::default(),
            layout: PageLayout::default(),
            scroll: 0,
            view_height: 0,
            width: 0,
            terminal_view: TerminalView::default(),
            intro_enabled: options.intro,
            deferred,
            opened_at: now,
            should_quit: false,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn terminal(&self) -> &TerminalWidget<LineBuffer> {
        &self.terminal
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn overlay(&self) -> Option<OverlayKind> {
        self.overlay.active()
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub fn menu(&self) -> &NavMenu {
        &self.menu
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn active_section(&self) -> Section {
        self.layout.active_section(self.scroll)
    }

    fn input_focused(&self) -> bool {
        self.terminal.viewport().input().is_focused()
    }

    // ========================================================================
    // Layout and scrolling
    // ========================================================================

    /// Recompute the page for a new screen size.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        // nav bar and footer take one row each
        self.view_height = (height as usize).saturating_sub(2);
        let heights: Vec<(Section, usize)> = Section::ALL
            .iter()
            .map(|&section| {
                let rows = match section {
                    Section::Home => self.view_height.max(MIN_TERMINAL_ROWS),
                    _ => section_height(section),
                };
                (section, rows)
            })
            .collect();
        self.layout = PageLayout::stack(&heights);
        self.scroll = self.scroll.min(self.layout.max_scroll(self.view_height));
    }

    pub fn scroll_to(&mut self, section: Section) {
        self.scroll = self.layout.scroll_target(section, self.view_height);
        self.menu.close();
        tracing::debug!(section = section.id(), scroll = self.scroll, "jump to section");
    }

    pub fn scroll_by(&mut self, delta: isize) {
        let max = self.layout.max_scroll(self.view_height) as isize;
        self.scroll = (self.scroll as isize + delta).clamp(0, max) as usize;
    }

    fn page_step(&self) -> isize {
        (self.view_height / 2).max(1) as isize
    }

    // ========================================================================
    // Theme and notifications
    // ========================================================================

    /// Apply a theme and persist it. A failed save keeps the new theme
    /// for this session and reports the failure.
    pub fn set_theme(&mut self, name: ThemeName, now: Instant) {
        self.theme = Theme::for_name(name);
        self.picker_idx = name.index();
        match self.store.save(name.as_str()) {
            Ok(()) => tracing::info!(theme = name.as_str(), "theme changed"),
            Err(err) => {
                tracing::warn!(error = %err, "could not save theme preference");
                self.notifier.show(
                    NotificationKind::Error,
                    "Could not save theme preference",
                    now,
                );
            }
        }
    }

    // ========================================================================
    // Timers
    // ========================================================================

    /// Run timed work: autofocus, intro playback, notification expiry.
    pub fn tick(&mut self, now: Instant) {
        let elapsed = now.saturating_duration_since(self.opened_at);
        for action in self.deferred.drain_due(elapsed) {
            match action {
                Deferred::FocusInput => self.terminal.focus(),
            }
        }

        self.notifier.expire(now);

        if self.intro_enabled
            && !self.terminal.intro_started()
            && self
                .layout
                .is_visible(Section::Home, self.scroll, self.view_height)
            && self.terminal.start_intro(now)
        {
            tracing::debug!("intro started");
        }
        self.terminal.tick(now);
    }

    // ========================================================================
    // Input
    // ========================================================================

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if let Some(kind) = self.overlay.active() {
            self.handle_overlay_key(kind, key, now);
            return;
        }

        if self.menu.is_open() {
            self.handle_menu_key(key);
            return;
        }

        match key.code {
            KeyCode::F(1) => self.overlay.open(OverlayKind::Help),
            KeyCode::F(2) => {
                self.picker_idx = self.theme.name.index();
                self.overlay.open(OverlayKind::ThemePicker);
            }
            KeyCode::F(3) => {
                self.form_field = Field::Name;
                self.overlay.open(OverlayKind::ContactForm);
            }
            KeyCode::F(4) => self.overlay.open(OverlayKind::ProjectDetails),
            KeyCode::F(5) => self.menu.toggle(),
            KeyCode::Down if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.scroll_to(self.active_section().next())
            }
            KeyCode::Up if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.scroll_to(self.active_section().prev())
            }
            KeyCode::PageUp if key.modifiers.contains(KeyModifiers::SHIFT) => {
                let (rows, max) = (self.terminal_view.inner.height as usize, self.terminal_view.max_scroll);
                self.terminal.viewport_mut().scroll_up(rows.max(1), max);
            }
            KeyCode::PageDown if key.modifiers.contains(KeyModifiers::SHIFT) => {
                let rows = self.terminal_view.inner.height as usize;
                self.terminal.viewport_mut().scroll_down(rows.max(1));
            }
            KeyCode::PageUp => self.scroll_by(-self.page_step()),
            KeyCode::PageDown => self.scroll_by(self.page_step()),
            _ if self.input_focused() => self.handle_input_key(key),
            _ => self.handle_page_key(key),
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent) {
        let input = self.terminal.viewport_mut().input_mut();
        match key.code {
            KeyCode::Enter => {
                let raw = input.take();
                self.terminal.submit(&raw);
            }
            KeyCode::Esc => input.set_focused(false),
            KeyCode::Backspace => input.backspace(),
            KeyCode::Delete => input.delete(),
            KeyCode::Left => input.move_left(),
            KeyCode::Right => input.move_right(),
            KeyCode::Home => input.move_home(),
            KeyCode::End => input.move_end(),
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                input.insert(c)
            }
            _ => {}
        }
    }

    fn handle_page_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Tab | KeyCode::Enter => {
                self.scroll_to(Section::Home);
                self.terminal.focus();
            }
            KeyCode::Esc => self.notifier.dismiss(),
            KeyCode::Up => self.scroll_by(-1),
            KeyCode::Down => self.scroll_by(1),
            KeyCode::Home => self.scroll = 0,
            KeyCode::End => self.scroll = self.layout.max_scroll(self.view_height),
            _ => {}
        }
    }

    fn handle_menu_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::F(5) => self.menu.close(),
            KeyCode::Up => self.menu.select_prev(),
            KeyCode::Down => self.menu.select_next(),
            KeyCode::Enter => {
                let section = self.menu.choose();
                self.scroll_to(section);
            }
            _ => {}
        }
    }

    fn handle_overlay_key(&mut self, kind: OverlayKind, key: KeyEvent, now: Instant) {
        if key.code == KeyCode::Esc {
            self.overlay.close();
            return;
        }
        match kind {
            OverlayKind::Help => {
                if matches!(key.code, KeyCode::F(1) | KeyCode::Char('q')) {
                    self.overlay.close();
                }
            }
            OverlayKind::ThemePicker => match key.code {
                KeyCode::F(2) => self.overlay.close(),
                KeyCode::Up => {
                    self.picker_idx = (self.picker_idx + ThemeName::ALL.len() - 1) % ThemeName::ALL.len()
                }
                KeyCode::Down => self.picker_idx = (self.picker_idx + 1) % ThemeName::ALL.len(),
                KeyCode::Enter => {
                    self.set_theme(ThemeName::ALL[self.picker_idx], now);
                    self.overlay.close();
                }
                _ => {}
            },
            OverlayKind::ContactForm => self.handle_form_key(key, now),
            OverlayKind::ProjectDetails => match key.code {
                KeyCode::F(4) => self.overlay.close(),
                KeyCode::Up => self.project_idx = self.project_idx.saturating_sub(1),
                KeyCode::Down => {
                    self.project_idx = (self.project_idx + 1).min(PROJECTS.len() - 1)
                }
                KeyCode::Enter => {
                    if let Some(project) = PROJECTS.get(self.project_idx) {
                        self.notifier
                            .show(NotificationKind::Info, project.action_message(), now);
                    }
                }
                _ => {}
            },
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::F(3) => self.overlay.close(),
            KeyCode::Tab | KeyCode::Down => self.form_field = self.form_field.next(),
            KeyCode::BackTab | KeyCode::Up => self.form_field = self.form_field.prev(),
            KeyCode::Backspace => {
                self.form.field_mut(self.form_field).pop();
            }
            KeyCode::Enter => match self.form.submit() {
                Ok(message) => {
                    self.notifier.show(NotificationKind::Success, message, now);
                    self.form_field = Field::Name;
                    self.overlay.close();
                }
                Err(err) => self.notifier.show(NotificationKind::Error, err.to_string(), now),
            },
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.form.field_mut(self.form_field).push(c)
            }
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollUp if !self.overlay.is_open() => self.scroll_by(-WHEEL_STEP),
            MouseEventKind::ScrollDown if !self.overlay.is_open() => self.scroll_by(WHEEL_STEP),
            MouseEventKind::Down(MouseButton::Left) => {
                if self.overlay.is_open() {
                    self.overlay.handle_click(mouse.column, mouse.row);
                    return;
                }
                if self.menu.is_open() {
                    self.menu.close();
                    return;
                }
                let inside = self
                    .terminal_view
                    .area
                    .contains(Position::new(mouse.column, mouse.row));
                self.terminal
                    .viewport_mut()
                    .input_mut()
                    .set_focused(inside);
            }
            _ => {}
        }
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    fn footer_keys(&self) -> Vec<(&'static str, &'static str)> {
        if self.input_focused() {
            return vec![("Enter", "run"), ("Esc", "leave input"), ("F1", "help")];
        }
        let mut keys = vec![
            ("Tab", "terminal"),
            ("F1", "help"),
            ("F2", "theme"),
            ("F3", "contact"),
            ("F4", "projects"),
        ];
        if is_narrow(self.width) {
            keys.push(("F5", "menu"));
        } else {
            keys.push(("^Up/^Down", "sections"));
        }
        keys.push(("q", "quit"));
        keys
    }

    fn render_body(&mut self, frame: &mut Frame, body: Rect) {
        self.terminal_view = TerminalView::default();
        let view = body.height as i64;
        let spans = self.layout.spans().to_vec();
        for span in spans {
            let top = span.top as i64 - self.scroll as i64;
            let first = top.max(0);
            let last = (top + span.height as i64).min(view);
            if last <= first {
                continue;
            }
            let area = Rect::new(
                body.x,
                body.y + first as u16,
                body.width,
                (last - first) as u16,
            );
            let clipped = (first - top) as u16;

            match span.section {
                Section::Home => {
                    self.terminal_view = render_terminal(
                        frame,
                        area,
                        self.terminal.viewport(),
                        self.terminal.prompt_marker(),
                        &self.theme,
                    );
                }
                section => {
                    let page = Paragraph::new(section_lines(section, &self.theme))
                        .style(self.theme.page_style())
                        .scroll((clipped, 0));
                    frame.render_widget(page, area);
                }
            }
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Block::default().style(self.theme.page_style()), area);

        let (nav, body, footer) = page_chunks(area);
        let active = self.active_section();
        render_nav_bar(frame, nav, active, &self.theme);
        self.render_body(frame, body);

        let status = format!("{} \u{00b7} {} ", self.theme.name.label(), active.label());
        let footer_chunks = split_footer(footer, &status);
        render_footer(frame, footer_chunks[0], &self.footer_keys(), &self.theme);
        render_status_line(frame, footer_chunks[1], &status, &self.theme);

        if self.menu.is_open() {
            render_nav_menu(frame, body, &self.menu, active, &self.theme);
        }

        if let Some(kind) = self.overlay.active() {
            let modal = match kind {
                OverlayKind::Help => render_help_modal(frame, area, &self.theme),
                OverlayKind::ThemePicker => render_theme_picker(
                    frame,
                    area,
                    &self.theme,
                    self.theme.name,
                    self.picker_idx,
                ),
                OverlayKind::ContactForm => {
                    render_contact_form(frame, area, &self.theme, &self.form, self.form_field)
                }
                OverlayKind::ProjectDetails => {
                    render_project_details(frame, area, &self.theme, PROJECTS, self.project_idx)
                }
            };
            self.overlay.set_area(modal);
        }

        if let Some(notification) = self.notifier.current() {
            render_notification(frame, body, &self.theme, notification);
        }
    }
}

/// Key hints on the left, `status` right-aligned in exactly its width.
fn split_footer(footer: Rect, status: &str) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(status.width() as u16)])
        .split(footer)
}

/// Full-screen portfolio bound to the real terminal.
pub struct PortfolioApp {
    /// Base app for terminal handling
    app: App,
    portfolio: Portfolio,
}

impl PortfolioApp {
    pub fn new(config: &Config, store: Box<dyn ThemeStore>) -> Result<Self> {
        let app = App::new(TICK_RATE)?;
        let (width, height) = app.size()?;
        let mut portfolio = Portfolio::new(PortfolioOptions::from(config), store, Instant::now());
        portfolio.resize(width, height);
        Ok(Self { app, portfolio })
    }
}

impl TuiApp for PortfolioApp {
    fn app(&mut self) -> &mut App {
        &mut self.app
    }

    fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Result<()> {
        self.portfolio.handle_key(key, now);
        if self.portfolio.should_quit() {
            self.app.quit();
        }
        Ok(())
    }

    fn handle_mouse(&mut self, mouse: MouseEvent, _now: Instant) -> Result<()> {
        self.portfolio.handle_mouse(mouse);
        Ok(())
    }

    fn handle_resize(&mut self, width: u16, height: u16) -> Result<()> {
        self.portfolio.resize(width, height);
        Ok(())
    }

    fn tick(&mut self, now: Instant) -> Result<()> {
        self.portfolio.tick(now);
        Ok(())
    }

    fn draw(&mut self) -> Result<()> {
        let portfolio = &mut self.portfolio;
        self.app.draw(|frame| portfolio.render(frame))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::MemoryThemeStore;
    use crate::shell::LineKind;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn portfolio_with(options: PortfolioOptions, theme: Option<&str>) -> (Portfolio, Instant) {
        let now = Instant::now();
        let mut p = Portfolio::new(options, Box::new(MemoryThemeStore::new(theme)), now);
        p.resize(80, 24);
        (p, now)
    }

    fn portfolio() -> (Portfolio, Instant) {
        portfolio_with(
            PortfolioOptions {
                intro: false,
                ..PortfolioOptions::default()
            },
            None,
        )
    }

    fn type_line(p: &mut Portfolio, text: &str, now: Instant) {
        for c in text.chars() {
            p.handle_key(key(KeyCode::Char(c)), now);
        }
        p.handle_key(key(KeyCode::Enter), now);
    }

    fn draw(p: &mut Portfolio) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
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
    fn stored_theme_is_applied_at_startup() {
        let (p, _) = portfolio_with(PortfolioOptions::default(), Some("synthwave"));
        assert_eq!(p.theme().name, ThemeName::Synthwave);
    }

    #[test]
    fn unknown_stored_theme_falls_back_to_dark() {
        let (p, _) = portfolio_with(PortfolioOptions::default(), Some("vaporwave"));
        assert_eq!(p.theme().name, ThemeName::Dark);
    }

    #[test]
    fn input_takes_focus_after_autofocus_delay() {
        let (mut p, start) = portfolio();
        p.tick(start + Duration::from_millis(1999));
        assert!(!p.input_focused());
        p.tick(start + Duration::from_secs(2));
        assert!(p.input_focused());
    }

    #[test]
    fn typed_command_runs_through_the_widget() {
        let (mut p, now) = portfolio();
        p.handle_key(key(KeyCode::Tab), now);
        type_line(&mut p, "whoami", now);

        let lines: Vec<_> = p.terminal().viewport().lines().cloned().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text, "$ whoami");
        assert_eq!(lines[1].kind, LineKind::Output);
        assert_eq!(p.terminal().viewport().input().text(), "");
    }

    #[test]
    fn q_quits_only_outside_the_input() {
        let (mut p, now) = portfolio();
        p.handle_key(key(KeyCode::Tab), now);
        p.handle_key(key(KeyCode::Char('q')), now);
        assert!(!p.should_quit());
        assert_eq!(p.terminal().viewport().input().text(), "q");

        p.handle_key(key(KeyCode::Esc), now);
        p.handle_key(key(KeyCode::Char('q')), now);
        assert!(p.should_quit());
    }

    #[test]
    fn ctrl_c_always_quits() {
        let (mut p, now) = portfolio();
        p.handle_key(key(KeyCode::F(1)), now);
        p.handle_key(ctrl(KeyCode::Char('c')), now);
        assert!(p.should_quit());
    }

    #[test]
    fn intro_starts_once_home_is_visible() {
        let (mut p, start) = portfolio_with(PortfolioOptions::default(), None);
        assert!(!p.terminal().intro_started());
        p.tick(start);
        assert!(p.terminal().intro_started());
        // Placeholder slots for every scripted entry
        assert_eq!(p.terminal().viewport().line_count(), 4);

        p.tick(start + Duration::from_secs(5));
        assert!(p.terminal().intro_finished());
    }

    #[test]
    fn intro_waits_while_home_is_scrolled_away() {
        let now = Instant::now();
        let mut p = Portfolio::new(
            PortfolioOptions::default(),
            Box::new(MemoryThemeStore::new(None)),
            now,
        );
        p.resize(80, 24);
        p.scroll_to(Section::Contact);
        p.tick(now);
        assert!(!p.terminal().intro_started());

        p.scroll_to(Section::Home);
        p.tick(now);
        assert!(p.terminal().intro_started());
    }

    #[test]
    fn ctrl_arrows_cycle_sections() {
        let (mut p, now) = portfolio();
        assert_eq!(p.active_section(), Section::Home);
        p.handle_key(ctrl(KeyCode::Down), now);
        assert_eq!(p.active_section(), Section::About);
        p.handle_key(ctrl(KeyCode::Up), now);
        assert_eq!(p.active_section(), Section::Home);
        p.handle_key(ctrl(KeyCode::Up), now);
        assert_eq!(p.scroll(), p.layout().scroll_target(Section::Contact, 22));
    }

    #[test]
    fn theme_picker_applies_persists_and_closes() {
        let (mut p, now) = portfolio();
        p.handle_key(key(KeyCode::F(2)), now);
        assert_eq!(p.overlay(), Some(OverlayKind::ThemePicker));
        p.handle_key(key(KeyCode::Down), now);
        p.handle_key(key(KeyCode::Enter), now);

        assert_eq!(p.theme().name, ThemeName::Light);
        assert_eq!(p.overlay(), None);
        assert_eq!(p.store.load().unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn escape_closes_any_overlay() {
        let (mut p, now) = portfolio();
        for open in [KeyCode::F(1), KeyCode::F(2), KeyCode::F(3), KeyCode::F(4)] {
            p.handle_key(key(open), now);
            assert!(p.overlay().is_some());
            p.handle_key(key(KeyCode::Esc), now);
            assert!(p.overlay().is_none());
        }
    }

    #[test]
    fn click_outside_modal_closes_it() {
        let (mut p, now) = portfolio();
        p.handle_key(key(KeyCode::F(1)), now);
        draw(&mut p);
        p.handle_mouse(click(40, 12));
        assert_eq!(p.overlay(), Some(OverlayKind::Help));
        p.handle_mouse(click(0, 0));
        assert_eq!(p.overlay(), None);
    }

    #[test]
    fn contact_form_reports_validation_errors() {
        let (mut p, now) = portfolio();
        p.handle_key(key(KeyCode::F(3)), now);
        p.handle_key(key(KeyCode::Enter), now);

        let notification = p.notifier().current().unwrap();
        assert_eq!(notification.kind, NotificationKind::Error);
        assert_eq!(notification.message, "Please fill in all fields");
        assert_eq!(p.overlay(), Some(OverlayKind::ContactForm));
    }

    #[test]
    fn contact_form_success_resets_and_closes() {
        let (mut p, now) = portfolio();
        p.handle_key(key(KeyCode::F(3)), now);
        for (text, last) in [("Ada", false), ("ada@example.com", false), ("Hello", true)] {
            for c in text.chars() {
                p.handle_key(key(KeyCode::Char(c)), now);
            }
            if !last {
                p.handle_key(key(KeyCode::Tab), now);
            }
        }
        p.handle_key(key(KeyCode::Enter), now);

        let notification = p.notifier().current().unwrap();
        assert_eq!(notification.kind, NotificationKind::Success);
        assert_eq!(p.overlay(), None);
        assert_eq!(p.form(), &ContactForm::default());
    }

    #[test]
    fn notifications_expire_after_five_seconds() {
        let (mut p, now) = portfolio();
        p.handle_key(key(KeyCode::F(4)), now);
        p.handle_key(key(KeyCode::Enter), now);
        assert!(p.notifier().current().is_some());

        p.tick(now + Duration::from_millis(4999));
        assert!(p.notifier().current().is_some());
        p.tick(now + Duration::from_secs(5));
        assert!(p.notifier().current().is_none());
    }

    #[test]
    fn nav_menu_selection_scrolls_and_closes() {
        let (mut p, now) = portfolio();
        p.handle_key(key(KeyCode::F(5)), now);
        assert!(p.menu().is_open());
        p.handle_key(key(KeyCode::Down), now);
        p.handle_key(key(KeyCode::Enter), now);
        assert!(!p.menu().is_open());
        assert_eq!(p.active_section(), Section::About);
    }

    #[test]
    fn render_shows_nav_and_terminal() {
        let (mut p, now) = portfolio();
        p.handle_key(key(KeyCode::Tab), now);
        type_line(&mut p, "help", now);
        let screen = draw(&mut p);
        assert!(screen.contains("Lukas Kanopka"));
        assert!(screen.contains("guest@portfolio"));
        assert!(screen.contains("$ help"));
    }

    #[test]
    fn status_column_fits_its_text() {
        let footer = Rect::new(0, 23, 80, 1);
        let chunks = split_footer(footer, "Dark \u{00b7} Home ");
        assert_eq!(chunks[1].width, 12);
        assert_eq!(chunks[0].width, 68);
    }

    #[test]
    fn click_in_terminal_focuses_input() {
        let (mut p, _) = portfolio();
        draw(&mut p);
        p.handle_mouse(click(10, 5));
        assert!(p.input_focused());
        p.handle_mouse(click(10, 23));
        assert!(!p.input_focused());
    }
}
