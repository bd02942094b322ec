//! The command terminal widget.

use std::time::{Duration, Instant};

use super::clock::{Clock, SystemClock};
use super::command::{Command, Invocation, Reply};
use super::intro::IntroPlayer;
use super::line::TerminalLine;
use super::viewport::Viewport;

/// Default marker printed before echoed input.
pub const DEFAULT_PROMPT_MARKER: &str = "$";

/// Simulated command line: echoes input, dispatches commands and
/// renders their replies through a [`Viewport`].
#[derive(Debug)]
pub struct TerminalWidget<V: Viewport, C: Clock = SystemClock> {
    viewport: V,
    clock: C,
    prompt_marker: String,
    intro: IntroPlayer,
    intro_started_at: Option<Instant>,
}

impl<V: Viewport> TerminalWidget<V, SystemClock> {
    /// Widget using the system clock with the default intro script.
    pub fn new(viewport: V) -> Self {
        Self::with_clock(viewport, SystemClock::new())
    }
}

impl<V: Viewport, C: Clock> TerminalWidget<V, C> {
    pub fn with_clock(viewport: V, clock: C) -> Self {
        Self {
            viewport,
            clock,
            prompt_marker: DEFAULT_PROMPT_MARKER.to_string(),
            intro: IntroPlayer::default(),
            intro_started_at: None,
        }
    }

    /// Override the prompt marker (e.g. from config). An intro that has
    /// not started yet types its prompts with the same marker.
    pub fn with_prompt_marker(mut self, marker: impl Into<String>) -> Self {
        self.prompt_marker = marker.into();
        self.intro.set_prompt_marker(self.prompt_marker.clone());
        self
    }

    /// Replace the intro player. Has no effect once the intro started.
    pub fn with_intro(mut self, intro: IntroPlayer) -> Self {
        if !self.intro.is_started() {
            self.intro = intro;
        }
        self
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut V {
        &mut self.viewport
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    pub fn prompt_marker(&self) -> &str {
        &self.prompt_marker
    }

    pub fn into_viewport(self) -> V {
        self.viewport
    }

    /// Handle one line of user input.
    ///
    /// Always echoes the raw input as a prompt line. Unknown commands
    /// produce an error line; they are not failures of this call.
    pub fn submit(&mut self, raw: &str) {
        self.viewport
            .append_line(TerminalLine::prompt(format!("{} {}", self.prompt_marker, raw)));

        let Some(invocation) = Invocation::parse(raw) else {
            return;
        };

        match Command::lookup(&invocation.name) {
            Ok(command) => {
                tracing::debug!(command = command.name(), args = invocation.args.len(), "dispatch");
                match command.run(&invocation.args, &self.clock) {
                    Reply::Text(text) if !text.is_empty() => {
                        self.viewport.append_line(TerminalLine::output(text));
                    }
                    Reply::Text(_) => {}
                    Reply::ClearScreen => self.clear(),
                }
            }
            Err(err) => {
                tracing::debug!(%err, "unrecognized command");
                self.viewport.append_line(TerminalLine::error(err.to_string()));
            }
        }

        self.viewport.scroll_to_end();
    }

    /// Remove every line except the input line.
    pub fn clear(&mut self) {
        self.viewport.clear_lines();
    }

    /// Give focus to the input line.
    pub fn focus(&mut self) {
        self.viewport.focus_input();
    }

    /// Start the intro playback at `now`. Returns `false` if it already ran.
    pub fn start_intro(&mut self, now: Instant) -> bool {
        if !self.intro.start(&mut self.viewport) {
            return false;
        }
        self.intro_started_at = Some(now);
        true
    }

    pub fn intro_started(&self) -> bool {
        self.intro.is_started()
    }

    pub fn intro_finished(&self) -> bool {
        self.intro.is_finished()
    }

    /// Apply intro updates that are due at `now`.
    pub fn tick(&mut self, now: Instant) -> usize {
        let Some(started) = self.intro_started_at else {
            return 0;
        };
        let elapsed = now.checked_duration_since(started).unwrap_or(Duration::ZERO);
        self.intro.advance(elapsed, &mut self.viewport)
    }
}
