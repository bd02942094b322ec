//! One-shot scripted intro for the terminal widget.
//!
//! Starting the intro reserves one slot line per script entry and
//! expands the script into a [`Timeline`]: typed entries reveal one
//! character per tick, output entries appear in full. The player can
//! only be started once.

use std::time::Duration;

use super::command::HELP_TEXT;
use super::line::{LineId, LineKind, TerminalLine};
use super::viewport::Viewport;
use super::widget::DEFAULT_PROMPT_MARKER;
use crate::schedule::Timeline;

/// Default delay between typed characters.
pub const DEFAULT_TYPE_DELAY: Duration = Duration::from_millis(50);

/// How a script entry appears in its slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reveal {
    /// Character by character
    Typed,
    /// Whole text at once
    Instant,
}

/// A canned prompt or output shown during the intro.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntroStep {
    pub kind: LineKind,
    pub text: String,
    /// Offset from playback start
    pub delay: Duration,
    pub reveal: Reveal,
}

impl IntroStep {
    pub fn typed(text: impl Into<String>, delay_ms: u64) -> Self {
        Self {
            kind: LineKind::Prompt,
            text: text.into(),
            delay: Duration::from_millis(delay_ms),
            reveal: Reveal::Typed,
        }
    }

    pub fn output(text: impl Into<String>, delay_ms: u64) -> Self {
        Self {
            kind: LineKind::Output,
            text: text.into(),
            delay: Duration::from_millis(delay_ms),
            reveal: Reveal::Instant,
        }
    }
}

/// The greeting played when the terminal first comes into view.
pub fn default_script() -> Vec<IntroStep> {
    vec![
        IntroStep::typed("echo \"Hi I'm Lukas!\"", 1000),
        IntroStep::output("Hi I'm Lukas!", 2000),
        IntroStep::typed("help", 3500),
        IntroStep::output(HELP_TEXT, 4500),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct SlotUpdate {
    slot: usize,
    text: String,
}

/// Plays the intro script into reserved slot lines.
#[derive(Debug, Clone)]
pub struct IntroPlayer {
    script: Vec<IntroStep>,
    type_delay: Duration,
    prompt_marker: String,
    started: bool,
    slots: Vec<LineId>,
    timeline: Timeline<SlotUpdate>,
}

impl IntroPlayer {
    pub fn new(script: Vec<IntroStep>, type_delay: Duration, prompt_marker: impl Into<String>) -> Self {
        Self {
            script,
            type_delay,
            prompt_marker: prompt_marker.into(),
            started: false,
            slots: Vec::new(),
            timeline: Timeline::new(),
        }
    }

    /// Change the marker used for typed prompts. Ignored once started.
    pub fn set_prompt_marker(&mut self, marker: impl Into<String>) {
        if !self.started {
            self.prompt_marker = marker.into();
        }
    }

    /// Whether playback has been started (the replay guard).
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Whether every scheduled update has been applied.
    pub fn is_finished(&self) -> bool {
        self.started && self.timeline.is_finished()
    }

    /// Line handles of the reserved slots, in script order.
    pub fn slots(&self) -> &[LineId] {
        &self.slots
    }

    /// Start playback. Returns `false` if it was already started.
    pub fn start<V: Viewport + ?Sized>(&mut self, viewport: &mut V) -> bool {
        if self.started {
            return false;
        }
        self.started = true;

        let mut entries = Vec::new();
        for (slot, step) in self.script.iter().enumerate() {
            let placeholder = self.slot_text(step.kind, "");
            self.slots
                .push(viewport.append_line(TerminalLine::new(step.kind, placeholder)));

            match step.reveal {
                Reveal::Instant => entries.push((
                    step.delay,
                    SlotUpdate {
                        slot,
                        text: self.slot_text(step.kind, &step.text),
                    },
                )),
                Reveal::Typed => {
                    let mut typed = String::with_capacity(step.text.len());
                    for (i, c) in step.text.chars().enumerate() {
                        typed.push(c);
                        entries.push((
                            step.delay + self.type_delay * i as u32,
                            SlotUpdate {
                                slot,
                                text: self.slot_text(step.kind, &typed),
                            },
                        ));
                    }
                }
            }
        }
        self.timeline = Timeline::from_entries(entries);

        tracing::debug!(
            steps = self.script.len(),
            updates = self.timeline.len(),
            "intro playback started"
        );
        true
    }

    /// Apply every update due `elapsed` after playback start.
    ///
    /// Returns the number of slots changed. Updates aimed at slots that
    /// were cleared away are dropped.
    pub fn advance<V: Viewport + ?Sized>(&mut self, elapsed: Duration, viewport: &mut V) -> usize {
        if !self.started {
            return 0;
        }
        self.timeline
            .drain_due(elapsed)
            .into_iter()
            .filter(|update| {
                self.slots
                    .get(update.slot)
                    .is_some_and(|id| viewport.update_line(*id, &update.text))
            })
            .count()
    }

    fn slot_text(&self, kind: LineKind, text: &str) -> String {
        match kind {
            LineKind::Prompt => format!("{} {}", self.prompt_marker, text),
            LineKind::Output | LineKind::Error => text.to_string(),
        }
    }
}

impl Default for IntroPlayer {
    fn default() -> Self {
        Self::new(default_script(), DEFAULT_TYPE_DELAY, DEFAULT_PROMPT_MARKER)
    }
}
