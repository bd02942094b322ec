//! Deferred actions on a fixed timeline.
//!
//! A [`Timeline`] holds `(delay, action)` pairs measured from a single
//! start instant. The owner polls it with the elapsed time and receives
//! every action that has come due, in delay order. Actions fire exactly
//! once; there is no cancellation.

use std::time::Duration;

/// Ordered list of actions keyed by their offset from the start.
#[derive(Debug, Clone)]
pub struct Timeline<A> {
    entries: Vec<(Duration, A)>,
    /// Index of the first entry that has not fired
    next: usize,
}

impl<A> Default for Timeline<A> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next: 0,
        }
    }
}

impl<A> Timeline<A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a timeline from unsorted entries.
    ///
    /// Entries with equal delays keep their relative order.
    pub fn from_entries(mut entries: Vec<(Duration, A)>) -> Self {
        entries.sort_by_key(|(delay, _)| *delay);
        Self { entries, next: 0 }
    }

    /// Schedule an action. Must not be earlier than anything already fired.
    pub fn push(&mut self, delay: Duration, action: A) {
        let pos = self.entries[self.next..]
            .iter()
            .position(|(d, _)| *d > delay)
            .map(|p| p + self.next)
            .unwrap_or(self.entries.len());
        self.entries.insert(pos, (delay, action));
    }

    /// Delays of the actions that have not fired yet.
    pub fn pending(&self) -> impl Iterator<Item = Duration> + '_ {
        self.entries[self.next..].iter().map(|(d, _)| *d)
    }

    pub fn is_finished(&self) -> bool {
        self.next >= self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<A: Clone> Timeline<A> {
    /// Return every action due at `elapsed` that has not fired yet.
    pub fn drain_due(&mut self, elapsed: Duration) -> Vec<A> {
        let start = self.next;
        while self.next < self.entries.len() && self.entries[self.next].0 <= elapsed {
            self.next += 1;
        }
        self.entries[start..self.next]
            .iter()
            .map(|(_, action)| action.clone())
            .collect()
    }
}
