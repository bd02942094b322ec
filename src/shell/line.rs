//! Rendered terminal records.

use serde::Serialize;

/// Kind of a rendered terminal line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    /// Echo of the text the user submitted
    Prompt,
    /// Successful command result
    Output,
    /// Unrecognized command
    Error,
}

impl LineKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineKind::Prompt => "prompt",
            LineKind::Output => "output",
            LineKind::Error => "error",
        }
    }
}

/// A single rendered record in the terminal body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TerminalLine {
    pub kind: LineKind,
    pub text: String,
}

impl TerminalLine {
    pub fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn prompt(text: impl Into<String>) -> Self {
        Self::new(LineKind::Prompt, text)
    }

    pub fn output(text: impl Into<String>) -> Self {
        Self::new(LineKind::Output, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(LineKind::Error, text)
    }
}

/// Stable handle to a line appended to a viewport.
///
/// Handles are never reused, so a handle to a cleared line stays dead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineId(pub u64);
