//! Simulated command terminal.
//!
//! - [`TerminalWidget`] accepts raw input, dispatches it to a built-in
//!   [`Command`] and renders the reply through a [`Viewport`].
//! - [`LineBuffer`] is the in-memory viewport; its input line is always
//!   the last row.
//! - [`IntroPlayer`] plays the scripted greeting once.

mod clock;
mod command;
mod error;
mod intro;
mod line;
mod viewport;
mod widget;

pub use clock::{Clock, FixedClock, SystemClock};
pub use command::{
    echo, neofetch, Command, Invocation, Reply, CONTACT_TEXT, DATE_FORMAT, ECHO_USAGE, HELP_TEXT,
    SKILLS_TEXT, WHOAMI_TEXT,
};
pub use error::ShellError;
pub use intro::{default_script, IntroPlayer, IntroStep, Reveal, DEFAULT_TYPE_DELAY};
pub use line::{LineId, LineKind, TerminalLine};
pub use viewport::{InputLine, LineBuffer, Row, Viewport};
pub use widget::{TerminalWidget, DEFAULT_PROMPT_MARKER};
