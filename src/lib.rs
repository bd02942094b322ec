//! folio - an interactive terminal portfolio
//!
//! The core is [`shell`], a simulated command line with a scripted
//! intro. [`site`] holds the rest of the page (sections, contact form,
//! notifications) and [`tui`] draws it all with ratatui.

pub mod cli;
pub mod config;
pub mod logging;
pub mod preferences;
pub mod schedule;
pub mod shell;
pub mod site;
pub mod tui;

pub use config::Config;
pub use preferences::{ThemeName, ThemeStore};
pub use shell::{LineBuffer, TerminalLine, TerminalWidget};

/// Version string shown by `--version`.
#[cfg(not(feature = "release"))]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    ", built ",
    env!("FOLIO_BUILD_DATE"),
    ")"
);

/// Version string shown by `--version`.
#[cfg(feature = "release")]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (built ",
    env!("FOLIO_BUILD_DATE"),
    ")"
);
