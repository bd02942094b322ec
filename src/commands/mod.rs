//! Subcommand handlers.

pub mod completions;
pub mod config;
pub mod contact;
pub mod open;
pub mod run;
pub mod theme;

use folio::preferences::{resolve_theme, ConfigThemeStore};
use folio::shell::LineKind;
use folio::tui::Theme;

/// Colors CLI output with the stored theme.
///
/// Plain text when stdout is not a terminal or `NO_COLOR` is set.
pub struct Output {
    theme: Theme,
    color: bool,
}

impl Output {
    pub fn detect() -> Self {
        let color = std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout);
        let theme = ConfigThemeStore::open_default()
            .map(|store| Theme::for_name(resolve_theme(&store)))
            .unwrap_or_default();
        Self { theme, color }
    }

    pub fn primary(&self, text: &str) -> String {
        self.paint(text, Theme::primary_text)
    }

    pub fn secondary(&self, text: &str) -> String {
        self.paint(text, Theme::secondary_text)
    }

    pub fn accent(&self, text: &str) -> String {
        self.paint(text, Theme::accent_text)
    }

    pub fn success(&self, text: &str) -> String {
        self.paint(text, Theme::success_text)
    }

    pub fn line(&self, kind: LineKind, text: &str) -> String {
        if self.color {
            self.theme.line_text(kind, text)
        } else {
            text.to_string()
        }
    }

    fn paint(&self, text: &str, style: fn(&Theme, &str) -> String) -> String {
        if self.color {
            style(&self.theme, text)
        } else {
            text.to_string()
        }
    }
}
