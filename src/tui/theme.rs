//! Theme palettes for TUI and CLI
//!
//! Maps each [`ThemeName`] to a palette. Provides both ratatui styles
//! (for the TUI) and ANSI escape codes (for `folio run` output).

use ratatui::style::{Color, Modifier, Style};

use crate::preferences::ThemeName;
use crate::shell::LineKind;

/// Palette for one theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub name: ThemeName,
    /// Page background
    pub background: Color,
    /// Panels, modals and dropdowns
    pub surface: Color,
    /// Primary text color (used for most content)
    pub text_primary: Color,
    /// Secondary/dimmed text color
    pub text_secondary: Color,
    /// Brand color: headings, active nav link, prompt marker
    pub accent: Color,
    /// Second brand color: borders, tags
    pub secondary: Color,
    /// Third brand color: selections
    pub highlight: Color,
    pub error: Color,
    pub success: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::for_name(ThemeName::default())
    }
}

impl Theme {
    pub fn for_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Dark => Self {
                name,
                background: Color::Rgb(15, 15, 35),
                surface: Color::Rgb(26, 26, 46),
                text_primary: Color::Rgb(232, 232, 240),
                text_secondary: Color::Rgb(136, 136, 160),
                accent: Color::Rgb(255, 107, 53),
                secondary: Color::Rgb(78, 205, 196),
                highlight: Color::Rgb(255, 230, 109),
                error: Color::Rgb(255, 85, 85),
                success: Color::Rgb(78, 205, 196),
            },
            ThemeName::Light => Self {
                name,
                background: Color::Rgb(248, 249, 250),
                surface: Color::Rgb(255, 255, 255),
                text_primary: Color::Rgb(33, 37, 41),
                text_secondary: Color::Rgb(108, 117, 125),
                accent: Color::Rgb(230, 90, 40),
                secondary: Color::Rgb(32, 140, 130),
                highlight: Color::Rgb(190, 140, 0),
                error: Color::Rgb(200, 35, 51),
                success: Color::Rgb(25, 135, 84),
            },
            ThemeName::YellowLight => Self {
                name,
                background: Color::Rgb(255, 255, 255),
                surface: Color::Rgb(255, 251, 224),
                text_primary: Color::Rgb(45, 40, 20),
                text_secondary: Color::Rgb(120, 110, 80),
                accent: Color::Rgb(214, 158, 0),
                secondary: Color::Rgb(160, 110, 0),
                highlight: Color::Rgb(255, 200, 0),
                error: Color::Rgb(200, 35, 51),
                success: Color::Rgb(60, 140, 60),
            },
            ThemeName::Synthwave => Self {
                name,
                background: Color::Rgb(36, 27, 47),
                surface: Color::Rgb(52, 41, 79),
                text_primary: Color::Rgb(249, 226, 255),
                text_secondary: Color::Rgb(170, 140, 200),
                accent: Color::Rgb(255, 126, 219),
                secondary: Color::Rgb(54, 249, 246),
                highlight: Color::Rgb(254, 222, 93),
                error: Color::Rgb(254, 68, 80),
                success: Color::Rgb(114, 241, 184),
            },
            ThemeName::Miami => Self {
                name,
                background: Color::Rgb(22, 13, 40),
                surface: Color::Rgb(40, 24, 66),
                text_primary: Color::Rgb(255, 240, 250),
                text_secondary: Color::Rgb(180, 150, 200),
                accent: Color::Rgb(255, 0, 128),
                secondary: Color::Rgb(0, 255, 255),
                highlight: Color::Rgb(255, 204, 0),
                error: Color::Rgb(255, 70, 70),
                success: Color::Rgb(0, 230, 160),
            },
            ThemeName::Arcade => Self {
                name,
                background: Color::Rgb(0, 0, 0),
                surface: Color::Rgb(20, 20, 60),
                text_primary: Color::Rgb(230, 255, 230),
                text_secondary: Color::Rgb(120, 160, 120),
                accent: Color::Rgb(255, 255, 0),
                secondary: Color::Rgb(0, 170, 255),
                highlight: Color::Rgb(255, 60, 60),
                error: Color::Rgb(255, 60, 60),
                success: Color::Rgb(0, 255, 0),
            },
            ThemeName::Neon => Self {
                name,
                background: Color::Rgb(10, 10, 10),
                surface: Color::Rgb(24, 24, 24),
                text_primary: Color::Rgb(240, 240, 240),
                text_secondary: Color::Rgb(140, 140, 140),
                accent: Color::Rgb(57, 255, 20),
                secondary: Color::Rgb(0, 255, 255),
                highlight: Color::Rgb(255, 0, 255),
                error: Color::Rgb(255, 49, 49),
                success: Color::Rgb(57, 255, 20),
            },
        }
    }

    // Style helpers

    /// Base style for the page: primary text on the page background.
    pub fn page_style(&self) -> Style {
        Style::default().fg(self.text_primary).bg(self.background)
    }

    /// Base style for modals and dropdowns.
    pub fn surface_style(&self) -> Style {
        Style::default().fg(self.text_primary).bg(self.surface)
    }

    /// Style for primary text content.
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Style for secondary/dimmed text.
    pub fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Style for accented/highlighted text.
    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Style for bold accented text (headings, keybindings).
    pub fn accent_bold_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for error text.
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Style for success text.
    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success)
    }

    /// Text color for theme picker entries.
    ///
    /// Light themes get dark text on their light dropdown, everything
    /// else gets white.
    pub fn picker_text(&self) -> Color {
        if self.name.is_light() {
            Color::Black
        } else {
            Color::White
        }
    }

    /// Style for a terminal line of the given kind.
    pub fn line_style(&self, kind: LineKind) -> Style {
        match kind {
            LineKind::Prompt => Style::default().fg(self.secondary),
            LineKind::Output => self.text_style(),
            LineKind::Error => self.error_style(),
        }
    }

    // ANSI color helpers for CLI output

    /// Format text with the accent color (for CLI output).
    pub fn accent_text(&self, text: &str) -> String {
        paint(self.accent, text)
    }

    /// Format text with the primary color (for CLI output).
    pub fn primary_text(&self, text: &str) -> String {
        paint(self.text_primary, text)
    }

    /// Format text with the secondary color (for CLI output).
    pub fn secondary_text(&self, text: &str) -> String {
        paint(self.text_secondary, text)
    }

    /// Format text with the error color (for CLI output).
    pub fn error_text(&self, text: &str) -> String {
        paint(self.error, text)
    }

    /// Format text with the success color (for CLI output).
    pub fn success_text(&self, text: &str) -> String {
        paint(self.success, text)
    }

    /// Format a terminal line for CLI output.
    pub fn line_text(&self, kind: LineKind, text: &str) -> String {
        match kind {
            LineKind::Prompt => paint(self.secondary, text),
            LineKind::Output => self.primary_text(text),
            LineKind::Error => self.error_text(text),
        }
    }
}

/// Raw ANSI sequences.
pub mod ansi {
    pub const RESET: &str = "\x1b[0m";
}

fn paint(color: Color, text: &str) -> String {
    format!("{}{}{}", color_to_ansi(color), text, ansi::RESET)
}

/// Convert a ratatui Color to an ANSI foreground escape code.
fn color_to_ansi(color: Color) -> String {
    match color {
        Color::Black => "\x1b[30m".to_string(),
        Color::Red => "\x1b[31m".to_string(),
        Color::Green => "\x1b[32m".to_string(),
        Color::Yellow => "\x1b[33m".to_string(),
        Color::Blue => "\x1b[34m".to_string(),
        Color::Magenta => "\x1b[35m".to_string(),
        Color::Cyan => "\x1b[36m".to_string(),
        Color::Gray => "\x1b[37m".to_string(),
        Color::DarkGray => "\x1b[90m".to_string(),
        Color::White => "\x1b[97m".to_string(),
        Color::Rgb(r, g, b) => format!("\x1b[38;2;{};{};{}m", r, g, b),
        Color::Indexed(i) => format!("\x1b[38;5;{}m", i),
        // Remaining named colors are not used by any palette
        _ => String::new(),
    }
}
