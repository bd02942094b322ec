//! Static page sections rendered below the terminal.

use ratatui::{
    style::Style,
    text::{Line, Span},
};

use crate::site::{content, Section, PROJECTS};
use crate::tui::theme::Theme;

fn heading(title: &str, theme: &Theme) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(format!("  {}", title), theme.accent_bold_style())),
        Line::from(Span::styled(
            format!("  {}", "\u{2500}".repeat(title.chars().count())),
            Style::default().fg(theme.secondary),
        )),
    ]
}

fn body(text: &str, theme: &Theme) -> Line<'static> {
    Line::from(Span::styled(format!("  {}", text), theme.text_style()))
}

/// Lines of a static section. Home is the terminal and has none.
pub fn section_lines(section: Section, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    match section {
        Section::Home => return lines,
        Section::About => {
            lines.extend(heading("About", theme));
            lines.extend(content::ABOUT.iter().map(|text| body(text, theme)));
        }
        Section::Projects => {
            lines.extend(heading("Projects", theme));
            for project in PROJECTS {
                lines.push(Line::from(vec![
                    Span::styled(format!("  {}", project.title), theme.accent_style()),
                    Span::styled(
                        format!("  [{}]", project.tags.join(", ")),
                        Style::default().fg(theme.secondary),
                    ),
                ]));
                lines.push(body(project.summary, theme));
                lines.push(Line::from(""));
            }
            lines.push(Line::from(Span::styled(
                "  Press F4 for project details.",
                theme.text_secondary_style(),
            )));
        }
        Section::Contact => {
            lines.extend(heading("Contact", theme));
            lines.extend(content::CONTACT.iter().map(|text| body(text, theme)));
        }
    }
    lines.push(Line::from(""));
    lines
}

/// Row count of a static section.
pub fn section_height(section: Section) -> usize {
    section_lines(section, &Theme::default()).len()
}
