//! Modal overlays and the notification toast.
//!
//! Each render function draws into the centre of `area` and returns the
//! rectangle it used, so the caller can detect clicks outside it.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::preferences::ThemeName;
use crate::site::{ContactForm, Field, Notification, NotificationKind, Project, ProjectLink};
use crate::tui::theme::Theme;
use crate::tui::ui::modal_rect;

/// Key bindings listed in the help modal, grouped by heading.
const HELP_SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Terminal",
        &[
            ("Tab", "Focus the terminal input"),
            ("Enter", "Run the typed command"),
            ("Esc", "Leave the terminal input"),
            ("Shift+PgUp/PgDn", "Scroll terminal history"),
        ],
    ),
    (
        "Page",
        &[
            ("Ctrl+Up/Down", "Previous/next section"),
            ("PgUp/PgDn", "Scroll the page"),
            ("F5", "Section menu"),
        ],
    ),
    (
        "Panels",
        &[
            ("F1", "This help"),
            ("F2", "Choose theme"),
            ("F3", "Contact form"),
            ("F4", "Project details"),
            ("q", "Quit (outside the terminal input)"),
            ("Ctrl+C", "Quit"),
        ],
    ),
];

fn modal_block<'a>(title: &'a str, theme: &Theme) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent))
        .style(theme.surface_style())
        .title(title)
}

/// Build the help text lines.
fn build_help_text(theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled("Keyboard Shortcuts", theme.accent_bold_style())),
        Line::from(""),
    ];
    for (heading, keys) in HELP_SECTIONS {
        lines.push(Line::from(Span::styled(
            heading.to_string(),
            Style::default()
                .fg(theme.secondary)
                .add_modifier(Modifier::BOLD),
        )));
        for (key, desc) in keys.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<18}", key), theme.accent_style()),
                Span::styled(desc.to_string(), theme.text_style()),
            ]));
        }
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        "Press Esc or click outside to close",
        theme.text_secondary_style(),
    )));
    lines
}

pub fn render_help_modal(frame: &mut Frame, area: Rect, theme: &Theme) -> Rect {
    let lines = build_help_text(theme);
    let modal_area = modal_rect(60, lines.len() as u16 + 2, area);

    frame.render_widget(Clear, modal_area);
    let help = Paragraph::new(lines)
        .block(modal_block(" Help ", theme))
        .wrap(Wrap { trim: false });
    frame.render_widget(help, modal_area);
    modal_area
}

/// Theme dropdown. `current` is marked, `selected_idx` is highlighted.
pub fn render_theme_picker(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    current: ThemeName,
    selected_idx: usize,
) -> Rect {
    let modal_area = modal_rect(30, ThemeName::ALL.len() as u16 + 4, area);
    frame.render_widget(Clear, modal_area);

    let text_color = theme.picker_text();
    let mut lines: Vec<Line> = ThemeName::ALL
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let marker = if *name == current { "\u{25cf} " } else { "  " };
            let style = if i == selected_idx {
                Style::default()
                    .fg(theme.background)
                    .bg(theme.highlight)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(text_color)
            };
            Line::from(Span::styled(format!(" {}{:<20}", marker, name.label()), style))
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " Enter: apply | Esc: close",
        theme.text_secondary_style(),
    )));

    let picker = Paragraph::new(lines).block(modal_block(" Theme ", theme));
    frame.render_widget(picker, modal_area);
    modal_area
}

/// Contact form with the focused field highlighted and a block cursor
/// after its value.
pub fn render_contact_form(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    form: &ContactForm,
    focused: Field,
) -> Rect {
    let modal_area = modal_rect(56, 14, area);
    frame.render_widget(Clear, modal_area);

    let mut lines = vec![
        Line::from(Span::styled(
            "Send me a message",
            theme.accent_bold_style(),
        )),
        Line::from(""),
    ];
    for field in Field::ALL {
        let label_style = if field == focused {
            theme.accent_bold_style()
        } else {
            theme.text_secondary_style()
        };
        let value = form.field(field);
        let shown = if field == focused {
            format!("{}\u{2588}", value)
        } else {
            value.to_string()
        };
        lines.push(Line::from(Span::styled(field.label().to_string(), label_style)));
        lines.push(Line::from(Span::styled(
            format!("  {}", tail_fit(&shown, modal_area.width.saturating_sub(6) as usize)),
            theme.text_style(),
        )));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        "Tab: next field | Enter: send | Esc: close",
        theme.text_secondary_style(),
    )));

    let modal = Paragraph::new(lines).block(modal_block(" Contact ", theme));
    frame.render_widget(modal, modal_area);
    modal_area
}

/// Keep the end of `text` visible within `width` columns.
fn tail_fit(text: &str, width: usize) -> &str {
    let mut start = 0;
    while text[start..].width() > width {
        match text[start..].chars().next() {
            Some(c) => start += c.len_utf8(),
            None => break,
        }
    }
    &text[start..]
}

/// Project list with the selected project's details.
pub fn render_project_details(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    projects: &[Project],
    selected_idx: usize,
) -> Rect {
    let modal_area = modal_rect(64, 20, area);
    frame.render_widget(Clear, modal_area);

    let mut lines = Vec::new();
    for (i, project) in projects.iter().enumerate() {
        let style = if i == selected_idx {
            Style::default()
                .fg(theme.background)
                .bg(theme.highlight)
                .add_modifier(Modifier::BOLD)
        } else {
            theme.text_style()
        };
        lines.push(Line::from(Span::styled(format!(" {} ", project.title), style)));
    }
    lines.push(Line::from(""));

    if let Some(project) = projects.get(selected_idx) {
        lines.push(Line::from(Span::styled(
            project.summary.to_string(),
            theme.accent_style(),
        )));
        lines.push(Line::from(Span::styled(
            project.tags.join(" \u{00b7} "),
            Style::default().fg(theme.secondary),
        )));
        lines.push(Line::from(""));
        for detail in project.details {
            lines.push(Line::from(Span::styled(detail.to_string(), theme.text_style())));
        }
        lines.push(Line::from(""));
        let action = match project.link {
            ProjectLink::Url(_) => "Enter: open link",
            ProjectLink::DemoPending => "Enter: view demo",
            ProjectLink::ComingSoon => "Enter: check status",
        };
        lines.push(Line::from(Span::styled(
            format!("Up/Down: select | {} | Esc: close", action),
            theme.text_secondary_style(),
        )));
    }

    let modal = Paragraph::new(lines)
        .block(modal_block(" Projects ", theme))
        .wrap(Wrap { trim: false });
    frame.render_widget(modal, modal_area);
    modal_area
}

/// Toast in the top-right corner of `area`.
pub fn render_notification(frame: &mut Frame, area: Rect, theme: &Theme, notification: &Notification) {
    let color = match notification.kind {
        NotificationKind::Info => theme.secondary,
        NotificationKind::Success => theme.success,
        NotificationKind::Error => theme.error,
    };
    let width = (notification.message.width() as u16 + 4)
        .min(area.width.saturating_sub(2))
        .max(10.min(area.width));
    let height = 3.min(area.height);
    let x = area.x + area.width.saturating_sub(width + 1);
    let toast_area = Rect::new(x, area.y, width, height);

    frame.render_widget(Clear, toast_area);
    let toast = Paragraph::new(notification.message.clone())
        .style(theme.surface_style())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );
    frame.render_widget(toast, toast_area);
}
