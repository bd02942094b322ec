//! Top navigation bar and the collapsed section menu.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::site::{NavMenu, Section};
use crate::tui::theme::Theme;

/// Below this width the section links collapse into the F5 menu.
pub const NARROW_WIDTH: u16 = 64;

const BRAND: &str = " Lukas Kanopka ";

pub fn is_narrow(width: u16) -> bool {
    width < NARROW_WIDTH
}

fn link_style(section: Section, active: Section, theme: &Theme) -> Style {
    if section == active {
        theme.accent_bold_style().add_modifier(Modifier::UNDERLINED)
    } else {
        theme.text_style()
    }
}

pub fn build_nav_line(active: Section, narrow: bool, theme: &Theme) -> Line<'static> {
    let mut spans = vec![Span::styled(BRAND, theme.accent_bold_style()), Span::raw("  ")];
    if narrow {
        spans.push(Span::styled(
            format!("\u{2261} {} (F5)", active.label()),
            theme.text_style(),
        ));
    } else {
        for section in Section::ALL {
            spans.push(Span::styled(section.label(), link_style(section, active, theme)));
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            format!("\u{25d0} {} (F2)", theme.name.label()),
            theme.text_secondary_style(),
        ));
    }
    Line::from(spans)
}

pub fn render_nav_bar(frame: &mut Frame, area: Rect, active: Section, theme: &Theme) {
    let line = build_nav_line(active, is_narrow(area.width), theme);
    frame.render_widget(
        Paragraph::new(line).style(Style::default().bg(theme.surface)),
        area,
    );
}

/// Dropdown anchored to the top-left of `area`.
pub fn render_nav_menu(frame: &mut Frame, area: Rect, menu: &NavMenu, active: Section, theme: &Theme) -> Rect {
    let width = 20.min(area.width);
    let height = (Section::ALL.len() as u16 + 2).min(area.height);
    let menu_area = Rect::new(area.x, area.y, width, height);

    let lines: Vec<Line> = Section::ALL
        .iter()
        .map(|section| {
            let style = if *section == menu.selected() {
                Style::default()
                    .fg(theme.background)
                    .bg(theme.highlight)
                    .add_modifier(Modifier::BOLD)
            } else {
                link_style(*section, active, theme)
            };
            Line::from(Span::styled(format!(" {:<16}", section.label()), style))
        })
        .collect();

    frame.render_widget(Clear, menu_area);
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.accent))
                .style(theme.surface_style()),
        ),
        menu_area,
    );
    menu_area
}
