//! Terminal panel: line history plus the input line.

use ratatui::{
    layout::{Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::shell::{InputLine, LineBuffer, LineKind, Row, TerminalLine};
use crate::tui::theme::Theme;

const TITLE: &str = " guest@portfolio: ~ ";
const PLACEHOLDER: &str = "press Tab to type a command";

/// Geometry of the last drawn terminal panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TerminalView {
    /// Panel including its border
    pub area: Rect,
    /// Rows available for history and input
    pub inner: Rect,
    /// Largest useful scroll-back for the current history
    pub max_scroll: usize,
}

/// Split `s` after the last char that fits in `width` cells. Always
/// takes at least one char.
fn split_at_width(s: &str, width: usize) -> (&str, &str) {
    let mut used = 0;
    for (idx, c) in s.char_indices() {
        let w = c.width().unwrap_or(0);
        if used + w > width && idx > 0 {
            return s.split_at(idx);
        }
        used += w;
    }
    (s, "")
}

/// Break `text` into rows at most `width` cells wide, preferring breaks
/// after spaces. Words longer than a row are split.
fn wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 || text.width() <= width {
        return vec![text.to_string()];
    }

    let mut rows = Vec::new();
    let mut row = String::new();
    let mut row_width = 0;
    for word in text.split_inclusive(' ') {
        let mut word = word;
        while !word.is_empty() {
            if row_width + word.width() <= width {
                row.push_str(word);
                row_width += word.width();
                break;
            }
            // trailing spaces may hang past the edge
            let trimmed = word.trim_end_matches(' ');
            if row_width + trimmed.width() <= width {
                row.push_str(trimmed);
                rows.push(std::mem::take(&mut row));
                row_width = 0;
                break;
            }
            if !row.is_empty() {
                rows.push(std::mem::take(&mut row).trim_end_matches(' ').to_string());
                row_width = 0;
                continue;
            }
            let (head, tail) = split_at_width(word, width);
            rows.push(head.to_string());
            word = tail;
        }
    }
    if !row.is_empty() || rows.is_empty() {
        rows.push(row);
    }
    rows
}

fn history_lines(line: &TerminalLine, marker: &str, theme: &Theme, width: usize) -> Vec<Line<'static>> {
    let style = theme.line_style(line.kind);
    let mut lines = Vec::new();
    for (i, part) in line.text.split('\n').enumerate() {
        for (j, row) in wrap(part, width).into_iter().enumerate() {
            let styled = match line.kind {
                LineKind::Prompt if i == 0 && j == 0 && row.starts_with(marker) => Line::from(vec![
                    Span::styled(marker.to_string(), theme.accent_bold_style()),
                    Span::styled(row[marker.len()..].to_string(), style),
                ]),
                _ => Line::from(Span::styled(row, style)),
            };
            lines.push(styled);
        }
    }
    lines
}

fn input_line(input: &InputLine, marker: &str, theme: &Theme) -> Line<'static> {
    let mut spans = vec![
        Span::styled(marker.to_string(), theme.accent_bold_style()),
        Span::raw(" "),
    ];
    if input.text().is_empty() && !input.is_focused() {
        spans.push(Span::styled(PLACEHOLDER, theme.text_secondary_style()));
    } else {
        spans.push(Span::styled(input.text().to_string(), theme.text_style()));
    }
    Line::from(spans)
}

/// Flatten the buffer into display rows wrapped to `width` cells. The
/// input line is always last.
pub fn build_rows(buffer: &LineBuffer, marker: &str, theme: &Theme, width: u16) -> Vec<Line<'static>> {
    let mut rows = Vec::new();
    for row in buffer.rows() {
        match row {
            Row::Line(line) => rows.extend(history_lines(line, marker, theme, width as usize)),
            Row::Input(input) => rows.push(input_line(input, marker, theme)),
        }
    }
    rows
}

pub fn render_terminal(
    frame: &mut Frame,
    area: Rect,
    buffer: &LineBuffer,
    marker: &str,
    theme: &Theme,
) -> TerminalView {
    let border = if buffer.input().is_focused() {
        theme.accent
    } else {
        theme.secondary
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .style(theme.page_style())
        .title(Span::styled(TITLE, theme.text_secondary_style()));
    let inner = block.inner(area);

    let rows = build_rows(buffer, marker, theme, inner.width);
    let height = inner.height as usize;
    let max_scroll = rows.len().saturating_sub(height);
    let back = buffer.scroll_back().min(max_scroll);
    let end = rows.len() - back;
    let start = end.saturating_sub(height);

    frame.render_widget(Paragraph::new(rows[start..end].to_vec()).block(block), area);

    let input = buffer.input();
    if input.is_focused() && back == 0 && inner.width > 0 && inner.height > 0 {
        let row = (end - 1 - start) as u16;
        let offset = (marker.width() + 1 + input.cursor_width()) as u16;
        let x = (inner.x + offset).min(inner.right() - 1);
        frame.set_cursor_position(Position::new(x, inner.y + row));
    }

    TerminalView {
        area,
        inner,
        max_scroll,
    }
}
