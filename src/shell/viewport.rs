//! Rendering surface for the terminal widget.
//!
//! The widget never touches a screen directly; it writes through the
//! [`Viewport`] trait. [`LineBuffer`] is the in-memory surface shared by
//! the TUI and the `run` command.

use unicode_width::UnicodeWidthStr;

use super::line::{LineId, TerminalLine};

/// Operations the terminal widget needs from its rendering surface.
pub trait Viewport {
    /// Insert a line immediately before the input line.
    fn append_line(&mut self, line: TerminalLine) -> LineId;

    /// Replace the text of a previously appended line.
    ///
    /// Returns `false` when the line no longer exists.
    fn update_line(&mut self, id: LineId, text: &str) -> bool;

    /// Remove every line except the input line.
    fn clear_lines(&mut self);

    /// Make the newest line visible.
    fn scroll_to_end(&mut self);

    /// Give keyboard focus to the input line.
    fn focus_input(&mut self);
}

/// The editable input field hosted by the sentinel line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputLine {
    text: String,
    /// Cursor position as a char index
    cursor: usize,
    focused: bool,
}

impl InputLine {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Display width of the text before the cursor.
    pub fn cursor_width(&self) -> usize {
        let byte_idx = self.byte_index(self.cursor);
        self.text[..byte_idx].width()
    }

    pub fn insert(&mut self, c: char) {
        let idx = self.byte_index(self.cursor);
        self.text.insert(idx, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let idx = self.byte_index(self.cursor);
        self.text.remove(idx);
    }

    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let idx = self.byte_index(self.cursor);
            self.text.remove(idx);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_count());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Take the current contents, leaving the field empty.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.text)
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }
}

/// One row of the terminal body, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row<'a> {
    Line(&'a TerminalLine),
    Input(&'a InputLine),
}

/// In-memory line sequence with the input line as its last row.
#[derive(Debug, Clone, Default)]
pub struct LineBuffer {
    lines: Vec<(LineId, TerminalLine)>,
    input: InputLine,
    next_id: u64,
    /// Display rows scrolled back from the end
    scroll_back: usize,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines before the input line, oldest first.
    pub fn lines(&self) -> impl Iterator<Item = &TerminalLine> {
        self.lines.iter().map(|(_, line)| line)
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn get(&self, id: LineId) -> Option<&TerminalLine> {
        self.lines
            .iter()
            .find(|(line_id, _)| *line_id == id)
            .map(|(_, line)| line)
    }

    /// All rows; the input line is always last.
    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.lines
            .iter()
            .map(|(_, line)| Row::Line(line))
            .chain(std::iter::once(Row::Input(&self.input)))
    }

    pub fn input(&self) -> &InputLine {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut InputLine {
        &mut self.input
    }

    pub fn scroll_back(&self) -> usize {
        self.scroll_back
    }

    /// Scroll towards older lines, bounded by `max`.
    pub fn scroll_up(&mut self, rows: usize, max: usize) {
        self.scroll_back = (self.scroll_back + rows).min(max);
    }

    pub fn scroll_down(&mut self, rows: usize) {
        self.scroll_back = self.scroll_back.saturating_sub(rows);
    }

    /// Remove and return all lines, keeping the input line.
    pub fn drain(&mut self) -> Vec<TerminalLine> {
        self.lines.drain(..).map(|(_, line)| line).collect()
    }
}

impl Viewport for LineBuffer {
    fn append_line(&mut self, line: TerminalLine) -> LineId {
        let id = LineId(self.next_id);
        self.next_id += 1;
        self.lines.push((id, line));
        id
    }

    fn update_line(&mut self, id: LineId, text: &str) -> bool {
        match self.lines.iter_mut().find(|(line_id, _)| *line_id == id) {
            Some((_, line)) => {
                line.text.clear();
                line.text.push_str(text);
                true
            }
            None => false,
        }
    }

    fn clear_lines(&mut self) {
        self.lines.clear();
        self.scroll_back = 0;
    }

    fn scroll_to_end(&mut self) {
        self.scroll_back = 0;
    }

    fn focus_input(&mut self) {
        self.input.set_focused(true);
    }
}
