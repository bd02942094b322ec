//! Modal overlay state.
//!
//! At most one overlay is open. It closes on Escape or on a click
//! outside the area it was last drawn in.

use ratatui::layout::{Position, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKind {
    Help,
    ThemePicker,
    ContactForm,
    ProjectDetails,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overlay {
    active: Option<OverlayKind>,
    /// Where the open overlay was last drawn
    area: Option<Rect>,
}

impl Overlay {
    pub fn active(&self) -> Option<OverlayKind> {
        self.active
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// Open `kind`, replacing whatever was open.
    pub fn open(&mut self, kind: OverlayKind) {
        self.active = Some(kind);
        self.area = None;
    }

    pub fn close(&mut self) {
        self.active = None;
        self.area = None;
    }

    /// Record where the open overlay was drawn.
    pub fn set_area(&mut self, area: Rect) {
        if self.active.is_some() {
            self.area = Some(area);
        }
    }

    /// Close the overlay if the click lands outside it.
    ///
    /// Returns true when the click closed it. Clicks before the first
    /// draw are ignored.
    pub fn handle_click(&mut self, column: u16, row: u16) -> bool {
        match self.area {
            Some(area) if !area.contains(Position::new(column, row)) => {
                self.close();
                true
            }
            _ => false,
        }
    }
}
