//! Page sections and scroll-driven navigation highlighting.

/// Rows below the top of the view used to pick the active section,
/// so a section counts as active slightly before its heading reaches
/// the very top.
pub const HIGHLIGHT_OFFSET: usize = 2;

/// A top-level page section, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Home,
    About,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::About,
        Section::Projects,
        Section::Contact,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Section::Home => 0,
            Section::About => 1,
            Section::Projects => 2,
            Section::Contact => 3,
        }
    }

    /// Following section, wrapping to the first.
    pub fn next(&self) -> Section {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Preceding section, wrapping to the last.
    pub fn prev(&self) -> Section {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Vertical extent of a section on the page, in rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpan {
    pub section: Section,
    pub top: usize,
    pub height: usize,
}

impl SectionSpan {
    pub fn bottom(&self) -> usize {
        self.top + self.height
    }

    pub fn contains(&self, row: usize) -> bool {
        row >= self.top && row < self.bottom()
    }
}

/// Sections stacked top to bottom.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLayout {
    spans: Vec<SectionSpan>,
}

impl PageLayout {
    /// Stack sections in the given order with the given heights.
    pub fn stack(heights: &[(Section, usize)]) -> Self {
        let mut top = 0;
        let spans = heights
            .iter()
            .map(|&(section, height)| {
                let span = SectionSpan {
                    section,
                    top,
                    height,
                };
                top += height;
                span
            })
            .collect();
        Self { spans }
    }

    pub fn spans(&self) -> &[SectionSpan] {
        &self.spans
    }

    pub fn span(&self, section: Section) -> Option<&SectionSpan> {
        self.spans.iter().find(|s| s.section == section)
    }

    pub fn total_height(&self) -> usize {
        self.spans.last().map(SectionSpan::bottom).unwrap_or(0)
    }

    /// Largest useful scroll offset for a view of `view_height` rows.
    pub fn max_scroll(&self, view_height: usize) -> usize {
        self.total_height().saturating_sub(view_height)
    }

    /// Section under the highlight row for the given scroll offset.
    ///
    /// Falls back to [`Section::Home`] when no section contains it.
    pub fn active_section(&self, scroll: usize) -> Section {
        let row = scroll + HIGHLIGHT_OFFSET;
        self.spans
            .iter()
            .find(|span| span.contains(row))
            .map(|span| span.section)
            .unwrap_or_default()
    }

    /// Scroll offset that brings a section to the top of the view.
    pub fn scroll_target(&self, section: Section, view_height: usize) -> usize {
        self.span(section)
            .map(|span| span.top.min(self.max_scroll(view_height)))
            .unwrap_or(0)
    }

    /// Whether any row of `section` is visible in the view.
    pub fn is_visible(&self, section: Section, scroll: usize, view_height: usize) -> bool {
        self.span(section)
            .is_some_and(|span| span.height > 0 && span.top < scroll + view_height && span.bottom() > scroll)
    }
}

/// Collapsible navigation menu used on narrow screens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
    selected: usize,
}

impl NavMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn selected(&self) -> Section {
        Section::ALL[self.selected]
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % Section::ALL.len();
    }

    pub fn select_prev(&mut self) {
        self.selected = (self.selected + Section::ALL.len() - 1) % Section::ALL.len();
    }

    /// Follow the highlighted link, closing the menu.
    pub fn choose(&mut self) -> Section {
        self.open = false;
        self.selected()
    }
}
