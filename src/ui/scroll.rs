#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollAction {
    LineUp,
    LineDown,
    PageUp,
    PageDown,
    Home,
    End,
}

/// Scroll position of the history pane. While following, the view sticks to
/// the newest rows; any upward scroll stops following until the user returns
/// to the bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollState {
    offset: usize,
    follow: bool,
    max_offset: usize,
    page: usize,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            offset: 0,
            follow: true,
            max_offset: 0,
            page: 1,
        }
    }
}

impl ScrollState {
    pub fn is_following(&self) -> bool {
        self.follow
    }

    pub fn follow_tail(&mut self) {
        self.follow = true;
    }

    /// Fits the position to the current content and viewport and returns the
    /// first row to show.
    pub fn resolve(&mut self, total_rows: usize, viewport_rows: usize) -> usize {
        self.max_offset = total_rows.saturating_sub(viewport_rows);
        self.page = viewport_rows.saturating_sub(1).max(1);
        self.offset = if self.follow {
            self.max_offset
        } else {
            self.offset.min(self.max_offset)
        };
        self.offset
    }

    pub fn apply(&mut self, action: ScrollAction) {
        self.offset = match action {
            ScrollAction::LineUp => self.offset.saturating_sub(1),
            ScrollAction::LineDown => self.offset.saturating_add(1),
            ScrollAction::PageUp => self.offset.saturating_sub(self.page),
            ScrollAction::PageDown => self.offset.saturating_add(self.page),
            ScrollAction::Home => 0,
            ScrollAction::End => self.max_offset,
        }
        .min(self.max_offset);
        self.follow = self.offset >= self.max_offset;
    }
}
