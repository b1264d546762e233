use ratatui::layout::{Constraint, Direction, Layout, Rect};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChatLayout {
    pub header: Rect,
    pub history: Rect,
    pub status: Rect,
    pub input: Rect,
}

/// Title row, scrolling history, one status row, then the prompt. The prompt
/// grows with its content but always leaves the history at least one row.
pub fn split_chat_layout(area: Rect, input_rows: u16) -> ChatLayout {
    let max_input = area.height.saturating_sub(3).max(1);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(input_rows.clamp(1, max_input)),
        ])
        .split(area);

    ChatLayout {
        header: chunks[0],
        history: chunks[1],
        status: chunks[2],
        input: chunks[3],
    }
}
