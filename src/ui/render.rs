use crate::state::TurnGroup;
use crate::types::{Message, Role};
use crate::ui::input_metrics::{char_display_width, ellipsize, visual_rows, wrap_input};
use crate::ui::markdown::render_markdown;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const MESSAGE_INDENT: &str = "  ";
const PROMPT_PREFIX: &str = "> ";

pub fn input_visual_rows(input: &str, width: usize) -> usize {
    visual_rows(input, width.saturating_sub(PROMPT_PREFIX.len()))
}

fn role_label(message: &Message) -> (&'static str, Style) {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    match message.role {
        Role::User => ("you", bold.fg(Color::Cyan)),
        Role::Assistant if message.is_workflow_error() => {
            ("assistant · error", bold.fg(Color::Red))
        }
        Role::Assistant => ("assistant", bold.fg(Color::Green)),
        Role::System => ("system", bold.fg(Color::Yellow)),
    }
}

fn body_style(message: &Message) -> Style {
    match message.role {
        Role::System => Style::default().fg(Color::Yellow),
        _ => Style::default().fg(Color::White),
    }
}

/// Lines for every group, a blank row between groups, each message tagged
/// with its role and indented under the tag. Already wrapped to `width`.
pub fn conversation_lines(groups: &[TurnGroup<'_>], width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (index, group) in groups.iter().enumerate() {
        if index > 0 {
            lines.push(Line::default());
        }
        for message in &group.messages {
            let (label, label_style) = role_label(message);
            lines.push(Line::from(Span::styled(label, label_style)));

            for line in render_markdown(&message.content, body_style(message)) {
                let mut spans = vec![Span::raw(MESSAGE_INDENT)];
                spans.extend(line.spans);
                lines.push(Line::from(spans));
            }

            if let Some(summary) = message.meta.as_ref().and_then(|meta| meta.summary()) {
                lines.push(Line::from(Span::styled(
                    format!("{MESSAGE_INDENT}{summary}"),
                    Style::default().fg(Color::DarkGray),
                )));
            }
        }
    }

    lines
        .into_iter()
        .flat_map(|line| wrap_line(line, width))
        .collect()
}

/// Hard-wraps a styled line at `width` display columns, keeping span styles.
pub fn wrap_line(line: Line<'static>, width: usize) -> Vec<Line<'static>> {
    let width = width.max(1);
    let mut rows: Vec<Vec<Span<'static>>> = vec![Vec::new()];
    let mut used = 0usize;

    for span in line.spans {
        let mut chunk = String::new();
        for ch in span.content.chars() {
            let ch_width = char_display_width(ch);
            if used + ch_width > width && used > 0 {
                if !chunk.is_empty() {
                    let text = std::mem::take(&mut chunk);
                    if let Some(row) = rows.last_mut() {
                        row.push(Span::styled(text, span.style));
                    }
                }
                rows.push(Vec::new());
                used = 0;
            }
            chunk.push(ch);
            used += ch_width;
        }
        if !chunk.is_empty() {
            if let Some(row) = rows.last_mut() {
                row.push(Span::styled(chunk, span.style));
            }
        }
    }

    rows.into_iter().map(Line::from).collect()
}

pub fn render_header(frame: &mut Frame<'_>, area: Rect, title: &str) {
    if area.height == 0 || area.width == 0 {
        return;
    }
    frame.render_widget(
        Paragraph::new(ellipsize(title, area.width as usize)).style(
            Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(24, 24, 48))
                .add_modifier(Modifier::BOLD),
        ),
        area,
    );
}

pub fn render_conversation(
    frame: &mut Frame<'_>,
    area: Rect,
    lines: Vec<Line<'static>>,
    scroll: usize,
) {
    if area.height == 0 || area.width == 0 {
        return;
    }
    let visible: Vec<Line<'static>> = lines
        .into_iter()
        .skip(scroll)
        .take(area.height as usize)
        .collect();
    frame.render_widget(Paragraph::new(visible), area);
}

pub fn render_status_line(frame: &mut Frame<'_>, area: Rect, status: &str, busy: bool) {
    if area.height == 0 || area.width == 0 {
        return;
    }

    let style = if busy {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    frame.render_widget(
        Paragraph::new(ellipsize(status, area.width as usize)).style(style),
        area,
    );
}

/// Draws the prompt. A disabled prompt is dimmed and gets no cursor.
pub fn render_input(
    frame: &mut Frame<'_>,
    area: Rect,
    input: &str,
    cursor_byte: usize,
    enabled: bool,
) {
    if area.height == 0 || area.width <= 2 {
        return;
    }

    let input_width = (area.width as usize).saturating_sub(PROMPT_PREFIX.len()).max(1);
    let wrapped = wrap_input(input, input_width, cursor_byte);
    let visible_rows = area.height as usize;
    let window_start = wrapped
        .cursor_row
        .saturating_add(1)
        .saturating_sub(visible_rows);

    let rendered: Vec<Line<'static>> = (0..visible_rows)
        .map(|offset| {
            let row_index = window_start + offset;
            let prefix = if row_index == 0 { PROMPT_PREFIX } else { "  " };
            let text = wrapped.lines.get(row_index).cloned().unwrap_or_default();
            Line::from(format!("{prefix}{text}"))
        })
        .collect();

    let mut style = Style::default().fg(Color::Gray).bg(Color::Rgb(24, 24, 24));
    if !enabled {
        style = style.add_modifier(Modifier::DIM);
    }
    frame.render_widget(Paragraph::new(rendered).style(style), area);

    if enabled {
        let cursor_y = area
            .y
            .saturating_add(wrapped.cursor_row.saturating_sub(window_start) as u16);
        let cursor_x = area
            .x
            .saturating_add((PROMPT_PREFIX.len() + wrapped.cursor_col) as u16)
            .min(area.x.saturating_add(area.width.saturating_sub(1)));
        frame.set_cursor_position((cursor_x, cursor_y));
    }
}
