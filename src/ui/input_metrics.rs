use unicode_width::UnicodeWidthChar;

/// Prompt text broken into display rows, with the cursor's position in
/// those rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrappedInput {
    pub lines: Vec<String>,
    pub cursor_row: usize,
    pub cursor_col: usize,
}

/// Hard-wraps `input` at `width` display columns and at every newline, and
/// locates `cursor_byte` in the result. A cursor that lands exactly on the
/// right edge moves to the start of the next row.
pub fn wrap_input(input: &str, width: usize, cursor_byte: usize) -> WrappedInput {
    let width = width.max(1);
    let cursor_byte = clamp_to_char_boundary_left(input, cursor_byte);
    let mut lines = vec![String::new()];
    let mut used = 0usize;
    let mut cursor = None;

    for (idx, ch) in input.char_indices() {
        if idx == cursor_byte {
            cursor = Some((lines.len() - 1, used));
        }
        match ch {
            '\r' => {}
            '\n' => {
                lines.push(String::new());
                used = 0;
            }
            _ => {
                let ch_width = char_display_width(ch);
                if used + ch_width > width && used > 0 {
                    lines.push(String::new());
                    used = 0;
                    if idx == cursor_byte {
                        cursor = Some((lines.len() - 1, 0));
                    }
                }
                if let Some(line) = lines.last_mut() {
                    line.push(ch);
                }
                used += ch_width;
            }
        }
    }

    let (mut cursor_row, mut cursor_col) = cursor.unwrap_or((lines.len() - 1, used));
    if cursor_col >= width {
        cursor_row += 1;
        cursor_col = 0;
    }

    WrappedInput {
        lines,
        cursor_row,
        cursor_col,
    }
}

pub fn visual_rows(input: &str, width: usize) -> usize {
    wrap_input(input, width, input.len()).lines.len().max(1)
}

pub fn truncate_to_display_width(text: &str, max_width: usize) -> String {
    let mut out = String::new();
    let mut used = 0usize;
    for ch in text.chars() {
        let ch_width = char_display_width(ch);
        if used + ch_width > max_width {
            break;
        }
        out.push(ch);
        used += ch_width;
    }
    out
}

/// Truncates to `width` columns, marking the cut with "...".
pub fn ellipsize(text: &str, width: usize) -> String {
    if display_width(text) <= width {
        return text.to_string();
    }
    if width < 4 {
        return truncate_to_display_width(text, width);
    }
    let mut out = truncate_to_display_width(text, width - 3);
    out.push_str("...");
    out
}

pub fn char_display_width(ch: char) -> usize {
    UnicodeWidthChar::width(ch).unwrap_or(0)
}

pub fn display_width(text: &str) -> usize {
    text.chars().map(char_display_width).sum()
}

pub fn clamp_to_char_boundary_left(input: &str, cursor: usize) -> usize {
    let mut cursor = cursor.min(input.len());
    while cursor > 0 && !input.is_char_boundary(cursor) {
        cursor -= 1;
    }
    cursor
}
