use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug)]
pub struct InputState {
    pub buffer: String,
    pub cursor: usize,
    pub enabled: bool,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
            enabled: true,
        }
    }
}

/// Multi-line prompt editor. Enter submits; Shift+Enter, Alt+Enter and
/// Ctrl+J insert a newline. While disabled it ignores everything except
/// quit keys.
#[derive(Debug, Default)]
pub struct InputEditor {
    pub input_state: InputState,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    None,
    Edited,
    Submit(String),
    Quit,
}

impl InputEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn buffer(&self) -> &str {
        &self.input_state.buffer
    }

    pub fn cursor(&self) -> usize {
        self.input_state.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.input_state.buffer.is_empty()
    }

    pub fn is_enabled(&self) -> bool {
        self.input_state.enabled
    }

    /// Returns true when the editor just became enabled again, i.e. the
    /// caller should give it focus.
    pub fn set_enabled(&mut self, enabled: bool) -> bool {
        let regained = enabled && !self.input_state.enabled;
        self.input_state.enabled = enabled;
        regained
    }

    fn clamp_cursor(&self, idx: usize) -> usize {
        crate::ui::input_metrics::clamp_to_char_boundary_left(&self.input_state.buffer, idx)
    }

    fn prev_char_boundary(&self, idx: usize) -> usize {
        let buffer = &self.input_state.buffer;
        let idx = self.clamp_cursor(idx);
        buffer[..idx]
            .char_indices()
            .next_back()
            .map_or(0, |(start, _)| start)
    }

    fn next_char_boundary(&self, idx: usize) -> usize {
        let buffer = &self.input_state.buffer;
        let idx = self.clamp_cursor(idx);
        buffer[idx..]
            .chars()
            .next()
            .map_or(buffer.len(), |ch| idx + ch.len_utf8())
    }

    pub fn insert_str(&mut self, value: &str) {
        let cursor = self.clamp_cursor(self.input_state.cursor);
        self.input_state.buffer.insert_str(cursor, value);
        self.input_state.cursor = cursor + value.len();
    }

    pub fn backspace(&mut self) -> bool {
        let end = self.clamp_cursor(self.input_state.cursor);
        if end == 0 {
            return false;
        }
        let start = self.prev_char_boundary(end);
        self.input_state.buffer.replace_range(start..end, "");
        self.input_state.cursor = start;
        true
    }

    pub fn delete(&mut self) -> bool {
        let start = self.clamp_cursor(self.input_state.cursor);
        if start >= self.input_state.buffer.len() {
            return false;
        }
        let end = self.next_char_boundary(start);
        self.input_state.buffer.replace_range(start..end, "");
        self.input_state.cursor = start;
        true
    }

    /// Takes the buffer for sending exactly as typed. An empty buffer is
    /// not sent.
    pub fn submit(&mut self) -> Option<String> {
        if self.input_state.buffer.is_empty() {
            return None;
        }
        self.input_state.cursor = 0;
        Some(std::mem::take(&mut self.input_state.buffer))
    }

    pub fn apply_event(&mut self, event: Event) -> InputAction {
        match event {
            Event::Paste(text) if self.input_state.enabled && !text.is_empty() => {
                self.insert_str(&text);
                InputAction::Edited
            }
            Event::Key(key) => self.apply_key(key),
            _ => InputAction::None,
        }
    }

    pub fn apply_key(&mut self, key: KeyEvent) -> InputAction {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => return InputAction::Quit,
            KeyCode::Char('d') if ctrl && self.input_state.buffer.is_empty() => {
                return InputAction::Quit;
            }
            KeyCode::Esc => return InputAction::Quit,
            _ => {}
        }

        if !self.input_state.enabled {
            return InputAction::None;
        }

        let newline_modifier =
            key.modifiers.intersects(KeyModifiers::SHIFT | KeyModifiers::ALT);
        let edited = match key.code {
            KeyCode::Char('j') if ctrl => {
                self.insert_str("\n");
                true
            }
            KeyCode::Enter if newline_modifier => {
                self.insert_str("\n");
                true
            }
            KeyCode::Enter => {
                return match self.submit() {
                    Some(value) => InputAction::Submit(value),
                    None => InputAction::None,
                };
            }
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => {
                self.input_state.cursor = self.prev_char_boundary(self.input_state.cursor);
                true
            }
            KeyCode::Right => {
                self.input_state.cursor = self.next_char_boundary(self.input_state.cursor);
                true
            }
            KeyCode::Home => {
                self.input_state.cursor = 0;
                true
            }
            KeyCode::End => {
                self.input_state.cursor = self.input_state.buffer.len();
                true
            }
            KeyCode::Char(_) if ctrl => false,
            KeyCode::Char(ch) => {
                let mut encoded = [0u8; 4];
                self.insert_str(ch.encode_utf8(&mut encoded));
                true
            }
            _ => false,
        };

        if edited {
            InputAction::Edited
        } else {
            InputAction::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(editor: &mut InputEditor, text: &str) {
        for ch in text.chars() {
            editor.apply_key(key(KeyCode::Char(ch)));
        }
    }

    #[test]
    fn enter_submits_and_clears() {
        let mut editor = InputEditor::new();
        type_text(&mut editor, "EU");
        assert_eq!(
            editor.apply_key(key(KeyCode::Enter)),
            InputAction::Submit("EU".to_string())
        );
        assert!(editor.is_empty());
        assert_eq!(editor.cursor(), 0);
    }

    #[test]
    fn enter_on_empty_buffer_is_a_no_op() {
        let mut editor = InputEditor::new();
        assert_eq!(editor.apply_key(key(KeyCode::Enter)), InputAction::None);
        assert!(editor.is_empty());
    }

    #[test]
    fn shift_enter_and_ctrl_j_insert_newlines() {
        let mut editor = InputEditor::new();
        type_text(&mut editor, "a");
        editor.apply_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::SHIFT));
        type_text(&mut editor, "b");
        editor.apply_key(KeyEvent::new(KeyCode::Char('j'), KeyModifiers::CONTROL));
        type_text(&mut editor, "c");
        assert_eq!(editor.buffer(), "a\nb\nc");

        assert_eq!(
            editor.apply_key(key(KeyCode::Enter)),
            InputAction::Submit("a\nb\nc".to_string())
        );
    }

    #[test]
    fn submit_sends_buffer_verbatim() {
        let mut editor = InputEditor::new();
        editor.insert_str("line one\n");
        assert_eq!(
            editor.apply_key(key(KeyCode::Enter)),
            InputAction::Submit("line one\n".to_string())
        );
        assert!(editor.is_empty());

        editor.insert_str("\n");
        assert_eq!(
            editor.apply_key(key(KeyCode::Enter)),
            InputAction::Submit("\n".to_string())
        );
        assert!(editor.is_empty());
        assert_eq!(editor.cursor(), 0);
    }

    #[test]
    fn disabled_editor_ignores_typing_and_submit() {
        let mut editor = InputEditor::new();
        type_text(&mut editor, "draft");
        editor.set_enabled(false);

        assert_eq!(editor.apply_key(key(KeyCode::Char('x'))), InputAction::None);
        assert_eq!(editor.apply_key(key(KeyCode::Enter)), InputAction::None);
        assert_eq!(
            editor.apply_event(Event::Paste("pasted".to_string())),
            InputAction::None
        );
        assert_eq!(editor.buffer(), "draft");
        assert_eq!(
            editor.apply_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            InputAction::Quit
        );
    }

    #[test]
    fn set_enabled_reports_regained_focus_once() {
        let mut editor = InputEditor::new();
        assert!(!editor.set_enabled(true));
        assert!(!editor.set_enabled(false));
        assert!(editor.set_enabled(true));
        assert!(!editor.set_enabled(true));
    }

    #[test]
    fn cursor_moves_over_multibyte_chars() {
        let mut editor = InputEditor::new();
        type_text(&mut editor, "aé🙂");
        editor.apply_key(key(KeyCode::Left));
        assert_eq!(editor.cursor(), "aé".len());
        editor.apply_key(key(KeyCode::Backspace));
        assert_eq!(editor.buffer(), "a🙂");
        editor.apply_key(key(KeyCode::Home));
        editor.apply_key(key(KeyCode::Delete));
        assert_eq!(editor.buffer(), "🙂");
    }

    #[test]
    fn ctrl_d_quits_only_on_empty_buffer() {
        let mut editor = InputEditor::new();
        let ctrl_d = KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL);
        type_text(&mut editor, "x");
        assert_eq!(editor.apply_key(ctrl_d), InputAction::None);
        editor.apply_key(key(KeyCode::Backspace));
        assert_eq!(editor.apply_key(ctrl_d), InputAction::Quit);
    }
}
