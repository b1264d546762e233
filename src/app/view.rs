use crate::runtime::UiUpdate;
use crate::state::{group_turns, welcome_message, ConversationState, PendingTurn};
use crate::types::Message;
use crate::ui::editor::{InputAction, InputEditor};
use crate::ui::layout::split_chat_layout;
use crate::ui::render::{
    conversation_lines, input_visual_rows, render_conversation, render_header, render_input,
    render_status_line,
};
use crate::ui::scroll::{ScrollAction, ScrollState};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::Frame;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const KEY_HINTS: &str = "Enter send · Shift+Enter newline · PgUp/PgDn scroll · Esc quit";

pub(crate) fn is_quit_command(text: &str) -> bool {
    matches!(text, "/q" | "/quit" | "/exit")
}

#[derive(Debug, PartialEq, Eq)]
pub enum ViewAction {
    None,
    Dispatch(PendingTurn),
    Quit,
}

/// Everything the chat screen shows, without the terminal or the network.
pub struct ChatView {
    title: String,
    welcome: Message,
    conversation: ConversationState,
    editor: InputEditor,
    scroll: ScrollState,
    spinner_frame: usize,
    quit_requested: bool,
}

impl ChatView {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            welcome: welcome_message(),
            conversation: ConversationState::new(),
            editor: InputEditor::new(),
            scroll: ScrollState::default(),
            spinner_frame: 0,
            quit_requested: false,
        }
    }

    pub fn conversation(&self) -> &ConversationState {
        &self.conversation
    }

    pub fn editor(&self) -> &InputEditor {
        &self.editor
    }

    pub fn should_quit(&self) -> bool {
        self.quit_requested
    }

    pub fn handle_event(&mut self, event: Event) -> ViewAction {
        match event {
            Event::Key(key) if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) => {
                self.handle_key(key)
            }
            Event::Paste(_) => {
                let action = self.editor.apply_event(event);
                self.handle_editor_action(action)
            }
            _ => ViewAction::None,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> ViewAction {
        if let Some(action) = scroll_action_for_key(key) {
            self.scroll.apply(action);
            return ViewAction::None;
        }
        let action = self.editor.apply_key(key);
        self.handle_editor_action(action)
    }

    fn handle_editor_action(&mut self, action: InputAction) -> ViewAction {
        match action {
            InputAction::None | InputAction::Edited => ViewAction::None,
            InputAction::Submit(text) => self.submit(text),
            InputAction::Quit => {
                self.quit_requested = true;
                ViewAction::Quit
            }
        }
    }

    pub fn submit(&mut self, text: String) -> ViewAction {
        if is_quit_command(text.trim()) {
            self.quit_requested = true;
            return ViewAction::Quit;
        }

        match self.conversation.begin_turn(text) {
            Ok(pending) => {
                self.editor.set_enabled(false);
                self.spinner_frame = 0;
                self.scroll.follow_tail();
                ViewAction::Dispatch(pending)
            }
            Err(rejected) => {
                tracing::debug!(%rejected, "submission ignored");
                ViewAction::None
            }
        }
    }

    pub fn apply_update(&mut self, update: UiUpdate) {
        match update {
            UiUpdate::TurnFinished(result) => {
                self.conversation.complete_turn(result);
                if self.editor.set_enabled(true) {
                    tracing::trace!("prompt focused");
                }
                self.scroll.follow_tail();
            }
        }
    }

    pub fn tick(&mut self) {
        if self.conversation.is_awaiting_response() {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
        }
    }

    pub fn status_text(&self) -> String {
        if self.conversation.is_awaiting_response() {
            let spinner = SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()];
            return format!("{spinner} waiting for the workflow...");
        }
        match self.conversation.workflow_id() {
            Some(id) => format!("workflow {id} awaiting your answer · {KEY_HINTS}"),
            None => KEY_HINTS.to_string(),
        }
    }

    pub fn draw(&mut self, frame: &mut Frame<'_>) {
        let size = frame.area();
        let input_rows = input_visual_rows(self.editor.buffer(), size.width as usize);
        let layout = split_chat_layout(size, input_rows as u16);

        let groups = group_turns(&self.welcome, self.conversation.messages());
        let lines = conversation_lines(&groups, layout.history.width as usize);
        let offset = self
            .scroll
            .resolve(lines.len(), layout.history.height as usize);

        render_header(frame, layout.header, &self.title);
        render_conversation(frame, layout.history, lines, offset);
        render_status_line(
            frame,
            layout.status,
            &self.status_text(),
            self.conversation.is_awaiting_response(),
        );
        render_input(
            frame,
            layout.input,
            self.editor.buffer(),
            self.editor.cursor(),
            self.editor.is_enabled(),
        );
    }
}

fn scroll_action_for_key(key: KeyEvent) -> Option<ScrollAction> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::PageUp => Some(ScrollAction::PageUp),
        KeyCode::PageDown => Some(ScrollAction::PageDown),
        KeyCode::Up if ctrl => Some(ScrollAction::LineUp),
        KeyCode::Down if ctrl => Some(ScrollAction::LineDown),
        KeyCode::Home if ctrl => Some(ScrollAction::Home),
        KeyCode::End if ctrl => Some(ScrollAction::End),
        _ => None,
    }
}
