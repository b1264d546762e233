use crate::types::{Message, Role};

pub const WELCOME_TEXT: &str = "Hello! I’m your **Project & Case Study Intelligence Assistant**. \
I can help you find **specific project matches** based on technology stacks or retrieve \
**relevant case studies** to support your proposals. What are you looking for today?";

/// The greeting shown as the first group. Never stored in the conversation.
pub fn welcome_message() -> Message {
    Message::assistant(WELCOME_TEXT)
}

/// One user message and everything that answered it. The first group holds
/// the welcome message instead of a user message.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnGroup<'a> {
    pub messages: Vec<&'a Message>,
}

impl TurnGroup<'_> {
    pub fn opener(&self) -> Option<&Message> {
        self.messages.first().copied()
    }

    pub fn is_user_turn(&self) -> bool {
        self.opener().is_some_and(|message| message.role == Role::User)
    }
}

/// Splits `messages` into turn groups, starting a new group at every user
/// message. The welcome group always comes first; replies that precede any
/// user message attach to it.
pub fn group_turns<'a>(welcome: &'a Message, messages: &'a [Message]) -> Vec<TurnGroup<'a>> {
    let mut groups = vec![TurnGroup {
        messages: vec![welcome],
    }];
    for message in messages {
        if message.role == Role::User {
            groups.push(TurnGroup {
                messages: vec![message],
            });
        } else if let Some(current) = groups.last_mut() {
            current.messages.push(message);
        }
    }
    groups
}
