pub mod conversation;
pub mod groups;

pub use conversation::{
    ChatSession, ConversationState, PendingTurn, SubmitRejected, TurnOutcome, TurnPhase,
    APOLOGY_MESSAGE,
};
pub use groups::{group_turns, welcome_message, TurnGroup, WELCOME_TEXT};
