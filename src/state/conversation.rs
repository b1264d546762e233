mod session;
mod state;


pub use session::ChatSession;
pub use state::{
    ConversationState, PendingTurn, SubmitRejected, TurnOutcome, TurnPhase, APOLOGY_MESSAGE,
};
