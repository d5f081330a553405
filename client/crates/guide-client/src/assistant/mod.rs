pub(crate) mod assistant;
pub(crate) mod conversation;

pub use assistant::{AskOutcome, Assistant, MSG_EMPTY_QUERY};
pub use conversation::{ChatMessage, Conversation, Sender};
