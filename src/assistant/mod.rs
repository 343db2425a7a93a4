//! The embedded support assistant: an ordered keyword table, the dispatcher
//! that walks it, and the conversation it writes into.

pub mod conversation;
pub mod dispatcher;
pub mod host;
pub mod rules;

pub use conversation::{ConversationState, Message, Sender, SessionStatus};
pub use dispatcher::{normalize, DialogueDispatcher};
pub use host::Assistant;
pub use rules::{Intent, IntentRule, IntentRuleTable};
