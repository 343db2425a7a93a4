use crate::assistant::conversation::{ConversationState, Message};
use crate::assistant::rules::{Intent, IntentRuleTable};
use tracing::debug;

/// Case-fold user text. Punctuation and accents are left alone.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
}

/// Resolves user text against an [`IntentRuleTable`] and answers with the
/// winning intent's reply. Every input gets exactly one answer.
#[derive(Debug, Clone, Default)]
pub struct DialogueDispatcher {
    table: IntentRuleTable,
}

impl DialogueDispatcher {
    pub fn new(table: IntentRuleTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &IntentRuleTable {
        &self.table
    }

    pub fn resolve(&self, text: &str) -> Intent {
        self.table.resolve(&normalize(text))
    }

    /// Append one bot message answering `text`.
    ///
    /// The user's own message is the caller's to record.
    pub fn parse(&self, text: &str, conversation: &mut ConversationState) -> Intent {
        let intent = self.resolve(text);
        debug!("Resolved {:?} to {:?}", text, intent);
        conversation.push(Message::bot(intent.reply()));
        intent
    }
}
