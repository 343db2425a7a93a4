use crate::assistant::conversation::{ConversationState, Message};
use crate::assistant::dispatcher::DialogueDispatcher;
use crate::assistant::rules::Intent;
use crate::config::AppConfig;
use crate::error::AssistantError;
use tracing::{debug, info};

/// The chat widget: opens and closes the conversation, seeds the greeting and
/// routes user messages through the dispatcher.
#[derive(Debug, Clone)]
pub struct Assistant {
    bot_name: String,
    greeting: String,
    dispatcher: DialogueDispatcher,
    state: ConversationState,
}

impl Assistant {
    pub fn new(bot_name: impl Into<String>, greeting: impl Into<String>) -> Self {
        Self {
            bot_name: bot_name.into(),
            greeting: greeting.into(),
            dispatcher: DialogueDispatcher::default(),
            state: ConversationState::new(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.bot_name.clone(), config.greeting.clone())
    }

    pub fn with_dispatcher(mut self, dispatcher: DialogueDispatcher) -> Self {
        self.dispatcher = dispatcher;
        self
    }

    pub fn bot_name(&self) -> &str {
        &self.bot_name
    }

    pub fn state(&self) -> &ConversationState {
        &self.state
    }

    pub fn transcript(&self) -> &[Message] {
        self.state.transcript()
    }

    /// Start the transcript over with a single greeting from `bot_name`
    pub fn initialize_conversation(&mut self, bot_name: &str, greeting: &str) {
        self.bot_name = bot_name.to_string();
        self.greeting = greeting.to_string();
        self.state.seed(Message::bot(greeting));
    }

    /// Show the chat. A fresh session is greeted; a reopened one is left as is.
    pub fn open(&mut self) {
        if !self.state.open() {
            return;
        }
        if self.state.transcript().is_empty() {
            let (name, greeting) = (self.bot_name.clone(), self.greeting.clone());
            self.initialize_conversation(&name, &greeting);
        }
        info!("{} opened session {}", self.bot_name, self.state.session());
    }

    /// Hide the chat and throw the session away
    pub fn close(&mut self) {
        debug!("Closing session {}", self.state.session());
        self.state.close();
    }

    /// Record the user's message, then let the dispatcher answer it.
    pub fn submit_user_message(&mut self, text: &str) -> Result<Intent, AssistantError> {
        if !self.state.is_open() {
            return Err(AssistantError::SessionClosed);
        }
        self.state.push(Message::user(text));
        Ok(self.dispatcher.parse(text, &mut self.state))
    }
}

impl Default for Assistant {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}
