use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who wrote a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    Bot,
    User,
}

/// One line of the transcript
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub sender: Sender,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn bot(text: impl Into<String>) -> Self {
        Self::new(Sender::Bot, text)
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Sender::User, text)
    }

    fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            sender,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Whether the chat window is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    Closed,
    Open,
}

/// Transcript plus open/closed status of the current session.
///
/// Closing is the only way to drop messages: it clears the transcript and
/// issues a new session token.
#[derive(Debug, Clone)]
pub struct ConversationState {
    session: Uuid,
    status: SessionStatus,
    transcript: Vec<Message>,
}

impl Default for ConversationState {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversationState {
    pub fn new() -> Self {
        Self {
            session: Uuid::new_v4(),
            status: SessionStatus::Closed,
            transcript: Vec::new(),
        }
    }

    pub fn session(&self) -> Uuid {
        self.session
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_open(&self) -> bool {
        self.status == SessionStatus::Open
    }

    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    /// Returns false if the session was already open. The transcript is untouched.
    pub fn open(&mut self) -> bool {
        let was_closed = self.status == SessionStatus::Closed;
        self.status = SessionStatus::Open;
        was_closed
    }

    /// Close, clear the transcript and rotate the session token.
    pub fn close(&mut self) {
        self.status = SessionStatus::Closed;
        self.transcript.clear();
        self.session = Uuid::new_v4();
    }

    pub fn push(&mut self, message: Message) {
        self.transcript.push(message);
    }

    /// Replace the transcript with a single opening message
    pub(crate) fn seed(&mut self, message: Message) {
        self.transcript.clear();
        self.transcript.push(message);
    }
}
