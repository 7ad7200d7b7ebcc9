//! Transient chat session.
//!
//! Holds the message history for one UI session. Nothing is persisted:
//! dropping the conversation discards it.

use tracing::debug;
use uuid::Uuid;

use super::catalog::WELCOME_MESSAGE;
use super::intent::IntentResponder;
use crate::models::{ConversationMessage, Sender};

pub struct Conversation {
    session_id: Uuid,
    responder: IntentResponder,
    messages: Vec<ConversationMessage>,
    next_id: u64,
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

impl Conversation {
    /// Start a conversation with the built-in responder
    pub fn new() -> Self {
        Self::with_responder(IntentResponder::default())
    }

    /// Start a conversation with a custom responder.
    /// The assistant's welcome message is always the first message.
    pub fn with_responder(responder: IntentResponder) -> Self {
        let mut conversation = Self {
            session_id: Uuid::new_v4(),
            responder,
            messages: Vec::new(),
            next_id: 1,
        };
        conversation.push(Sender::Assistant, WELCOME_MESSAGE.to_string());
        conversation
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn messages(&self) -> &[ConversationMessage] {
        &self.messages
    }

    /// Record a user message and the assistant's reply.
    ///
    /// Whitespace-only input is ignored and returns `None`.
    pub fn send(&mut self, text: &str) -> Option<&ConversationMessage> {
        if text.trim().is_empty() {
            return None;
        }

        self.push(Sender::User, text.to_string());
        let reply = self.responder.respond(text).to_string();
        debug!(session = %self.session_id, "assistant replied");
        self.push(Sender::Assistant, reply);

        self.messages.last()
    }

    fn push(&mut self, sender: Sender, text: String) {
        let message = ConversationMessage::new(self.next_id, sender, text);
        self.next_id += 1;
        self.messages.push(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::catalog::ResponseCatalog;
    use crate::assistant::intent::Intent;

    #[test]
    fn test_starts_with_welcome() {
        let conversation = Conversation::new();

        assert_eq!(conversation.messages().len(), 1);
        let first = &conversation.messages()[0];
        assert_eq!(first.id, 1);
        assert_eq!(first.sender, Sender::Assistant);
        assert_eq!(first.text, WELCOME_MESSAGE);
    }

    #[test]
    fn test_send_appends_user_then_reply() {
        let mut conversation = Conversation::new();

        let reply = conversation.send("How much does it cost?").cloned().unwrap();
        assert_eq!(reply.sender, Sender::Assistant);
        assert_eq!(reply.text, ResponseCatalog::default().reply(Intent::Pricing));

        let messages = conversation.messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].sender, Sender::User);
        assert_eq!(messages[1].text, "How much does it cost?");
    }

    #[test]
    fn test_blank_input_ignored() {
        let mut conversation = Conversation::new();

        assert!(conversation.send("").is_none());
        assert!(conversation.send("  \n\t").is_none());
        assert_eq!(conversation.messages().len(), 1);
    }

    #[test]
    fn test_ids_strictly_increase() {
        let mut conversation = Conversation::new();
        conversation.send("hello");
        conversation.send("water");
        conversation.send("xyz");

        let ids: Vec<u64> = conversation.messages().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_sessions_have_distinct_ids() {
        assert_ne!(Conversation::new().session_id(), Conversation::new().session_id());
    }
}
