//! Append-only conversation log
//!
//! The log is the single owner of conversation history: turns are never
//! removed, edited, or reordered after insertion, and the sequence length
//! only grows. Chronological order is insertion order.

use crate::backend::ChatTurn;
use serde::{Deserialize, Serialize};

/// Role tag for one entry in the conversation log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnKind {
    /// Something the user submitted
    User,
    /// A reply from the chat service, or an ingested document transcript
    Assistant,
    /// Client-side banner (ingestion summaries)
    System,
    /// A visible failure notice
    Error,
}

/// One immutable entry in the conversation log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// Role of the entry
    pub kind: TurnKind,
    /// Content of the entry
    pub content: String,
}

impl Turn {
    /// Creates a user turn
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            kind: TurnKind::User,
            content: content.into(),
        }
    }

    /// Creates an assistant turn
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            kind: TurnKind::Assistant,
            content: content.into(),
        }
    }

    /// Creates a system turn
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            kind: TurnKind::System,
            content: content.into(),
        }
    }

    /// Creates an error turn
    pub fn error(content: impl Into<String>) -> Self {
        Self {
            kind: TurnKind::Error,
            content: content.into(),
        }
    }
}

/// Ordered, append-only sequence of turns
///
/// # Examples
///
/// ```
/// use studyhall::session::log::{ConversationLog, Turn};
///
/// let mut log = ConversationLog::new();
/// log.append(Turn::user("What is entropy?"));
/// log.append(Turn::assistant("Entropy is a measure of disorder."));
/// assert_eq!(log.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConversationLog {
    turns: Vec<Turn>,
}

impl ConversationLog {
    /// Creates an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a turn; the only mutation the log supports
    pub fn append(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    /// Number of turns in the log
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Whether the log holds no turns yet
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// All turns in insertion order
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// The most recently appended turn
    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    /// Build the role-tagged dispatch payload for a pending submission
    ///
    /// Maps every prior user/assistant turn to a wire entry in log order and
    /// appends `pending` as the final user entry. System and error turns are
    /// excluded from the payload but remain visible in the log.
    pub fn chat_payload(&self, pending: &str) -> Vec<ChatTurn> {
        let mut payload: Vec<ChatTurn> = self
            .turns
            .iter()
            .filter_map(|turn| match turn.kind {
                TurnKind::User => Some(ChatTurn::user(&turn.content)),
                TurnKind::Assistant => Some(ChatTurn::assistant(&turn.content)),
                TurnKind::System | TurnKind::Error => None,
            })
            .collect();
        payload.push(ChatTurn::user(pending));
        payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_log() {
        let log = ConversationLog::new();
        assert!(log.is_empty());
        assert_eq!(log.len(), 0);
        assert!(log.last().is_none());
    }

    #[test]
    fn test_append_preserves_insertion_order() {
        let mut log = ConversationLog::new();
        log.append(Turn::user("first"));
        log.append(Turn::assistant("second"));
        log.append(Turn::error("third"));

        let turns = log.turns();
        assert_eq!(turns.len(), 3);
        assert_eq!(turns[0].content, "first");
        assert_eq!(turns[1].content, "second");
        assert_eq!(turns[2].content, "third");
        assert_eq!(log.last().unwrap().kind, TurnKind::Error);
    }

    #[test]
    fn test_chat_payload_on_empty_log() {
        let log = ConversationLog::new();
        let payload = log.chat_payload("What is entropy?");
        assert_eq!(payload.len(), 1);
        assert_eq!(payload[0], ChatTurn::user("What is entropy?"));
    }

    #[test]
    fn test_chat_payload_excludes_system_and_error_turns() {
        let mut log = ConversationLog::new();
        log.append(Turn::user("question"));
        log.append(Turn::assistant("answer"));
        log.append(Turn::system("Successfully processed notes.pdf"));
        log.append(Turn::error("Sorry, there was an error processing your message."));

        let payload = log.chat_payload("follow-up");
        assert_eq!(payload.len(), 3);
        assert_eq!(payload[0].role, "user");
        assert_eq!(payload[1].role, "assistant");
        assert_eq!(payload[2], ChatTurn::user("follow-up"));
    }

    #[test]
    fn test_chat_payload_keeps_log_order() {
        let mut log = ConversationLog::new();
        log.append(Turn::user("a"));
        log.append(Turn::assistant("b"));
        log.append(Turn::user("c"));
        log.append(Turn::assistant("d"));

        let payload = log.chat_payload("e");
        let contents: Vec<&str> = payload.iter().map(|t| t.content.as_str()).collect();
        assert_eq!(contents, vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_turn_kind_serializes_lowercase() {
        let json = serde_json::to_string(&TurnKind::Assistant).unwrap();
        assert_eq!(json, "\"assistant\"");
        let json = serde_json::to_string(&Turn::error("boom")).unwrap();
        assert_eq!(json, r#"{"kind":"error","content":"boom"}"#);
    }
}
