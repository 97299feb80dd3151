//! Normalized request and streaming chunk shapes
//!
//! The provider-format adapter (external) translates provider-specific
//! JSON into these shapes; the pipeline never sees wire formats.

use serde::{Deserialize, Serialize};

/// A single chat message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Message author role ("user", "assistant", "system")
    pub role: String,
    /// Message text
    pub content: String,
}

impl ChatMessage {
    /// Create a user-authored message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    /// Create an assistant-authored message
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }
}

/// A normalized chat request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Ordered conversation messages
    pub messages: Vec<ChatMessage>,
}

impl ChatRequest {
    /// Build a request from messages
    pub fn new(messages: Vec<ChatMessage>) -> Self {
        Self { messages }
    }

    /// Index of the latest user-authored message, if any
    pub fn last_user_index(&self) -> Option<usize> {
        self.messages.iter().rposition(|m| m.role == "user")
    }
}

/// An incremental chunk of streamed response content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamChunk {
    /// Incremental content text
    pub content: String,
}

impl StreamChunk {
    /// Create a chunk from content
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_user_index() {
        let request = ChatRequest::new(vec![
            ChatMessage {
                role: "system".to_string(),
                content: "be helpful".to_string(),
            },
            ChatMessage::user("first"),
            ChatMessage::assistant("reply"),
            ChatMessage::user("second"),
        ]);

        assert_eq!(request.last_user_index(), Some(3));
        assert_eq!(request.messages[3].content, "second");
    }

    #[test]
    fn test_no_user_message() {
        let request = ChatRequest::new(vec![ChatMessage::assistant("hi")]);
        assert_eq!(request.last_user_index(), None);
    }
}
