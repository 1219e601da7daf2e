//! Conversation turn entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role of a turn's author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    User,
    Assistant,
}

/// An outbound link carried by a structured reply (explorer URL,
/// project website, source repository).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundLink {
    pub label: String,
    pub url: String,
}

impl OutboundLink {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}

/// Display-ready content of a turn: markdown-flavored text, optionally
/// enriched with an image and outbound links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MessageContent {
    Text(String),
    Card {
        text: String,
        image_url: Option<String>,
        links: Vec<OutboundLink>,
    },
}

impl MessageContent {
    pub fn text(text: impl Into<String>) -> Self {
        MessageContent::Text(text.into())
    }

    /// The textual portion of the content, whatever its shape.
    pub fn as_text(&self) -> &str {
        match self {
            MessageContent::Text(text) => text,
            MessageContent::Card { text, .. } => text,
        }
    }
}

/// One turn of the conversation. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: Role,
    pub content: MessageContent,
    pub timestamp: DateTime<Utc>,
}

impl ConversationTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: MessageContent::text(text),
            timestamp: Utc::now(),
        }
    }

    pub fn assistant(content: MessageContent) -> Self {
        Self {
            role: Role::Assistant,
            content,
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_text_reads_both_shapes() {
        assert_eq!(MessageContent::text("hi").as_text(), "hi");

        let card = MessageContent::Card {
            text: "caption".to_string(),
            image_url: Some("ipfs://x".to_string()),
            links: vec![OutboundLink::new("Explorer", "https://example.com")],
        };
        assert_eq!(card.as_text(), "caption");
    }

    #[test]
    fn turn_constructors_assign_roles() {
        assert_eq!(ConversationTurn::user("hello").role, Role::User);
        assert_eq!(
            ConversationTurn::assistant(MessageContent::text("hi")).role,
            Role::Assistant
        );
    }
}
