//! Session state entity.
//!
//! Holds everything carried across turns for one conversation: the
//! append-only turn history and the single pending-operation slot. The
//! pending slot is exactly the mechanism that prevents two multi-step
//! flows from running concurrently in one session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::SessionId;
use crate::domain::operation::PendingOperation;

use super::{ConversationTurn, MessageContent, Role};

/// Complete state of one conversation session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub id: SessionId,
    turns: Vec<ConversationTurn>,
    pending: Option<PendingOperation>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SessionState {
    /// Creates a fresh session with no history and no pending operation.
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: SessionId::new(),
            turns: Vec::new(),
            pending: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Appends a user turn to the history.
    pub fn push_user(&mut self, text: impl Into<String>) {
        self.turns.push(ConversationTurn::user(text));
        self.updated_at = Utc::now();
    }

    /// Appends an assistant turn to the history.
    pub fn push_assistant(&mut self, content: MessageContent) {
        self.turns.push(ConversationTurn::assistant(content));
        self.updated_at = Utc::now();
    }

    /// The ordered turn history, oldest first.
    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    /// The most recent assistant turn, if any.
    pub fn last_assistant(&self) -> Option<&ConversationTurn> {
        self.turns.iter().rev().find(|t| t.role == Role::Assistant)
    }

    /// The in-flight multi-step operation, if one exists.
    pub fn pending(&self) -> Option<&PendingOperation> {
        self.pending.as_ref()
    }

    /// Installs a pending operation, replacing any previous one.
    pub fn set_pending(&mut self, pending: Option<PendingOperation>) {
        self.pending = pending;
        self.updated_at = Utc::now();
    }

    /// Removes and returns the pending operation.
    pub fn take_pending(&mut self) -> Option<PendingOperation> {
        self.updated_at = Utc::now();
        self.pending.take()
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::operation::OperationKind;

    #[test]
    fn new_session_is_empty() {
        let session = SessionState::new();
        assert!(session.turns().is_empty());
        assert!(session.pending().is_none());
    }

    #[test]
    fn history_is_ordered_and_append_only() {
        let mut session = SessionState::new();
        session.push_user("hello");
        session.push_assistant(MessageContent::text("hi there"));
        session.push_user("mint");

        let roles: Vec<Role> = session.turns().iter().map(|t| t.role).collect();
        assert_eq!(roles, vec![Role::User, Role::Assistant, Role::User]);
        assert_eq!(session.last_assistant().unwrap().content.as_text(), "hi there");
    }

    #[test]
    fn pending_slot_holds_at_most_one_operation() {
        let mut session = SessionState::new();
        session.set_pending(Some(PendingOperation::new(OperationKind::TransferNative)));
        session.set_pending(Some(PendingOperation::new(OperationKind::MintFungibleToken)));

        let pending = session.take_pending().unwrap();
        assert_eq!(pending.kind(), OperationKind::MintFungibleToken);
        assert!(session.pending().is_none());
    }
}
