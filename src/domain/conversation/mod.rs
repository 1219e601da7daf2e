//! Conversation module - turn history and per-session state.

mod message;
mod session;

pub use message::{ConversationTurn, MessageContent, OutboundLink, Role};
pub use session::SessionState;
