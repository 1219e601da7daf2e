//! Domain layer - pure dialogue logic, no I/O.

pub mod conversation;
pub mod engine;
pub mod format;
pub mod foundation;
pub mod intent;
pub mod operation;
