//! Foundation module - shared domain primitives.
//!
//! Contains value objects, identifiers and error types that form the
//! vocabulary of the Trix domain: Algorand addresses, NFD identifiers,
//! view types and the slot validation error.

mod address;
mod errors;
mod ids;
mod nfd;

pub use address::AlgorandAddress;
pub use errors::SlotError;
pub use ids::SessionId;
pub use nfd::{NfdIdentifier, NfdView};
