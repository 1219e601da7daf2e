//! Error types for the domain layer.

use thiserror::Error;

/// Errors produced when a slot validator rejects user input.
///
/// These are always recoverable: the state machine re-prompts for the
/// same slot and the pending operation is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlotError {
    #[error("Input cannot be empty")]
    Empty,

    #[error("That doesn't look like a valid Algorand address. Expected 58 Base32 characters (A-Z, 2-7)")]
    InvalidAddress,

    #[error("That doesn't look like an NFD name. Provide a name ending in .algo (e.g., myname.algo) or a numeric ID")]
    InvalidNfdName,

    #[error("Expected a whole number, got '{0}'")]
    NotAnInteger(String),

    #[error("Expected a number between {min} and {max}, got {actual}")]
    OutOfRange { min: u64, max: u64, actual: u64 },

    #[error("Expected a positive amount, got '{0}'")]
    InvalidAmount(String),

    #[error("Expected one of tiny, thumbnail, brief or full, got '{0}'")]
    InvalidView(String),

    #[error("Expected a 0x-prefixed hex address, got '{0}'")]
    InvalidHexAddress(String),

    #[error("Expected yes or no, got '{0}'")]
    NotABool(String),

    #[error("Expected one of {}, got '{actual}'", .options.join(" or "))]
    NotAnOption {
        options: &'static [&'static str],
        actual: String,
    },

    #[error("Input is too long ({actual} characters, maximum {max})")]
    TooLong { max: usize, actual: usize },

    #[error("Provide at least one ticker (e.g., `btc, eth, sol`)")]
    NoTickers,
}
