//! Trix - Conversational agent engine for the Algorand ecosystem.
//!
//! This crate implements the dialogue core behind the Trix assistant:
//! free-text intent classification, multi-turn slot-filling flows for
//! minting, transfers, NFD name operations and cross-chain actions, and
//! formatting of lookup results and transaction receipts into assistant
//! messages.
//!
//! The externally observable contract is a single operation, exposed by
//! [`application::SubmitTurnHandler`]: submit one user turn against a
//! session, receive one assistant message. Wallets, the NFD registry,
//! price aggregators and metadata storage are reached through ports and
//! implemented by adapters.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
