//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the dialogue core to external systems:
//! - `nfd` - NFD registry REST API
//! - `quotes` - SimpleSwap currency quote API
//! - `projects` - in-memory ecosystem project directory
//! - `swap` - native/token swap REST endpoint
//! - `bridge` - cross-chain bridge REST endpoint
//! - `metadata` - NFT metadata store REST endpoint
//! - `testing` - deterministic doubles used in tests

mod bridge;
mod metadata;
mod nfd;
mod projects;
mod quotes;
mod swap;
pub mod testing;

pub use bridge::HttpBridge;
pub use metadata::HttpMetadataStore;
pub use nfd::HttpNfdRegistry;
pub use projects::StaticProjectDirectory;
pub use quotes::HttpQuoteService;
pub use swap::HttpSwapService;
