//! Ports - trait seams between the dialogue core and the outside world.
//!
//! Each port is an async trait with its own error enum. Adapters live
//! under `crate::adapters`; the application layer only ever sees these
//! traits.

mod bridge;
mod metadata_store;
mod nfd_registry;
mod project_directory;
mod quote_service;
mod swap_service;
mod wallet;

pub use bridge::{Bridge, BridgeError};
pub use metadata_store::{MetadataError, MetadataStore};
pub use nfd_registry::{LookupError, NfdRegistry};
pub use project_directory::{DirectoryError, ProjectDirectory};
pub use quote_service::{QuoteError, QuoteService};
pub use swap_service::{SwapError, SwapService};
pub use wallet::{ChainTransaction, Wallet, WalletError};
