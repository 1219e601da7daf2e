//! Bridge port - cross-chain transfers and peer wiring.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::format::BridgeReceipt;

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("the bridge endpoint is unreachable: {0}")]
    Unavailable(String),
    #[error("the bridge rejected the request: {0}")]
    Rejected(String),
}

/// Cross-chain messaging bridge.
#[async_trait]
pub trait Bridge: Send + Sync {
    /// Moves tokens from one chain to another.
    async fn transfer(
        &self,
        src_chain_id: u64,
        dest_chain_id: u64,
        amount: f64,
        receiver_hex: &str,
    ) -> Result<BridgeReceipt, BridgeError>;

    /// Wires two chains as peers so transfers between them can settle.
    async fn set_peer(
        &self,
        src_chain_id: u64,
        dest_chain_id: u64,
    ) -> Result<BridgeReceipt, BridgeError>;
}
