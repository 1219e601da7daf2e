//! Wallet port - signing and submitting chain transactions.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::AlgorandAddress;
use crate::domain::format::TxReceipt;

/// A transaction the wallet can sign and submit.
#[derive(Debug, Clone, PartialEq)]
pub enum ChainTransaction {
    /// Create a fungible or non-fungible asset.
    AssetCreate {
        unit_name: String,
        asset_name: String,
        total: u64,
        decimals: u64,
        /// ARC-3 metadata URL for NFTs; empty for plain tokens.
        url: Option<String>,
    },
    /// Send the native token, in micro units.
    Payment {
        receiver: AlgorandAddress,
        micro_algos: u64,
    },
    /// Send units of an existing asset.
    AssetTransfer {
        receiver: AlgorandAddress,
        asset_id: u64,
        amount: u64,
    },
    /// Register an NFD name through the registry application.
    NfdRegister {
        name: String,
        years: u64,
        reserved_for: AlgorandAddress,
        registry_app_id: u64,
        price_micro_algos: u64,
    },
}

#[derive(Debug, Error)]
pub enum WalletError {
    #[error("no wallet is connected")]
    NotConnected,
    #[error("signing was rejected in the wallet")]
    SigningRejected,
    #[error("network error while submitting: {0}")]
    Network(String),
    #[error("transaction rejected by the chain: {0}")]
    Chain(String),
}

/// Access to the user's connected wallet.
#[async_trait]
pub trait Wallet: Send + Sync {
    /// The connected account, if any.
    async fn connected_address(&self) -> Option<AlgorandAddress>;

    /// Signs and submits one transaction, waiting for confirmation.
    async fn sign_and_submit(&self, tx: ChainTransaction) -> Result<TxReceipt, WalletError>;
}
