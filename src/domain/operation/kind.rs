//! Operation kind enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of operations the agent can walk a user through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperationKind {
    MintFungibleToken,
    MintNft,
    TransferNative,
    TransferAsset,
    Swap,
    ResolveNfdName,
    ReverseLookupNfd,
    GetAllNfdsForAddress,
    MintNfdName,
    MintNfdNameNft,
    CrossChainTransfer,
    CrossChainSetPeer,
    GetQuotes,
    SearchProjects,
}

impl OperationKind {
    /// Human-readable label used in summaries and cancellations.
    pub fn label(&self) -> &'static str {
        match self {
            OperationKind::MintFungibleToken => "fungible token mint",
            OperationKind::MintNft => "NFT mint",
            OperationKind::TransferNative => "ALGO transfer",
            OperationKind::TransferAsset => "token transfer",
            OperationKind::Swap => "swap",
            OperationKind::ResolveNfdName => "address-to-NFD lookup",
            OperationKind::ReverseLookupNfd => "NFD name lookup",
            OperationKind::GetAllNfdsForAddress => "NFD listing",
            OperationKind::MintNfdName => "NFD name registration",
            OperationKind::MintNfdNameNft => "NFD name NFT mint",
            OperationKind::CrossChainTransfer => "cross-chain transfer",
            OperationKind::CrossChainSetPeer => "cross-chain peer setup",
            OperationKind::GetQuotes => "quote lookup",
            OperationKind::SearchProjects => "ecosystem project search",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
