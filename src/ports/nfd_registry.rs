//! NFD registry port - name resolution and reverse lookup.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::{AlgorandAddress, NfdIdentifier, NfdView};
use crate::domain::format::{NfdPage, NfdRecord};

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("no NFD found")]
    NotFound,
    #[error("the registry rejected the request: {0}")]
    Validation(String),
    #[error("the NFD registry is unreachable: {0}")]
    Unavailable(String),
}

/// Read access to the NFD name registry.
#[async_trait]
pub trait NfdRegistry: Send + Sync {
    /// Resolves an address to its primary NFD record.
    async fn resolve_address(
        &self,
        address: &AlgorandAddress,
        view: NfdView,
    ) -> Result<NfdRecord, LookupError>;

    /// Looks up a record by name or numeric registry id.
    async fn lookup(&self, id: &NfdIdentifier, view: NfdView) -> Result<NfdRecord, LookupError>;

    /// All NFDs owned by an address.
    async fn nfds_for_address(&self, address: &AlgorandAddress) -> Result<NfdPage, LookupError>;
}
