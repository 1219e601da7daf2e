//! Metadata store port - NFT metadata upload.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("the metadata store is unreachable: {0}")]
    Unavailable(String),
}

/// Stores an ARC-3 style metadata document and returns its URL.
#[async_trait]
pub trait MetadataStore: Send + Sync {
    async fn store_metadata(
        &self,
        name: &str,
        document: serde_json::Value,
    ) -> Result<String, MetadataError>;
}
