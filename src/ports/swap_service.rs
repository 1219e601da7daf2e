//! Swap port - native and token swaps through the swap endpoint.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::format::SwapReceipt;

#[derive(Debug, Error)]
pub enum SwapError {
    #[error("the swap endpoint is unreachable: {0}")]
    Unavailable(String),
    #[error("the swap was rejected: {0}")]
    Rejected(String),
}

/// Executes a native or token swap.
#[async_trait]
pub trait SwapService: Send + Sync {
    /// `swap_type` is one of `native` or `token`.
    async fn swap(
        &self,
        swap_type: &str,
        token_id: u64,
        amount: f64,
    ) -> Result<SwapReceipt, SwapError>;
}
