//! Quote service port - spot prices for ticker symbols.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::format::Quote;

#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("the quote service is unreachable: {0}")]
    Unavailable(String),
    #[error("the quote service returned an unexpected payload: {0}")]
    Malformed(String),
}

/// Spot price lookup. Unknown tickers are skipped, not errors.
#[async_trait]
pub trait QuoteService: Send + Sync {
    async fn quotes(&self, tickers: &[String]) -> Result<Vec<Quote>, QuoteError>;
}
