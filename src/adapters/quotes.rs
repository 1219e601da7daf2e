//! HTTP adapter for the SimpleSwap currency quote API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::domain::format::Quote;
use crate::ports::{QuoteError, QuoteService};

/// One entry of the upstream currency catalog.
#[derive(Debug, Deserialize)]
struct Currency {
    symbol: String,
    #[serde(rename = "cmcTicker", default)]
    cmc_ticker: Option<String>,
    #[serde(rename = "priceUsdt", default)]
    price_usdt: Option<f64>,
}

impl Currency {
    fn matches(&self, ticker: &str) -> bool {
        self.symbol.eq_ignore_ascii_case(ticker)
            || self
                .cmc_ticker
                .as_deref()
                .is_some_and(|t| t.eq_ignore_ascii_case(ticker))
    }
}

pub struct HttpQuoteService {
    base_url: String,
    client: Client,
}

impl HttpQuoteService {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");
        Self {
            base_url: base_url.into(),
            client,
        }
    }
}

#[async_trait]
impl QuoteService for HttpQuoteService {
    async fn quotes(&self, tickers: &[String]) -> Result<Vec<Quote>, QuoteError> {
        let url = format!(
            "{}/currencies?fixed=false&includeDisabled=false",
            self.base_url.trim_end_matches('/')
        );
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| QuoteError::Unavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(QuoteError::Unavailable(format!(
                "currencies returned {}",
                response.status()
            )));
        }

        let catalog: Vec<Currency> = response
            .json()
            .await
            .map_err(|e| QuoteError::Malformed(e.to_string()))?;

        // Preserve the order tickers were asked in; drop the ones the
        // catalog has no price for.
        let quotes = tickers
            .iter()
            .filter_map(|ticker| {
                catalog
                    .iter()
                    .find(|c| c.matches(ticker))
                    .and_then(|c| c.price_usdt.map(|p| (c, p)))
                    .map(|(c, price_usdt)| Quote {
                        symbol: c.symbol.clone(),
                        price_usdt,
                    })
            })
            .collect();
        Ok(quotes)
    }
}
