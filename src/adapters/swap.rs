//! HTTP adapter for the swap endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::format::SwapReceipt;
use crate::ports::{SwapError, SwapService};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SwapRequest<'a> {
    action: &'a str,
    token_id: u64,
    amount: f64,
}

#[derive(Debug, Deserialize)]
struct SwapResponse {
    url: String,
}

#[derive(Debug, Deserialize)]
struct SwapFailure {
    #[serde(default)]
    message: String,
}

pub struct HttpSwapService {
    base_url: String,
    client: Client,
}

impl HttpSwapService {
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
impl SwapService for HttpSwapService {
    async fn swap(
        &self,
        swap_type: &str,
        token_id: u64,
        amount: f64,
    ) -> Result<SwapReceipt, SwapError> {
        let url = format!("{}/native-swap", self.base_url.trim_end_matches('/'));
        let response = self
            .client
            .post(&url)
            .json(&SwapRequest {
                action: swap_type,
                token_id,
                amount,
            })
            .send()
            .await
            .map_err(|e| SwapError::Unavailable(e.to_string()))?;

        let status = response.status();
        if status.is_client_error() {
            let body = response.text().await.unwrap_or_default();
            let failure: SwapFailure = serde_json::from_str(&body).unwrap_or(SwapFailure {
                message: body,
            });
            return Err(SwapError::Rejected(failure.message));
        }
        if !status.is_success() {
            return Err(SwapError::Unavailable(format!("swap endpoint returned {status}")));
        }

        let parsed: SwapResponse = response
            .json()
            .await
            .map_err(|e| SwapError::Unavailable(e.to_string()))?;
        Ok(SwapReceipt { url: parsed.url })
    }
}
