//! HTTP adapter for the cross-chain bridge endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::format::BridgeReceipt;
use crate::ports::{Bridge, BridgeError};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TransferRequest<'a> {
    src_chain_id: u64,
    dest_chain_id: u64,
    amount: f64,
    receiver: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SetPeerRequest {
    src_chain_id: u64,
    dest_chain_id: u64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BridgeResponse {
    tx_hash: String,
}

pub struct HttpBridge {
    base_url: String,
    client: Client,
}

impl HttpBridge {
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

    async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<BridgeReceipt, BridgeError> {
        let url = format!("{}{}", self.base_url.trim_end_matches('/'), path);
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| BridgeError::Unavailable(e.to_string()))?;

        let status = response.status();
        if status.is_client_error() {
            let body = response.text().await.unwrap_or_default();
            return Err(BridgeError::Rejected(body));
        }
        if !status.is_success() {
            return Err(BridgeError::Unavailable(format!("bridge returned {status}")));
        }

        let parsed: BridgeResponse = response
            .json()
            .await
            .map_err(|e| BridgeError::Unavailable(e.to_string()))?;
        Ok(BridgeReceipt {
            tx_hash: parsed.tx_hash,
        })
    }
}

#[async_trait]
impl Bridge for HttpBridge {
    async fn transfer(
        &self,
        src_chain_id: u64,
        dest_chain_id: u64,
        amount: f64,
        receiver_hex: &str,
    ) -> Result<BridgeReceipt, BridgeError> {
        self.post(
            "/transfer",
            &TransferRequest {
                src_chain_id,
                dest_chain_id,
                amount,
                receiver: receiver_hex,
            },
        )
        .await
    }

    async fn set_peer(
        &self,
        src_chain_id: u64,
        dest_chain_id: u64,
    ) -> Result<BridgeReceipt, BridgeError> {
        self.post(
            "/set-peer",
            &SetPeerRequest {
                src_chain_id,
                dest_chain_id,
            },
        )
        .await
    }
}
