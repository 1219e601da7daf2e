//! HTTP adapter for the NFT metadata store.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::ports::{MetadataError, MetadataStore};

#[derive(Debug, Serialize)]
struct UploadRequest {
    name: String,
    metadata: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    url: String,
}

pub struct HttpMetadataStore {
    base_url: String,
    client: Client,
}

impl HttpMetadataStore {
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
impl MetadataStore for HttpMetadataStore {
    async fn store_metadata(
        &self,
        name: &str,
        document: serde_json::Value,
    ) -> Result<String, MetadataError> {
        let url = format!("{}/metadata", self.base_url.trim_end_matches('/'));
        let response = self
            .client
            .post(&url)
            .json(&UploadRequest {
                name: name.to_string(),
                metadata: document,
            })
            .send()
            .await
            .map_err(|e| MetadataError::Unavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(MetadataError::Unavailable(format!(
                "metadata store returned {}",
                response.status()
            )));
        }

        let parsed: UploadResponse = response
            .json()
            .await
            .map_err(|e| MetadataError::Unavailable(e.to_string()))?;
        Ok(parsed.url)
    }
}
