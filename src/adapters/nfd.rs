//! HTTP adapter for the NFD registry REST API.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use crate::domain::foundation::{AlgorandAddress, NfdIdentifier, NfdView};
use crate::domain::format::{NfdPage, NfdRecord};
use crate::ports::{LookupError, NfdRegistry};

/// Upper bound the search endpoint accepts per request.
const SEARCH_LIMIT: u32 = 200;

pub struct HttpNfdRegistry {
    base_url: String,
    client: Client,
}

impl HttpNfdRegistry {
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

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

fn transport(err: reqwest::Error) -> LookupError {
    LookupError::Unavailable(err.to_string())
}

#[async_trait]
impl NfdRegistry for HttpNfdRegistry {
    async fn resolve_address(
        &self,
        address: &AlgorandAddress,
        view: NfdView,
    ) -> Result<NfdRecord, LookupError> {
        let response = self
            .client
            .get(self.url("/nfd/lookup"))
            .query(&[("address", address.as_str()), ("view", view.as_str())])
            .send()
            .await
            .map_err(transport)?;

        match response.status() {
            StatusCode::NOT_FOUND => return Err(LookupError::NotFound),
            status if !status.is_success() => {
                return Err(LookupError::Unavailable(format!(
                    "lookup returned {status}"
                )))
            }
            _ => {}
        }

        // The endpoint returns a map keyed by address. An empty map
        // means the address has no NFD.
        let records: HashMap<String, NfdRecord> = response.json().await.map_err(transport)?;
        if let Some(record) = records.get(address.as_str()) {
            return Ok(record.clone());
        }
        records
            .into_values()
            .next()
            .ok_or(LookupError::NotFound)
    }

    async fn lookup(&self, id: &NfdIdentifier, view: NfdView) -> Result<NfdRecord, LookupError> {
        let response = self
            .client
            .get(self.url(&format!("/nfd/{id}")))
            .query(&[("view", view.as_str())])
            .send()
            .await
            .map_err(transport)?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(LookupError::NotFound),
            StatusCode::BAD_REQUEST => {
                let body = response.text().await.unwrap_or_default();
                Err(LookupError::Validation(body))
            }
            status if !status.is_success() => {
                Err(LookupError::Unavailable(format!("lookup returned {status}")))
            }
            _ => response.json().await.map_err(transport),
        }
    }

    async fn nfds_for_address(&self, address: &AlgorandAddress) -> Result<NfdPage, LookupError> {
        let response = self
            .client
            .get(self.url("/nfd/v2/search"))
            .query(&[
                ("owner", address.as_str()),
                ("state", "owned"),
                ("limit", &SEARCH_LIMIT.to_string()),
            ])
            .send()
            .await
            .map_err(transport)?;

        if !response.status().is_success() {
            return Err(LookupError::Unavailable(format!(
                "search returned {}",
                response.status()
            )));
        }
        response.json().await.map_err(transport)
    }
}
