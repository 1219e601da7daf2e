//! Records returned by external services.
//!
//! Deserialization is tolerant by design: every field the formatter can
//! live without is optional or defaulted, so a partial upstream record
//! renders as a partial reply instead of an error.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One NFD registry record, reduced to the fields replies use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NfdRecord {
    pub name: String,
    #[serde(rename = "appID", default)]
    pub app_id: Option<u64>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(rename = "depositAccount", default)]
    pub deposit_account: Option<String>,
    #[serde(rename = "timeChanged", default)]
    pub time_changed: Option<String>,
    #[serde(default)]
    pub properties: Option<NfdProperties>,
}

/// User-defined and verified key/value properties of an NFD.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NfdProperties {
    #[serde(rename = "userDefined", default)]
    pub user_defined: BTreeMap<String, String>,
    #[serde(default)]
    pub verified: BTreeMap<String, String>,
}

impl NfdRecord {
    /// A user-defined property, by key.
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties
            .as_ref()
            .and_then(|p| p.user_defined.get(key))
            .map(String::as_str)
    }

    pub fn avatar(&self) -> Option<&str> {
        self.property("avatar").or_else(|| {
            self.properties
                .as_ref()
                .and_then(|p| p.verified.get("avatar"))
                .map(String::as_str)
        })
    }
}

/// One page of NFDs owned by an address, with the full match count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NfdPage {
    #[serde(default)]
    pub nfds: Vec<NfdRecord>,
    #[serde(default)]
    pub total: u64,
}

/// One ecosystem project from the directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
}

/// One spot price quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub symbol: String,
    pub price_usdt: f64,
}

/// Result of a signed and submitted chain transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxReceipt {
    pub tx_id: String,
    /// Set for asset-creating transactions.
    pub asset_id: Option<u64>,
}

/// Result of a settled swap, with the explorer URL the endpoint returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapReceipt {
    pub url: String,
}

/// Result of a cross-chain bridge call on the remote chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeReceipt {
    pub tx_hash: String,
}
