//! Deterministic test doubles for the ports.
//!
//! Used by inline unit tests and the integration suite; none of these
//! touch the network.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::foundation::{AlgorandAddress, NfdIdentifier, NfdView};
use crate::domain::format::{BridgeReceipt, NfdPage, NfdRecord, Quote, SwapReceipt, TxReceipt};
use crate::ports::{
    Bridge, BridgeError, ChainTransaction, LookupError, MetadataError, MetadataStore, NfdRegistry,
    QuoteError, QuoteService, SwapError, SwapService, Wallet, WalletError,
};

/// Wallet double that records every submission.
pub struct MockWallet {
    address: Option<AlgorandAddress>,
    reject_signing: bool,
    submissions: Mutex<Vec<ChainTransaction>>,
}

impl MockWallet {
    pub fn connected(address: AlgorandAddress) -> Self {
        Self {
            address: Some(address),
            reject_signing: false,
            submissions: Mutex::new(Vec::new()),
        }
    }

    pub fn disconnected() -> Self {
        Self {
            address: None,
            reject_signing: false,
            submissions: Mutex::new(Vec::new()),
        }
    }

    pub fn rejecting(address: AlgorandAddress) -> Self {
        Self {
            address: Some(address),
            reject_signing: true,
            submissions: Mutex::new(Vec::new()),
        }
    }

    /// Everything submitted so far, in order.
    pub fn submissions(&self) -> Vec<ChainTransaction> {
        self.submissions.lock().unwrap().clone()
    }
}

#[async_trait]
impl Wallet for MockWallet {
    async fn connected_address(&self) -> Option<AlgorandAddress> {
        self.address.clone()
    }

    async fn sign_and_submit(&self, tx: ChainTransaction) -> Result<TxReceipt, WalletError> {
        if self.address.is_none() {
            return Err(WalletError::NotConnected);
        }
        if self.reject_signing {
            return Err(WalletError::SigningRejected);
        }
        let asset_id = match &tx {
            ChainTransaction::AssetCreate { .. } => Some(7777),
            _ => None,
        };
        let mut submissions = self.submissions.lock().unwrap();
        submissions.push(tx);
        Ok(TxReceipt {
            tx_id: format!("MOCKTX{}", submissions.len()),
            asset_id,
        })
    }
}

/// Map-backed NFD registry.
#[derive(Default)]
pub struct InMemoryNfdRegistry {
    by_name: HashMap<String, NfdRecord>,
    by_id: HashMap<u64, NfdRecord>,
    by_address: HashMap<String, NfdRecord>,
    owned: HashMap<String, Vec<NfdRecord>>,
}

impl InMemoryNfdRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a record under its name, app id, and owner address.
    pub fn insert(&mut self, record: NfdRecord) {
        if let Some(app_id) = record.app_id {
            self.by_id.insert(app_id, record.clone());
        }
        if let Some(owner) = &record.owner {
            self.by_address.insert(owner.clone(), record.clone());
            self.owned.entry(owner.clone()).or_default().push(record.clone());
        }
        self.by_name.insert(record.name.clone(), record);
    }
}

#[async_trait]
impl NfdRegistry for InMemoryNfdRegistry {
    async fn resolve_address(
        &self,
        address: &AlgorandAddress,
        _view: NfdView,
    ) -> Result<NfdRecord, LookupError> {
        self.by_address
            .get(address.as_str())
            .cloned()
            .ok_or(LookupError::NotFound)
    }

    async fn lookup(&self, id: &NfdIdentifier, _view: NfdView) -> Result<NfdRecord, LookupError> {
        match id {
            NfdIdentifier::Name(name) => self.by_name.get(name),
            NfdIdentifier::NumericId(app_id) => self.by_id.get(app_id),
        }
        .cloned()
        .ok_or(LookupError::NotFound)
    }

    async fn nfds_for_address(&self, address: &AlgorandAddress) -> Result<NfdPage, LookupError> {
        let nfds = self.owned.get(address.as_str()).cloned().unwrap_or_default();
        let total = nfds.len() as u64;
        Ok(NfdPage { nfds, total })
    }
}

/// Quote service returning a fixed price list.
pub struct StaticQuoteService {
    quotes: Vec<Quote>,
}

impl StaticQuoteService {
    pub fn new(quotes: Vec<Quote>) -> Self {
        Self { quotes }
    }
}

#[async_trait]
impl QuoteService for StaticQuoteService {
    async fn quotes(&self, tickers: &[String]) -> Result<Vec<Quote>, QuoteError> {
        Ok(self
            .quotes
            .iter()
            .filter(|q| tickers.iter().any(|t| q.symbol.eq_ignore_ascii_case(t)))
            .cloned()
            .collect())
    }
}

/// Swap double that records every call.
#[derive(Default)]
pub struct StaticSwapService {
    swaps: Mutex<Vec<(String, u64, f64)>>,
}

impl StaticSwapService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn swaps(&self) -> Vec<(String, u64, f64)> {
        self.swaps.lock().unwrap().clone()
    }
}

#[async_trait]
impl SwapService for StaticSwapService {
    async fn swap(
        &self,
        swap_type: &str,
        token_id: u64,
        amount: f64,
    ) -> Result<SwapReceipt, SwapError> {
        self.swaps
            .lock()
            .unwrap()
            .push((swap_type.to_string(), token_id, amount));
        Ok(SwapReceipt {
            url: format!("https://explorer.test/tx/SWAP{token_id}"),
        })
    }
}

/// Bridge double that echoes a deterministic hash.
#[derive(Default)]
pub struct StaticBridge {
    calls: Mutex<Vec<(u64, u64)>>,
}

impl StaticBridge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<(u64, u64)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Bridge for StaticBridge {
    async fn transfer(
        &self,
        src_chain_id: u64,
        dest_chain_id: u64,
        _amount: f64,
        _receiver_hex: &str,
    ) -> Result<BridgeReceipt, BridgeError> {
        self.calls.lock().unwrap().push((src_chain_id, dest_chain_id));
        Ok(BridgeReceipt {
            tx_hash: format!("0xbridge{src_chain_id}{dest_chain_id}"),
        })
    }

    async fn set_peer(
        &self,
        src_chain_id: u64,
        dest_chain_id: u64,
    ) -> Result<BridgeReceipt, BridgeError> {
        self.calls.lock().unwrap().push((src_chain_id, dest_chain_id));
        Ok(BridgeReceipt {
            tx_hash: format!("0xpeer{src_chain_id}{dest_chain_id}"),
        })
    }
}

/// Metadata store double returning a synthetic URL.
#[derive(Default)]
pub struct StaticMetadataStore;

impl StaticMetadataStore {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl MetadataStore for StaticMetadataStore {
    async fn store_metadata(
        &self,
        name: &str,
        _document: serde_json::Value,
    ) -> Result<String, MetadataError> {
        Ok(format!(
            "ipfs://metadata/{}",
            name.to_lowercase().replace(char::is_whitespace, "-")
        ))
    }
}
