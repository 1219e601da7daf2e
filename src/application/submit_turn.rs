//! SubmitTurnHandler - one user turn in, one assistant reply out.
//!
//! Orchestrates the full pipeline: classify the input, drive the
//! slot-filling engine, invoke the external action when a flow
//! completes, and append both turns to the session transcript. The
//! returned reply is always exactly what was appended as the
//! assistant turn.

use std::sync::Arc;

use tracing::{info, warn};

use crate::application::replies;
use crate::domain::conversation::{MessageContent, SessionState};
use crate::domain::engine::{self, ActionRequest};
use crate::domain::foundation::AlgorandAddress;
use crate::domain::format::Formatter;
use crate::domain::intent::{classify, Classification};
use crate::domain::operation::{CapturedSlots, OperationKind};
use crate::ports::{
    Bridge, ChainTransaction, LookupError, MetadataStore, NfdRegistry, ProjectDirectory,
    QuoteService, SwapService, Wallet,
};

const MICRO_ALGOS_PER_ALGO: f64 = 1_000_000.0;

/// Everything the handler needs, injected at construction.
pub struct SubmitTurnDeps {
    pub wallet: Arc<dyn Wallet>,
    pub nfd_registry: Arc<dyn NfdRegistry>,
    pub quote_service: Arc<dyn QuoteService>,
    pub project_directory: Arc<dyn ProjectDirectory>,
    pub swap_service: Arc<dyn SwapService>,
    pub bridge: Arc<dyn Bridge>,
    pub metadata_store: Arc<dyn MetadataStore>,
    pub formatter: Formatter,
    pub nfd_registry_app_id: u64,
    pub nfd_mint_price_micro_algos: u64,
}

/// Handler for one conversational turn.
pub struct SubmitTurnHandler {
    deps: SubmitTurnDeps,
}

impl SubmitTurnHandler {
    pub fn new(deps: SubmitTurnDeps) -> Self {
        Self { deps }
    }

    /// Processes one user turn and returns the assistant reply.
    ///
    /// Empty input is answered with the help text and not recorded in
    /// the transcript; everything else appends one user turn and one
    /// assistant turn.
    pub async fn handle(&self, session: &mut SessionState, input: &str) -> MessageContent {
        let trimmed = input.trim();
        if !trimmed.is_empty() {
            session.push_user(trimmed);
        }

        let connected = self.deps.wallet.connected_address().await;
        let classification = classify(input, session.pending().is_some());
        info!(session = %session.id, ?classification, "turn classified");

        let reply = match classification {
            Classification::Help => MessageContent::text(replies::HELP),
            Classification::Greeting => MessageContent::text(replies::WELCOME),
            Classification::Unrecognized => MessageContent::text(replies::UNRECOGNIZED),
            Classification::CancelPending => {
                let label = session
                    .take_pending()
                    .map(|p| p.kind().label())
                    .unwrap_or("operation");
                MessageContent::text(format!(
                    "❌ Okay, I've cancelled the {label}. Ask me again anytime."
                ))
            }
            Classification::Continuation => match session.take_pending() {
                Some(pending) => {
                    let out = engine::advance(pending, trimmed, connected.as_ref());
                    self.settle(session, out, connected.as_ref()).await
                }
                None => MessageContent::text(replies::UNRECOGNIZED),
            },
            Classification::NewOperation { kind, seeds } => {
                // A new request implicitly abandons any in-flight flow.
                session.take_pending();
                let out = engine::begin(kind, seeds, connected.as_ref());
                self.settle(session, out, connected.as_ref()).await
            }
        };

        session.push_assistant(reply.clone());
        reply
    }

    /// Stores the next pending state and, when a flow completed, runs
    /// the action and swaps the engine's placeholder for the result.
    async fn settle(
        &self,
        session: &mut SessionState,
        out: engine::Advance,
        connected: Option<&AlgorandAddress>,
    ) -> MessageContent {
        session.set_pending(out.pending);
        match out.action {
            Some(action) => self.invoke(action, connected).await,
            None => out.reply,
        }
    }

    async fn invoke(
        &self,
        action: ActionRequest,
        connected: Option<&AlgorandAddress>,
    ) -> MessageContent {
        info!(kind = %action.kind, "invoking operation");
        let result = match action.kind {
            OperationKind::MintFungibleToken => self.mint_fungible(&action.slots).await,
            OperationKind::MintNft => self.mint_nft(&action.slots).await,
            OperationKind::TransferNative => self.transfer_native(&action.slots).await,
            OperationKind::TransferAsset => self.transfer_asset(&action.slots).await,
            OperationKind::Swap => self.swap(&action.slots).await,
            OperationKind::ResolveNfdName => self.resolve_address(&action.slots).await,
            OperationKind::ReverseLookupNfd => self.reverse_lookup(&action.slots).await,
            OperationKind::GetAllNfdsForAddress => self.list_nfds(&action.slots).await,
            OperationKind::MintNfdName => self.mint_nfd(&action.slots, connected).await,
            OperationKind::MintNfdNameNft => self.mint_nfd_nft(&action.slots).await,
            OperationKind::CrossChainTransfer => self.bridge_transfer(&action.slots).await,
            OperationKind::CrossChainSetPeer => self.bridge_set_peer(&action.slots).await,
            OperationKind::GetQuotes => self.fetch_quotes(&action.slots).await,
            OperationKind::SearchProjects => self.search_projects(&action.slots).await,
        };
        result.unwrap_or_else(|message| {
            warn!(kind = %action.kind, %message, "operation failed");
            MessageContent::text(format!("⚠️ {message}"))
        })
    }

    async fn mint_fungible(&self, slots: &CapturedSlots) -> Result<MessageContent, String> {
        let unit_name = slots.text("unit_name").ok_or(MISSING_SLOT)?;
        let asset_name = slots.text("asset_name").ok_or(MISSING_SLOT)?;
        let total = slots.uint("total_supply").ok_or(MISSING_SLOT)?;
        let decimals = slots.uint("decimals").ok_or(MISSING_SLOT)?;

        let receipt = self
            .deps
            .wallet
            .sign_and_submit(ChainTransaction::AssetCreate {
                unit_name: unit_name.to_string(),
                asset_name: asset_name.to_string(),
                total,
                decimals,
                url: None,
            })
            .await
            .map_err(|e| e.to_string())?;
        Ok(self
            .deps
            .formatter
            .tx_success(OperationKind::MintFungibleToken, &receipt))
    }

    async fn mint_nft(&self, slots: &CapturedSlots) -> Result<MessageContent, String> {
        let asset_name = slots.text("asset_name").ok_or(MISSING_SLOT)?;
        let image_url = slots.text("image_url").filter(|u| !u.is_empty());

        let mut document = serde_json::json!({
            "name": asset_name,
            "standard": "arc3",
        });
        if let Some(image) = image_url {
            document["image"] = serde_json::json!(image);
        }
        let metadata_url = self
            .deps
            .metadata_store
            .store_metadata(asset_name, document)
            .await
            .map_err(|e| e.to_string())?;

        let receipt = self
            .deps
            .wallet
            .sign_and_submit(ChainTransaction::AssetCreate {
                unit_name: nft_unit_name(asset_name),
                asset_name: asset_name.to_string(),
                total: 1,
                decimals: 0,
                url: Some(metadata_url),
            })
            .await
            .map_err(|e| e.to_string())?;
        Ok(self.deps.formatter.tx_success(OperationKind::MintNft, &receipt))
    }

    async fn transfer_native(&self, slots: &CapturedSlots) -> Result<MessageContent, String> {
        let receiver = slots.address("receiver").ok_or(MISSING_SLOT)?;
        let amount = slots.amount("amount").ok_or(MISSING_SLOT)?;

        let receipt = self
            .deps
            .wallet
            .sign_and_submit(ChainTransaction::Payment {
                receiver: receiver.clone(),
                micro_algos: (amount * MICRO_ALGOS_PER_ALGO).round() as u64,
            })
            .await
            .map_err(|e| e.to_string())?;
        Ok(self
            .deps
            .formatter
            .tx_success(OperationKind::TransferNative, &receipt))
    }

    async fn transfer_asset(&self, slots: &CapturedSlots) -> Result<MessageContent, String> {
        let receiver = slots.address("receiver").ok_or(MISSING_SLOT)?;
        let asset_id = slots.uint("asset_id").ok_or(MISSING_SLOT)?;
        // Whole base units; the slot validator rejects fractions.
        let amount = slots.uint("amount").ok_or(MISSING_SLOT)?;

        let receipt = self
            .deps
            .wallet
            .sign_and_submit(ChainTransaction::AssetTransfer {
                receiver: receiver.clone(),
                asset_id,
                amount,
            })
            .await
            .map_err(|e| e.to_string())?;
        Ok(self
            .deps
            .formatter
            .tx_success(OperationKind::TransferAsset, &receipt))
    }

    async fn swap(&self, slots: &CapturedSlots) -> Result<MessageContent, String> {
        let swap_type = slots.text("swap_type").ok_or(MISSING_SLOT)?;
        let token_id = slots.uint("token_id").ok_or(MISSING_SLOT)?;
        let amount = slots.amount("amount").ok_or(MISSING_SLOT)?;

        let receipt = self
            .deps
            .swap_service
            .swap(swap_type, token_id, amount)
            .await
            .map_err(|e| e.to_string())?;
        Ok(self
            .deps
            .formatter
            .swap_success(swap_type, token_id, amount, &receipt))
    }

    async fn resolve_address(&self, slots: &CapturedSlots) -> Result<MessageContent, String> {
        let address = slots.address("address").ok_or(MISSING_SLOT)?;
        let view = slots.view("view");
        match self.deps.nfd_registry.resolve_address(address, view).await {
            Ok(record) => Ok(self.deps.formatter.resolved_address(address, &record)),
            Err(LookupError::NotFound) => Ok(MessageContent::text(format!(
                "🤷 No NFD name is linked to `{}`.",
                address.abbreviated()
            ))),
            Err(err) => Err(err.to_string()),
        }
    }

    async fn reverse_lookup(&self, slots: &CapturedSlots) -> Result<MessageContent, String> {
        let id = slots.nfd("name_or_id").ok_or(MISSING_SLOT)?;
        let view = slots.view("view");
        match self.deps.nfd_registry.lookup(id, view).await {
            Ok(record) => Ok(self.deps.formatter.reverse_lookup(&record)),
            Err(LookupError::NotFound) => Ok(MessageContent::text(format!(
                "🤷 I couldn't find an NFD for `{id}`."
            ))),
            Err(err) => Err(err.to_string()),
        }
    }

    async fn list_nfds(&self, slots: &CapturedSlots) -> Result<MessageContent, String> {
        let address = slots.address("address").ok_or(MISSING_SLOT)?;
        let page = self
            .deps
            .nfd_registry
            .nfds_for_address(address)
            .await
            .map_err(|e| e.to_string())?;
        Ok(self.deps.formatter.nfds_for_address(address, &page))
    }

    async fn mint_nfd(
        &self,
        slots: &CapturedSlots,
        connected: Option<&AlgorandAddress>,
    ) -> Result<MessageContent, String> {
        let name = slots.nfd("name").ok_or(MISSING_SLOT)?;
        let years = slots.uint("years").ok_or(MISSING_SLOT)?;
        let reserved_for = slots
            .address("reserved_for")
            .or(connected)
            .ok_or("no wallet is connected")?;

        let receipt = self
            .deps
            .wallet
            .sign_and_submit(ChainTransaction::NfdRegister {
                name: name.to_string(),
                years,
                reserved_for: reserved_for.clone(),
                registry_app_id: self.deps.nfd_registry_app_id,
                price_micro_algos: self.deps.nfd_mint_price_micro_algos * years,
            })
            .await
            .map_err(|e| e.to_string())?;
        Ok(self
            .deps
            .formatter
            .tx_success(OperationKind::MintNfdName, &receipt))
    }

    /// Mints an NFT representing an NFD name: an ARC-3 metadata document
    /// goes to the metadata store first, then a 1-of-1 asset is created
    /// pointing at it.
    async fn mint_nfd_nft(&self, slots: &CapturedSlots) -> Result<MessageContent, String> {
        let name = slots.nfd("name").ok_or(MISSING_SLOT)?.to_string();
        let years = slots.uint("years").ok_or(MISSING_SLOT)?;
        let link_on_mint = slots.bool("link_on_mint").unwrap_or(true);

        let document = serde_json::json!({
            "name": format!("NFD: {name}"),
            "description": format!(
                "Algorand NFD Name NFT for {name} registered for {years} year{}",
                if years > 1 { "s" } else { "" }
            ),
            "image": "",
            "attributes": [
                { "trait_type": "NFD Name", "value": &name },
                { "trait_type": "Registration Years", "value": years.to_string() },
                { "trait_type": "Type", "value": "NFD Name NFT" },
                { "trait_type": "Network", "value": "Algorand" },
            ],
            "properties": {
                "nfdName": &name,
                "years": years,
                "linkOnMint": link_on_mint,
                "mintedAt": chrono::Utc::now().to_rfc3339(),
            },
        });
        let metadata_url = self
            .deps
            .metadata_store
            .store_metadata(&name, document)
            .await
            .map_err(|e| e.to_string())?;

        let unit_name = {
            let unit: String = name.chars().take(3).collect::<String>().to_ascii_uppercase();
            if unit.is_empty() { "NFD".to_string() } else { unit }
        };
        let receipt = self
            .deps
            .wallet
            .sign_and_submit(ChainTransaction::AssetCreate {
                unit_name,
                asset_name: format!("NFD-{name}"),
                total: 1,
                decimals: 0,
                url: Some(metadata_url),
            })
            .await
            .map_err(|e| e.to_string())?;
        Ok(self
            .deps
            .formatter
            .tx_success(OperationKind::MintNfdNameNft, &receipt))
    }

    async fn bridge_transfer(&self, slots: &CapturedSlots) -> Result<MessageContent, String> {
        let src = slots.uint("src_chain_id").ok_or(MISSING_SLOT)?;
        let dest = slots.uint("dest_chain_id").ok_or(MISSING_SLOT)?;
        let amount = slots.amount("amount").ok_or(MISSING_SLOT)?;
        let receiver = slots.hex_address("receiver").ok_or(MISSING_SLOT)?;

        let receipt = self
            .deps
            .bridge
            .transfer(src, dest, amount, receiver)
            .await
            .map_err(|e| e.to_string())?;
        Ok(self
            .deps
            .formatter
            .bridge_success(OperationKind::CrossChainTransfer, &receipt))
    }

    async fn bridge_set_peer(&self, slots: &CapturedSlots) -> Result<MessageContent, String> {
        let src = slots.uint("src_chain_id").ok_or(MISSING_SLOT)?;
        let dest = slots.uint("dest_chain_id").ok_or(MISSING_SLOT)?;

        let receipt = self
            .deps
            .bridge
            .set_peer(src, dest)
            .await
            .map_err(|e| e.to_string())?;
        Ok(self
            .deps
            .formatter
            .bridge_success(OperationKind::CrossChainSetPeer, &receipt))
    }

    async fn fetch_quotes(&self, slots: &CapturedSlots) -> Result<MessageContent, String> {
        let tickers = slots.tickers("tickers").ok_or(MISSING_SLOT)?;
        let quotes = self
            .deps
            .quote_service
            .quotes(tickers)
            .await
            .map_err(|e| e.to_string())?;
        Ok(self.deps.formatter.quotes(tickers, &quotes))
    }

    async fn search_projects(&self, slots: &CapturedSlots) -> Result<MessageContent, String> {
        let query = slots.text("query").ok_or(MISSING_SLOT)?;
        let matches = self
            .deps
            .project_directory
            .search(query)
            .await
            .map_err(|e| e.to_string())?;
        Ok(self.deps.formatter.projects(query, &matches))
    }
}

const MISSING_SLOT: &str = "something went wrong collecting your answers, please start over";

/// Derives a unit name for an NFT asset from its display name.
fn nft_unit_name(asset_name: &str) -> String {
    let unit: String = asset_name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .take(8)
        .collect::<String>()
        .to_ascii_uppercase();
    if unit.is_empty() {
        "NFT".to_string()
    } else {
        unit
    }
}
