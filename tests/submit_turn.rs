//! End-to-end conversation tests against the submit-turn handler.
//!
//! All external ports are deterministic doubles; every test drives the
//! real classifier, engine, and formatter through full conversations.

use std::sync::Arc;

use trix_engine::adapters::testing::{
    InMemoryNfdRegistry, MockWallet, StaticBridge, StaticMetadataStore, StaticQuoteService,
    StaticSwapService,
};
use trix_engine::adapters::StaticProjectDirectory;
use trix_engine::application::{SubmitTurnDeps, SubmitTurnHandler};
use trix_engine::domain::conversation::{MessageContent, SessionState};
use trix_engine::domain::format::{Formatter, NfdRecord, Quote};
use trix_engine::domain::foundation::AlgorandAddress;
use trix_engine::ports::ChainTransaction;

fn addr(fill: char) -> AlgorandAddress {
    AlgorandAddress::parse(&format!("{}Y", fill.to_string().repeat(57))).unwrap()
}

fn formatter() -> Formatter {
    Formatter::new("https://testnet.explorer.perawallet.app/tx", 10, 200)
}

fn registry_with_myname() -> InMemoryNfdRegistry {
    let mut registry = InMemoryNfdRegistry::new();
    registry.insert(NfdRecord {
        name: "myname.algo".to_string(),
        app_id: Some(76543),
        state: Some("owned".to_string()),
        owner: Some(addr('B').as_str().to_string()),
        deposit_account: Some(addr('B').as_str().to_string()),
        time_changed: None,
        properties: None,
    });
    registry
}

fn harness(wallet: Arc<MockWallet>) -> SubmitTurnHandler {
    harness_with_swap(wallet, Arc::new(StaticSwapService::new()))
}

fn harness_with_swap(wallet: Arc<MockWallet>, swap_service: Arc<StaticSwapService>) -> SubmitTurnHandler {
    SubmitTurnHandler::new(SubmitTurnDeps {
        wallet,
        nfd_registry: Arc::new(registry_with_myname()),
        quote_service: Arc::new(StaticQuoteService::new(vec![Quote {
            symbol: "btc".to_string(),
            price_usdt: 65000.0,
        }])),
        project_directory: Arc::new(StaticProjectDirectory::with_builtin()),
        swap_service,
        bridge: Arc::new(StaticBridge::new()),
        metadata_store: Arc::new(StaticMetadataStore::new()),
        formatter: formatter(),
        nfd_registry_app_id: 84_366_825,
        nfd_mint_price_micro_algos: 5_000_000,
    })
}

#[tokio::test]
async fn native_transfer_full_flow_submits_exactly_once() {
    let wallet = Arc::new(MockWallet::connected(addr('A')));
    let handler = harness(wallet.clone());
    let mut session = SessionState::new();

    let reply = handler.handle(&mut session, "send algo").await;
    assert!(reply.as_text().contains("receiver address"), "{reply:?}");

    let reply = handler.handle(&mut session, addr('B').as_str()).await;
    assert!(reply.as_text().contains("How much ALGO"));

    let reply = handler.handle(&mut session, "10").await;
    let summary = reply.as_text();
    assert!(summary.contains("10 ALGO"), "summary: {summary}");
    assert!(summary.contains(&addr('B').to_string()));
    assert!(summary.contains("yes / no"));
    assert!(wallet.submissions().is_empty());

    let reply = handler.handle(&mut session, "yes").await;
    let submissions = wallet.submissions();
    assert_eq!(submissions.len(), 1);
    assert_eq!(
        submissions[0],
        ChainTransaction::Payment {
            receiver: addr('B'),
            micro_algos: 10_000_000,
        }
    );
    assert!(session.pending().is_none());
    match reply {
        MessageContent::Card { text, links, .. } => {
            assert!(text.contains("MOCKTX1"));
            assert_eq!(
                links[0].url,
                "https://testnet.explorer.perawallet.app/tx/MOCKTX1"
            );
        }
        other => panic!("expected explorer card, got {other:?}"),
    }
}

#[tokio::test]
async fn mint_nfd_nft_first_prompt_asks_for_the_name() {
    let handler = harness(Arc::new(MockWallet::connected(addr('A'))));
    let mut session = SessionState::new();

    let reply = handler.handle(&mut session, "mint nfd nft").await;
    let text = reply.as_text();
    assert!(text.contains("Which NFD name should the NFT represent?"), "{text}");
    assert!(session.pending().is_some());
}

#[tokio::test]
async fn bare_name_input_resolves_in_a_single_turn() {
    let handler = harness(Arc::new(MockWallet::disconnected()));
    let mut session = SessionState::new();

    let reply = handler.handle(&mut session, "myname.algo").await;
    let text = reply.as_text();
    assert!(text.contains("myname.algo"), "{text}");
    assert!(text.contains("76543"));
    assert!(session.pending().is_none());
}

#[tokio::test]
async fn invalid_slot_input_reprompts_and_retry_succeeds() {
    let handler = harness(Arc::new(MockWallet::connected(addr('A'))));
    let mut session = SessionState::new();

    handler.handle(&mut session, "send algo").await;
    let pending_before = session.pending().cloned();

    let reply = handler.handle(&mut session, "not-an-address").await;
    assert!(reply.as_text().contains("receiver address"));
    assert_eq!(session.pending().cloned(), pending_before);

    // A second bad answer leaves the state exactly where it was.
    handler.handle(&mut session, "still wrong").await;
    assert_eq!(session.pending().cloned(), pending_before);

    let reply = handler.handle(&mut session, addr('B').as_str()).await;
    assert!(reply.as_text().contains("How much ALGO"));
}

#[tokio::test]
async fn declining_the_confirmation_cancels_without_submitting() {
    let wallet = Arc::new(MockWallet::connected(addr('A')));
    let handler = harness(wallet.clone());
    let mut session = SessionState::new();

    handler.handle(&mut session, "send algo").await;
    handler.handle(&mut session, addr('B').as_str()).await;
    handler.handle(&mut session, "10").await;

    let reply = handler.handle(&mut session, "no thanks").await;
    assert!(reply.as_text().contains("cancelled"));
    assert!(session.pending().is_none());
    assert!(wallet.submissions().is_empty());
}

#[tokio::test]
async fn cancel_word_abandons_a_pending_flow() {
    let handler = harness(Arc::new(MockWallet::connected(addr('A'))));
    let mut session = SessionState::new();

    handler.handle(&mut session, "send algo").await;
    assert!(session.pending().is_some());

    let reply = handler.handle(&mut session, "cancel that").await;
    assert!(reply.as_text().contains("cancelled"));
    assert!(session.pending().is_none());
}

#[tokio::test]
async fn empty_input_returns_help_and_is_not_recorded() {
    let handler = harness(Arc::new(MockWallet::disconnected()));
    let mut session = SessionState::new();

    let reply = handler.handle(&mut session, "   ").await;
    assert!(reply.as_text().contains("Mint a fungible token"));
    // Only the assistant turn lands in the transcript.
    assert_eq!(session.turns().len(), 1);
}

#[tokio::test]
async fn mutating_flows_refuse_to_start_without_a_wallet() {
    let wallet = Arc::new(MockWallet::disconnected());
    let handler = harness(wallet.clone());
    let mut session = SessionState::new();

    let reply = handler.handle(&mut session, "send algo").await;
    assert!(reply.as_text().contains("connect your wallet"));
    assert!(session.pending().is_none());
    assert!(wallet.submissions().is_empty());
}

#[tokio::test]
async fn quote_flow_prompts_then_reports_prices() {
    let handler = harness(Arc::new(MockWallet::disconnected()));
    let mut session = SessionState::new();

    let reply = handler.handle(&mut session, "what's the price").await;
    assert!(reply.as_text().contains("tickers"));

    let reply = handler.handle(&mut session, "btc, doge").await;
    let text = reply.as_text();
    assert!(text.contains("1 BTC - $65000 USDT"), "{text}");
    assert!(text.contains("no data for: doge"));
}

#[tokio::test]
async fn project_search_runs_in_a_single_turn() {
    let handler = harness(Arc::new(MockWallet::disconnected()));
    let mut session = SessionState::new();

    let reply = handler.handle(&mut session, "show me wallet projects").await;
    let text = reply.as_text();
    assert!(text.contains("Pera Wallet"), "{text}");
    assert!(session.pending().is_none());
}

#[tokio::test]
async fn mint_nfd_flow_defaults_reservation_to_the_caller() {
    let wallet = Arc::new(MockWallet::connected(addr('C')));
    let handler = harness(wallet.clone());
    let mut session = SessionState::new();

    handler.handle(&mut session, "mint an nfd").await;
    handler.handle(&mut session, "fresh.algo").await;
    handler.handle(&mut session, "2").await;
    // Empty answer takes the connected address.
    handler.handle(&mut session, "").await;
    handler.handle(&mut session, "yes").await;

    let submissions = wallet.submissions();
    assert_eq!(submissions.len(), 1);
    match &submissions[0] {
        ChainTransaction::NfdRegister {
            name,
            years,
            reserved_for,
            price_micro_algos,
            ..
        } => {
            assert_eq!(name, "fresh.algo");
            assert_eq!(*years, 2);
            assert_eq!(reserved_for, &addr('C'));
            assert_eq!(*price_micro_algos, 10_000_000);
        }
        other => panic!("unexpected transaction: {other:?}"),
    }
}

#[tokio::test]
async fn signing_rejection_surfaces_as_an_error_reply() {
    let wallet = Arc::new(MockWallet::rejecting(addr('A')));
    let handler = harness(wallet);
    let mut session = SessionState::new();

    handler.handle(&mut session, "send algo").await;
    handler.handle(&mut session, addr('B').as_str()).await;
    handler.handle(&mut session, "10").await;
    let reply = handler.handle(&mut session, "yes").await;

    assert!(reply.as_text().contains("rejected"));
    // The flow is over; a retry needs a fresh request.
    assert!(session.pending().is_none());
}

#[tokio::test]
async fn a_greeting_mid_flow_leaves_the_pending_state_alone() {
    let handler = harness(Arc::new(MockWallet::connected(addr('A'))));
    let mut session = SessionState::new();

    handler.handle(&mut session, "send algo").await;
    // A bare greeting mid-flow does not disturb the pending state.
    let reply = handler.handle(&mut session, "hello").await;
    assert!(reply.as_text().contains("Trix"));
    assert!(session.pending().is_some());
}

#[tokio::test]
async fn swap_request_starts_the_swap_flow_not_a_transfer() {
    let wallet = Arc::new(MockWallet::connected(addr('A')));
    let handler = harness(wallet.clone());
    let mut session = SessionState::new();

    let reply = handler.handle(&mut session, "swap my tokens").await;
    let text = reply.as_text();
    assert!(text.contains("Which swap type"), "{text}");
    assert!(!text.contains("receiver address"));
    assert!(session.pending().is_some());
    assert!(wallet.submissions().is_empty());
}

#[tokio::test]
async fn swap_flow_collects_type_token_and_amount() {
    let swap_service = Arc::new(StaticSwapService::new());
    let wallet = Arc::new(MockWallet::connected(addr('A')));
    let handler = harness_with_swap(wallet.clone(), swap_service.clone());
    let mut session = SessionState::new();

    handler.handle(&mut session, "swap").await;
    let reply = handler.handle(&mut session, "native").await;
    assert!(reply.as_text().contains("Token ID"));

    let reply = handler.handle(&mut session, "4242").await;
    assert!(reply.as_text().contains("How many tokens"));

    let reply = handler.handle(&mut session, "12.5").await;
    assert!(reply.as_text().contains("yes / no"));
    assert!(swap_service.swaps().is_empty());

    let reply = handler.handle(&mut session, "yes").await;
    assert_eq!(swap_service.swaps(), vec![("native".to_string(), 4242, 12.5)]);
    assert!(session.pending().is_none());
    // Swaps go through the swap endpoint, never the wallet port.
    assert!(wallet.submissions().is_empty());
    match reply {
        MessageContent::Card { text, links, .. } => {
            assert!(text.contains("swapped 12.5 of token `4242`"), "{text}");
            assert_eq!(links[0].url, "https://explorer.test/tx/SWAP4242");
        }
        other => panic!("expected swap card, got {other:?}"),
    }
}

#[tokio::test]
async fn unknown_swap_type_reprompts_with_the_options() {
    let handler = harness(Arc::new(MockWallet::connected(addr('A'))));
    let mut session = SessionState::new();

    handler.handle(&mut session, "swap").await;
    let reply = handler.handle(&mut session, "both").await;
    let text = reply.as_text();
    assert!(text.contains("native or token"), "{text}");
    assert!(session.pending().is_some());
}

#[tokio::test]
async fn fractional_asset_amount_reprompts_instead_of_rounding() {
    let wallet = Arc::new(MockWallet::connected(addr('A')));
    let handler = harness(wallet.clone());
    let mut session = SessionState::new();

    handler.handle(&mut session, "transfer a token").await;
    handler.handle(&mut session, addr('B').as_str()).await;
    handler.handle(&mut session, "31566704").await;

    let reply = handler.handle(&mut session, "1.5").await;
    assert!(reply.as_text().contains("whole number"), "{reply:?}");

    handler.handle(&mut session, "2").await;
    handler.handle(&mut session, "yes").await;
    let submissions = wallet.submissions();
    assert_eq!(submissions.len(), 1);
    assert_eq!(
        submissions[0],
        ChainTransaction::AssetTransfer {
            receiver: addr('B'),
            asset_id: 31566704,
            amount: 2,
        }
    );
}

#[tokio::test]
async fn cross_chain_peer_setup_runs_through_the_bridge() {
    let handler = harness(Arc::new(MockWallet::connected(addr('A'))));
    let mut session = SessionState::new();

    handler.handle(&mut session, "set peer between chains").await;
    handler.handle(&mut session, "101").await;
    handler.handle(&mut session, "102").await;
    let reply = handler.handle(&mut session, "yes").await;

    assert!(reply.as_text().contains("0xpeer101102"), "{reply:?}");
    assert!(session.pending().is_none());
}
