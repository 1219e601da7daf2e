//! Free-text intent classifier.
//!
//! Keyword rules are a declarative ordered table tested in declaration
//! order; the first matching rule wins. Ties are broken by rule order,
//! not specificity, so narrower rules (e.g. "mint nfd nft") must be
//! declared before broader ones ("mint nfd", then "mint"). When no rule
//! matches, the input's shape decides: address-looking input resolves
//! an address, name-looking input reverse-looks-up a name.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::foundation::{AlgorandAddress, NfdIdentifier, NfdView};
use crate::domain::operation::{OperationKind, SlotValue};

/// Result of classifying one user turn.
#[derive(Debug, Clone, PartialEq)]
pub enum Classification {
    /// A greeting; reply with the canned welcome, touch nothing.
    Greeting,
    /// Empty or whitespace input; reply with the help prompt.
    Help,
    /// The user asked to abandon the in-flight operation.
    CancelPending,
    /// Route the input to the pending operation's current slot.
    Continuation,
    /// A freshly recognized operation, possibly with slots captured
    /// straight from the trigger text.
    NewOperation {
        kind: OperationKind,
        seeds: Vec<(&'static str, SlotValue)>,
    },
    /// Nothing matched; fall back to the generic reply.
    Unrecognized,
}

/// One keyword rule: every `all` substring must be present, at least
/// one `any` substring (when non-empty), and no `none` substring.
struct IntentRule {
    all: &'static [&'static str],
    any: &'static [&'static str],
    none: &'static [&'static str],
    kind: OperationKind,
}

impl IntentRule {
    fn matches(&self, lower: &str) -> bool {
        self.all.iter().all(|kw| lower.contains(kw))
            && (self.any.is_empty() || self.any.iter().any(|kw| lower.contains(kw)))
            && self.none.iter().all(|kw| !lower.contains(kw))
    }
}

/// Declaration order is the tiebreak.
static RULES: &[IntentRule] = &[
    IntentRule {
        all: &[],
        any: &["set peer", "configure peer"],
        none: &[],
        kind: OperationKind::CrossChainSetPeer,
    },
    IntentRule {
        all: &["cross"],
        any: &["send", "transfer"],
        none: &[],
        kind: OperationKind::CrossChainTransfer,
    },
    IntentRule {
        all: &["mint", "nfd", "nft"],
        any: &[],
        none: &[],
        kind: OperationKind::MintNfdNameNft,
    },
    IntentRule {
        all: &["mint", "nfd"],
        any: &[],
        none: &["nft"],
        kind: OperationKind::MintNfdName,
    },
    IntentRule {
        all: &["nfd"],
        any: &["all", "list", "every"],
        none: &[],
        kind: OperationKind::GetAllNfdsForAddress,
    },
    IntentRule {
        all: &["nfd", "resolve"],
        any: &[],
        none: &[],
        kind: OperationKind::ResolveNfdName,
    },
    IntentRule {
        all: &["nfd"],
        any: &[],
        none: &[],
        kind: OperationKind::ReverseLookupNfd,
    },
    IntentRule {
        all: &["nft"],
        any: &["mint", "create", "generate"],
        none: &[],
        kind: OperationKind::MintNft,
    },
    IntentRule {
        all: &["swap"],
        any: &[],
        none: &[],
        kind: OperationKind::Swap,
    },
    IntentRule {
        all: &[],
        any: &["token", "asset"],
        none: &["mint", "create", "quote", "price"],
        kind: OperationKind::TransferAsset,
    },
    IntentRule {
        all: &["algo"],
        any: &["send", "transfer", "pay"],
        none: &[],
        kind: OperationKind::TransferNative,
    },
    IntentRule {
        all: &["mint"],
        any: &[],
        none: &[],
        kind: OperationKind::MintFungibleToken,
    },
    IntentRule {
        all: &["create", "token"],
        any: &[],
        none: &[],
        kind: OperationKind::MintFungibleToken,
    },
    IntentRule {
        all: &[],
        any: &["quote", "price"],
        none: &[],
        kind: OperationKind::GetQuotes,
    },
    IntentRule {
        all: &[],
        any: &["project", "ecosystem"],
        none: &[],
        kind: OperationKind::SearchProjects,
    },
];

const GREETINGS: &[&str] = &["hi", "hello", "hey", "gm", "yo", "howdy", "hi there", "hello there"];

const CANCEL_PHRASES: &[&str] = &["cancel", "never mind", "nevermind", "forget it"];

static ADDRESS_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Za-z2-7]{58}\b").expect("valid address token regex"));
static NFD_NAME_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Za-z0-9_-]+\.algo\b").expect("valid nfd token regex"));

/// Classifies one user turn.
///
/// With a pending operation, input is routed to the state machine
/// (`Continuation`) unless it is a greeting or a cancellation; without
/// one, the rule table and then the shape fallback decide.
pub fn classify(input: &str, has_pending: bool) -> Classification {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        // Mid-flow, an empty answer belongs to the awaited slot: some
        // slots substitute a default for it.
        return if has_pending {
            Classification::Continuation
        } else {
            Classification::Help
        };
    }

    let lower = trimmed.to_ascii_lowercase();
    let bare = lower.trim_end_matches(['!', '.', ',']);
    if GREETINGS.contains(&bare) {
        return Classification::Greeting;
    }

    if has_pending {
        if CANCEL_PHRASES.iter().any(|p| lower.contains(p)) {
            return Classification::CancelPending;
        }
        return Classification::Continuation;
    }

    for rule in RULES {
        if rule.matches(&lower) {
            return Classification::NewOperation {
                kind: rule.kind,
                seeds: seeds_for(rule.kind, trimmed, &lower),
            };
        }
    }

    // Shape fallback: no keyword matched, but the input itself looks
    // like an address or an NFD name.
    if let Ok(addr) = AlgorandAddress::parse(trimmed) {
        return Classification::NewOperation {
            kind: OperationKind::ResolveNfdName,
            seeds: vec![("address", SlotValue::Address(addr))],
        };
    }
    if let Ok(id) = NfdIdentifier::parse(trimmed) {
        return Classification::NewOperation {
            kind: OperationKind::ReverseLookupNfd,
            seeds: vec![("name_or_id", SlotValue::Nfd(id))],
        };
    }

    Classification::Unrecognized
}

/// Captures slots straight from the trigger text where the flow can use
/// them: an embedded address, NFD name, or view keyword.
fn seeds_for(kind: OperationKind, original: &str, lower: &str) -> Vec<(&'static str, SlotValue)> {
    let mut seeds = Vec::new();
    match kind {
        OperationKind::ResolveNfdName | OperationKind::GetAllNfdsForAddress => {
            if let Some(addr) = find_address(original) {
                seeds.push(("address", SlotValue::Address(addr)));
            }
        }
        OperationKind::ReverseLookupNfd => {
            if let Some(id) = find_nfd_name(original) {
                seeds.push(("name_or_id", SlotValue::Nfd(id)));
            }
        }
        OperationKind::SearchProjects => {
            seeds.push(("query", SlotValue::Text(original.to_string())));
        }
        _ => {}
    }
    if let Some(view) = find_view(lower) {
        seeds.push(("view", SlotValue::View(view)));
    }
    seeds
}

fn find_address(input: &str) -> Option<AlgorandAddress> {
    ADDRESS_TOKEN
        .find_iter(input)
        .find_map(|m| AlgorandAddress::parse(m.as_str()).ok())
}

fn find_nfd_name(input: &str) -> Option<NfdIdentifier> {
    NFD_NAME_TOKEN
        .find(input)
        .and_then(|m| NfdIdentifier::parse(m.as_str()).ok())
}

fn find_view(lower: &str) -> Option<NfdView> {
    for view in [NfdView::Tiny, NfdView::Thumbnail, NfdView::Full] {
        if lower.contains(view.as_str()) {
            return Some(view);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind_of(input: &str) -> Option<OperationKind> {
        match classify(input, false) {
            Classification::NewOperation { kind, .. } => Some(kind),
            _ => None,
        }
    }

    #[test]
    fn empty_input_is_help_or_a_slot_answer() {
        assert_eq!(classify("", false), Classification::Help);
        assert_eq!(classify("   \n", false), Classification::Help);
        // With a flow in progress the empty answer goes to the engine.
        assert_eq!(classify("", true), Classification::Continuation);
    }

    #[test]
    fn greetings_short_circuit_classification() {
        assert_eq!(classify("hello", false), Classification::Greeting);
        assert_eq!(classify("Hey!", false), Classification::Greeting);
        // Even with a pending operation, a bare greeting is a greeting.
        assert_eq!(classify("gm", true), Classification::Greeting);
    }

    #[test]
    fn nfd_mint_rules_are_order_dependent() {
        assert_eq!(kind_of("mint nfd nft"), Some(OperationKind::MintNfdNameNft));
        assert_eq!(kind_of("mint an nfd for me"), Some(OperationKind::MintNfdName));
        assert_eq!(kind_of("mint"), Some(OperationKind::MintFungibleToken));
    }

    #[test]
    fn list_all_nfds_beats_plain_lookup() {
        assert_eq!(
            kind_of("get all nfds for my address"),
            Some(OperationKind::GetAllNfdsForAddress)
        );
        assert_eq!(kind_of("nfd whois"), Some(OperationKind::ReverseLookupNfd));
    }

    #[test]
    fn transfer_rules_distinguish_native_from_asset() {
        assert_eq!(kind_of("send 10 algo"), Some(OperationKind::TransferNative));
        assert_eq!(kind_of("transfer a token"), Some(OperationKind::TransferAsset));
    }

    #[test]
    fn swap_phrases_never_fall_through_to_token_transfer() {
        assert_eq!(kind_of("swap"), Some(OperationKind::Swap));
        assert_eq!(kind_of("swap my tokens"), Some(OperationKind::Swap));
        assert_eq!(kind_of("i want to swap an asset"), Some(OperationKind::Swap));
    }

    #[test]
    fn cross_chain_rules_fire_before_transfers() {
        assert_eq!(
            kind_of("cross chain transfer"),
            Some(OperationKind::CrossChainTransfer)
        );
        assert_eq!(kind_of("set peer"), Some(OperationKind::CrossChainSetPeer));
    }

    #[test]
    fn address_shaped_input_defaults_to_resolve() {
        let addr = format!("{}Y", "A".repeat(57));
        match classify(&addr, false) {
            Classification::NewOperation { kind, seeds } => {
                assert_eq!(kind, OperationKind::ResolveNfdName);
                assert_eq!(seeds.len(), 1);
                assert_eq!(seeds[0].0, "address");
            }
            other => panic!("unexpected classification: {other:?}"),
        }
    }

    #[test]
    fn name_shaped_input_defaults_to_reverse_lookup() {
        match classify("myname.algo", false) {
            Classification::NewOperation { kind, seeds } => {
                assert_eq!(kind, OperationKind::ReverseLookupNfd);
                assert_eq!(
                    seeds[0].1,
                    SlotValue::Nfd(NfdIdentifier::Name("myname.algo".to_string()))
                );
            }
            other => panic!("unexpected classification: {other:?}"),
        }
    }

    #[test]
    fn pending_operation_routes_to_continuation() {
        assert_eq!(classify("10", true), Classification::Continuation);
        assert_eq!(classify("cancel that", true), Classification::CancelPending);
    }

    #[test]
    fn embedded_address_is_seeded_for_nfd_listing() {
        let input = format!("list all nfds owned by {}Y", "B".repeat(57));
        match classify(&input, false) {
            Classification::NewOperation { kind, seeds } => {
                assert_eq!(kind, OperationKind::GetAllNfdsForAddress);
                assert!(seeds.iter().any(|(name, _)| *name == "address"));
            }
            other => panic!("unexpected classification: {other:?}"),
        }
    }

    #[test]
    fn unmatched_text_is_unrecognized() {
        assert_eq!(classify("what is the weather", false), Classification::Unrecognized);
    }
}
