//! Slot-filling engine.
//!
//! Pure state machine over [`PendingOperation`]: each call takes the
//! current pending state plus one user turn and returns the next state,
//! the assistant reply, and optionally an action request for the
//! invoker. Pending state is cleared before an action surfaces, so a
//! crash between clearing and invoking loses the request rather than
//! replaying it.

use crate::domain::conversation::MessageContent;
use crate::domain::foundation::AlgorandAddress;
use crate::domain::operation::{
    CapturedSlots, OperationKind, PendingOperation, SlotDefault, SlotSpec, SlotValue, Step,
};

/// A fully captured operation ready for the external invoker.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionRequest {
    pub kind: OperationKind,
    pub slots: CapturedSlots,
}

/// Outcome of one engine step.
#[derive(Debug, Clone, PartialEq)]
pub struct Advance {
    /// Pending state to carry into the next turn, if any.
    pub pending: Option<PendingOperation>,
    /// The assistant reply for this turn.
    pub reply: MessageContent,
    /// Set when the flow completed and the operation should run now.
    pub action: Option<ActionRequest>,
}

impl Advance {
    fn keep(pending: PendingOperation, reply: String) -> Self {
        Self {
            pending: Some(pending),
            reply: MessageContent::text(reply),
            action: None,
        }
    }

    fn done(reply: String) -> Self {
        Self {
            pending: None,
            reply: MessageContent::text(reply),
            action: None,
        }
    }

    fn invoke(kind: OperationKind, slots: CapturedSlots, reply: String) -> Self {
        Self {
            pending: None,
            reply: MessageContent::text(reply),
            action: Some(ActionRequest { kind, slots }),
        }
    }
}

/// Phrases accepted as confirmation at the final yes/no step. Matched
/// as substrings of the lowercased input; anything else cancels.
const AFFIRMATIVE_PHRASES: &[&str] = &["yes", "sure", "why not", "go ahead", "confirm", "mint"];

fn is_affirmative(input: &str) -> bool {
    let lower = input.trim().to_ascii_lowercase();
    lower == "y" || AFFIRMATIVE_PHRASES.iter().any(|p| lower.contains(p))
}

/// Starts a freshly classified operation.
///
/// Checks the wallet requirement, applies any seeds captured from the
/// trigger text, then either prompts for the first missing slot, asks
/// for confirmation, or completes immediately.
pub fn begin(
    kind: OperationKind,
    seeds: Vec<(&'static str, SlotValue)>,
    connected: Option<&AlgorandAddress>,
) -> Advance {
    let mut pending = PendingOperation::new(kind);
    let desc = pending.descriptor();

    if desc.requires_wallet && connected.is_none() {
        return Advance::done(format!(
            "🔌 Please connect your wallet first, then ask me again to {}.",
            desc.kind.label()
        ));
    }

    for (name, value) in seeds {
        pending.seed(name, value);
    }

    let intro = if desc.intro.is_empty() {
        None
    } else {
        Some(desc.intro.to_string())
    };
    step_forward(pending, intro)
}

/// Routes one user turn into the pending operation.
pub fn advance(
    mut pending: PendingOperation,
    input: &str,
    connected: Option<&AlgorandAddress>,
) -> Advance {
    match pending.step() {
        Step::Confirm => {
            if input.trim().is_empty() {
                let summary = confirm_summary(&pending);
                return Advance::keep(pending, summary);
            }
            finish(pending, input)
        }
        Step::Slot(idx) => {
            let spec = &pending.descriptor().slots[idx];
            let trimmed = input.trim();

            if trimmed.is_empty() {
                return match default_value(&spec.default, connected) {
                    Some(value) => {
                        let echo = echo_line(pending.kind(), spec, &value);
                        pending.fill_current(value);
                        step_forward(pending, Some(echo))
                    }
                    // No default to fall back on; same question again.
                    None => {
                        let prompt = spec.prompt.to_string();
                        Advance::keep(pending, prompt)
                    }
                };
            }

            match spec.kind.parse(trimmed) {
                Ok(value) => {
                    let echo = echo_line(pending.kind(), spec, &value);
                    pending.fill_current(value);
                    step_forward(pending, Some(echo))
                }
                // Invalid input leaves the state untouched and repeats
                // the prompt, so retries are idempotent.
                Err(err) => {
                    let reply = format!("⚠️ {err}\n\n{}", spec.prompt);
                    Advance::keep(pending, reply)
                }
            }
        }
    }
}

/// Moves the cursor to the next awaited slot and builds the reply.
fn step_forward(mut pending: PendingOperation, lead: Option<String>) -> Advance {
    match pending.advance_cursor() {
        Some(idx) => {
            let prompt = pending.descriptor().slots[idx].prompt;
            Advance::keep(pending, join_lines(lead, prompt.to_string()))
        }
        None => {
            let desc = pending.descriptor();
            if desc.confirm {
                let summary = confirm_summary(&pending);
                Advance::keep(pending, join_lines(lead, summary))
            } else {
                let kind = pending.kind();
                let slots = pending.captured();
                Advance::invoke(kind, slots, join_lines(lead, invoking_line(kind)))
            }
        }
    }
}

/// Handles the user's answer at the confirm step. Pending state is
/// dropped either way; only an affirmative answer produces an action.
fn finish(pending: PendingOperation, input: &str) -> Advance {
    let kind = pending.kind();
    if is_affirmative(input) {
        let slots = pending.captured();
        Advance::invoke(kind, slots, invoking_line(kind))
    } else {
        Advance::done(format!(
            "❌ Okay, I've cancelled the {}. Ask me again anytime.",
            kind.label()
        ))
    }
}

fn join_lines(lead: Option<String>, tail: String) -> String {
    match lead {
        Some(lead) if !lead.is_empty() => format!("{lead}\n\n{tail}"),
        _ => tail,
    }
}

fn default_value(
    default: &SlotDefault,
    connected: Option<&AlgorandAddress>,
) -> Option<SlotValue> {
    match default {
        SlotDefault::None => None,
        SlotDefault::CallerAddress => connected.cloned().map(SlotValue::Address),
        SlotDefault::View(view) => Some(SlotValue::View(*view)),
        SlotDefault::Bool(b) => Some(SlotValue::Bool(*b)),
        SlotDefault::Text(text) => Some(SlotValue::Text((*text).to_string())),
    }
}

fn echo_line(kind: OperationKind, spec: &SlotSpec, value: &SlotValue) -> String {
    format!(
        "Got it! {}: `{}`.",
        pretty_name(spec.name),
        value_display(kind, spec.name, value)
    )
}

fn confirm_summary(pending: &PendingOperation) -> String {
    let kind = pending.kind();
    let mut lines = vec!["✅ Here's what I gathered:".to_string()];
    for (name, value) in pending.captured().iter() {
        lines.push(format!(
            "- {}: {}",
            pretty_name(name),
            value_display(kind, name, value)
        ));
    }
    lines.push(String::new());
    lines.push(format!(
        "👉 Should I go ahead with the {}? (yes / no)",
        kind.label()
    ));
    lines.join("\n")
}

fn invoking_line(kind: OperationKind) -> String {
    match kind {
        OperationKind::ResolveNfdName
        | OperationKind::ReverseLookupNfd
        | OperationKind::GetAllNfdsForAddress
        | OperationKind::GetQuotes
        | OperationKind::SearchProjects => "⏳ Looking that up...".to_string(),
        _ => format!("🚀 Working on your {}...", kind.label()),
    }
}

/// "total_supply" -> "Total Supply".
fn pretty_name(name: &str) -> String {
    name.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Value rendering with flow-specific units.
fn value_display(kind: OperationKind, name: &str, value: &SlotValue) -> String {
    match (kind, name, value) {
        (OperationKind::TransferNative, "amount", SlotValue::Amount(n)) => format!("{n} ALGO"),
        (_, "years", SlotValue::UInt(n)) => {
            format!("{n} year{}", if *n == 1 { "" } else { "s" })
        }
        (_, _, SlotValue::Text(text)) if text.is_empty() => "(none)".to_string(),
        _ => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{NfdIdentifier, NfdView};

    fn addr(fill: char) -> AlgorandAddress {
        AlgorandAddress::parse(&format!("{}Y", fill.to_string().repeat(57))).unwrap()
    }

    fn reply_text(advance: &Advance) -> &str {
        advance.reply.as_text()
    }

    #[test]
    fn wallet_gate_blocks_mutating_flows() {
        let out = begin(OperationKind::TransferNative, Vec::new(), None);
        assert!(out.pending.is_none());
        assert!(out.action.is_none());
        assert!(reply_text(&out).contains("connect your wallet"));
    }

    #[test]
    fn native_transfer_walks_slots_then_confirms_then_invokes() {
        let caller = addr('A');
        let out = begin(OperationKind::TransferNative, Vec::new(), Some(&caller));
        assert!(reply_text(&out).contains("receiver address"));

        let out = advance(out.pending.unwrap(), addr('B').as_str(), Some(&caller));
        assert!(reply_text(&out).contains("How much ALGO"));

        let out = advance(out.pending.unwrap(), "10", Some(&caller));
        let summary = reply_text(&out);
        assert!(summary.contains("10 ALGO"), "summary: {summary}");
        assert!(summary.contains("yes / no"));

        let out = advance(out.pending.unwrap(), "yes", Some(&caller));
        assert!(out.pending.is_none());
        let action = out.action.expect("confirmed flow yields an action");
        assert_eq!(action.kind, OperationKind::TransferNative);
        assert_eq!(action.slots.amount("amount"), Some(10.0));
        assert_eq!(action.slots.address("receiver"), Some(&addr('B')));
    }

    #[test]
    fn invalid_slot_input_reprompts_without_changing_state() {
        let caller = addr('A');
        let out = begin(OperationKind::TransferNative, Vec::new(), Some(&caller));
        let before = out.pending.clone().unwrap();

        let out = advance(out.pending.unwrap(), "not an address", Some(&caller));
        assert_eq!(out.pending.as_ref(), Some(&before));
        assert!(out.action.is_none());
        assert!(reply_text(&out).contains("receiver address"));
    }

    #[test]
    fn anything_but_affirmative_cancels_at_confirm() {
        let caller = addr('A');
        let out = begin(OperationKind::CrossChainSetPeer, Vec::new(), Some(&caller));
        let out = advance(out.pending.unwrap(), "101", Some(&caller));
        let out = advance(out.pending.unwrap(), "102", Some(&caller));
        assert!(reply_text(&out).contains("yes / no"));

        let out = advance(out.pending.unwrap(), "hmm maybe later", Some(&caller));
        assert!(out.pending.is_none());
        assert!(out.action.is_none());
        assert!(reply_text(&out).contains("cancelled"));
    }

    #[test]
    fn affirmative_matching_accepts_phrases_and_bare_y() {
        assert!(is_affirmative("y"));
        assert!(is_affirmative("Yes please"));
        assert!(is_affirmative("sure, why not"));
        assert!(is_affirmative("go ahead!"));
        assert!(!is_affirmative("no"));
        assert!(!is_affirmative("maybe"));
    }

    #[test]
    fn fully_seeded_read_only_flow_invokes_immediately() {
        let seeds = vec![(
            "name_or_id",
            SlotValue::Nfd(NfdIdentifier::Name("myname.algo".to_string())),
        )];
        let out = begin(OperationKind::ReverseLookupNfd, seeds, None);
        assert!(out.pending.is_none());
        let action = out.action.expect("seeded lookup runs at once");
        assert_eq!(action.kind, OperationKind::ReverseLookupNfd);
        assert_eq!(action.slots.view("view"), NfdView::Brief);
    }

    #[test]
    fn empty_input_fills_caller_address_default() {
        let caller = addr('C');
        let out = begin(OperationKind::MintNfdName, Vec::new(), Some(&caller));
        let out = advance(out.pending.unwrap(), "myname.algo", Some(&caller));
        let out = advance(out.pending.unwrap(), "2", Some(&caller));
        assert!(reply_text(&out).contains("reserved for"));

        let out = advance(out.pending.unwrap(), "", Some(&caller));
        let pending = out.pending.expect("confirm step still pending");
        assert_eq!(pending.step(), Step::Confirm);
        assert_eq!(
            pending.value("reserved_for"),
            Some(&SlotValue::Address(caller))
        );
    }

    #[test]
    fn empty_input_without_default_repeats_the_prompt() {
        let caller = addr('A');
        let out = begin(OperationKind::TransferNative, Vec::new(), Some(&caller));
        let before = out.pending.clone().unwrap();
        let out = advance(out.pending.unwrap(), "   ", Some(&caller));
        assert_eq!(out.pending.as_ref(), Some(&before));
        assert!(reply_text(&out).contains("receiver address"));
    }
}
