//! Pending operation state.
//!
//! The single piece of mutable state carried across turns for one
//! in-flight multi-step flow. A session holds at most one of these.

use serde::{Deserialize, Serialize};

use super::{descriptor, OperationDescriptor, OperationKind, SlotValue};

/// Which input the flow is currently awaiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Step {
    /// Awaiting the slot at this index in the descriptor table.
    Slot(usize),
    /// All slots filled; awaiting the final yes/no.
    Confirm,
}

/// Captured state of one in-flight multi-turn operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingOperation {
    kind: OperationKind,
    values: Vec<Option<SlotValue>>,
    step: Step,
}

impl PendingOperation {
    /// Creates a fresh pending operation awaiting its first slot.
    pub fn new(kind: OperationKind) -> Self {
        let desc = descriptor(kind);
        let step = if desc.slots.is_empty() {
            Step::Confirm
        } else {
            Step::Slot(0)
        };
        Self {
            kind,
            values: vec![None; desc.slots.len()],
            step,
        }
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn descriptor(&self) -> &'static OperationDescriptor {
        descriptor(self.kind)
    }

    pub fn step(&self) -> Step {
        self.step
    }

    /// The captured value for a slot, by name.
    pub fn value(&self, name: &str) -> Option<&SlotValue> {
        let idx = self
            .descriptor()
            .slots
            .iter()
            .position(|s| s.name == name)?;
        self.values[idx].as_ref()
    }

    /// Stores a value by slot name. Returns false for unknown names.
    pub fn seed(&mut self, name: &str, value: SlotValue) -> bool {
        let Some(idx) = self
            .descriptor()
            .slots
            .iter()
            .position(|s| s.name == name)
        else {
            return false;
        };
        self.values[idx] = Some(value);
        true
    }

    /// Stores a value into the currently awaited slot.
    ///
    /// Panics in debug builds if the flow is at the confirm step; the
    /// state machine never calls this there.
    pub fn fill_current(&mut self, value: SlotValue) {
        match self.step {
            Step::Slot(idx) => self.values[idx] = Some(value),
            Step::Confirm => debug_assert!(false, "fill_current at confirm step"),
        }
    }

    /// Moves the cursor forward past filled and unprompted slots.
    ///
    /// Unprompted slots are filled from their static defaults as the
    /// cursor passes them. Returns the slot index now awaited, or None
    /// when every slot is filled and the step is `Confirm`.
    pub fn advance_cursor(&mut self) -> Option<usize> {
        let desc = self.descriptor();
        let mut idx = match self.step {
            Step::Slot(idx) => idx,
            Step::Confirm => return None,
        };
        while idx < desc.slots.len() {
            if self.values[idx].is_some() {
                idx += 1;
                continue;
            }
            let spec = &desc.slots[idx];
            if !spec.prompted {
                if let Some(value) = static_default(&spec.default) {
                    self.values[idx] = Some(value);
                    idx += 1;
                    continue;
                }
            }
            self.step = Step::Slot(idx);
            return Some(idx);
        }
        self.step = Step::Confirm;
        None
    }

    /// True when every slot has a value.
    pub fn is_complete(&self) -> bool {
        self.values.iter().all(|v| v.is_some())
    }

    /// Snapshot of all filled slots, in declaration order.
    pub fn captured(&self) -> CapturedSlots {
        let desc = self.descriptor();
        CapturedSlots(
            desc.slots
                .iter()
                .zip(&self.values)
                .filter_map(|(spec, value)| value.clone().map(|v| (spec.name, v)))
                .collect(),
        )
    }
}

fn static_default(default: &super::SlotDefault) -> Option<SlotValue> {
    match default {
        super::SlotDefault::View(view) => Some(SlotValue::View(*view)),
        super::SlotDefault::Bool(b) => Some(SlotValue::Bool(*b)),
        super::SlotDefault::Text(text) => Some(SlotValue::Text((*text).to_string())),
        super::SlotDefault::None | super::SlotDefault::CallerAddress => None,
    }
}

/// The exact slots collected for a confirmed operation, handed to the
/// external action invoker. No extra slots, none missing.
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedSlots(Vec<(&'static str, SlotValue)>);

impl CapturedSlots {
    pub fn get(&self, name: &str) -> Option<&SlotValue> {
        self.0.iter().find(|(n, _)| *n == name).map(|(_, v)| v)
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(SlotValue::as_text)
    }

    pub fn address(&self, name: &str) -> Option<&crate::domain::foundation::AlgorandAddress> {
        self.get(name).and_then(SlotValue::as_address)
    }

    pub fn nfd(&self, name: &str) -> Option<&crate::domain::foundation::NfdIdentifier> {
        self.get(name).and_then(SlotValue::as_nfd)
    }

    pub fn uint(&self, name: &str) -> Option<u64> {
        self.get(name).and_then(SlotValue::as_uint)
    }

    pub fn amount(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(SlotValue::as_amount)
    }

    pub fn bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(SlotValue::as_bool)
    }

    pub fn view(&self, name: &str) -> crate::domain::foundation::NfdView {
        self.get(name)
            .and_then(SlotValue::as_view)
            .unwrap_or_default()
    }

    pub fn hex_address(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(SlotValue::as_hex_address)
    }

    pub fn tickers(&self, name: &str) -> Option<&[String]> {
        self.get(name).and_then(SlotValue::as_tickers)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &SlotValue)> {
        self.0.iter().map(|(n, v)| (*n, v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::NfdView;

    #[test]
    fn new_pending_awaits_first_slot() {
        let pending = PendingOperation::new(OperationKind::TransferNative);
        assert_eq!(pending.step(), Step::Slot(0));
        assert!(!pending.is_complete());
    }

    #[test]
    fn cursor_skips_filled_and_unprompted_slots() {
        let mut pending = PendingOperation::new(OperationKind::ReverseLookupNfd);
        assert!(pending.seed(
            "name_or_id",
            SlotValue::Nfd(crate::domain::foundation::NfdIdentifier::Name(
                "myname.algo".to_string()
            ))
        ));

        // name_or_id is filled and view is unprompted with a default, so
        // the cursor should land on Confirm with everything captured.
        assert_eq!(pending.advance_cursor(), None);
        assert_eq!(pending.step(), Step::Confirm);
        assert!(pending.is_complete());
        assert_eq!(pending.captured().view("view"), NfdView::Brief);
    }

    #[test]
    fn cursor_stops_on_first_unfilled_prompted_slot() {
        let mut pending = PendingOperation::new(OperationKind::TransferAsset);
        pending.fill_current(SlotValue::Address(
            crate::domain::foundation::AlgorandAddress::parse(&format!("{}Y", "A".repeat(57)))
                .unwrap(),
        ));
        assert_eq!(pending.advance_cursor(), Some(1));
        assert_eq!(pending.step(), Step::Slot(1));
    }

    #[test]
    fn captured_contains_exactly_the_filled_slots() {
        let mut pending = PendingOperation::new(OperationKind::CrossChainSetPeer);
        pending.fill_current(SlotValue::UInt(101));
        pending.advance_cursor();
        pending.fill_current(SlotValue::UInt(102));
        pending.advance_cursor();

        let captured = pending.captured();
        assert_eq!(captured.len(), 2);
        assert_eq!(captured.uint("src_chain_id"), Some(101));
        assert_eq!(captured.uint("dest_chain_id"), Some(102));
        assert_eq!(captured.uint("amount"), None);
    }

    #[test]
    fn seed_rejects_unknown_slot_names() {
        let mut pending = PendingOperation::new(OperationKind::GetQuotes);
        assert!(!pending.seed("nope", SlotValue::UInt(1)));
    }
}
