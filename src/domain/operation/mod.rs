//! Operation module - the closed set of multi-turn flows.
//!
//! Each operation kind has a static descriptor: the ordered slot list,
//! per-slot validators and defaults, and whether the flow needs a
//! connected wallet and a final confirmation. Per-operation differences
//! live in these tables, not in per-flow control flow.

mod descriptor;
mod kind;
mod pending;
mod slot;

pub use descriptor::{descriptor, OperationDescriptor};
pub use kind::OperationKind;
pub use pending::{CapturedSlots, PendingOperation, Step};
pub use slot::{SlotDefault, SlotKind, SlotSpec, SlotValue};
