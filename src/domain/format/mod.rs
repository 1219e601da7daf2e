//! Response formatting - external records rendered into chat replies.

mod records;
mod render;

pub use records::{
    BridgeReceipt, NfdPage, NfdProperties, NfdRecord, Project, Quote, SwapReceipt, TxReceipt,
};
pub use render::Formatter;
