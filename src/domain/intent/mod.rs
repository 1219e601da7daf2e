//! Intent module - free-text classification into operations.

mod classifier;

pub use classifier::{classify, Classification};
