//! Slot specifications, values and validators.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{AlgorandAddress, NfdIdentifier, NfdView, SlotError};

/// EVM-style receiving address used by the cross-chain bridge.
static HEX_ADDRESS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^0x[a-fA-F0-9]{40}$").expect("valid hex address regex"));

/// A captured slot value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SlotValue {
    Text(String),
    Address(AlgorandAddress),
    Nfd(NfdIdentifier),
    UInt(u64),
    Amount(f64),
    Bool(bool),
    View(NfdView),
    HexAddress(String),
    Tickers(Vec<String>),
}

impl SlotValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            SlotValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_address(&self) -> Option<&AlgorandAddress> {
        match self {
            SlotValue::Address(addr) => Some(addr),
            _ => None,
        }
    }

    pub fn as_nfd(&self) -> Option<&NfdIdentifier> {
        match self {
            SlotValue::Nfd(id) => Some(id),
            _ => None,
        }
    }

    pub fn as_uint(&self) -> Option<u64> {
        match self {
            SlotValue::UInt(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_amount(&self) -> Option<f64> {
        match self {
            SlotValue::Amount(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            SlotValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_view(&self) -> Option<NfdView> {
        match self {
            SlotValue::View(view) => Some(*view),
            _ => None,
        }
    }

    pub fn as_hex_address(&self) -> Option<&str> {
        match self {
            SlotValue::HexAddress(addr) => Some(addr),
            _ => None,
        }
    }

    pub fn as_tickers(&self) -> Option<&[String]> {
        match self {
            SlotValue::Tickers(tickers) => Some(tickers),
            _ => None,
        }
    }
}

impl fmt::Display for SlotValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotValue::Text(text) => write!(f, "{}", text),
            SlotValue::Address(addr) => write!(f, "{}", addr),
            SlotValue::Nfd(id) => write!(f, "{}", id),
            SlotValue::UInt(n) => write!(f, "{}", n),
            SlotValue::Amount(n) => write!(f, "{}", n),
            SlotValue::Bool(b) => write!(f, "{}", if *b { "yes" } else { "no" }),
            SlotValue::View(view) => write!(f, "{}", view),
            SlotValue::HexAddress(addr) => write!(f, "{}", addr),
            SlotValue::Tickers(tickers) => write!(f, "{}", tickers.join(", ")),
        }
    }
}

/// Validator applied to user input for one slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SlotKind {
    /// Non-empty free text up to a length bound.
    FreeText { max_len: usize },
    /// One of a closed set of lowercase keywords.
    Choice { options: &'static [&'static str] },
    /// Algorand account address.
    Address,
    /// NFD name (`*.algo`) or numeric registry id.
    NfdNameOrId,
    /// NFD name only; numeric ids are rejected.
    NfdName,
    /// Whole number within an inclusive range.
    UInt { min: u64, max: u64 },
    /// Positive decimal amount.
    Amount,
    /// Yes/no answer.
    Bool,
    /// NFD registry view type.
    View,
    /// 0x-prefixed EVM address.
    HexAddress,
    /// Comma-separated ticker list.
    Tickers,
}

impl SlotKind {
    /// Parses and validates raw user input into a slot value.
    ///
    /// Non-numeric input for numeric slots is rejected with a re-prompt
    /// error, never silently coerced to zero.
    pub fn parse(&self, input: &str) -> Result<SlotValue, SlotError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(SlotError::Empty);
        }

        match self {
            SlotKind::FreeText { max_len } => {
                if trimmed.chars().count() > *max_len {
                    Err(SlotError::TooLong {
                        max: *max_len,
                        actual: trimmed.chars().count(),
                    })
                } else {
                    Ok(SlotValue::Text(trimmed.to_string()))
                }
            }
            SlotKind::Choice { options } => {
                let lower = trimmed.to_ascii_lowercase();
                if options.contains(&lower.as_str()) {
                    Ok(SlotValue::Text(lower))
                } else {
                    Err(SlotError::NotAnOption {
                        options,
                        actual: trimmed.to_string(),
                    })
                }
            }
            SlotKind::Address => AlgorandAddress::parse(trimmed).map(SlotValue::Address),
            SlotKind::NfdNameOrId => NfdIdentifier::parse(trimmed).map(SlotValue::Nfd),
            SlotKind::NfdName => match NfdIdentifier::parse(trimmed)? {
                id @ NfdIdentifier::Name(_) => Ok(SlotValue::Nfd(id)),
                NfdIdentifier::NumericId(_) => Err(SlotError::InvalidNfdName),
            },
            SlotKind::UInt { min, max } => {
                let n: u64 = trimmed
                    .parse()
                    .map_err(|_| SlotError::NotAnInteger(trimmed.to_string()))?;
                if n < *min || n > *max {
                    Err(SlotError::OutOfRange {
                        min: *min,
                        max: *max,
                        actual: n,
                    })
                } else {
                    Ok(SlotValue::UInt(n))
                }
            }
            SlotKind::Amount => {
                let n: f64 = trimmed
                    .parse()
                    .map_err(|_| SlotError::InvalidAmount(trimmed.to_string()))?;
                if n.is_finite() && n > 0.0 {
                    Ok(SlotValue::Amount(n))
                } else {
                    Err(SlotError::InvalidAmount(trimmed.to_string()))
                }
            }
            SlotKind::Bool => match trimmed.to_ascii_lowercase().as_str() {
                "yes" | "y" | "true" => Ok(SlotValue::Bool(true)),
                "no" | "n" | "false" => Ok(SlotValue::Bool(false)),
                other => Err(SlotError::NotABool(other.to_string())),
            },
            SlotKind::View => trimmed.parse::<NfdView>().map(SlotValue::View),
            SlotKind::HexAddress => {
                if HEX_ADDRESS_PATTERN.is_match(trimmed) {
                    Ok(SlotValue::HexAddress(trimmed.to_string()))
                } else {
                    Err(SlotError::InvalidHexAddress(trimmed.to_string()))
                }
            }
            SlotKind::Tickers => {
                let tickers: Vec<String> = trimmed
                    .split(',')
                    .map(|t| t.trim().to_ascii_lowercase())
                    .filter(|t| !t.is_empty())
                    .collect();
                if tickers.is_empty() {
                    Err(SlotError::NoTickers)
                } else {
                    Ok(SlotValue::Tickers(tickers))
                }
            }
        }
    }
}

/// Default substituted when the user submits empty input for a slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SlotDefault {
    /// No default: empty input is a validation error.
    None,
    /// The caller's connected wallet address.
    CallerAddress,
    /// A fixed view type.
    View(NfdView),
    /// A fixed yes/no answer.
    Bool(bool),
    /// A fixed (possibly empty) text value.
    Text(&'static str),
}

/// Static description of one required input within an operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotSpec {
    /// Machine name, unique within the operation.
    pub name: &'static str,
    /// Prompt shown when this slot is awaited.
    pub prompt: &'static str,
    pub kind: SlotKind,
    pub default: SlotDefault,
    /// Unprompted slots are filled from their default without a turn.
    pub prompted: bool,
}
