//! NFD (Algorand Name Service) value objects.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::SlotError;

/// Names end in `.algo`; a purely numeric string is treated as an NFD
/// application id.
static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^.+\.algo$").expect("valid nfd name regex"));
static NUMERIC_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+$").expect("valid nfd id regex"));

/// Identifies an NFD record: either a human-readable name or the
/// numeric application id of the registry contract instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NfdIdentifier {
    Name(String),
    NumericId(u64),
}

impl NfdIdentifier {
    /// Parses user input into an NFD identifier. Names are lowercased.
    pub fn parse(input: &str) -> Result<Self, SlotError> {
        let candidate = input.trim().to_ascii_lowercase();
        if NAME_PATTERN.is_match(&candidate) {
            Ok(Self::Name(candidate))
        } else if NUMERIC_PATTERN.is_match(&candidate) {
            candidate
                .parse::<u64>()
                .map(Self::NumericId)
                .map_err(|_| SlotError::InvalidNfdName)
        } else {
            Err(SlotError::InvalidNfdName)
        }
    }
}

impl fmt::Display for NfdIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NfdIdentifier::Name(name) => write!(f, "{}", name),
            NfdIdentifier::NumericId(id) => write!(f, "{}", id),
        }
    }
}

/// Detail level requested from the NFD registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NfdView {
    Tiny,
    Thumbnail,
    #[default]
    Brief,
    Full,
}

impl NfdView {
    pub fn as_str(&self) -> &'static str {
        match self {
            NfdView::Tiny => "tiny",
            NfdView::Thumbnail => "thumbnail",
            NfdView::Brief => "brief",
            NfdView::Full => "full",
        }
    }
}

impl fmt::Display for NfdView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NfdView {
    type Err = SlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tiny" => Ok(NfdView::Tiny),
            "thumbnail" => Ok(NfdView::Thumbnail),
            "brief" => Ok(NfdView::Brief),
            "full" => Ok(NfdView::Full),
            other => Err(SlotError::InvalidView(other.to_string())),
        }
    }
}
