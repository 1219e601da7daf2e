//! Algorand address value object.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::SlotError;

/// A 58-character Algorand address, the canonical Base32 encoding of a
/// public key plus checksum. The strict pattern constrains the Base32
/// value of the trailing character; a looser 58-character fallback is
/// accepted because wallet UIs occasionally emit addresses that only
/// satisfy the relaxed shape.
static STRICT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z2-7]{57}[AEIMQUY4]$").expect("valid address regex"));
static LOOSE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z2-7]{58}$").expect("valid address regex"));

/// A validated Algorand account address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlgorandAddress(String);

impl AlgorandAddress {
    /// Parses an address from user input. Matching is case-insensitive;
    /// the stored form is uppercased.
    pub fn parse(input: &str) -> Result<Self, SlotError> {
        let candidate = input.trim().to_ascii_uppercase();
        if STRICT_PATTERN.is_match(&candidate) || LOOSE_PATTERN.is_match(&candidate) {
            Ok(Self(candidate))
        } else {
            Err(SlotError::InvalidAddress)
        }
    }

    /// True when the address satisfies the strict checksum-shaped pattern
    /// rather than only the 58-character fallback.
    pub fn is_strict(&self) -> bool {
        STRICT_PATTERN.is_match(&self.0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Shortened form for display: first 6 and last 6 characters.
    pub fn abbreviated(&self) -> String {
        format!("{}...{}", &self.0[..6], &self.0[self.0.len() - 6..])
    }
}

impl fmt::Display for AlgorandAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AlgorandAddress {
    type Err = SlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn strict_addr() -> String {
        // 57 Base32 characters plus a constrained final character.
        format!("{}{}", "A".repeat(57), "Y")
    }

    #[test]
    fn accepts_strict_pattern() {
        let addr = AlgorandAddress::parse(&strict_addr()).unwrap();
        assert!(addr.is_strict());
        assert_eq!(addr.as_str().len(), 58);
    }

    #[test]
    fn accepts_loose_58_char_fallback() {
        // Final char Z is outside the strict set but inside Base32.
        let input = format!("{}Z", "B".repeat(57));
        let addr = AlgorandAddress::parse(&input).unwrap();
        assert!(!addr.is_strict());
    }

    #[test]
    fn matching_is_case_insensitive() {
        let lower = strict_addr().to_ascii_lowercase();
        let addr = AlgorandAddress::parse(&lower).unwrap();
        assert_eq!(addr.as_str(), strict_addr());
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(AlgorandAddress::parse(&"A".repeat(57)).is_err());
        assert!(AlgorandAddress::parse(&"A".repeat(59)).is_err());
        assert!(AlgorandAddress::parse("").is_err());
    }

    #[test]
    fn rejects_invalid_base32_digits() {
        for digit in ["0", "1", "8", "9"] {
            let input = format!("{}{}", digit, "A".repeat(57));
            assert!(AlgorandAddress::parse(&input).is_err(), "digit {digit}");
        }
    }

    #[test]
    fn abbreviated_keeps_both_ends() {
        let addr = AlgorandAddress::parse(&strict_addr()).unwrap();
        assert_eq!(addr.abbreviated(), "AAAAAA...AAAAAY");
    }

    proptest! {
        #[test]
        fn any_57_base32_chars_plus_constrained_tail_parse(
            body in "[A-Z2-7]{57}",
            tail in "[AEIMQUY4]"
        ) {
            let input = format!("{body}{tail}");
            let addr = AlgorandAddress::parse(&input).unwrap();
            prop_assert!(addr.is_strict());
        }

        #[test]
        fn strings_with_forbidden_digits_never_parse(
            prefix in "[A-Z2-7]{0,57}",
            digit in "[0189]",
        ) {
            let mut input = prefix;
            input.push_str(digit.as_str());
            while input.len() < 58 {
                input.push('A');
            }
            prop_assert!(AlgorandAddress::parse(&input).is_err());
        }
    }
}
