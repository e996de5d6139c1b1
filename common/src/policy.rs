//! # Overflow Policy
//!
//! Squaring an `i64` overflows once the magnitude of the input exceeds
//! `3_037_000_499`. The policy decides what the caller gets back then.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OverflowPolicy {
    /// Report overflow as an error.
    #[default]
    Checked,
    /// Two's-complement wrap around.
    Wrapping,
    /// Clamp to `i64::MAX`.
    Saturating,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyParseError {
    #[error("unknown overflow policy '{0}' (expected checked, wrapping or saturating)")]
    Unknown(String),
}

impl FromStr for OverflowPolicy {
    type Err = PolicyParseError;

    /// Accepts `checked`, `wrapping`/`wrap` and `saturating`/`saturate`,
    /// ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "checked" => Ok(Self::Checked),
            "wrapping" | "wrap" => Ok(Self::Wrapping),
            "saturating" | "saturate" => Ok(Self::Saturating),
            _ => Err(PolicyParseError::Unknown(s.to_string())),
        }
    }
}

impl fmt::Display for OverflowPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Checked => "checked",
            Self::Wrapping => "wrapping",
            Self::Saturating => "saturating",
        };
        f.write_str(name)
    }
}
