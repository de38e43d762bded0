use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of periods per school day, always within `MIN..=MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "i64", into = "usize")]
pub struct PeriodCount(usize);

impl PeriodCount {
    pub const MIN: usize = 1;
    pub const MAX: usize = 12;
    pub const DEFAULT: PeriodCount = PeriodCount(7);

    pub fn clamped(value: i64) -> Self {
        let clamped = value.clamp(Self::MIN as i64, Self::MAX as i64);
        Self(clamped as usize)
    }

    /// Reads the leading integer of `text` the way a number field does:
    /// `" 9 "`, `"9th"` and `"+9"` all give 9. Empty or non-numeric text
    /// falls back to [`PeriodCount::DEFAULT`].
    pub fn parse(text: &str) -> Self {
        leading_integer(text.trim())
            .map(Self::clamped)
            .unwrap_or(Self::DEFAULT)
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for PeriodCount {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<i64> for PeriodCount {
    fn from(value: i64) -> Self {
        Self::clamped(value)
    }
}

impl From<PeriodCount> for usize {
    fn from(value: PeriodCount) -> Self {
        value.0
    }
}

impl fmt::Display for PeriodCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn leading_integer(text: &str) -> Option<i64> {
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let digits = &digits[..end];
    if digits.is_empty() {
        return None;
    }
    // Anything too long for i64 is far outside the clamp range anyway.
    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}
