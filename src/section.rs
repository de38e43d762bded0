use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// One class group, rendered as `"<grade>-<section>"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SectionId {
    pub grade: u32,
    pub section: u32,
}

impl SectionId {
    pub fn new(grade: u32, section: u32) -> Option<Self> {
        (grade > 0 && section > 0).then_some(Self { grade, section })
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.grade, self.section)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidSectionId(pub String);

impl fmt::Display for InvalidSectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid section id '{}' (expected <grade>-<section>)", self.0)
    }
}

impl std::error::Error for InvalidSectionId {}

impl FromStr for SectionId {
    type Err = InvalidSectionId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_compound(s.trim()).ok_or_else(|| InvalidSectionId(s.to_string()))
    }
}

impl Serialize for SectionId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SectionId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Parses `"1,2,3"` or `"1-1, 1-2"` style input. Bare numbers take `grade`;
/// unusable tokens are dropped. Sorted (stably) by section number only.
pub fn normalize_sections(grade: u32, raw: &str) -> Vec<SectionId> {
    let mut seen = HashSet::new();
    let mut out: Vec<SectionId> = raw
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .filter_map(|token| parse_token(grade, token))
        .filter(|id| seen.insert(*id))
        .collect();
    out.sort_by_key(|id| id.section);
    out
}

fn parse_token(grade: u32, token: &str) -> Option<SectionId> {
    if let Some(id) = parse_compound(token) {
        return Some(id);
    }
    if split_compound(token).is_some() {
        // "0-3" and friends: right shape, but not a usable id.
        return None;
    }
    let digits: String = token.chars().filter(char::is_ascii_digit).collect();
    SectionId::new(grade, parse_number(&digits)?)
}

fn split_compound(token: &str) -> Option<(&str, &str)> {
    let (left, right) = token.split_once('-')?;
    let (left, right) = (left.trim_end(), right.trim_start());
    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    (all_digits(left) && all_digits(right)).then_some((left, right))
}

fn parse_compound(token: &str) -> Option<SectionId> {
    let (grade, section) = split_compound(token)?;
    SectionId::new(parse_number(grade)?, parse_number(section)?)
}

fn parse_number(digits: &str) -> Option<u32> {
    digits.parse().ok()
}
