use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// School days a timetable covers. Closed set, iterated in this order.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    #[default]
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
}

impl Weekday {
    pub const ALL: [Weekday; 5] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
    ];

    /// Position of the day in [`Weekday::ALL`].
    pub fn index(self) -> usize {
        match self {
            Weekday::Mon => 0,
            Weekday::Tue => 1,
            Weekday::Wed => 2,
            Weekday::Thu => 3,
            Weekday::Fri => 4,
        }
    }

    /// Lowercase three-letter code used as the export key.
    pub fn code(self) -> &'static str {
        match self {
            Weekday::Mon => "mon",
            Weekday::Tue => "tue",
            Weekday::Wed => "wed",
            Weekday::Thu => "thu",
            Weekday::Fri => "fri",
        }
    }

    /// One-character label shown on the weekday tabs.
    pub fn korean_label(self) -> &'static str {
        match self {
            Weekday::Mon => "월",
            Weekday::Tue => "화",
            Weekday::Wed => "수",
            Weekday::Thu => "목",
            Weekday::Fri => "금",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL
            .into_iter()
            .find(|day| day.code().eq_ignore_ascii_case(code))
    }

    pub fn to_chrono(self) -> chrono::Weekday {
        match self {
            Weekday::Mon => chrono::Weekday::Mon,
            Weekday::Tue => chrono::Weekday::Tue,
            Weekday::Wed => chrono::Weekday::Wed,
            Weekday::Thu => chrono::Weekday::Thu,
            Weekday::Fri => chrono::Weekday::Fri,
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownWeekday(pub String);

impl fmt::Display for UnknownWeekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown weekday '{}' (expected mon, tue, wed, thu or fri)", self.0)
    }
}

impl std::error::Error for UnknownWeekday {}

impl FromStr for Weekday {
    type Err = UnknownWeekday;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| UnknownWeekday(s.to_string()))
    }
}

impl TryFrom<chrono::Weekday> for Weekday {
    type Error = UnknownWeekday;

    fn try_from(value: chrono::Weekday) -> Result<Self, Self::Error> {
        match value {
            chrono::Weekday::Mon => Ok(Weekday::Mon),
            chrono::Weekday::Tue => Ok(Weekday::Tue),
            chrono::Weekday::Wed => Ok(Weekday::Wed),
            chrono::Weekday::Thu => Ok(Weekday::Thu),
            chrono::Weekday::Fri => Ok(Weekday::Fri),
            other => Err(UnknownWeekday(other.to_string())),
        }
    }
}
