use crate::section::SectionId;
use crate::weekday::Weekday;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

// Field order is the serialized key order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekSlots {
    pub mon: Vec<String>,
    pub tue: Vec<String>,
    pub wed: Vec<String>,
    pub thu: Vec<String>,
    pub fri: Vec<String>,
}

impl WeekSlots {
    pub fn day(&self, day: Weekday) -> &[String] {
        match day {
            Weekday::Mon => &self.mon,
            Weekday::Tue => &self.tue,
            Weekday::Wed => &self.wed,
            Weekday::Thu => &self.thu,
            Weekday::Fri => &self.fri,
        }
    }

    fn day_mut(&mut self, day: Weekday) -> &mut Vec<String> {
        match day {
            Weekday::Mon => &mut self.mon,
            Weekday::Tue => &mut self.tue,
            Weekday::Wed => &mut self.wed,
            Weekday::Thu => &mut self.thu,
            Weekday::Fri => &mut self.fri,
        }
    }

    pub(crate) fn set_day(&mut self, day: Weekday, slots: Vec<String>) {
        *self.day_mut(day) = slots;
    }

    pub fn is_empty(&self) -> bool {
        Weekday::ALL.iter().all(|day| self.day(*day).is_empty())
    }
}

/// Export snapshot. Keys serialize in section order, so `"1-2"` precedes `"1-10"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleDocument {
    sections: Vec<(SectionId, WeekSlots)>,
}

impl ScheduleDocument {
    pub(crate) fn push(&mut self, section: SectionId, week: WeekSlots) {
        self.sections.push((section, week));
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn get(&self, section: &str) -> Option<&WeekSlots> {
        self.sections
            .iter()
            .find(|(id, _)| id.to_string() == section)
            .map(|(_, week)| week)
    }

    pub fn section_ids(&self) -> impl Iterator<Item = SectionId> + '_ {
        self.sections.iter().map(|(id, _)| *id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (SectionId, &WeekSlots)> {
        self.sections.iter().map(|(id, week)| (*id, week))
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Serialize for ScheduleDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sections.len()))?;
        for (id, week) in &self.sections {
            map.serialize_entry(&id.to_string(), week)?;
        }
        map.end()
    }
}

/// Drops trailing slots that are empty or whitespace-only. Interior blanks
/// are kept so array position still matches the period number.
pub fn trim_trailing_blanks(slots: &[String]) -> Vec<String> {
    let end = slots
        .iter()
        .rposition(|slot| !slot.trim().is_empty())
        .map_or(0, |last| last + 1);
    slots[..end].to_vec()
}
