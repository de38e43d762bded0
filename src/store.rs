use crate::document::{ScheduleDocument, WeekSlots, trim_trailing_blanks};
use crate::period::PeriodCount;
use crate::section::{SectionId, normalize_sections};
use crate::weekday::Weekday;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleEntry {
    days: [Vec<String>; 5],
}

impl ScheduleEntry {
    fn blank(periods: PeriodCount) -> Self {
        Self {
            days: std::array::from_fn(|_| vec![String::new(); periods.get()]),
        }
    }

    pub fn day(&self, day: Weekday) -> &[String] {
        &self.days[day.index()]
    }

    fn day_mut(&mut self, day: Weekday) -> &mut Vec<String> {
        &mut self.days[day.index()]
    }

    // Tail only: values that stay in range keep their position.
    fn resize(&mut self, periods: PeriodCount) {
        for slots in &mut self.days {
            slots.resize(periods.get(), String::new());
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Next,
    Prev,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Cursor {
    pub section: SectionId,
    pub weekday: Weekday,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportError {
    EmptySectionList,
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::EmptySectionList => {
                write!(f, "section list is empty; add at least one class before exporting")
            }
        }
    }
}

impl std::error::Error for ExportError {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditorView {
    pub grade: u32,
    pub sections: Vec<String>,
    pub current_section: Option<String>,
    pub weekday: Weekday,
    pub weekday_label: &'static str,
    pub period_count: usize,
    pub slots: Vec<String>,
}

/// Timetable being edited. Invalid requests (bad index, no current section)
/// are no-ops that report `false`.
#[derive(Debug, Clone)]
pub struct ScheduleStore {
    grade: u32,
    section_list: String,
    sections: Vec<SectionId>,
    index: usize,
    weekday: Weekday,
    periods: PeriodCount,
    entries: HashMap<SectionId, ScheduleEntry>,
}

impl Default for ScheduleStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ScheduleStore {
    pub fn new() -> Self {
        Self {
            grade: 1,
            section_list: String::new(),
            sections: Vec::new(),
            index: 0,
            weekday: Weekday::default(),
            periods: PeriodCount::default(),
            entries: HashMap::new(),
        }
    }

    pub fn grade(&self) -> u32 {
        self.grade
    }

    pub fn section_list(&self) -> &str {
        &self.section_list
    }

    pub fn sections(&self) -> &[SectionId] {
        &self.sections
    }

    pub fn period_count(&self) -> PeriodCount {
        self.periods
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    pub fn current_section(&self) -> Option<SectionId> {
        self.sections.get(self.index).copied()
    }

    pub fn cursor(&self) -> Option<Cursor> {
        self.current_section().map(|section| Cursor {
            section,
            weekday: self.weekday,
        })
    }

    pub fn entry(&self, section: SectionId) -> Option<&ScheduleEntry> {
        self.entries.get(&section)
    }

    pub fn stored_section_count(&self) -> usize {
        self.entries.len()
    }

    pub fn current_day_slots(&self) -> Option<&[String]> {
        let cursor = self.cursor()?;
        self.entries
            .get(&cursor.section)
            .map(|entry| entry.day(cursor.weekday))
    }

    pub fn view(&self) -> EditorView {
        EditorView {
            grade: self.grade,
            sections: self.sections.iter().map(ToString::to_string).collect(),
            current_section: self.current_section().map(|id| id.to_string()),
            weekday: self.weekday,
            weekday_label: self.weekday.korean_label(),
            period_count: self.periods.get(),
            slots: self
                .current_day_slots()
                .map(<[String]>::to_vec)
                .unwrap_or_default(),
        }
    }

    /// Resets the browsing index to the first section.
    pub fn set_dimensions(&mut self, grade: u32, raw_sections: &str, periods: i64) {
        self.grade = grade;
        self.section_list = raw_sections.to_string();
        self.periods = PeriodCount::clamped(periods);
        self.renormalize();
    }

    pub fn set_grade(&mut self, grade: u32) {
        self.grade = grade;
        self.renormalize();
    }

    pub fn set_section_list(&mut self, raw_sections: &str) {
        self.section_list = raw_sections.to_string();
        self.renormalize();
    }

    pub fn set_period_count(&mut self, periods: i64) {
        self.periods = PeriodCount::clamped(periods);
        self.reshape();
    }

    fn renormalize(&mut self) {
        self.sections = normalize_sections(self.grade, &self.section_list);
        self.index = 0;
        debug!(
            "sections normalized grade={} count={} raw={:?}",
            self.grade,
            self.sections.len(),
            self.section_list
        );
        self.reshape();
    }

    // Orphaned entries are kept and resized too, so re-adding a section
    // restores its data.
    fn reshape(&mut self) {
        let periods = self.periods;
        for id in &self.sections {
            self.entries
                .entry(*id)
                .or_insert_with(|| ScheduleEntry::blank(periods));
        }
        for entry in self.entries.values_mut() {
            entry.resize(periods);
        }
        debug!(
            "reshaped entries={} periods={}",
            self.entries.len(),
            periods
        );
    }

    pub fn select_weekday(&mut self, day: Weekday) {
        self.weekday = day;
    }

    pub fn select_weekday_code(&mut self, code: &str) -> bool {
        match Weekday::from_code(code) {
            Some(day) => {
                self.select_weekday(day);
                true
            }
            None => {
                debug!("ignored unknown weekday code {code:?}");
                false
            }
        }
    }

    pub fn step_section(&mut self, direction: Direction) -> bool {
        let n = self.sections.len();
        if n == 0 {
            return false;
        }
        self.index = match direction {
            Direction::Next => (self.index + 1) % n,
            Direction::Prev => (self.index + n - 1) % n,
        };
        debug!("cursor moved {:?} to index {}", direction, self.index);
        true
    }

    /// Stores the trimmed `value` at `period` (zero-based) of the cursor's day.
    pub fn set_slot_value(&mut self, period: usize, value: &str) -> bool {
        if period >= self.periods.get() {
            return false;
        }
        let Some(cursor) = self.cursor() else {
            return false;
        };
        let Some(entry) = self.entries.get_mut(&cursor.section) else {
            return false;
        };
        match entry.day_mut(cursor.weekday).get_mut(period) {
            Some(slot) => {
                *slot = value.trim().to_string();
                true
            }
            None => false,
        }
    }

    pub fn clear_current_day(&mut self) -> bool {
        let Some(cursor) = self.cursor() else {
            return false;
        };
        let periods = self.periods.get();
        let Some(entry) = self.entries.get_mut(&cursor.section) else {
            return false;
        };
        *entry.day_mut(cursor.weekday) = vec![String::new(); periods];
        debug!("cleared {} {}", cursor.section, cursor.weekday);
        true
    }

    /// Snapshot of the listed sections only; orphaned entries are skipped.
    pub fn export_document(&self) -> Result<ScheduleDocument, ExportError> {
        if self.sections.is_empty() {
            return Err(ExportError::EmptySectionList);
        }
        let periods = self.periods.get();
        let mut document = ScheduleDocument::default();
        for id in &self.sections {
            let mut week = WeekSlots::default();
            if let Some(entry) = self.entries.get(id) {
                for day in Weekday::ALL {
                    let slots = entry.day(day);
                    let cut = &slots[..slots.len().min(periods)];
                    week.set_day(day, trim_trailing_blanks(cut));
                }
            }
            document.push(*id, week);
        }
        info!("exported timetable sections={}", document.len());
        Ok(document)
    }
}
