use timetable_builder::{Direction, ExportError, ScheduleStore, SectionId, Weekday};

fn id(grade: u32, section: u32) -> SectionId {
    SectionId::new(grade, section).unwrap()
}

fn store_with(grade: u32, classes: &str, periods: i64) -> ScheduleStore {
    let mut store = ScheduleStore::new();
    store.set_dimensions(grade, classes, periods);
    store
}

fn assert_all_days_sized(store: &ScheduleStore, expected: usize) {
    for section in store.sections() {
        let entry = store.entry(*section).expect("entry for listed section");
        for day in Weekday::ALL {
            assert_eq!(
                entry.day(day).len(),
                expected,
                "{section} {day} has wrong length"
            );
        }
    }
}

#[test]
fn new_store_has_no_cursor() {
    let store = ScheduleStore::new();
    assert!(store.sections().is_empty());
    assert_eq!(store.cursor(), None);
    assert_eq!(store.current_day_slots(), None);
    assert_eq!(store.weekday(), Weekday::Mon);
    assert_eq!(store.period_count().get(), 7);
}

#[test]
fn set_dimensions_creates_full_blank_entries() {
    let store = store_with(1, "1,2", 5);
    assert_eq!(store.sections(), &[id(1, 1), id(1, 2)]);
    assert_eq!(store.current_section(), Some(id(1, 1)));
    assert_all_days_sized(&store, 5);
    let entry = store.entry(id(1, 2)).unwrap();
    assert!(entry.day(Weekday::Fri).iter().all(String::is_empty));
}

#[test]
fn set_dimensions_clamps_period_count() {
    let store = store_with(1, "1", 40);
    assert_eq!(store.period_count().get(), 12);
    assert_all_days_sized(&store, 12);

    let store = store_with(1, "1", 0);
    assert_eq!(store.period_count().get(), 1);
    assert_all_days_sized(&store, 1);
}

#[test]
fn growing_periods_pads_the_tail_only() {
    let mut store = store_with(1, "1", 3);
    store.set_slot_value(0, "Math");
    store.set_slot_value(2, "Art");
    store.set_period_count(6);

    assert_all_days_sized(&store, 6);
    assert_eq!(
        store.current_day_slots().unwrap(),
        &["Math", "", "Art", "", "", ""]
    );
}

#[test]
fn shrinking_periods_truncates_the_tail_only() {
    let mut store = store_with(1, "1", 7);
    for (idx, subject) in ["A", "B", "C", "D", "E", "F", "G"].iter().enumerate() {
        store.set_slot_value(idx, subject);
    }
    store.set_dimensions(1, "1", 4);

    assert_all_days_sized(&store, 4);
    assert_eq!(store.current_day_slots().unwrap(), &["A", "B", "C", "D"]);

    store.set_period_count(6);
    assert_eq!(
        store.current_day_slots().unwrap(),
        &["A", "B", "C", "D", "", ""],
        "discarded values must not come back"
    );
}

#[test]
fn set_period_count_keeps_browsing_index() {
    let mut store = store_with(1, "1,2,3", 7);
    store.step_section(Direction::Next);
    store.set_period_count(5);
    assert_eq!(store.current_section(), Some(id(1, 2)));
}

#[test]
fn changing_section_list_resets_index() {
    let mut store = store_with(1, "1,2,3", 7);
    store.step_section(Direction::Next);
    store.step_section(Direction::Next);
    store.set_section_list("1,2,3,4");
    assert_eq!(store.current_section(), Some(id(1, 1)));

    store.step_section(Direction::Next);
    store.set_grade(2);
    assert_eq!(store.sections(), &[id(2, 1), id(2, 2), id(2, 3), id(2, 4)]);
    assert_eq!(store.current_section(), Some(id(2, 1)));
}

#[test]
fn removed_section_keeps_its_data_for_later() {
    let mut store = store_with(1, "1,2", 7);
    store.step_section(Direction::Next);
    store.set_slot_value(0, "Music");

    store.set_section_list("1");
    assert_eq!(store.sections(), &[id(1, 1)]);
    assert!(store.entry(id(1, 2)).is_some());
    assert_eq!(store.stored_section_count(), 2);

    store.set_section_list("1,2");
    store.step_section(Direction::Next);
    assert_eq!(store.current_day_slots().unwrap()[0], "Music");
}

#[test]
fn reshape_resizes_orphaned_entries_too() {
    let mut store = store_with(1, "1,2", 7);
    store.set_section_list("1");
    store.set_period_count(3);
    let orphan = store.entry(id(1, 2)).unwrap();
    for day in Weekday::ALL {
        assert_eq!(orphan.day(day).len(), 3);
    }
}

#[test]
fn step_section_cycles_in_both_directions() {
    let mut store = store_with(1, "1,2,3", 7);
    let start = store.current_section();

    for _ in 0..3 {
        assert!(store.step_section(Direction::Next));
    }
    assert_eq!(store.current_section(), start);

    store.step_section(Direction::Prev);
    assert_eq!(store.current_section(), Some(id(1, 3)));

    store.step_section(Direction::Next);
    store.step_section(Direction::Prev);
    assert_eq!(store.current_section(), Some(id(1, 3)));
}

#[test]
fn step_section_is_noop_without_sections() {
    let mut store = ScheduleStore::new();
    assert!(!store.step_section(Direction::Next));
    assert!(!store.step_section(Direction::Prev));
    assert_eq!(store.cursor(), None);
}

#[test]
fn select_weekday_routes_edits() {
    let mut store = store_with(1, "1", 7);
    store.select_weekday(Weekday::Wed);
    store.set_slot_value(1, "Science");

    let entry = store.entry(id(1, 1)).unwrap();
    assert_eq!(entry.day(Weekday::Wed)[1], "Science");
    assert_eq!(entry.day(Weekday::Mon)[1], "");
}

#[test]
fn unknown_weekday_code_is_ignored() {
    let mut store = store_with(1, "1", 7);
    assert!(store.select_weekday_code("thu"));
    assert!(!store.select_weekday_code("sun"));
    assert_eq!(store.weekday(), Weekday::Thu);
}

#[test]
fn set_slot_value_trims_and_checks_bounds() {
    let mut store = store_with(1, "1", 3);
    assert!(store.set_slot_value(0, "  Korean  "));
    assert!(!store.set_slot_value(3, "Overflow"));
    assert_eq!(store.current_day_slots().unwrap(), &["Korean", "", ""]);
}

#[test]
fn set_slot_value_without_section_is_noop() {
    let mut store = ScheduleStore::new();
    assert!(!store.set_slot_value(0, "Math"));
    assert_eq!(store.stored_section_count(), 0);
}

#[test]
fn clear_current_day_blanks_only_that_day() {
    let mut store = store_with(1, "1", 4);
    store.set_slot_value(0, "Math");
    store.select_weekday(Weekday::Tue);
    store.set_slot_value(0, "PE");

    assert!(store.clear_current_day());
    assert_eq!(store.current_day_slots().unwrap(), &["", "", "", ""]);
    assert_eq!(store.entry(id(1, 1)).unwrap().day(Weekday::Mon)[0], "Math");

    let mut empty = ScheduleStore::new();
    assert!(!empty.clear_current_day());
}

#[test]
fn view_reflects_cursor() {
    let mut store = store_with(2, "3,1", 2);
    store.select_weekday(Weekday::Fri);
    store.set_slot_value(1, "History");

    let view = store.view();
    assert_eq!(view.grade, 2);
    assert_eq!(view.sections, ["2-1", "2-3"]);
    assert_eq!(view.current_section.as_deref(), Some("2-1"));
    assert_eq!(view.weekday, Weekday::Fri);
    assert_eq!(view.weekday_label, "금");
    assert_eq!(view.period_count, 2);
    assert_eq!(view.slots, ["", "History"]);
}

#[test]
fn export_refuses_empty_section_list() {
    let store = store_with(1, "", 7);
    assert_eq!(store.export_document(), Err(ExportError::EmptySectionList));

    let store = store_with(1, "abc, 0", 7);
    assert_eq!(store.export_document(), Err(ExportError::EmptySectionList));
}
