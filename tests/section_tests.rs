use timetable_builder::{SectionId, normalize_sections};

fn ids(pairs: &[(u32, u32)]) -> Vec<SectionId> {
    pairs
        .iter()
        .map(|&(g, c)| SectionId::new(g, c).unwrap())
        .collect()
}

#[test]
fn bare_numbers_take_the_given_grade() {
    assert_eq!(normalize_sections(1, "1,2,3"), ids(&[(1, 1), (1, 2), (1, 3)]));
}

#[test]
fn compound_tokens_keep_their_own_grade_and_sort_by_section() {
    assert_eq!(
        normalize_sections(2, "1,3,2-5"),
        ids(&[(2, 1), (2, 3), (5, 2)])
    );
}

#[test]
fn duplicates_collapse_and_order_is_ascending() {
    assert_eq!(normalize_sections(1, "3, 1,1,2,3"), ids(&[(1, 1), (1, 2), (1, 3)]));
    assert_eq!(normalize_sections(1, "1-2, 2, 1 - 2"), ids(&[(1, 2)]));
}

#[test]
fn ordering_is_numeric_not_lexical() {
    assert_eq!(
        normalize_sections(1, "10,2,1"),
        ids(&[(1, 1), (1, 2), (1, 10)])
    );
}

#[test]
fn whitespace_and_non_digits_are_tolerated() {
    assert_eq!(
        normalize_sections(3, " 4반 , class 2 ,, 1 -  7 "),
        ids(&[(3, 2), (3, 4), (1, 7)])
    );
}

#[test]
fn malformed_tokens_are_dropped_silently() {
    assert_eq!(normalize_sections(1, "abc, ,-, 0, 0-3, 2-0"), Vec::new());
    assert_eq!(normalize_sections(1, "x, 5, 99999999999"), ids(&[(1, 5)]));
}

#[test]
fn token_with_two_hyphens_is_read_as_bare_digits() {
    assert_eq!(normalize_sections(1, "1-2-3"), ids(&[(1, 123)]));
}

#[test]
fn empty_input_yields_empty_sequence() {
    assert!(normalize_sections(1, "").is_empty());
    assert!(normalize_sections(1, "   ").is_empty());
}

#[test]
fn same_section_number_in_different_grades_keeps_input_order() {
    assert_eq!(
        normalize_sections(1, "2-1, 1, 3-1"),
        ids(&[(2, 1), (1, 1), (3, 1)])
    );
}

#[test]
fn result_is_strictly_ascending_for_assorted_inputs() {
    for raw in ["5,4,3,2,1", "1,1,1", "7, 3-7, 2, 9-2", "12,11,10,9,8,1"] {
        let out = normalize_sections(1, raw);
        for pair in out.windows(2) {
            assert!(
                pair[0].section <= pair[1].section,
                "not sorted for {raw:?}: {out:?}"
            );
            assert_ne!(pair[0], pair[1], "duplicate for {raw:?}");
        }
    }
}

#[test]
fn section_id_renders_and_parses() {
    let id = SectionId::new(1, 12).unwrap();
    assert_eq!(id.to_string(), "1-12");
    assert_eq!(" 1 - 12 ".parse::<SectionId>().unwrap(), id);
    assert!("1-0".parse::<SectionId>().is_err());
    assert!("12".parse::<SectionId>().is_err());
    assert!(SectionId::new(0, 1).is_none());
}
