//! Integration tests for list parsing and mutation.

use wheelspin::models::ListModel;

#[test]
fn set_from_text_trims_and_drops_blank_lines() {
    let mut list = ListModel::new();
    list.set_from_text("A\n\nB \n C\n");
    assert_eq!(list.labels(), ["A", "B", "C"]);
}

#[test]
fn set_from_text_handles_crlf() {
    let mut list = ListModel::new();
    list.set_from_text("A\r\nB\r\n\r\nC");
    assert_eq!(list.labels(), ["A", "B", "C"]);
}

#[test]
fn append_from_text_splits_on_both_comma_kinds() {
    let mut list = ListModel::from_labels(["A", "B", "C"]);
    let added = list.append_from_text("D, E、F");
    assert_eq!(added, 3);
    assert_eq!(list.labels(), ["A", "B", "C", "D", "E", "F"]);
}

#[test]
fn append_from_text_splits_on_line_breaks_too() {
    let mut list = ListModel::new();
    let added = list.append_from_text("X\nY, Z");
    assert_eq!(added, 3);
    assert_eq!(list.labels(), ["X", "Y", "Z"]);
}

#[test]
fn append_with_no_valid_tokens_changes_nothing() {
    let mut list = ListModel::from_labels(["A"]);
    assert_eq!(list.append_from_text("  ,、,  "), 0);
    assert_eq!(list.labels(), ["A"]);
}

#[test]
fn duplicates_are_positional_entries() {
    let mut list = ListModel::new();
    list.set_from_text("X\nX\nY");
    assert_eq!(list.len(), 3);
    list.remove_first_occurrence("X");
    assert_eq!(list.labels(), ["X", "Y"]);
}

#[test]
fn remove_first_occurrence_of_absent_label_is_silent() {
    let mut list = ListModel::from_labels(["A", "B"]);
    list.remove_first_occurrence("missing");
    assert_eq!(list.labels(), ["A", "B"]);
}

#[test]
fn shuffle_is_a_noop_below_two_entries() {
    let mut empty = ListModel::new();
    empty.shuffle();
    assert!(empty.is_empty());

    let mut single = ListModel::from_labels(["solo"]);
    single.shuffle();
    assert_eq!(single.labels(), ["solo"]);
}

#[test]
fn shuffle_keeps_the_same_multiset() {
    let mut list = ListModel::from_labels(["A", "B", "B", "C", "D", "E", "F"]);
    let mut expected: Vec<String> = list.labels().to_vec();
    list.shuffle();
    let mut actual: Vec<String> = list.labels().to_vec();
    expected.sort();
    actual.sort();
    assert_eq!(actual, expected);
}

#[test]
fn list_loads_from_a_file_one_entry_per_line() {
    // Mirrors the --people/--songs flag flow in main
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("names.txt");
    std::fs::write(&path, "Alice\n\n  Bob \nCarol\n").unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let mut list = ListModel::new();
    list.set_from_text(&text);
    assert_eq!(list.labels(), ["Alice", "Bob", "Carol"]);
}

#[test]
fn unicode_labels_survive_round_trips() {
    let mut list = ListModel::new();
    list.set_from_text("小林さん\n田中くん\nアイドル (YOASOBI)");
    assert_eq!(list.len(), 3);
    let text = list.to_text();
    let mut again = ListModel::new();
    again.set_from_text(&text);
    assert_eq!(again.labels(), list.labels());
}
