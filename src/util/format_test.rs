use super::*;

#[test]
fn truncate_desc_passes_short_strings_through() {
    assert_eq!(truncate_desc("short", 30), "short");
}

#[test]
fn truncate_desc_cuts_and_appends_ellipsis() {
    assert_eq!(truncate_desc("abcdefghij", 4), "abcd...");
}

#[test]
fn truncate_desc_boundary_is_inclusive() {
    assert_eq!(truncate_desc("abcd", 4), "abcd");
}

#[test]
fn truncate_desc_counts_characters_not_bytes() {
    assert_eq!(truncate_desc("ééééé", 3), "ééé...");
}

#[test]
fn or_placeholder_prefers_non_empty_values() {
    assert_eq!(or_placeholder(Some("Sam"), "No name provided"), "Sam");
    assert_eq!(or_placeholder(Some("  "), "No name provided"), "No name provided");
    assert_eq!(or_placeholder(None, "No name provided"), "No name provided");
}
