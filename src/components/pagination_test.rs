use super::*;

#[test]
fn page_count_rounds_up() {
    assert_eq!(page_count(35, 10), 4);
    assert_eq!(page_count(30, 10), 3);
    assert_eq!(page_count(1, 10), 1);
}

#[test]
fn page_count_of_nothing_is_zero() {
    assert_eq!(page_count(0, 10), 0);
}

#[test]
fn page_count_tolerates_zero_page_size() {
    assert_eq!(page_count(35, 0), 0);
}
