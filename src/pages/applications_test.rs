use super::*;

#[test]
fn created_at_param_appends_midnight() {
    assert_eq!(created_at_param("2024-06-01"), Some("2024-06-01 00:00:00".to_owned()));
}

#[test]
fn created_at_param_is_absent_without_a_date() {
    assert_eq!(created_at_param(""), None);
}
