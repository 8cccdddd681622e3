use super::*;

#[test]
fn valid_posting_produces_no_errors() {
    let errors = validate_new_job("Backend Engineer", &"d".repeat(60), &[1]);
    assert!(errors.is_empty());
}

#[test]
fn missing_title_is_reported() {
    let errors = validate_new_job("", &"d".repeat(60), &[1]);
    assert_eq!(
        errors["title"],
        vec!["Title must be between 1 and 255 characters".to_owned()]
    );
}

#[test]
fn short_description_is_reported() {
    let errors = validate_new_job("QA", "too short", &[1]);
    assert_eq!(
        errors["desc"],
        vec!["Description must be between 50 and 3000 characters".to_owned()]
    );
}

#[test]
fn empty_skills_are_reported() {
    let errors = validate_new_job("QA", &"d".repeat(60), &[]);
    assert_eq!(errors["skills"], vec!["Please select at least one skill".to_owned()]);
}

#[test]
fn all_failures_are_collected_together() {
    let errors = validate_new_job("", "x", &[]);
    assert_eq!(errors.len(), 3);
}
