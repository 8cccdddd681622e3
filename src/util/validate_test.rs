use super::*;

#[test]
fn username_accepts_lowercase_and_digits_within_bounds() {
    assert_eq!(validate_username("seeker01"), Ok(()));
    assert_eq!(validate_username("abcdefgh1234"), Ok(()));
}

#[test]
fn username_rejects_bad_shapes() {
    assert!(validate_username("").is_err());
    assert!(validate_username("short1").is_err());
    assert!(validate_username("waytoolongname1").is_err());
    assert!(validate_username("Seeker01").is_err());
    assert!(validate_username("seeker_01").is_err());
}

#[test]
fn password_accepts_mixed_characters_within_bounds() {
    assert_eq!(validate_password("secret1"), Ok(()));
    assert_eq!(validate_password("P@ssw0rd!"), Ok(()));
}

#[test]
fn password_rejects_bad_shapes() {
    assert!(validate_password("").is_err());
    assert!(validate_password("abc12").is_err());
    assert!(validate_password("a".repeat(17).as_str()).is_err());
    assert!(validate_password("pass word").is_err());
}

#[test]
fn confirm_password_requires_exact_match() {
    assert_eq!(validate_confirm_password("secret1", "secret1"), Ok(()));
    assert_eq!(validate_confirm_password("secret1", ""), Err("Confirm Password is required!"));
    assert_eq!(validate_confirm_password("secret1", "secret2"), Err("Passwords do not match"));
}

#[test]
fn phone_requires_plus_and_digit_count() {
    assert_eq!(validate_phone("+12345678901"), Ok(()));
    assert_eq!(validate_phone("+12345678901234"), Ok(()));
    assert!(validate_phone("").is_err());
    assert!(validate_phone("12345678901").is_err());
    assert!(validate_phone("+1234567890").is_err());
    assert!(validate_phone("+123456789012345").is_err());
    assert!(validate_phone("+1234567890a").is_err());
}

#[test]
fn birthday_is_optional_but_shaped_when_present() {
    assert_eq!(validate_birthday(""), Ok(()));
    assert_eq!(validate_birthday("1990-05-17"), Ok(()));
    assert!(validate_birthday("1990/05/17").is_err());
    assert!(validate_birthday("90-05-17").is_err());
    assert!(validate_birthday("1990-5-17").is_err());
}

#[test]
fn normalize_birthday_appends_midnight() {
    assert_eq!(normalize_birthday("1990-05-17"), Some("1990-05-17 00:00:00".to_owned()));
    assert_eq!(normalize_birthday(""), None);
}

#[test]
fn job_title_bounds() {
    assert_eq!(validate_job_title("QA"), Ok(()));
    assert!(validate_job_title("").is_err());
    assert!(validate_job_title("   ").is_err());
    assert!(validate_job_title(&"x".repeat(256)).is_err());
}

#[test]
fn job_desc_bounds() {
    assert!(validate_job_desc("too short").is_err());
    assert_eq!(validate_job_desc(&"d".repeat(50)), Ok(()));
    assert!(validate_job_desc(&"d".repeat(3001)).is_err());
}

#[test]
fn job_skills_require_at_least_one() {
    assert!(validate_job_skills(&[]).is_err());
    assert_eq!(validate_job_skills(&[3]), Ok(()));
}

#[test]
fn resume_file_must_be_a_small_enough_pdf() {
    assert_eq!(validate_resume_file("application/pdf", 1024.0), Ok(()));
    assert_eq!(
        validate_resume_file("image/png", 1024.0),
        Err("You can only upload PDF files!")
    );
    assert_eq!(
        validate_resume_file("application/pdf", 501.0 * 1024.0 * 1024.0),
        Err("File must be smaller than 500MB!")
    );
}
