use super::*;

fn body(message: serde_json::Value) -> serde_json::Value {
    serde_json::json!({ "message": message })
}

// =============================================================
// classify_failure
// =============================================================

#[test]
fn classifies_missing_user_on_404() {
    let err = classify_failure(404, &body("USER_DOES_NOT_EXIST".into()));
    assert_eq!(err, ApiError::Auth(AuthFailure::UserDoesNotExist));
    assert_eq!(err.user_message(), "User does not exist.");
}

#[test]
fn plain_404_is_a_status_error() {
    assert_eq!(classify_failure(404, &serde_json::Value::Null), ApiError::Status(404));
}

#[test]
fn classifies_each_403_variant() {
    let cases = [
        ("ACCOUNT_INACTIVE", AuthFailure::AccountInactive),
        ("LOGIN_ATTEMPTS_EXCEEDED", AuthFailure::LoginAttemptsExceeded),
        ("PASSWORD_INCORRECT", AuthFailure::PasswordIncorrect),
    ];
    for (message, expected) in cases {
        assert_eq!(classify_failure(403, &body(message.into())), ApiError::Auth(expected));
    }
}

#[test]
fn unrecognized_403_message_maps_to_unknown() {
    let err = classify_failure(403, &body("SOMETHING_NEW".into()));
    assert_eq!(err, ApiError::Auth(AuthFailure::Unknown));
    assert_eq!(err.user_message(), "An unknown error occurred. Please try again.");
}

#[test]
fn classifies_each_verification_variant() {
    let cases = [
        ("EMAIL_ALREADY_VERIFIED", VerificationFailure::AlreadyVerified),
        ("INVALID_VERIFICATION_TOKEN", VerificationFailure::InvalidToken),
        ("VERIFICATION_TOKEN_EXPIRED", VerificationFailure::TokenExpired),
    ];
    for (message, expected) in cases {
        assert_eq!(
            classify_failure(400, &body(message.into())),
            ApiError::Verification(expected)
        );
    }
}

#[test]
fn unrecognized_400_is_a_status_error() {
    assert_eq!(classify_failure(400, &body("WAT".into())), ApiError::Status(400));
}

#[test]
fn classifies_422_field_map() {
    let raw = serde_json::json!({
        "message": {
            "user_name": ["Username already taken."],
            "phone": ["Phone number is invalid.", "Phone number too short."]
        }
    });
    let ApiError::Validation(errors) = classify_failure(422, &raw) else {
        panic!("expected validation error");
    };
    assert_eq!(field_error(&errors, "user_name"), "Username already taken.");
    assert_eq!(field_error(&errors, "phone"), "Phone number is invalid.");
    assert_eq!(field_error(&errors, "email"), "");
}

#[test]
fn malformed_422_body_yields_empty_field_map() {
    let ApiError::Validation(errors) = classify_failure(422, &body("oops".into())) else {
        panic!("expected validation error");
    };
    assert!(errors.is_empty());
}

#[test]
fn unexpected_statuses_fall_through() {
    assert_eq!(classify_failure(500, &serde_json::Value::Null), ApiError::Status(500));
    assert_eq!(
        classify_failure(500, &serde_json::Value::Null).user_message(),
        "An error occurred. Please try again."
    );
}

// =============================================================
// messages
// =============================================================

#[test]
fn network_errors_use_the_generic_retry_message() {
    assert_eq!(
        ApiError::offline().user_message(),
        "An error occurred. Please try again."
    );
}

#[test]
fn verification_messages_match_the_toasts() {
    assert_eq!(
        ApiError::Verification(VerificationFailure::AlreadyVerified).user_message(),
        "Email Already Verified."
    );
    assert_eq!(
        ApiError::Verification(VerificationFailure::TokenExpired).user_message(),
        "Verification Token Expired."
    );
}
