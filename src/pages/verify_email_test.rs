use super::*;
use crate::net::error::AuthFailure;

#[test]
fn already_verified_self_heals_the_flag() {
    let err = ApiError::Verification(VerificationFailure::AlreadyVerified);
    assert_eq!(
        verification_failure_effects(&err),
        ("Email Already Verified.", true)
    );
}

#[test]
fn invalid_token_does_not_self_heal() {
    let err = ApiError::Verification(VerificationFailure::InvalidToken);
    assert_eq!(
        verification_failure_effects(&err),
        ("Invalid Verification Token.", false)
    );
}

#[test]
fn expired_token_does_not_self_heal() {
    let err = ApiError::Verification(VerificationFailure::TokenExpired);
    assert_eq!(
        verification_failure_effects(&err),
        ("Verification Token Expired.", false)
    );
}

#[test]
fn non_verification_failures_use_generic_messages() {
    let (message, heal) = verification_failure_effects(&ApiError::Status(500));
    assert_eq!(message, "An error occurred. Please try again.");
    assert!(!heal);

    let (message, heal) = verification_failure_effects(&ApiError::Auth(AuthFailure::Unknown));
    assert_eq!(message, "An unknown error occurred. Please try again.");
    assert!(!heal);
}
