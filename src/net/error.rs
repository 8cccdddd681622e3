//! Failure taxonomy for backend calls.
//!
//! DESIGN
//! ======
//! The backend signals domain failures through an HTTP status plus a
//! `message` field: a bare code string for auth/verification failures, or a
//! field→messages map for 422 validation. `classify_failure` is the single
//! place that mapping lives; pages only match on the typed variants.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::collections::BTreeMap;

use thiserror::Error;

/// Authentication failures surfaced by the login endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthFailure {
    UserDoesNotExist,
    AccountInactive,
    LoginAttemptsExceeded,
    PasswordIncorrect,
    /// A 403 with a message this client does not recognize.
    Unknown,
}

/// Email-verification failures surfaced by the verify endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerificationFailure {
    /// The account was already verified; callers self-heal the local flag.
    AlreadyVerified,
    InvalidToken,
    TokenExpired,
}

/// Per-field validation messages from a 422 response.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Any failure of a backend call. None of these mutate the session.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ApiError {
    /// Transport-level failure, including running outside the browser.
    #[error("network error: {0}")]
    Network(String),
    #[error("authentication failed")]
    Auth(AuthFailure),
    #[error("validation failed")]
    Validation(FieldErrors),
    #[error("email verification failed")]
    Verification(VerificationFailure),
    /// Non-success status with no recognized domain message.
    #[error("unexpected status {0}")]
    Status(u16),
}

impl ApiError {
    /// The stub error returned by API calls compiled without a browser.
    pub(crate) fn offline() -> Self {
        Self::Network("not available on server".to_owned())
    }

    /// The message a page shows for this failure.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Auth(AuthFailure::UserDoesNotExist) => "User does not exist.",
            Self::Auth(AuthFailure::AccountInactive) => "Account is inactive.",
            Self::Auth(AuthFailure::LoginAttemptsExceeded) => {
                "Login attempts exceeded. Please try again later."
            }
            Self::Auth(AuthFailure::PasswordIncorrect) => "Password is incorrect.",
            Self::Auth(AuthFailure::Unknown) => "An unknown error occurred. Please try again.",
            Self::Verification(VerificationFailure::AlreadyVerified) => "Email Already Verified.",
            Self::Verification(VerificationFailure::InvalidToken) => "Invalid Verification Token.",
            Self::Verification(VerificationFailure::TokenExpired) => "Verification Token Expired.",
            Self::Validation(_) => "Please correct the highlighted fields.",
            Self::Network(_) | Self::Status(_) => "An error occurred. Please try again.",
        }
    }
}

/// Map an HTTP status and response body onto the taxonomy.
pub fn classify_failure(status: u16, body: &serde_json::Value) -> ApiError {
    let message = body.get("message");
    match status {
        422 => ApiError::Validation(parse_field_errors(message)),
        404 if message_is(message, "USER_DOES_NOT_EXIST") => {
            ApiError::Auth(AuthFailure::UserDoesNotExist)
        }
        403 => ApiError::Auth(match message.and_then(serde_json::Value::as_str) {
            Some("ACCOUNT_INACTIVE") => AuthFailure::AccountInactive,
            Some("LOGIN_ATTEMPTS_EXCEEDED") => AuthFailure::LoginAttemptsExceeded,
            Some("PASSWORD_INCORRECT") => AuthFailure::PasswordIncorrect,
            _ => AuthFailure::Unknown,
        }),
        400 => match message.and_then(serde_json::Value::as_str) {
            Some("EMAIL_ALREADY_VERIFIED") => {
                ApiError::Verification(VerificationFailure::AlreadyVerified)
            }
            Some("INVALID_VERIFICATION_TOKEN") => {
                ApiError::Verification(VerificationFailure::InvalidToken)
            }
            Some("VERIFICATION_TOKEN_EXPIRED") => {
                ApiError::Verification(VerificationFailure::TokenExpired)
            }
            _ => ApiError::Status(status),
        },
        other => ApiError::Status(other),
    }
}

/// First message for `field`, or empty when the field is clean.
pub fn field_error(errors: &FieldErrors, field: &str) -> String {
    errors
        .get(field)
        .and_then(|messages| messages.first())
        .cloned()
        .unwrap_or_default()
}

fn message_is(message: Option<&serde_json::Value>, expected: &str) -> bool {
    message.and_then(serde_json::Value::as_str) == Some(expected)
}

fn parse_field_errors(message: Option<&serde_json::Value>) -> FieldErrors {
    let Some(serde_json::Value::Object(map)) = message else {
        return FieldErrors::new();
    };
    map.iter()
        .map(|(field, messages)| {
            let list = match messages {
                serde_json::Value::Array(items) => items
                    .iter()
                    .filter_map(|item| item.as_str().map(str::to_owned))
                    .collect(),
                serde_json::Value::String(single) => vec![single.clone()],
                _ => Vec::new(),
            };
            (field.clone(), list)
        })
        .collect()
}
