//! Authenticated-session store: the process-wide record of who is logged in.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards and user-aware components read the snapshot synchronously;
//! login, registration, profile update, and logout are the only writers.
//! Every mutation is written through to the storage port so a reload
//! restores the same session.
//!
//! TRADE-OFFS
//! ==========
//! A snapshot that fails to parse degrades to the logged-out state instead
//! of erroring. The user re-authenticates; nothing else is affected.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

use crate::net::types::UserInfo;
use crate::state::storage::{BrowserStorage, StoragePort};

/// Storage key for the serialized identity record.
pub const USER_INFO_KEY: &str = "userInfo";
/// Storage key for the role tag.
pub const USER_TYPE_KEY: &str = "userType";
/// Storage key for the email-verification tag.
pub const EMAIL_VERIFIED_KEY: &str = "emailVerified";
/// Storage key for the bearer token.
pub const TOKEN_KEY: &str = "token";

/// The two mutually exclusive account kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Seeker,
    Employer,
}

impl Role {
    pub fn as_tag(self) -> &'static str {
        match self {
            Self::Seeker => "seeker",
            Self::Employer => "employer",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "seeker" => Some(Self::Seeker),
            "employer" => Some(Self::Employer),
            _ => None,
        }
    }
}

/// Tri-state email-verification flag. `Unknown` is stored as key absence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EmailVerified {
    Yes,
    No,
    #[default]
    Unknown,
}

impl EmailVerified {
    pub fn as_tag(self) -> Option<&'static str> {
        match self {
            Self::Yes => Some("yes"),
            Self::No => Some("no"),
            Self::Unknown => None,
        }
    }

    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some("yes") => Self::Yes,
            Some("no") => Self::No,
            _ => Self::Unknown,
        }
    }

    pub fn is_yes(self) -> bool {
        matches!(self, Self::Yes)
    }
}

/// Immutable view of the authenticated session.
///
/// `role` and `email_verified` carry no meaning while `identity` is absent;
/// guards check `identity` first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub identity: Option<UserInfo>,
    pub role: Option<Role>,
    pub email_verified: EmailVerified,
    pub token: Option<String>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }
}

/// Session store with write-through persistence.
///
/// Mutation and read happen on the single UI thread, so readers always see
/// a complete snapshot; there is no partial-update window.
#[derive(Clone, Debug)]
pub struct SessionStore<P: StoragePort> {
    session: Session,
    port: P,
}

/// The store wired to browser `localStorage`, as provided via context.
pub type SharedSessionStore = SessionStore<BrowserStorage>;

impl<P: StoragePort> SessionStore<P> {
    /// Build a store from whatever the port currently holds.
    ///
    /// An absent or unparseable identity record yields the logged-out
    /// snapshot. Nothing is written back.
    pub fn initialize(port: P) -> Self {
        let session = match port.get(USER_INFO_KEY).as_deref().map(serde_json::from_str::<UserInfo>) {
            Some(Ok(identity)) => Session {
                identity: Some(identity),
                role: port.get(USER_TYPE_KEY).as_deref().and_then(Role::from_tag),
                email_verified: EmailVerified::from_tag(port.get(EMAIL_VERIFIED_KEY).as_deref()),
                token: port.get(TOKEN_KEY),
            },
            _ => Session::default(),
        };
        Self { session, port }
    }

    /// Current snapshot; synchronous and always complete.
    pub fn snapshot(&self) -> &Session {
        &self.session
    }

    /// Replace identity, role, and the verification flag as one unit.
    ///
    /// The token is replaced only when one is supplied; a login response
    /// without a token keeps the previously stored credential.
    pub fn set_credentials(
        &mut self,
        identity: UserInfo,
        role: Role,
        email_verified: EmailVerified,
        token: Option<String>,
    ) {
        if let Ok(raw) = serde_json::to_string(&identity) {
            self.port.set(USER_INFO_KEY, &raw);
        }
        self.port.set(USER_TYPE_KEY, role.as_tag());
        match email_verified.as_tag() {
            Some(tag) => self.port.set(EMAIL_VERIFIED_KEY, tag),
            None => self.port.remove(EMAIL_VERIFIED_KEY),
        }
        if let Some(token) = &token {
            self.port.set(TOKEN_KEY, token);
        }

        self.session.identity = Some(identity);
        self.session.role = Some(role);
        self.session.email_verified = email_verified;
        if token.is_some() {
            self.session.token = token;
        }
    }

    /// Log out: clear every field and remove every persisted key. Idempotent.
    pub fn clear_credentials(&mut self) {
        for key in [USER_INFO_KEY, USER_TYPE_KEY, EMAIL_VERIFIED_KEY, TOKEN_KEY] {
            self.port.remove(key);
        }
        self.session = Session::default();
    }

    /// Update only the verification flag, in memory and in storage.
    ///
    /// Ignored while logged out; the flag is meaningless without an identity.
    pub fn update_email_verification(&mut self, status: EmailVerified) {
        if self.session.identity.is_none() {
            return;
        }
        match status.as_tag() {
            Some(tag) => self.port.set(EMAIL_VERIFIED_KEY, tag),
            None => self.port.remove(EMAIL_VERIFIED_KEY),
        }
        self.session.email_verified = status;
    }
}

/// Derive the verification flag from a freshly returned identity record.
pub fn derive_email_verified(user: &UserInfo) -> EmailVerified {
    if user.email_verified_at.is_some() {
        EmailVerified::Yes
    } else {
        EmailVerified::No
    }
}
