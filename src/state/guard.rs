//! Render-or-redirect guards for protected routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each navigable view names one guard variant; the wrapper component in
//! `components::route_guard` re-evaluates it against the current session
//! snapshot on every navigation and session change. Evaluation is
//! synchronous and side-effect-free, so there is no pending state between
//! rendering and redirecting.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::state::session::{Role, Session};

/// Where an unauthenticated visitor is sent.
pub const SIGN_UP_PATH: &str = "/sign-up";
/// Where a visitor failing a role check is sent.
pub const HOME_PATH: &str = "/";

/// The closed set of route-access predicates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteGuard {
    /// Any logged-in identity.
    Authenticated,
    /// Logged-in, seeker role, email verified.
    SeekerVerified,
    /// Logged-in, employer role, email verified.
    EmployerVerified,
}

/// Outcome of evaluating a guard against a snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    /// Redirect target; applied with history replacement so the denied view
    /// is not reachable via the back button.
    Redirect(&'static str),
}

impl RouteGuard {
    /// Decide render vs redirect for the given snapshot.
    pub fn evaluate(self, session: &Session) -> GuardDecision {
        let allowed = match self {
            Self::Authenticated => session.is_authenticated(),
            Self::SeekerVerified => verified_as(session, Role::Seeker),
            Self::EmployerVerified => verified_as(session, Role::Employer),
        };
        if allowed {
            GuardDecision::Render
        } else {
            GuardDecision::Redirect(self.denied_target())
        }
    }

    /// Redirect target when the predicate fails.
    pub fn denied_target(self) -> &'static str {
        match self {
            Self::Authenticated => SIGN_UP_PATH,
            Self::SeekerVerified | Self::EmployerVerified => HOME_PATH,
        }
    }
}

fn verified_as(session: &Session, role: Role) -> bool {
    session.is_authenticated() && session.role == Some(role) && session.email_verified.is_yes()
}
