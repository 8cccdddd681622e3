//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome and form controls while reading/writing
//! the session from the Leptos context provider.

pub mod job_card;
pub mod navbar;
pub mod pagination;
pub mod profile_modal;
pub mod route_guard;
pub mod status_badge;
pub mod text_input;
