//! Account dashboard: identity card plus the profile-update modal.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reachable behind the authenticated guard; renders for both roles and
//! nudges unverified accounts toward the verification page.

use leptos::prelude::*;

use crate::components::profile_modal::ProfileModal;
use crate::state::session::{Role, SharedSessionStore};
use crate::util::format::or_placeholder;

/// Identity card with role-specific fields and a verification nudge.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SharedSessionStore>>();
    let show_update = RwSignal::new(false);

    let identity = move || session.with(|s| s.snapshot().identity.clone().unwrap_or_default());
    let verified = move || session.with(|s| s.snapshot().email_verified.is_yes());
    let is_seeker = move || session.with(|s| s.snapshot().role == Some(Role::Seeker));

    let on_close = Callback::new(move |()| show_update.set(false));

    view! {
        <div class="dashboard-page">
            <div class="dashboard-card">
                <h2>"User Information"</h2>

                <h4>"Name:"</h4>
                <p>{move || or_placeholder(identity().name.as_deref(), "No name provided")}</p>

                <h4>"Email:"</h4>
                <p>
                    {move || or_placeholder(identity().email.as_deref(), "No email provided")}
                    <Show
                        when=verified
                        fallback=|| {
                            view! {
                                <a class="dashboard-card__verify" href="/verify-email">
                                    "Please verify email"
                                </a>
                                <span class="dashboard-card__warning">
                                    "Please verify your email to use our system features"
                                </span>
                            }
                        }
                    >
                        <span class="dashboard-card__verified">"Verified"</span>
                    </Show>
                </p>

                <h4>"Phone:"</h4>
                <p>{move || or_placeholder(identity().phone.as_deref(), "No phone number provided")}</p>

                <h4>"Birthday:"</h4>
                <p>{move || or_placeholder(identity().birthday.as_deref(), "No birthday provided")}</p>

                <h4>"Gender:"</h4>
                <p>
                    {move || or_placeholder(
                        identity().gender_name.as_deref(),
                        "No gender information provided",
                    )}
                </p>

                <Show when=is_seeker>
                    <h4>"Headline:"</h4>
                    <p>{move || or_placeholder(identity().headline.as_deref(), "No headline provided")}</p>

                    <h4>"Description:"</h4>
                    <p>{move || or_placeholder(identity().desc.as_deref(), "No description provided")}</p>
                </Show>

                <button class="btn btn--primary" on:click=move |_| show_update.set(true)>
                    "Update Profile"
                </button>
            </div>

            <Show when=move || show_update.get()>
                <ProfileModal on_close=on_close />
            </Show>
        </div>
    }
}
