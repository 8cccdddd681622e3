//! Top navigation bar with session-dependent links.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::{Role, SharedSessionStore};

/// Site-wide navigation. Links switch with the session snapshot: role pages
/// for the logged-in role, sign-up/login entries otherwise.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<SharedSessionStore>>();
    let navigate = StoredValue::new(use_navigate());

    let logged_in = move || session.with(|s| s.snapshot().is_authenticated());
    let is_role = move |role: Role| {
        session.with(|s| {
            let snapshot = s.snapshot();
            snapshot.is_authenticated() && snapshot.role == Some(role)
        })
    };

    let on_logout = move |_| {
        session.update(SharedSessionStore::clear_credentials);
        navigate.with_value(|nav| nav("/", NavigateOptions::default()));
    };

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/">
                "JobBoard"
            </a>
            <div class="navbar__links">
                <a class="navbar__link" href="/">
                    "Home"
                </a>
                <Show when=move || is_role(Role::Seeker)>
                    <a class="navbar__link" href="/jobs">
                        "Jobs"
                    </a>
                    <a class="navbar__link" href="/applications">
                        "My Applications"
                    </a>
                </Show>
                <Show when=move || is_role(Role::Employer)>
                    <a class="navbar__link" href="/post-job">
                        "Post Job"
                    </a>
                    <a class="navbar__link" href="/my-posts">
                        "My Posts"
                    </a>
                </Show>
            </div>
            <div class="navbar__session">
                <Show
                    when=logged_in
                    fallback=|| {
                        view! {
                            <a class="navbar__button" href="/sign-up">
                                "Sign Up"
                            </a>
                            <a class="navbar__button" href="/sign-up?mode=login">
                                "Login"
                            </a>
                        }
                    }
                >
                    <a class="navbar__button" href="/dashboard">
                        "Dashboard"
                    </a>
                    <button class="navbar__button" on:click=on_logout>
                        "Logout"
                    </button>
                </Show>
            </div>
        </nav>
    }
}
