//! Wrapper component applying a route guard to its children.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes should apply identical redirect behavior: evaluate the
//! guard against the current session snapshot, render on pass, and replace
//! the history entry on deny so the denied view is not reachable via the
//! back button.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::guard::{GuardDecision, RouteGuard};
use crate::state::session::SharedSessionStore;

/// Render `children` only while `guard` passes; otherwise redirect.
///
/// Re-evaluates whenever the session changes, so a logout mid-view kicks
/// the user out immediately.
#[component]
pub fn Guarded(guard: RouteGuard, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SharedSessionStore>>();
    let navigate = use_navigate();

    Effect::new(move || {
        if let GuardDecision::Redirect(target) = session.with(|s| guard.evaluate(s.snapshot())) {
            navigate(
                target,
                NavigateOptions {
                    replace: true,
                    ..NavigateOptions::default()
                },
            );
        }
    });

    view! {
        <Show when=move || {
            session.with(|s| guard.evaluate(s.snapshot()) == GuardDecision::Render)
        }>{children()}</Show>
    }
}
