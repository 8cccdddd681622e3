//! Fallback for unknown routes.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h1>"404"</h1>
            <p>"This page does not exist."</p>
            <a href="/">"Go Back Home"</a>
        </div>
    }
}
