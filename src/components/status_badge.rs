//! Colored badge for application statuses.

#[cfg(test)]
#[path = "status_badge_test.rs"]
mod status_badge_test;

use leptos::prelude::*;

/// Badge color class suffix for a backend status name.
pub fn status_color(status: &str) -> &'static str {
    match status {
        "ACCEPTED" => "green",
        "REJECTED" => "red",
        _ => "gray",
    }
}

/// Render a status name with its badge color.
#[component]
pub fn StatusBadge(#[prop(into)] status: String) -> impl IntoView {
    let color = status_color(&status);
    view! { <span class=format!("status-badge status-badge--{color}")>{status}</span> }
}
