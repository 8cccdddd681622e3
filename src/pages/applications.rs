//! Seeker's own applications: filterable list with a details modal.

#[cfg(test)]
#[path = "applications_test.rs"]
mod applications_test;

use leptos::prelude::*;

use crate::components::pagination::Pagination;
use crate::components::status_badge::StatusBadge;
#[cfg(feature = "hydrate")]
use crate::net::query::{ApplicationQuery, StatusFilter};
use crate::net::types::JobApplication;
use crate::state::session::SharedSessionStore;
use crate::util::format::truncate_desc;

/// Date filter as the backend expects it: the picked day at midnight.
#[cfg(any(test, feature = "hydrate"))]
fn created_at_param(date: &str) -> Option<String> {
    if date.is_empty() {
        None
    } else {
        Some(format!("{date} 00:00:00"))
    }
}

/// Card list of the seeker's applications with status filters.
#[component]
pub fn ApplicationsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SharedSessionStore>>();

    let applications = RwSignal::new(Vec::<JobApplication>::new());
    let current_page = RwSignal::new(1u64);
    let per_page = RwSignal::new(0u64);
    let total = RwSignal::new(0u64);
    let loading = RwSignal::new(true);
    let error_msg = RwSignal::new(String::new());

    let filter_title = RwSignal::new(String::new());
    let filter_status = RwSignal::new(String::new());
    let filter_created = RwSignal::new(String::new());

    let selected = RwSignal::new(None::<JobApplication>);

    let fetch_applications = move |page: u64| {
        loading.set(true);
        error_msg.set(String::new());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let token = session
                .with_untracked(|s| s.snapshot().token.clone())
                .unwrap_or_default();
            let query = ApplicationQuery {
                page,
                title: filter_title.get_untracked(),
                status: StatusFilter::from_select(&filter_status.get_untracked()),
                created_at: created_at_param(&filter_created.get_untracked()),
            };
            match crate::net::api::list_applications(&token, &query).await {
                Ok(page_of_applications) => {
                    applications.set(page_of_applications.data);
                    current_page.set(page_of_applications.current_page.max(1));
                    per_page.set(page_of_applications.per_page);
                    total.set(page_of_applications.total);
                }
                Err(err) => error_msg.set(err.user_message().to_owned()),
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = page;
        }
    };

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        requested.set(true);
        fetch_applications(1);
    });

    let on_page = Callback::new(move |page: u64| fetch_applications(page));

    let on_filter = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        fetch_applications(1);
    };

    view! {
        <div class="applications-page">
            <form class="filter-bar" on:submit=on_filter>
                <input
                    class="filter-bar__input"
                    type="text"
                    placeholder="Search by Title"
                    prop:value=move || filter_title.get()
                    on:input=move |ev| filter_title.set(event_target_value(&ev))
                />
                <select
                    class="filter-bar__input"
                    prop:value=move || filter_status.get()
                    on:change=move |ev| filter_status.set(event_target_value(&ev))
                >
                    <option value="">"All"</option>
                    <option value="1">"Pending"</option>
                    <option value="2">"Accepted"</option>
                    <option value="3">"Rejected"</option>
                </select>
                <input
                    class="filter-bar__input"
                    type="date"
                    placeholder="Applied at"
                    prop:value=move || filter_created.get()
                    on:input=move |ev| filter_created.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit">
                    "Apply Filters"
                </button>
            </form>

            <Show when=move || !error_msg.get().is_empty()>
                <p class="form-error">{move || error_msg.get()}</p>
            </Show>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="applications-page__loading">"Loading applications..."</p> }
            >
                <div class="applications-page__grid">
                    <For
                        each=move || applications.get()
                        key=|application| application.id
                        children=move |application: JobApplication| {
                            let title = application
                                .job_post
                                .as_ref()
                                .map(|post| post.title.clone())
                                .unwrap_or_default();
                            let summary = application
                                .job_post
                                .as_ref()
                                .map(|post| truncate_desc(&post.desc, 20))
                                .unwrap_or_default();
                            let status = application.status_name.clone();
                            view! {
                                <div class="application-card">
                                    <h3 class="application-card__title">{title}</h3>
                                    <p class="application-card__summary">{summary}</p>
                                    <StatusBadge status=status />
                                    <button
                                        class="btn application-card__view"
                                        on:click=move |_| selected.set(Some(application.clone()))
                                    >
                                        "View Details"
                                    </button>
                                </div>
                            }
                        }
                    />
                </div>
            </Show>

            <Pagination current=current_page total=total per_page=per_page on_page=on_page />

            {move || {
                selected
                    .get()
                    .map(|application| {
                        let post = application.job_post.clone().unwrap_or_default();
                        let employer = post
                            .employer
                            .as_ref()
                            .and_then(|e| e.user.name.clone())
                            .unwrap_or_default();
                        let message = application
                            .message
                            .clone()
                            .unwrap_or_else(|| "No application message provided".to_owned());
                        let resume = application.resume.clone();
                        let applied_at = application.created_at.clone().unwrap_or_default();
                        let posted_at = post.created_at.clone().unwrap_or_default();
                        let applicants = post.application_count.unwrap_or_default();
                        view! {
                            <div class="dialog-backdrop" on:click=move |_| selected.set(None)>
                                <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                                    <h2>{post.title.clone()}</h2>
                                    <h4>"Description"</h4>
                                    <p>{post.desc.clone()}</p>
                                    <h4>"Employer"</h4>
                                    <p>{employer}</p>
                                    <h4>"Application Date"</h4>
                                    <p>{applied_at}</p>
                                    <h4>"Job Posted Date"</h4>
                                    <p>{posted_at}</p>
                                    <h4>"Application Status"</h4>
                                    <StatusBadge status=application.status_name.clone() />
                                    <h4>"Application Message"</h4>
                                    <p>{message}</p>
                                    <Show when={
                                        let has_resume = resume.is_some();
                                        move || has_resume
                                    }>
                                        <h4>"Application Resume"</h4>
                                        <a href=resume.clone().unwrap_or_default() target="_blank">
                                            "View Resume"
                                        </a>
                                    </Show>
                                    <h4>"Total Applications for this Job"</h4>
                                    <p>{applicants}</p>
                                    <button class="btn dialog__close" on:click=move |_| selected.set(None)>
                                        "Close"
                                    </button>
                                </div>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
