//! Employer's postings: list, status toggle, and received applications.
//!
//! SYSTEM CONTEXT
//! ==============
//! Behind the employer-verified guard. The details modal nests its own
//! paginated applications table; accept/reject updates the row in place
//! the way the list endpoint would report it on the next fetch.

#[cfg(test)]
#[path = "employer_posts_test.rs"]
mod employer_posts_test;

use leptos::prelude::*;

use crate::components::job_card::JobCard;
use crate::components::pagination::Pagination;
#[cfg(feature = "hydrate")]
use crate::net::query::JobQuery;
use crate::net::types::{JobApplication, JobPost, Skill};
use crate::state::session::SharedSessionStore;
use crate::util::format::truncate_desc;

/// Mark one application with the status the respond endpoint just set.
#[cfg(any(test, feature = "hydrate"))]
fn apply_response(applications: &mut [JobApplication], id: i64, accepted: bool) {
    for application in applications {
        if application.id == id {
            application.status_name =
                if accepted { "ACCEPTED" } else { "REJECTED" }.to_owned();
        }
    }
}

/// Status label after a toggle.
#[cfg(any(test, feature = "hydrate"))]
fn toggled_status(current: Option<&str>) -> &'static str {
    if current == Some("OPENED") { "CLOSED" } else { "OPENED" }
}

/// Grid of the employer's postings with a per-post applications modal.
#[component]
pub fn EmployerPostsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SharedSessionStore>>();

    let posts = RwSignal::new(Vec::<JobPost>::new());
    let current_page = RwSignal::new(1u64);
    let per_page = RwSignal::new(0u64);
    let total = RwSignal::new(0u64);
    let loading = RwSignal::new(true);
    let error_msg = RwSignal::new(String::new());

    let skills = RwSignal::new(Vec::<Skill>::new());
    let filter_title = RwSignal::new(String::new());
    let filter_skills = RwSignal::new(Vec::<i64>::new());
    let filter_created = RwSignal::new(String::new());

    let selected = RwSignal::new(None::<JobPost>);
    let post_status = RwSignal::new(String::new());

    let applications = RwSignal::new(Vec::<JobApplication>::new());
    let app_page = RwSignal::new(1u64);
    let app_per_page = RwSignal::new(0u64);
    let app_total = RwSignal::new(0u64);
    let app_loading = RwSignal::new(false);
    let responding = RwSignal::new(None::<i64>);
    let message_modal = RwSignal::new(None::<String>);

    let fetch_posts = move |page: u64| {
        loading.set(true);
        error_msg.set(String::new());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let token = session
                .with_untracked(|s| s.snapshot().token.clone())
                .unwrap_or_default();
            let created = filter_created.get_untracked();
            let query = JobQuery {
                page,
                title: filter_title.get_untracked(),
                employer: String::new(),
                skills: filter_skills.get_untracked(),
                created_at: if created.is_empty() { None } else { Some(format!("{created} 00:00:00")) },
            };
            match crate::net::api::list_employer_posts(&token, &query).await {
                Ok(page_of_posts) => {
                    posts.set(page_of_posts.data);
                    current_page.set(page_of_posts.current_page.max(1));
                    per_page.set(page_of_posts.per_page);
                    total.set(page_of_posts.total);
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

    let fetch_applications = move |post_id: i64, page: u64| {
        app_loading.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let token = session
                .with_untracked(|s| s.snapshot().token.clone())
                .unwrap_or_default();
            match crate::net::api::list_post_applications(&token, post_id, page).await {
                Ok(page_of_applications) => {
                    applications.set(page_of_applications.data);
                    app_page.set(page_of_applications.current_page.max(1));
                    app_per_page.set(page_of_applications.per_page);
                    app_total.set(page_of_applications.total);
                }
                Err(_) => applications.set(Vec::new()),
            }
            app_loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (post_id, page);
        }
    };

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        requested.set(true);
        fetch_posts(1);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let token = session
                .with_untracked(|s| s.snapshot().token.clone())
                .unwrap_or_default();
            if let Ok(list) = crate::net::api::fetch_skills(&token).await {
                skills.set(list);
            }
        });
    });

    let on_page = Callback::new(move |page: u64| fetch_posts(page));

    let on_filter = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        fetch_posts(1);
    };

    let on_view = Callback::new(move |post: JobPost| {
        post_status.set(post.status_name.clone().unwrap_or_default());
        fetch_applications(post.id, 1);
        selected.set(Some(post));
    });

    let on_toggle = move |post_id: i64| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let token = session
                .with_untracked(|s| s.snapshot().token.clone())
                .unwrap_or_default();
            match crate::net::api::toggle_job_status(&token, post_id).await {
                Ok(()) => {
                    post_status.update(|status| {
                        *status = toggled_status(Some(status.as_str())).to_owned();
                    });
                    fetch_posts(current_page.get_untracked());
                }
                Err(_) => error_msg.set("Failed to update job status".to_owned()),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = post_id;
        }
    };

    let on_respond = move |application_id: i64, accepted: bool| {
        responding.set(Some(application_id));
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let token = session
                .with_untracked(|s| s.snapshot().token.clone())
                .unwrap_or_default();
            match crate::net::api::respond_to_application(&token, application_id, accepted).await {
                Ok(()) => {
                    applications.update(|apps| apply_response(apps, application_id, accepted));
                }
                Err(_) => error_msg.set("Failed to respond to application".to_owned()),
            }
            responding.set(None);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (application_id, accepted);
        }
    };

    view! {
        <div class="employer-posts-page">
            <h2>"My Job Posts"</h2>

            <form class="filter-bar" on:submit=on_filter>
                <input
                    class="filter-bar__input"
                    type="text"
                    placeholder="Search by Title"
                    prop:value=move || filter_title.get()
                    on:input=move |ev| filter_title.set(event_target_value(&ev))
                />
                <div class="filter-bar__skills">
                    <For
                        each=move || skills.get()
                        key=|skill| skill.id
                        children=move |skill: Skill| {
                            let id = skill.id;
                            view! {
                                <label class="filter-bar__skill">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || filter_skills.get().contains(&id)
                                        on:change=move |_| {
                                            filter_skills
                                                .update(|sel| {
                                                    if let Some(pos) = sel.iter().position(|s| *s == id) {
                                                        sel.remove(pos);
                                                    } else {
                                                        sel.push(id);
                                                    }
                                                });
                                        }
                                    />
                                    {skill.name.clone()}
                                </label>
                            }
                        }
                    />
                </div>
                <input
                    class="filter-bar__input"
                    type="date"
                    placeholder="Created at"
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
                fallback=|| view! { <p class="employer-posts-page__loading">"Loading posts..."</p> }
            >
                <Show
                    when=move || !posts.get().is_empty()
                    fallback=|| view! { <h3 class="employer-posts-page__empty">"No job posts available"</h3> }
                >
                    <div class="employer-posts-page__grid">
                        <For
                            each=move || posts.get()
                            key=|post| post.id
                            children=move |post: JobPost| {
                                view! { <JobCard job=post on_view=on_view show_status=true /> }
                            }
                        />
                    </div>
                </Show>
            </Show>

            <Pagination current=current_page total=total per_page=per_page on_page=on_page />

            {move || {
                selected
                    .get()
                    .map(|post| {
                        let post_id = post.id;
                        view! {
                            <div class="dialog-backdrop" on:click=move |_| selected.set(None)>
                                <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                                    <h2>{post.title.clone()}</h2>
                                    <p>
                                        <strong>"Description: "</strong>
                                        {post.desc.clone()}
                                    </p>
                                    <div class="dialog__skills">
                                        {post
                                            .skills
                                            .iter()
                                            .map(|skill| {
                                                view! {
                                                    <span class="job-card__skill">{skill.name.clone()}</span>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </div>
                                    <p>
                                        <strong>"Status: "</strong>
                                        <button
                                            class="btn employer-posts-page__toggle"
                                            on:click=move |_| on_toggle(post_id)
                                        >
                                            {move || post_status.get()}
                                        </button>
                                    </p>

                                    <Show
                                        when=move || !app_loading.get()
                                        fallback=|| view! { <p>"Loading applications..."</p> }
                                    >
                                        <table class="applications-table">
                                            <thead>
                                                <tr>
                                                    <th>"Seeker Name"</th>
                                                    <th>"User Name"</th>
                                                    <th>"Email"</th>
                                                    <th>"Phone"</th>
                                                    <th>"Message"</th>
                                                    <th>"Resume"</th>
                                                    <th>"Respond"</th>
                                                </tr>
                                            </thead>
                                            <tbody>
                                                <For
                                                    each=move || applications.get()
                                                    key=|application| application.id
                                                    children=move |application: JobApplication| {
                                                        let seeker = application
                                                            .seeker
                                                            .clone()
                                                            .unwrap_or_default();
                                                        let message = application.message.clone();
                                                        let message_preview = message
                                                            .as_deref()
                                                            .map(|m| truncate_desc(m, 20))
                                                            .unwrap_or_else(|| "No message provided".to_owned());
                                                        let full_message = message.unwrap_or_default();
                                                        let resume = application.resume.clone();
                                                        let application_id = application.id;
                                                        let pending = application.status_name == "PENDING";
                                                        let status = application.status_name.clone();
                                                        view! {
                                                            <tr>
                                                                <td>{seeker.user.name.clone().unwrap_or_default()}</td>
                                                                <td>{seeker.user.user_name.clone().unwrap_or_default()}</td>
                                                                <td>{seeker.user.email.clone().unwrap_or_default()}</td>
                                                                <td>{seeker.user.phone.clone().unwrap_or_default()}</td>
                                                                <td>
                                                                    <button
                                                                        class="applications-table__message"
                                                                        on:click=move |_| message_modal.set(Some(full_message.clone()))
                                                                    >
                                                                        {message_preview.clone()}
                                                                    </button>
                                                                </td>
                                                                <td>
                                                                    <Show when={
                                                                        let has_resume = resume.is_some();
                                                                        move || has_resume
                                                                    }>
                                                                        <a href=resume.clone().unwrap_or_default() target="_blank">
                                                                            "View Resume"
                                                                        </a>
                                                                    </Show>
                                                                </td>
                                                                <td>
                                                                    <Show
                                                                        when={
                                                                            let is_pending = pending;
                                                                            move || is_pending
                                                                        }
                                                                        fallback={
                                                                            let status = status.clone();
                                                                            move || status.clone()
                                                                        }
                                                                    >
                                                                        <Show
                                                                            when=move || responding.get() != Some(application_id)
                                                                            fallback=|| "..."
                                                                        >
                                                                            <button
                                                                                class="btn btn--primary"
                                                                                on:click=move |_| on_respond(application_id, true)
                                                                            >
                                                                                "ACCEPT"
                                                                            </button>
                                                                            <button
                                                                                class="btn btn--danger"
                                                                                on:click=move |_| on_respond(application_id, false)
                                                                            >
                                                                                "REJECT"
                                                                            </button>
                                                                        </Show>
                                                                    </Show>
                                                                </td>
                                                            </tr>
                                                        }
                                                    }
                                                />
                                            </tbody>
                                        </table>
                                        <Pagination
                                            current=app_page
                                            total=app_total
                                            per_page=app_per_page
                                            on_page=Callback::new(move |page: u64| fetch_applications(post_id, page))
                                        />
                                    </Show>

                                    <button class="btn dialog__close" on:click=move |_| selected.set(None)>
                                        "Close"
                                    </button>
                                </div>
                            </div>
                        }
                    })
            }}

            {move || {
                message_modal
                    .get()
                    .map(|full_message| {
                        view! {
                            <div class="dialog-backdrop" on:click=move |_| message_modal.set(None)>
                                <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                                    <h2>"Full Message"</h2>
                                    <p class="dialog__message">{full_message.clone()}</p>
                                    <button class="btn dialog__close" on:click=move |_| message_modal.set(None)>
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
