//! Seeker job board: filterable, paginated postings with an apply flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! Behind the seeker-verified guard. Fetches run with the session's bearer
//! token; applying needs a resume link, either freshly uploaded or the one
//! stored on the profile.

#[cfg(test)]
#[path = "jobs_test.rs"]
mod jobs_test;

use leptos::prelude::*;

use crate::components::job_card::JobCard;
use crate::components::pagination::Pagination;
#[cfg(feature = "hydrate")]
use crate::net::query::JobQuery;
use crate::net::types::{JobPost, Skill};
use crate::state::session::SharedSessionStore;
#[cfg(feature = "hydrate")]
use crate::util::validate::validate_resume_file;

/// Toggle `id` in a checkbox-style selection list.
fn toggle_id(selection: &mut Vec<i64>, id: i64) {
    if let Some(position) = selection.iter().position(|s| *s == id) {
        selection.remove(position);
    } else {
        selection.push(id);
    }
}

/// Resume link to submit: a fresh upload wins over the stored profile one.
fn resume_for_application(uploaded: Option<String>, stored: Option<String>) -> Option<String> {
    uploaded.or(stored)
}

/// Paginated job grid with title/employer/skill filters and a details modal.
#[component]
pub fn JobsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SharedSessionStore>>();

    let jobs = RwSignal::new(Vec::<JobPost>::new());
    let current_page = RwSignal::new(1u64);
    let per_page = RwSignal::new(0u64);
    let total = RwSignal::new(0u64);
    let loading = RwSignal::new(true);

    let skills = RwSignal::new(Vec::<Skill>::new());
    let filter_title = RwSignal::new(String::new());
    let filter_employer = RwSignal::new(String::new());
    let filter_skills = RwSignal::new(Vec::<i64>::new());

    let selected = RwSignal::new(None::<JobPost>);
    let apply_open = RwSignal::new(false);
    let apply_message = RwSignal::new(String::new());
    let resume_link = RwSignal::new(None::<String>);
    let uploading = RwSignal::new(false);
    let notice = RwSignal::new(String::new());
    let error_msg = RwSignal::new(String::new());

    let fetch_jobs = move |page: u64| {
        loading.set(true);
        error_msg.set(String::new());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let token = session
                .with_untracked(|s| s.snapshot().token.clone())
                .unwrap_or_default();
            let query = JobQuery {
                page,
                title: filter_title.get_untracked(),
                employer: filter_employer.get_untracked(),
                skills: filter_skills.get_untracked(),
                created_at: None,
            };
            match crate::net::api::list_jobs(&token, &query).await {
                Ok(page_of_jobs) => {
                    jobs.set(page_of_jobs.data);
                    current_page.set(page_of_jobs.current_page.max(1));
                    per_page.set(page_of_jobs.per_page);
                    total.set(page_of_jobs.total);
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

    // Initial load of jobs and the skills dropdown.
    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        requested.set(true);
        fetch_jobs(1);
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

    let on_page = Callback::new(move |page: u64| fetch_jobs(page));

    let on_filter = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        fetch_jobs(1);
    };

    let on_view = Callback::new(move |job: JobPost| {
        selected.set(Some(job));
        apply_open.set(false);
        apply_message.set(String::new());
        resume_link.set(None);
        notice.set(String::new());
    });

    let close_modal = move || {
        selected.set(None);
        apply_open.set(false);
        resume_link.set(None);
    };

    let on_file_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input: web_sys::HtmlInputElement = event_target(&ev);
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            if let Err(message) = validate_resume_file(&file.type_(), file.size()) {
                notice.set(message.to_owned());
                return;
            }
            uploading.set(true);
            let token = session
                .with_untracked(|s| s.snapshot().token.clone())
                .unwrap_or_default();
            leptos::task::spawn_local(async move {
                match crate::net::api::upload_file(&token, &file, "resumes").await {
                    Ok(link) => {
                        resume_link.set(Some(link));
                        notice.set("Resume uploaded successfully!".to_owned());
                    }
                    Err(_) => notice.set("Failed to upload resume.".to_owned()),
                }
                uploading.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let submit_application = move |job_id: i64| {
        let stored = session.with_untracked(|s| {
            s.snapshot().identity.as_ref().and_then(|user| user.resume.clone())
        });
        let Some(resume) = resume_for_application(resume_link.get_untracked(), stored) else {
            notice.set("Please upload a resume first.".to_owned());
            return;
        };
        let request = crate::net::api::ApplicationRequest {
            job_post_id: job_id,
            resume: Some(resume),
            message: apply_message.get_untracked(),
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let token = session
                .with_untracked(|s| s.snapshot().token.clone())
                .unwrap_or_default();
            match crate::net::api::apply_to_job(&token, &request).await {
                Ok(()) => {
                    selected.set(None);
                    apply_open.set(false);
                    resume_link.set(None);
                    apply_message.set(String::new());
                    notice.set("Applied successfully!".to_owned());
                    fetch_jobs(current_page.get_untracked());
                }
                Err(_) => notice.set("Failed to apply for job.".to_owned()),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
        }
    };

    view! {
        <div class="jobs-page">
            <form class="filter-bar" on:submit=on_filter>
                <input
                    class="filter-bar__input"
                    type="text"
                    placeholder="Job Title"
                    prop:value=move || filter_title.get()
                    on:input=move |ev| filter_title.set(event_target_value(&ev))
                />
                <input
                    class="filter-bar__input"
                    type="text"
                    placeholder="Employer"
                    prop:value=move || filter_employer.get()
                    on:input=move |ev| filter_employer.set(event_target_value(&ev))
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
                                        on:change=move |_| filter_skills.update(|sel| toggle_id(sel, id))
                                    />
                                    {skill.name.clone()}
                                </label>
                            }
                        }
                    />
                </div>
                <button class="btn btn--primary" type="submit">
                    "Apply Filters"
                </button>
            </form>

            <Show when=move || !notice.get().is_empty()>
                <p class="jobs-page__notice">{move || notice.get()}</p>
            </Show>
            <Show when=move || !error_msg.get().is_empty()>
                <p class="form-error">{move || error_msg.get()}</p>
            </Show>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="jobs-page__loading">"Loading jobs..."</p> }
            >
                <Show
                    when=move || !jobs.get().is_empty()
                    fallback=|| view! { <h3 class="jobs-page__empty">"No Jobs Available"</h3> }
                >
                    <div class="jobs-page__grid">
                        <For
                            each=move || jobs.get()
                            key=|job| job.id
                            children=move |job: JobPost| {
                                view! { <JobCard job=job on_view=on_view /> }
                            }
                        />
                    </div>
                </Show>
            </Show>

            <Pagination current=current_page total=total per_page=per_page on_page=on_page />

            {move || {
                selected
                    .get()
                    .map(|job| {
                        let job_id = job.id;
                        let employer = job
                            .employer
                            .as_ref()
                            .and_then(|e| e.user.name.clone())
                            .unwrap_or_default();
                        view! {
                            <div class="dialog-backdrop" on:click=move |_| close_modal()>
                                <div class="dialog dialog--job" on:click=move |ev| ev.stop_propagation()>
                                    <h2>{job.title.clone()}</h2>
                                    <p>
                                        <strong>"Description: "</strong>
                                        {job.desc.clone()}
                                    </p>
                                    <p>
                                        <strong>"Employer: "</strong>
                                        {employer}
                                    </p>
                                    <div class="dialog__skills">
                                        {job
                                            .skills
                                            .iter()
                                            .map(|skill| {
                                                view! {
                                                    <span class="job-card__skill">{skill.name.clone()}</span>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </div>
                                    <Show when=move || !apply_open.get()>
                                        <button
                                            class="btn btn--primary"
                                            on:click=move |_| apply_open.set(true)
                                        >
                                            "Apply"
                                        </button>
                                    </Show>
                                    <Show when=move || apply_open.get()>
                                        <div class="apply-form">
                                            <label>"Resume (PDF)"</label>
                                            <input type="file" accept=".pdf" on:change=on_file_change />
                                            <Show when=move || uploading.get()>
                                                <p>"Uploading..."</p>
                                            </Show>
                                            <Show when=move || resume_link.get().is_some()>
                                                <p>"Resume uploaded successfully!"</p>
                                            </Show>
                                            <label>"Message (Optional)"</label>
                                            <textarea
                                                maxlength="500"
                                                prop:value=move || apply_message.get()
                                                on:input=move |ev| apply_message.set(event_target_value(&ev))
                                            ></textarea>
                                            <button
                                                class="btn btn--primary"
                                                on:click=move |_| submit_application(job_id)
                                            >
                                                "Submit Application"
                                            </button>
                                        </div>
                                    </Show>
                                    <button class="btn dialog__close" on:click=move |_| close_modal()>
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
