//! Card summarizing one job post in a list grid.

use leptos::prelude::*;

use crate::net::types::JobPost;
use crate::util::format::truncate_desc;

/// Cover-image card with a truncated description and a details action.
/// `show_status` adds the employer-facing status and application count.
#[component]
pub fn JobCard(
    job: JobPost,
    on_view: Callback<JobPost>,
    #[prop(optional)] show_status: bool,
) -> impl IntoView {
    let title = job.title.clone();
    let alt_title = job.title.clone();
    let summary = truncate_desc(&job.desc, 30);
    let image = job.image.clone();
    let status = job.status_name.clone().unwrap_or_default();
    let applications = job.application_count.unwrap_or_default();
    let skills = job.skills.clone();

    view! {
        <div class="job-card">
            <Show when={
                let has_image = image.is_some();
                move || has_image
            }>
                <img class="job-card__cover" src=image.clone().unwrap_or_default() alt=alt_title.clone() />
            </Show>
            <h3 class="job-card__title">{title}</h3>
            <p class="job-card__summary">{summary}</p>
            <div class="job-card__skills">
                {skills
                    .iter()
                    .map(|skill| view! { <span class="job-card__skill">{skill.name.clone()}</span> })
                    .collect::<Vec<_>>()}
            </div>
            <Show when=move || show_status>
                <p class="job-card__meta">
                    <strong>"Status: "</strong>
                    {status.clone()}
                </p>
                <p class="job-card__meta">
                    <strong>"Applications: "</strong>
                    {applications}
                </p>
            </Show>
            <button class="btn job-card__view" on:click=move |_| on_view.run(job.clone())>
                "View Details"
            </button>
        </div>
    }
}
