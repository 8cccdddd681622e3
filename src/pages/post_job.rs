//! Employer form for publishing a new job post.

#[cfg(test)]
#[path = "post_job_test.rs"]
mod post_job_test;

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::net::error::ApiError;
use crate::net::error::{FieldErrors, field_error};
use crate::net::types::Skill;
use crate::state::session::SharedSessionStore;
use crate::util::validate::{validate_job_desc, validate_job_skills, validate_job_title};

/// Client-side checks for a new posting, keyed by backend field names.
fn validate_new_job(title: &str, desc: &str, skills: &[i64]) -> FieldErrors {
    let mut errors = FieldErrors::new();
    let mut check = |field: &str, result: Result<(), &'static str>| {
        if let Err(message) = result {
            errors.insert(field.to_owned(), vec![message.to_owned()]);
        }
    };
    check("title", validate_job_title(title));
    check("desc", validate_job_desc(desc));
    check("skills", validate_job_skills(skills));
    errors
}

/// Title/description/skills form with an optional cover image upload.
#[component]
pub fn PostJobPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SharedSessionStore>>();

    let title = RwSignal::new(String::new());
    let desc = RwSignal::new(String::new());
    let selected_skills = RwSignal::new(Vec::<i64>::new());
    let skills = RwSignal::new(Vec::<Skill>::new());
    let image_link = RwSignal::new(None::<String>);
    let uploading = RwSignal::new(false);

    let errors = RwSignal::new(FieldErrors::new());
    let err = move |field: &'static str| Signal::derive(move || field_error(&errors.get(), field));
    let notice = RwSignal::new(String::new());
    let loading = RwSignal::new(false);

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        requested.set(true);
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

    let on_image_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input: web_sys::HtmlInputElement = event_target(&ev);
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            uploading.set(true);
            let token = session
                .with_untracked(|s| s.snapshot().token.clone())
                .unwrap_or_default();
            leptos::task::spawn_local(async move {
                match crate::net::api::upload_file(&token, &file, "images").await {
                    Ok(link) => image_link.set(Some(link)),
                    Err(_) => notice.set("Failed to upload image".to_owned()),
                }
                uploading.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get() {
            return;
        }
        notice.set(String::new());

        let found = validate_new_job(&title.get(), &desc.get(), &selected_skills.get());
        if !found.is_empty() {
            errors.set(found);
            return;
        }
        errors.set(FieldErrors::new());
        loading.set(true);

        let job = crate::net::api::NewJobPost {
            title: title.get().trim().to_owned(),
            desc: desc.get().trim().to_owned(),
            skills: selected_skills.get(),
            image: image_link.get(),
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let token = session
                .with_untracked(|s| s.snapshot().token.clone())
                .unwrap_or_default();
            match crate::net::api::post_job(&token, &job).await {
                Ok(()) => {
                    notice.set("Job posted successfully".to_owned());
                    title.set(String::new());
                    desc.set(String::new());
                    selected_skills.set(Vec::new());
                    image_link.set(None);
                }
                Err(ApiError::Validation(fields)) => errors.set(fields),
                Err(_) => notice.set("Failed to post job".to_owned()),
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = job;
        }
    };

    view! {
        <div class="post-job-page">
            <form class="post-job-form" on:submit=on_submit>
                <h2>"Post a Job"</h2>

                <div class="text-input">
                    <label class="text-input__label">"Title"</label>
                    <input
                        class="text-input__field"
                        type="text"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                    <Show when=move || !err("title").get().is_empty()>
                        <p class="text-input__error">{move || err("title").get()}</p>
                    </Show>
                </div>

                <div class="text-input">
                    <label class="text-input__label">"Description"</label>
                    <textarea
                        class="text-input__field"
                        rows="4"
                        prop:value=move || desc.get()
                        on:input=move |ev| desc.set(event_target_value(&ev))
                    ></textarea>
                    <Show when=move || !err("desc").get().is_empty()>
                        <p class="text-input__error">{move || err("desc").get()}</p>
                    </Show>
                </div>

                <div class="text-input">
                    <label class="text-input__label">"Skills"</label>
                    <Show
                        when=move || !skills.get().is_empty()
                        fallback=|| view! { <p>"No skills available"</p> }
                    >
                        <div class="post-job-form__skills">
                            <For
                                each=move || skills.get()
                                key=|skill| skill.id
                                children=move |skill: Skill| {
                                    let id = skill.id;
                                    view! {
                                        <label class="post-job-form__skill">
                                            <input
                                                type="checkbox"
                                                prop:checked=move || selected_skills.get().contains(&id)
                                                on:change=move |_| {
                                                    selected_skills
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
                    </Show>
                    <Show when=move || !err("skills").get().is_empty()>
                        <p class="text-input__error">{move || err("skills").get()}</p>
                    </Show>
                </div>

                <div class="text-input">
                    <label class="text-input__label">"Image"</label>
                    <input type="file" accept="image/*" on:change=on_image_change />
                    <Show when=move || uploading.get()>
                        <p>"Uploading..."</p>
                    </Show>
                    <Show when=move || image_link.get().is_some()>
                        <img
                            class="post-job-form__preview"
                            src=move || image_link.get().unwrap_or_default()
                            alt="Uploaded Preview"
                        />
                    </Show>
                </div>

                <Show when=move || !notice.get().is_empty()>
                    <p class="post-job-form__notice">{move || notice.get()}</p>
                </Show>

                <button class="btn btn--primary" type="submit" disabled=move || loading.get()>
                    {move || if loading.get() { "Posting..." } else { "Post Job" }}
                </button>
            </form>
        </div>
    }
}
