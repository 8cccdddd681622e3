//! Profile-update modal shown from the dashboard.
//!
//! SYSTEM CONTEXT
//! ==============
//! On success the backend returns the fresh identity record; credentials
//! are replaced as one unit with the verification flag re-derived, and the
//! stored token is kept untouched.

use leptos::prelude::*;

use crate::net::api::ProfileUpdate;
#[cfg(feature = "hydrate")]
use crate::net::error::ApiError;
use crate::net::error::{FieldErrors, field_error};
use crate::state::session::SharedSessionStore;
#[cfg(feature = "hydrate")]
use crate::state::session::derive_email_verified;
#[cfg(feature = "hydrate")]
use crate::util::validate::validate_resume_file;

use super::text_input::TextInput;

/// Modal form editing the logged-in user's profile fields.
#[component]
pub fn ProfileModal(on_close: Callback<()>) -> impl IntoView {
    let session = expect_context::<RwSignal<SharedSessionStore>>();

    let (identity, role) = session.with_untracked(|s| {
        let snapshot = s.snapshot();
        (snapshot.identity.clone().unwrap_or_default(), snapshot.role)
    });
    let is_seeker = role == Some(crate::state::session::Role::Seeker);

    let email = RwSignal::new(identity.email.clone().unwrap_or_default());
    let phone = RwSignal::new(identity.phone.clone().unwrap_or_default());
    let name = RwSignal::new(identity.name.clone().unwrap_or_default());
    let gender = RwSignal::new(identity.gender.map(|g| g.to_string()).unwrap_or_default());
    let headline = RwSignal::new(identity.headline.clone().unwrap_or_default());
    let desc = RwSignal::new(identity.desc.clone().unwrap_or_default());
    let birthday = RwSignal::new(identity.birthday.clone().unwrap_or_default());
    let resume_link = RwSignal::new(identity.resume.clone());

    let errors = RwSignal::new(FieldErrors::new());
    let err = move |field: &'static str| Signal::derive(move || field_error(&errors.get(), field));
    let err_msg = RwSignal::new(String::new());
    let loading = RwSignal::new(false);
    let uploading = RwSignal::new(false);

    let on_file_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input: web_sys::HtmlInputElement = event_target(&ev);
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            if let Err(message) = validate_resume_file(&file.type_(), file.size()) {
                err_msg.set(message.to_owned());
                return;
            }
            err_msg.set(String::new());
            uploading.set(true);
            let token = session
                .with_untracked(|s| s.snapshot().token.clone())
                .unwrap_or_default();
            leptos::task::spawn_local(async move {
                match crate::net::api::upload_file(&token, &file, "resumes").await {
                    Ok(link) => resume_link.set(Some(link)),
                    Err(_) => err_msg.set("Failed to upload resume. Please try again.".to_owned()),
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
        let Some(role) = role else {
            err_msg.set("An error occurred. Please try again.".to_owned());
            return;
        };
        let Some(user_id) = identity.user_id else {
            err_msg.set("An error occurred. Please try again.".to_owned());
            return;
        };
        loading.set(true);
        errors.set(FieldErrors::new());

        let update = ProfileUpdate {
            email: email.get(),
            phone: phone.get(),
            name: name.get(),
            gender: Some(gender.get()).filter(|g| !g.is_empty()),
            headline: Some(headline.get()).filter(|_| is_seeker),
            desc: Some(desc.get()).filter(|_| is_seeker),
            birthday: Some(birthday.get()).filter(|b| is_seeker && !b.is_empty()),
            resume: resume_link.get(),
        };

        #[cfg(feature = "hydrate")]
        {
            let token = session
                .with_untracked(|s| s.snapshot().token.clone())
                .unwrap_or_default();
            leptos::task::spawn_local(async move {
                match crate::net::api::update_profile(&token, role, user_id, &update).await {
                    Ok(user) => {
                        let verified = derive_email_verified(&user);
                        session.update(|s| s.set_credentials(user, role, verified, None));
                        err_msg.set(String::new());
                        on_close.run(());
                    }
                    Err(ApiError::Validation(fields)) => errors.set(fields),
                    Err(other) => err_msg.set(other.user_message().to_owned()),
                }
                loading.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = update;
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--profile" on:click=move |ev| ev.stop_propagation()>
                <h2>"Update Profile"</h2>
                <form class="profile-form" on:submit=on_submit>
                    <TextInput label="Email Address" placeholder="email@example.com" input_type="email" value=email error=err("email") />
                    <TextInput label="Phone Number" placeholder="+12345678901" input_type="tel" value=phone error=err("phone") />
                    <TextInput label="Full Name" placeholder="Full Name" value=name error=err("name") />
                    <div class="profile-form__field">
                        <label>"Gender"</label>
                        <select
                            prop:value=move || gender.get()
                            on:change=move |ev| gender.set(event_target_value(&ev))
                        >
                            <option value="">"Prefer not to say"</option>
                            <option value="1">"Male"</option>
                            <option value="2">"Female"</option>
                            <option value="3">"Other"</option>
                        </select>
                    </div>
                    <Show when=move || is_seeker>
                        <TextInput label="Headline" placeholder="Headline" value=headline error=err("headline") />
                        <TextInput label="Description" placeholder="Description" value=desc error=err("desc") />
                        <TextInput label="Birthday" placeholder="YYYY-MM-DD" input_type="date" value=birthday error=err("birthday") />
                        <div class="profile-form__field">
                            <label>"Resume (PDF)"</label>
                            <input type="file" accept=".pdf" on:change=on_file_change />
                            <Show when=move || uploading.get()>
                                <p>"Uploading..."</p>
                            </Show>
                            <Show when=move || resume_link.get().is_some()>
                                <p class="profile-form__resume">
                                    <a href=move || resume_link.get().unwrap_or_default() target="_blank">
                                        "View Resume"
                                    </a>
                                    <button type="button" on:click=move |_| resume_link.set(None)>
                                        "Remove"
                                    </button>
                                </p>
                            </Show>
                        </div>
                    </Show>
                    <Show when=move || !err_msg.get().is_empty()>
                        <p class="form-error" role="alert">
                            {move || err_msg.get()}
                        </p>
                    </Show>
                    <div class="dialog__actions">
                        <button type="button" class="btn" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn--primary" disabled=move || loading.get()>
                            {move || if loading.get() { "Saving..." } else { "Save" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
