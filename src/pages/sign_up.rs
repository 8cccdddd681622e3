//! Combined sign-up / login page with seeker and employer tabs.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the unauthenticated entry point the authenticated guard
//! redirects to. `?mode=login` switches the active tab's form from
//! registration to login; an already-logged-in visitor is sent home.

#[cfg(test)]
#[path = "sign_up_test.rs"]
mod sign_up_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::text_input::TextInput;
#[cfg(feature = "hydrate")]
use crate::net::error::{ApiError, AuthFailure};
use crate::net::error::{FieldErrors, field_error};
#[cfg(feature = "hydrate")]
use crate::state::session::{EmailVerified, derive_email_verified};
use crate::state::session::{Role, SharedSessionStore};
use crate::util::validate::{
    normalize_birthday, validate_birthday, validate_confirm_password, validate_email,
    validate_full_name, validate_password, validate_phone, validate_username,
};

/// Which form the page shows for the active tab.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FormMode {
    Login,
    Register,
}

fn parse_mode(raw: Option<&str>) -> FormMode {
    if raw == Some("login") { FormMode::Login } else { FormMode::Register }
}

fn validate_login_input(user_name: &str, password: &str) -> Result<(String, String), &'static str> {
    let user_name = user_name.trim();
    if user_name.is_empty() {
        return Err("Username is required!");
    }
    if password.is_empty() {
        return Err("Password is required!");
    }
    Ok((user_name.to_owned(), password.to_owned()))
}

/// Client-side registration checks, keyed by the backend field names so the
/// 422 path and this path render identically.
fn validate_registration(
    user_name: &str,
    password: &str,
    confirm: &str,
    email: &str,
    phone: &str,
    name: &str,
    birthday: &str,
) -> FieldErrors {
    let mut errors = FieldErrors::new();
    let mut check = |field: &str, result: Result<(), &'static str>| {
        if let Err(message) = result {
            errors.insert(field.to_owned(), vec![message.to_owned()]);
        }
    };
    check("user_name", validate_username(user_name));
    check("password", validate_password(password));
    check("confirm_password", validate_confirm_password(password, confirm));
    check("email", validate_email(email));
    check("phone", validate_phone(phone));
    check("name", validate_full_name(name));
    check("birthday", validate_birthday(birthday));
    errors
}

/// Tabbed entry page; seeker and employer share the login form.
#[component]
pub fn SignUpPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SharedSessionStore>>();
    let navigate = use_navigate();
    let query = use_query_map();

    let mode = move || parse_mode(query.with(|q| q.get("mode")).as_deref());
    let tab = RwSignal::new(Role::Seeker);

    // Already logged in: nothing to do here.
    Effect::new(move || {
        if session.with(|s| s.snapshot().is_authenticated()) {
            navigate("/", NavigateOptions::default());
        }
    });

    view! {
        <div class="sign-up-page">
            <div class="sign-up-card">
                <div class="sign-up-card__tabs">
                    <button
                        class="sign-up-card__tab"
                        class=("sign-up-card__tab--active", move || tab.get() == Role::Seeker)
                        on:click=move |_| tab.set(Role::Seeker)
                    >
                        "Seeker"
                    </button>
                    <button
                        class="sign-up-card__tab"
                        class=("sign-up-card__tab--active", move || tab.get() == Role::Employer)
                        on:click=move |_| tab.set(Role::Employer)
                    >
                        "Employer"
                    </button>
                </div>
                {move || match (mode(), tab.get()) {
                    (FormMode::Login, role) => view! { <LoginForm role=role /> }.into_any(),
                    (FormMode::Register, Role::Seeker) => view! { <SeekerRegisterForm /> }.into_any(),
                    (FormMode::Register, Role::Employer) => {
                        view! { <EmployerRegisterForm /> }.into_any()
                    }
                }}
            </div>
        </div>
    }
}

/// Username/password login for the given role tab.
#[component]
fn LoginForm(role: Role) -> impl IntoView {
    let session = expect_context::<RwSignal<SharedSessionStore>>();
    let navigate = use_navigate();

    let user_name = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let err_msg = RwSignal::new(String::new());
    let password_err = RwSignal::new(String::new());
    let loading = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get() {
            return;
        }
        err_msg.set(String::new());
        password_err.set(String::new());
        let (user, pass) = match validate_login_input(&user_name.get(), &password.get()) {
            Ok(pair) => pair,
            Err(message) => {
                err_msg.set(message.to_owned());
                return;
            }
        };
        loading.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(role, &user, &pass).await {
                    Ok(payload) => {
                        let verified = derive_email_verified(&payload.user);
                        session.update(|s| {
                            s.set_credentials(payload.user, role, verified, payload.token);
                        });
                        navigate("/", NavigateOptions::default());
                    }
                    Err(err) => {
                        if err == ApiError::Auth(AuthFailure::PasswordIncorrect) {
                            password_err.set(err.user_message().to_owned());
                        } else {
                            err_msg.set(err.user_message().to_owned());
                        }
                        loading.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (user, pass);
        }
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            <TextInput
                label="Username"
                placeholder="Username"
                value=user_name
                error=Signal::derive(String::new)
            />
            <div class="text-input password-field">
                <label class="text-input__label">"Password"</label>
                <input
                    class="text-input__field"
                    type=move || if show_password.get() { "text" } else { "password" }
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button
                    type="button"
                    class="password-field__toggle"
                    on:click=move |_| show_password.update(|v| *v = !*v)
                >
                    {move || if show_password.get() { "Hide" } else { "Show" }}
                </button>
                <Show when=move || !password_err.get().is_empty()>
                    <p class="text-input__error" role="alert">
                        {move || password_err.get()}
                    </p>
                </Show>
            </div>
            <Show when=move || !err_msg.get().is_empty()>
                <p class="form-error" role="alert">
                    {move || err_msg.get()}
                </p>
            </Show>
            <button class="btn btn--primary" type="submit" disabled=move || loading.get()>
                {move || if loading.get() { "Logging in..." } else { "Login" }}
            </button>
        </form>
    }
}

/// Seeker registration form. Success stores the new credentials with the
/// verification flag at `no` and moves on to the verification page.
#[component]
fn SeekerRegisterForm() -> impl IntoView {
    let session = expect_context::<RwSignal<SharedSessionStore>>();
    let navigate = use_navigate();

    let user_name = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let gender = RwSignal::new(String::new());
    let birthday = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);

    let errors = RwSignal::new(FieldErrors::new());
    let err = move |field: &'static str| Signal::derive(move || field_error(&errors.get(), field));
    let err_msg = RwSignal::new(String::new());
    let loading = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get() {
            return;
        }
        err_msg.set(String::new());

        let found = validate_registration(
            &user_name.get(),
            &password.get(),
            &confirm.get(),
            &email.get(),
            &phone.get(),
            &name.get(),
            &birthday.get(),
        );
        if !found.is_empty() {
            errors.set(found);
            return;
        }
        errors.set(FieldErrors::new());
        loading.set(true);

        let registration = crate::net::api::SeekerRegistration {
            user_name: user_name.get().trim().to_owned(),
            password: password.get(),
            email: email.get().trim().to_owned(),
            phone: phone.get().trim().to_owned(),
            name: name.get().trim().to_owned(),
            gender: Some(gender.get()).filter(|g| !g.is_empty()),
            birthday: normalize_birthday(&birthday.get()),
        };

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::register_seeker(&registration).await {
                    Ok(payload) => {
                        session.update(|s| {
                            s.set_credentials(
                                payload.user,
                                Role::Seeker,
                                EmailVerified::No,
                                payload.token,
                            );
                        });
                        navigate("/verify-email", NavigateOptions::default());
                    }
                    Err(ApiError::Validation(fields)) => {
                        errors.set(fields);
                        loading.set(false);
                    }
                    Err(other) => {
                        err_msg.set(other.user_message().to_owned());
                        loading.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = registration;
        }
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            <TextInput label="Username" placeholder="Username" value=user_name error=err("user_name") />
            <div class="text-input password-field">
                <label class="text-input__label">"Password"</label>
                <input
                    class="text-input__field"
                    type=move || if show_password.get() { "text" } else { "password" }
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button
                    type="button"
                    class="password-field__toggle"
                    on:click=move |_| show_password.update(|v| *v = !*v)
                >
                    {move || if show_password.get() { "Hide" } else { "Show" }}
                </button>
                <Show when=move || !err("password").get().is_empty()>
                    <p class="text-input__error" role="alert">
                        {move || err("password").get()}
                    </p>
                </Show>
            </div>
            <div class="text-input password-field">
                <label class="text-input__label">"Confirm Password"</label>
                <input
                    class="text-input__field"
                    type=move || if show_password.get() { "text" } else { "password" }
                    placeholder="Confirm Password"
                    prop:value=move || confirm.get()
                    on:input=move |ev| confirm.set(event_target_value(&ev))
                />
                <Show when=move || !err("confirm_password").get().is_empty()>
                    <p class="text-input__error" role="alert">
                        {move || err("confirm_password").get()}
                    </p>
                </Show>
            </div>
            <TextInput
                label="Email Address"
                placeholder="email@example.com"
                input_type="email"
                value=email
                error=err("email")
            />
            <TextInput
                label="Phone Number"
                placeholder="+12345678901"
                input_type="tel"
                value=phone
                error=err("phone")
            />
            <TextInput label="Full Name" placeholder="Full Name" value=name error=err("name") />
            <div class="text-input">
                <label class="text-input__label">"Gender"</label>
                <select
                    class="text-input__field"
                    prop:value=move || gender.get()
                    on:change=move |ev| gender.set(event_target_value(&ev))
                >
                    <option value="">"Prefer not to say"</option>
                    <option value="1">"Male"</option>
                    <option value="2">"Female"</option>
                    <option value="3">"Other"</option>
                </select>
            </div>
            <TextInput
                label="Birthday"
                placeholder="YYYY-MM-DD"
                input_type="date"
                value=birthday
                error=err("birthday")
            />
            <Show when=move || !err_msg.get().is_empty()>
                <p class="form-error" role="alert">
                    {move || err_msg.get()}
                </p>
            </Show>
            <button class="btn btn--primary" type="submit" disabled=move || loading.get()>
                {move || if loading.get() { "Creating..." } else { "Create Account" }}
            </button>
        </form>
    }
}

/// Employer self-registration is not offered yet; accounts are provisioned
/// by the backend operators. The form is shown but not wired.
#[component]
fn EmployerRegisterForm() -> impl IntoView {
    view! {
        <form class="auth-form">
            <div class="text-input">
                <label class="text-input__label">"Employer Name"</label>
                <input class="text-input__field" type="text" placeholder="Employer Name" />
            </div>
            <div class="text-input">
                <label class="text-input__label">"Email"</label>
                <input class="text-input__field" type="email" placeholder="Email" />
            </div>
            <button class="btn" type="button">
                "Sign Up"
            </button>
        </form>
    }
}
