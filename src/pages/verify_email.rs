//! Email-verification page: token entry plus resend with a cooldown.
//!
//! SYSTEM CONTEXT
//! ==============
//! Behind the authenticated guard. A successful verify (or an
//! "already verified" rejection) flips the session's verification flag, the
//! only path besides login/profile-update that touches session state.

#[cfg(test)]
#[path = "verify_email_test.rs"]
mod verify_email_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

#[cfg(any(test, feature = "hydrate"))]
use crate::net::error::{ApiError, VerificationFailure};
#[cfg(feature = "hydrate")]
use crate::state::session::EmailVerified;
use crate::state::session::SharedSessionStore;

const RESEND_COOLDOWN_SECS: u32 = 60;

/// Message to show for a verification failure and whether the local flag
/// should self-heal to verified.
#[cfg(any(test, feature = "hydrate"))]
fn verification_failure_effects(err: &ApiError) -> (&'static str, bool) {
    let heal = matches!(
        err,
        ApiError::Verification(VerificationFailure::AlreadyVerified)
    );
    (err.user_message(), heal)
}

/// Token entry form with a resend button that cools down for a minute.
#[component]
pub fn VerifyEmailPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SharedSessionStore>>();
    let navigate = use_navigate();

    let email_token = RwSignal::new(String::new());
    let err_msg = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let loading = RwSignal::new(false);
    let resend_loading = RwSignal::new(false);
    let seconds = RwSignal::new(RESEND_COOLDOWN_SECS);

    // Tick the resend cooldown once a second while the page is mounted.
    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(1)).await;
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                seconds.update(|s| *s = s.saturating_sub(1));
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let on_verify = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get() {
            return;
        }
        let token_value = email_token.get().trim().to_owned();
        if token_value.is_empty() {
            err_msg.set("Token is required.".to_owned());
            return;
        }
        err_msg.set(String::new());
        loading.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let bearer_token = session
                    .with_untracked(|s| s.snapshot().token.clone())
                    .unwrap_or_default();
                match crate::net::api::verify_email(&bearer_token, &token_value).await {
                    Ok(()) => {
                        session.update(|s| s.update_email_verification(EmailVerified::Yes));
                        navigate("/", NavigateOptions::default());
                    }
                    Err(err) => {
                        let (message, heal) = verification_failure_effects(&err);
                        if heal {
                            session.update(|s| s.update_email_verification(EmailVerified::Yes));
                        }
                        err_msg.set(message.to_owned());
                        loading.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token_value;
        }
    };

    let on_resend = move |_| {
        if resend_loading.get() || seconds.get() > 0 {
            return;
        }
        resend_loading.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let bearer_token = session
                .with_untracked(|s| s.snapshot().token.clone())
                .unwrap_or_default();
            match crate::net::api::resend_verification(&bearer_token).await {
                Ok(()) => {
                    info.set("Please Check Your Email!".to_owned());
                    seconds.set(RESEND_COOLDOWN_SECS);
                }
                Err(_) => err_msg.set("Email Resend Failed!".to_owned()),
            }
            resend_loading.set(false);
        });
    };

    view! {
        <div class="verify-page">
            <div class="verify-card">
                <h2>"Verify Your Email"</h2>
                <p>"Please enter the token sent to your email to verify your account."</p>
                <form class="verify-form" on:submit=on_verify>
                    <input
                        class="verify-form__input"
                        type="text"
                        placeholder="Enter your token"
                        prop:value=move || email_token.get()
                        on:input=move |ev| email_token.set(event_target_value(&ev))
                    />
                    <Show when=move || !err_msg.get().is_empty()>
                        <p class="form-error" role="alert">
                            {move || err_msg.get()}
                        </p>
                    </Show>
                    <Show when=move || !info.get().is_empty()>
                        <p class="form-info">{move || info.get()}</p>
                    </Show>
                    <button class="btn btn--primary" type="submit" disabled=move || loading.get()>
                        {move || if loading.get() { "Verifying..." } else { "Verify Email" }}
                    </button>
                </form>
                <button
                    class="btn verify-card__resend"
                    disabled=move || { resend_loading.get() || seconds.get() > 0 }
                    on:click=on_resend
                >
                    {move || {
                        if resend_loading.get() {
                            "Sending...".to_owned()
                        } else if seconds.get() > 0 {
                            format!("Resend Email ({})", seconds.get())
                        } else {
                            "Resend Email".to_owned()
                        }
                    }}
                </button>
            </div>
        </div>
    }
}
