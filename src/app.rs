//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store is created once from persisted storage and provided
//! via context; every guard evaluation and page reads that one signal.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::components::route_guard::Guarded;
use crate::pages::applications::ApplicationsPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::employer_posts::EmployerPostsPage;
use crate::pages::home::HomePage;
use crate::pages::jobs::JobsPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::post_job::PostJobPage;
use crate::pages::sign_up::SignUpPage;
use crate::pages::verify_email::VerifyEmailPage;
use crate::state::guard::RouteGuard;
use crate::state::session::{SessionStore, SharedSessionStore};
use crate::state::storage::BrowserStorage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

/// Root application component.
///
/// Restores the persisted session before the first guard evaluation and
/// sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionStore::initialize(BrowserStorage));
    provide_context::<RwSignal<SharedSessionStore>>(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/jobboard-client.css" />
        <Title text="JobBoard" />

        <Router>
            <Navbar />
            <main class="app-main">
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=StaticSegment("") view=HomePage />
                    <Route path=StaticSegment("sign-up") view=SignUpPage />
                    <Route
                        path=StaticSegment("verify-email")
                        view=|| {
                            view! {
                                <Guarded guard=RouteGuard::Authenticated>
                                    <VerifyEmailPage />
                                </Guarded>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("dashboard")
                        view=|| {
                            view! {
                                <Guarded guard=RouteGuard::Authenticated>
                                    <DashboardPage />
                                </Guarded>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("jobs")
                        view=|| {
                            view! {
                                <Guarded guard=RouteGuard::SeekerVerified>
                                    <JobsPage />
                                </Guarded>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("applications")
                        view=|| {
                            view! {
                                <Guarded guard=RouteGuard::SeekerVerified>
                                    <ApplicationsPage />
                                </Guarded>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("post-job")
                        view=|| {
                            view! {
                                <Guarded guard=RouteGuard::EmployerVerified>
                                    <PostJobPage />
                                </Guarded>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("my-posts")
                        view=|| {
                            view! {
                                <Guarded guard=RouteGuard::EmployerVerified>
                                    <EmployerPostsPage />
                                </Guarded>
                            }
                        }
                    />
                </Routes>
            </main>
        </Router>
    }
}
