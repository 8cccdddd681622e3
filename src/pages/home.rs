//! Public landing page.

use leptos::prelude::*;

/// Hero plus the two role pitches. Public; every visitor lands here.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <section class="hero">
                <h1 class="hero__title">"Find Your Dream Job!"</h1>
                <p class="hero__subtitle">"Find the Job That fits your skill set"</p>
            </section>

            <section class="home-page__offer">
                <h2>"What We Offer"</h2>
                <p>
                    "Whether you are a job seeker or an employer, our platform provides you with the tools you need to succeed."
                </p>
                <div class="home-page__cards">
                    <div class="offer-card">
                        <h3>"For Employers"</h3>
                        <p>
                            "Post job listings, manage applications, and find the best candidates that fit your needs."
                        </p>
                    </div>
                    <div class="offer-card">
                        <h3>"For Job Seekers"</h3>
                        <p>
                            "Search for jobs, apply with ease, and track your application status."
                        </p>
                    </div>
                </div>
            </section>
        </div>
    }
}
