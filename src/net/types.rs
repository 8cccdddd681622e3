//! Wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! The backend is a classic JSON REST API with Laravel-style paginator
//! envelopes. Every record field the UI does not strictly need is optional
//! with a default, so schema drift on the server degrades display rather
//! than failing deserialization.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The authenticated user's own record, also the persisted identity snapshot.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserInfo {
    /// Backend user id, used for profile-update routes.
    pub user_id: Option<i64>,
    /// Login name.
    pub user_name: Option<String>,
    /// Display name.
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Gender code as stored by the backend.
    pub gender: Option<i64>,
    /// Human-readable gender label.
    pub gender_name: Option<String>,
    /// `YYYY-MM-DD` date string.
    pub birthday: Option<String>,
    /// Seeker headline shown on the profile.
    pub headline: Option<String>,
    /// Seeker free-form description.
    pub desc: Option<String>,
    /// Link to the seeker's stored resume, if uploaded.
    pub resume: Option<String>,
    /// Set by the backend once the email address is verified.
    pub email_verified_at: Option<String>,
}

/// Login/registration response: the identity record with the bearer token
/// embedded alongside it.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct AuthPayload {
    #[serde(flatten)]
    pub user: UserInfo,
    pub token: Option<String>,
}

/// A selectable skill from the dropdown endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub id: i64,
    pub name: String,
}

/// Minimal user record nested inside employer/seeker references.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PublicUser {
    pub name: Option<String>,
    pub user_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Employer reference attached to a job post.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmployerRef {
    pub user: PublicUser,
}

/// Seeker reference attached to a job application.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeekerRef {
    pub user: PublicUser,
}

/// A job posting as listed for seekers and employers.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobPost {
    pub id: i64,
    pub title: String,
    pub desc: String,
    pub image: Option<String>,
    /// `OPENED` / `CLOSED` on employer views.
    pub status_name: Option<String>,
    pub application_count: Option<i64>,
    pub employer: Option<EmployerRef>,
    pub skills: Vec<Skill>,
    pub created_at: Option<String>,
}

/// A seeker's application to a job post.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobApplication {
    pub id: i64,
    /// `PENDING` / `ACCEPTED` / `REJECTED`.
    pub status_name: String,
    pub message: Option<String>,
    pub resume: Option<String>,
    pub created_at: Option<String>,
    pub job_post: Option<JobPost>,
    pub seeker: Option<SeekerRef>,
}

/// Laravel-style page of records.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub current_page: u64,
    pub per_page: u64,
    pub total: u64,
}

/// Envelope for job-list responses.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct JobListEnvelope {
    pub posts: Paginated<JobPost>,
}

/// Envelope for application-list responses.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ApplicationListEnvelope {
    pub applications: Paginated<JobApplication>,
}

/// Response of the file-upload endpoint.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct UploadResponse {
    pub link: String,
}
