//! REST calls against the job-board backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the bearer
//! token attached where the endpoint requires auth.
//! Server-side (SSR): stubs returning `ApiError` since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-success responses are classified through `error::classify_failure`
//! so callers can branch on the typed taxonomy instead of status codes.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;

use super::error::ApiError;
use super::query::{ApplicationQuery, JobQuery};
use super::types::{AuthPayload, JobApplication, JobPost, Paginated, Skill, UserInfo};
use crate::state::session::Role;

#[cfg(any(test, feature = "hydrate"))]
const API_BASE: &str = "/api";

/// Seeker registration payload for `POST /api/seeker/register`.
#[derive(Clone, Debug, Default, Serialize)]
pub struct SeekerRegistration {
    pub user_name: String,
    pub password: String,
    pub email: String,
    pub phone: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// `YYYY-MM-DD 00:00:00`, already normalized by the form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,
}

/// Application payload for `POST /api/seeker/jobs/apply`.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ApplicationRequest {
    pub job_post_id: i64,
    pub resume: Option<String>,
    pub message: String,
}

/// New posting payload for `POST /api/employer/jobs/post`.
#[derive(Clone, Debug, Default, Serialize)]
pub struct NewJobPost {
    pub title: String,
    pub desc: String,
    pub skills: Vec<i64>,
    pub image: Option<String>,
}

/// Profile fields for the update endpoints.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ProfileUpdate {
    pub email: String,
    pub phone: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,
    pub resume: Option<String>,
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn login_endpoint(role: Role) -> String {
    format!("{API_BASE}/{}/login", role.as_tag())
}

#[cfg(any(test, feature = "hydrate"))]
fn jobs_endpoint(query: &JobQuery) -> String {
    format!("{API_BASE}/seeker/jobs/list?{}", query.to_query_string())
}

#[cfg(any(test, feature = "hydrate"))]
fn applications_endpoint(query: &ApplicationQuery) -> String {
    format!("{API_BASE}/seeker/jobs/applications?{}", query.to_query_string())
}

#[cfg(any(test, feature = "hydrate"))]
fn employer_posts_endpoint(query: &JobQuery) -> String {
    format!("{API_BASE}/employer/jobs/list/posts?{}", query.to_query_string())
}

#[cfg(any(test, feature = "hydrate"))]
fn post_applications_endpoint(post_id: i64, page: u64) -> String {
    format!("{API_BASE}/employer/jobs/list/applications/{post_id}?page={}", page.max(1))
}

#[cfg(any(test, feature = "hydrate"))]
fn toggle_endpoint(post_id: i64) -> String {
    format!("{API_BASE}/employer/jobs/post/toggle/{post_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn update_profile_endpoint(role: Role, user_id: i64) -> String {
    format!("{API_BASE}/{}/update/{user_id}", role.as_tag())
}

#[cfg(feature = "hydrate")]
fn net_err(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

#[cfg(feature = "hydrate")]
async fn failure(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    let body = resp
        .json::<serde_json::Value>()
        .await
        .unwrap_or(serde_json::Value::Null);
    super::error::classify_failure(status, &body)
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str, token: &str) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::get(url)
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(net_err)?;
    if !resp.ok() {
        return Err(failure(resp).await);
    }
    resp.json::<T>().await.map_err(net_err)
}

#[cfg(feature = "hydrate")]
async fn post_json<B: Serialize>(
    url: &str,
    token: Option<&str>,
    body: &B,
) -> Result<gloo_net::http::Response, ApiError> {
    let mut req = gloo_net::http::Request::post(url);
    if let Some(token) = token {
        req = req.header("Authorization", &bearer(token));
    }
    let resp = req.json(body).map_err(net_err)?.send().await.map_err(net_err)?;
    if resp.ok() { Ok(resp) } else { Err(failure(resp).await) }
}

/// Authenticate as `role` via the matching login endpoint.
///
/// # Errors
///
/// `ApiError::Auth` for the backend's login failure codes, otherwise the
/// transport/status taxonomy.
pub async fn login(role: Role, user_name: &str, password: &str) -> Result<AuthPayload, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "user_name": user_name, "password": password });
        let resp = post_json(&login_endpoint(role), None, &payload).await?;
        resp.json::<AuthPayload>().await.map_err(net_err)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (role, user_name, password);
        Err(ApiError::offline())
    }
}

/// Register a new seeker account.
///
/// # Errors
///
/// `ApiError::Validation` carries the 422 field map.
pub async fn register_seeker(registration: &SeekerRegistration) -> Result<AuthPayload, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{API_BASE}/seeker/register");
        let resp = post_json(&url, None, registration).await?;
        resp.json::<AuthPayload>().await.map_err(net_err)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = registration;
        Err(ApiError::offline())
    }
}

/// Submit an email-verification token.
///
/// # Errors
///
/// `ApiError::Verification` for the domain failure codes; callers self-heal
/// the local flag on `AlreadyVerified`.
pub async fn verify_email(token: &str, email_token: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{API_BASE}/email/verify");
        let payload = serde_json::json!({ "token": email_token });
        post_json(&url, Some(token), &payload).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, email_token);
        Err(ApiError::offline())
    }
}

/// Ask the backend to send a fresh verification email.
///
/// # Errors
///
/// Transport/status taxonomy.
pub async fn resend_verification(token: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{API_BASE}/email/verification-notification");
        let payload = serde_json::json!({});
        post_json(&url, Some(token), &payload).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::offline())
    }
}

/// Fetch a page of open postings for the seeker job board.
///
/// # Errors
///
/// Transport/status taxonomy.
pub async fn list_jobs(token: &str, query: &JobQuery) -> Result<Paginated<JobPost>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let envelope: super::types::JobListEnvelope = get_json(&jobs_endpoint(query), token).await?;
        Ok(envelope.posts)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, query);
        Err(ApiError::offline())
    }
}

/// Apply to a posting with a resume link and optional message.
///
/// # Errors
///
/// Transport/status taxonomy.
pub async fn apply_to_job(token: &str, request: &ApplicationRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{API_BASE}/seeker/jobs/apply");
        post_json(&url, Some(token), request).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, request);
        Err(ApiError::offline())
    }
}

/// Fetch a page of the seeker's own applications.
///
/// # Errors
///
/// Transport/status taxonomy.
pub async fn list_applications(
    token: &str,
    query: &ApplicationQuery,
) -> Result<Paginated<JobApplication>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let envelope: super::types::ApplicationListEnvelope =
            get_json(&applications_endpoint(query), token).await?;
        Ok(envelope.applications)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, query);
        Err(ApiError::offline())
    }
}

/// Fetch the skills available for filtering and posting.
///
/// # Errors
///
/// Transport/status taxonomy.
pub async fn fetch_skills(token: &str) -> Result<Vec<Skill>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{API_BASE}/skills/dropdown");
        get_json(&url, token).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::offline())
    }
}

/// Fetch a page of the employer's own postings.
///
/// # Errors
///
/// Transport/status taxonomy.
pub async fn list_employer_posts(token: &str, query: &JobQuery) -> Result<Paginated<JobPost>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let envelope: super::types::JobListEnvelope =
            get_json(&employer_posts_endpoint(query), token).await?;
        Ok(envelope.posts)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, query);
        Err(ApiError::offline())
    }
}

/// Fetch a page of applications received on one posting.
///
/// # Errors
///
/// Transport/status taxonomy.
pub async fn list_post_applications(
    token: &str,
    post_id: i64,
    page: u64,
) -> Result<Paginated<JobApplication>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let envelope: super::types::ApplicationListEnvelope =
            get_json(&post_applications_endpoint(post_id, page), token).await?;
        Ok(envelope.applications)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, post_id, page);
        Err(ApiError::offline())
    }
}

/// Accept or reject a received application.
///
/// # Errors
///
/// Transport/status taxonomy.
pub async fn respond_to_application(
    token: &str,
    application_id: i64,
    is_accepted: bool,
) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{API_BASE}/employer/jobs/application/respond");
        let payload = serde_json::json!({
            "job_application_id": application_id,
            "is_accepted": is_accepted,
        });
        post_json(&url, Some(token), &payload).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, application_id, is_accepted);
        Err(ApiError::offline())
    }
}

/// Flip a posting between `OPENED` and `CLOSED`.
///
/// # Errors
///
/// Transport/status taxonomy.
pub async fn toggle_job_status(token: &str, post_id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({});
        post_json(&toggle_endpoint(post_id), Some(token), &payload).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, post_id);
        Err(ApiError::offline())
    }
}

/// Publish a new posting.
///
/// # Errors
///
/// `ApiError::Validation` carries the 422 field map.
pub async fn post_job(token: &str, job: &NewJobPost) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{API_BASE}/employer/jobs/post");
        post_json(&url, Some(token), job).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, job);
        Err(ApiError::offline())
    }
}

/// Update the logged-in user's profile; returns the fresh identity record.
///
/// # Errors
///
/// `ApiError::Validation` carries the 422 field map.
pub async fn update_profile(
    token: &str,
    role: Role,
    user_id: i64,
    update: &ProfileUpdate,
) -> Result<UserInfo, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = post_json(&update_profile_endpoint(role, user_id), Some(token), update).await?;
        resp.json::<UserInfo>().await.map_err(net_err)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, role, user_id, update);
        Err(ApiError::offline())
    }
}

/// Upload a file (resume PDF or posting image) and return its public link.
///
/// Browser-only: the multipart body is built from a DOM `File`.
///
/// # Errors
///
/// Transport/status taxonomy.
#[cfg(feature = "hydrate")]
pub async fn upload_file(token: &str, file: &web_sys::File, bucket: &str) -> Result<String, ApiError> {
    let form = web_sys::FormData::new()
        .map_err(|_| ApiError::Network("failed to build form data".to_owned()))?;
    form.append_with_blob("file", file)
        .map_err(|_| ApiError::Network("failed to attach file".to_owned()))?;
    form.append_with_str("name", bucket)
        .map_err(|_| ApiError::Network("failed to attach bucket name".to_owned()))?;

    let url = format!("{API_BASE}/upload/file");
    let resp = gloo_net::http::Request::post(&url)
        .header("Authorization", &bearer(token))
        .body(form)
        .map_err(net_err)?
        .send()
        .await
        .map_err(net_err)?;
    if !resp.ok() {
        return Err(failure(resp).await);
    }
    resp.json::<super::types::UploadResponse>()
        .await
        .map(|upload| upload.link)
        .map_err(net_err)
}
