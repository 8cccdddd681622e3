use super::*;

#[test]
fn auth_payload_captures_token_next_to_identity_fields() {
    let raw = r#"{
        "user_id": 7,
        "user_name": "seeker01",
        "name": "Sam Seeker",
        "email": "sam@example.com",
        "email_verified_at": null,
        "token": "tok-abc"
    }"#;
    let payload: AuthPayload = serde_json::from_str(raw).unwrap();
    assert_eq!(payload.user.user_id, Some(7));
    assert_eq!(payload.user.user_name.as_deref(), Some("seeker01"));
    assert_eq!(payload.user.email_verified_at, None);
    assert_eq!(payload.token.as_deref(), Some("tok-abc"));
}

#[test]
fn auth_payload_without_token_deserializes() {
    let payload: AuthPayload = serde_json::from_str(r#"{"user_name": "seeker01"}"#).unwrap();
    assert_eq!(payload.token, None);
}

#[test]
fn job_list_envelope_unwraps_the_paginator() {
    let raw = r#"{
        "posts": {
            "data": [
                {
                    "id": 1,
                    "title": "Backend Engineer",
                    "desc": "Build APIs",
                    "skills": [{"id": 3, "name": "Rust"}],
                    "employer": {"user": {"name": "Acme"}}
                }
            ],
            "current_page": 2,
            "per_page": 10,
            "total": 35
        }
    }"#;
    let envelope: JobListEnvelope = serde_json::from_str(raw).unwrap();
    let page = envelope.posts;
    assert_eq!(page.current_page, 2);
    assert_eq!(page.per_page, 10);
    assert_eq!(page.total, 35);
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].title, "Backend Engineer");
    assert_eq!(page.data[0].skills[0].name, "Rust");
    assert_eq!(
        page.data[0].employer.as_ref().unwrap().user.name.as_deref(),
        Some("Acme")
    );
}

#[test]
fn job_post_tolerates_missing_optional_fields() {
    let post: JobPost = serde_json::from_str(r#"{"id": 9, "title": "QA", "desc": "Test things"}"#).unwrap();
    assert_eq!(post.image, None);
    assert_eq!(post.status_name, None);
    assert!(post.skills.is_empty());
}

#[test]
fn application_envelope_carries_nested_post_and_seeker() {
    let raw = r#"{
        "applications": {
            "data": [
                {
                    "id": 4,
                    "status_name": "PENDING",
                    "message": "Hi",
                    "job_post": {"id": 1, "title": "QA", "desc": "d"},
                    "seeker": {"user": {"name": "Sam", "email": "sam@example.com"}}
                }
            ],
            "current_page": 1,
            "per_page": 10,
            "total": 1
        }
    }"#;
    let envelope: ApplicationListEnvelope = serde_json::from_str(raw).unwrap();
    let app = &envelope.applications.data[0];
    assert_eq!(app.status_name, "PENDING");
    assert_eq!(app.job_post.as_ref().unwrap().title, "QA");
    assert_eq!(app.seeker.as_ref().unwrap().user.email.as_deref(), Some("sam@example.com"));
}

#[test]
fn user_info_roundtrips_through_json() {
    let user = UserInfo {
        user_id: Some(1),
        user_name: Some("seeker01".to_owned()),
        resume: Some("/files/resume.pdf".to_owned()),
        ..UserInfo::default()
    };
    let raw = serde_json::to_string(&user).unwrap();
    let back: UserInfo = serde_json::from_str(&raw).unwrap();
    assert_eq!(back, user);
}

#[test]
fn upload_response_reads_the_link() {
    let resp: UploadResponse = serde_json::from_str(r#"{"link": "/files/r.pdf"}"#).unwrap();
    assert_eq!(resp.link, "/files/r.pdf");
}
