use super::*;

#[test]
fn bearer_formats_the_authorization_header() {
    assert_eq!(bearer("tok1"), "Bearer tok1");
}

#[test]
fn login_endpoint_switches_on_role() {
    assert_eq!(login_endpoint(Role::Seeker), "/api/seeker/login");
    assert_eq!(login_endpoint(Role::Employer), "/api/employer/login");
}

#[test]
fn jobs_endpoint_appends_the_query_string() {
    let query = JobQuery {
        page: 2,
        title: "dev".to_owned(),
        ..JobQuery::default()
    };
    assert_eq!(jobs_endpoint(&query), "/api/seeker/jobs/list?page=2&title=dev");
}

#[test]
fn applications_endpoint_appends_the_query_string() {
    let query = ApplicationQuery::for_page(3);
    assert_eq!(
        applications_endpoint(&query),
        "/api/seeker/jobs/applications?page=3"
    );
}

#[test]
fn employer_posts_endpoint_appends_the_query_string() {
    let query = JobQuery::for_page(1);
    assert_eq!(
        employer_posts_endpoint(&query),
        "/api/employer/jobs/list/posts?page=1"
    );
}

#[test]
fn post_applications_endpoint_embeds_post_id_and_clamps_page() {
    assert_eq!(
        post_applications_endpoint(12, 4),
        "/api/employer/jobs/list/applications/12?page=4"
    );
    assert_eq!(
        post_applications_endpoint(12, 0),
        "/api/employer/jobs/list/applications/12?page=1"
    );
}

#[test]
fn toggle_endpoint_embeds_the_post_id() {
    assert_eq!(toggle_endpoint(7), "/api/employer/jobs/post/toggle/7");
}

#[test]
fn update_profile_endpoint_switches_on_role() {
    assert_eq!(update_profile_endpoint(Role::Seeker, 5), "/api/seeker/update/5");
    assert_eq!(update_profile_endpoint(Role::Employer, 5), "/api/employer/update/5");
}

#[test]
fn seeker_registration_omits_absent_optional_fields() {
    let registration = SeekerRegistration {
        user_name: "seeker01".to_owned(),
        password: "secret1".to_owned(),
        email: "s@example.com".to_owned(),
        phone: "+12345678901".to_owned(),
        name: "Sam".to_owned(),
        gender: None,
        birthday: None,
    };
    let raw = serde_json::to_value(&registration).unwrap();
    assert!(raw.get("gender").is_none());
    assert!(raw.get("birthday").is_none());
    assert_eq!(raw["user_name"], "seeker01");
}

#[test]
fn application_request_serializes_null_resume() {
    let request = ApplicationRequest {
        job_post_id: 3,
        resume: None,
        message: String::new(),
    };
    let raw = serde_json::to_value(&request).unwrap();
    assert!(raw["resume"].is_null());
    assert_eq!(raw["job_post_id"], 3);
}
