use super::*;

// =============================================================
// encode_component
// =============================================================

#[test]
fn encode_component_passes_unreserved_characters() {
    assert_eq!(encode_component("abc-XYZ_0.9~"), "abc-XYZ_0.9~");
}

#[test]
fn encode_component_escapes_reserved_characters() {
    assert_eq!(encode_component("a b&c=d"), "a%20b%26c%3Dd");
    assert_eq!(encode_component("skills[]"), "skills%5B%5D");
}

#[test]
fn encode_component_escapes_multibyte_utf8() {
    assert_eq!(encode_component("é"), "%C3%A9");
}

// =============================================================
// JobQuery
// =============================================================

#[test]
fn job_query_defaults_to_page_one() {
    assert_eq!(JobQuery::default().to_query_string(), "page=1");
    assert_eq!(JobQuery::for_page(0).to_query_string(), "page=1");
}

#[test]
fn job_query_includes_only_non_empty_filters() {
    let query = JobQuery {
        page: 3,
        title: "engineer".to_owned(),
        employer: String::new(),
        skills: Vec::new(),
        created_at: None,
    };
    assert_eq!(query.to_query_string(), "page=3&title=engineer");
}

#[test]
fn job_query_trims_text_filters() {
    let query = JobQuery {
        page: 1,
        title: "  engineer  ".to_owned(),
        employer: "  ".to_owned(),
        ..JobQuery::default()
    };
    assert_eq!(query.to_query_string(), "page=1&title=engineer");
}

#[test]
fn job_query_repeats_the_skills_array_key() {
    let query = JobQuery {
        page: 1,
        skills: vec![4, 9],
        ..JobQuery::default()
    };
    assert_eq!(
        query.to_query_string(),
        "page=1&skills%5B%5D=4&skills%5B%5D=9"
    );
}

#[test]
fn job_query_encodes_filter_values() {
    let query = JobQuery {
        page: 2,
        employer: "Acme & Co".to_owned(),
        ..JobQuery::default()
    };
    assert_eq!(query.to_query_string(), "page=2&employer=Acme%20%26%20Co");
}

// =============================================================
// ApplicationQuery
// =============================================================

#[test]
fn application_query_includes_status_code() {
    let query = ApplicationQuery {
        page: 1,
        status: Some(StatusFilter::Accepted),
        ..ApplicationQuery::default()
    };
    assert_eq!(query.to_query_string(), "page=1&status=2");
}

#[test]
fn application_query_includes_created_at_filter() {
    let query = ApplicationQuery {
        page: 1,
        created_at: Some("2024-06-01 00:00:00".to_owned()),
        ..ApplicationQuery::default()
    };
    assert_eq!(
        query.to_query_string(),
        "page=1&created_at=2024-06-01%2000%3A00%3A00"
    );
}

#[test]
fn status_filter_select_values_roundtrip() {
    assert_eq!(StatusFilter::from_select(""), None);
    assert_eq!(StatusFilter::from_select("1"), Some(StatusFilter::Pending));
    assert_eq!(StatusFilter::from_select("2"), Some(StatusFilter::Accepted));
    assert_eq!(StatusFilter::from_select("3"), Some(StatusFilter::Rejected));
    assert_eq!(StatusFilter::from_select("9"), None);
    for filter in [StatusFilter::Pending, StatusFilter::Accepted, StatusFilter::Rejected] {
        assert_eq!(StatusFilter::from_select(filter.as_param()), Some(filter));
    }
}
