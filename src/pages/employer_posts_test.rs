use super::*;

fn application(id: i64, status: &str) -> JobApplication {
    JobApplication {
        id,
        status_name: status.to_owned(),
        ..JobApplication::default()
    }
}

#[test]
fn apply_response_accept_marks_the_matching_row() {
    let mut apps = vec![application(1, "PENDING"), application(2, "PENDING")];
    apply_response(&mut apps, 2, true);
    assert_eq!(apps[0].status_name, "PENDING");
    assert_eq!(apps[1].status_name, "ACCEPTED");
}

#[test]
fn apply_response_reject_marks_the_matching_row() {
    let mut apps = vec![application(1, "PENDING")];
    apply_response(&mut apps, 1, false);
    assert_eq!(apps[0].status_name, "REJECTED");
}

#[test]
fn apply_response_ignores_unknown_ids() {
    let mut apps = vec![application(1, "PENDING")];
    apply_response(&mut apps, 99, true);
    assert_eq!(apps[0].status_name, "PENDING");
}

#[test]
fn toggled_status_flips_between_opened_and_closed() {
    assert_eq!(toggled_status(Some("OPENED")), "CLOSED");
    assert_eq!(toggled_status(Some("CLOSED")), "OPENED");
    assert_eq!(toggled_status(None), "OPENED");
}
