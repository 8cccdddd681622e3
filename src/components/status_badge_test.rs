use super::*;

#[test]
fn accepted_is_green() {
    assert_eq!(status_color("ACCEPTED"), "green");
}

#[test]
fn rejected_is_red() {
    assert_eq!(status_color("REJECTED"), "red");
}

#[test]
fn pending_and_unknown_fall_back_to_gray() {
    assert_eq!(status_color("PENDING"), "gray");
    assert_eq!(status_color("SOMETHING"), "gray");
}
