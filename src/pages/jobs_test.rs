use super::*;

#[test]
fn toggle_id_adds_when_absent() {
    let mut selection = vec![1, 2];
    toggle_id(&mut selection, 3);
    assert_eq!(selection, vec![1, 2, 3]);
}

#[test]
fn toggle_id_removes_when_present() {
    let mut selection = vec![1, 2, 3];
    toggle_id(&mut selection, 2);
    assert_eq!(selection, vec![1, 3]);
}

#[test]
fn toggle_id_roundtrips() {
    let mut selection = Vec::new();
    toggle_id(&mut selection, 7);
    toggle_id(&mut selection, 7);
    assert!(selection.is_empty());
}

#[test]
fn fresh_upload_wins_over_stored_resume() {
    assert_eq!(
        resume_for_application(Some("/files/new.pdf".to_owned()), Some("/files/old.pdf".to_owned())),
        Some("/files/new.pdf".to_owned())
    );
}

#[test]
fn stored_resume_is_the_fallback() {
    assert_eq!(
        resume_for_application(None, Some("/files/old.pdf".to_owned())),
        Some("/files/old.pdf".to_owned())
    );
}

#[test]
fn no_resume_yields_none() {
    assert_eq!(resume_for_application(None, None), None);
}
