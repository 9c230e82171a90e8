use super::*;

fn faculty(id: &str) -> Faculty {
    Faculty {
        faculty_id: id.to_owned(),
        first_name: "Meera".to_owned(),
        last_name: "Iyer".to_owned(),
        ..Faculty::default()
    }
}

#[test]
fn default_session_is_not_restored() {
    let state = SessionState::default();
    assert!(!state.restored);
    assert_eq!(state.student_id(), None);
    assert!(state.faculty.is_none());
}

#[test]
fn from_entries_keeps_present_identities() {
    let student = StudentIdentity { id: "stu-1".to_owned() };
    let state = SessionState::from_entries(Some(student), Some(faculty("F1")));
    assert!(state.restored);
    assert_eq!(state.student_id(), Some("stu-1"));
    assert_eq!(state.faculty.map(|f| f.faculty_id), Some("F1".to_owned()));
}

#[test]
fn blank_ids_count_as_signed_out() {
    let student = StudentIdentity { id: "  ".to_owned() };
    let state = SessionState::from_entries(Some(student), Some(faculty("")));
    assert!(state.restored);
    assert_eq!(state.student_id(), None);
    assert!(state.faculty.is_none());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn restore_outside_browser_has_no_identity() {
    let state = SessionState::restore();
    assert!(state.restored);
    assert!(state.student.is_none());
    assert!(state.faculty.is_none());
}
