use super::*;
use crate::net::types::SessionKind;

fn record(id: &str, start: &str, end: &str, status: bool) -> AttendanceRecord {
    AttendanceRecord {
        id: id.to_owned(),
        date: "2024-09-10T00:00:00.000Z".to_owned(),
        lecture_start_time: start.to_owned(),
        lecture_end_time: end.to_owned(),
        status,
        kind: SessionKind::Theory,
        subject_name: "Compilers".to_owned(),
        first_name: "Asha".to_owned(),
    }
}

#[test]
fn starts_loading_with_skeleton_body() {
    let state = StudentAttendanceState::default();
    assert!(state.loading);
    assert_eq!(state.body(), StudentTableBody::Loading);
    assert_eq!(SKELETON_ROWS, 5);
}

#[test]
fn empty_response_renders_single_no_records_row() {
    let mut state = StudentAttendanceState::default();
    let seq = state.begin("SUB1");
    state.finish(seq, Ok(Vec::new()));
    assert!(!state.loading);
    assert_eq!(state.body(), StudentTableBody::Empty);
    assert_eq!(COLUMNS.len(), 5);
}

#[test]
fn n_records_render_n_rows_with_utc_times() {
    let mut state = StudentAttendanceState::default();
    let seq = state.begin("SUB1");
    state.finish(
        seq,
        Ok(vec![
            record("r1", "2024-09-10T09:00:00.000Z", "2024-09-10T10:00:00.000Z", true),
            record("r2", "2024-09-11T14:15:30.000Z", "2024-09-11T15:15:30.000Z", false),
            record("r3", "2024-09-12T08:00:00+05:30", "2024-09-12T09:00:00+05:30", true),
        ]),
    );
    let StudentTableBody::Rows(rows) = state.body() else {
        panic!("expected data rows");
    };
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].time, "09:00:00 to 10:00:00");
    assert_eq!(rows[1].time, "14:15:30 to 15:15:30");
    assert_eq!(rows[2].time, "02:30:00 to 03:30:00");
    assert_eq!(rows[0].subject_code, "SUB1");
    assert_eq!(rows[0].kind, "Theory");
    assert_eq!(rows[0].date, "9/10/2024");
    assert!(rows[0].present);
    assert!(!rows[1].present);
}

#[test]
fn failed_refetch_of_same_subject_keeps_its_records() {
    let mut state = StudentAttendanceState::default();
    let seq = state.begin("SUB1");
    state.finish(seq, Ok(vec![record("r1", "2024-09-10T09:00:00Z", "2024-09-10T10:00:00Z", true)]));

    let seq = state.begin("SUB1");
    assert_eq!(state.body(), StudentTableBody::Loading);
    state.finish(seq, Err(ApiError::Network("offline".to_owned())));
    assert!(!state.loading);
    assert_eq!(state.records.len(), 1);
}

#[test]
fn failed_fetch_for_new_subject_never_shows_old_rows() {
    let mut state = StudentAttendanceState::default();
    let seq = state.begin("SUB1");
    state.finish(seq, Ok(vec![record("r1", "2024-09-10T09:00:00Z", "2024-09-10T10:00:00Z", true)]));

    let seq = state.begin("SUB2");
    state.finish(seq, Err(ApiError::Status(404)));
    assert!(!state.loading);
    assert_eq!(state.body(), StudentTableBody::Empty);
}

#[test]
fn superseded_response_is_ignored() {
    let mut state = StudentAttendanceState::default();
    let first = state.begin("SUB1");
    let second = state.begin("SUB2");

    let stale = record("old", "2024-09-10T09:00:00Z", "2024-09-10T10:00:00Z", true);
    state.finish(first, Ok(vec![stale]));
    assert!(state.loading);
    assert!(state.records.is_empty());

    state.finish(second, Ok(Vec::new()));
    assert_eq!(state.body(), StudentTableBody::Empty);
}

#[test]
fn presence_glyphs_are_check_and_cross() {
    assert_eq!(presence_glyph(true), "✔");
    assert_eq!(presence_glyph(false), "✘");
}

#[test]
fn heading_names_the_subject() {
    assert_eq!(heading("Compilers"), "Attendance for Compilers");
}
