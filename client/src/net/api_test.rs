use super::*;
use crate::net::types::FilterType;

fn query(filter_type: FilterType) -> AttendanceQuery {
    AttendanceQuery {
        subject_id: "SUB1".to_owned(),
        semester: "3".to_owned(),
        filter_type,
        specific_date: None,
        start_date: None,
        end_date: None,
    }
}

#[test]
fn endpoints_format_expected_paths() {
    assert_eq!(student_attendance_endpoint("stu-1"), "/api/student/stu-1/attendence");
    assert_eq!(semesters_endpoint("F1"), "/api/faculty/F1/get-all-sem-and-subjects");
    assert_eq!(roster_endpoint("SUB1"), "/api/subject/SUB1/get-all-students-of-this-subject");
    assert_eq!(attendance_records_endpoint("SUB1"), "/api/subject/SUB1/get-attendance-records");
    assert_eq!(update_attendance_endpoint("F1"), "/api/faculty/F1/update-attendance");
    assert_eq!(CURRENT_USER_ENDPOINT, "/api/auth/me");
}

#[test]
fn student_attendance_body_carries_subject() {
    assert_eq!(student_attendance_body("SUB1"), serde_json::json!({ "subject": "SUB1" }));
}

#[test]
fn student_attendance_reply_yields_its_records() {
    let body = serde_json::json!({ "attendanceRecords": [{
        "id": 7, "date": "2024-09-10T00:00:00.000Z",
        "lecture_start_time": "2024-09-10T09:00:00.000Z",
        "lecture_end_time": "2024-09-10T10:00:00.000Z",
        "status": true, "type": "Theory"
    }]});
    let records = decode_student_attendance(body).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, "7");
}

#[test]
fn student_attendance_error_body_yields_no_records() {
    let body = serde_json::json!({ "message": "Student not found" });
    assert_eq!(decode_student_attendance(body), Ok(Vec::new()));
    assert_eq!(decode_student_attendance(serde_json::json!({})), Ok(Vec::new()));
}

#[test]
fn student_attendance_non_object_is_decode_error() {
    let err = decode_student_attendance(serde_json::json!("oops")).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn decode_overall_records_as_aggregates() {
    let body = serde_json::json!([{
        "student_id": "s1", "prn_no": "PRN1", "name": "Asha Rao",
        "total_lectures": 10, "attended_lectures": 8, "attendance_percentage": 80.0
    }]);
    let records = decode_attendance_records(&query(FilterType::Overall), body).unwrap();
    assert!(matches!(records, AttendanceRecords::Overall(ref rows) if rows.len() == 1));
}

#[test]
fn decode_dated_records_as_sessions() {
    let body = serde_json::json!([{
        "student_id": "s1", "prn_no": "PRN1", "name": "Asha Rao", "isPresent": true,
        "date": "2024-09-10", "startTime": "2024-09-10T09:00:00Z", "endTime": "2024-09-10T10:00:00Z"
    }]);
    for filter in [FilterType::SpecificDate, FilterType::DateRange] {
        let records = decode_attendance_records(&query(filter), body.clone()).unwrap();
        assert!(matches!(records, AttendanceRecords::Sessions(ref rows) if rows.len() == 1));
    }
}

#[test]
fn decode_mismatched_shape_is_decode_error() {
    let body = serde_json::json!({ "error": "boom" });
    let err = decode_attendance_records(&query(FilterType::Overall), body).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn api_error_messages_name_the_cause() {
    assert_eq!(ApiError::Status(500).to_string(), "request failed: status 500");
    assert_eq!(ApiError::Unavailable.to_string(), "not available on server");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_api_is_unavailable_outside_the_browser() {
    let result = futures::executor::block_on(BrowserApi.students_of_subject("SUB1"));
    assert_eq!(result, Err(ApiError::Unavailable));
}
