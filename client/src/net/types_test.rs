use super::*;

// =============================================================
// Student records
// =============================================================

#[test]
fn attendance_record_reads_type_field_and_numeric_id() {
    let raw = serde_json::json!({
        "id": 42,
        "date": "2024-09-10T00:00:00.000Z",
        "lecture_start_time": "2024-09-10T09:00:00.000Z",
        "lecture_end_time": "2024-09-10T10:00:00.000Z",
        "status": true,
        "type": "Practical",
        "subject_name": "Networks",
        "first_name": "Asha"
    });
    let record: AttendanceRecord = serde_json::from_value(raw).unwrap();
    assert_eq!(record.id, "42");
    assert_eq!(record.kind, SessionKind::Practical);
    assert!(record.status);
}

#[test]
fn student_response_missing_records_is_none() {
    let body: StudentAttendanceResponse = serde_json::from_str("{}").unwrap();
    assert_eq!(body.attendance_records, None);

    let body: StudentAttendanceResponse =
        serde_json::from_str(r#"{"attendanceRecords":null}"#).unwrap();
    assert_eq!(body.attendance_records, None);
}

// =============================================================
// Faculty records
// =============================================================

#[test]
fn semester_grouping_accepts_numeric_semester() {
    let raw = r#"{"groupedResponse":[{"semester":3,"subjects":[
        {"subject_id":"SUB1","subject_name":"Compilers","required_hours":"40",
         "habe_practicals":true,"faculty_id":"F1","semester":"3"}
    ]}]}"#;
    let body: SemesterSubjectsResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(body.grouped_response.len(), 1);
    assert_eq!(body.grouped_response[0].semester, "3");
    assert_eq!(body.grouped_response[0].subjects[0].required_hours, 40);
}

#[test]
fn aggregated_record_accepts_string_counts() {
    let raw = r#"{"student_id":"s1","prn_no":"PRN1","name":"Asha Rao",
        "total_lectures":"12","attended_lectures":9,"attendance_percentage":75}"#;
    let record: AggregatedAttendanceRecord = serde_json::from_str(raw).unwrap();
    assert_eq!(record.total_lectures, 12);
    assert_eq!(record.attended_lectures, 9);
    assert!((record.attendance_percentage - 75.0).abs() < f64::EPSILON);
}

#[test]
fn aggregated_record_rejects_negative_counts() {
    let raw = r#"{"student_id":"s1","prn_no":"PRN1","name":"x",
        "total_lectures":-1,"attended_lectures":0,"attendance_percentage":0}"#;
    assert!(serde_json::from_str::<AggregatedAttendanceRecord>(raw).is_err());
}

#[test]
fn session_record_uses_mixed_case_fields() {
    let raw = r#"{"student_id":"s1","prn_no":"PRN1","name":"Asha","isPresent":false,
        "date":"2024-09-10","startTime":"t0","endTime":"t1"}"#;
    let record: SessionAttendanceRecord = serde_json::from_str(raw).unwrap();
    assert_eq!(record.prn_no, "PRN1");
    assert!(!record.is_present);
    assert_eq!(record.start_time, "t0");
}

// =============================================================
// Requests
// =============================================================

#[test]
fn attendance_query_omits_unset_dates() {
    let query = AttendanceQuery {
        subject_id: "SUB1".to_owned(),
        semester: "3".to_owned(),
        filter_type: FilterType::Overall,
        specific_date: None,
        start_date: None,
        end_date: None,
    };
    assert_eq!(
        serde_json::to_value(&query).unwrap(),
        serde_json::json!({ "subjectId": "SUB1", "semester": "3", "filterType": "overall" })
    );
}

#[test]
fn update_request_serializes_backend_field_names() {
    let request = UpdateAttendanceRequest {
        semester: "3".to_owned(),
        subject: "SUB1".to_owned(),
        start_time: "09:00".to_owned(),
        end_time: "10:00".to_owned(),
        date: "2024-09-10".to_owned(),
        faculty_id: "F1".to_owned(),
        students: vec![StudentPresence {
            student_id: "s1".to_owned(),
            prn_no: "PRN1".to_owned(),
            name: "Asha Rao".to_owned(),
            is_present: true,
        }],
    };
    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["startTime"], "09:00");
    assert_eq!(value["endTime"], "10:00");
    assert_eq!(value["faculty_id"], "F1");
    assert_eq!(value["students"][0]["isPresent"], true);
}

#[test]
fn filter_type_round_trips_select_values() {
    for filter in FilterType::ALL {
        assert_eq!(FilterType::parse(filter.as_str()), Some(filter));
        assert_eq!(serde_json::to_value(filter).unwrap(), filter.as_str());
    }
    assert_eq!(FilterType::parse("weekly"), None);
}

// =============================================================
// Session
// =============================================================

#[test]
fn faculty_session_tolerates_missing_optional_fields() {
    let raw =
        r#"{"faculty_id":"F1","first_name":"Meera","last_name":"Iyer","email":"m@college.edu"}"#;
    let faculty: Faculty = serde_json::from_str(raw).unwrap();
    assert_eq!(faculty.display_name(), "Meera Iyer");
    assert_eq!(faculty.contact_no, None);
    assert_eq!(faculty.mailto(), "mailto:m@college.edu");
}

#[test]
fn student_identity_ignores_extra_fields() {
    let raw = r#"{"id":"stu-1","prn":"PRN1","name":"Asha"}"#;
    let identity: StudentIdentity = serde_json::from_str(raw).unwrap();
    assert_eq!(identity.id, "stu-1");
}
