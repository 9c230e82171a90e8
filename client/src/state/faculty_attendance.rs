//! View state for the faculty attendance screen.
//!
//! ARCHITECTURE
//! ============
//! `FacultyAttendanceState` is a plain state machine over `ViewMode` and
//! `FilterType`. User intents are methods that mutate the state and return
//! the backend work they require as [`FacultyCommand`]s; the page executes
//! those (see `net::dispatch`) and feeds each [`FacultyEvent`] back through
//! [`FacultyAttendanceState::apply`]. Nothing in here touches the network or
//! the DOM, which keeps every transition unit-testable.
//!
//! INVARIANTS
//! ==========
//! - A subject is only ever selected within the currently selected semester;
//!   changing semester clears the subject and everything fetched for it.
//! - Presence marks live in `presence` (student id -> checked) and are the
//!   only source for the update payload.
//! - Roster and records responses carry the sequence number of the request
//!   that produced them; anything older than the latest request is dropped.
//! - The filter only selects which table is shown; switching it never
//!   mutates selection, roster, presence or fetched records.

#[cfg(test)]
#[path = "faculty_attendance_test.rs"]
mod faculty_attendance_test;

use std::collections::BTreeMap;

use crate::net::api::ApiError;
use crate::net::types::{
    AttendanceQuery, AttendanceRecords, Faculty, FilterType, SemesterSubjects, Student,
    StudentPresence, Subject, UpdateAttendanceRequest,
};
use crate::util::format;

pub const ROSTER_COLUMNS: [&str; 4] = ["PRN No", "Student Id", "Student Name", "Attendance"];
pub const OVERALL_COLUMNS: [&str; 5] =
    ["PRN No", "Student Name", "Total Lectures", "Attended", "Attendance %"];
pub const SESSION_COLUMNS: [&str; 6] =
    ["PRN No", "Student Name", "Date", "Start Time", "End Time", "Status"];

/// Top-level screen mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    /// Mark presence for a new lecture.
    #[default]
    Update,
    /// Review recorded attendance.
    View,
}

/// Per-fetch in-flight flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InFlight {
    pub semesters: bool,
    pub roster: bool,
    pub records: bool,
    pub submit: bool,
}

/// Backend work requested by a state transition.
#[derive(Clone, Debug, PartialEq)]
pub enum FacultyCommand {
    LoadSemesters { faculty_id: String },
    LoadRoster { seq: u64, subject_id: String },
    LoadRecords { seq: u64, query: AttendanceQuery },
    SubmitAttendance { faculty_id: String, request: UpdateAttendanceRequest },
}

/// Completion of a [`FacultyCommand`].
#[derive(Clone, Debug, PartialEq)]
pub enum FacultyEvent {
    SemestersLoaded(Result<Vec<SemesterSubjects>, ApiError>),
    RosterLoaded { seq: u64, result: Result<Vec<Student>, ApiError> },
    RecordsLoaded { seq: u64, result: Result<AttendanceRecords, ApiError> },
    AttendanceSubmitted(Result<(), ApiError>),
}

/// Result of an attendance submission, as surfaced to the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Saved,
    /// Backend answered with a non-2xx status.
    Rejected(u16),
    /// No usable response (network failure or unreadable reply).
    Failed,
}

impl SubmitOutcome {
    #[must_use]
    pub fn from_result(result: &Result<(), ApiError>) -> Self {
        match result {
            Ok(()) => Self::Saved,
            Err(ApiError::Status(status)) => Self::Rejected(*status),
            Err(_) => Self::Failed,
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Saved => "Attendance updated successfully.",
            Self::Rejected(_) => "Oops.. Failed to update attendance.. \n Try again!",
            Self::Failed => "Internal Server Error.. Try again",
        }
    }
}

pub const SUBMIT_PENDING_MESSAGE: &str = "Updating attendance ...";

// =============================================================================
// TABLE ROWS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RosterRow {
    pub student_id: String,
    pub prn_no: String,
    pub name: String,
    pub present: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OverallRow {
    pub key: String,
    pub prn_no: String,
    pub name: String,
    pub total_lectures: String,
    pub attended_lectures: String,
    pub percentage: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionRow {
    pub key: String,
    pub prn_no: String,
    pub name: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub present: bool,
}

impl SessionRow {
    #[must_use]
    pub fn status_label(&self) -> &'static str {
        if self.present { "Present" } else { "Absent" }
    }
}

/// The review table for the active filter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecordsTable {
    Overall(Vec<OverallRow>),
    Sessions(Vec<SessionRow>),
}

impl RecordsTable {
    #[must_use]
    pub fn headers(&self) -> &'static [&'static str] {
        match self {
            Self::Overall(_) => &OVERALL_COLUMNS,
            Self::Sessions(_) => &SESSION_COLUMNS,
        }
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        match self {
            Self::Overall(rows) => rows.len(),
            Self::Sessions(rows) => rows.len(),
        }
    }

    /// Cell text per row, in header order.
    #[must_use]
    pub fn cells(&self) -> Vec<Vec<String>> {
        match self {
            Self::Overall(rows) => rows
                .iter()
                .map(|r| {
                    vec![
                        r.prn_no.clone(),
                        r.name.clone(),
                        r.total_lectures.clone(),
                        r.attended_lectures.clone(),
                        r.percentage.clone(),
                    ]
                })
                .collect(),
            Self::Sessions(rows) => rows
                .iter()
                .map(|r| {
                    vec![
                        r.prn_no.clone(),
                        r.name.clone(),
                        r.date.clone(),
                        r.start_time.clone(),
                        r.end_time.clone(),
                        r.status_label().to_owned(),
                    ]
                })
                .collect(),
        }
    }
}

// =============================================================================
// STATE
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FacultyAttendanceState {
    pub faculty: Option<Faculty>,
    pub semesters: Vec<SemesterSubjects>,
    pub students: Vec<Student>,
    pub selected_semester: String,
    pub selected_subject_id: String,
    pub start_time: String,
    pub end_time: String,
    pub date: String,
    pub presence: BTreeMap<String, bool>,
    pub view_mode: ViewMode,
    pub filter_type: FilterType,
    pub specific_date: String,
    pub start_date_range: String,
    pub end_date_range: String,
    pub records: AttendanceRecords,
    pub in_flight: InFlight,
    roster_seq: u64,
    records_seq: u64,
}

impl FacultyAttendanceState {
    #[must_use]
    pub fn new(faculty: Option<Faculty>) -> Self {
        Self { faculty, ..Self::default() }
    }

    fn faculty_id(&self) -> Option<String> {
        self.faculty.as_ref().map(|f| f.faculty_id.clone())
    }

    /// Initial load of the faculty's semester/subject groupings.
    pub fn mount(&mut self) -> Vec<FacultyCommand> {
        let Some(faculty_id) = self.faculty_id() else {
            log::warn!("faculty attendance mounted without a faculty session");
            return Vec::new();
        };
        self.in_flight.semesters = true;
        vec![FacultyCommand::LoadSemesters { faculty_id }]
    }

    /// The pre-loading placeholder tracks the semester fetch.
    #[must_use]
    pub fn is_preloading(&self) -> bool {
        self.in_flight.semesters
    }

    #[must_use]
    pub fn subjects_for_selected_semester(&self) -> &[Subject] {
        if self.selected_semester.is_empty() {
            return &[];
        }
        self.semesters
            .iter()
            .find(|s| s.semester == self.selected_semester)
            .map_or(&[], |s| s.subjects.as_slice())
    }

    fn clear_subject_data(&mut self) {
        self.students.clear();
        self.presence.clear();
        self.records = AttendanceRecords::default();
        self.roster_seq += 1;
        self.records_seq += 1;
        self.in_flight.roster = false;
        self.in_flight.records = false;
    }

    pub fn select_semester(&mut self, semester: &str) {
        self.selected_semester = semester.to_owned();
        self.selected_subject_id.clear();
        self.clear_subject_data();
    }

    /// Select a subject: fetch its roster, and its records when reviewing.
    pub fn select_subject(&mut self, subject_id: &str) -> Vec<FacultyCommand> {
        self.selected_subject_id = subject_id.to_owned();
        self.clear_subject_data();
        if subject_id.is_empty() {
            return Vec::new();
        }

        self.in_flight.roster = true;
        let mut commands = vec![FacultyCommand::LoadRoster {
            seq: self.roster_seq,
            subject_id: subject_id.to_owned(),
        }];
        if self.view_mode == ViewMode::View {
            commands.extend(self.records_command());
        }
        commands
    }

    /// Switch mode. Entering review mode loads records for the selected subject.
    pub fn set_view_mode(&mut self, mode: ViewMode) -> Vec<FacultyCommand> {
        let entering_view = mode == ViewMode::View && self.view_mode != ViewMode::View;
        self.view_mode = mode;
        if entering_view {
            return self.records_command().into_iter().collect();
        }
        Vec::new()
    }

    pub fn set_filter_type(&mut self, filter_type: FilterType) {
        self.filter_type = filter_type;
    }

    pub fn set_presence(&mut self, student_id: &str, present: bool) {
        self.presence.insert(student_id.to_owned(), present);
    }

    #[must_use]
    pub fn is_present(&self, student_id: &str) -> bool {
        self.presence.get(student_id).copied().unwrap_or(false)
    }

    /// Subject, date, start and end time are all required.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.selected_subject_id.is_empty()
            && !self.date.is_empty()
            && !self.start_time.is_empty()
            && !self.end_time.is_empty()
            && !self.in_flight.submit
    }

    #[must_use]
    pub fn update_request(&self) -> UpdateAttendanceRequest {
        UpdateAttendanceRequest {
            semester: self.selected_semester.clone(),
            subject: self.selected_subject_id.clone(),
            start_time: self.start_time.clone(),
            end_time: self.end_time.clone(),
            date: self.date.clone(),
            faculty_id: self.faculty_id().unwrap_or_default(),
            students: self
                .students
                .iter()
                .map(|s| StudentPresence {
                    student_id: s.student_id.clone(),
                    prn_no: s.prn_no.clone(),
                    name: s.display_name(),
                    is_present: self.is_present(&s.student_id),
                })
                .collect(),
        }
    }

    /// Submit the marked roster. Returns `None` when the form is incomplete.
    pub fn submit(&mut self) -> Option<FacultyCommand> {
        if !self.can_submit() {
            return None;
        }
        let faculty_id = self.faculty_id()?;
        self.in_flight.submit = true;
        Some(FacultyCommand::SubmitAttendance { faculty_id, request: self.update_request() })
    }

    /// Query for the current subject and filter. Date fields are sent only
    /// when the filter uses them and they are filled in.
    #[must_use]
    pub fn current_query(&self) -> AttendanceQuery {
        let non_empty = |v: &str| (!v.is_empty()).then(|| v.to_owned());
        let (specific_date, start_date, end_date) = match self.filter_type {
            FilterType::Overall => (None, None, None),
            FilterType::SpecificDate => (non_empty(&self.specific_date), None, None),
            FilterType::DateRange => {
                (None, non_empty(&self.start_date_range), non_empty(&self.end_date_range))
            }
        };
        AttendanceQuery {
            subject_id: self.selected_subject_id.clone(),
            semester: self.selected_semester.clone(),
            filter_type: self.filter_type,
            specific_date,
            start_date,
            end_date,
        }
    }

    fn records_command(&mut self) -> Option<FacultyCommand> {
        if self.selected_subject_id.is_empty() {
            return None;
        }
        self.records_seq += 1;
        self.in_flight.records = true;
        Some(FacultyCommand::LoadRecords { seq: self.records_seq, query: self.current_query() })
    }

    /// The "Refresh" action.
    pub fn refresh(&mut self) -> Option<FacultyCommand> {
        self.records_command()
    }

    /// Fold a completed command back into the state.
    pub fn apply(&mut self, event: FacultyEvent) -> Option<SubmitOutcome> {
        match event {
            FacultyEvent::SemestersLoaded(result) => {
                self.in_flight.semesters = false;
                match result {
                    Ok(semesters) => self.semesters = semesters,
                    Err(e) => log::error!("Failed to fetch semesters and subjects: {e}"),
                }
                None
            }
            FacultyEvent::RosterLoaded { seq, result } => {
                if seq != self.roster_seq {
                    return None;
                }
                self.in_flight.roster = false;
                match result {
                    Ok(students) => {
                        self.presence =
                            students.iter().map(|s| (s.student_id.clone(), false)).collect();
                        self.students = students;
                    }
                    Err(e) => log::error!("Failed to fetch students: {e}"),
                }
                None
            }
            FacultyEvent::RecordsLoaded { seq, result } => {
                if seq != self.records_seq {
                    return None;
                }
                self.in_flight.records = false;
                match result {
                    Ok(records) => self.records = records,
                    Err(e) => log::error!("Failed to fetch attendance records: {e}"),
                }
                None
            }
            FacultyEvent::AttendanceSubmitted(result) => {
                self.in_flight.submit = false;
                if let Err(e) = &result {
                    log::error!("Error updating attendance: {e}");
                }
                Some(SubmitOutcome::from_result(&result))
            }
        }
    }

    // -------------------------------------------------------------------------
    // Derived rows
    // -------------------------------------------------------------------------

    #[must_use]
    pub fn roster_rows(&self) -> Vec<RosterRow> {
        self.students
            .iter()
            .map(|s| RosterRow {
                student_id: s.student_id.clone(),
                prn_no: s.prn_no.clone(),
                name: s.display_name(),
                present: self.is_present(&s.student_id),
            })
            .collect()
    }

    /// Review table for the active filter. Records fetched under the other
    /// kind of filter are not shown until the next refresh.
    #[must_use]
    pub fn records_table(&self) -> RecordsTable {
        match self.filter_type {
            FilterType::Overall => {
                let rows = match &self.records {
                    AttendanceRecords::Overall(rows) => rows
                        .iter()
                        .map(|r| OverallRow {
                            key: r.prn_no.clone(),
                            prn_no: r.prn_no.clone(),
                            name: r.name.clone(),
                            total_lectures: r.total_lectures.to_string(),
                            attended_lectures: r.attended_lectures.to_string(),
                            percentage: format::format_percentage(r.attendance_percentage),
                        })
                        .collect(),
                    AttendanceRecords::Sessions(_) => Vec::new(),
                };
                RecordsTable::Overall(rows)
            }
            FilterType::SpecificDate | FilterType::DateRange => {
                let rows = match &self.records {
                    AttendanceRecords::Sessions(rows) => rows
                        .iter()
                        .map(|r| SessionRow {
                            key: format!("{}:{}", r.student_id, r.start_time),
                            prn_no: r.prn_no.clone(),
                            name: r.name.clone(),
                            date: format::format_locale_date(&r.date),
                            start_time: format::format_readable_ist(&r.start_time),
                            end_time: format::format_readable_ist(&r.end_time),
                            present: r.is_present,
                        })
                        .collect(),
                    AttendanceRecords::Overall(_) => Vec::new(),
                };
                RecordsTable::Sessions(rows)
            }
        }
    }
}
