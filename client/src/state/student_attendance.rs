//! View state for a student's per-subject attendance table.
//!
//! DESIGN
//! ======
//! The table body is derived, never stored: `body()` turns the loading flag
//! and record list into exactly one of skeleton / empty / rows, so the
//! component cannot render two of them at once.

#[cfg(test)]
#[path = "student_attendance_test.rs"]
mod student_attendance_test;

use crate::net::api::ApiError;
use crate::net::types::AttendanceRecord;
use crate::util::format;

/// Placeholder rows shown while the first response is pending.
pub const SKELETON_ROWS: usize = 5;

pub const COLUMNS: [&str; 5] = ["Subject Code", "Type", "Date", "Time", "Status"];

pub const EMPTY_MESSAGE: &str = "No attendance records found for this subject.";

#[derive(Clone, Debug, PartialEq)]
pub struct StudentAttendanceState {
    pub subject_id: String,
    pub records: Vec<AttendanceRecord>,
    pub loading: bool,
    seq: u64,
}

impl Default for StudentAttendanceState {
    fn default() -> Self {
        Self { subject_id: String::new(), records: Vec::new(), loading: true, seq: 0 }
    }
}

/// One rendered table row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StudentRecordRow {
    pub key: String,
    pub subject_code: String,
    pub kind: &'static str,
    pub date: String,
    pub time: String,
    pub present: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StudentTableBody {
    Loading,
    Empty,
    Rows(Vec<StudentRecordRow>),
}

impl StudentAttendanceState {
    /// Start a fetch for `subject_id`; returns the sequence to pass back to [`Self::finish`].
    /// Records of a different subject are dropped so they never show under the new code.
    pub fn begin(&mut self, subject_id: &str) -> u64 {
        if self.subject_id != subject_id {
            self.records.clear();
        }
        self.subject_id = subject_id.to_owned();
        self.loading = true;
        self.seq += 1;
        self.seq
    }

    /// Apply a fetch result. Responses from superseded fetches are dropped.
    pub fn finish(&mut self, seq: u64, result: Result<Vec<AttendanceRecord>, ApiError>) {
        if seq != self.seq {
            return;
        }
        match result {
            Ok(records) => self.records = records,
            Err(e) => log::error!("Error fetching attendance data: {e}"),
        }
        self.loading = false;
    }

    #[must_use]
    pub fn body(&self) -> StudentTableBody {
        if self.loading {
            return StudentTableBody::Loading;
        }
        if self.records.is_empty() {
            return StudentTableBody::Empty;
        }
        StudentTableBody::Rows(
            self.records
                .iter()
                .map(|record| StudentRecordRow {
                    key: record.id.clone(),
                    subject_code: self.subject_id.clone(),
                    kind: record.kind.label(),
                    date: format::format_locale_date(&record.date),
                    time: format::format_lecture_window(
                        &record.lecture_start_time,
                        &record.lecture_end_time,
                    ),
                    present: record.status,
                })
                .collect(),
        )
    }
}

/// Heading shown above the table.
#[must_use]
pub fn heading(subject_name: &str) -> String {
    format!("Attendance for {subject_name}")
}

/// Glyph for the status column.
#[must_use]
pub fn presence_glyph(present: bool) -> &'static str {
    if present { "✔" } else { "✘" }
}
