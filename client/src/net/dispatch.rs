//! Executes faculty view commands against an [`AttendanceApi`].
//!
//! SYSTEM CONTEXT
//! ==============
//! `state::faculty_attendance` decides *what* to fetch; this module performs
//! the call and wraps the result in the matching [`FacultyEvent`]. Pages spawn
//! one task per command and fold the event back into their state signal.

#[cfg(test)]
#[path = "dispatch_test.rs"]
mod dispatch_test;

use super::api::AttendanceApi;
use crate::state::faculty_attendance::{FacultyCommand, FacultyEvent};

/// Run one command to completion.
pub async fn execute<A: AttendanceApi>(api: &A, command: FacultyCommand) -> FacultyEvent {
    match command {
        FacultyCommand::LoadSemesters { faculty_id } => {
            FacultyEvent::SemestersLoaded(api.semesters_and_subjects(&faculty_id).await)
        }
        FacultyCommand::LoadRoster { seq, subject_id } => {
            FacultyEvent::RosterLoaded { seq, result: api.students_of_subject(&subject_id).await }
        }
        FacultyCommand::LoadRecords { seq, query } => {
            FacultyEvent::RecordsLoaded { seq, result: api.attendance_records(&query).await }
        }
        FacultyCommand::SubmitAttendance { faculty_id, request } => {
            FacultyEvent::AttendanceSubmitted(api.update_attendance(&faculty_id, &request).await)
        }
    }
}
