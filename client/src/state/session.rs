//! Signed-in actor identity.
//!
//! DESIGN
//! ======
//! Identity is read from browser storage once, when the app hydrates, and
//! then passed explicitly: pages take it from this context and hand the ids
//! to their view-state constructors and API calls.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::{Faculty, StudentIdentity};

pub const STUDENT_SESSION_KEY: &str = "userSession";
pub const FACULTY_SESSION_KEY: &str = "facultySession";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub student: Option<StudentIdentity>,
    pub faculty: Option<Faculty>,
    /// False until storage has been read (always false during SSR).
    pub restored: bool,
}

impl SessionState {
    /// Read both identities from `sessionStorage`.
    pub fn restore() -> Self {
        Self::from_entries(
            crate::util::session_storage::load_json(STUDENT_SESSION_KEY),
            crate::util::session_storage::load_json(FACULTY_SESSION_KEY),
        )
    }

    #[must_use]
    pub fn from_entries(student: Option<StudentIdentity>, faculty: Option<Faculty>) -> Self {
        // Entries with a blank id are treated as signed out.
        let student = student.filter(|s| !s.id.trim().is_empty());
        let faculty = faculty.filter(|f| !f.faculty_id.trim().is_empty());
        Self { student, faculty, restored: true }
    }

    #[must_use]
    pub fn student_id(&self) -> Option<&str> {
        self.student.as_ref().map(|s| s.id.as_str())
    }
}
