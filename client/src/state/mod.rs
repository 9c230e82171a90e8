//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by view (`student_attendance`, `faculty_attendance`) plus
//! the app-wide `session` and `toast` contexts, so each page depends on one
//! small focused model.

pub mod faculty_attendance;
pub mod session;
pub mod student_attendance;
pub mod toast;
