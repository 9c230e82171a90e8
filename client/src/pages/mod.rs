//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (params, session, fetch tasks)
//! and delegates rendering details to `components`.

pub mod faculty_attendance;
pub mod student_attendance;
pub mod student_details;
