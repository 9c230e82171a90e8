//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome (skeleton rows, toasts, profile cards)
//! while pages own the view state they display.

pub mod faculty_profile;
pub mod student_details;
pub mod table_skeleton;
pub mod toast_host;
