//! Networking modules for the attendance backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls, `dispatch` runs faculty view commands through
//! it, and `types` defines the shared wire schema.

pub mod api;
pub mod dispatch;
pub mod types;
