//! Backend-facing services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own the conversation with the attendance backend so route
//! handlers can stay focused on status mapping and header plumbing.

pub mod session;
