//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, downloads,
//! navigation) and display formatting from page and component logic.

pub mod export;
pub mod format;
pub mod navigation;
pub mod session_storage;
