//! Browser `sessionStorage` helpers for actor identity.
//!
//! SYSTEM CONTEXT
//! ==============
//! The college login flow writes the signed-in actor under `userSession` or
//! `facultySession`. These helpers are the only place that touches the
//! storage; views receive the decoded identity through `SessionState`.

use serde::de::DeserializeOwned;

/// Load a JSON value from `sessionStorage` for `key`.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.session_storage().ok().flatten())?;
        let raw = storage.get_item(key).ok().flatten()?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("ignoring malformed session entry {key}: {e}");
                None
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
