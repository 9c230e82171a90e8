//! Resolve the signed-in user from the backend's next-auth session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend owns authentication. Its session endpoint
//! (`GET /api/auth/session`) answers `{user, expires}` for a valid session
//! cookie and `{}` otherwise; this module forwards the browser's cookie
//! header there and reduces the answer to an optional [`SessionUser`].

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use attendance_client::net::types::SessionUser;
use reqwest::header::{ACCEPT, COOKIE};
use serde::Deserialize;

pub const SESSION_PATH: &str = "/api/auth/session";

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("session request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("session endpoint returned status {0}")]
    Status(u16),
}

#[derive(Deserialize)]
struct NextAuthSession {
    #[serde(default)]
    user: Option<serde_json::Value>,
}

/// Reduce a next-auth session body to its user. `{}`, `null` and users
/// without an id are all "no session".
#[must_use]
pub fn parse_session(body: &[u8]) -> Option<SessionUser> {
    let session: NextAuthSession = match serde_json::from_slice(body) {
        Ok(session) => session,
        Err(e) => {
            tracing::warn!(error = %e, "unreadable session body");
            return None;
        }
    };
    let user = session.user?;
    match serde_json::from_value::<SessionUser>(user) {
        Ok(user) if !user.id.is_empty() => Some(user),
        Ok(_) => None,
        Err(e) => {
            tracing::warn!(error = %e, "session user did not match the expected shape");
            None
        }
    }
}

/// Look up the session for `cookie` on the backend at `backend_url`.
///
/// # Errors
///
/// Returns [`SessionError`] when the backend is unreachable or answers with a
/// non-2xx status.
pub async fn resolve_session(
    http: &reqwest::Client,
    backend_url: &str,
    cookie: Option<&str>,
) -> Result<Option<SessionUser>, SessionError> {
    let Some(cookie) = cookie.filter(|c| !c.trim().is_empty()) else {
        return Ok(None);
    };

    let resp = http
        .get(format!("{backend_url}{SESSION_PATH}"))
        .header(COOKIE, cookie)
        .header(ACCEPT, "application/json")
        .send()
        .await?;
    if !resp.status().is_success() {
        return Err(SessionError::Status(resp.status().as_u16()));
    }
    let body = resp.bytes().await?;
    Ok(parse_session(&body))
}
