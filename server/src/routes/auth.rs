//! Session resolution endpoint for the hydrated app.

use axum::Json;
use axum::extract::State;
use axum::http::header::COOKIE;
use axum::http::{HeaderMap, StatusCode};

use attendance_client::net::types::SessionUser;

use crate::services::session;
use crate::state::AppState;

/// `GET /api/auth/me`: the signed-in user, or 401 without a session.
pub async fn me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<SessionUser>, StatusCode> {
    let cookie = headers.get(COOKIE).and_then(|v| v.to_str().ok());
    match session::resolve_session(&state.http, &state.config.backend_url, cookie).await {
        Ok(Some(user)) => Ok(Json(user)),
        Ok(None) => Err(StatusCode::UNAUTHORIZED),
        Err(e) => {
            tracing::warn!(error = %e, "session lookup failed");
            Err(StatusCode::BAD_GATEWAY)
        }
    }
}
