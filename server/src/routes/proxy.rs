//! Same-origin forwarding of `/api/*` to the attendance backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The hydrated views call relative `/api/...` URLs. This handler relays
//! method, path, query, body and the request headers the backend relies on
//! (cookie, content type, accept), then relays status, content type and body
//! back. Anything that prevents a backend response becomes `502`.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::header::{ACCEPT, CONTENT_TYPE, COOKIE};
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Backend URL for an incoming request path and query.
pub(crate) fn backend_target(backend_url: &str, path: &str, query: Option<&str>) -> String {
    match query {
        Some(q) if !q.is_empty() => format!("{backend_url}{path}?{q}"),
        _ => format!("{backend_url}{path}"),
    }
}

/// `ANY /api/{*path}`
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let target = backend_target(&state.config.backend_url, uri.path(), uri.query());

    let mut request = state.http.request(method.clone(), &target);
    for name in [COOKIE, CONTENT_TYPE, ACCEPT] {
        if let Some(value) = headers.get(&name) {
            request = request.header(name, value);
        }
    }
    if !body.is_empty() {
        request = request.body(body);
    }

    let upstream = match request.send().await {
        Ok(resp) => resp,
        Err(e) => {
            tracing::error!(%method, %target, error = %e, "backend request failed");
            return StatusCode::BAD_GATEWAY.into_response();
        }
    };

    let status = upstream.status();
    let content_type = upstream.headers().get(CONTENT_TYPE).cloned();
    let bytes = match upstream.bytes().await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::error!(%method, %target, error = %e, "backend response body failed");
            return StatusCode::BAD_GATEWAY.into_response();
        }
    };
    if !status.is_success() {
        tracing::debug!(%method, %target, %status, "backend returned non-success");
    }

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    if let Some(content_type) = content_type {
        response.headers_mut().insert(CONTENT_TYPE, content_type);
    }
    response
}
