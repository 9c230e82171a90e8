use axum::Router;
use axum::http::HeaderMap;
use axum::routing::get;

use super::*;

#[test]
fn parse_session_reads_user() {
    let body = br#"{
        "user": {
            "id": "stu-1",
            "prn": "PRN001",
            "name": "Asha Rao",
            "department": "CSE",
            "username": "asha",
            "email": "asha@college.test",
            "current_semester": "3"
        },
        "expires": "2030-01-01T00:00:00.000Z"
    }"#;
    let user = parse_session(body).unwrap();
    assert_eq!(user.id, "stu-1");
    assert_eq!(user.prn, "PRN001");
    assert_eq!(user.current_semester, "3");
}

#[test]
fn parse_session_empty_object_is_none() {
    assert!(parse_session(b"{}").is_none());
    assert!(parse_session(b"null").is_none());
}

#[test]
fn parse_session_garbage_is_none() {
    assert!(parse_session(b"<html>").is_none());
    assert!(parse_session(br#"{"user":{"name":"no id"}}"#).is_none());
    assert!(parse_session(br#"{"user":{"id":""}}"#).is_none());
}

async fn stub_session(headers: HeaderMap) -> String {
    let cookie = headers.get(COOKIE).and_then(|v| v.to_str().ok()).unwrap_or_default();
    if cookie.contains("next-auth.session-token=valid") {
        r#"{"user":{"id":"stu-9","name":"Kiran"},"expires":"2030-01-01"}"#.to_owned()
    } else {
        "{}".to_owned()
    }
}

async fn spawn_backend() -> String {
    let app = Router::new().route(SESSION_PATH, get(stub_session));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn resolve_session_forwards_cookie() {
    let backend = spawn_backend().await;
    let http = reqwest::Client::new();

    let user =
        resolve_session(&http, &backend, Some("next-auth.session-token=valid")).await.unwrap();
    assert_eq!(user.map(|u| u.id), Some("stu-9".to_owned()));

    let none =
        resolve_session(&http, &backend, Some("next-auth.session-token=expired")).await.unwrap();
    assert!(none.is_none());
}

#[tokio::test]
async fn resolve_session_without_cookie_skips_backend() {
    let http = reqwest::Client::new();
    let result = resolve_session(&http, "http://127.0.0.1:9", None).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn resolve_session_unreachable_backend_errors() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let http = reqwest::Client::new();
    let err = resolve_session(&http, &format!("http://{addr}"), Some("a=b")).await.unwrap_err();
    assert!(matches!(err, SessionError::Request(_)));
}
