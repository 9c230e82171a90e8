//! REST helpers for the attendance backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call resolves to [`ApiError::Unavailable`] since
//! these endpoints are only fetched from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Views get a typed [`ApiError`] instead of panics so a failed fetch only
//! clears its loading flag. The faculty update path is the one caller that
//! tells transport failures apart from non-2xx replies. Student attendance
//! replies are decoded whatever their status.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;

use super::types::{
    AttendanceQuery, AttendanceRecord, AttendanceRecords, SemesterSubjects, SessionUser, Student,
    UpdateAttendanceRequest,
};

/// Failure of a backend call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, aborted).
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with a non-2xx status.
    #[error("request failed: status {0}")]
    Status(u16),
    /// The response body did not match the expected shape.
    #[error("response decode failed: {0}")]
    Decode(String),
    /// Browser-only call attempted during server rendering.
    #[error("not available on server")]
    Unavailable,
}

// =============================================================================
// ENDPOINTS
// =============================================================================

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn student_attendance_endpoint(student_id: &str) -> String {
    format!("/api/student/{student_id}/attendence")
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn semesters_endpoint(faculty_id: &str) -> String {
    format!("/api/faculty/{faculty_id}/get-all-sem-and-subjects")
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn roster_endpoint(subject_id: &str) -> String {
    format!("/api/subject/{subject_id}/get-all-students-of-this-subject")
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn attendance_records_endpoint(subject_id: &str) -> String {
    format!("/api/subject/{subject_id}/get-attendance-records")
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn update_attendance_endpoint(faculty_id: &str) -> String {
    format!("/api/faculty/{faculty_id}/update-attendance")
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) const CURRENT_USER_ENDPOINT: &str = "/api/auth/me";

#[cfg(any(test, feature = "hydrate"))]
/// Body of the student attendance request.
pub(crate) fn student_attendance_body(subject_id: &str) -> serde_json::Value {
    serde_json::json!({ "subject": subject_id })
}

#[cfg(any(test, feature = "hydrate"))]
/// Records carried by a student attendance reply, whatever its status.
/// Error bodies such as `{"message": ..}` have no `attendanceRecords` and
/// yield an empty list.
pub(crate) fn decode_student_attendance(
    body: serde_json::Value,
) -> Result<Vec<AttendanceRecord>, ApiError> {
    use super::types::StudentAttendanceResponse;

    serde_json::from_value::<StudentAttendanceResponse>(body)
        .map(|reply| reply.attendance_records.unwrap_or_default())
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(any(test, feature = "hydrate"))]
/// Decode the records response according to the filter that requested it.
pub(crate) fn decode_attendance_records(
    query: &AttendanceQuery,
    body: serde_json::Value,
) -> Result<AttendanceRecords, ApiError> {
    use super::types::FilterType;

    let decoded = match query.filter_type {
        FilterType::Overall => serde_json::from_value(body).map(AttendanceRecords::Overall),
        FilterType::SpecificDate | FilterType::DateRange => {
            serde_json::from_value(body).map(AttendanceRecords::Sessions)
        }
    };
    decoded.map_err(|e| ApiError::Decode(e.to_string()))
}

// =============================================================================
// API SEAM
// =============================================================================

/// Backend operations used by the attendance views.
///
/// Implemented by [`BrowserApi`] for real traffic and by stubs in tests.
pub trait AttendanceApi {
    /// `POST /api/student/{student_id}/attendence`.
    fn student_attendance(
        &self,
        student_id: &str,
        subject_id: &str,
    ) -> impl Future<Output = Result<Vec<AttendanceRecord>, ApiError>>;

    /// `GET /api/faculty/{faculty_id}/get-all-sem-and-subjects`.
    fn semesters_and_subjects(
        &self,
        faculty_id: &str,
    ) -> impl Future<Output = Result<Vec<SemesterSubjects>, ApiError>>;

    /// `GET /api/subject/{subject_id}/get-all-students-of-this-subject`.
    fn students_of_subject(
        &self,
        subject_id: &str,
    ) -> impl Future<Output = Result<Vec<Student>, ApiError>>;

    /// `POST /api/subject/{subject_id}/get-attendance-records`.
    fn attendance_records(
        &self,
        query: &AttendanceQuery,
    ) -> impl Future<Output = Result<AttendanceRecords, ApiError>>;

    /// `POST /api/faculty/{faculty_id}/update-attendance`.
    fn update_attendance(
        &self,
        faculty_id: &str,
        request: &UpdateAttendanceRequest,
    ) -> impl Future<Output = Result<(), ApiError>>;
}

/// Same-origin `fetch` client used by the hydrated app.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserApi;

#[cfg(feature = "hydrate")]
mod browser {
    use gloo_net::http::{Request, Response};
    use serde::de::DeserializeOwned;

    use super::ApiError;

    fn network(err: &gloo_net::Error) -> ApiError {
        ApiError::Network(err.to_string())
    }

    pub(super) async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        read_json_any_status(resp).await
    }

    pub(super) async fn read_json_any_status<T: DeserializeOwned>(
        resp: Response,
    ) -> Result<T, ApiError> {
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub(super) async fn get(url: &str) -> Result<Response, ApiError> {
        Request::get(url).send().await.map_err(|e| network(&e))
    }

    pub(super) async fn post<B: serde::Serialize>(
        url: &str,
        body: &B,
    ) -> Result<Response, ApiError> {
        Request::post(url)
            .json(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| network(&e))
    }
}

#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
impl AttendanceApi for BrowserApi {
    async fn student_attendance(
        &self,
        student_id: &str,
        subject_id: &str,
    ) -> Result<Vec<AttendanceRecord>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = student_attendance_endpoint(student_id);
            let resp = browser::post(&url, &student_attendance_body(subject_id)).await?;
            let body: serde_json::Value = browser::read_json_any_status(resp).await?;
            decode_student_attendance(body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn semesters_and_subjects(
        &self,
        faculty_id: &str,
    ) -> Result<Vec<SemesterSubjects>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use super::types::SemesterSubjectsResponse;

            let resp = browser::get(&semesters_endpoint(faculty_id)).await?;
            let body: SemesterSubjectsResponse = browser::read_json(resp).await?;
            Ok(body.grouped_response)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn students_of_subject(&self, subject_id: &str) -> Result<Vec<Student>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = browser::get(&roster_endpoint(subject_id)).await?;
            browser::read_json(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn attendance_records(
        &self,
        query: &AttendanceQuery,
    ) -> Result<AttendanceRecords, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = attendance_records_endpoint(&query.subject_id);
            let resp = browser::post(&url, query).await?;
            let body: serde_json::Value = browser::read_json(resp).await?;
            decode_attendance_records(query, body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn update_attendance(
        &self,
        faculty_id: &str,
        request: &UpdateAttendanceRequest,
    ) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = browser::post(&update_attendance_endpoint(faculty_id), request).await?;
            if !resp.ok() {
                return Err(ApiError::Status(resp.status()));
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }
}

/// Fetch the authenticated user resolved by the host from `/api/auth/me`.
/// Returns `None` without a session or on the server.
pub async fn fetch_current_user() -> Option<SessionUser> {
    #[cfg(feature = "hydrate")]
    {
        let user = match browser::get(CURRENT_USER_ENDPOINT).await {
            Ok(resp) => browser::read_json::<SessionUser>(resp).await,
            Err(e) => Err(e),
        };
        match user {
            Ok(user) => Some(user),
            Err(ApiError::Status(401)) => None,
            Err(e) => {
                log::warn!("current user lookup failed: {e}");
                None
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
