//! Wire DTOs for the attendance backend.
//!
//! DESIGN
//! ======
//! Field names mirror the backend JSON exactly, including its historical
//! spellings (`habe_practicals`, `current_studing_semester`), so serde maps
//! rows without per-field renames scattered through the views.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// STUDENT VIEW
// =============================================================================

/// Lecture type recorded with each attendance row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionKind {
    Theory,
    Practical,
}

impl SessionKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Theory => "Theory",
            Self::Practical => "Practical",
        }
    }
}

/// One lecture attendance row for the signed-in student.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    #[serde(deserialize_with = "deserialize_string_lenient")]
    pub id: String,
    pub date: String,
    pub lecture_start_time: String,
    pub lecture_end_time: String,
    /// Presence flag.
    pub status: bool,
    #[serde(rename = "type")]
    pub kind: SessionKind,
    #[serde(default)]
    pub subject_name: String,
    #[serde(default)]
    pub first_name: String,
}

/// Envelope returned by `POST /api/student/{id}/attendence`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentAttendanceResponse {
    #[serde(default)]
    pub attendance_records: Option<Vec<AttendanceRecord>>,
}

// =============================================================================
// FACULTY VIEW
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Faculty {
    pub faculty_id: String,
    pub first_name: String,
    #[serde(default)]
    pub middle_name: Option<String>,
    pub last_name: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub highest_education: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub contact_no: Option<String>,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub department_id: String,
}

impl Faculty {
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// `mailto:` link for the profile card.
    #[must_use]
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    pub subject_id: String,
    pub subject_name: String,
    #[serde(default, deserialize_with = "deserialize_u32_lenient")]
    pub required_hours: u32,
    #[serde(default)]
    pub habe_practicals: bool,
    #[serde(default)]
    pub faculty_id: String,
    #[serde(default, deserialize_with = "deserialize_string_lenient")]
    pub semester: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub student_id: String,
    pub first_name: String,
    #[serde(default)]
    pub middle_name: Option<String>,
    pub last_name: String,
    pub prn_no: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub department_id: String,
    #[serde(default, deserialize_with = "deserialize_string_lenient")]
    pub current_studing_year: String,
    #[serde(default, deserialize_with = "deserialize_string_lenient")]
    pub current_studing_semester: String,
}

impl Student {
    /// Name as shown in roster tables and sent in the update payload.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SemesterSubjects {
    #[serde(deserialize_with = "deserialize_string_lenient")]
    pub semester: String,
    #[serde(default)]
    pub subjects: Vec<Subject>,
}

/// Envelope returned by `GET /api/faculty/{id}/get-all-sem-and-subjects`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SemesterSubjectsResponse {
    #[serde(default)]
    pub grouped_response: Vec<SemesterSubjects>,
}

/// Per-student totals for the `overall` filter. Percentage is computed by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AggregatedAttendanceRecord {
    pub student_id: String,
    pub prn_no: String,
    pub name: String,
    #[serde(deserialize_with = "deserialize_u32_lenient")]
    pub total_lectures: u32,
    #[serde(deserialize_with = "deserialize_u32_lenient")]
    pub attended_lectures: u32,
    pub attendance_percentage: f64,
}

/// One lecture row for the `specificDate` / `dateRange` filters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionAttendanceRecord {
    #[serde(rename = "student_id")]
    pub student_id: String,
    #[serde(rename = "prn_no")]
    pub prn_no: String,
    #[serde(default)]
    pub name: String,
    pub is_present: bool,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
}

/// Filter applied when reviewing recorded attendance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterType {
    #[default]
    Overall,
    SpecificDate,
    DateRange,
}

impl FilterType {
    pub const ALL: [Self; 3] = [Self::Overall, Self::SpecificDate, Self::DateRange];

    /// Value used by the `<select>` element and the request body.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Overall => "overall",
            Self::SpecificDate => "specificDate",
            Self::DateRange => "dateRange",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == raw)
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Overall => "Overall Attendance",
            Self::SpecificDate => "Specific Date",
            Self::DateRange => "Date Range",
        }
    }
}

/// Body of `POST /api/subject/{id}/get-attendance-records`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceQuery {
    pub subject_id: String,
    pub semester: String,
    pub filter_type: FilterType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specific_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

/// Records fetched for one query; the variant follows the query's filter.
#[derive(Clone, Debug, PartialEq)]
pub enum AttendanceRecords {
    Overall(Vec<AggregatedAttendanceRecord>),
    Sessions(Vec<SessionAttendanceRecord>),
}

impl Default for AttendanceRecords {
    fn default() -> Self {
        Self::Overall(Vec::new())
    }
}

impl AttendanceRecords {
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Overall(rows) => rows.len(),
            Self::Sessions(rows) => rows.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Student entry inside the update payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StudentPresence {
    pub student_id: String,
    pub prn_no: String,
    pub name: String,
    #[serde(rename = "isPresent")]
    pub is_present: bool,
}

/// Body of `POST /api/faculty/{id}/update-attendance`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UpdateAttendanceRequest {
    pub semester: String,
    pub subject: String,
    #[serde(rename = "startTime")]
    pub start_time: String,
    #[serde(rename = "endTime")]
    pub end_time: String,
    pub date: String,
    pub faculty_id: String,
    pub students: Vec<StudentPresence>,
}

// =============================================================================
// SESSION
// =============================================================================

/// Student identity persisted by the login flow under `userSession`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StudentIdentity {
    #[serde(deserialize_with = "deserialize_string_lenient")]
    pub id: String,
}

/// Authenticated user as resolved by the host from the backend session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    #[serde(default)]
    pub prn: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub current_semester: String,
}

// =============================================================================
// LENIENT SCALARS
// =============================================================================

/// Backend counts arrive as numbers or as numeric strings (bigint columns).
fn deserialize_u32_lenient<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let parsed = match &value {
        serde_json::Value::Number(number) => number.as_u64().or_else(|| {
            number
                .as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0 && *f >= 0.0)
                .map(|f| {
                    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                    let int = f as u64;
                    int
                })
        }),
        serde_json::Value::String(raw) => raw.trim().parse::<u64>().ok(),
        _ => None,
    };
    let Some(int) = parsed else {
        return Err(D::Error::custom(format!("expected non-negative integer, got {value}")));
    };
    u32::try_from(int).map_err(|_| D::Error::custom(format!("value {int} out of range for u32")))
}

/// Identifiers and semesters arrive as strings or bare numbers.
fn deserialize_string_lenient<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!("expected string or number, got {other}"))),
    }
}
