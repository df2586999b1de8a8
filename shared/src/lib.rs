use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Base path of the course resource
pub const COURSE_API_PATH: &str = "/api/course";
/// Base path of the student resource
pub const STUDENT_API_PATH: &str = "/api/student";
/// Base path of the enrollment (StudentCourse) resource
pub const ENROLLMENT_API_PATH: &str = "/api/enrollment";

/// A course offering such as "CSE 220"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Course {
    #[serde(rename = "CourseID")]
    pub course_id: i64,
    /// Department code, e.g. "CSE", "PHY", "BIO"
    pub subject: String,
    /// Catalogue number within the department, e.g. 220
    pub class_number: i32,
}

/// Request body for `POST /api/course`.
///
/// Every field is optional on the wire so that a missing value surfaces as a
/// validation message rather than a deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateCourseRequest {
    pub subject: Option<String>,
    pub class_number: Option<i32>,
}

/// Request body for `PUT /api/course/{id}` (full replacement)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateCourseRequest {
    #[serde(rename = "CourseID")]
    pub course_id: Option<i64>,
    pub subject: Option<String>,
    pub class_number: Option<i32>,
}

/// A student as returned by the API. The stored password hash is never
/// part of a response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Student {
    #[serde(rename = "StudentID")]
    pub student_id: i64,
    pub full_name: String,
    /// Calendar date, serialized as YYYY-MM-DD
    pub date_of_birth: NaiveDate,
}

/// Request body for `POST /api/student`
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateStudentRequest {
    pub password_hash: Option<String>,
    pub full_name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
}

impl std::fmt::Debug for CreateStudentRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateStudentRequest")
            .field("password_hash", &self.password_hash.as_ref().map(|_| "<redacted>"))
            .field("full_name", &self.full_name)
            .field("date_of_birth", &self.date_of_birth)
            .finish()
    }
}

/// One enrollment of a student in a course (junction row)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentCourse {
    #[serde(rename = "StudentCourseID")]
    pub student_course_id: i64,
    #[serde(rename = "StudentID")]
    pub student_id: i64,
    #[serde(rename = "CourseID")]
    pub course_id: i64,
}

/// Request body for `POST /api/enrollment`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateEnrollmentRequest {
    #[serde(rename = "StudentID")]
    pub student_id: Option<i64>,
    #[serde(rename = "CourseID")]
    pub course_id: Option<i64>,
}

/// Body of every non-2xx JSON response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl Course {
    /// Path at which this course can be fetched again
    pub fn location(&self) -> String {
        format!("{}/{}", COURSE_API_PATH, self.course_id)
    }
}

impl Student {
    pub fn location(&self) -> String {
        format!("{}/{}", STUDENT_API_PATH, self.student_id)
    }
}

impl StudentCourse {
    pub fn location(&self) -> String {
        format!("{}/{}", ENROLLMENT_API_PATH, self.student_course_id)
    }
}
