//! # REST API for Students

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{header, StatusCode},
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use tracing::{error, info};

use crate::domain::ServiceError;
use crate::io::rest::error::{json_error, read_id, read_payload, service_error_response};
use crate::io::rest::mappers::{CourseMapper, StudentMapper};
use crate::AppState;
use shared::CreateStudentRequest;

/// Create the student API router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_students).post(create_student))
        .route("/:id", get(get_student).delete(delete_student))
        .route("/:id/courses", get(list_student_courses))
}

pub async fn list_students(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/student");

    match state.student_service.list_students().await {
        Ok(students) => {
            (StatusCode::OK, Json(StudentMapper::to_dto_list(students))).into_response()
        }
        Err(e) => service_error_response(e, "listing students"),
    }
}

pub async fn get_student(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> impl IntoResponse {
    let student_id = match read_id(path) {
        Ok(id) => id,
        Err(response) => return response,
    };
    info!("GET /api/student/{}", student_id);

    match state.student_service.get_student(student_id).await {
        Ok(Some(student)) => {
            (StatusCode::OK, Json(StudentMapper::to_dto(student))).into_response()
        }
        Ok(None) => json_error(StatusCode::NOT_FOUND, "Student not found"),
        Err(e) => service_error_response(e, &format!("getting student {}", student_id)),
    }
}

/// Register a new student
pub async fn create_student(
    State(state): State<AppState>,
    payload: Result<Json<Option<CreateStudentRequest>>, JsonRejection>,
) -> impl IntoResponse {
    info!("POST /api/student");

    let request = match read_payload(payload, "Student object is null") {
        Ok(request) => request,
        Err(response) => return response,
    };

    match state.student_service.create_student(request).await {
        Ok(student) => {
            let dto = StudentMapper::to_dto(student);
            (
                StatusCode::CREATED,
                [(header::LOCATION, dto.location())],
                Json(dto),
            )
                .into_response()
        }
        Err(e) => service_error_response(e, "creating student"),
    }
}

/// Delete a student and their enrollments
pub async fn delete_student(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> impl IntoResponse {
    let student_id = match read_id(path) {
        Ok(id) => id,
        Err(response) => return response,
    };
    info!("DELETE /api/student/{}", student_id);

    match state.student_service.delete_student(student_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(ServiceError::Write(e)) => {
            error!("Database error while deleting student with ID {}: {}", student_id, e);
            json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "An error occurred while trying to delete the student. Please try again later.",
            )
        }
        Err(e) => service_error_response(e, &format!("deleting student {}", student_id)),
    }
}

/// List the courses a student is enrolled in
pub async fn list_student_courses(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> impl IntoResponse {
    let student_id = match read_id(path) {
        Ok(id) => id,
        Err(response) => return response,
    };
    info!("GET /api/student/{}/courses", student_id);

    match state.enrollment_service.courses_for_student(student_id).await {
        Ok(courses) => (StatusCode::OK, Json(CourseMapper::to_dto_list(courses))).into_response(),
        Err(e) => service_error_response(e, &format!("listing courses of student {}", student_id)),
    }
}
