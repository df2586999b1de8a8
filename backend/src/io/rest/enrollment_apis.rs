//! # REST API for Enrollments
//!
//! Rows of the StudentCourse junction. Each row links one student to one
//! course; the same pair may appear more than once.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{header, StatusCode},
    response::{IntoResponse, Json},
    routing::{delete, get},
    Router,
};
use tracing::info;

use crate::io::rest::error::{read_id, read_payload, service_error_response};
use crate::io::rest::mappers::EnrollmentMapper;
use crate::AppState;
use shared::CreateEnrollmentRequest;

/// Create the enrollment API router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_enrollments).post(create_enrollment))
        .route("/:id", delete(delete_enrollment))
}

pub async fn list_enrollments(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/enrollment");

    match state.enrollment_service.list_enrollments().await {
        Ok(rows) => (StatusCode::OK, Json(EnrollmentMapper::to_dto_list(rows))).into_response(),
        Err(e) => service_error_response(e, "listing enrollments"),
    }
}

/// Enroll a student in a course
pub async fn create_enrollment(
    State(state): State<AppState>,
    payload: Result<Json<Option<CreateEnrollmentRequest>>, JsonRejection>,
) -> impl IntoResponse {
    info!("POST /api/enrollment");

    let request = match read_payload(payload, "StudentCourse object is null") {
        Ok(request) => request,
        Err(response) => return response,
    };

    match state.enrollment_service.enroll(request).await {
        Ok(enrollment) => {
            let dto = EnrollmentMapper::to_dto(enrollment);
            (
                StatusCode::CREATED,
                [(header::LOCATION, dto.location())],
                Json(dto),
            )
                .into_response()
        }
        Err(e) => service_error_response(e, "creating enrollment"),
    }
}

pub async fn delete_enrollment(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> impl IntoResponse {
    let enrollment_id = match read_id(path) {
        Ok(id) => id,
        Err(response) => return response,
    };
    info!("DELETE /api/enrollment/{}", enrollment_id);

    match state.enrollment_service.withdraw(enrollment_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => service_error_response(e, &format!("deleting enrollment {}", enrollment_id)),
    }
}
