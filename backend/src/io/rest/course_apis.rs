//! # REST API for Courses
//!
//! Listing, lookup, creation, full replacement and deletion of courses, plus
//! the roster of students enrolled in a course.

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
use shared::{CreateCourseRequest, UpdateCourseRequest};

/// Create the course API router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_courses).post(create_course))
        .route("/:id", get(get_course).put(update_course).delete(delete_course))
        .route("/:id/students", get(list_course_students))
}

/// List all courses
pub async fn list_courses(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/course");

    match state.course_service.list_courses().await {
        Ok(courses) => (StatusCode::OK, Json(CourseMapper::to_dto_list(courses))).into_response(),
        Err(e) => service_error_response(e, "listing courses"),
    }
}

/// Get a course by ID
pub async fn get_course(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> impl IntoResponse {
    let course_id = match read_id(path) {
        Ok(id) => id,
        Err(response) => return response,
    };
    info!("GET /api/course/{}", course_id);

    match state.course_service.get_course(course_id).await {
        Ok(Some(course)) => (StatusCode::OK, Json(CourseMapper::to_dto(course))).into_response(),
        Ok(None) => json_error(StatusCode::NOT_FOUND, "Course not found"),
        Err(e) => service_error_response(e, &format!("getting course {}", course_id)),
    }
}

/// Create a new course
pub async fn create_course(
    State(state): State<AppState>,
    payload: Result<Json<Option<CreateCourseRequest>>, JsonRejection>,
) -> impl IntoResponse {
    info!("POST /api/course");

    let request = match read_payload(payload, "Course object is null") {
        Ok(request) => request,
        Err(response) => return response,
    };

    match state.course_service.create_course(request).await {
        Ok(course) => {
            let dto = CourseMapper::to_dto(course);
            (
                StatusCode::CREATED,
                [(header::LOCATION, dto.location())],
                Json(dto),
            )
                .into_response()
        }
        Err(e) => service_error_response(e, "creating course"),
    }
}

/// Replace every field of a course
pub async fn update_course(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<Option<UpdateCourseRequest>>, JsonRejection>,
) -> impl IntoResponse {
    let course_id = match read_id(path) {
        Ok(id) => id,
        Err(response) => return response,
    };
    info!("PUT /api/course/{}", course_id);

    let request = match read_payload(payload, "Course object is null") {
        Ok(request) => request,
        Err(response) => return response,
    };

    match state.course_service.replace_course(course_id, request).await {
        Ok(course) => (StatusCode::OK, Json(CourseMapper::to_dto(course))).into_response(),
        Err(e @ ServiceError::Concurrency { .. }) => {
            error!("Concurrency conflict while updating course with ID {}: {}", course_id, e);
            json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "An error occurred while updating the course. Please try again.",
            )
        }
        Err(ServiceError::Write(e)) => {
            error!("Database error while updating course with ID {}: {}", course_id, e);
            json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "An error occurred while updating the course. Please check the data and try again.",
            )
        }
        Err(e) => service_error_response(e, &format!("updating course {}", course_id)),
    }
}

/// Delete a course and its enrollments
pub async fn delete_course(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> impl IntoResponse {
    let course_id = match read_id(path) {
        Ok(id) => id,
        Err(response) => return response,
    };
    info!("DELETE /api/course/{}", course_id);

    match state.course_service.delete_course(course_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(ServiceError::Write(e)) => {
            error!("Database error while deleting course with ID {}: {}", course_id, e);
            json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "An error occurred while trying to delete the course. Please try again later.",
            )
        }
        Err(e) => service_error_response(e, &format!("deleting course {}", course_id)),
    }
}

/// List the students enrolled in a course
pub async fn list_course_students(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> impl IntoResponse {
    let course_id = match read_id(path) {
        Ok(id) => id,
        Err(response) => return response,
    };
    info!("GET /api/course/{}/students", course_id);

    match state.enrollment_service.students_for_course(course_id).await {
        Ok(students) => {
            (StatusCode::OK, Json(StudentMapper::to_dto_list(students))).into_response()
        }
        Err(e) => service_error_response(e, &format!("listing students of course {}", course_id)),
    }
}
