//! # REST API Interface Layer
//!
//! HTTP endpoints for courses, students and enrollments. Handlers translate
//! JSON payloads into service calls and service failures into status codes;
//! business rules live in the domain layer.
//!
//! Every error body has the shape `{"error": "<message>"}`. Persistence
//! failures are logged server-side and reported with a generic message.

pub mod course_apis;
pub mod enrollment_apis;
pub mod error;
pub mod mappers;
pub mod student_apis;

use axum::{routing::get, Router};

use crate::AppState;

/// All API routes, relative to `/api`
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .nest("/course", course_apis::router())
        .nest("/student", student_apis::router())
        .nest("/enrollment", enrollment_apis::router())
}

/// Liveness check
pub async fn health() -> &'static str {
    "OK"
}
