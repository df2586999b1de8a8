//! # UniPortal Backend
//!
//! Course-enrollment service: a course catalogue, a student register and
//! the enrollments that link them, exposed as a JSON REST API over SQLite.
//!
//! ## Architecture
//!
//! ```text
//! IO Layer (REST handlers, DTO mappers)
//!     ↓
//! Domain Layer (services, validation)
//!     ↓
//! Storage Layer (repositories over a SQLite pool)
//! ```
//!
//! Shared state is the cloneable [`AppState`]; there is no global database
//! handle.

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{http::Method, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Settings;
use crate::domain::{AdminService, CourseService, EnrollmentService, StudentService};
use crate::storage::{Connection, DbConnection};

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub course_service: CourseService,
    pub student_service: StudentService,
    pub enrollment_service: EnrollmentService,
}

impl AppState {
    /// Wire every service to the repositories of one connection
    pub fn from_connection<C: Connection>(conn: &C) -> Self {
        let courses = Arc::new(conn.create_course_repository());
        let students = Arc::new(conn.create_student_repository());
        let enrollments = Arc::new(conn.create_enrollment_repository());

        Self {
            course_service: CourseService::new(courses.clone()),
            student_service: StudentService::new(students.clone()),
            enrollment_service: EnrollmentService::new(enrollments, students, courses),
        }
    }
}

/// Open the database, seed the admin account if configured and build the
/// application state
pub async fn initialize_backend(settings: &Settings) -> Result<AppState> {
    info!("Setting up database");
    let db_conn = DbConnection::connect(&settings.database)
        .await
        .with_context(|| format!("failed to open database {}", settings.database.url))?;

    if let Some(hash) = &settings.admin_password_hash {
        AdminService::new(Arc::new(db_conn.create_admin_repository()))
            .ensure_admin(hash)
            .await
            .context("failed to seed admin account")?;
    }

    info!("Setting up application state");
    Ok(AppState::from_connection(&db_conn))
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, settings: &Settings) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(settings.cors_origin.clone())
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    Router::new()
        .nest("/api", io::router())
        .fallback_service(ServeDir::new(&settings.static_dir))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::util::ServiceExt;

    fn test_settings(static_dir: &std::path::Path) -> Settings {
        let mut settings = Settings::from_lookup(|_| None).unwrap();
        settings.static_dir = static_dir.to_path_buf();
        settings
    }

    #[tokio::test]
    async fn test_router_serves_api_and_static_files() {
        let static_dir = tempfile::tempdir().unwrap();
        std::fs::write(static_dir.path().join("index.html"), "<h1>UniPortal</h1>").unwrap();
        let settings = test_settings(static_dir.path());

        let db = DbConnection::init_test().await.unwrap();
        let app = create_router(AppState::from_connection(&db), &settings);

        let response = app
            .clone()
            .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(Request::builder().uri("/index.html").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"<h1>UniPortal</h1>");
    }

    #[tokio::test]
    async fn test_initialize_backend_seeds_admin() {
        let temp_dir = tempfile::tempdir().unwrap();
        let db_path = temp_dir.path().join("uniportal.db");
        let mut settings = test_settings(temp_dir.path());
        settings.database.url = format!("sqlite:{}", db_path.display());
        settings.admin_password_hash = Some("admin-digest".to_string());

        initialize_backend(&settings).await.unwrap();
        // Running again leaves the existing account in place
        initialize_backend(&settings).await.unwrap();

        let db = DbConnection::connect(&settings.database).await.unwrap();
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM admins")
            .fetch_one(db.pool())
            .await
            .unwrap();
        assert_eq!(count, 1);
    }
}
