//! # Domain Module
//!
//! Business rules for the course catalogue, the student register and the
//! enrollments linking them. Services validate requests, talk to storage only
//! through the storage traits and report failures as [`ServiceError`].
//!
//! ## Module Organization
//!
//! - **course_service**: Course CRUD, including full replacement
//! - **student_service**: Student registration and removal
//! - **enrollment_service**: StudentCourse rows and the join queries
//! - **admin_service**: Seeding of the administrator account

pub mod admin_service;
pub mod course_service;
pub mod enrollment_service;
pub mod error;
pub mod models;
pub mod student_service;

pub use admin_service::AdminService;
pub use course_service::CourseService;
pub use enrollment_service::EnrollmentService;
pub use error::{ServiceError, ServiceResult};
pub use student_service::StudentService;
