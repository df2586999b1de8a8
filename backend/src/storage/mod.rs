//! # Storage Module
//!
//! Handles all data persistence for the course-enrollment service.
//!
//! `DbConnection` owns a SQLite pool and hands out one repository per
//! record collection (courses, students, student_courses, admins). Each
//! repository implements a storage trait from [`traits`]; the domain layer
//! depends only on those traits.
//!
//! Every mutating statement is committed before the repository call
//! returns. Sessions are pool connections borrowed for a single call, so
//! nothing is shared between concurrent requests beyond the pool itself.

pub mod connection;
pub mod error;
pub mod repositories;
pub mod traits;

#[cfg(test)]
pub mod test_utils;

// Re-export the main types that other modules need
pub use connection::DbConnection;
pub use error::{StorageError, StorageResult};
pub use repositories::{AdminRepository, CourseRepository, EnrollmentRepository, StudentRepository};
pub use traits::{AdminStorage, Connection, CourseStorage, EnrollmentStorage, StudentStorage};
