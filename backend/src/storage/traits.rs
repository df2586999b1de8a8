//! # Storage Traits
//!
//! One repository interface per record collection. The domain layer only
//! sees these traits, so services can be exercised against test doubles
//! as well as the SQLite repositories.

use async_trait::async_trait;

use crate::domain::models::{
    Admin, Course, Enrollment, NewCourse, NewEnrollment, NewStudent, Student,
};
use crate::storage::error::StorageResult;

/// Interface for the Courses collection
#[async_trait]
pub trait CourseStorage: Send + Sync {
    /// List all courses in insertion order
    async fn list_courses(&self) -> StorageResult<Vec<Course>>;

    /// Retrieve a specific course by ID
    async fn get_course(&self, course_id: i64) -> StorageResult<Option<Course>>;

    async fn course_exists(&self, course_id: i64) -> StorageResult<bool>;

    /// Insert a course and return its server-assigned ID
    async fn store_course(&self, course: &NewCourse) -> StorageResult<i64>;

    /// Overwrite every column of an existing course.
    /// Returns false when no row was affected.
    async fn replace_course(&self, course: &Course) -> StorageResult<bool>;

    /// Returns true if the course was found and deleted
    async fn delete_course(&self, course_id: i64) -> StorageResult<bool>;

    /// Courses a student is enrolled in, joined through StudentCourses
    async fn list_courses_for_student(&self, student_id: i64) -> StorageResult<Vec<Course>>;
}

/// Interface for the Students collection
#[async_trait]
pub trait StudentStorage: Send + Sync {
    async fn list_students(&self) -> StorageResult<Vec<Student>>;

    async fn get_student(&self, student_id: i64) -> StorageResult<Option<Student>>;

    async fn student_exists(&self, student_id: i64) -> StorageResult<bool>;

    async fn store_student(&self, student: &NewStudent) -> StorageResult<i64>;

    async fn delete_student(&self, student_id: i64) -> StorageResult<bool>;

    /// Students enrolled in a course, joined through StudentCourses
    async fn list_students_for_course(&self, course_id: i64) -> StorageResult<Vec<Student>>;
}

/// Interface for the StudentCourses junction collection
#[async_trait]
pub trait EnrollmentStorage: Send + Sync {
    async fn list_enrollments(&self) -> StorageResult<Vec<Enrollment>>;

    async fn get_enrollment(&self, enrollment_id: i64) -> StorageResult<Option<Enrollment>>;

    /// Insert an enrollment. Fails with `StorageError::ForeignKey` when the
    /// student or course does not exist.
    async fn store_enrollment(&self, enrollment: &NewEnrollment) -> StorageResult<i64>;

    async fn delete_enrollment(&self, enrollment_id: i64) -> StorageResult<bool>;
}

/// Interface for the admin account
#[async_trait]
pub trait AdminStorage: Send + Sync {
    /// The admin with the lowest ID, if any exists
    async fn get_admin(&self) -> StorageResult<Option<Admin>>;

    async fn store_admin(&self, password_hash: &str) -> StorageResult<i64>;
}

/// Factory for the repositories backed by one storage connection
pub trait Connection: Send + Sync + Clone {
    type CourseRepository: CourseStorage + 'static;
    type StudentRepository: StudentStorage + 'static;
    type EnrollmentRepository: EnrollmentStorage + 'static;
    type AdminRepository: AdminStorage + 'static;

    fn create_course_repository(&self) -> Self::CourseRepository;
    fn create_student_repository(&self) -> Self::StudentRepository;
    fn create_enrollment_repository(&self) -> Self::EnrollmentRepository;
    fn create_admin_repository(&self) -> Self::AdminRepository;
}
