// Repository modules
pub mod admin_repository;
pub mod course_repository;
pub mod enrollment_repository;
pub mod student_repository;

// Re-export repository types
pub use admin_repository::AdminRepository;
pub use course_repository::CourseRepository;
pub use enrollment_repository::EnrollmentRepository;
pub use student_repository::StudentRepository;
