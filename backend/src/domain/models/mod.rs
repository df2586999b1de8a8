pub mod admin;
pub mod course;
pub mod enrollment;
pub mod student;

pub use admin::Admin;
pub use course::{Course, CourseValidationError, NewCourse};
pub use enrollment::{Enrollment, EnrollmentValidationError, NewEnrollment};
pub use student::{NewStudent, Student, StudentValidationError};
