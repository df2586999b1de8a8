//! Conversions between domain models and the wire DTOs in `shared`

pub mod course_mapper;
pub mod enrollment_mapper;
pub mod student_mapper;

pub use course_mapper::CourseMapper;
pub use enrollment_mapper::EnrollmentMapper;
pub use student_mapper::StudentMapper;
