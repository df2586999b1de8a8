use crate::domain::models::Enrollment;
use shared::StudentCourse;

/// Mapper from enrollments to StudentCourse DTOs.
pub struct EnrollmentMapper;

impl EnrollmentMapper {
    pub fn to_dto(domain: Enrollment) -> StudentCourse {
        StudentCourse {
            student_course_id: domain.id,
            student_id: domain.student_id,
            course_id: domain.course_id,
        }
    }

    pub fn to_dto_list(domain_enrollments: Vec<Enrollment>) -> Vec<StudentCourse> {
        domain_enrollments.into_iter().map(Self::to_dto).collect()
    }
}
