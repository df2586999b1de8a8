use crate::domain::models::Course as DomainCourse;
use shared::Course as SharedCourse;

/// Mapper between domain courses and shared Course DTOs.
pub struct CourseMapper;

impl CourseMapper {
    pub fn to_dto(domain: DomainCourse) -> SharedCourse {
        SharedCourse {
            course_id: domain.id,
            subject: domain.subject,
            class_number: domain.class_number,
        }
    }

    pub fn to_dto_list(domain_courses: Vec<DomainCourse>) -> Vec<SharedCourse> {
        domain_courses.into_iter().map(Self::to_dto).collect()
    }
}
