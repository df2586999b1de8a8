use crate::domain::models::Student as DomainStudent;
use shared::Student as SharedStudent;

/// Mapper from domain students to the shared Student DTO.
///
/// The password hash has no place in the DTO and is dropped here.
pub struct StudentMapper;

impl StudentMapper {
    pub fn to_dto(domain: DomainStudent) -> SharedStudent {
        SharedStudent {
            student_id: domain.id,
            full_name: domain.full_name,
            date_of_birth: domain.date_of_birth,
        }
    }

    pub fn to_dto_list(domain_students: Vec<DomainStudent>) -> Vec<SharedStudent> {
        domain_students.into_iter().map(Self::to_dto).collect()
    }
}
