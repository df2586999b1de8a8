/// One row of the StudentCourse junction table
#[derive(Debug, Clone, PartialEq)]
pub struct Enrollment {
    pub id: i64,
    pub student_id: i64,
    pub course_id: i64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewEnrollment {
    pub student_id: i64,
    pub course_id: i64,
}

impl NewEnrollment {
    pub fn parse(
        student_id: Option<i64>,
        course_id: Option<i64>,
    ) -> Result<Self, EnrollmentValidationError> {
        let student_id = student_id.ok_or(EnrollmentValidationError::MissingStudentId)?;
        let course_id = course_id.ok_or(EnrollmentValidationError::MissingCourseId)?;
        Ok(Self {
            student_id,
            course_id,
        })
    }

    pub fn with_id(self, id: i64) -> Enrollment {
        Enrollment {
            id,
            student_id: self.student_id,
            course_id: self.course_id,
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum EnrollmentValidationError {
    #[error("StudentID is required")]
    MissingStudentId,
    #[error("CourseID is required")]
    MissingCourseId,
}
