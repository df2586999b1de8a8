/// Longest department code accepted for `subject`
pub const MAX_SUBJECT_LEN: usize = 16;

#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub id: i64,
    pub subject: String,
    pub class_number: i32,
}

/// A validated course that has not been assigned an id yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewCourse {
    pub subject: String,
    pub class_number: i32,
}

impl NewCourse {
    pub fn with_id(self, id: i64) -> Course {
        Course {
            id,
            subject: self.subject,
            class_number: self.class_number,
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum CourseValidationError {
    #[error("Subject is required")]
    MissingSubject,
    #[error("Subject cannot exceed {} characters", MAX_SUBJECT_LEN)]
    SubjectTooLong,
    #[error("ClassNumber is required")]
    MissingClassNumber,
    #[error("ClassNumber must be a positive integer")]
    NonPositiveClassNumber,
    #[error("Course ID in the request body does not match the URL")]
    IdMismatch { path: i64, body: Option<i64> },
}

impl NewCourse {
    /// Build a course from raw request fields, rejecting anything incomplete
    pub fn parse(
        subject: Option<String>,
        class_number: Option<i32>,
    ) -> Result<Self, CourseValidationError> {
        let subject = match subject {
            Some(s) if !s.trim().is_empty() => s,
            _ => return Err(CourseValidationError::MissingSubject),
        };
        if subject.chars().count() > MAX_SUBJECT_LEN {
            return Err(CourseValidationError::SubjectTooLong);
        }

        let class_number = class_number.ok_or(CourseValidationError::MissingClassNumber)?;
        if class_number <= 0 {
            return Err(CourseValidationError::NonPositiveClassNumber);
        }

        Ok(Self {
            subject,
            class_number,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_course() {
        let course = NewCourse::parse(Some("CSE".to_string()), Some(220)).unwrap();
        assert_eq!(course.subject, "CSE");
        assert_eq!(course.class_number, 220);
        assert_eq!(course.with_id(4).id, 4);
    }

    #[test]
    fn test_parse_rejects_blank_subject() {
        assert_eq!(
            NewCourse::parse(Some("   ".to_string()), Some(101)),
            Err(CourseValidationError::MissingSubject)
        );
        assert_eq!(
            NewCourse::parse(None, Some(101)),
            Err(CourseValidationError::MissingSubject)
        );
    }

    #[test]
    fn test_parse_rejects_long_subject() {
        let subject = "X".repeat(MAX_SUBJECT_LEN + 1);
        assert_eq!(
            NewCourse::parse(Some(subject), Some(101)),
            Err(CourseValidationError::SubjectTooLong)
        );
    }

    #[test]
    fn test_parse_rejects_bad_class_number() {
        assert_eq!(
            NewCourse::parse(Some("PHY".to_string()), None),
            Err(CourseValidationError::MissingClassNumber)
        );
        assert_eq!(
            NewCourse::parse(Some("PHY".to_string()), Some(0)),
            Err(CourseValidationError::NonPositiveClassNumber)
        );
        assert_eq!(
            NewCourse::parse(Some("PHY".to_string()), Some(-303)),
            Err(CourseValidationError::NonPositiveClassNumber)
        );
    }
}
