use std::fmt;

use chrono::{Datelike, NaiveDate};

pub const MAX_FULL_NAME_LEN: usize = 100;
pub const MIN_BIRTH_YEAR: i32 = 1900;

/// A student record. `password_hash` is an opaque digest that is stored but
/// never verified or returned by the API.
#[derive(Clone, PartialEq)]
pub struct Student {
    pub id: i64,
    pub password_hash: String,
    pub full_name: String,
    pub date_of_birth: NaiveDate,
}

#[derive(Clone, PartialEq)]
pub struct NewStudent {
    pub password_hash: String,
    pub full_name: String,
    pub date_of_birth: NaiveDate,
}

impl fmt::Debug for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Student")
            .field("id", &self.id)
            .field("password_hash", &"<redacted>")
            .field("full_name", &self.full_name)
            .field("date_of_birth", &self.date_of_birth)
            .finish()
    }
}

impl fmt::Debug for NewStudent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewStudent")
            .field("password_hash", &"<redacted>")
            .field("full_name", &self.full_name)
            .field("date_of_birth", &self.date_of_birth)
            .finish()
    }
}

impl NewStudent {
    pub fn with_id(self, id: i64) -> Student {
        Student {
            id,
            password_hash: self.password_hash,
            full_name: self.full_name,
            date_of_birth: self.date_of_birth,
        }
    }

    /// Validate raw request fields. `today` bounds the date of birth.
    pub fn parse(
        password_hash: Option<String>,
        full_name: Option<String>,
        date_of_birth: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Result<Self, StudentValidationError> {
        let full_name = match full_name {
            Some(name) if !name.trim().is_empty() => name.trim().to_string(),
            _ => return Err(StudentValidationError::MissingFullName),
        };
        if full_name.chars().count() > MAX_FULL_NAME_LEN {
            return Err(StudentValidationError::FullNameTooLong);
        }

        let password_hash = match password_hash {
            Some(hash) if !hash.trim().is_empty() => hash,
            _ => return Err(StudentValidationError::MissingPasswordHash),
        };

        let date_of_birth = date_of_birth.ok_or(StudentValidationError::MissingDateOfBirth)?;
        if date_of_birth.year() < MIN_BIRTH_YEAR {
            return Err(StudentValidationError::DateOfBirthTooEarly);
        }
        if date_of_birth > today {
            return Err(StudentValidationError::DateOfBirthInFuture);
        }

        Ok(Self {
            password_hash,
            full_name,
            date_of_birth,
        })
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum StudentValidationError {
    #[error("FullName is required")]
    MissingFullName,
    #[error("FullName cannot exceed {} characters", MAX_FULL_NAME_LEN)]
    FullNameTooLong,
    #[error("PasswordHash is required")]
    MissingPasswordHash,
    #[error("DateOfBirth is required")]
    MissingDateOfBirth,
    #[error("DateOfBirth must be in or after {}", MIN_BIRTH_YEAR)]
    DateOfBirthTooEarly,
    #[error("DateOfBirth cannot be in the future")]
    DateOfBirthInFuture,
}
