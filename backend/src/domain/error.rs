use thiserror::Error;

use crate::domain::models::{
    CourseValidationError, EnrollmentValidationError, StudentValidationError,
};
use crate::storage::StorageError;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Failures surfaced by the domain services
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The caller supplied an unusable request
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    /// An update touched no row although the row is still present
    #[error("{entity} {id} was modified concurrently")]
    Concurrency { entity: &'static str, id: i64 },

    /// Committing a mutation failed
    #[error("write failed: {0}")]
    Write(#[source] StorageError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl From<CourseValidationError> for ServiceError {
    fn from(err: CourseValidationError) -> Self {
        ServiceError::Validation(err.to_string())
    }
}

impl From<StudentValidationError> for ServiceError {
    fn from(err: StudentValidationError) -> Self {
        ServiceError::Validation(err.to_string())
    }
}

impl From<EnrollmentValidationError> for ServiceError {
    fn from(err: EnrollmentValidationError) -> Self {
        ServiceError::Validation(err.to_string())
    }
}
