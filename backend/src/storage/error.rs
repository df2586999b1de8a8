use thiserror::Error;

pub type StorageResult<T> = Result<T, StorageError>;

/// Failures raised by the persistence layer
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(sqlx::Error),

    #[error("foreign key constraint failed: {0}")]
    ForeignKey(String),

    #[error("stored row could not be read: {0}")]
    Corrupt(String),
}

impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_foreign_key_violation() {
                return StorageError::ForeignKey(db_err.message().to_string());
            }
        }
        StorageError::Database(err)
    }
}
