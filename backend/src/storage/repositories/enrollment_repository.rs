use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use crate::domain::models::{Enrollment, NewEnrollment};
use crate::storage::connection::DbConnection;
use crate::storage::error::StorageResult;
use crate::storage::traits::EnrollmentStorage;

/// Repository for the student_courses junction table
#[derive(Clone)]
pub struct EnrollmentRepository {
    db: DbConnection,
}

impl EnrollmentRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn enrollment_from_row(row: &SqliteRow) -> StorageResult<Enrollment> {
        Ok(Enrollment {
            id: row.try_get("student_course_id")?,
            student_id: row.try_get("student_id")?,
            course_id: row.try_get("course_id")?,
        })
    }
}

#[async_trait]
impl EnrollmentStorage for EnrollmentRepository {
    async fn list_enrollments(&self) -> StorageResult<Vec<Enrollment>> {
        let rows = sqlx::query(
            r#"
            SELECT student_course_id, student_id, course_id
            FROM student_courses
            ORDER BY student_course_id ASC
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(Self::enrollment_from_row).collect()
    }

    async fn get_enrollment(&self, enrollment_id: i64) -> StorageResult<Option<Enrollment>> {
        let row = sqlx::query(
            r#"
            SELECT student_course_id, student_id, course_id
            FROM student_courses
            WHERE student_course_id = ?
            "#,
        )
        .bind(enrollment_id)
        .fetch_optional(self.db.pool())
        .await?;

        row.as_ref().map(Self::enrollment_from_row).transpose()
    }

    async fn store_enrollment(&self, enrollment: &NewEnrollment) -> StorageResult<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO student_courses (student_id, course_id)
            VALUES (?, ?)
            "#,
        )
        .bind(enrollment.student_id)
        .bind(enrollment.course_id)
        .execute(self.db.pool())
        .await?;
        Ok(result.last_insert_rowid())
    }

    async fn delete_enrollment(&self, enrollment_id: i64) -> StorageResult<bool> {
        let result = sqlx::query("DELETE FROM student_courses WHERE student_course_id = ?")
            .bind(enrollment_id)
            .execute(self.db.pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
