use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use crate::domain::models::{Course, NewCourse};
use crate::storage::connection::DbConnection;
use crate::storage::error::StorageResult;
use crate::storage::traits::CourseStorage;

/// Repository for the courses table
#[derive(Clone)]
pub struct CourseRepository {
    db: DbConnection,
}

impl CourseRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn course_from_row(row: &SqliteRow) -> StorageResult<Course> {
        Ok(Course {
            id: row.try_get("course_id")?,
            subject: row.try_get("subject")?,
            class_number: row.try_get("class_number")?,
        })
    }
}

#[async_trait]
impl CourseStorage for CourseRepository {
    async fn list_courses(&self) -> StorageResult<Vec<Course>> {
        let rows = sqlx::query(
            r#"
            SELECT course_id, subject, class_number
            FROM courses
            ORDER BY course_id ASC
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(Self::course_from_row).collect()
    }

    async fn get_course(&self, course_id: i64) -> StorageResult<Option<Course>> {
        let row = sqlx::query(
            r#"
            SELECT course_id, subject, class_number
            FROM courses
            WHERE course_id = ?
            "#,
        )
        .bind(course_id)
        .fetch_optional(self.db.pool())
        .await?;

        row.as_ref().map(Self::course_from_row).transpose()
    }

    async fn course_exists(&self, course_id: i64) -> StorageResult<bool> {
        let row = sqlx::query("SELECT 1 FROM courses WHERE course_id = ?")
            .bind(course_id)
            .fetch_optional(self.db.pool())
            .await?;
        Ok(row.is_some())
    }

    async fn store_course(&self, course: &NewCourse) -> StorageResult<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO courses (subject, class_number)
            VALUES (?, ?)
            "#,
        )
        .bind(&course.subject)
        .bind(course.class_number)
        .execute(self.db.pool())
        .await?;
        Ok(result.last_insert_rowid())
    }

    async fn replace_course(&self, course: &Course) -> StorageResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE courses
            SET subject = ?, class_number = ?
            WHERE course_id = ?
            "#,
        )
        .bind(&course.subject)
        .bind(course.class_number)
        .bind(course.id)
        .execute(self.db.pool())
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_course(&self, course_id: i64) -> StorageResult<bool> {
        let result = sqlx::query("DELETE FROM courses WHERE course_id = ?")
            .bind(course_id)
            .execute(self.db.pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn list_courses_for_student(&self, student_id: i64) -> StorageResult<Vec<Course>> {
        let rows = sqlx::query(
            r#"
            SELECT c.course_id, c.subject, c.class_number
            FROM student_courses sc
            JOIN courses c ON c.course_id = sc.course_id
            WHERE sc.student_id = ?
            ORDER BY sc.student_course_id ASC
            "#,
        )
        .bind(student_id)
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(Self::course_from_row).collect()
    }
}
