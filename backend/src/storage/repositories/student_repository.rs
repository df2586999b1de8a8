use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use crate::domain::models::{NewStudent, Student};
use crate::storage::connection::DbConnection;
use crate::storage::error::{StorageError, StorageResult};
use crate::storage::traits::StudentStorage;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Repository for the students table
#[derive(Clone)]
pub struct StudentRepository {
    db: DbConnection,
}

impl StudentRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn student_from_row(row: &SqliteRow) -> StorageResult<Student> {
        let id: i64 = row.try_get("student_id")?;
        let raw_date: String = row.try_get("date_of_birth")?;
        let date_of_birth = NaiveDate::parse_from_str(&raw_date, DATE_FORMAT).map_err(|e| {
            StorageError::Corrupt(format!(
                "student {} has invalid date_of_birth '{}': {}",
                id, raw_date, e
            ))
        })?;

        Ok(Student {
            id,
            password_hash: row.try_get("password_hash")?,
            full_name: row.try_get("full_name")?,
            date_of_birth,
        })
    }
}

#[async_trait]
impl StudentStorage for StudentRepository {
    async fn list_students(&self) -> StorageResult<Vec<Student>> {
        let rows = sqlx::query(
            r#"
            SELECT student_id, password_hash, full_name, date_of_birth
            FROM students
            ORDER BY student_id ASC
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(Self::student_from_row).collect()
    }

    async fn get_student(&self, student_id: i64) -> StorageResult<Option<Student>> {
        let row = sqlx::query(
            r#"
            SELECT student_id, password_hash, full_name, date_of_birth
            FROM students
            WHERE student_id = ?
            "#,
        )
        .bind(student_id)
        .fetch_optional(self.db.pool())
        .await?;

        row.as_ref().map(Self::student_from_row).transpose()
    }

    async fn student_exists(&self, student_id: i64) -> StorageResult<bool> {
        let row = sqlx::query("SELECT 1 FROM students WHERE student_id = ?")
            .bind(student_id)
            .fetch_optional(self.db.pool())
            .await?;
        Ok(row.is_some())
    }

    async fn store_student(&self, student: &NewStudent) -> StorageResult<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO students (password_hash, full_name, date_of_birth)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(&student.password_hash)
        .bind(&student.full_name)
        .bind(student.date_of_birth.format(DATE_FORMAT).to_string())
        .execute(self.db.pool())
        .await?;
        Ok(result.last_insert_rowid())
    }

    async fn delete_student(&self, student_id: i64) -> StorageResult<bool> {
        let result = sqlx::query("DELETE FROM students WHERE student_id = ?")
            .bind(student_id)
            .execute(self.db.pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn list_students_for_course(&self, course_id: i64) -> StorageResult<Vec<Student>> {
        let rows = sqlx::query(
            r#"
            SELECT s.student_id, s.password_hash, s.full_name, s.date_of_birth
            FROM student_courses sc
            JOIN students s ON s.student_id = sc.student_id
            WHERE sc.course_id = ?
            ORDER BY sc.student_course_id ASC
            "#,
        )
        .bind(course_id)
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(Self::student_from_row).collect()
    }
}
