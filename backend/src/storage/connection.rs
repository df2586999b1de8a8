use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::info;

use crate::config::DatabaseSettings;
use crate::storage::error::StorageResult;
use crate::storage::repositories::{
    AdminRepository, CourseRepository, EnrollmentRepository, StudentRepository,
};
use crate::storage::traits::Connection;

/// DbConnection owns the SQLite pool every repository borrows sessions from
#[derive(Clone)]
pub struct DbConnection {
    pool: SqlitePool,
}

impl DbConnection {
    /// Open (creating if needed) the database described by `settings` and
    /// make sure the schema exists
    pub async fn connect(settings: &DatabaseSettings) -> StorageResult<Self> {
        let options = SqliteConnectOptions::from_str(&settings.url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(settings.max_connections)
            .acquire_timeout(settings.acquire_timeout)
            .connect_with(options)
            .await?;

        Self::setup_schema(&pool).await?;
        info!("Connected to database at {}", settings.url);

        Ok(Self { pool })
    }

    /// Initialize an isolated in-memory database for a single test
    #[cfg(test)]
    pub async fn init_test() -> StorageResult<Self> {
        let test_id = uuid::Uuid::new_v4().simple().to_string();
        let url = format!("sqlite:file:memdb_{}?mode=memory&cache=shared", test_id);
        let options = SqliteConnectOptions::from_str(&url)?.foreign_keys(true);

        // A single long-lived connection keeps the in-memory database alive
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        Self::setup_schema(&pool).await?;
        Ok(Self { pool })
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Wait for every checked-out session to return and close the pool
    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// Set up the required database schema
    async fn setup_schema(pool: &SqlitePool) -> StorageResult<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS students (
                student_id INTEGER PRIMARY KEY AUTOINCREMENT,
                password_hash TEXT NOT NULL,
                full_name TEXT NOT NULL,
                date_of_birth TEXT NOT NULL
            );
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS courses (
                course_id INTEGER PRIMARY KEY AUTOINCREMENT,
                subject TEXT NOT NULL,
                class_number INTEGER NOT NULL
            );
            "#,
        )
        .execute(pool)
        .await?;

        // Junction table. Duplicate (student_id, course_id) pairs are allowed.
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS student_courses (
                student_course_id INTEGER PRIMARY KEY AUTOINCREMENT,
                student_id INTEGER NOT NULL,
                course_id INTEGER NOT NULL,
                FOREIGN KEY (student_id) REFERENCES students (student_id) ON DELETE CASCADE,
                FOREIGN KEY (course_id) REFERENCES courses (course_id) ON DELETE CASCADE
            );
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_student_courses_student_id
            ON student_courses(student_id);
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_student_courses_course_id
            ON student_courses(course_id);
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS admins (
                admin_id INTEGER PRIMARY KEY AUTOINCREMENT,
                password_hash TEXT NOT NULL
            );
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }
}

impl Connection for DbConnection {
    type CourseRepository = CourseRepository;
    type StudentRepository = StudentRepository;
    type EnrollmentRepository = EnrollmentRepository;
    type AdminRepository = AdminRepository;

    fn create_course_repository(&self) -> CourseRepository {
        CourseRepository::new(self.clone())
    }

    fn create_student_repository(&self) -> StudentRepository {
        StudentRepository::new(self.clone())
    }

    fn create_enrollment_repository(&self) -> EnrollmentRepository {
        EnrollmentRepository::new(self.clone())
    }

    fn create_admin_repository(&self) -> AdminRepository {
        AdminRepository::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::NewCourse;
    use crate::storage::traits::CourseStorage;
    use std::time::Duration;

    fn file_settings(path: &std::path::Path) -> DatabaseSettings {
        DatabaseSettings {
            url: format!("sqlite:{}", path.display()),
            max_connections: 2,
            acquire_timeout: Duration::from_secs(5),
        }
    }

    #[tokio::test]
    async fn test_connect_creates_database_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let db_path = temp_dir.path().join("uniportal.db");
        assert!(!db_path.exists());

        let db = DbConnection::connect(&file_settings(&db_path)).await.unwrap();
        db.close().await;

        assert!(db_path.exists());
    }

    #[tokio::test]
    async fn test_committed_rows_survive_reconnect() {
        let temp_dir = tempfile::tempdir().unwrap();
        let db_path = temp_dir.path().join("uniportal.db");
        let settings = file_settings(&db_path);

        let db = DbConnection::connect(&settings).await.unwrap();
        let id = db
            .create_course_repository()
            .store_course(&NewCourse {
                subject: "MAT".to_string(),
                class_number: 101,
            })
            .await
            .unwrap();
        db.close().await;

        // Schema setup is idempotent on an existing file
        let reopened = DbConnection::connect(&settings).await.unwrap();
        let course = reopened
            .create_course_repository()
            .get_course(id)
            .await
            .unwrap()
            .expect("course should persist");
        assert_eq!(course.subject, "MAT");
        reopened.close().await;
    }

    #[tokio::test]
    async fn test_test_databases_are_isolated() {
        let first = DbConnection::init_test().await.unwrap();
        let second = DbConnection::init_test().await.unwrap();

        first
            .create_course_repository()
            .store_course(&NewCourse {
                subject: "EGL".to_string(),
                class_number: 202,
            })
            .await
            .unwrap();

        let courses = second.create_course_repository().list_courses().await.unwrap();
        assert!(courses.is_empty());
    }
}
