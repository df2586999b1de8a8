//! Storage doubles for exercising failure branches that a healthy SQLite
//! database never produces on demand.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::models::{Course, Enrollment, NewCourse, NewEnrollment, NewStudent, Student};
use crate::storage::error::{StorageError, StorageResult};
use crate::storage::traits::{CourseStorage, EnrollmentStorage, StudentStorage};

/// ID of the single fixture row each collection pretends to hold
pub const FIXTURE_ID: i64 = 1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fault {
    /// Every read fails with a database error
    ReadFailure,
    /// Reads see the fixture row, every write fails with a database error
    WriteFailure,
    /// Replace affects no row although the row still exists
    LostUpdate,
    /// Reads fail because stored rows cannot be decoded
    CorruptRows,
}

/// Implements every entity storage trait on top of a single fixture row
#[derive(Debug, Clone)]
pub struct FaultyStorage {
    fault: Fault,
}

impl FaultyStorage {
    pub fn new(fault: Fault) -> Self {
        Self { fault }
    }

    fn check_read(&self) -> StorageResult<()> {
        match self.fault {
            Fault::ReadFailure => Err(StorageError::Database(sqlx::Error::PoolTimedOut)),
            Fault::CorruptRows => {
                Err(StorageError::Corrupt("fixture row is unreadable".to_string()))
            }
            _ => Ok(()),
        }
    }

    fn check_write(&self) -> StorageResult<()> {
        match self.fault {
            Fault::WriteFailure => Err(StorageError::Database(sqlx::Error::PoolClosed)),
            _ => Ok(()),
        }
    }
}

pub fn fixture_course() -> Course {
    Course {
        id: FIXTURE_ID,
        subject: "CSE".to_string(),
        class_number: 220,
    }
}

pub fn fixture_student() -> Student {
    Student {
        id: FIXTURE_ID,
        password_hash: "digest".to_string(),
        full_name: "Alice Smith".to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(2002, 3, 9).unwrap(),
    }
}

pub fn fixture_enrollment() -> Enrollment {
    Enrollment {
        id: FIXTURE_ID,
        student_id: FIXTURE_ID,
        course_id: FIXTURE_ID,
    }
}

#[async_trait]
impl CourseStorage for FaultyStorage {
    async fn list_courses(&self) -> StorageResult<Vec<Course>> {
        self.check_read()?;
        Ok(vec![fixture_course()])
    }

    async fn get_course(&self, course_id: i64) -> StorageResult<Option<Course>> {
        self.check_read()?;
        Ok((course_id == FIXTURE_ID).then(fixture_course))
    }

    async fn course_exists(&self, course_id: i64) -> StorageResult<bool> {
        self.check_read()?;
        Ok(course_id == FIXTURE_ID)
    }

    async fn store_course(&self, _course: &NewCourse) -> StorageResult<i64> {
        self.check_write()?;
        Ok(FIXTURE_ID + 1)
    }

    async fn replace_course(&self, course: &Course) -> StorageResult<bool> {
        self.check_write()?;
        if self.fault == Fault::LostUpdate {
            return Ok(false);
        }
        Ok(course.id == FIXTURE_ID)
    }

    async fn delete_course(&self, course_id: i64) -> StorageResult<bool> {
        self.check_write()?;
        Ok(course_id == FIXTURE_ID)
    }

    async fn list_courses_for_student(&self, _student_id: i64) -> StorageResult<Vec<Course>> {
        self.check_read()?;
        Ok(vec![fixture_course()])
    }
}

#[async_trait]
impl StudentStorage for FaultyStorage {
    async fn list_students(&self) -> StorageResult<Vec<Student>> {
        self.check_read()?;
        Ok(vec![fixture_student()])
    }

    async fn get_student(&self, student_id: i64) -> StorageResult<Option<Student>> {
        self.check_read()?;
        Ok((student_id == FIXTURE_ID).then(fixture_student))
    }

    async fn student_exists(&self, student_id: i64) -> StorageResult<bool> {
        self.check_read()?;
        Ok(student_id == FIXTURE_ID)
    }

    async fn store_student(&self, _student: &NewStudent) -> StorageResult<i64> {
        self.check_write()?;
        Ok(FIXTURE_ID + 1)
    }

    async fn delete_student(&self, student_id: i64) -> StorageResult<bool> {
        self.check_write()?;
        Ok(student_id == FIXTURE_ID)
    }

    async fn list_students_for_course(&self, _course_id: i64) -> StorageResult<Vec<Student>> {
        self.check_read()?;
        Ok(vec![fixture_student()])
    }
}

#[async_trait]
impl EnrollmentStorage for FaultyStorage {
    async fn list_enrollments(&self) -> StorageResult<Vec<Enrollment>> {
        self.check_read()?;
        Ok(vec![fixture_enrollment()])
    }

    async fn get_enrollment(&self, enrollment_id: i64) -> StorageResult<Option<Enrollment>> {
        self.check_read()?;
        Ok((enrollment_id == FIXTURE_ID).then(fixture_enrollment))
    }

    async fn store_enrollment(&self, _enrollment: &NewEnrollment) -> StorageResult<i64> {
        self.check_write()?;
        Ok(FIXTURE_ID + 1)
    }

    async fn delete_enrollment(&self, enrollment_id: i64) -> StorageResult<bool> {
        self.check_write()?;
        Ok(enrollment_id == FIXTURE_ID)
    }
}
