use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use crate::domain::error::{ServiceError, ServiceResult};
use crate::domain::models::{NewStudent, Student};
use crate::storage::StudentStorage;
use shared::CreateStudentRequest;

/// Service for the student register
#[derive(Clone)]
pub struct StudentService {
    storage: Arc<dyn StudentStorage>,
}

impl StudentService {
    pub fn new(storage: Arc<dyn StudentStorage>) -> Self {
        Self { storage }
    }

    pub async fn list_students(&self) -> ServiceResult<Vec<Student>> {
        info!("Listing all students");

        let students = self.storage.list_students().await?;

        info!("Found {} students", students.len());
        Ok(students)
    }

    pub async fn get_student(&self, student_id: i64) -> ServiceResult<Option<Student>> {
        info!("Getting student: {}", student_id);

        let student = self.storage.get_student(student_id).await?;
        if student.is_none() {
            warn!("Student not found: {}", student_id);
        }

        Ok(student)
    }

    /// Register a new student. The date of birth may not lie after today (UTC).
    pub async fn create_student(&self, request: CreateStudentRequest) -> ServiceResult<Student> {
        let today = Utc::now().date_naive();
        let new_student = NewStudent::parse(
            request.password_hash,
            request.full_name,
            request.date_of_birth,
            today,
        )?;
        info!("Creating student: name={}", new_student.full_name);

        let student_id = self
            .storage
            .store_student(&new_student)
            .await
            .map_err(ServiceError::Write)?;

        info!("Created student with ID: {}", student_id);
        Ok(new_student.with_id(student_id))
    }

    /// Remove a student and, through the cascade, their enrollments
    pub async fn delete_student(&self, student_id: i64) -> ServiceResult<()> {
        info!("Deleting student: {}", student_id);

        if !self.storage.student_exists(student_id).await? {
            warn!("Student not found: {}", student_id);
            return Err(ServiceError::NotFound(format!("Student {} not found", student_id)));
        }

        let deleted = self
            .storage
            .delete_student(student_id)
            .await
            .map_err(ServiceError::Write)?;
        if !deleted {
            return Err(ServiceError::NotFound(format!("Student {} not found", student_id)));
        }

        info!("Deleted student: {}", student_id);
        Ok(())
    }
}
