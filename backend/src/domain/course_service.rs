use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::error::{ServiceError, ServiceResult};
use crate::domain::models::{Course, CourseValidationError, NewCourse};
use crate::storage::CourseStorage;
use shared::{CreateCourseRequest, UpdateCourseRequest};

/// Service for managing the course catalogue
#[derive(Clone)]
pub struct CourseService {
    storage: Arc<dyn CourseStorage>,
}

impl CourseService {
    pub fn new(storage: Arc<dyn CourseStorage>) -> Self {
        Self { storage }
    }

    /// List all courses in insertion order
    pub async fn list_courses(&self) -> ServiceResult<Vec<Course>> {
        info!("Listing all courses");

        let courses = self.storage.list_courses().await?;

        info!("Found {} courses", courses.len());
        Ok(courses)
    }

    /// Get a course by ID
    pub async fn get_course(&self, course_id: i64) -> ServiceResult<Option<Course>> {
        info!("Getting course: {}", course_id);

        let course = self.storage.get_course(course_id).await?;
        if course.is_none() {
            warn!("Course not found: {}", course_id);
        }

        Ok(course)
    }

    /// Validate and insert a new course. The ID is assigned by storage.
    pub async fn create_course(&self, request: CreateCourseRequest) -> ServiceResult<Course> {
        let new_course = NewCourse::parse(request.subject, request.class_number)?;
        info!(
            "Creating course: subject={}, class_number={}",
            new_course.subject, new_course.class_number
        );

        let course_id = self
            .storage
            .store_course(&new_course)
            .await
            .map_err(ServiceError::Write)?;

        info!("Created course with ID: {}", course_id);
        Ok(new_course.with_id(course_id))
    }

    /// Replace every field of an existing course.
    ///
    /// The ID in the body must match `course_id`; that check happens before
    /// storage is consulted, so a mismatch is reported even for unknown IDs.
    pub async fn replace_course(
        &self,
        course_id: i64,
        request: UpdateCourseRequest,
    ) -> ServiceResult<Course> {
        if request.course_id != Some(course_id) {
            return Err(CourseValidationError::IdMismatch {
                path: course_id,
                body: request.course_id,
            }
            .into());
        }

        let course = NewCourse::parse(request.subject, request.class_number)?.with_id(course_id);
        info!("Replacing course: {}", course_id);

        let replaced = self
            .storage
            .replace_course(&course)
            .await
            .map_err(ServiceError::Write)?;

        if !replaced {
            if self.storage.course_exists(course_id).await? {
                return Err(ServiceError::Concurrency {
                    entity: "course",
                    id: course_id,
                });
            }
            warn!("Course not found: {}", course_id);
            return Err(ServiceError::NotFound(format!("Course {} not found", course_id)));
        }

        info!("Replaced course: {}", course_id);
        Ok(course)
    }

    /// Delete a course together with its enrollments
    pub async fn delete_course(&self, course_id: i64) -> ServiceResult<()> {
        info!("Deleting course: {}", course_id);

        if self.storage.get_course(course_id).await?.is_none() {
            warn!("Course not found: {}", course_id);
            return Err(ServiceError::NotFound(format!("Course {} not found", course_id)));
        }

        let deleted = self
            .storage
            .delete_course(course_id)
            .await
            .map_err(ServiceError::Write)?;

        // Removed by someone else between the lookup and the delete
        if !deleted {
            return Err(ServiceError::NotFound(format!("Course {} not found", course_id)));
        }

        info!("Deleted course: {}", course_id);
        Ok(())
    }
}
