use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::error::{ServiceError, ServiceResult};
use crate::domain::models::{Course, Enrollment, NewEnrollment, Student};
use crate::storage::{CourseStorage, EnrollmentStorage, StorageError, StudentStorage};
use shared::CreateEnrollmentRequest;

/// Service for StudentCourse rows and the queries that join through them
#[derive(Clone)]
pub struct EnrollmentService {
    enrollments: Arc<dyn EnrollmentStorage>,
    students: Arc<dyn StudentStorage>,
    courses: Arc<dyn CourseStorage>,
}

impl EnrollmentService {
    pub fn new(
        enrollments: Arc<dyn EnrollmentStorage>,
        students: Arc<dyn StudentStorage>,
        courses: Arc<dyn CourseStorage>,
    ) -> Self {
        Self {
            enrollments,
            students,
            courses,
        }
    }

    pub async fn list_enrollments(&self) -> ServiceResult<Vec<Enrollment>> {
        info!("Listing all enrollments");

        let enrollments = self.enrollments.list_enrollments().await?;

        info!("Found {} enrollments", enrollments.len());
        Ok(enrollments)
    }

    /// Enroll a student in a course. Enrolling the same pair twice yields two rows.
    pub async fn enroll(&self, request: CreateEnrollmentRequest) -> ServiceResult<Enrollment> {
        let new_enrollment = NewEnrollment::parse(request.student_id, request.course_id)?;
        info!(
            "Enrolling student {} in course {}",
            new_enrollment.student_id, new_enrollment.course_id
        );

        self.require_student(new_enrollment.student_id).await?;
        self.require_course(new_enrollment.course_id).await?;

        let enrollment_id = match self.enrollments.store_enrollment(&new_enrollment).await {
            Ok(id) => id,
            // Student or course vanished after the existence checks
            Err(StorageError::ForeignKey(detail)) => {
                warn!("Enrollment rejected by foreign key: {}", detail);
                return Err(ServiceError::NotFound(format!(
                    "Student {} or course {} not found",
                    new_enrollment.student_id, new_enrollment.course_id
                )));
            }
            Err(e) => return Err(ServiceError::Write(e)),
        };

        info!("Created enrollment with ID: {}", enrollment_id);
        Ok(new_enrollment.with_id(enrollment_id))
    }

    /// Remove a single enrollment row
    pub async fn withdraw(&self, enrollment_id: i64) -> ServiceResult<()> {
        info!("Deleting enrollment: {}", enrollment_id);

        if self.enrollments.get_enrollment(enrollment_id).await?.is_none() {
            warn!("Enrollment not found: {}", enrollment_id);
            return Err(ServiceError::NotFound(format!("Enrollment {} not found", enrollment_id)));
        }

        let deleted = self
            .enrollments
            .delete_enrollment(enrollment_id)
            .await
            .map_err(ServiceError::Write)?;
        if !deleted {
            return Err(ServiceError::NotFound(format!("Enrollment {} not found", enrollment_id)));
        }

        info!("Deleted enrollment: {}", enrollment_id);
        Ok(())
    }

    /// Courses a student is enrolled in, one entry per enrollment row
    pub async fn courses_for_student(&self, student_id: i64) -> ServiceResult<Vec<Course>> {
        info!("Listing courses for student: {}", student_id);

        self.require_student(student_id).await?;
        Ok(self.courses.list_courses_for_student(student_id).await?)
    }

    /// Students enrolled in a course, one entry per enrollment row
    pub async fn students_for_course(&self, course_id: i64) -> ServiceResult<Vec<Student>> {
        info!("Listing students for course: {}", course_id);

        self.require_course(course_id).await?;
        Ok(self.students.list_students_for_course(course_id).await?)
    }

    async fn require_student(&self, student_id: i64) -> ServiceResult<()> {
        if self.students.student_exists(student_id).await? {
            return Ok(());
        }
        warn!("Student not found: {}", student_id);
        Err(ServiceError::NotFound(format!("Student {} not found", student_id)))
    }

    async fn require_course(&self, course_id: i64) -> ServiceResult<()> {
        if self.courses.course_exists(course_id).await? {
            return Ok(());
        }
        warn!("Course not found: {}", course_id);
        Err(ServiceError::NotFound(format!("Course {} not found", course_id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{NewCourse, NewStudent};
    use crate::storage::test_utils::{Fault, FaultyStorage, FIXTURE_ID};
    use crate::storage::{Connection, DbConnection};
    use chrono::NaiveDate;

    struct TestContext {
        service: EnrollmentService,
        students: Arc<dyn StudentStorage>,
        courses: Arc<dyn CourseStorage>,
    }

    async fn setup_test() -> TestContext {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        let students: Arc<dyn StudentStorage> = Arc::new(db.create_student_repository());
        let courses: Arc<dyn CourseStorage> = Arc::new(db.create_course_repository());
        let service = EnrollmentService::new(
            Arc::new(db.create_enrollment_repository()),
            students.clone(),
            courses.clone(),
        );
        TestContext {
            service,
            students,
            courses,
        }
    }

    fn faulty(fault: Fault) -> EnrollmentService {
        let storage = Arc::new(FaultyStorage::new(fault));
        EnrollmentService::new(storage.clone(), storage.clone(), storage)
    }

    async fn add_student(ctx: &TestContext, name: &str) -> i64 {
        ctx.students
            .store_student(&NewStudent {
                password_hash: "digest".to_string(),
                full_name: name.to_string(),
                date_of_birth: NaiveDate::from_ymd_opt(2001, 4, 12).unwrap(),
            })
            .await
            .unwrap()
    }

    async fn add_course(ctx: &TestContext, subject: &str, class_number: i32) -> i64 {
        ctx.courses
            .store_course(&NewCourse {
                subject: subject.to_string(),
                class_number,
            })
            .await
            .unwrap()
    }

    fn request(student_id: i64, course_id: i64) -> CreateEnrollmentRequest {
        CreateEnrollmentRequest {
            student_id: Some(student_id),
            course_id: Some(course_id),
        }
    }

    #[tokio::test]
    async fn test_enroll_and_list() {
        let ctx = setup_test().await;
        let student_id = add_student(&ctx, "Alice Smith").await;
        let course_id = add_course(&ctx, "CSE", 220).await;

        let enrollment = ctx.service.enroll(request(student_id, course_id)).await.unwrap();
        assert_eq!(enrollment.student_id, student_id);
        assert_eq!(enrollment.course_id, course_id);

        let all = ctx.service.list_enrollments().await.unwrap();
        assert_eq!(all, vec![enrollment]);
    }

    #[tokio::test]
    async fn test_enroll_requires_both_ids() {
        let ctx = setup_test().await;

        let result = ctx
            .service
            .enroll(CreateEnrollmentRequest {
                student_id: Some(1),
                course_id: None,
            })
            .await;
        assert!(matches!(result, Err(ServiceError::Validation(_))));
    }

    #[tokio::test]
    async fn test_enroll_unknown_student_or_course_is_not_found() {
        let ctx = setup_test().await;
        let student_id = add_student(&ctx, "Alice Smith").await;
        let course_id = add_course(&ctx, "CSE", 220).await;

        let result = ctx.service.enroll(request(student_id + 100, course_id)).await;
        assert!(matches!(result, Err(ServiceError::NotFound(_))));

        let result = ctx.service.enroll(request(student_id, course_id + 100)).await;
        assert!(matches!(result, Err(ServiceError::NotFound(_))));

        assert!(ctx.service.list_enrollments().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_same_pair_may_enroll_twice() {
        let ctx = setup_test().await;
        let student_id = add_student(&ctx, "Alice Smith").await;
        let course_id = add_course(&ctx, "PHY", 101).await;

        let first = ctx.service.enroll(request(student_id, course_id)).await.unwrap();
        let second = ctx.service.enroll(request(student_id, course_id)).await.unwrap();
        assert_ne!(first.id, second.id);

        let courses = ctx.service.courses_for_student(student_id).await.unwrap();
        assert_eq!(courses.len(), 2);
    }

    #[tokio::test]
    async fn test_join_queries() {
        let ctx = setup_test().await;
        let alice = add_student(&ctx, "Alice Smith").await;
        let bob = add_student(&ctx, "Bob Johnson").await;
        let cse = add_course(&ctx, "CSE", 220).await;
        let bio = add_course(&ctx, "BIO", 101).await;

        ctx.service.enroll(request(alice, cse)).await.unwrap();
        ctx.service.enroll(request(alice, bio)).await.unwrap();
        ctx.service.enroll(request(bob, cse)).await.unwrap();

        let subjects: Vec<String> = ctx
            .service
            .courses_for_student(alice)
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.subject)
            .collect();
        assert_eq!(subjects, vec!["CSE", "BIO"]);

        let names: Vec<String> = ctx
            .service
            .students_for_course(cse)
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.full_name)
            .collect();
        assert_eq!(names, vec!["Alice Smith", "Bob Johnson"]);

        assert!(ctx.service.students_for_course(bio + 100).await.is_err());
        assert!(matches!(
            ctx.service.courses_for_student(bob + 100).await,
            Err(ServiceError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_withdraw_twice() {
        let ctx = setup_test().await;
        let student_id = add_student(&ctx, "Alice Smith").await;
        let course_id = add_course(&ctx, "EGL", 102).await;
        let enrollment = ctx.service.enroll(request(student_id, course_id)).await.unwrap();

        ctx.service.withdraw(enrollment.id).await.unwrap();
        assert!(ctx.service.courses_for_student(student_id).await.unwrap().is_empty());

        let result = ctx.service.withdraw(enrollment.id).await;
        assert!(matches!(result, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_deleting_course_removes_its_enrollments() {
        let ctx = setup_test().await;
        let student_id = add_student(&ctx, "Alice Smith").await;
        let course_id = add_course(&ctx, "MAT", 201).await;
        ctx.service.enroll(request(student_id, course_id)).await.unwrap();

        ctx.courses.delete_course(course_id).await.unwrap();

        assert!(ctx.service.list_enrollments().await.unwrap().is_empty());
        assert!(ctx.service.courses_for_student(student_id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_storage_failures() {
        let service = faulty(Fault::WriteFailure);
        let result = service.enroll(request(FIXTURE_ID, FIXTURE_ID)).await;
        assert!(matches!(result, Err(ServiceError::Write(_))));
        assert!(matches!(service.withdraw(FIXTURE_ID).await, Err(ServiceError::Write(_))));

        let service = faulty(Fault::ReadFailure);
        assert!(matches!(service.list_enrollments().await, Err(ServiceError::Storage(_))));
        assert!(matches!(
            service.enroll(request(FIXTURE_ID, FIXTURE_ID)).await,
            Err(ServiceError::Storage(_))
        ));
    }
}
