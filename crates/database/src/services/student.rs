use crate::entities::{advisors, course_enrollments, courses, students, users};
use models::{
    gpa::{GradedCredit, weighted_gpa},
    role::Role,
};
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ActiveValue::Set, ColumnTrait, ConnectionTrait,
    DatabaseConnection, DbErr, EntityTrait, LoaderTrait, QueryFilter, QueryOrder,
    TransactionTrait,
};
use std::collections::HashMap;

use super::{
    account::{AccountChanges, NewAccount, delete_owner, update_owner},
    missing_related,
};

/// An enrollment together with the course it refers to
#[derive(Debug, Clone, PartialEq)]
pub struct EnrolledCourse {
    pub enrollment: course_enrollments::Model,
    pub course: courses::Model,
}

/// A student with their user row and every enrollment
#[derive(Debug, Clone, PartialEq)]
pub struct StudentRecord {
    pub student: students::Model,
    pub user: users::Model,
    pub enrollments: Vec<EnrolledCourse>,
}

impl StudentRecord {
    /// Credit-weighted GPA over the graded enrollments
    pub fn gpa(&self) -> f64 {
        weighted_gpa(
            self.enrollments
                .iter()
                .map(|e| GradedCredit::new(e.enrollment.grade, e.course.credits)),
        )
    }
}

/// An advisor together with their user row
#[derive(Debug, Clone, PartialEq)]
pub struct AdvisorWithUser {
    pub advisor: advisors::Model,
    pub user: users::Model,
}

/// A student as shown in the full student list
#[derive(Debug, Clone, PartialEq)]
pub struct StudentListing {
    pub record: StudentRecord,
    pub advisor: Option<AdvisorWithUser>,
}

/// Profile fields for a new student
#[derive(Debug, Clone)]
pub struct NewStudent {
    pub major: String,
    pub enrollment_year: i32,
    pub advisor_id: Option<i32>,
}

/// Partial update of a student row; `None` leaves a column untouched
#[derive(Debug, Clone, Default)]
pub struct StudentChanges {
    pub major: Option<String>,
    pub enrollment_year: Option<i32>,
    /// `Some(None)` removes the advisor
    pub advisor_id: Option<Option<i32>>,
}

pub struct StudentService;

impl StudentService {
    /// Get every student with their user, enrollments, and advisor
    pub async fn list(db: &DatabaseConnection) -> Result<Vec<StudentListing>, DbErr> {
        let students = students::Entity::find()
            .order_by_asc(students::Column::Id)
            .all(db)
            .await?;

        // Advisor ids are nullable, so advisors are looked up by hand
        let advisor_ids: Vec<i32> = students.iter().filter_map(|s| s.advisor_id).collect();
        let advisors = advisors::Entity::find()
            .filter(advisors::Column::Id.is_in(advisor_ids))
            .all(db)
            .await?;
        let advisor_users = advisors.load_one(users::Entity, db).await?;

        let mut advisors_by_id: HashMap<i32, AdvisorWithUser> = HashMap::new();
        for (advisor, user) in advisors.into_iter().zip(advisor_users) {
            let user = user.ok_or_else(|| missing_related("user", advisor.user_id))?;
            advisors_by_id.insert(advisor.id, AdvisorWithUser { advisor, user });
        }

        let records = load_records(db, students).await?;

        Ok(records
            .into_iter()
            .map(|record| {
                let advisor = record
                    .student
                    .advisor_id
                    .and_then(|id| advisors_by_id.get(&id).cloned());
                StudentListing { record, advisor }
            })
            .collect())
    }

    /// Get the student owned by the given user, with user and enrollments
    pub async fn find_by_user_id(
        db: &DatabaseConnection,
        user_id: i32,
    ) -> Result<Option<StudentRecord>, DbErr> {
        let student = match students::Entity::find()
            .filter(students::Column::UserId.eq(user_id))
            .one(db)
            .await?
        {
            Some(student) => student,
            None => return Ok(None),
        };

        Ok(load_records(db, vec![student]).await?.pop())
    }

    /// Get the students assigned to an advisor, with user and enrollments
    pub async fn list_by_advisor(
        db: &DatabaseConnection,
        advisor_id: i32,
    ) -> Result<Vec<StudentRecord>, DbErr> {
        let students = students::Entity::find()
            .filter(students::Column::AdvisorId.eq(advisor_id))
            .order_by_asc(students::Column::Id)
            .all(db)
            .await?;

        load_records(db, students).await
    }

    /// Create a user with role `student` and its student profile in one transaction
    pub async fn create(
        db: &DatabaseConnection,
        account: NewAccount,
        profile: NewStudent,
    ) -> Result<(users::Model, students::Model), DbErr> {
        let txn = db.begin().await?;

        let user = account.into_active_model(Role::Student).insert(&txn).await?;
        let student = students::ActiveModel {
            id: NotSet,
            user_id: Set(user.id),
            major: Set(profile.major),
            gpa: Set(None),
            enrollment_year: Set(profile.enrollment_year),
            advisor_id: Set(profile.advisor_id),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;
        Ok((user, student))
    }

    /// Update a student and their user together
    ///
    /// Returns `None` when no student has the given id.
    pub async fn update(
        db: &DatabaseConnection,
        id: i32,
        changes: StudentChanges,
        account: AccountChanges,
    ) -> Result<Option<(students::Model, users::Model)>, DbErr> {
        let txn = db.begin().await?;

        let student = match students::Entity::find_by_id(id).one(&txn).await? {
            Some(student) => student,
            None => return Ok(None),
        };

        let mut active: students::ActiveModel = student.clone().into();
        if let Some(major) = changes.major {
            active.major = Set(major);
        }
        if let Some(enrollment_year) = changes.enrollment_year {
            active.enrollment_year = Set(enrollment_year);
        }
        if let Some(advisor_id) = changes.advisor_id {
            active.advisor_id = Set(advisor_id);
        }
        let student = if active.is_changed() {
            active.update(&txn).await?
        } else {
            student
        };

        let user = update_owner(&txn, student.user_id, account).await?;

        txn.commit().await?;
        Ok(Some((student, user)))
    }

    /// Delete a student by removing the user that owns it
    ///
    /// Returns `false` when no student has the given id.
    pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<bool, DbErr> {
        let Some(student) = students::Entity::find_by_id(id).one(db).await? else {
            return Ok(false);
        };

        delete_owner(db, student.user_id).await?;
        Ok(true)
    }

    /// Enroll a student in a course
    ///
    /// Fails with a unique constraint violation if the pair is already enrolled.
    pub async fn enroll(
        db: &DatabaseConnection,
        student_id: i32,
        course_id: i32,
    ) -> Result<course_enrollments::Model, DbErr> {
        course_enrollments::ActiveModel {
            id: NotSet,
            student_id: Set(student_id),
            course_id: Set(course_id),
            grade: Set(None),
        }
        .insert(db)
        .await
    }

    /// Remove a student from a course
    ///
    /// Returns `false` when the student was not enrolled in the course.
    pub async fn unenroll(
        db: &DatabaseConnection,
        student_id: i32,
        course_id: i32,
    ) -> Result<bool, DbErr> {
        let result = course_enrollments::Entity::delete_many()
            .filter(course_enrollments::Column::StudentId.eq(student_id))
            .filter(course_enrollments::Column::CourseId.eq(course_id))
            .exec(db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

/// Attach users and enrolled courses to a batch of students, preserving order
pub(crate) async fn load_records<C>(
    conn: &C,
    students: Vec<students::Model>,
) -> Result<Vec<StudentRecord>, DbErr>
where
    C: ConnectionTrait,
{
    let users = students.load_one(users::Entity, conn).await?;
    let enrollments = load_enrolled_courses(conn, &students).await?;

    students
        .into_iter()
        .zip(users)
        .zip(enrollments)
        .map(|((student, user), enrollments)| {
            let user = user.ok_or_else(|| missing_related("user", student.user_id))?;
            Ok(StudentRecord {
                student,
                user,
                enrollments,
            })
        })
        .collect()
}

/// Load each student's enrollments along with the enrolled course
async fn load_enrolled_courses<C>(
    conn: &C,
    students: &[students::Model],
) -> Result<Vec<Vec<EnrolledCourse>>, DbErr>
where
    C: ConnectionTrait,
{
    let enrollments = students.load_many(course_enrollments::Entity, conn).await?;

    let flat: Vec<course_enrollments::Model> = enrollments.iter().flatten().cloned().collect();
    let mut courses = flat.load_one(courses::Entity, conn).await?.into_iter();

    enrollments
        .into_iter()
        .map(|group| {
            group
                .into_iter()
                .map(|enrollment| {
                    let course = courses
                        .next()
                        .flatten()
                        .ok_or_else(|| missing_related("course", enrollment.course_id))?;
                    Ok(EnrolledCourse { enrollment, course })
                })
                .collect::<Result<Vec<_>, DbErr>>()
        })
        .collect()
}
