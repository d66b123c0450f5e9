use crate::entities::{courses, instructors, students, users};
use models::role::Role;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ActiveValue::Set, ColumnTrait, DatabaseConnection,
    DbErr, EntityTrait, LoaderTrait, PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use std::collections::HashMap;

use super::{
    account::{AccountChanges, NewAccount, delete_owner, update_owner},
    course::{CourseRoster, load_rosters},
    missing_related,
};

/// Outcome of [`InstructorService::delete`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstructorDeletion {
    Deleted,
    NotFound,
    /// Courses still reference the instructor; holds how many
    StillTeaching(u64),
}

/// An instructor with their user row and the courses they teach
#[derive(Debug, Clone, PartialEq)]
pub struct InstructorCourses {
    pub instructor: instructors::Model,
    pub user: users::Model,
    pub courses: Vec<courses::Model>,
}

/// An instructor with their user row and a roster for every course they teach
#[derive(Debug, Clone, PartialEq)]
pub struct InstructorRecord {
    pub instructor: instructors::Model,
    pub user: users::Model,
    pub courses: Vec<CourseRoster>,
}

/// A student taking at least one of an instructor's courses
#[derive(Debug, Clone, PartialEq)]
pub struct TaughtStudent {
    pub student: students::Model,
    pub user: users::Model,
    pub course_name: String,
}

#[derive(Debug, Clone)]
pub struct NewInstructor {
    pub specialization: String,
    pub office_hours: String,
}

/// Partial update of an instructor row; `None` leaves a column untouched
#[derive(Debug, Clone, Default)]
pub struct InstructorChanges {
    pub specialization: Option<String>,
    pub office_hours: Option<String>,
}

pub struct InstructorService;

impl InstructorService {
    /// Get every instructor with their user and courses
    pub async fn list(db: &DatabaseConnection) -> Result<Vec<InstructorCourses>, DbErr> {
        let instructors = instructors::Entity::find()
            .order_by_asc(instructors::Column::Id)
            .all(db)
            .await?;

        let users = instructors.load_one(users::Entity, db).await?;
        let courses = instructors.load_many(courses::Entity, db).await?;

        instructors
            .into_iter()
            .zip(users)
            .zip(courses)
            .map(|((instructor, user), courses)| {
                let user = user.ok_or_else(|| missing_related("user", instructor.user_id))?;
                Ok(InstructorCourses {
                    instructor,
                    user,
                    courses,
                })
            })
            .collect()
    }

    /// Get the instructor owned by the given user, with rosters for each course
    pub async fn find_by_user_id(
        db: &DatabaseConnection,
        user_id: i32,
    ) -> Result<Option<InstructorRecord>, DbErr> {
        let Some(instructor) = instructors::Entity::find()
            .filter(instructors::Column::UserId.eq(user_id))
            .one(db)
            .await?
        else {
            return Ok(None);
        };

        let user = users::Entity::find_by_id(instructor.user_id)
            .one(db)
            .await?
            .ok_or_else(|| missing_related("user", instructor.user_id))?;
        let courses = Self::courses_by_instructor(db, instructor.id).await?;

        Ok(Some(InstructorRecord {
            instructor,
            user,
            courses,
        }))
    }

    /// Get the courses taught by an instructor, each with its roster
    pub async fn courses_by_instructor(
        db: &DatabaseConnection,
        instructor_id: i32,
    ) -> Result<Vec<CourseRoster>, DbErr> {
        let courses = courses::Entity::find()
            .filter(courses::Column::InstructorId.eq(instructor_id))
            .order_by_asc(courses::Column::Id)
            .all(db)
            .await?;

        load_rosters(db, courses).await
    }

    /// Get every distinct student taking a course from the instructor owned by the given user
    ///
    /// Returns `None` when the user has no instructor profile.
    pub async fn students_of(
        db: &DatabaseConnection,
        user_id: i32,
    ) -> Result<Option<Vec<TaughtStudent>>, DbErr> {
        Ok(Self::find_by_user_id(db, user_id)
            .await?
            .map(|record| distinct_students(record.courses)))
    }

    /// Create a user with role `instructor` and its instructor profile in one transaction
    pub async fn create(
        db: &DatabaseConnection,
        account: NewAccount,
        profile: NewInstructor,
    ) -> Result<(users::Model, instructors::Model), DbErr> {
        let txn = db.begin().await?;

        let user = account
            .into_active_model(Role::Instructor)
            .insert(&txn)
            .await?;
        let instructor = instructors::ActiveModel {
            id: NotSet,
            user_id: Set(user.id),
            specialization: Set(profile.specialization),
            office_hours: Set(profile.office_hours),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;
        Ok((user, instructor))
    }

    /// Update an instructor and their user together
    ///
    /// Returns `None` when no instructor has the given id.
    pub async fn update(
        db: &DatabaseConnection,
        id: i32,
        changes: InstructorChanges,
        account: AccountChanges,
    ) -> Result<Option<(instructors::Model, users::Model)>, DbErr> {
        let txn = db.begin().await?;

        let Some(instructor) = instructors::Entity::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        let mut active: instructors::ActiveModel = instructor.clone().into();
        if let Some(specialization) = changes.specialization {
            active.specialization = Set(specialization);
        }
        if let Some(office_hours) = changes.office_hours {
            active.office_hours = Set(office_hours);
        }
        let instructor = if active.is_changed() {
            active.update(&txn).await?
        } else {
            instructor
        };

        let user = update_owner(&txn, instructor.user_id, account).await?;

        txn.commit().await?;
        Ok(Some((instructor, user)))
    }

    /// Delete an instructor by removing the user that owns it
    ///
    /// Nothing is deleted while the instructor still teaches a course.
    pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<InstructorDeletion, DbErr> {
        let Some(instructor) = instructors::Entity::find_by_id(id).one(db).await? else {
            return Ok(InstructorDeletion::NotFound);
        };

        let courses = courses::Entity::find()
            .filter(courses::Column::InstructorId.eq(id))
            .count(db)
            .await?;
        if courses > 0 {
            return Ok(InstructorDeletion::StillTeaching(courses));
        }

        delete_owner(db, instructor.user_id).await?;
        Ok(InstructorDeletion::Deleted)
    }
}

/// Flattens course rosters into one entry per student, keyed by the student's user id
///
/// A student enrolled in several of the courses keeps the position of their
/// first enrollment and the course name of their last one.
pub fn distinct_students(rosters: Vec<CourseRoster>) -> Vec<TaughtStudent> {
    let mut students: Vec<TaughtStudent> = Vec::new();
    let mut positions: HashMap<i32, usize> = HashMap::new();

    for roster in rosters {
        for entry in roster.enrollments {
            let taught = TaughtStudent {
                course_name: roster.course.name.clone(),
                student: entry.student,
                user: entry.user,
            };

            match positions.get(&taught.student.user_id) {
                Some(&index) => students[index] = taught,
                None => {
                    positions.insert(taught.student.user_id, students.len());
                    students.push(taught);
                }
            }
        }
    }

    students
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        entities::course_enrollments,
        services::course::{CourseRoster, RosterEntry},
    };

    fn course(id: i32, name: &str) -> courses::Model {
        courses::Model {
            id,
            name: name.to_string(),
            credits: 3,
            department: "Computer Science".to_string(),
            instructor_id: 1,
        }
    }

    fn entry(student_id: i32, user_id: i32, course_id: i32) -> RosterEntry {
        RosterEntry {
            enrollment: course_enrollments::Model {
                id: student_id * 100 + course_id,
                student_id,
                course_id,
                grade: None,
            },
            student: students::Model {
                id: student_id,
                user_id,
                major: "Computer Science".to_string(),
                gpa: None,
                enrollment_year: 2023,
                advisor_id: None,
            },
            user: users::Model {
                id: user_id,
                name: format!("Student {user_id}"),
                username: format!("student{user_id}"),
                password: "password123".to_string(),
                role: Role::Student,
                email: format!("student{user_id}@university.edu"),
            },
        }
    }

    #[test]
    fn lists_each_student_once() {
        let rosters = vec![
            CourseRoster {
                course: course(1, "Advanced Database Systems"),
                enrollments: vec![entry(1, 1, 1), entry(2, 2, 1)],
            },
            CourseRoster {
                course: course(3, "Data Structures"),
                enrollments: vec![entry(2, 2, 3)],
            },
        ];

        let students = distinct_students(rosters);
        let user_ids: Vec<i32> = students.iter().map(|s| s.user.id).collect();

        assert_eq!(user_ids, vec![1, 2]);
    }

    #[test]
    fn last_course_name_wins() {
        let rosters = vec![
            CourseRoster {
                course: course(1, "Advanced Database Systems"),
                enrollments: vec![entry(2, 2, 1)],
            },
            CourseRoster {
                course: course(3, "Data Structures"),
                enrollments: vec![entry(2, 2, 3)],
            },
        ];

        let students = distinct_students(rosters);

        assert_eq!(students.len(), 1);
        assert_eq!(students[0].course_name, "Data Structures");
    }

    #[test]
    fn empty_rosters_have_no_students() {
        let rosters = vec![CourseRoster {
            course: course(1, "Advanced Database Systems"),
            enrollments: vec![],
        }];

        assert!(distinct_students(rosters).is_empty());
        assert!(distinct_students(vec![]).is_empty());
    }
}
