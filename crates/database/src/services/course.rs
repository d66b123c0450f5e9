use crate::entities::{course_enrollments, courses, instructors, students, users};
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ActiveValue::Set, ConnectionTrait, DatabaseConnection,
    DbErr, EntityTrait, LoaderTrait, QueryOrder,
};

use super::missing_related;

/// A course together with the instructor teaching it and that instructor's user row
#[derive(Debug, Clone, PartialEq)]
pub struct CourseWithInstructor {
    pub course: courses::Model,
    pub instructor: instructors::Model,
    pub user: users::Model,
}

/// One enrolled student in a course roster
#[derive(Debug, Clone, PartialEq)]
pub struct RosterEntry {
    pub enrollment: course_enrollments::Model,
    pub student: students::Model,
    pub user: users::Model,
}

/// A course and everyone enrolled in it
#[derive(Debug, Clone, PartialEq)]
pub struct CourseRoster {
    pub course: courses::Model,
    pub enrollments: Vec<RosterEntry>,
}

#[derive(Debug, Clone)]
pub struct NewCourse {
    pub name: String,
    pub credits: i32,
    pub department: String,
    pub instructor_id: i32,
}

/// Partial update of a course row; `None` leaves a column untouched
#[derive(Debug, Clone, Default)]
pub struct CourseChanges {
    pub name: Option<String>,
    pub credits: Option<i32>,
    pub department: Option<String>,
    pub instructor_id: Option<i32>,
}

pub struct CourseService;

impl CourseService {
    /// Get every course with its instructor
    pub async fn list(db: &DatabaseConnection) -> Result<Vec<CourseWithInstructor>, DbErr> {
        let courses = courses::Entity::find()
            .order_by_asc(courses::Column::Id)
            .all(db)
            .await?;

        let instructors = courses.load_one(instructors::Entity, db).await?;
        let instructors = courses
            .iter()
            .zip(instructors)
            .map(|(course, instructor)| {
                instructor.ok_or_else(|| missing_related("instructor", course.instructor_id))
            })
            .collect::<Result<Vec<_>, DbErr>>()?;
        let users = instructors.load_one(users::Entity, db).await?;

        courses
            .into_iter()
            .zip(instructors)
            .zip(users)
            .map(|((course, instructor), user)| {
                let user = user.ok_or_else(|| missing_related("user", instructor.user_id))?;
                Ok(CourseWithInstructor {
                    course,
                    instructor,
                    user,
                })
            })
            .collect()
    }

    pub async fn create(
        db: &DatabaseConnection,
        course: NewCourse,
    ) -> Result<courses::Model, DbErr> {
        courses::ActiveModel {
            id: NotSet,
            name: Set(course.name),
            credits: Set(course.credits),
            department: Set(course.department),
            instructor_id: Set(course.instructor_id),
        }
        .insert(db)
        .await
    }

    /// Update a course, returning it along with its (possibly new) instructor
    ///
    /// Returns `None` when no course has the given id.
    pub async fn update(
        db: &DatabaseConnection,
        id: i32,
        changes: CourseChanges,
    ) -> Result<Option<(courses::Model, instructors::Model)>, DbErr> {
        let Some(course) = courses::Entity::find_by_id(id).one(db).await? else {
            return Ok(None);
        };

        let mut active: courses::ActiveModel = course.clone().into();
        if let Some(name) = changes.name {
            active.name = Set(name);
        }
        if let Some(credits) = changes.credits {
            active.credits = Set(credits);
        }
        if let Some(department) = changes.department {
            active.department = Set(department);
        }
        if let Some(instructor_id) = changes.instructor_id {
            active.instructor_id = Set(instructor_id);
        }
        let course = if active.is_changed() {
            active.update(db).await?
        } else {
            course
        };

        let instructor = instructors::Entity::find_by_id(course.instructor_id)
            .one(db)
            .await?
            .ok_or_else(|| missing_related("instructor", course.instructor_id))?;

        Ok(Some((course, instructor)))
    }

    /// Delete a course; its enrollments go with it
    ///
    /// Returns `false` when no course has the given id.
    pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<bool, DbErr> {
        let result = courses::Entity::delete_by_id(id).exec(db).await?;
        Ok(result.rows_affected > 0)
    }
}

/// Attach each course's enrollments, students, and student users, preserving order
pub(crate) async fn load_rosters<C>(
    conn: &C,
    courses: Vec<courses::Model>,
) -> Result<Vec<CourseRoster>, DbErr>
where
    C: ConnectionTrait,
{
    let enrollments = courses.load_many(course_enrollments::Entity, conn).await?;
    let flat: Vec<course_enrollments::Model> = enrollments.iter().flatten().cloned().collect();

    let students = flat.load_one(students::Entity, conn).await?;
    let students = flat
        .iter()
        .zip(students)
        .map(|(enrollment, student)| {
            student.ok_or_else(|| missing_related("student", enrollment.student_id))
        })
        .collect::<Result<Vec<_>, DbErr>>()?;
    let users = students.load_one(users::Entity, conn).await?;

    let mut entries = flat
        .into_iter()
        .zip(students)
        .zip(users)
        .map(|((enrollment, student), user)| {
            let user = user.ok_or_else(|| missing_related("user", student.user_id))?;
            Ok(RosterEntry {
                enrollment,
                student,
                user,
            })
        })
        .collect::<Result<Vec<_>, DbErr>>()?
        .into_iter();

    Ok(courses
        .into_iter()
        .zip(enrollments)
        .map(|(course, group)| CourseRoster {
            course,
            enrollments: entries.by_ref().take(group.len()).collect(),
        })
        .collect())
}
