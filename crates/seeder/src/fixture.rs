//! The fixed data set loaded by the `seed` binary

use database::entities::{advisors, course_enrollments, courses, instructors, staff, students, users};
use futures::future::try_join_all;
use log::info;
use models::role::Role;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, DatabaseConnection, DbErr};

/// Password shared by every fixture account
pub const PASSWORD: &str = "password123";

/// Department shared by every fixture course
pub const DEPARTMENT: &str = "Computer Science";

struct InstructorFixture {
    user_id: i32,
    instructor_id: i32,
    name: &'static str,
    username: &'static str,
    specialization: &'static str,
    office_hours: &'static str,
}

struct StaffFixture {
    user_id: i32,
    staff_id: i32,
    name: &'static str,
    username: &'static str,
    department: &'static str,
}

struct CourseFixture {
    id: i32,
    name: &'static str,
    credits: i32,
    instructor_id: i32,
}

struct StudentFixture {
    user_id: i32,
    student_id: i32,
    name: &'static str,
    username: &'static str,
    gpa: f64,
    /// `(enrollment id, course id, grade)`
    enrollments: &'static [(i32, i32, f64)],
}

const ADVISOR_USER_ID: i32 = 30;
const ADVISOR_ID: i32 = 1;

const INSTRUCTORS: [InstructorFixture; 2] = [
    InstructorFixture {
        user_id: 10,
        instructor_id: 1,
        name: "Prof. John Doe",
        username: "jdoe",
        specialization: "Database Systems",
        office_hours: "Mon/Wed 2-4pm",
    },
    InstructorFixture {
        user_id: 11,
        instructor_id: 2,
        name: "Dr. Sarah Williams",
        username: "swilliams",
        specialization: "Software Engineering",
        office_hours: "Tue/Thu 1-3pm",
    },
];

const STAFF: [StaffFixture; 2] = [
    StaffFixture {
        user_id: 20,
        staff_id: 1,
        name: "Mary Johnson",
        username: "mjohnson",
        department: "Registrar's Office",
    },
    StaffFixture {
        user_id: 21,
        staff_id: 2,
        name: "Robert Brown",
        username: "rbrown",
        department: "Student Affairs",
    },
];

const COURSES: [CourseFixture; 3] = [
    CourseFixture {
        id: 1,
        name: "Advanced Database Systems",
        credits: 3,
        instructor_id: 1,
    },
    CourseFixture {
        id: 2,
        name: "Software Engineering Principles",
        credits: 3,
        instructor_id: 2,
    },
    CourseFixture {
        id: 3,
        name: "Data Structures",
        credits: 4,
        instructor_id: 1,
    },
];

const STUDENTS: [StudentFixture; 2] = [
    StudentFixture {
        user_id: 1,
        student_id: 1,
        name: "Alice Johnson",
        username: "ajohnson",
        gpa: 3.8,
        enrollments: &[(1, 1, 3.7), (2, 2, 3.9)],
    },
    StudentFixture {
        user_id: 2,
        student_id: 2,
        name: "Bob Wilson",
        username: "bwilson",
        gpa: 3.5,
        enrollments: &[(3, 2, 3.6), (4, 3, 3.4)],
    },
];

const ENROLLMENT_YEAR: i32 = 2023;

/// Inserts the fixture graph into empty tables
pub async fn insert(db: &DatabaseConnection) -> Result<(), DbErr> {
    info!("Creating advisor");
    insert_user(db, ADVISOR_USER_ID, "Dr. Jane Smith", "jsmith", Role::Advisor).await?;
    advisors::ActiveModel {
        id: Set(ADVISOR_ID),
        user_id: Set(ADVISOR_USER_ID),
        department: Set(DEPARTMENT.to_string()),
    }
    .insert(db)
    .await?;

    info!("Creating {} instructors", INSTRUCTORS.len());
    try_join_all(INSTRUCTORS.iter().map(|fixture| async move {
        insert_user(db, fixture.user_id, fixture.name, fixture.username, Role::Instructor).await?;
        instructors::ActiveModel {
            id: Set(fixture.instructor_id),
            user_id: Set(fixture.user_id),
            specialization: Set(fixture.specialization.to_string()),
            office_hours: Set(fixture.office_hours.to_string()),
        }
        .insert(db)
        .await
    }))
    .await?;

    info!("Creating {} staff members", STAFF.len());
    try_join_all(STAFF.iter().map(|fixture| async move {
        insert_user(db, fixture.user_id, fixture.name, fixture.username, Role::Staff).await?;
        staff::ActiveModel {
            id: Set(fixture.staff_id),
            user_id: Set(fixture.user_id),
            department: Set(fixture.department.to_string()),
        }
        .insert(db)
        .await
    }))
    .await?;

    info!("Creating {} courses", COURSES.len());
    try_join_all(COURSES.iter().map(|fixture| {
        courses::ActiveModel {
            id: Set(fixture.id),
            name: Set(fixture.name.to_string()),
            credits: Set(fixture.credits),
            department: Set(DEPARTMENT.to_string()),
            instructor_id: Set(fixture.instructor_id),
        }
        .insert(db)
    }))
    .await?;

    info!("Creating {} students with enrollments", STUDENTS.len());
    try_join_all(STUDENTS.iter().map(|fixture| insert_student(db, fixture))).await?;

    Ok(())
}

async fn insert_student(db: &DatabaseConnection, fixture: &StudentFixture) -> Result<(), DbErr> {
    insert_user(db, fixture.user_id, fixture.name, fixture.username, Role::Student).await?;
    students::ActiveModel {
        id: Set(fixture.student_id),
        user_id: Set(fixture.user_id),
        major: Set(DEPARTMENT.to_string()),
        gpa: Set(Some(fixture.gpa)),
        enrollment_year: Set(ENROLLMENT_YEAR),
        advisor_id: Set(Some(ADVISOR_ID)),
    }
    .insert(db)
    .await?;

    for &(id, course_id, grade) in fixture.enrollments {
        course_enrollments::ActiveModel {
            id: Set(id),
            student_id: Set(fixture.student_id),
            course_id: Set(course_id),
            grade: Set(Some(grade)),
        }
        .insert(db)
        .await?;
    }

    Ok(())
}

async fn insert_user(
    db: &DatabaseConnection,
    id: i32,
    name: &str,
    username: &str,
    role: Role,
) -> Result<users::Model, DbErr> {
    users::ActiveModel {
        id: Set(id),
        name: Set(name.to_string()),
        username: Set(username.to_string()),
        password: Set(PASSWORD.to_string()),
        role: Set(role),
        email: Set(format!("{username}@university.edu")),
    }
    .insert(db)
    .await
}
