use database::{
    entities::{course_enrollments, courses, instructors},
    services::course::{CourseChanges, CourseRoster, CourseWithInstructor, NewCourse, RosterEntry},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{
    instructor::{InstructorResponse, InstructorWithUserResponse},
    student::StudentWithUserResponse,
};

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseResponse {
    pub id: i32,
    pub name: String,
    pub credits: i32,
    pub department: String,
    pub instructor_id: i32,
}

impl From<courses::Model> for CourseResponse {
    fn from(course: courses::Model) -> Self {
        Self {
            id: course.id,
            name: course.name,
            credits: course.credits,
            department: course.department,
            instructor_id: course.instructor_id,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentResponse {
    pub id: i32,
    pub student_id: i32,
    pub course_id: i32,
    pub grade: Option<f64>,
}

impl From<course_enrollments::Model> for EnrollmentResponse {
    fn from(enrollment: course_enrollments::Model) -> Self {
        Self {
            id: enrollment.id,
            student_id: enrollment.student_id,
            course_id: enrollment.course_id,
            grade: enrollment.grade,
        }
    }
}

/// A course in the catalogue listing, with its instructor and their user
#[derive(Debug, Serialize, ToSchema)]
pub struct CourseWithInstructorResponse {
    #[serde(flatten)]
    pub course: CourseResponse,
    pub instructor: InstructorWithUserResponse,
}

impl From<CourseWithInstructor> for CourseWithInstructorResponse {
    fn from(listing: CourseWithInstructor) -> Self {
        Self {
            course: listing.course.into(),
            instructor: (listing.instructor, listing.user).into(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UpdatedCourseResponse {
    #[serde(flatten)]
    pub course: CourseResponse,
    pub instructor: InstructorResponse,
}

impl From<(courses::Model, instructors::Model)> for UpdatedCourseResponse {
    fn from((course, instructor): (courses::Model, instructors::Model)) -> Self {
        Self {
            course: course.into(),
            instructor: instructor.into(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RosterEntryResponse {
    #[serde(flatten)]
    pub enrollment: EnrollmentResponse,
    pub student: StudentWithUserResponse,
}

impl From<RosterEntry> for RosterEntryResponse {
    fn from(entry: RosterEntry) -> Self {
        Self {
            enrollment: entry.enrollment.into(),
            student: (entry.student, entry.user).into(),
        }
    }
}

/// A course with every enrollment and the enrolled students
#[derive(Debug, Serialize, ToSchema)]
pub struct CourseRosterResponse {
    #[serde(flatten)]
    pub course: CourseResponse,
    pub enrollments: Vec<RosterEntryResponse>,
}

impl From<CourseRoster> for CourseRosterResponse {
    fn from(roster: CourseRoster) -> Self {
        Self {
            course: roster.course.into(),
            enrollments: roster.enrollments.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseRequest {
    pub name: String,
    pub credits: i32,
    pub department: String,
    pub instructor_id: i32,
}

impl From<CreateCourseRequest> for NewCourse {
    fn from(request: CreateCourseRequest) -> Self {
        Self {
            name: request.name,
            credits: request.credits,
            department: request.department,
            instructor_id: request.instructor_id,
        }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCourseRequest {
    pub name: Option<String>,
    pub credits: Option<i32>,
    pub department: Option<String>,
    pub instructor_id: Option<i32>,
}

impl From<UpdateCourseRequest> for CourseChanges {
    fn from(request: UpdateCourseRequest) -> Self {
        Self {
            name: request.name,
            credits: request.credits,
            department: request.department,
            instructor_id: request.instructor_id,
        }
    }
}
