use database::{
    entities::{courses, instructors, users},
    services::{
        account::{AccountChanges, NewAccount},
        instructor::{
            InstructorChanges, InstructorCourses, InstructorRecord, NewInstructor, TaughtStudent,
        },
    },
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{
    course::{CourseResponse, CourseRosterResponse},
    student::StudentResponse,
    user::{AccountChangesRequest, NewAccountRequest, UserResponse},
};

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InstructorResponse {
    pub id: i32,
    pub user_id: i32,
    pub specialization: String,
    pub office_hours: String,
}

impl From<instructors::Model> for InstructorResponse {
    fn from(instructor: instructors::Model) -> Self {
        Self {
            id: instructor.id,
            user_id: instructor.user_id,
            specialization: instructor.specialization,
            office_hours: instructor.office_hours,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct InstructorWithUserResponse {
    #[serde(flatten)]
    pub instructor: InstructorResponse,
    pub user: UserResponse,
}

impl From<(instructors::Model, users::Model)> for InstructorWithUserResponse {
    fn from((instructor, user): (instructors::Model, users::Model)) -> Self {
        Self {
            instructor: instructor.into(),
            user: user.into(),
        }
    }
}

/// The instructor profile of a user, with the courses it teaches
#[derive(Debug, Serialize, ToSchema)]
pub struct InstructorWithCoursesResponse {
    #[serde(flatten)]
    pub instructor: InstructorResponse,
    pub courses: Vec<CourseResponse>,
}

impl From<(instructors::Model, Vec<courses::Model>)> for InstructorWithCoursesResponse {
    fn from((instructor, courses): (instructors::Model, Vec<courses::Model>)) -> Self {
        Self {
            instructor: instructor.into(),
            courses: courses.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct InstructorCoursesResponse {
    #[serde(flatten)]
    pub instructor: InstructorResponse,
    pub user: UserResponse,
    pub courses: Vec<CourseResponse>,
}

impl From<InstructorCourses> for InstructorCoursesResponse {
    fn from(listing: InstructorCourses) -> Self {
        Self {
            instructor: listing.instructor.into(),
            user: listing.user.into(),
            courses: listing.courses.into_iter().map(Into::into).collect(),
        }
    }
}

/// An instructor with every course roster it teaches
#[derive(Debug, Serialize, ToSchema)]
pub struct InstructorDetailResponse {
    #[serde(flatten)]
    pub instructor: InstructorResponse,
    pub user: UserResponse,
    pub courses: Vec<CourseRosterResponse>,
}

impl From<InstructorRecord> for InstructorDetailResponse {
    fn from(record: InstructorRecord) -> Self {
        Self {
            instructor: record.instructor.into(),
            user: record.user.into(),
            courses: record.courses.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaughtStudentResponse {
    #[serde(flatten)]
    pub student: StudentResponse,
    pub user: UserResponse,
    pub course_name: String,
}

impl From<TaughtStudent> for TaughtStudentResponse {
    fn from(taught: TaughtStudent) -> Self {
        Self {
            student: taught.student.into(),
            user: taught.user.into(),
            course_name: taught.course_name,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreatedInstructorResponse {
    #[serde(flatten)]
    pub user: UserResponse,
    #[serde(rename = "Instructor")]
    pub instructor: InstructorResponse,
}

impl From<(users::Model, instructors::Model)> for CreatedInstructorResponse {
    fn from((user, instructor): (users::Model, instructors::Model)) -> Self {
        Self {
            user: user.into(),
            instructor: instructor.into(),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateInstructorRequest {
    #[serde(flatten)]
    pub account: NewAccountRequest,
    pub specialization: String,
    pub office_hours: String,
}

impl CreateInstructorRequest {
    pub fn into_parts(self) -> (NewAccount, NewInstructor) {
        let profile = NewInstructor {
            specialization: self.specialization,
            office_hours: self.office_hours,
        };

        (self.account.into(), profile)
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInstructorRequest {
    #[serde(flatten)]
    pub account: AccountChangesRequest,
    pub specialization: Option<String>,
    pub office_hours: Option<String>,
}

impl UpdateInstructorRequest {
    pub fn into_parts(self) -> (InstructorChanges, AccountChanges) {
        let changes = InstructorChanges {
            specialization: self.specialization,
            office_hours: self.office_hours,
        };

        (changes, self.account.into())
    }
}
