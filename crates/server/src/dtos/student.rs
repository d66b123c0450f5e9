use database::{
    entities::{students, users},
    services::{
        account::{AccountChanges, NewAccount},
        student::{EnrolledCourse, NewStudent, StudentChanges, StudentListing, StudentRecord},
    },
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{
    advisor::AdvisorWithUserResponse,
    course::{CourseResponse, EnrollmentResponse},
    user::{AccountChangesRequest, NewAccountRequest, UserResponse},
};

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentResponse {
    pub id: i32,
    pub user_id: i32,
    pub major: String,
    pub gpa: Option<f64>,
    pub enrollment_year: i32,
    pub advisor_id: Option<i32>,
}

impl From<students::Model> for StudentResponse {
    fn from(student: students::Model) -> Self {
        Self {
            id: student.id,
            user_id: student.user_id,
            major: student.major,
            gpa: student.gpa,
            enrollment_year: student.enrollment_year,
            advisor_id: student.advisor_id,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StudentWithUserResponse {
    #[serde(flatten)]
    pub student: StudentResponse,
    pub user: UserResponse,
}

impl From<(students::Model, users::Model)> for StudentWithUserResponse {
    fn from((student, user): (students::Model, users::Model)) -> Self {
        Self {
            student: student.into(),
            user: user.into(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EnrolledCourseResponse {
    #[serde(flatten)]
    pub enrollment: EnrollmentResponse,
    pub course: CourseResponse,
}

impl From<EnrolledCourse> for EnrolledCourseResponse {
    fn from(enrolled: EnrolledCourse) -> Self {
        Self {
            enrollment: enrolled.enrollment.into(),
            course: enrolled.course.into(),
        }
    }
}

/// A student with their user and every enrollment with its course
///
/// The conversion keeps the stored `gpa`; use [`Self::with_computed_gpa`]
/// for the detail view.
#[derive(Debug, Serialize, ToSchema)]
pub struct StudentWithEnrollmentsResponse {
    #[serde(flatten)]
    pub student: StudentResponse,
    pub user: UserResponse,
    pub enrollments: Vec<EnrolledCourseResponse>,
}

impl StudentWithEnrollmentsResponse {
    pub fn with_computed_gpa(record: StudentRecord) -> Self {
        let gpa = record.gpa();
        let mut response = Self::from(record);
        response.student.gpa = Some(gpa);
        response
    }
}

impl From<StudentRecord> for StudentWithEnrollmentsResponse {
    fn from(record: StudentRecord) -> Self {
        Self {
            student: record.student.into(),
            user: record.user.into(),
            enrollments: record.enrollments.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StudentListingResponse {
    #[serde(flatten)]
    pub record: StudentWithEnrollmentsResponse,
    pub advisor: Option<AdvisorWithUserResponse>,
}

impl From<StudentListing> for StudentListingResponse {
    fn from(listing: StudentListing) -> Self {
        Self {
            record: listing.record.into(),
            advisor: listing.advisor.map(Into::into),
        }
    }
}

/// The user created for a new student, with the student nested under it
#[derive(Debug, Serialize, ToSchema)]
pub struct CreatedStudentResponse {
    #[serde(flatten)]
    pub user: UserResponse,
    #[serde(rename = "Student")]
    pub student: StudentResponse,
}

impl From<(users::Model, students::Model)> for CreatedStudentResponse {
    fn from((user, student): (users::Model, students::Model)) -> Self {
        Self {
            user: user.into(),
            student: student.into(),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudentRequest {
    #[serde(flatten)]
    pub account: NewAccountRequest,
    pub major: String,
    pub enrollment_year: i32,
    pub advisor_id: Option<i32>,
}

impl CreateStudentRequest {
    pub fn into_parts(self) -> (NewAccount, NewStudent) {
        let profile = NewStudent {
            major: self.major,
            enrollment_year: self.enrollment_year,
            advisor_id: self.advisor_id,
        };

        (self.account.into(), profile)
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStudentRequest {
    #[serde(flatten)]
    pub account: AccountChangesRequest,
    pub major: Option<String>,
    pub enrollment_year: Option<i32>,
    /// `null` removes the advisor; omit the field to keep it
    #[serde(default, deserialize_with = "super::explicit")]
    #[schema(value_type = Option<i32>)]
    pub advisor_id: Option<Option<i32>>,
}

impl UpdateStudentRequest {
    pub fn into_parts(self) -> (StudentChanges, AccountChanges) {
        let changes = StudentChanges {
            major: self.major,
            enrollment_year: self.enrollment_year,
            advisor_id: self.advisor_id,
        };

        (changes, self.account.into())
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnrollRequest {
    pub course_id: i32,
}
