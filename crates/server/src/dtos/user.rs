use database::{
    entities::users,
    services::{
        account::{AccountChanges, NewAccount},
        user::UserProfile,
    },
};
use models::role::Role;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{
    advisor::AdvisorRosterResponse, instructor::InstructorWithCoursesResponse,
    staff::StaffResponse, student::StudentWithEnrollmentsResponse,
};

/// Public fields of a user, as returned by login and the user list
#[derive(Debug, Serialize, ToSchema)]
pub struct UserSummary {
    pub id: i32,
    pub name: String,
    #[schema(value_type = String, example = "student")]
    pub role: Role,
    pub email: String,
}

impl From<users::Model> for UserSummary {
    fn from(user: users::Model) -> Self {
        Self {
            id: user.id,
            name: user.name,
            role: user.role,
            email: user.email,
        }
    }
}

/// A user row without its password
#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
    pub id: i32,
    pub name: String,
    pub username: String,
    #[schema(value_type = String, example = "student")]
    pub role: Role,
    pub email: String,
}

impl From<users::Model> for UserResponse {
    fn from(user: users::Model) -> Self {
        Self {
            id: user.id,
            name: user.name,
            username: user.username,
            role: user.role,
            email: user.email,
        }
    }
}

/// A user with every sub-profile key; absent profiles are `null`
#[derive(Debug, Serialize, ToSchema)]
pub struct UserProfileResponse {
    #[serde(flatten)]
    pub user: UserResponse,
    #[serde(rename = "Student")]
    pub student: Option<StudentWithEnrollmentsResponse>,
    #[serde(rename = "Instructor")]
    pub instructor: Option<InstructorWithCoursesResponse>,
    #[serde(rename = "Advisor")]
    pub advisor: Option<AdvisorRosterResponse>,
    #[serde(rename = "Staff")]
    pub staff: Option<StaffResponse>,
}

impl From<UserProfile> for UserProfileResponse {
    fn from(profile: UserProfile) -> Self {
        Self {
            user: profile.user.into(),
            student: profile.student.map(Into::into),
            instructor: profile.instructor.map(Into::into),
            advisor: profile.advisor.map(Into::into),
            staff: profile.staff.map(Into::into),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Account fields required when creating any kind of user
#[derive(Debug, Deserialize, ToSchema)]
pub struct NewAccountRequest {
    pub name: String,
    pub username: String,
    pub password: String,
    pub email: String,
}

impl From<NewAccountRequest> for NewAccount {
    fn from(request: NewAccountRequest) -> Self {
        Self {
            name: request.name,
            username: request.username,
            password: request.password,
            email: request.email,
        }
    }
}

/// Account fields that may be changed alongside a sub-profile
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct AccountChangesRequest {
    pub name: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub email: Option<String>,
}

impl From<AccountChangesRequest> for AccountChanges {
    fn from(request: AccountChangesRequest) -> Self {
        Self {
            name: request.name,
            username: request.username,
            password: request.password,
            email: request.email,
            role: None,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    #[serde(flatten)]
    pub account: NewAccountRequest,
    #[schema(value_type = String, example = "staff")]
    pub role: Role,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    #[serde(flatten)]
    pub account: AccountChangesRequest,
    #[schema(value_type = Option<String>, example = "staff")]
    pub role: Option<Role>,
}

impl From<UpdateUserRequest> for AccountChanges {
    fn from(request: UpdateUserRequest) -> Self {
        let mut changes = AccountChanges::from(request.account);
        changes.role = request.role;
        changes
    }
}
