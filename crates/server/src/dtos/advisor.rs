use database::{
    entities::{advisors, users},
    services::{
        account::{AccountChanges, NewAccount},
        advisor::{AdvisorChanges, AdvisorStudents, NewAdvisor},
        student::AdvisorWithUser,
        user::AdvisorRoster,
    },
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{
    student::{StudentResponse, StudentWithEnrollmentsResponse},
    user::{AccountChangesRequest, NewAccountRequest, UserResponse},
};

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdvisorResponse {
    pub id: i32,
    pub user_id: i32,
    pub department: String,
}

impl From<advisors::Model> for AdvisorResponse {
    fn from(advisor: advisors::Model) -> Self {
        Self {
            id: advisor.id,
            user_id: advisor.user_id,
            department: advisor.department,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AdvisorWithUserResponse {
    #[serde(flatten)]
    pub advisor: AdvisorResponse,
    pub user: UserResponse,
}

impl From<(advisors::Model, users::Model)> for AdvisorWithUserResponse {
    fn from((advisor, user): (advisors::Model, users::Model)) -> Self {
        Self {
            advisor: advisor.into(),
            user: user.into(),
        }
    }
}

impl From<AdvisorWithUser> for AdvisorWithUserResponse {
    fn from(advisor: AdvisorWithUser) -> Self {
        (advisor.advisor, advisor.user).into()
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AdvisorStudentsResponse {
    #[serde(flatten)]
    pub advisor: AdvisorResponse,
    pub user: UserResponse,
    pub students: Vec<StudentResponse>,
}

impl From<AdvisorStudents> for AdvisorStudentsResponse {
    fn from(listing: AdvisorStudents) -> Self {
        Self {
            advisor: listing.advisor.into(),
            user: listing.user.into(),
            students: listing.students.into_iter().map(Into::into).collect(),
        }
    }
}

/// The advisor profile of a user, with each advisee and their enrollments
#[derive(Debug, Serialize, ToSchema)]
pub struct AdvisorRosterResponse {
    #[serde(flatten)]
    pub advisor: AdvisorResponse,
    pub students: Vec<StudentWithEnrollmentsResponse>,
}

impl From<AdvisorRoster> for AdvisorRosterResponse {
    fn from(roster: AdvisorRoster) -> Self {
        Self {
            advisor: roster.advisor.into(),
            students: roster.students.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreatedAdvisorResponse {
    #[serde(flatten)]
    pub user: UserResponse,
    #[serde(rename = "Advisor")]
    pub advisor: AdvisorResponse,
}

impl From<(users::Model, advisors::Model)> for CreatedAdvisorResponse {
    fn from((user, advisor): (users::Model, advisors::Model)) -> Self {
        Self {
            user: user.into(),
            advisor: advisor.into(),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAdvisorRequest {
    #[serde(flatten)]
    pub account: NewAccountRequest,
    pub department: String,
}

impl CreateAdvisorRequest {
    pub fn into_parts(self) -> (NewAccount, NewAdvisor) {
        (
            self.account.into(),
            NewAdvisor {
                department: self.department,
            },
        )
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateAdvisorRequest {
    #[serde(flatten)]
    pub account: AccountChangesRequest,
    pub department: Option<String>,
}

impl UpdateAdvisorRequest {
    pub fn into_parts(self) -> (AdvisorChanges, AccountChanges) {
        (
            AdvisorChanges {
                department: self.department,
            },
            self.account.into(),
        )
    }
}
