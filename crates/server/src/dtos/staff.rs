use database::{
    entities::{staff, users},
    services::{
        account::{AccountChanges, NewAccount},
        staff::{NewStaff, StaffChanges, StaffMember},
    },
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::user::{AccountChangesRequest, NewAccountRequest, UserResponse};

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StaffResponse {
    pub id: i32,
    pub user_id: i32,
    pub department: String,
}

impl From<staff::Model> for StaffResponse {
    fn from(staff: staff::Model) -> Self {
        Self {
            id: staff.id,
            user_id: staff.user_id,
            department: staff.department,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StaffWithUserResponse {
    #[serde(flatten)]
    pub staff: StaffResponse,
    pub user: UserResponse,
}

impl From<StaffMember> for StaffWithUserResponse {
    fn from(member: StaffMember) -> Self {
        Self {
            staff: member.staff.into(),
            user: member.user.into(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreatedStaffResponse {
    #[serde(flatten)]
    pub user: UserResponse,
    #[serde(rename = "Staff")]
    pub staff: StaffResponse,
}

impl From<(users::Model, staff::Model)> for CreatedStaffResponse {
    fn from((user, staff): (users::Model, staff::Model)) -> Self {
        Self {
            user: user.into(),
            staff: staff.into(),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateStaffRequest {
    #[serde(flatten)]
    pub account: NewAccountRequest,
    pub department: String,
}

impl CreateStaffRequest {
    pub fn into_parts(self) -> (NewAccount, NewStaff) {
        (
            self.account.into(),
            NewStaff {
                department: self.department,
            },
        )
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateStaffRequest {
    #[serde(flatten)]
    pub account: AccountChangesRequest,
    pub department: Option<String>,
}

impl UpdateStaffRequest {
    pub fn into_parts(self) -> (StaffChanges, AccountChanges) {
        (
            StaffChanges {
                department: self.department,
            },
            self.account.into(),
        )
    }
}
