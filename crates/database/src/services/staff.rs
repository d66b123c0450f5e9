use crate::entities::{staff, users};
use models::role::Role;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ActiveValue::Set, DatabaseConnection, DbErr,
    EntityTrait, LoaderTrait, QueryOrder, TransactionTrait,
};

use super::{
    account::{AccountChanges, NewAccount, delete_owner, update_owner},
    missing_related,
};

/// A staff member with their user row
#[derive(Debug, Clone, PartialEq)]
pub struct StaffMember {
    pub staff: staff::Model,
    pub user: users::Model,
}

#[derive(Debug, Clone)]
pub struct NewStaff {
    pub department: String,
}

/// Partial update of a staff row; `None` leaves a column untouched
#[derive(Debug, Clone, Default)]
pub struct StaffChanges {
    pub department: Option<String>,
}

pub struct StaffService;

impl StaffService {
    pub async fn list(db: &DatabaseConnection) -> Result<Vec<StaffMember>, DbErr> {
        let members = staff::Entity::find()
            .order_by_asc(staff::Column::Id)
            .all(db)
            .await?;

        let users = members.load_one(users::Entity, db).await?;

        members
            .into_iter()
            .zip(users)
            .map(|(staff, user)| {
                let user = user.ok_or_else(|| missing_related("user", staff.user_id))?;
                Ok(StaffMember { staff, user })
            })
            .collect()
    }

    /// Create a user with role `staff` and its staff profile in one transaction
    pub async fn create(
        db: &DatabaseConnection,
        account: NewAccount,
        profile: NewStaff,
    ) -> Result<(users::Model, staff::Model), DbErr> {
        let txn = db.begin().await?;

        let user = account.into_active_model(Role::Staff).insert(&txn).await?;
        let member = staff::ActiveModel {
            id: NotSet,
            user_id: Set(user.id),
            department: Set(profile.department),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;
        Ok((user, member))
    }

    /// Update a staff member and their user together
    ///
    /// Returns `None` when no staff member has the given id.
    pub async fn update(
        db: &DatabaseConnection,
        id: i32,
        changes: StaffChanges,
        account: AccountChanges,
    ) -> Result<Option<StaffMember>, DbErr> {
        let txn = db.begin().await?;

        let Some(member) = staff::Entity::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        let member = match changes.department {
            Some(department) => {
                let mut active: staff::ActiveModel = member.into();
                active.department = Set(department);
                active.update(&txn).await?
            }
            None => member,
        };

        let user = update_owner(&txn, member.user_id, account).await?;

        txn.commit().await?;
        Ok(Some(StaffMember { staff: member, user }))
    }

    /// Delete a staff member by removing the user that owns it
    ///
    /// Returns `false` when no staff member has the given id.
    pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<bool, DbErr> {
        let Some(member) = staff::Entity::find_by_id(id).one(db).await? else {
            return Ok(false);
        };

        delete_owner(db, member.user_id).await?;
        Ok(true)
    }
}
