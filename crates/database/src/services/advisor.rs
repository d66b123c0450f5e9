use crate::entities::{advisors, students, users};
use models::role::Role;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ActiveValue::Set, DatabaseConnection, DbErr,
    EntityTrait, LoaderTrait, QueryOrder, TransactionTrait,
};

use super::{
    account::{AccountChanges, NewAccount, delete_owner, update_owner},
    missing_related,
};

/// An advisor with their user row and the students assigned to them
#[derive(Debug, Clone, PartialEq)]
pub struct AdvisorStudents {
    pub advisor: advisors::Model,
    pub user: users::Model,
    pub students: Vec<students::Model>,
}

#[derive(Debug, Clone)]
pub struct NewAdvisor {
    pub department: String,
}

/// Partial update of an advisor row; `None` leaves a column untouched
#[derive(Debug, Clone, Default)]
pub struct AdvisorChanges {
    pub department: Option<String>,
}

pub struct AdvisorService;

impl AdvisorService {
    /// Get every advisor with their user and assigned students
    pub async fn list(db: &DatabaseConnection) -> Result<Vec<AdvisorStudents>, DbErr> {
        let advisors = advisors::Entity::find()
            .order_by_asc(advisors::Column::Id)
            .all(db)
            .await?;

        let users = advisors.load_one(users::Entity, db).await?;
        let students = advisors.load_many(students::Entity, db).await?;

        advisors
            .into_iter()
            .zip(users)
            .zip(students)
            .map(|((advisor, user), students)| {
                let user = user.ok_or_else(|| missing_related("user", advisor.user_id))?;
                Ok(AdvisorStudents {
                    advisor,
                    user,
                    students,
                })
            })
            .collect()
    }

    /// Create a user with role `advisor` and its advisor profile in one transaction
    pub async fn create(
        db: &DatabaseConnection,
        account: NewAccount,
        profile: NewAdvisor,
    ) -> Result<(users::Model, advisors::Model), DbErr> {
        let txn = db.begin().await?;

        let user = account.into_active_model(Role::Advisor).insert(&txn).await?;
        let advisor = advisors::ActiveModel {
            id: NotSet,
            user_id: Set(user.id),
            department: Set(profile.department),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;
        Ok((user, advisor))
    }

    /// Update an advisor and their user together
    ///
    /// Returns `None` when no advisor has the given id.
    pub async fn update(
        db: &DatabaseConnection,
        id: i32,
        changes: AdvisorChanges,
        account: AccountChanges,
    ) -> Result<Option<(advisors::Model, users::Model)>, DbErr> {
        let txn = db.begin().await?;

        let Some(advisor) = advisors::Entity::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        let advisor = match changes.department {
            Some(department) => {
                let mut active: advisors::ActiveModel = advisor.into();
                active.department = Set(department);
                active.update(&txn).await?
            }
            None => advisor,
        };

        let user = update_owner(&txn, advisor.user_id, account).await?;

        txn.commit().await?;
        Ok(Some((advisor, user)))
    }

    /// Delete an advisor by removing the user that owns it
    ///
    /// Their students stay, with no advisor assigned. Returns `false` when no
    /// advisor has the given id.
    pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<bool, DbErr> {
        let Some(advisor) = advisors::Entity::find_by_id(id).one(db).await? else {
            return Ok(false);
        };

        delete_owner(db, advisor.user_id).await?;
        Ok(true)
    }
}
