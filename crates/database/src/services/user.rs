use crate::entities::{advisors, courses, instructors, staff, students, users};
use models::role::Role;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, ModelTrait,
    QueryFilter, QueryOrder,
};

use super::{
    account::{AccountChanges, NewAccount},
    student::{StudentRecord, load_records},
};

/// An advisor and the full records of their students
#[derive(Debug, Clone, PartialEq)]
pub struct AdvisorRoster {
    pub advisor: advisors::Model,
    pub students: Vec<StudentRecord>,
}

/// A user with whichever sub-profiles exist for it
///
/// All four are looked up regardless of `role`.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub user: users::Model,
    pub student: Option<StudentRecord>,
    pub instructor: Option<(instructors::Model, Vec<courses::Model>)>,
    pub advisor: Option<AdvisorRoster>,
    pub staff: Option<staff::Model>,
}

pub struct UserService;

impl UserService {
    /// Check a username and plaintext password
    ///
    /// Returns the user only when it exists and the password matches exactly.
    pub async fn authenticate(
        db: &DatabaseConnection,
        username: &str,
        password: &str,
    ) -> Result<Option<users::Model>, DbErr> {
        let user = users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .one(db)
            .await?;

        Ok(user.filter(|user| user.password == password))
    }

    pub async fn list(db: &DatabaseConnection) -> Result<Vec<users::Model>, DbErr> {
        users::Entity::find()
            .order_by_asc(users::Column::Id)
            .all(db)
            .await
    }

    /// Get a user with every sub-profile and the rows nested under them
    pub async fn get_profile(
        db: &DatabaseConnection,
        id: i32,
    ) -> Result<Option<UserProfile>, DbErr> {
        let Some(user) = users::Entity::find_by_id(id).one(db).await? else {
            return Ok(None);
        };

        let student = match user.find_related(students::Entity).one(db).await? {
            Some(student) => load_records(db, vec![student]).await?.pop(),
            None => None,
        };

        let instructor = match user.find_related(instructors::Entity).one(db).await? {
            Some(instructor) => {
                let courses = instructor
                    .find_related(courses::Entity)
                    .order_by_asc(courses::Column::Id)
                    .all(db)
                    .await?;
                Some((instructor, courses))
            }
            None => None,
        };

        let advisor = match user.find_related(advisors::Entity).one(db).await? {
            Some(advisor) => {
                let students = advisor
                    .find_related(students::Entity)
                    .order_by_asc(students::Column::Id)
                    .all(db)
                    .await?;
                Some(AdvisorRoster {
                    advisor,
                    students: load_records(db, students).await?,
                })
            }
            None => None,
        };

        let staff = user.find_related(staff::Entity).one(db).await?;

        Ok(Some(UserProfile {
            user,
            student,
            instructor,
            advisor,
            staff,
        }))
    }

    /// Create a bare user without any sub-profile
    pub async fn create(
        db: &DatabaseConnection,
        account: NewAccount,
        role: Role,
    ) -> Result<users::Model, DbErr> {
        account.into_active_model(role).insert(db).await
    }

    /// Returns `None` when no user has the given id
    pub async fn update(
        db: &DatabaseConnection,
        id: i32,
        changes: AccountChanges,
    ) -> Result<Option<users::Model>, DbErr> {
        let Some(user) = users::Entity::find_by_id(id).one(db).await? else {
            return Ok(None);
        };

        let mut active: users::ActiveModel = user.clone().into();
        changes.apply(&mut active);

        if active.is_changed() {
            active.update(db).await.map(Some)
        } else {
            Ok(Some(user))
        }
    }

    /// Delete a user; the schema cascades to its sub-profile
    ///
    /// Returns `false` when no user has the given id.
    pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<bool, DbErr> {
        let result = users::Entity::delete_by_id(id).exec(db).await?;
        Ok(result.rows_affected > 0)
    }
}
