use crate::entities::users;
use models::role::Role;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ActiveValue::Set, ConnectionTrait, DbErr, EntityTrait,
};

use super::missing_related;

/// Login and contact details shared by every kind of user
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub name: String,
    pub username: String,
    pub password: String,
    pub email: String,
}

impl NewAccount {
    pub(crate) fn into_active_model(self, role: Role) -> users::ActiveModel {
        users::ActiveModel {
            id: NotSet,
            name: Set(self.name),
            username: Set(self.username),
            password: Set(self.password),
            role: Set(role),
            email: Set(self.email),
        }
    }
}

/// Partial update of a user row; `None` leaves a column untouched
#[derive(Debug, Clone, Default)]
pub struct AccountChanges {
    pub name: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
}

impl AccountChanges {
    pub(crate) fn apply(self, user: &mut users::ActiveModel) {
        if let Some(name) = self.name {
            user.name = Set(name);
        }
        if let Some(username) = self.username {
            user.username = Set(username);
        }
        if let Some(password) = self.password {
            user.password = Set(password);
        }
        if let Some(email) = self.email {
            user.email = Set(email);
        }
        if let Some(role) = self.role {
            user.role = Set(role);
        }
    }
}

/// Applies account changes to the user that owns a sub-profile
pub(crate) async fn update_owner<C>(
    conn: &C,
    user_id: i32,
    changes: AccountChanges,
) -> Result<users::Model, DbErr>
where
    C: ConnectionTrait,
{
    let user = users::Entity::find_by_id(user_id)
        .one(conn)
        .await?
        .ok_or_else(|| missing_related("user", user_id))?;

    let mut active: users::ActiveModel = user.clone().into();
    changes.apply(&mut active);

    if active.is_changed() {
        active.update(conn).await
    } else {
        Ok(user)
    }
}

/// Deletes the user that owns a sub-profile; the schema cascades to the profile
pub(crate) async fn delete_owner<C>(conn: &C, user_id: i32) -> Result<(), DbErr>
where
    C: ConnectionTrait,
{
    users::Entity::delete_by_id(user_id).exec(conn).await?;
    Ok(())
}
