pub mod account;
pub mod advisor;
pub mod course;
pub mod instructor;
pub mod staff;
pub mod student;
pub mod user;

use sea_orm::DbErr;

/// Error for a row that a foreign key promised but the query did not return
pub(crate) fn missing_related(entity: &str, id: i32) -> DbErr {
    DbErr::RecordNotFound(format!("{entity} {id} referenced but not found"))
}
