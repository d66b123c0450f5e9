pub mod fixture;

use database::entities::{advisors, course_enrollments, courses, instructors, staff, students, users};
use log::info;
use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr, EntityTrait};

/// Tables holding explicitly keyed fixture rows, in insertion order
const SEQUENCED_TABLES: [&str; 7] = [
    "users",
    "advisors",
    "instructors",
    "staff",
    "courses",
    "students",
    "course_enrollments",
];

/// Wipes every table and inserts the fixture data set
///
/// Rows carry explicit primary keys, so running this twice yields the same data.
pub async fn seed(db: &DatabaseConnection) -> Result<(), DbErr> {
    wipe(db).await?;
    fixture::insert(db).await?;

    if db.get_database_backend() == DatabaseBackend::Postgres {
        reset_sequences(db).await?;
    }

    info!("Users and enrollments created successfully");
    Ok(())
}

/// Deletes all rows, children before parents
pub async fn wipe(db: &DatabaseConnection) -> Result<(), DbErr> {
    info!("Clearing existing data");

    course_enrollments::Entity::delete_many().exec(db).await?;
    courses::Entity::delete_many().exec(db).await?;
    students::Entity::delete_many().exec(db).await?;
    instructors::Entity::delete_many().exec(db).await?;
    advisors::Entity::delete_many().exec(db).await?;
    staff::Entity::delete_many().exec(db).await?;
    users::Entity::delete_many().exec(db).await?;

    Ok(())
}

/// Moves each serial sequence past the explicit keys so later inserts don't collide
async fn reset_sequences(db: &DatabaseConnection) -> Result<(), DbErr> {
    for table in SEQUENCED_TABLES {
        db.execute_unprepared(&format!(
            "SELECT setval(pg_get_serial_sequence('{table}', 'id'), COALESCE(MAX(id), 1)) FROM {table}"
        ))
        .await?;
    }

    Ok(())
}
