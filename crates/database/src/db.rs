use log::LevelFilter;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::env;

/// Environment variable holding the database connection URL
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";

/// Creates a database connection pool for the given URL
///
/// SQL statements are logged at debug level through the `log` facade.
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(database_url);
    options.sqlx_logging_level(LevelFilter::Debug);

    Database::connect(options).await
}

/// Creates a database connection pool from `DATABASE_URL`, loading `.env` first
pub async fn connect_from_env() -> Result<DatabaseConnection, DbErr> {
    dotenvy::dotenv().ok();

    let database_url = env::var(DATABASE_URL_VAR)
        .map_err(|_| DbErr::Custom(format!("{DATABASE_URL_VAR} must be set")))?;

    create_connection(&database_url).await
}
