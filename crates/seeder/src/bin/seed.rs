use anyhow::Context;
use database::db::connect_from_env;
use log::{error, info};
use migration::{Migrator, MigratorTrait};

/// Wipes the database and loads the fixture data set
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let db = connect_from_env()
        .await
        .context("Failed to connect to the database")?;

    Migrator::up(&db, None)
        .await
        .context("Failed to apply migrations")?;

    let result = seeder::seed(&db).await;
    if let Err(e) = &result {
        error!("Error creating users: {e}");
    }

    // Always release the pool, whether or not seeding succeeded
    db.close().await.context("Failed to close the connection")?;
    info!("Disconnected from the database");

    result.context("Seeding failed")
}
