use sea_orm::DatabaseConnection;

/// Shared by every handler; the connection pool lives for the whole process
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
