use axum::extract::FromRef;
use migration::MigratorTrait;
use sea_orm::{prelude::*, Statement};

use crate::config::Config;
use crate::db::{self, DatabaseConfig};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: Config,
}

impl AppState {
    pub async fn new(config: Config) -> AppState {
        let db = db::set_up_db(DatabaseConfig::new(config.db_url.clone(), "padel".into()))
            .await
            .expect("Failed to set up database");
        Self::new_with_db(config, db).await
    }

    pub async fn new_with_db(config: Config, db: DatabaseConnection) -> AppState {
        if let DatabaseConnection::SqlxSqlitePoolConnection(_) = &db {
            db.execute(Statement::from_sql_and_values(
                db.get_database_backend(),
                "PRAGMA foreign_keys = ON;",
                vec![],
            ))
            .await
            .expect("Failed to enable foreign keys");
        }
        migration::Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");
        AppState { db, config }
    }

    pub async fn new_test_app() -> AppState {
        let db = db::set_up_db(DatabaseConfig::new("sqlite::memory:".into(), "".into()))
            .await
            .expect("Failed to set up database");
        Self::new_with_db(Config::default(), db).await
    }
}

impl FromRef<AppState> for DatabaseConnection {
    fn from_ref(app_state: &AppState) -> DatabaseConnection {
        app_state.db.clone()
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(app_state: &AppState) -> Config {
        app_state.config.clone()
    }
}
