use sea_orm_migration::prelude::*;
pub use sea_orm_migration::prelude::{MigrationTrait, MigratorTrait};

mod m20250114_000001_create_users;
mod m20250121_000002_create_tournaments;
mod m20250203_000003_create_brackets;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250114_000001_create_users::Migration),
            Box::new(m20250121_000002_create_tournaments::Migration),
            Box::new(m20250203_000003_create_brackets::Migration),
        ]
    }
}
