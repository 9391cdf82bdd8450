//! Migrator registering the account schema.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_account;
mod m20250101_000002_add_account_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_account::Migration),
            // Indexes should always be applied last
            Box::new(m20250101_000002_add_account_indexes::Migration),
        ]
    }
}
