//! Create `account` table holding portal logins.
//!
//! Uniqueness of email and username is enforced by the named indexes in
//! `m20250101_000002_add_account_indexes`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Account::Table)
                    .if_not_exists()
                    .col(pk_auto(Account::Id))
                    .col(string_len(Account::Email, 255).not_null())
                    .col(string_len(Account::Username, 64).not_null())
                    .col(string_len(Account::PasswordHash, 255).not_null())
                    .col(boolean(Account::IsActive).not_null().default(true))
                    .col(string_len(Account::Role, 32).not_null().default("employee"))
                    .col(timestamp_with_time_zone(Account::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Account::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Account { Table, Id, Email, Username, PasswordHash, IsActive, Role, CreatedAt }
