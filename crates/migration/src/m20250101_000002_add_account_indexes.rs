use sea_orm_migration::prelude::*;

use crate::m20250101_000001_create_account::Account;

const ACCOUNT_EMAIL_UNIQUE: &str = "uniq_account_email";
const ACCOUNT_USERNAME_UNIQUE: &str = "uniq_account_username";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name(ACCOUNT_EMAIL_UNIQUE)
                    .table(Account::Table)
                    .col(Account::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name(ACCOUNT_USERNAME_UNIQUE)
                    .table(Account::Table)
                    .col(Account::Username)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name(ACCOUNT_USERNAME_UNIQUE).table(Account::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name(ACCOUNT_EMAIL_UNIQUE).table(Account::Table).to_owned())
            .await
    }
}
