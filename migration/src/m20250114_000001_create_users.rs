use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
enum User {
    #[iden = "users"]
    Table,
    Id,
    CreatedAt,
    Username,
    PasswordHash,
    Email,
    Name,
    Surname,
    Birthdate,
    Genere,
    Rol,
    Position,
    Phone,
    Photo,
    License,
    Matchname,
    Prefsmash,
    Club,
    Timeplay,
}

#[derive(Iden)]
enum UserToken {
    #[iden = "users_tokens"]
    Table,
    Id,
    Token,
    UserId,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(User::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(User::CreatedAt).date_time().not_null())
                    .col(
                        ColumnDef::new(User::Username)
                            .string_len(50)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(User::PasswordHash).text().not_null())
                    .col(ColumnDef::new(User::Email).string_len(255).not_null())
                    .col(ColumnDef::new(User::Name).string_len(50))
                    .col(ColumnDef::new(User::Surname).string_len(50))
                    .col(ColumnDef::new(User::Birthdate).date())
                    .col(ColumnDef::new(User::Genere).string_len(1).not_null())
                    .col(ColumnDef::new(User::Rol).string_len(1).not_null())
                    .col(ColumnDef::new(User::Position).string_len(1))
                    .col(ColumnDef::new(User::Phone).string_len(50))
                    .col(ColumnDef::new(User::Photo).string_len(255))
                    .col(ColumnDef::new(User::License).string_len(1))
                    .col(ColumnDef::new(User::Matchname).string_len(50))
                    .col(ColumnDef::new(User::Prefsmash).string_len(1))
                    .col(ColumnDef::new(User::Club).string_len(50))
                    .col(ColumnDef::new(User::Timeplay).string_len(50))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(UserToken::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserToken::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(UserToken::Token)
                            .string_len(50)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(UserToken::UserId).integer().not_null())
                    .foreign_key(
                        ForeignKeyCreateStatement::new()
                            .name("fk-users_tokens-user")
                            .from_tbl(UserToken::Table)
                            .from_col(UserToken::UserId)
                            .to_tbl(User::Table)
                            .to_col(User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserToken::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await?;
        Ok(())
    }
}
