use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
enum User {
    #[iden = "users"]
    Table,
    Id,
}

#[derive(Iden)]
enum Facility {
    #[iden = "facilities"]
    Table,
    Id,
    Name,
    Latitude,
    Longitude,
    Address,
    PostalCode,
    Town,
    Province,
    Phone,
    Email,
    Web,
}

#[derive(Iden)]
enum Category {
    #[iden = "categories"]
    Table,
    Id,
    Genere,
    Age,
    Level,
}

#[derive(Iden)]
enum Tournament {
    #[iden = "tournaments"]
    Table,
    Id,
    CreatedAt,
    EditedAt,
    Name,
    StartDate,
    FinishDate,
    StartRegisterDate,
    FinishRegisterDate,
    LimitCouples,
    InscriptionType,
    Type,
    #[iden = "price_1"]
    Price1,
    #[iden = "price_2"]
    Price2,
    Description,
    Poster,
    OwnerId,
    FacilityId,
}

#[derive(Iden)]
enum TournamentCategory {
    #[iden = "tournament_categories_association"]
    Table,
    TournamentId,
    CategoryId,
}

#[derive(Iden)]
enum TournamentInscription {
    #[iden = "tournament_inscriptions_association"]
    Table,
    TournamentId,
    UserId,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Facility::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Facility::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Facility::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Facility::Latitude).double())
                    .col(ColumnDef::new(Facility::Longitude).double())
                    .col(ColumnDef::new(Facility::Address).string_len(255))
                    .col(ColumnDef::new(Facility::PostalCode).string_len(12))
                    .col(ColumnDef::new(Facility::Town).string_len(50))
                    .col(ColumnDef::new(Facility::Province).string_len(50))
                    .col(ColumnDef::new(Facility::Phone).string_len(50))
                    .col(ColumnDef::new(Facility::Email).string_len(255))
                    .col(ColumnDef::new(Facility::Web).string_len(255))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Category::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Category::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Category::Genere).string_len(1).not_null())
                    .col(ColumnDef::new(Category::Age).string_len(1).not_null())
                    .col(ColumnDef::new(Category::Level).integer())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Tournament::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Tournament::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Tournament::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(Tournament::EditedAt).date_time())
                    .col(ColumnDef::new(Tournament::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Tournament::StartDate).date_time().not_null())
                    .col(ColumnDef::new(Tournament::FinishDate).date_time().not_null())
                    .col(
                        ColumnDef::new(Tournament::StartRegisterDate)
                            .date_time()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Tournament::FinishRegisterDate)
                            .date_time()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Tournament::LimitCouples).integer())
                    .col(ColumnDef::new(Tournament::InscriptionType).string_len(1))
                    .col(ColumnDef::new(Tournament::Type).string_len(1).not_null())
                    .col(ColumnDef::new(Tournament::Price1).double().not_null())
                    .col(ColumnDef::new(Tournament::Price2).double().not_null())
                    .col(ColumnDef::new(Tournament::Description).text())
                    .col(ColumnDef::new(Tournament::Poster).string_len(255))
                    .col(ColumnDef::new(Tournament::OwnerId).integer().not_null())
                    .col(ColumnDef::new(Tournament::FacilityId).integer().not_null())
                    .foreign_key(
                        ForeignKeyCreateStatement::new()
                            .name("fk-tournaments-owner")
                            .from_tbl(Tournament::Table)
                            .from_col(Tournament::OwnerId)
                            .to_tbl(User::Table)
                            .to_col(User::Id),
                    )
                    .foreign_key(
                        ForeignKeyCreateStatement::new()
                            .name("fk-tournaments-facility")
                            .from_tbl(Tournament::Table)
                            .from_col(Tournament::FacilityId)
                            .to_tbl(Facility::Table)
                            .to_col(Facility::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TournamentCategory::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TournamentCategory::TournamentId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TournamentCategory::CategoryId)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(TournamentCategory::TournamentId)
                            .col(TournamentCategory::CategoryId),
                    )
                    .foreign_key(
                        ForeignKeyCreateStatement::new()
                            .name("fk-tournament_categories-tournament")
                            .from_tbl(TournamentCategory::Table)
                            .from_col(TournamentCategory::TournamentId)
                            .to_tbl(Tournament::Table)
                            .to_col(Tournament::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKeyCreateStatement::new()
                            .name("fk-tournament_categories-category")
                            .from_tbl(TournamentCategory::Table)
                            .from_col(TournamentCategory::CategoryId)
                            .to_tbl(Category::Table)
                            .to_col(Category::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TournamentInscription::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TournamentInscription::TournamentId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TournamentInscription::UserId)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(TournamentInscription::TournamentId)
                            .col(TournamentInscription::UserId),
                    )
                    .foreign_key(
                        ForeignKeyCreateStatement::new()
                            .name("fk-tournament_inscriptions-tournament")
                            .from_tbl(TournamentInscription::Table)
                            .from_col(TournamentInscription::TournamentId)
                            .to_tbl(Tournament::Table)
                            .to_col(Tournament::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKeyCreateStatement::new()
                            .name("fk-tournament_inscriptions-user")
                            .from_tbl(TournamentInscription::Table)
                            .from_col(TournamentInscription::UserId)
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
            .drop_table(Table::drop().table(TournamentInscription::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TournamentCategory::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Tournament::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Category::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Facility::Table).to_owned())
            .await?;
        Ok(())
    }
}
