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
enum Tournament {
    #[iden = "tournaments"]
    Table,
    Id,
}

#[derive(Iden)]
enum Couple {
    #[iden = "couples"]
    Table,
    Id,
    TournamentId,
    FirstPlayerId,
    SecondPlayerId,
}

#[derive(Iden)]
enum Round {
    #[iden = "rounds"]
    Table,
    Id,
    TournamentId,
    Number,
}

#[derive(Iden)]
enum Match {
    #[iden = "matches"]
    Table,
    Id,
    RoundId,
    HomeCoupleId,
    AwayCoupleId,
    HomeScore,
    AwayScore,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Couple::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Couple::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Couple::TournamentId).integer().not_null())
                    .col(ColumnDef::new(Couple::FirstPlayerId).integer().not_null())
                    .col(ColumnDef::new(Couple::SecondPlayerId).integer().not_null())
                    .foreign_key(
                        ForeignKeyCreateStatement::new()
                            .name("fk-couples-tournament")
                            .from_tbl(Couple::Table)
                            .from_col(Couple::TournamentId)
                            .to_tbl(Tournament::Table)
                            .to_col(Tournament::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKeyCreateStatement::new()
                            .name("fk-couples-first_player")
                            .from_tbl(Couple::Table)
                            .from_col(Couple::FirstPlayerId)
                            .to_tbl(User::Table)
                            .to_col(User::Id),
                    )
                    .foreign_key(
                        ForeignKeyCreateStatement::new()
                            .name("fk-couples-second_player")
                            .from_tbl(Couple::Table)
                            .from_col(Couple::SecondPlayerId)
                            .to_tbl(User::Table)
                            .to_col(User::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Round::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Round::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Round::TournamentId).integer().not_null())
                    .col(ColumnDef::new(Round::Number).integer().not_null())
                    .foreign_key(
                        ForeignKeyCreateStatement::new()
                            .name("fk-rounds-tournament")
                            .from_tbl(Round::Table)
                            .from_col(Round::TournamentId)
                            .to_tbl(Tournament::Table)
                            .to_col(Tournament::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Match::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Match::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Match::RoundId).integer().not_null())
                    .col(ColumnDef::new(Match::HomeCoupleId).integer().not_null())
                    .col(ColumnDef::new(Match::AwayCoupleId).integer().not_null())
                    .col(ColumnDef::new(Match::HomeScore).integer())
                    .col(ColumnDef::new(Match::AwayScore).integer())
                    .foreign_key(
                        ForeignKeyCreateStatement::new()
                            .name("fk-matches-round")
                            .from_tbl(Match::Table)
                            .from_col(Match::RoundId)
                            .to_tbl(Round::Table)
                            .to_col(Round::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKeyCreateStatement::new()
                            .name("fk-matches-home_couple")
                            .from_tbl(Match::Table)
                            .from_col(Match::HomeCoupleId)
                            .to_tbl(Couple::Table)
                            .to_col(Couple::Id),
                    )
                    .foreign_key(
                        ForeignKeyCreateStatement::new()
                            .name("fk-matches-away_couple")
                            .from_tbl(Match::Table)
                            .from_col(Match::AwayCoupleId)
                            .to_tbl(Couple::Table)
                            .to_col(Couple::Id),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Match::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Round::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Couple::Table).to_owned())
            .await?;
        Ok(())
    }
}
