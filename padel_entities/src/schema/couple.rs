use sea_orm::entity::prelude::*;

/// A pair of players inscribed together in a tournament bracket.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "couples")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub tournament_id: i32,
    pub first_player_id: i32,
    pub second_player_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::tournament::Entity",
        from = "Column::TournamentId",
        to = "super::tournament::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Tournament,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::FirstPlayerId",
        to = "super::user::Column::Id"
    )]
    FirstPlayer,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::SecondPlayerId",
        to = "super::user::Column::Id"
    )]
    SecondPlayer,
}

impl Related<super::tournament::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tournament.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
