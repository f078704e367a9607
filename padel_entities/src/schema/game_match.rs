use sea_orm::entity::prelude::*;

/// A bracket match between two couples. The module is named `game_match`
/// because `match` is a keyword; the table keeps the plain name.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "matches")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub round_id: i32,
    pub home_couple_id: i32,
    pub away_couple_id: i32,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::round::Entity",
        from = "Column::RoundId",
        to = "super::round::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Round,
    #[sea_orm(
        belongs_to = "super::couple::Entity",
        from = "Column::HomeCoupleId",
        to = "super::couple::Column::Id"
    )]
    HomeCouple,
    #[sea_orm(
        belongs_to = "super::couple::Entity",
        from = "Column::AwayCoupleId",
        to = "super::couple::Column::Id"
    )]
    AwayCouple,
}

impl Related<super::round::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Round.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
