use sea_orm::entity::prelude::*;

use super::enums::{TournamentPrivacy, TournamentType};

/// A tournament row. The open/playing/closed status is never stored; it is
/// derived from the registration and finish dates on every read, see
/// [`crate::domain::tournament`].
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "tournaments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub created_at: DateTime,
    pub edited_at: Option<DateTime>,
    pub name: String,
    pub start_date: DateTime,
    pub finish_date: DateTime,
    pub start_register_date: DateTime,
    pub finish_register_date: DateTime,
    pub limit_couples: Option<i32>,
    pub inscription_type: Option<TournamentPrivacy>,
    #[sea_orm(column_name = "type")]
    pub tournament_type: TournamentType,
    pub price_1: f64,
    pub price_2: f64,
    pub description: Option<String>,
    pub poster: Option<String>,
    pub owner_id: i32,
    pub facility_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::OwnerId",
        to = "super::user::Column::Id"
    )]
    Owner,
    #[sea_orm(
        belongs_to = "super::facility::Entity",
        from = "Column::FacilityId",
        to = "super::facility::Column::Id"
    )]
    Facility,
    #[sea_orm(has_many = "super::couple::Entity")]
    Couple,
    #[sea_orm(has_many = "super::round::Entity")]
    Round,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Owner.def()
    }
}

impl Related<super::facility::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Facility.def()
    }
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        super::tournament_category::Relation::Category.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::tournament_category::Relation::Tournament.def().rev())
    }
}

impl Related<super::couple::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Couple.def()
    }
}

impl Related<super::round::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Round.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
