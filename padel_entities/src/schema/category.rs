use sea_orm::entity::prelude::*;

use super::enums::{AgeBracket, CategoryGender};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub genere: CategoryGender,
    pub age: AgeBracket,
    pub level: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<super::tournament::Entity> for Entity {
    fn to() -> RelationDef {
        super::tournament_category::Relation::Tournament.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::tournament_category::Relation::Category.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
