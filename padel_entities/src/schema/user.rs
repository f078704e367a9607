use sea_orm::entity::prelude::*;

use super::enums::{CourtPosition, License, SmashKind, UserGender, UserRole};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub created_at: DateTime,
    #[sea_orm(unique)]
    pub username: String,
    pub password_hash: String,
    pub email: String,
    pub name: Option<String>,
    pub surname: Option<String>,
    pub birthdate: Option<Date>,
    pub genere: UserGender,
    pub rol: UserRole,
    pub position: Option<CourtPosition>,
    pub phone: Option<String>,
    pub photo: Option<String>,
    pub license: Option<License>,
    pub matchname: Option<String>,
    pub prefsmash: Option<SmashKind>,
    pub club: Option<String>,
    pub timeplay: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_token::Entity")]
    UserToken,
    #[sea_orm(has_many = "super::tournament::Entity")]
    Tournament,
}

impl Related<super::user_token::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserToken.def()
    }
}

/// Tournaments this user owns. Inscriptions go through
/// `tournament_inscription` instead.
impl Related<super::tournament::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tournament.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
