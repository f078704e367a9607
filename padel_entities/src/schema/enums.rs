//! Single-character codes persisted by the schema.
//!
//! Every enum stores its one-letter code as a string column and uses the
//! same code on the wire.

use sea_orm::entity::prelude::*;
use sea_orm::ActiveEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(1))")]
pub enum UserGender {
    #[sea_orm(string_value = "M")]
    #[serde(rename = "M")]
    Male,
    #[sea_orm(string_value = "F")]
    #[serde(rename = "F")]
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(1))")]
pub enum UserRole {
    #[sea_orm(string_value = "O")]
    #[serde(rename = "O")]
    Owner,
    #[sea_orm(string_value = "P")]
    #[serde(rename = "P")]
    Player,
}

/// Side of the court a player prefers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(1))")]
pub enum CourtPosition {
    #[sea_orm(string_value = "L")]
    #[serde(rename = "L")]
    Left,
    #[sea_orm(string_value = "R")]
    #[serde(rename = "R")]
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(1))")]
pub enum License {
    #[sea_orm(string_value = "Y")]
    #[serde(rename = "Y")]
    Licensed,
    #[sea_orm(string_value = "N")]
    #[serde(rename = "N")]
    Unlicensed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(1))")]
pub enum SmashKind {
    #[sea_orm(string_value = "S")]
    #[serde(rename = "S")]
    Serve,
    #[sea_orm(string_value = "R")]
    #[serde(rename = "R")]
    Forehand,
    #[sea_orm(string_value = "L")]
    #[serde(rename = "L")]
    Backhand,
    #[sea_orm(string_value = "G")]
    #[serde(rename = "G")]
    Lob,
    #[sea_orm(string_value = "C")]
    #[serde(rename = "C")]
    Slice,
    #[sea_orm(string_value = "M")]
    #[serde(rename = "M")]
    Smash,
    #[sea_orm(string_value = "V")]
    #[serde(rename = "V")]
    Volley,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(1))")]
pub enum TournamentType {
    #[sea_orm(string_value = "A")]
    #[serde(rename = "A")]
    Americana,
    #[sea_orm(string_value = "L")]
    #[serde(rename = "L")]
    League,
    #[sea_orm(string_value = "D")]
    #[serde(rename = "D")]
    Draft,
}

/// Whether inscription is open to everyone or requires an invitation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(1))")]
pub enum TournamentPrivacy {
    #[sea_orm(string_value = "O")]
    #[serde(rename = "O")]
    Public,
    #[sea_orm(string_value = "C")]
    #[serde(rename = "C")]
    Private,
}

/// Gender grouping of a category. Distinct value set from [`UserGender`]:
/// men's draws are `H`, and `X` marks mixed draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(1))")]
pub enum CategoryGender {
    #[sea_orm(string_value = "H")]
    #[serde(rename = "H")]
    Men,
    #[sea_orm(string_value = "F")]
    #[serde(rename = "F")]
    Women,
    #[sea_orm(string_value = "X")]
    #[serde(rename = "X")]
    Mixed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(1))")]
pub enum AgeBracket {
    #[sea_orm(string_value = "M")]
    #[serde(rename = "M")]
    Juniors,
    #[sea_orm(string_value = "S")]
    #[serde(rename = "S")]
    Seniors,
}

/// Parses a request-supplied code against an enum's value set.
///
/// Codes are accepted case-insensitively; anything outside the defined
/// single-character values yields `None`.
pub fn parse_code<T>(raw: &str) -> Option<T>
where
    T: ActiveEnum<Value = String>,
{
    T::try_from_value(&raw.to_uppercase()).ok()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_codes_are_case_insensitive() {
        assert_eq!(parse_code::<TournamentType>("a"), Some(TournamentType::Americana));
        assert_eq!(parse_code::<TournamentType>("A"), Some(TournamentType::Americana));
        assert_eq!(parse_code::<CategoryGender>("x"), Some(CategoryGender::Mixed));
    }

    #[test]
    fn test_unknown_codes_are_rejected() {
        assert_eq!(parse_code::<TournamentType>("Q"), None);
        assert_eq!(parse_code::<TournamentType>("AA"), None);
        assert_eq!(parse_code::<TournamentType>(""), None);
        assert_eq!(parse_code::<AgeBracket>("J"), None);
        // `H` is a category gender, not a user gender
        assert_eq!(parse_code::<UserGender>("H"), None);
    }

    #[test]
    fn test_every_tournament_type_code_parses() {
        for (code, expected) in [
            ("A", TournamentType::Americana),
            ("L", TournamentType::League),
            ("D", TournamentType::Draft),
        ] {
            assert_eq!(parse_code::<TournamentType>(code), Some(expected));
        }
    }

    #[test]
    fn test_codes_serialize_as_single_characters() {
        assert_eq!(serde_json::to_string(&TournamentPrivacy::Public).unwrap(), "\"O\"");
        assert_eq!(serde_json::to_string(&SmashKind::Volley).unwrap(), "\"V\"");
        assert_eq!(serde_json::to_string(&AgeBracket::Seniors).unwrap(), "\"S\"");
    }
}
