use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use chrono::{NaiveDateTime, Utc};
use sea_orm::prelude::*;
use sea_orm::{JoinType, ModelTrait, QuerySelect, RelationTrait};
use serde::{Deserialize, Serialize};

use padel_entities::domain::tournament::TournamentStatus;
use padel_entities::schema::enums::{
    parse_code, AgeBracket, CategoryGender, TournamentPrivacy, TournamentType,
};
use padel_entities::schema::{category, facility, tournament, tournament_category};

use crate::auth::ExtractAuthenticatedUser;
use crate::response::{handle_error, ApiError};
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct FacilitySummary {
    pub id: i32,
    pub name: String,
    pub town: Option<String>,
    pub province: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl From<facility::Model> for FacilitySummary {
    fn from(model: facility::Model) -> Self {
        FacilitySummary {
            id: model.id,
            name: model.name,
            town: model.town,
            province: model.province,
            latitude: model.latitude,
            longitude: model.longitude,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryInfo {
    pub id: i32,
    pub genere: CategoryGender,
    pub age: AgeBracket,
    pub level: Option<i32>,
}

impl From<category::Model> for CategoryInfo {
    fn from(model: category::Model) -> Self {
        CategoryInfo {
            id: model.id,
            genere: model.genere,
            age: model.age,
            level: model.level,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TournamentInfo {
    pub id: i32,
    pub created_at: NaiveDateTime,
    pub name: String,
    pub start_date: NaiveDateTime,
    pub finish_date: NaiveDateTime,
    pub start_register_date: NaiveDateTime,
    pub finish_register_date: NaiveDateTime,
    pub price_1: f64,
    pub price_2: f64,
    #[serde(rename = "type")]
    pub tournament_type: TournamentType,
    pub inscription_type: Option<TournamentPrivacy>,
    pub status: TournamentStatus,
    pub facility: Option<FacilitySummary>,
    pub categories: Vec<CategoryInfo>,
}

impl TournamentInfo {
    fn from_parts(
        model: tournament::Model,
        facility: Option<facility::Model>,
        categories: Vec<category::Model>,
        now: NaiveDateTime,
    ) -> Self {
        TournamentInfo {
            id: model.id,
            status: model.status_at(now),
            created_at: model.created_at,
            name: model.name,
            start_date: model.start_date,
            finish_date: model.finish_date,
            start_register_date: model.start_register_date,
            finish_register_date: model.finish_register_date,
            price_1: model.price_1,
            price_2: model.price_2,
            tournament_type: model.tournament_type,
            inscription_type: model.inscription_type,
            facility: facility.map(FacilitySummary::from),
            categories: categories.into_iter().map(CategoryInfo::from).collect(),
        }
    }
}

async fn load_tournament_info(
    db: &DatabaseConnection,
    model: tournament::Model,
    now: NaiveDateTime,
) -> Result<TournamentInfo, ApiError> {
    let facility = model
        .find_related(facility::Entity)
        .one(db)
        .await
        .map_err(handle_error)?;
    let categories = model
        .find_related(category::Entity)
        .all(db)
        .await
        .map_err(handle_error)?;

    Ok(TournamentInfo::from_parts(model, facility, categories, now))
}

#[derive(Debug, Default, Deserialize)]
pub struct TournamentListQuery {
    #[serde(rename = "type")]
    pub tournament_type: Option<String>,
    pub inscription_type: Option<String>,
    pub genere: Option<String>,
    pub age: Option<String>,
}

/// Every present parameter folds into one more equality predicate; the
/// category parameters join through the association table. Filters only
/// ever combine conjunctively.
pub async fn list_tournaments_handler(
    State(db): State<DatabaseConnection>,
    ExtractAuthenticatedUser(_current_user): ExtractAuthenticatedUser,
    Query(params): Query<TournamentListQuery>,
) -> Result<Json<Vec<TournamentInfo>>, ApiError> {
    let tournament_type = params
        .tournament_type
        .as_deref()
        .map(|raw| {
            parse_code::<TournamentType>(raw).ok_or((StatusCode::BAD_REQUEST, "Invalid Type"))
        })
        .transpose()?;
    let inscription_type = params
        .inscription_type
        .as_deref()
        .map(|raw| {
            parse_code::<TournamentPrivacy>(raw)
                .ok_or((StatusCode::BAD_REQUEST, "Invalid inscription_type"))
        })
        .transpose()?;
    let genere = params
        .genere
        .as_deref()
        .map(|raw| {
            parse_code::<CategoryGender>(raw).ok_or((StatusCode::BAD_REQUEST, "Invalid genere"))
        })
        .transpose()?;
    let age = params
        .age
        .as_deref()
        .map(|raw| parse_code::<AgeBracket>(raw).ok_or((StatusCode::BAD_REQUEST, "Invalid Age")))
        .transpose()?;

    let mut query = tournament::Entity::find();

    if let Some(tournament_type) = tournament_type {
        query = query.filter(tournament::Column::TournamentType.eq(tournament_type));
    }

    if let Some(inscription_type) = inscription_type {
        query = query.filter(tournament::Column::InscriptionType.eq(inscription_type));
    }

    if genere.is_some() || age.is_some() {
        query = query
            .join(
                JoinType::InnerJoin,
                tournament_category::Relation::Tournament.def().rev(),
            )
            .join(
                JoinType::InnerJoin,
                tournament_category::Relation::Category.def(),
            )
            .distinct();

        if let Some(genere) = genere {
            query = query.filter(category::Column::Genere.eq(genere));
        }

        if let Some(age) = age {
            query = query.filter(category::Column::Age.eq(age));
        }
    }

    let tournaments = query.all(&db).await.map_err(handle_error)?;

    let now = Utc::now().naive_utc();
    let mut response = Vec::with_capacity(tournaments.len());
    for tournament in tournaments {
        response.push(load_tournament_info(&db, tournament, now).await?);
    }

    Ok(Json(response))
}

pub async fn get_tournament_handler(
    State(db): State<DatabaseConnection>,
    Path(tournament_id): Path<i32>,
) -> Result<Json<TournamentInfo>, ApiError> {
    let tournament = tournament::Entity::find_by_id(tournament_id)
        .one(&db)
        .await
        .map_err(handle_error)?;

    let tournament = tournament.ok_or((StatusCode::BAD_REQUEST, "Tournament not found"))?;

    let now = Utc::now().naive_utc();

    Ok(Json(load_tournament_info(&db, tournament, now).await?))
}

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/tournaments", get(list_tournaments_handler))
        .route("/tournaments/:id", get(get_tournament_handler))
}
