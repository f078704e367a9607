use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{NaiveDate, NaiveDateTime, Utc};
use itertools::Itertools;
use sea_orm::prelude::*;
use sea_orm::ActiveValue;
use serde::{Deserialize, Serialize};

use padel_entities::schema::enums::{
    parse_code, CourtPosition, License, SmashKind, UserGender, UserRole,
};
use padel_entities::schema::user;

use crate::auth::{hash_password, ExtractAuthenticatedUser};
use crate::response::{handle_error, ApiError};
use crate::state::AppState;

/// The subset of a profile anyone may see.
#[derive(Debug, Serialize, Deserialize)]
pub struct PublicUserProfile {
    pub created_at: NaiveDateTime,
    pub username: String,
    pub name: Option<String>,
    pub email: String,
    pub genere: UserGender,
    pub photo: Option<String>,
    pub rol: UserRole,
    pub position: Option<CourtPosition>,
    pub matchname: Option<String>,
    pub timeplay: Option<String>,
    pub prefsmash: Option<SmashKind>,
    pub club: Option<String>,
}

impl From<user::Model> for PublicUserProfile {
    fn from(model: user::Model) -> Self {
        PublicUserProfile {
            created_at: model.created_at,
            username: model.username,
            name: model.name,
            email: model.email,
            genere: model.genere,
            photo: model.photo,
            rol: model.rol,
            position: model.position,
            matchname: model.matchname,
            timeplay: model.timeplay,
            prefsmash: model.prefsmash,
            club: model.club,
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct RegisterUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub genere: String,
    pub rol: String,
    pub name: Option<String>,
    pub surname: Option<String>,
    pub birthdate: Option<NaiveDate>,
    pub position: Option<String>,
    pub phone: Option<String>,
    pub license: Option<String>,
    pub matchname: Option<String>,
    pub prefsmash: Option<String>,
    pub club: Option<String>,
    pub timeplay: Option<String>,
}

pub async fn register_user_handler(
    State(db): State<DatabaseConnection>,
    Json(request): Json<RegisterUserRequest>,
) -> Result<Json<PublicUserProfile>, ApiError> {
    let genere = parse_code::<UserGender>(&request.genere)
        .ok_or((StatusCode::BAD_REQUEST, "Invalid genere"))?;
    let rol =
        parse_code::<UserRole>(&request.rol).ok_or((StatusCode::BAD_REQUEST, "Invalid rol"))?;
    let position = request
        .position
        .as_deref()
        .map(|raw| {
            parse_code::<CourtPosition>(raw).ok_or((StatusCode::BAD_REQUEST, "Invalid position"))
        })
        .transpose()?;
    let license = request
        .license
        .as_deref()
        .map(|raw| parse_code::<License>(raw).ok_or((StatusCode::BAD_REQUEST, "Invalid license")))
        .transpose()?;
    let prefsmash = request
        .prefsmash
        .as_deref()
        .map(|raw| {
            parse_code::<SmashKind>(raw).ok_or((StatusCode::BAD_REQUEST, "Invalid prefsmash"))
        })
        .transpose()?;

    let existing_user = user::Entity::find()
        .filter(
            user::Column::Username
                .eq(&request.username)
                .or(user::Column::Email.eq(&request.email)),
        )
        .one(&db)
        .await
        .map_err(handle_error)?;

    if existing_user.is_some() {
        return Err((StatusCode::BAD_REQUEST, "User exists").into());
    }

    let password_hash = hash_password(&request.password).map_err(handle_error)?;

    let new_user = user::ActiveModel {
        id: ActiveValue::NotSet,
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        username: ActiveValue::Set(request.username),
        password_hash: ActiveValue::Set(password_hash),
        email: ActiveValue::Set(request.email),
        name: ActiveValue::Set(request.name),
        surname: ActiveValue::Set(request.surname),
        birthdate: ActiveValue::Set(request.birthdate),
        genere: ActiveValue::Set(genere),
        rol: ActiveValue::Set(rol),
        position: ActiveValue::Set(position),
        phone: ActiveValue::Set(request.phone),
        photo: ActiveValue::Set(None),
        license: ActiveValue::Set(license),
        matchname: ActiveValue::Set(request.matchname),
        prefsmash: ActiveValue::Set(prefsmash),
        club: ActiveValue::Set(request.club),
        timeplay: ActiveValue::Set(request.timeplay),
    };

    let new_user = new_user.insert(&db).await.map_err(handle_error)?;

    Ok(Json(new_user.into()))
}

pub async fn list_users_handler(
    State(db): State<DatabaseConnection>,
    ExtractAuthenticatedUser(_current_user): ExtractAuthenticatedUser,
) -> Result<Json<Vec<PublicUserProfile>>, ApiError> {
    let users = user::Entity::find().all(&db).await.map_err(handle_error)?;

    Ok(Json(
        users.into_iter().map(PublicUserProfile::from).collect_vec(),
    ))
}

pub async fn show_user_handler(
    State(db): State<DatabaseConnection>,
    Path(username): Path<String>,
) -> Result<Json<PublicUserProfile>, ApiError> {
    let user = user::Entity::find()
        .filter(user::Column::Username.eq(&username))
        .one(&db)
        .await
        .map_err(handle_error)?;

    let user = user.ok_or((StatusCode::NOT_FOUND, "User not found"))?;

    Ok(Json(user.into()))
}

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/users/register", post(register_user_handler))
        .route("/users", get(list_users_handler))
        .route("/users/show/:username", get(show_user_handler))
}
