use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};
use chrono::{NaiveDate, NaiveDateTime};
use sea_orm::prelude::*;
use sea_orm::{ActiveValue, IntoActiveModel};
use serde::{Deserialize, Serialize};

use padel_entities::schema::enums::{
    parse_code, CourtPosition, License, SmashKind, UserGender, UserRole,
};
use padel_entities::schema::user;

use crate::auth::{hash_password, ExtractAuthenticatedUser};
use crate::response::{handle_error, ApiError};
use crate::state::AppState;

/// The caller's own profile. The password hash never leaves the database.
#[derive(Debug, Serialize, Deserialize)]
pub struct AccountProfile {
    pub created_at: NaiveDateTime,
    pub username: String,
    pub email: String,
    pub name: Option<String>,
    pub surname: Option<String>,
    pub birthdate: Option<NaiveDate>,
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

impl From<user::Model> for AccountProfile {
    fn from(model: user::Model) -> Self {
        AccountProfile {
            created_at: model.created_at,
            username: model.username,
            email: model.email,
            name: model.name,
            surname: model.surname,
            birthdate: model.birthdate,
            genere: model.genere,
            rol: model.rol,
            position: model.position,
            phone: model.phone,
            photo: model.photo,
            license: model.license,
            matchname: model.matchname,
            prefsmash: model.prefsmash,
            club: model.club,
            timeplay: model.timeplay,
        }
    }
}

pub async fn get_profile_handler(
    ExtractAuthenticatedUser(current_user): ExtractAuthenticatedUser,
) -> Result<Json<AccountProfile>, ApiError> {
    Ok(Json(current_user.into()))
}

/// Every field is optional; absent fields are left untouched. The username
/// is immutable and not part of the request.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
    pub surname: Option<String>,
    pub birthdate: Option<NaiveDate>,
    pub genere: Option<String>,
    pub rol: Option<String>,
    pub position: Option<String>,
    pub phone: Option<String>,
    pub photo: Option<String>,
    pub license: Option<String>,
    pub matchname: Option<String>,
    pub prefsmash: Option<String>,
    pub club: Option<String>,
    pub timeplay: Option<String>,
}

pub async fn update_profile_handler(
    State(db): State<DatabaseConnection>,
    ExtractAuthenticatedUser(current_user): ExtractAuthenticatedUser,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<(), ApiError> {
    let genere = request
        .genere
        .as_deref()
        .map(|raw| parse_code::<UserGender>(raw).ok_or((StatusCode::BAD_REQUEST, "Invalid genere")))
        .transpose()?;
    let rol = request
        .rol
        .as_deref()
        .map(|raw| parse_code::<UserRole>(raw).ok_or((StatusCode::BAD_REQUEST, "Invalid rol")))
        .transpose()?;
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

    let mut current_user = current_user.into_active_model();

    if let Some(email) = request.email {
        current_user.email = ActiveValue::Set(email);
    }
    if let Some(password) = request.password {
        let password_hash = hash_password(&password).map_err(handle_error)?;
        current_user.password_hash = ActiveValue::Set(password_hash);
    }
    if let Some(name) = request.name {
        current_user.name = ActiveValue::Set(Some(name));
    }
    if let Some(surname) = request.surname {
        current_user.surname = ActiveValue::Set(Some(surname));
    }
    if let Some(birthdate) = request.birthdate {
        current_user.birthdate = ActiveValue::Set(Some(birthdate));
    }
    if let Some(genere) = genere {
        current_user.genere = ActiveValue::Set(genere);
    }
    if let Some(rol) = rol {
        current_user.rol = ActiveValue::Set(rol);
    }
    if let Some(position) = position {
        current_user.position = ActiveValue::Set(Some(position));
    }
    if let Some(phone) = request.phone {
        current_user.phone = ActiveValue::Set(Some(phone));
    }
    if let Some(photo) = request.photo {
        current_user.photo = ActiveValue::Set(Some(photo));
    }
    if let Some(license) = license {
        current_user.license = ActiveValue::Set(Some(license));
    }
    if let Some(matchname) = request.matchname {
        current_user.matchname = ActiveValue::Set(Some(matchname));
    }
    if let Some(prefsmash) = prefsmash {
        current_user.prefsmash = ActiveValue::Set(Some(prefsmash));
    }
    if let Some(club) = request.club {
        current_user.club = ActiveValue::Set(Some(club));
    }
    if let Some(timeplay) = request.timeplay {
        current_user.timeplay = ActiveValue::Set(Some(timeplay));
    }

    if current_user.is_changed() {
        current_user.update(&db).await.map_err(handle_error)?;
    }

    Ok(())
}

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/account/profile", get(get_profile_handler))
        .route("/account/update_profile", put(update_profile_handler))
}
