use argon2::Argon2;
use axum::async_trait;
use axum::extract::{FromRequestParts, State};
use axum::headers::authorization::{Basic, Bearer};
use axum::headers::Authorization;
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router, TypedHeader};
use password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use rand::{thread_rng, Rng};
use sea_orm::prelude::*;
use sea_orm::{ActiveValue, ModelTrait, PaginatorTrait};
use serde::{Deserialize, Serialize};

use padel_entities::schema::{user, user_token};

use crate::response::{handle_error, ApiError};
use crate::state::AppState;

/// Resolves `Authorization: Bearer <token>` to the owning user row.
/// Handlers taking this extractor never run for unauthenticated requests.
pub struct ExtractAuthenticatedUser(pub user::Model);

#[async_trait]
impl FromRequestParts<AppState> for ExtractAuthenticatedUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let TypedHeader(bearer_header) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| (StatusCode::UNAUTHORIZED, "Token required"))?;

        let token = user_token::Entity::find()
            .filter(user_token::Column::Token.eq(bearer_header.token()))
            .one(&state.db)
            .await
            .map_err(handle_error)?;

        let token = token.ok_or((StatusCode::UNAUTHORIZED, "Invalid token"))?;

        let user = user::Entity::find_by_id(token.user_id)
            .one(&state.db)
            .await
            .map_err(handle_error)?;

        let user = user.ok_or((StatusCode::UNAUTHORIZED, "Invalid token"))?;

        Ok(ExtractAuthenticatedUser(user))
    }
}

pub fn hash_password(pwd: &str) -> Result<String, password_hash::Error> {
    let salt = SaltString::generate(&mut thread_rng());
    let pwd = Argon2::default().hash_password(pwd.as_bytes(), &salt)?;
    Ok(pwd.to_string())
}

pub fn verify_password(pwd: &str, stored_hash: &str) -> bool {
    let Ok(parsed_hash) = PasswordHash::new(stored_hash) else {
        return false;
    };
    let algs: &[&dyn PasswordVerifier] = &[&Argon2::default()];
    parsed_hash.verify_password(algs, pwd).is_ok()
}

/// 25 random bytes, hex encoded. Stored and sent verbatim.
pub fn generate_token() -> String {
    let raw: [u8; 25] = thread_rng().gen();
    hex::encode(raw)
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CreateTokenResponse {
    pub token: String,
}

pub async fn create_token_handler(
    State(state): State<AppState>,
    basic_header: Option<TypedHeader<Authorization<Basic>>>,
) -> Result<Json<CreateTokenResponse>, ApiError> {
    let TypedHeader(basic_header) =
        basic_header.ok_or((StatusCode::UNAUTHORIZED, "Authorization header required"))?;
    let auth_username = basic_header.username().to_string();
    let auth_password = basic_header.password().to_string();

    if auth_username.is_empty() || auth_password.is_empty() {
        return Err((StatusCode::UNAUTHORIZED, "Username and password required").into());
    }

    // Basic credentials accept the email as well as the username
    let current_user = user::Entity::find()
        .filter(user::Column::Email.eq(&auth_username))
        .one(&state.db)
        .await
        .map_err(handle_error)?;
    let current_user = match current_user {
        Some(current_user) => Some(current_user),
        None => user::Entity::find()
            .filter(user::Column::Username.eq(&auth_username))
            .one(&state.db)
            .await
            .map_err(handle_error)?,
    };

    let current_user = current_user.ok_or((StatusCode::UNAUTHORIZED, "User not found"))?;

    if !verify_password(&auth_password, &current_user.password_hash) {
        return Err((StatusCode::UNAUTHORIZED, "User not found").into());
    }

    let token_count = user_token::Entity::find()
        .filter(user_token::Column::UserId.eq(current_user.id))
        .count(&state.db)
        .await
        .map_err(handle_error)?;

    if token_count >= state.config.max_user_tokens {
        return Err((
            StatusCode::BAD_REQUEST,
            "The user has reached the maximum number of tokens allowed",
        )
            .into());
    }

    let token_string = generate_token();
    let token = user_token::ActiveModel {
        id: ActiveValue::NotSet,
        token: ActiveValue::Set(token_string.clone()),
        user_id: ActiveValue::Set(current_user.id),
    };
    token.insert(&state.db).await.map_err(handle_error)?;

    Ok(Json(CreateTokenResponse {
        token: token_string,
    }))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteTokenRequest {
    pub token: String,
}

pub async fn delete_token_handler(
    State(db): State<DatabaseConnection>,
    ExtractAuthenticatedUser(current_user): ExtractAuthenticatedUser,
    Json(request): Json<DeleteTokenRequest>,
) -> Result<(), ApiError> {
    let selected_token = user_token::Entity::find()
        .filter(user_token::Column::Token.eq(&request.token))
        .one(&db)
        .await
        .map_err(handle_error)?;

    let selected_token = selected_token.ok_or((StatusCode::UNAUTHORIZED, "Token not found"))?;

    if selected_token.user_id != current_user.id {
        return Err((
            StatusCode::UNAUTHORIZED,
            "This token doesn't belong to the current user",
        )
            .into());
    }

    selected_token.delete(&db).await.map_err(handle_error)?;

    Ok(())
}

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/account/create_token", post(create_token_handler))
        .route("/account/delete_token", post(delete_token_handler))
}
