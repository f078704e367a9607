use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::error;

#[derive(Debug, Clone)]
pub struct ApiError {
    pub message: String,
    pub code: StatusCode,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ApiErrorBody {
    message: String,
}

impl ApiError {
    pub fn new(message: String) -> Self {
        ApiError {
            message,
            code: StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        error!("Error while handling request {}", err.to_string());
        ApiError {
            message: err.to_string(),
            code: StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<(StatusCode, &str)> for ApiError {
    fn from((code, message): (StatusCode, &str)) -> Self {
        ApiError {
            message: message.to_string(),
            code,
        }
    }
}

impl From<(StatusCode, String)> for ApiError {
    fn from((code, message): (StatusCode, String)) -> Self {
        ApiError { message, code }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.code,
            Json(ApiErrorBody {
                message: self.message,
            }),
        )
            .into_response()
    }
}

pub fn handle_error<E>(err: E) -> ApiError
where
    E: std::error::Error,
{
    error!("Error while handling request {}", err);
    ApiError::new(err.to_string())
}

pub fn handle_error_dyn(err: Box<dyn std::error::Error>) -> ApiError {
    error!("Error while handling request {}", err);
    ApiError::new(err.to_string())
}
