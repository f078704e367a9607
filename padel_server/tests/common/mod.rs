use std::borrow::BorrowMut;
use std::future::Future;

use axum::body::Body;
use axum::http::request::Builder;
use axum::http::Request;
use axum::response::Response;
use base64::{engine::general_purpose, Engine as _};
use http_body::{combinators::UnsyncBoxBody, Body as _};
use sea_orm::DatabaseConnection;
use tower::Service;

use padel_server::auth::CreateTokenResponse;
use padel_server::state::AppState;
use padel_server::users::RegisterUserRequest;

pub struct Fixture {
    pub app: axum::Router,
    pub db: DatabaseConnection,
    pub auth: Auth,
}

pub enum Auth {
    None,
    Basic { username: String, password: String },
    Bearer { token: String },
}

pub struct ApiResponse {
    response: Response<UnsyncBoxBody<axum::body::Bytes, axum::Error>>,
}

impl ApiResponse {
    pub fn status(&self) -> axum::http::StatusCode {
        self.response.status()
    }

    pub async fn json<T: serde::de::DeserializeOwned>(&mut self) -> T {
        let mut buf = Vec::new();

        let body = self.response.body_mut();

        while let Some(next) = body.data().await {
            buf.extend_from_slice(&next.unwrap());
        }
        serde_json::from_slice(&buf).unwrap()
    }
}

impl From<Response<UnsyncBoxBody<axum::body::Bytes, axum::Error>>> for ApiResponse {
    fn from(response: Response<UnsyncBoxBody<axum::body::Bytes, axum::Error>>) -> Self {
        Self { response }
    }
}

#[allow(dead_code)]
pub fn register_request(username: &str, email: &str, password: &str) -> RegisterUserRequest {
    RegisterUserRequest {
        username: username.to_string(),
        email: email.to_string(),
        password: password.to_string(),
        genere: "M".to_string(),
        rol: "P".to_string(),
        ..Default::default()
    }
}

impl Fixture {
    #[allow(dead_code)]
    pub async fn new() -> Self {
        Self::new_with_setup(|_| async {}).await
    }

    pub async fn new_with_setup<F, Fut>(setup_func: F) -> Self
    where
        F: FnOnce(DatabaseConnection) -> Fut,
        Fut: Future<Output = ()>,
    {
        let state = AppState::new_test_app().await;
        let db = state.db.clone();
        setup_func(db.clone()).await;
        let app = padel_server::app_with_state(state).await;

        Self {
            app,
            db,
            auth: Auth::None,
        }
    }

    /// Registers a user and leaves the fixture with their basic credentials.
    #[allow(dead_code)]
    pub async fn register_user(&mut self, username: &str, password: &str) {
        let email = format!("{}@example.com", username);
        let response = self
            .post_json(
                "/api/users/register",
                register_request(username, &email, password),
            )
            .await;
        assert_eq!(response.status(), 200);

        self.auth = Auth::Basic {
            username: username.to_string(),
            password: password.to_string(),
        };
    }

    /// Registers a user, creates a token for them, and leaves the fixture
    /// authenticated with that token.
    #[allow(dead_code)]
    pub async fn create_user_and_token(&mut self, username: &str) -> String {
        self.register_user(username, "testtest").await;

        let mut response = self.post_json_no_body("/api/account/create_token").await;
        assert_eq!(response.status(), 200);
        let token: CreateTokenResponse = response.json().await;

        self.auth = Auth::Bearer {
            token: token.token.clone(),
        };
        token.token
    }

    fn get_base_request(&self) -> Builder {
        let builder = Request::builder();

        let builder = match &self.auth {
            Auth::None => builder,
            Auth::Basic { username, password } => builder.header(
                "Authorization",
                format!(
                    "Basic {}",
                    general_purpose::STANDARD.encode(format!("{}:{}", username, password))
                ),
            ),
            Auth::Bearer { token } => {
                builder.header("Authorization", format!("Bearer {}", token))
            }
        };

        builder
    }

    #[allow(dead_code)]
    pub async fn get(&mut self, path: &str) -> ApiResponse {
        let request = self
            .get_base_request()
            .uri(path)
            .body(Body::empty())
            .unwrap();
        self.app.borrow_mut().call(request).await.unwrap().into()
    }

    #[allow(dead_code)]
    pub async fn post_json_no_body(&mut self, path: &str) -> ApiResponse {
        let request = self
            .get_base_request()
            .method("POST")
            .header("Content-Type", "application/json")
            .uri(path)
            .body(Body::empty())
            .unwrap();
        self.app.borrow_mut().call(request).await.unwrap().into()
    }

    #[allow(dead_code)]
    pub async fn post_json<T>(&mut self, path: &str, body: T) -> ApiResponse
    where
        T: serde::Serialize,
    {
        let request = self
            .get_base_request()
            .method("POST")
            .header("Content-Type", "application/json")
            .uri(path)
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap();
        self.app.borrow_mut().call(request).await.unwrap().into()
    }

    #[allow(dead_code)]
    pub async fn put_json<T>(&mut self, path: &str, body: T) -> ApiResponse
    where
        T: serde::Serialize,
    {
        let request = self
            .get_base_request()
            .method("PUT")
            .header("Content-Type", "application/json")
            .uri(path)
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap();
        self.app.borrow_mut().call(request).await.unwrap().into()
    }
}
