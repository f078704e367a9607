mod common;

use padel_server::auth::{CreateTokenResponse, DeleteTokenRequest};
use sea_orm::prelude::*;
use sea_orm::PaginatorTrait;
use tracing_test::traced_test;

use padel_entities::schema::user_token;

use crate::common::{Auth, Fixture};

#[tokio::test]
#[traced_test]
async fn test_create_token_with_basic_auth() {
    let mut fixture = Fixture::new().await;
    fixture.register_user("testuser", "testtest").await;

    let mut response = fixture.post_json_no_body("/api/account/create_token").await;
    assert_eq!(response.status(), 200);

    let token: CreateTokenResponse = response.json().await;
    assert_eq!(token.token.len(), 50);
    assert!(token.token.chars().all(|c| c.is_ascii_hexdigit()));
}

#[tokio::test]
#[traced_test]
async fn test_create_token_with_email_credentials() {
    let mut fixture = Fixture::new().await;
    fixture.register_user("testuser", "testtest").await;

    fixture.auth = Auth::Basic {
        username: "testuser@example.com".to_string(),
        password: "testtest".to_string(),
    };

    let response = fixture.post_json_no_body("/api/account/create_token").await;
    assert_eq!(response.status(), 200);
}

#[tokio::test]
#[traced_test]
async fn test_create_token_requires_authorization_header() {
    let mut fixture = Fixture::new().await;

    let response = fixture.post_json_no_body("/api/account/create_token").await;
    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[traced_test]
async fn test_create_token_with_wrong_password() {
    let mut fixture = Fixture::new().await;
    fixture.register_user("testuser", "testtest").await;

    fixture.auth = Auth::Basic {
        username: "testuser".to_string(),
        password: "wrong".to_string(),
    };

    let response = fixture.post_json_no_body("/api/account/create_token").await;
    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[traced_test]
async fn test_create_token_with_unknown_user() {
    let mut fixture = Fixture::new().await;

    fixture.auth = Auth::Basic {
        username: "nobody".to_string(),
        password: "testtest".to_string(),
    };

    let response = fixture.post_json_no_body("/api/account/create_token").await;
    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[traced_test]
async fn test_token_quota_is_enforced() {
    let mut fixture = Fixture::new().await;
    fixture.register_user("testuser", "testtest").await;

    // The default configuration allows five tokens per user.
    for _ in 0..5 {
        let response = fixture.post_json_no_body("/api/account/create_token").await;
        assert_eq!(response.status(), 200);
    }

    let response = fixture.post_json_no_body("/api/account/create_token").await;
    assert_eq!(response.status(), 400);

    let token_count = user_token::Entity::find()
        .count(&fixture.db)
        .await
        .unwrap();
    assert_eq!(token_count, 5);
}

#[tokio::test]
#[traced_test]
async fn test_delete_own_token() {
    let mut fixture = Fixture::new().await;
    let token = fixture.create_user_and_token("testuser").await;

    let response = fixture
        .post_json(
            "/api/account/delete_token",
            DeleteTokenRequest {
                token: token.clone(),
            },
        )
        .await;
    assert_eq!(response.status(), 200);

    // The deleted token no longer grants access.
    let response = fixture.get("/api/account/profile").await;
    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[traced_test]
async fn test_delete_token_of_other_user_fails() {
    let mut fixture = Fixture::new().await;
    let first_token = fixture.create_user_and_token("first").await;
    let _second_token = fixture.create_user_and_token("second").await;

    let response = fixture
        .post_json(
            "/api/account/delete_token",
            DeleteTokenRequest {
                token: first_token.clone(),
            },
        )
        .await;
    assert_eq!(response.status(), 401);

    // The token survives the failed deletion.
    fixture.auth = Auth::Bearer { token: first_token };
    let response = fixture.get("/api/account/profile").await;
    assert_eq!(response.status(), 200);
}

#[tokio::test]
#[traced_test]
async fn test_delete_unknown_token() {
    let mut fixture = Fixture::new().await;
    fixture.create_user_and_token("testuser").await;

    let response = fixture
        .post_json(
            "/api/account/delete_token",
            DeleteTokenRequest {
                token: "0".repeat(50),
            },
        )
        .await;
    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[traced_test]
async fn test_protected_route_rejects_missing_and_bogus_tokens() {
    let mut fixture = Fixture::new().await;

    let response = fixture.get("/api/account/profile").await;
    assert_eq!(response.status(), 401);

    fixture.auth = Auth::Bearer {
        token: "f".repeat(50),
    };
    let response = fixture.get("/api/account/profile").await;
    assert_eq!(response.status(), 401);
}
