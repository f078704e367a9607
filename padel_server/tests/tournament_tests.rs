mod common;

use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};
use serde_json::Value;
use tracing_test::traced_test;

use padel_entities::schema::enums::{
    AgeBracket, CategoryGender, TournamentPrivacy, TournamentType, UserGender, UserRole,
};
use padel_entities::schema::{category, facility, tournament, tournament_category, user};

use crate::common::Fixture;

const OWNER_ID: i32 = 50;

/// One facility, four categories and three tournaments:
///
/// | id | type      | privacy | window  | categories               |
/// |----|-----------|---------|---------|--------------------------|
/// | 1  | Draft     | Public  | playing | men/juniors              |
/// | 2  | Americana | Private | open    | women/seniors            |
/// | 3  | League    | Public  | closed  | men/juniors, women/seniors, men/seniors |
async fn setup_tournaments(db: DatabaseConnection) {
    let now = Utc::now().naive_utc();
    let week = Duration::weeks(1);

    user::ActiveModel {
        id: ActiveValue::Set(OWNER_ID),
        created_at: ActiveValue::Set(now),
        username: ActiveValue::Set("owner".to_string()),
        password_hash: ActiveValue::Set("unused".to_string()),
        email: ActiveValue::Set("owner@example.com".to_string()),
        name: ActiveValue::Set(None),
        surname: ActiveValue::Set(None),
        birthdate: ActiveValue::Set(None),
        genere: ActiveValue::Set(UserGender::Male),
        rol: ActiveValue::Set(UserRole::Owner),
        position: ActiveValue::Set(None),
        phone: ActiveValue::Set(None),
        photo: ActiveValue::Set(None),
        license: ActiveValue::Set(None),
        matchname: ActiveValue::Set(None),
        prefsmash: ActiveValue::Set(None),
        club: ActiveValue::Set(None),
        timeplay: ActiveValue::Set(None),
    }
    .insert(&db)
    .await
    .unwrap();

    facility::ActiveModel {
        id: ActiveValue::Set(1),
        name: ActiveValue::Set("Club Padel Manresa".to_string()),
        latitude: ActiveValue::Set(Some(41.748809)),
        longitude: ActiveValue::Set(Some(1.844407)),
        address: ActiveValue::Set(None),
        postal_code: ActiveValue::Set(None),
        town: ActiveValue::Set(Some("Manresa".to_string())),
        province: ActiveValue::Set(Some("Barcelona".to_string())),
        phone: ActiveValue::Set(None),
        email: ActiveValue::Set(None),
        web: ActiveValue::Set(None),
    }
    .insert(&db)
    .await
    .unwrap();

    for (id, genere, age) in [
        (1, CategoryGender::Men, AgeBracket::Juniors),
        (2, CategoryGender::Women, AgeBracket::Seniors),
        (3, CategoryGender::Mixed, AgeBracket::Seniors),
        (4, CategoryGender::Men, AgeBracket::Seniors),
    ] {
        category::ActiveModel {
            id: ActiveValue::Set(id),
            genere: ActiveValue::Set(genere),
            age: ActiveValue::Set(age),
            level: ActiveValue::Set(None),
        }
        .insert(&db)
        .await
        .unwrap();
    }

    let windows = [
        // registration closed a week ago, finishes in two: playing
        (1, now - week * 3, now - week, now + week, now + week * 2),
        // registration still open: open
        (2, now - week, now + week, now + week * 2, now + week * 3),
        // finished a week ago: closed
        (3, now - week * 5, now - week * 4, now - week * 2, now - week),
    ];
    let types = [
        (1, TournamentType::Draft, TournamentPrivacy::Public),
        (2, TournamentType::Americana, TournamentPrivacy::Private),
        (3, TournamentType::League, TournamentPrivacy::Public),
    ];

    for ((id, start_register, finish_register, start, finish), (_, tournament_type, privacy)) in
        windows.into_iter().zip(types)
    {
        tournament::ActiveModel {
            id: ActiveValue::Set(id),
            created_at: ActiveValue::Set(now),
            edited_at: ActiveValue::Set(None),
            name: ActiveValue::Set(format!("Tournament {}", id)),
            start_date: ActiveValue::Set(start),
            finish_date: ActiveValue::Set(finish),
            start_register_date: ActiveValue::Set(start_register),
            finish_register_date: ActiveValue::Set(finish_register),
            limit_couples: ActiveValue::Set(None),
            inscription_type: ActiveValue::Set(Some(privacy)),
            tournament_type: ActiveValue::Set(tournament_type),
            price_1: ActiveValue::Set(20.0),
            price_2: ActiveValue::Set(8.0),
            description: ActiveValue::Set(None),
            poster: ActiveValue::Set(None),
            owner_id: ActiveValue::Set(OWNER_ID),
            facility_id: ActiveValue::Set(1),
        }
        .insert(&db)
        .await
        .unwrap();
    }

    for (tournament_id, category_id) in [(1, 1), (2, 2), (3, 1), (3, 2), (3, 4)] {
        tournament_category::ActiveModel {
            tournament_id: ActiveValue::Set(tournament_id),
            category_id: ActiveValue::Set(category_id),
        }
        .insert(&db)
        .await
        .unwrap();
    }
}

async fn authenticated_fixture() -> Fixture {
    let mut fixture = Fixture::new_with_setup(setup_tournaments).await;
    fixture.create_user_and_token("testuser").await;
    fixture
}

fn tournament_ids(listing: &[Value]) -> Vec<i64> {
    listing
        .iter()
        .map(|t| t["id"].as_i64().unwrap())
        .collect()
}

#[tokio::test]
#[traced_test]
async fn test_listing_requires_auth() {
    let mut fixture = Fixture::new_with_setup(setup_tournaments).await;

    let response = fixture.get("/api/tournaments").await;
    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[traced_test]
async fn test_invalid_filter_values_are_rejected() {
    let mut fixture = authenticated_fixture().await;

    for uri in [
        "/api/tournaments?type=Q",
        "/api/tournaments?type=AA",
        "/api/tournaments?inscription_type=Z",
        // `M` is a user gender code, not a category gender code
        "/api/tournaments?genere=M",
        "/api/tournaments?age=X",
    ] {
        let response = fixture.get(uri).await;
        assert_eq!(response.status(), 400, "{} should be rejected", uri);
    }

    let mut response = fixture.get("/api/tournaments?type=Q").await;
    assert_eq!(response.status(), 400);
    let body: Value = response.json().await;
    assert_eq!(body["message"], "Invalid Type");
}

#[tokio::test]
#[traced_test]
async fn test_listing_without_filters_returns_everything() {
    let mut fixture = authenticated_fixture().await;

    let mut response = fixture.get("/api/tournaments").await;
    assert_eq!(response.status(), 200);

    let listing: Vec<Value> = response.json().await;
    assert_eq!(listing.len(), 3);
}

#[tokio::test]
#[traced_test]
async fn test_filter_by_type() {
    let mut fixture = authenticated_fixture().await;

    let mut response = fixture.get("/api/tournaments?type=D").await;
    assert_eq!(response.status(), 200);
    let listing: Vec<Value> = response.json().await;
    assert_eq!(tournament_ids(&listing), vec![1]);

    // codes are accepted case-insensitively
    let mut response = fixture.get("/api/tournaments?type=d").await;
    assert_eq!(response.status(), 200);
    let listing: Vec<Value> = response.json().await;
    assert_eq!(tournament_ids(&listing), vec![1]);
}

#[tokio::test]
#[traced_test]
async fn test_filter_by_inscription_type() {
    let mut fixture = authenticated_fixture().await;

    let mut response = fixture.get("/api/tournaments?inscription_type=C").await;
    assert_eq!(response.status(), 200);
    let listing: Vec<Value> = response.json().await;
    assert_eq!(tournament_ids(&listing), vec![2]);
}

#[tokio::test]
#[traced_test]
async fn test_filter_by_category_genere() {
    let mut fixture = authenticated_fixture().await;

    let mut response = fixture.get("/api/tournaments?genere=H").await;
    assert_eq!(response.status(), 200);
    let listing: Vec<Value> = response.json().await;

    // Tournament 3 carries two men's categories but must appear once.
    let mut ids = tournament_ids(&listing);
    ids.sort();
    assert_eq!(ids, vec![1, 3]);
}

#[tokio::test]
#[traced_test]
async fn test_filter_by_age() {
    let mut fixture = authenticated_fixture().await;

    let mut response = fixture.get("/api/tournaments?age=S").await;
    assert_eq!(response.status(), 200);
    let listing: Vec<Value> = response.json().await;

    let mut ids = tournament_ids(&listing);
    ids.sort();
    assert_eq!(ids, vec![2, 3]);
}

#[tokio::test]
#[traced_test]
async fn test_filters_combine_conjunctively() {
    let mut fixture = authenticated_fixture().await;

    let mut response = fixture.get("/api/tournaments?type=L&genere=F").await;
    assert_eq!(response.status(), 200);
    let listing: Vec<Value> = response.json().await;
    assert_eq!(tournament_ids(&listing), vec![3]);

    let mut response = fixture.get("/api/tournaments?type=A&genere=H").await;
    assert_eq!(response.status(), 200);
    let listing: Vec<Value> = response.json().await;
    assert!(listing.is_empty());

    let mut response = fixture.get("/api/tournaments?genere=H&age=S").await;
    assert_eq!(response.status(), 200);
    let listing: Vec<Value> = response.json().await;
    assert_eq!(tournament_ids(&listing), vec![3]);
}

#[tokio::test]
#[traced_test]
async fn test_status_is_derived_from_the_clock() {
    let mut fixture = authenticated_fixture().await;

    let mut response = fixture.get("/api/tournaments").await;
    assert_eq!(response.status(), 200);
    let listing: Vec<Value> = response.json().await;

    for entry in &listing {
        let expected = match entry["id"].as_i64().unwrap() {
            1 => "G",
            2 => "O",
            3 => "C",
            other => panic!("unexpected tournament {}", other),
        };
        assert_eq!(entry["status"], expected);
    }
}

#[tokio::test]
#[traced_test]
async fn test_get_tournament_embeds_facility_and_categories() {
    let mut fixture = Fixture::new_with_setup(setup_tournaments).await;

    // The single-tournament view is public.
    let mut response = fixture.get("/api/tournaments/1").await;
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await;
    assert_eq!(body["name"], "Tournament 1");
    assert_eq!(body["type"], "D");
    assert_eq!(body["status"], "G");
    assert_eq!(body["facility"]["name"], "Club Padel Manresa");
    assert_eq!(body["facility"]["town"], "Manresa");
    assert_eq!(body["categories"].as_array().unwrap().len(), 1);
    assert_eq!(body["categories"][0]["genere"], "H");
}

#[tokio::test]
#[traced_test]
async fn test_get_unknown_tournament() {
    let mut fixture = Fixture::new_with_setup(setup_tournaments).await;

    let mut response = fixture.get("/api/tournaments/999").await;
    assert_eq!(response.status(), 400);
    let body: Value = response.json().await;
    assert_eq!(body["message"], "Tournament not found");
}
