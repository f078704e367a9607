use chrono::{Duration, NaiveDate, Utc};
use migration::MigratorTrait;
use sea_orm::prelude::*;
use sea_orm::ActiveValue;
use tracing::info;

use padel_entities::schema::enums::{
    AgeBracket, CategoryGender, CourtPosition, SmashKind, TournamentPrivacy, TournamentType,
    UserGender, UserRole,
};
use padel_entities::schema::{
    category, couple, facility, game_match, round, tournament, tournament_category,
    tournament_inscription, user, user_token,
};

use crate::auth::hash_password;
use crate::state::AppState;

#[derive(clap::Subcommand)]
pub enum Command {
    /// Drop and recreate the schema, then load the development fixture.
    Seed,
}

impl Command {
    pub async fn run(&self, app_state: AppState) -> anyhow::Result<()> {
        match self {
            Command::Seed => seed(app_state).await,
        }
    }
}

async fn seed_user(
    db: &DatabaseConnection,
    username: &str,
    email: &str,
    password: &str,
    genere: UserGender,
    rol: UserRole,
    position: CourtPosition,
    prefsmash: SmashKind,
    birthdate: Option<NaiveDate>,
) -> anyhow::Result<user::Model> {
    let user = user::ActiveModel {
        id: ActiveValue::NotSet,
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        username: ActiveValue::Set(username.to_string()),
        password_hash: ActiveValue::Set(hash_password(password)?),
        email: ActiveValue::Set(email.to_string()),
        name: ActiveValue::Set(Some(username.to_string())),
        surname: ActiveValue::Set(None),
        birthdate: ActiveValue::Set(birthdate),
        genere: ActiveValue::Set(genere),
        rol: ActiveValue::Set(rol),
        position: ActiveValue::Set(Some(position)),
        phone: ActiveValue::Set(Some("638129100".to_string())),
        photo: ActiveValue::Set(None),
        license: ActiveValue::Set(None),
        matchname: ActiveValue::Set(Some(username.to_string())),
        prefsmash: ActiveValue::Set(Some(prefsmash)),
        club: ActiveValue::Set(Some("Club Padel Manresa".to_string())),
        timeplay: ActiveValue::Set(None),
    };
    Ok(user.insert(db).await?)
}

async fn seed(app_state: AppState) -> anyhow::Result<()> {
    let db = &app_state.db;

    info!("Resetting database");
    migration::Migrator::fresh(db).await?;

    info!("Creating default users");
    let admin = seed_user(
        db,
        "admin",
        "admin@padelcore.com",
        "admin.2020",
        UserGender::Male,
        UserRole::Owner,
        CourtPosition::Left,
        SmashKind::Forehand,
        None,
    )
    .await?;
    let player_1 = seed_user(
        db,
        "sergialsina",
        "sergia@gmail.com",
        "a1s2d3f4",
        UserGender::Male,
        UserRole::Player,
        CourtPosition::Right,
        SmashKind::Slice,
        NaiveDate::from_ymd_opt(1989, 1, 1),
    )
    .await?;
    let player_2 = seed_user(
        db,
        "annagarcia",
        "anna.garcia@gmail.com",
        "r45tgt",
        UserGender::Female,
        UserRole::Player,
        CourtPosition::Left,
        SmashKind::Lob,
        NaiveDate::from_ymd_opt(1994, 6, 12),
    )
    .await?;
    let player_3 = seed_user(
        db,
        "marcvila",
        "marc.vila@gmail.com",
        "q1w2e3r4",
        UserGender::Male,
        UserRole::Player,
        CourtPosition::Right,
        SmashKind::Volley,
        NaiveDate::from_ymd_opt(1991, 11, 3),
    )
    .await?;

    user_token::ActiveModel {
        id: ActiveValue::NotSet,
        token: ActiveValue::Set(
            "656e50e154865a5dc469b80437ed2f963b8f58c8857b66c9bf".to_string(),
        ),
        user_id: ActiveValue::Set(player_1.id),
    }
    .insert(db)
    .await?;

    info!("Creating default categories");
    let mut categories = Vec::new();
    for (genere, age, level) in [
        (CategoryGender::Mixed, AgeBracket::Seniors, Some(1)),
        (CategoryGender::Men, AgeBracket::Juniors, None),
        (CategoryGender::Women, AgeBracket::Seniors, Some(2)),
    ] {
        let category = category::ActiveModel {
            id: ActiveValue::NotSet,
            genere: ActiveValue::Set(genere),
            age: ActiveValue::Set(age),
            level: ActiveValue::Set(level),
        };
        categories.push(category.insert(db).await?);
    }

    info!("Creating default facilities");
    let facility_1 = facility::ActiveModel {
        id: ActiveValue::NotSet,
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
    .insert(db)
    .await?;
    facility::ActiveModel {
        id: ActiveValue::NotSet,
        name: ActiveValue::Set("Club Padel Igualada".to_string()),
        latitude: ActiveValue::Set(Some(42.748809)),
        longitude: ActiveValue::Set(Some(1.844407)),
        address: ActiveValue::Set(None),
        postal_code: ActiveValue::Set(None),
        town: ActiveValue::Set(Some("Igualada".to_string())),
        province: ActiveValue::Set(Some("Barcelona".to_string())),
        phone: ActiveValue::Set(None),
        email: ActiveValue::Set(None),
        web: ActiveValue::Set(None),
    }
    .insert(db)
    .await?;

    info!("Creating default tournaments");
    let now = Utc::now().naive_utc();
    let week = Duration::weeks(1);

    // Registration already closed, finish two weeks out: derives as playing.
    let tournament_1 = tournament::ActiveModel {
        id: ActiveValue::NotSet,
        created_at: ActiveValue::Set(now),
        edited_at: ActiveValue::Set(None),
        name: ActiveValue::Set("Torneig de Primavera".to_string()),
        start_register_date: ActiveValue::Set(now - week * 3),
        finish_register_date: ActiveValue::Set(now - week),
        start_date: ActiveValue::Set(now + week),
        finish_date: ActiveValue::Set(now + week * 2),
        limit_couples: ActiveValue::Set(Some(16)),
        inscription_type: ActiveValue::Set(Some(TournamentPrivacy::Public)),
        tournament_type: ActiveValue::Set(TournamentType::Draft),
        price_1: ActiveValue::Set(20.0),
        price_2: ActiveValue::Set(8.0),
        description: ActiveValue::Set(None),
        poster: ActiveValue::Set(None),
        owner_id: ActiveValue::Set(admin.id),
        facility_id: ActiveValue::Set(facility_1.id),
    }
    .insert(db)
    .await?;

    // Registration opens in three weeks: derives as open.
    let tournament_2 = tournament::ActiveModel {
        id: ActiveValue::NotSet,
        created_at: ActiveValue::Set(now),
        edited_at: ActiveValue::Set(None),
        name: ActiveValue::Set("Torneig de Tardor".to_string()),
        start_register_date: ActiveValue::Set(now + week * 3),
        finish_register_date: ActiveValue::Set(now + week * 4),
        start_date: ActiveValue::Set(now + week * 5),
        finish_date: ActiveValue::Set(now + week * 6),
        limit_couples: ActiveValue::Set(None),
        inscription_type: ActiveValue::Set(Some(TournamentPrivacy::Public)),
        tournament_type: ActiveValue::Set(TournamentType::Americana),
        price_1: ActiveValue::Set(20.0),
        price_2: ActiveValue::Set(8.0),
        description: ActiveValue::Set(None),
        poster: ActiveValue::Set(None),
        owner_id: ActiveValue::Set(admin.id),
        facility_id: ActiveValue::Set(facility_1.id),
    }
    .insert(db)
    .await?;

    for tournament in [&tournament_1, &tournament_2] {
        for category in &categories {
            tournament_category::ActiveModel {
                tournament_id: ActiveValue::Set(tournament.id),
                category_id: ActiveValue::Set(category.id),
            }
            .insert(db)
            .await?;
        }
    }

    for player in [&player_1, &player_2, &player_3] {
        tournament_inscription::ActiveModel {
            tournament_id: ActiveValue::Set(tournament_1.id),
            user_id: ActiveValue::Set(player.id),
        }
        .insert(db)
        .await?;
    }

    info!("Creating default bracket");
    let couple_1 = couple::ActiveModel {
        id: ActiveValue::NotSet,
        tournament_id: ActiveValue::Set(tournament_1.id),
        first_player_id: ActiveValue::Set(player_1.id),
        second_player_id: ActiveValue::Set(player_2.id),
    }
    .insert(db)
    .await?;
    let couple_2 = couple::ActiveModel {
        id: ActiveValue::NotSet,
        tournament_id: ActiveValue::Set(tournament_1.id),
        first_player_id: ActiveValue::Set(admin.id),
        second_player_id: ActiveValue::Set(player_3.id),
    }
    .insert(db)
    .await?;

    let round_1 = round::ActiveModel {
        id: ActiveValue::NotSet,
        tournament_id: ActiveValue::Set(tournament_1.id),
        number: ActiveValue::Set(1),
    }
    .insert(db)
    .await?;

    game_match::ActiveModel {
        id: ActiveValue::NotSet,
        round_id: ActiveValue::Set(round_1.id),
        home_couple_id: ActiveValue::Set(couple_1.id),
        away_couple_id: ActiveValue::Set(couple_2.id),
        home_score: ActiveValue::Set(Some(6)),
        away_score: ActiveValue::Set(Some(3)),
    }
    .insert(db)
    .await?;

    info!("Seed data loaded");
    Ok(())
}
