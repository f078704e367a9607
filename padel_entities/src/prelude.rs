pub use super::schema::category::Entity as Category;
pub use super::schema::couple::Entity as Couple;
pub use super::schema::facility::Entity as Facility;
pub use super::schema::game_match::Entity as Match;
pub use super::schema::round::Entity as Round;
pub use super::schema::tournament::Entity as Tournament;
pub use super::schema::tournament_category::Entity as TournamentCategory;
pub use super::schema::tournament_inscription::Entity as TournamentInscription;
pub use super::schema::user::Entity as User;
pub use super::schema::user_token::Entity as UserToken;
