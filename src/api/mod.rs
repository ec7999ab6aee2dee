pub mod handlers;
pub mod models;
pub mod parsers;
pub mod players_client;
pub mod routes;

pub use players_client::{PlayersApiClient, RankingSource};
