mod players;

pub use players::parse_players;
