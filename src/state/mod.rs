mod leaderboard;

pub use leaderboard::{LeaderboardState, RankedRow};
