pub mod models;

pub use models::{GroupFilter, PlayerRecord, ResultSet};
