use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};

use crate::api::RankingSource;
use crate::api::handlers::{
    AppState,
    ranking::{get_ranking, ranking_page, refocus},
};

pub fn create_router<S: RankingSource + 'static>(state: Arc<AppState<S>>) -> Router {
    Router::new()
        .route("/", get(ranking_page::<S>))
        .route("/api/ranking", get(get_ranking::<S>))
        .route("/api/refocus", post(refocus::<S>))
        .with_state(state)
}
