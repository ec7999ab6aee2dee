use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Json},
};
use log::warn;
use std::sync::Arc;

use super::{AppState, RankingParams};
use crate::api::RankingSource;
use crate::api::models::{ErrorResponse, RankingResponse};
use crate::domain::GroupFilter;
use crate::view::{self, VIEWPORT_WIDTH_HINT};

/// HTML ranking page. A missing group shows the first group.
pub async fn ranking_page<S: RankingSource>(
    State(state): State<Arc<AppState<S>>>,
    Query(params): Query<RankingParams>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let group = match params.group.as_deref() {
        None => GroupFilter::default(),
        raw => match GroupFilter::parse(raw) {
            Ok(group) => group,
            Err(e) => return (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
        },
    };

    let leaderboard = state.load_state(group, params.page_size(), params.page()).await;
    if let Some(error) = leaderboard.last_error() {
        warn!("Rendering {} with previous data after failed fetch: {}", group, error);
    }

    let viewport = view::viewport_width(params.viewport_width(), &headers);
    let markup = view::render_page(&leaderboard, &state.config.layout, viewport);

    (
        [("accept-ch", VIEWPORT_WIDTH_HINT), ("vary", VIEWPORT_WIDTH_HINT)],
        Html(markup.into_string()),
    )
        .into_response()
}

/// JSON view of the same state. The group is required here.
pub async fn get_ranking<S: RankingSource>(
    State(state): State<Arc<AppState<S>>>,
    Query(params): Query<RankingParams>,
) -> impl IntoResponse {
    let group = match GroupFilter::parse(params.group.as_deref()) {
        Ok(group) => group,
        Err(e) => {
            return (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: e.to_string() })).into_response();
        }
    };

    let leaderboard = state.load_state(group, params.page_size(), params.page()).await;
    Json(RankingResponse::from(&leaderboard)).into_response()
}

/// Sent by the page when it becomes visible again
pub async fn refocus<S: RankingSource>(State(state): State<Arc<AppState<S>>>) -> impl IntoResponse {
    state.client.refocus().await;
    StatusCode::NO_CONTENT
}
