use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::state::{LeaderboardState, RankedRow};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingItem {
    pub rank: usize,
    pub key: String,
    pub name: String,
    pub tournaments_played: u32,
    pub points: u32,
    pub profile_image_url: Option<String>,
}

impl From<RankedRow<'_>> for RankingItem {
    fn from(row: RankedRow<'_>) -> Self {
        Self {
            rank: row.rank,
            key: row.key(),
            name: row.player.name.clone(),
            tournaments_played: row.player.tournaments_played,
            points: row.player.points,
            profile_image_url: row.player.profile_image_url.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingResponse {
    pub group: &'static str,
    pub items: Vec<RankingItem>,
    pub top_five: Vec<RankingItem>,
    pub total: usize,
    pub page: usize,
    pub page_size: &'static str,
    pub page_count: usize,
    pub padding_rows: usize,
    pub paginated: bool,
    pub fetched_at: Option<DateTime<Utc>>,
    pub error: Option<String>,
}

impl From<&LeaderboardState> for RankingResponse {
    fn from(state: &LeaderboardState) -> Self {
        let results = state.results();
        Self {
            group: state.filter().value(),
            items: state.rows().into_iter().map(RankingItem::from).collect(),
            top_five: state.top_five().into_iter().map(RankingItem::from).collect(),
            total: results.len(),
            page: state.page_index(),
            page_size: state.page().page_size().value(),
            page_count: state.page_count(),
            padding_rows: state.padding_rows(),
            paginated: state.is_paginated(),
            fetched_at: (results.revision > 0).then_some(results.fetched_at),
            error: state.last_error().map(str::to_string),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
