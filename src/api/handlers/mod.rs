use serde::Deserialize;

use crate::api::RankingSource;
use crate::cache::QueryClient;
use crate::config::AppConfig;
use crate::domain::GroupFilter;
use crate::pagination::{PageSize, PaginationConfig};
use crate::state::LeaderboardState;

pub mod ranking;

pub struct AppState<S> {
    pub client: QueryClient<S>,
    pub config: AppConfig,
}

impl<S: RankingSource> AppState<S> {
    pub fn new(source: S, config: AppConfig) -> Self {
        Self {
            client: QueryClient::new(source, config.query.clone()),
            config,
        }
    }

    /// Replay the requested filter, page size and page on top of the latest ranking
    pub async fn load_state(&self, group: GroupFilter, page_size: PageSize, page: usize) -> LeaderboardState {
        let pagination = PaginationConfig::new().with_threshold(self.config.layout.pagination_threshold);
        let mut state = LeaderboardState::new(pagination);

        state.set_filter(group);
        let result = self.client.query(group).await;
        state.receive(group, result);
        state.set_page_size(page_size);
        state.set_page(page);
        state
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct RankingParams {
    pub group: Option<String>,
    pub page: Option<String>,
    pub page_size: Option<String>,
    pub vw: Option<String>,
}

impl RankingParams {
    /// Unparseable page numbers fall back to the first page
    pub fn page(&self) -> usize {
        self.page
            .as_deref()
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(0)
    }

    /// Unknown sizes fall back to the default size
    pub fn page_size(&self) -> PageSize {
        self.page_size
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    pub fn viewport_width(&self) -> Option<u32> {
        self.vw.as_deref().and_then(|w| w.trim().parse().ok())
    }
}
