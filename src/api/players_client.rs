use std::future::Future;

use anyhow::Result;
use log::info;
use serde_json::Value;
use urlencoding::encode;

use crate::api::parsers;
use crate::config::ApiSettings;
use crate::domain::{GroupFilter, PlayerRecord};
use crate::errors::RankingError;
use crate::http::ApiHttpClient;

/// Anything able to deliver the ordered ranking of one group
pub trait RankingSource: Send + Sync {
    fn fetch_players(
        &self,
        group: GroupFilter,
    ) -> impl Future<Output = Result<Vec<PlayerRecord>, RankingError>> + Send;
}

/// Client for the players collection of the ranking API
pub struct PlayersApiClient {
    client: ApiHttpClient,
    base_url: String,
}

impl PlayersApiClient {
    pub fn new(settings: &ApiSettings) -> Result<Self> {
        let client = ApiHttpClient::new(settings.user_agent, settings.timeout_secs)?;
        Ok(Self {
            client,
            base_url: settings.base_url.clone(),
        })
    }

    /// Players of `group`, sorted server-side by descending points
    pub fn build_players_url(&self, group: GroupFilter) -> String {
        format!(
            "{}/api/players?sort=points:desc&populate=*&filters[groups][$eq]={}",
            self.base_url,
            encode(group.value())
        )
    }

    async fn fetch_body(&self, url: &str) -> Result<Value, RankingError> {
        let response = self.client.get(url).await.map_err(|source| RankingError::Fetch {
            url: url.to_string(),
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RankingError::Status {
                url: url.to_string(),
                status,
            });
        }

        response.json::<Value>().await.map_err(|e| RankingError::Malformed {
            what: "players response body",
            source: e.into(),
        })
    }
}

impl RankingSource for PlayersApiClient {
    async fn fetch_players(&self, group: GroupFilter) -> Result<Vec<PlayerRecord>, RankingError> {
        let url = self.build_players_url(group);
        info!("Fetching ranking for {} from {}", group, url);

        let body = self.fetch_body(&url).await?;
        let players = parsers::parse_players(&body, &self.base_url)?;

        info!("Fetched {} players for {}", players.len(), group);
        Ok(players)
    }
}
