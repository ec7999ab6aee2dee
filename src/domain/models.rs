use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::RankingError;

/// One ranked player as delivered by the ranking API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    pub name: String,
    pub tournaments_played: u32,
    pub points: u32,
    pub profile_image_url: Option<String>,
}

impl PlayerRecord {
    /// Stable row identity for a record shown at `rank`
    pub fn row_key(&self, rank: usize) -> String {
        format!("{}-{}", rank, self.name)
    }
}

/// Time-slot group used to scope the ranking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GroupFilter {
    #[default]
    #[serde(rename = "Grupo das 18")]
    Eighteen,
    #[serde(rename = "Grupo das 19")]
    Nineteen,
    #[serde(rename = "Grupo das 20")]
    Twenty,
    #[serde(rename = "Grupo das 21")]
    TwentyOne,
}

impl GroupFilter {
    pub const ALL: [GroupFilter; 4] = [
        GroupFilter::Eighteen,
        GroupFilter::Nineteen,
        GroupFilter::Twenty,
        GroupFilter::TwentyOne,
    ];

    /// Value stored in the `groups` field of each player
    pub fn value(&self) -> &'static str {
        match self {
            GroupFilter::Eighteen => "Grupo das 18",
            GroupFilter::Nineteen => "Grupo das 19",
            GroupFilter::Twenty => "Grupo das 20",
            GroupFilter::TwentyOne => "Grupo das 21",
        }
    }

    /// Label shown in the group selector
    pub fn label(&self) -> &'static str {
        match self {
            GroupFilter::Eighteen => "Grupo das 18:00 Horas",
            GroupFilter::Nineteen => "Grupo das 19:00 Horas",
            GroupFilter::Twenty => "Grupo das 20:00 Horas",
            GroupFilter::TwentyOne => "Grupo das 21:00 Horas",
        }
    }

    /// Parse a raw filter value. A missing or blank value is an error, never a default.
    pub fn parse(raw: Option<&str>) -> Result<Self, RankingError> {
        let raw = raw.map(str::trim).filter(|s| !s.is_empty());
        let Some(raw) = raw else {
            return Err(RankingError::MissingFilter);
        };

        Self::ALL
            .into_iter()
            .find(|group| group.value() == raw)
            .ok_or_else(|| RankingError::UnknownFilter(raw.to_string()))
    }
}

impl fmt::Display for GroupFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

/// Ordered fetch result for one group, sorted by descending points upstream
#[derive(Debug, Clone)]
pub struct ResultSet {
    pub group: GroupFilter,
    pub records: Arc<[PlayerRecord]>,
    pub revision: u64,
    pub fetched_at: DateTime<Utc>,
}

impl ResultSet {
    pub fn new(group: GroupFilter, records: Vec<PlayerRecord>, revision: u64) -> Self {
        Self {
            group,
            records: records.into(),
            revision,
            fetched_at: Utc::now(),
        }
    }

    /// Placeholder used before the first successful fetch
    pub fn empty(group: GroupFilter) -> Self {
        Self::new(group, Vec::new(), 0)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First five records, independent of pagination
    pub fn top_five(&self) -> &[PlayerRecord] {
        &self.records[..self.records.len().min(5)]
    }
}
