use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use log::{debug, info, warn};
use tokio::sync::Mutex;

use crate::api::RankingSource;
use crate::config::QueryOptions;
use crate::domain::{GroupFilter, PlayerRecord, ResultSet};
use crate::errors::{RankingError, error_chain};
use crate::retry::RetryPolicy;

struct CacheEntry {
    result: ResultSet,
    stored_at: Instant,
    invalidated: bool,
}

impl CacheEntry {
    fn is_fresh(&self, now: Instant, options: &QueryOptions) -> bool {
        !self.invalidated && now.duration_since(self.stored_at) < options.stale_time
    }
}

/// Outcome of a query: the latest good data, plus the error of the last attempt if it failed
#[derive(Debug)]
pub struct QueryResult {
    pub data: Option<ResultSet>,
    pub error: Option<RankingError>,
}

/// Ranking cache keyed by group, backed by a [`RankingSource`].
///
/// Each key has its own lock, so at most one fetch per group is in flight.
/// Failed refreshes keep the previous entry around as stale data.
pub struct QueryClient<S> {
    source: S,
    options: QueryOptions,
    retry: RetryPolicy,
    slots: HashMap<GroupFilter, Mutex<Option<CacheEntry>>>,
    revision: AtomicU64,
}

impl<S: RankingSource> QueryClient<S> {
    pub fn new(source: S, options: QueryOptions) -> Self {
        let slots = GroupFilter::ALL
            .into_iter()
            .map(|group| (group, Mutex::new(None)))
            .collect();

        Self {
            retry: RetryPolicy::from_options(&options),
            source,
            options,
            slots,
            revision: AtomicU64::new(0),
        }
    }

    pub fn options(&self) -> &QueryOptions {
        &self.options
    }

    /// Data for `group`, from cache inside the staleness window or from the source
    pub async fn fetch_ranking(&self, group: GroupFilter) -> Result<ResultSet, RankingError> {
        let mut slot = self.slot(group).lock().await;
        self.refresh(group, &mut slot).await
    }

    /// Like [`fetch_ranking`](Self::fetch_ranking), but falls back to the last stored data on failure
    pub async fn query(&self, group: GroupFilter) -> QueryResult {
        let mut slot = self.slot(group).lock().await;
        match self.refresh(group, &mut slot).await {
            Ok(result) => QueryResult {
                data: Some(result),
                error: None,
            },
            Err(e) => QueryResult {
                data: slot.as_ref().map(|entry| entry.result.clone()),
                error: Some(e),
            },
        }
    }

    /// Last stored data for `group`, fresh or not, without fetching
    pub async fn cached(&self, group: GroupFilter) -> Option<ResultSet> {
        let slot = self.slot(group).lock().await;
        slot.as_ref().map(|entry| entry.result.clone())
    }

    /// Mark `group` stale so the next query refetches
    pub async fn invalidate(&self, group: GroupFilter) {
        if let Some(entry) = self.slot(group).lock().await.as_mut() {
            entry.invalidated = true;
        }
    }

    /// The page regained focus; revalidates only when configured to
    pub async fn refocus(&self) -> bool {
        if !self.options.refetch_on_focus {
            debug!("Ignoring refocus, revalidation on focus is disabled");
            return false;
        }
        for group in GroupFilter::ALL {
            self.invalidate(group).await;
        }
        true
    }

    async fn refresh(&self, group: GroupFilter, slot: &mut Option<CacheEntry>) -> Result<ResultSet, RankingError> {
        if let Some(entry) = slot.as_ref().filter(|e| e.is_fresh(Instant::now(), &self.options)) {
            debug!("Serving cached ranking for {} (revision {})", group, entry.result.revision);
            return Ok(entry.result.clone());
        }

        let players = self.fetch_with_retry(group).await.inspect_err(|e| {
            warn!("Ranking fetch for {} failed: {}", group, error_chain(e));
        })?;

        let revision = self.revision.fetch_add(1, Ordering::SeqCst) + 1;
        let result = ResultSet::new(group, players, revision);
        info!("Cached {} players for {} (revision {})", result.len(), group, revision);

        *slot = Some(CacheEntry {
            result: result.clone(),
            stored_at: Instant::now(),
            invalidated: false,
        });
        Ok(result)
    }

    async fn fetch_with_retry(&self, group: GroupFilter) -> Result<Vec<PlayerRecord>, RankingError> {
        self.retry
            .run(|| self.source.fetch_players(group), |e: &RankingError| !e.is_precondition())
            .await
    }

    fn slot(&self, group: GroupFilter) -> &Mutex<Option<CacheEntry>> {
        // `new` creates a slot for every group
        &self.slots[&group]
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Arc;
    use std::sync::atomic::AtomicUsize;
    use std::time::Duration;

    /// Source replaying a fixed script of responses, failing once the script runs out
    #[derive(Default)]
    pub(crate) struct ScriptedSource {
        script: std::sync::Mutex<VecDeque<Result<Vec<PlayerRecord>, &'static str>>>,
        pub calls: AtomicUsize,
    }

    impl ScriptedSource {
        pub(crate) fn new(script: Vec<Result<Vec<PlayerRecord>, &'static str>>) -> Self {
            Self {
                script: std::sync::Mutex::new(script.into()),
                calls: AtomicUsize::new(0),
            }
        }

        pub(crate) fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl RankingSource for ScriptedSource {
        async fn fetch_players(&self, _group: GroupFilter) -> Result<Vec<PlayerRecord>, RankingError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let next = self.script.lock().unwrap().pop_front();
            match next {
                Some(Ok(players)) => Ok(players),
                Some(Err(cause)) => Err(transport_error(cause)),
                None => Err(transport_error("script exhausted")),
            }
        }
    }

    impl<T: RankingSource> RankingSource for Arc<T> {
        fn fetch_players(
            &self,
            group: GroupFilter,
        ) -> impl std::future::Future<Output = Result<Vec<PlayerRecord>, RankingError>> + Send {
            self.as_ref().fetch_players(group)
        }
    }

    fn transport_error(cause: &'static str) -> RankingError {
        RankingError::Fetch {
            url: "http://api.test/api/players".into(),
            source: anyhow::anyhow!(cause),
        }
    }

    pub(crate) fn players(n: usize) -> Vec<PlayerRecord> {
        (0..n)
            .map(|i| PlayerRecord {
                name: format!("Player {}", i + 1),
                tournaments_played: 3,
                points: 1000 - i as u32,
                profile_image_url: None,
            })
            .collect()
    }

    pub(crate) fn instant_options() -> QueryOptions {
        QueryOptions {
            retry_base_delay: Duration::ZERO,
            retry_max_delay: Duration::ZERO,
            ..QueryOptions::default()
        }
    }

    #[tokio::test]
    async fn fresh_entries_are_served_without_a_request() {
        let source = Arc::new(ScriptedSource::new(vec![Ok(players(3))]));
        let client = QueryClient::new(source.clone(), instant_options());

        let first = client.fetch_ranking(GroupFilter::Eighteen).await.unwrap();
        let second = client.fetch_ranking(GroupFilter::Eighteen).await.unwrap();

        assert_eq!(source.calls(), 1);
        assert_eq!(first.revision, second.revision);
        assert_eq!(second.len(), 3);
    }

    #[tokio::test]
    async fn stale_entries_are_refetched() {
        let source = Arc::new(ScriptedSource::new(vec![Ok(players(3)), Ok(players(4))]));
        let options = QueryOptions {
            stale_time: Duration::ZERO,
            ..instant_options()
        };
        let client = QueryClient::new(source.clone(), options);

        let first = client.fetch_ranking(GroupFilter::Twenty).await.unwrap();
        let second = client.fetch_ranking(GroupFilter::Twenty).await.unwrap();

        assert_eq!(source.calls(), 2);
        assert_ne!(first.revision, second.revision);
        assert_eq!(second.len(), 4);
    }

    #[tokio::test]
    async fn groups_are_cached_separately() {
        let source = Arc::new(ScriptedSource::new(vec![Ok(players(2)), Ok(players(5))]));
        let client = QueryClient::new(source.clone(), instant_options());

        let a = client.fetch_ranking(GroupFilter::Eighteen).await.unwrap();
        let b = client.fetch_ranking(GroupFilter::TwentyOne).await.unwrap();

        assert_eq!((a.len(), b.len()), (2, 5));
        assert_eq!(b.group, GroupFilter::TwentyOne);
        assert_eq!(source.calls(), 2);
    }

    #[tokio::test]
    async fn transient_failures_are_retried() {
        let source = Arc::new(ScriptedSource::new(vec![Err("reset"), Err("reset"), Ok(players(1))]));
        let client = QueryClient::new(source.clone(), instant_options());

        let result = client.fetch_ranking(GroupFilter::Nineteen).await.unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(source.calls(), 3);
    }

    #[tokio::test]
    async fn persistent_failure_surfaces_after_retries_and_keeps_stale_data() {
        let source = Arc::new(ScriptedSource::new(vec![Ok(players(6))]));
        let options = QueryOptions {
            stale_time: Duration::ZERO,
            ..instant_options()
        };
        let client = QueryClient::new(source.clone(), options);

        let good = client.fetch_ranking(GroupFilter::Nineteen).await.unwrap();
        let result = client.query(GroupFilter::Nineteen).await;

        assert!(matches!(result.error, Some(RankingError::Fetch { .. })));
        // one good call, then one attempt plus two retries
        assert_eq!(source.calls(), 4);
        let stale = result.data.unwrap();
        assert_eq!(stale.revision, good.revision);
        assert_eq!(stale.len(), 6);
    }

    #[tokio::test]
    async fn failure_without_previous_data_yields_nothing() {
        let source = ScriptedSource::new(vec![]);
        let client = QueryClient::new(source, instant_options());

        let result = client.query(GroupFilter::Eighteen).await;
        assert!(result.data.is_none());
        assert!(result.error.is_some());
        assert!(client.cached(GroupFilter::Eighteen).await.is_none());
    }

    #[tokio::test]
    async fn invalidate_forces_a_refetch() {
        let source = Arc::new(ScriptedSource::new(vec![Ok(players(1)), Ok(players(2))]));
        let client = QueryClient::new(source.clone(), instant_options());

        client.fetch_ranking(GroupFilter::Twenty).await.unwrap();
        client.invalidate(GroupFilter::Twenty).await;
        let refreshed = client.fetch_ranking(GroupFilter::Twenty).await.unwrap();

        assert_eq!(refreshed.len(), 2);
        assert_eq!(source.calls(), 2);
    }

    #[tokio::test]
    async fn refocus_does_not_revalidate_by_default() {
        let source = Arc::new(ScriptedSource::new(vec![Ok(players(1))]));
        let client = QueryClient::new(source.clone(), instant_options());

        client.fetch_ranking(GroupFilter::Twenty).await.unwrap();
        assert!(!client.refocus().await);
        client.fetch_ranking(GroupFilter::Twenty).await.unwrap();

        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn concurrent_queries_for_one_group_share_a_fetch() {
        let source = Arc::new(ScriptedSource::new(vec![Ok(players(2))]));
        let client = Arc::new(QueryClient::new(source.clone(), instant_options()));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let client = client.clone();
                tokio::spawn(async move { client.fetch_ranking(GroupFilter::Eighteen).await })
            })
            .collect();
        for handle in handles {
            assert!(handle.await.unwrap().is_ok());
        }

        assert_eq!(source.calls(), 1);
    }
}
