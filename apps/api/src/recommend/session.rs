//! Per-session "last result" storage backing the CSV download.
//!
//! Each run replaces its session's list wholesale. Sessions expire after a TTL
//! and the store is capped, evicting the least recently updated session.

use std::num::NonZeroUsize;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use lru::LruCache;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::recommend::matcher::Recommendation;

#[derive(Debug, Clone)]
pub struct SessionState {
    pub results: Vec<Recommendation>,
    pub updated_at: DateTime<Utc>,
}

/// Only writes touch LRU order (reads use `peek`), so the LRU end is always
/// the least recently updated session.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<RwLock<LruCache<Uuid, SessionState>>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration, max_sessions: usize) -> Self {
        let capacity = NonZeroUsize::new(max_sessions).unwrap_or(NonZeroUsize::MIN);
        Self {
            inner: Arc::new(RwLock::new(LruCache::new(capacity))),
            ttl,
        }
    }

    /// Stores `results` as the session's last run and returns the session id.
    /// Unknown or expired ids are replaced by a fresh one.
    pub async fn record(&self, session_id: Option<Uuid>, results: Vec<Recommendation>) -> Uuid {
        self.record_at(Utc::now(), session_id, results).await
    }

    async fn record_at(
        &self,
        now: DateTime<Utc>,
        session_id: Option<Uuid>,
        results: Vec<Recommendation>,
    ) -> Uuid {
        let mut sessions = self.inner.write().await;

        let mut pruned = 0;
        while sessions
            .peek_lru()
            .is_some_and(|(_, s)| is_expired(s, now, self.ttl))
        {
            sessions.pop_lru();
            pruned += 1;
        }
        if pruned > 0 {
            debug!("Pruned {pruned} expired sessions");
        }

        let id = session_id
            .filter(|id| sessions.contains(id))
            .unwrap_or_else(Uuid::new_v4);

        let state = SessionState {
            results,
            updated_at: now,
        };
        if let Some((evicted, _)) = sessions.push(id, state) {
            if evicted != id {
                debug!("Session store full; evicted {evicted}");
            }
        }
        id
    }

    /// Runs `f` over the session's last result list, if the session is live.
    pub async fn with_results<T>(
        &self,
        session_id: Uuid,
        f: impl FnOnce(&[Recommendation]) -> T,
    ) -> Option<T> {
        self.with_results_at(Utc::now(), session_id, f).await
    }

    async fn with_results_at<T>(
        &self,
        now: DateTime<Utc>,
        session_id: Uuid,
        f: impl FnOnce(&[Recommendation]) -> T,
    ) -> Option<T> {
        let sessions = self.inner.read().await;
        sessions
            .peek(&session_id)
            .filter(|s| !is_expired(s, now, self.ttl))
            .map(|s| f(&s.results))
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }
}

fn is_expired(state: &SessionState, now: DateTime<Utc>, ttl: Duration) -> bool {
    now - state.updated_at > ttl
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::details;
    use crate::catalog::AiImpact;

    fn rec(job: &str) -> Recommendation {
        Recommendation {
            job: job.to_string(),
            details: details("d", 1, 2, AiImpact::Low),
        }
    }

    async fn jobs(store: &SessionStore, id: Uuid) -> Option<Vec<String>> {
        store
            .with_results(id, |r| r.iter().map(|r| r.job.clone()).collect())
            .await
    }

    #[tokio::test]
    async fn test_new_session_gets_id() {
        let store = SessionStore::new(Duration::hours(1), 10);
        let id = store.record(None, vec![rec("A")]).await;
        assert_eq!(jobs(&store, id).await, Some(vec!["A".to_string()]));
    }

    #[tokio::test]
    async fn test_known_session_is_replaced_wholesale() {
        let store = SessionStore::new(Duration::hours(1), 10);
        let id = store.record(None, vec![rec("A"), rec("B")]).await;
        let again = store.record(Some(id), vec![rec("C")]).await;
        assert_eq!(id, again);
        assert_eq!(jobs(&store, id).await, Some(vec!["C".to_string()]));

        // An empty run still resets the list
        store.record(Some(id), vec![]).await;
        assert_eq!(jobs(&store, id).await, Some(vec![]));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_unknown_session_id_is_not_adopted() {
        let store = SessionStore::new(Duration::hours(1), 10);
        let forged = Uuid::new_v4();
        let id = store.record(Some(forged), vec![rec("A")]).await;
        assert_ne!(id, forged);
        assert!(jobs(&store, forged).await.is_none());
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let store = SessionStore::new(Duration::hours(1), 10);
        let a = store.record(None, vec![rec("A")]).await;
        let b = store.record(None, vec![rec("B")]).await;
        assert_ne!(a, b);
        assert_eq!(jobs(&store, a).await, Some(vec!["A".to_string()]));
        assert_eq!(jobs(&store, b).await, Some(vec!["B".to_string()]));
    }

    #[tokio::test]
    async fn test_expired_session_is_invisible_and_pruned() {
        let store = SessionStore::new(Duration::minutes(5), 10);
        let start = Utc::now();
        let id = store.record_at(start, None, vec![rec("A")]).await;

        let later = start + Duration::minutes(6);
        let seen = store.with_results_at(later, id, |r| r.len()).await;
        assert!(seen.is_none());

        let fresh = store.record_at(later, Some(id), vec![rec("B")]).await;
        assert_ne!(fresh, id);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_full_store_evicts_oldest() {
        let store = SessionStore::new(Duration::hours(1), 2);
        let t0 = Utc::now();
        let first = store.record_at(t0, None, vec![rec("1")]).await;
        let second = store.record_at(t0 + Duration::seconds(1), None, vec![rec("2")]).await;
        let third = store.record_at(t0 + Duration::seconds(2), None, vec![rec("3")]).await;

        assert_eq!(store.len().await, 2);
        let now = t0 + Duration::seconds(3);
        assert!(store.with_results_at(now, first, |_| ()).await.is_none());
        assert!(store.with_results_at(now, second, |_| ()).await.is_some());
        assert!(store.with_results_at(now, third, |_| ()).await.is_some());
    }

    #[tokio::test]
    async fn test_rerun_protects_session_from_eviction() {
        let store = SessionStore::new(Duration::hours(1), 2);
        let t0 = Utc::now();
        let first = store.record_at(t0, None, vec![rec("1")]).await;
        let second = store.record_at(t0 + Duration::seconds(1), None, vec![rec("2")]).await;

        // Reading does not count as an update
        let now = t0 + Duration::seconds(2);
        assert!(store.with_results_at(now, first, |_| ()).await.is_some());

        let rerun = store.record_at(now, Some(first), vec![rec("1b")]).await;
        assert_eq!(rerun, first);
        let third = store.record_at(t0 + Duration::seconds(3), None, vec![rec("3")]).await;

        let now = t0 + Duration::seconds(4);
        assert!(store.with_results_at(now, second, |_| ()).await.is_none());
        assert!(store.with_results_at(now, first, |_| ()).await.is_some());
        assert!(store.with_results_at(now, third, |_| ()).await.is_some());
    }

    #[tokio::test]
    async fn test_zero_capacity_still_holds_one_session() {
        let store = SessionStore::new(Duration::hours(1), 0);
        let a = store.record(None, vec![rec("A")]).await;
        let b = store.record(None, vec![rec("B")]).await;
        assert_eq!(store.len().await, 1);
        assert!(jobs(&store, a).await.is_none());
        assert_eq!(jobs(&store, b).await, Some(vec!["B".to_string()]));
    }

    #[tokio::test]
    async fn test_expired_tail_is_pruned_before_live_sessions() {
        let store = SessionStore::new(Duration::minutes(5), 10);
        let t0 = Utc::now();
        let stale = store.record_at(t0, None, vec![rec("old")]).await;
        let live = store.record_at(t0 + Duration::minutes(4), None, vec![rec("new")]).await;

        let now = t0 + Duration::minutes(6);
        store.record_at(now, None, vec![rec("next")]).await;
        assert_eq!(store.len().await, 2);
        assert!(store.with_results_at(now, stale, |_| ()).await.is_none());
        assert!(store.with_results_at(now, live, |_| ()).await.is_some());
    }
}
