/// Rate limiting service keyed by client address
use crate::constants::MAX_TRACKED_CLIENTS;
use crate::error::ConsultError;
use async_trait::async_trait;
use dashmap::DashMap;
use std::time::Duration;
use tokio::time::Instant;

#[async_trait]
pub trait RateLimiter: Send + Sync {
    /// Counts one request for `key` and checks it against the limit.
    /// Returns Ok(()) if allowed, Err if rate limit exceeded
    async fn check_rate_limit(
        &self,
        key: &str,
        limit: u32,
        window: Duration,
    ) -> Result<(), ConsultError>;
}

/// Per-key request count for the current window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitRecord {
    pub count: u32,
    pub reset_at: Instant,
}

/// Process-local fixed-window rate limiter.
///
/// State is lost when the process restarts. The check and the increment run
/// under the key's shard lock, so concurrent requests from one client cannot
/// both pass the final free slot. The table is capped; when it is full the
/// oldest windows are evicted and those clients start over.
pub struct InMemoryRateLimiter {
    records: DashMap<String, RateLimitRecord>,
    max_tracked: usize,
}

impl InMemoryRateLimiter {
    pub fn new() -> Self {
        Self::with_capacity_limit(MAX_TRACKED_CLIENTS)
    }

    /// Limiter that tracks at most `max_tracked` keys
    pub fn with_capacity_limit(max_tracked: usize) -> Self {
        Self {
            records: DashMap::new(),
            max_tracked,
        }
    }

    /// Current record for a key, if any
    pub fn record(&self, key: &str) -> Option<RateLimitRecord> {
        self.records.get(key).map(|r| *r)
    }

    pub fn tracked_clients(&self) -> usize {
        self.records.len()
    }

    /// Drops records whose window has elapsed
    pub fn purge_expired(&self) {
        let now = Instant::now();
        self.records.retain(|_, record| now <= record.reset_at);
    }

    /// Makes room for one new key.
    ///
    /// Runs only when the table is full: expired records go first, then the
    /// oldest windows are evicted in one batch down to 90% of the cap so the
    /// next full scan is at least a tenth of the cap away.
    fn make_room(&self) {
        if self.records.len() < self.max_tracked {
            return;
        }

        self.purge_expired();
        let len = self.records.len();
        if len < self.max_tracked {
            return;
        }

        let low_water = self
            .max_tracked
            .saturating_sub((self.max_tracked / 10).max(1));

        let mut by_age: Vec<(Instant, String)> = self
            .records
            .iter()
            .map(|entry| (entry.reset_at, entry.key().clone()))
            .collect();
        by_age.sort_unstable();

        let evicted = len - low_water;
        for (_, key) in by_age.into_iter().take(evicted) {
            self.records.remove(&key);
        }

        tracing::warn!(
            evicted = evicted,
            max_tracked = self.max_tracked,
            "Rate limit table full, evicted oldest windows"
        );
    }

    /// Returns true when the request is allowed
    fn hit(&self, key: &str, limit: u32, window: Duration) -> bool {
        let now = Instant::now();

        let mut record = self
            .records
            .entry(key.to_string())
            .or_insert(RateLimitRecord {
                count: 0,
                reset_at: now + window,
            });

        if now > record.reset_at || record.count == 0 {
            record.count = 1;
            record.reset_at = now + window;
            return true;
        }

        if record.count >= limit {
            return false;
        }

        record.count += 1;
        true
    }
}

impl Default for InMemoryRateLimiter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RateLimiter for InMemoryRateLimiter {
    async fn check_rate_limit(
        &self,
        key: &str,
        limit: u32,
        window: Duration,
    ) -> Result<(), ConsultError> {
        if !self.records.contains_key(key) {
            self.make_room();
        }

        if !self.hit(key, limit, window) {
            tracing::warn!(
                client_ip = %key,
                limit = limit,
                window_seconds = window.as_secs(),
                "Rate limit exceeded"
            );

            return Err(ConsultError::RateLimit(format!(
                "Client {} exceeded {} requests in {} seconds",
                key,
                limit,
                window.as_secs()
            )));
        }

        tracing::debug!(client_ip = %key, limit = limit, "Rate limit check passed");

        Ok(())
    }
}

// Mock for testing
pub struct MockRateLimiter {
    allow: bool,
}

impl MockRateLimiter {
    pub fn new(allow: bool) -> Self {
        Self { allow }
    }

    pub fn allow_all() -> Self {
        Self { allow: true }
    }

    pub fn block_all() -> Self {
        Self { allow: false }
    }
}

#[async_trait]
impl RateLimiter for MockRateLimiter {
    async fn check_rate_limit(
        &self,
        _key: &str,
        _limit: u32,
        _window: Duration,
    ) -> Result<(), ConsultError> {
        if self.allow {
            Ok(())
        } else {
            Err(ConsultError::RateLimit("Mock rate limit exceeded".to_string()))
        }
    }
}
