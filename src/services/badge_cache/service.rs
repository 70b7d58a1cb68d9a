//! Badge cache service with periodic sweep

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, trace};

use super::entry::BadgeCacheEntry;
use crate::config::CacheConfig;
use crate::config::defaults::{DEFAULT_CACHE_TTL, DEFAULT_SWEEP_INTERVAL};
use crate::errors::{CacheError, CacheResult};
use crate::utils::clock::{Clock, SystemClock};

/// Point-in-time view of the cache contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Entries physically stored, expired or not
    pub total_entries: usize,
    pub live_entries: usize,
    /// Expired but not yet swept
    pub expired_entries: usize,
}

/// Key -> rendered badge store with a fixed TTL.
///
/// Cloning is cheap and clones share the same storage.
#[derive(Clone, Debug)]
pub struct BadgeCache {
    entries: Arc<RwLock<HashMap<String, BadgeCacheEntry>>>,
    ttl: Duration,
    sweep_interval: Duration,
    clock: Arc<dyn Clock>,
}

impl BadgeCache {
    /// Create a new builder for configuring the cache.
    #[must_use]
    pub fn builder() -> BadgeCacheBuilder {
        BadgeCacheBuilder::new()
    }

    /// Create a cache from the `[cache]` configuration section.
    pub fn from_config(config: &CacheConfig) -> CacheResult<Self> {
        Self::builder()
            .ttl(config.ttl)
            .sweep_interval(config.sweep_interval)
            .build()
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn sweep_interval(&self) -> Duration {
        self.sweep_interval
    }

    /// Look up a badge. Expired entries read as a miss; they are left for
    /// the sweep to remove.
    pub async fn get(&self, key: &str) -> Option<String> {
        let now = self.clock.now();
        let entries = self.entries.read().await;
        entries
            .get(key)
            .filter(|entry| entry.is_live_at(now))
            .map(|entry| entry.document.clone())
    }

    /// Insert or replace a badge, restarting its TTL.
    pub async fn put(&self, key: impl Into<String>, document: impl Into<String>) {
        let entry = BadgeCacheEntry::new(document.into(), self.expiry_from(self.clock.now()));
        self.entries.write().await.insert(key.into(), entry);
    }

    /// Remove every entry that has expired as of now. Returns how many were
    /// removed.
    pub async fn sweep(&self) -> usize {
        let now = self.clock.now();
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| entry.is_live_at(now));
        let remaining = entries.len();
        drop(entries);

        let removed = before - remaining;
        if removed > 0 {
            info!(
                "Badge cache sweep removed {} expired entries ({} remaining)",
                removed, remaining
            );
        } else {
            trace!("Badge cache sweep found nothing to remove ({} entries)", remaining);
        }
        removed
    }

    /// Number of stored entries, including expired ones awaiting a sweep.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    pub async fn stats(&self) -> CacheStats {
        let now = self.clock.now();
        let entries = self.entries.read().await;
        let total_entries = entries.len();
        let live_entries = entries.values().filter(|e| e.is_live_at(now)).count();
        drop(entries);

        CacheStats {
            total_entries,
            live_entries,
            expired_entries: total_entries - live_entries,
        }
    }

    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }

    /// Spawn the periodic sweep on the current tokio runtime.
    ///
    /// The first sweep runs one `sweep_interval` after start. The task runs
    /// until [`SweepTask::stop`] is called.
    pub fn start(&self) -> SweepTask {
        let cache = self.clone();
        let token = CancellationToken::new();
        let cancelled = token.clone();

        info!(
            "Starting badge cache sweeper - ttl: {:?}, sweep_interval: {:?}",
            self.ttl, self.sweep_interval
        );

        let handle = tokio::spawn(async move {
            let mut sweep_interval = interval(cache.sweep_interval);
            sweep_interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

            // Skip the immediate first tick
            sweep_interval.tick().await;

            loop {
                tokio::select! {
                    _ = sweep_interval.tick() => {
                        cache.sweep().await;
                    }
                    _ = cancelled.cancelled() => {
                        debug!("Badge cache sweeper received cancellation signal");
                        break;
                    }
                }
            }

            info!("Badge cache sweeper stopped");
        });

        SweepTask { token, handle }
    }

    fn expiry_from(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        chrono::Duration::from_std(self.ttl)
            .ok()
            .and_then(|ttl| now.checked_add_signed(ttl))
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }
}

/// Handle to a running sweeper.
#[derive(Debug)]
pub struct SweepTask {
    token: CancellationToken,
    handle: JoinHandle<()>,
}

impl SweepTask {
    /// Signal the sweeper to stop and wait for it to exit.
    pub async fn stop(self) -> CacheResult<()> {
        self.token.cancel();
        self.handle.await?;
        Ok(())
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

/// Builder for configuring a `BadgeCache`.
pub struct BadgeCacheBuilder {
    ttl: Duration,
    sweep_interval: Duration,
    clock: Arc<dyn Clock>,
}

impl Default for BadgeCacheBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BadgeCacheBuilder {
    fn new() -> Self {
        Self {
            ttl: DEFAULT_CACHE_TTL,
            sweep_interval: DEFAULT_SWEEP_INTERVAL,
            clock: Arc::new(SystemClock),
        }
    }

    /// Set how long entries stay live.
    #[must_use]
    pub fn ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Set the background sweep period.
    #[must_use]
    pub fn sweep_interval(mut self, interval: Duration) -> Self {
        self.sweep_interval = interval;
        self
    }

    /// Replace the wall clock, e.g. with a `ManualClock` in tests.
    #[must_use]
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Build the `BadgeCache`.
    ///
    /// # Errors
    /// Returns an error if the TTL or sweep interval is zero.
    pub fn build(self) -> CacheResult<BadgeCache> {
        if self.ttl.is_zero() {
            return Err(CacheError::invalid_settings("ttl", "must be greater than zero"));
        }
        if self.sweep_interval.is_zero() {
            return Err(CacheError::invalid_settings(
                "sweep_interval",
                "must be greater than zero",
            ));
        }

        Ok(BadgeCache {
            entries: Arc::new(RwLock::new(HashMap::new())),
            ttl: self.ttl,
            sweep_interval: self.sweep_interval,
            clock: self.clock,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::clock::ManualClock;
    use tracing_test::traced_test;

    const TTL: Duration = Duration::from_secs(5 * 60);

    fn manual_cache() -> (BadgeCache, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::default());
        let cache = BadgeCache::builder()
            .ttl(TTL)
            .clock(clock.clone())
            .build()
            .unwrap();
        (cache, clock)
    }

    #[tokio::test]
    async fn test_put_then_get() {
        let (cache, _clock) = manual_cache();
        assert_eq!(cache.get("k").await, None);

        cache.put("k", "v").await;
        assert_eq!(cache.get("k").await.as_deref(), Some("v"));
    }

    #[tokio::test]
    async fn test_expired_entry_is_a_miss_until_swept() {
        let (cache, clock) = manual_cache();
        cache.put("k", "v").await;

        clock.advance(TTL - Duration::from_secs(1));
        assert_eq!(cache.get("k").await.as_deref(), Some("v"));

        clock.advance(Duration::from_secs(1));
        assert_eq!(cache.get("k").await, None);
        // get never deletes
        assert_eq!(cache.len().await, 1);

        assert_eq!(cache.sweep().await, 1);
        assert_eq!(cache.len().await, 0);
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn test_put_overwrite_restarts_ttl() {
        let (cache, clock) = manual_cache();
        cache.put("k", "old").await;

        clock.advance(Duration::from_secs(4 * 60));
        cache.put("k", "new").await;

        clock.advance(Duration::from_secs(4 * 60));
        assert_eq!(cache.get("k").await.as_deref(), Some("new"));
        assert_eq!(cache.sweep().await, 0);
    }

    #[tokio::test]
    async fn test_sweep_keeps_live_entries() {
        let (cache, clock) = manual_cache();
        cache.put("old", "1").await;
        clock.advance(Duration::from_secs(3 * 60));
        cache.put("young", "2").await;
        clock.advance(Duration::from_secs(3 * 60));

        assert_eq!(
            cache.stats().await,
            CacheStats {
                total_entries: 2,
                live_entries: 1,
                expired_entries: 1,
            }
        );
        assert_eq!(cache.sweep().await, 1);
        assert_eq!(cache.get("young").await.as_deref(), Some("2"));
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_clones_share_storage() {
        let (cache, _clock) = manual_cache();
        let other = cache.clone();
        other.put("k", "v").await;
        assert_eq!(cache.get("k").await.as_deref(), Some("v"));

        cache.clear().await;
        assert!(other.is_empty().await);
    }

    #[test]
    fn test_builder_rejects_zero_durations() {
        let err = BadgeCache::builder().ttl(Duration::ZERO).build().unwrap_err();
        assert!(matches!(err, CacheError::InvalidSettings { ref field, .. } if field == "ttl"));

        let err = BadgeCache::builder()
            .sweep_interval(Duration::ZERO)
            .build()
            .unwrap_err();
        assert!(
            matches!(err, CacheError::InvalidSettings { ref field, .. } if field == "sweep_interval")
        );
    }

    #[test]
    fn test_from_config() {
        let config = CacheConfig {
            enabled: true,
            ttl: Duration::from_secs(30),
            sweep_interval: Duration::from_secs(60),
        };
        let cache = BadgeCache::from_config(&config).unwrap();
        assert_eq!(cache.ttl(), Duration::from_secs(30));
        assert_eq!(cache.sweep_interval(), Duration::from_secs(60));
    }

    #[tokio::test]
    async fn test_background_sweeper_removes_expired_entries() {
        let clock = Arc::new(ManualClock::default());
        let cache = BadgeCache::builder()
            .ttl(TTL)
            .sweep_interval(Duration::from_millis(10))
            .clock(clock.clone())
            .build()
            .unwrap();

        let sweeper = cache.start();
        cache.put("k", "v").await;
        clock.advance(TTL);

        let mut swept = false;
        for _ in 0..200 {
            tokio::time::sleep(Duration::from_millis(10)).await;
            if cache.is_empty().await {
                swept = true;
                break;
            }
        }
        assert!(swept, "sweeper never removed the expired entry");

        sweeper.stop().await.unwrap();
    }

    #[tokio::test]
    async fn test_stop_joins_sweeper() {
        let (cache, _clock) = manual_cache();
        let sweeper = cache.start();
        assert!(!sweeper.is_finished());
        assert!(sweeper.stop().await.is_ok());
    }

    #[tokio::test]
    #[traced_test]
    async fn test_sweep_logs_removals() {
        let (cache, clock) = manual_cache();
        cache.put("a", "1").await;
        cache.put("b", "2").await;
        clock.advance(TTL);

        cache.sweep().await;
        assert!(logs_contain("Badge cache sweep removed 2 expired entries"));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_put_get_keeps_values_consistent() {
        let (cache, _clock) = manual_cache();

        let mut handles = Vec::new();
        for worker in 0..8 {
            let cache = cache.clone();
            handles.push(tokio::spawn(async move {
                for i in 0..250 {
                    let key = format!("key-{}", (worker + i) % 16);
                    if i % 3 == 0 {
                        cache.put(key.clone(), format!("value-{key}")).await;
                    } else if let Some(value) = cache.get(&key).await {
                        assert_eq!(value, format!("value-{key}"));
                    }
                }
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(cache.len().await, 16);
        for i in 0..16 {
            let key = format!("key-{i}");
            assert_eq!(cache.get(&key).await, Some(format!("value-{key}")));
        }
    }
}
