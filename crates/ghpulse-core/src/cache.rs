//! Time-boxed memo of aggregated activity, keyed by identity
//!
//! Entries are replaced wholesale and never mutated, so a reader sees either
//! the previous snapshot or the new one. Concurrent misses for the same
//! identity are collapsed: one caller runs the fetch while the others wait on
//! a per-identity gate and then read what it stored.

use crate::config::CacheSettings;
use crate::errors::PulseError;
use crate::metrics::ActivitySnapshot;
use std::collections::HashMap;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::{Mutex, RwLock};

#[derive(Debug, Clone)]
struct CacheEntry {
    snapshot: Arc<ActivitySnapshot>,
    created_at: Instant,
}

impl CacheEntry {
    fn new(snapshot: ActivitySnapshot) -> Self {
        Self {
            snapshot: Arc::new(snapshot),
            created_at: Instant::now(),
        }
    }

    fn is_fresh(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() < ttl
    }
}

/// Cache statistics
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CacheStats {
    pub total_entries: usize,
    pub max_entries: usize,
    pub hits: u64,
    pub misses: u64,
    pub fetches: u64,
}

pub struct ActivityCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
    in_flight: Mutex<HashMap<String, Arc<Mutex<()>>>>,
    ttl: Duration,
    max_entries: usize,
    hits: AtomicU64,
    misses: AtomicU64,
    fetches: AtomicU64,
}

impl ActivityCache {
    pub fn new(settings: &CacheSettings) -> Self {
        Self::with_ttl(settings.ttl(), settings.max_entries)
    }

    pub fn with_ttl(ttl: Duration, max_entries: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            in_flight: Mutex::new(HashMap::new()),
            ttl,
            max_entries: max_entries.max(1),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            fetches: AtomicU64::new(0),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// The cached snapshot for `username` if it is still inside the freshness window
    pub async fn get_fresh(&self, username: &str) -> Option<Arc<ActivitySnapshot>> {
        let entries = self.entries.read().await;
        entries
            .get(&cache_key(username))
            .filter(|entry| entry.is_fresh(self.ttl))
            .map(|entry| entry.snapshot.clone())
    }

    /// Return the fresh snapshot for `username`, or run `fetch` and store its result.
    ///
    /// A failed fetch is returned to this caller only; whatever entry existed
    /// before stays in place.
    pub async fn get_or_fetch<F, Fut>(
        &self,
        username: &str,
        fetch: F,
    ) -> Result<Arc<ActivitySnapshot>, PulseError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<ActivitySnapshot, PulseError>>,
    {
        if let Some(snapshot) = self.get_fresh(username).await {
            log::debug!("Using cached GitHub data for {}", username);
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Ok(snapshot);
        }

        let key = cache_key(username);
        let gate = {
            let mut in_flight = self.in_flight.lock().await;
            in_flight
                .entry(key.clone())
                .or_insert_with(|| Arc::new(Mutex::new(())))
                .clone()
        };

        let result = {
            let _guard = gate.lock().await;

            // Another caller may have filled the entry while this one waited
            if let Some(snapshot) = self.get_fresh(username).await {
                log::debug!("Using GitHub data fetched by a concurrent caller for {}", username);
                self.hits.fetch_add(1, Ordering::Relaxed);
                Ok(snapshot)
            } else {
                self.misses.fetch_add(1, Ordering::Relaxed);
                self.fetches.fetch_add(1, Ordering::Relaxed);

                match fetch().await {
                    Ok(snapshot) => Ok(self.store(key.clone(), snapshot).await),
                    Err(e) => {
                        log::warn!("Not caching failed GitHub fetch for {}: {}", username, e);
                        Err(e)
                    }
                }
            }
        };

        self.release_gate(&key, gate).await;
        result
    }

    async fn store(&self, key: String, snapshot: ActivitySnapshot) -> Arc<ActivitySnapshot> {
        let entry = CacheEntry::new(snapshot);
        let shared = entry.snapshot.clone();

        let mut entries = self.entries.write().await;
        entries.insert(key.clone(), entry);
        log::debug!("Cached GitHub data under {}", key);

        if entries.len() > self.max_entries {
            let excess = entries.len() - self.max_entries;
            let mut by_age: Vec<(String, Instant)> = entries
                .iter()
                .filter(|(k, _)| **k != key)
                .map(|(k, entry)| (k.clone(), entry.created_at))
                .collect();
            by_age.sort_by_key(|(_, created_at)| *created_at);

            for (stale_key, _) in by_age.into_iter().take(excess) {
                entries.remove(&stale_key);
            }

            log::debug!(
                "Evicted {} entries from activity cache, {} entries remaining",
                excess,
                entries.len()
            );
        }

        shared
    }

    /// Drop the gate once no other caller is queued on it.
    async fn release_gate(&self, key: &str, gate: Arc<Mutex<()>>) {
        let mut in_flight = self.in_flight.lock().await;
        // One reference in the map, one held here
        if Arc::strong_count(&gate) <= 2 {
            in_flight.remove(key);
        }
    }

    pub async fn invalidate(&self, username: &str) -> bool {
        self.entries
            .write()
            .await
            .remove(&cache_key(username))
            .is_some()
    }

    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }

    pub async fn size(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn stats(&self) -> CacheStats {
        CacheStats {
            total_entries: self.size().await,
            max_entries: self.max_entries,
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            fetches: self.fetches.load(Ordering::Relaxed),
        }
    }
}

impl Default for ActivityCache {
    fn default() -> Self {
        Self::new(&CacheSettings::default())
    }
}

fn cache_key(username: &str) -> String {
    format!("github_data_{}", username)
}
