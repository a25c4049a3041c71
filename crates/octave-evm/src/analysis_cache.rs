//! Shared cache of code analyses keyed by code hash

use crate::analysis::CodeAnalysis;
use lru::LruCache;
use octave_crypto::keccak256;
use octave_primitives::H256;
use parking_lot::Mutex;
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::trace;

/// Default number of cached analyses
pub const DEFAULT_CAPACITY: usize = 1024;

/// Bounded LRU cache of [`CodeAnalysis`] shared across threads
///
/// Analyses are built outside the lock and only published once complete.
pub struct CodeAnalysisCache {
    entries: Mutex<LruCache<H256, Arc<CodeAnalysis>>>,
    hits: AtomicU64,
    lookups: AtomicU64,
}

impl CodeAnalysisCache {
    /// Cache holding [`DEFAULT_CAPACITY`] analyses
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Cache holding `capacity` analyses
    ///
    /// # Panics
    ///
    /// If `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Self {
        let Some(capacity) = NonZeroUsize::new(capacity) else {
            panic!("cache capacity must be positive");
        };
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
            hits: AtomicU64::new(0),
            lookups: AtomicU64::new(0),
        }
    }

    /// Look up the analysis for a code hash, marking it recently used
    pub fn get(&self, hash: &H256) -> Option<Arc<CodeAnalysis>> {
        let found = self.entries.lock().get(hash).cloned();
        self.lookups.fetch_add(1, Ordering::Relaxed);
        if found.is_some() {
            self.hits.fetch_add(1, Ordering::Relaxed);
        }
        trace!(%hash, hit = found.is_some(), "code analysis lookup");
        found
    }

    /// Publish an analysis, evicting the least recently used one when full
    pub fn put(&self, hash: H256, analysis: CodeAnalysis) -> Arc<CodeAnalysis> {
        let analysis = Arc::new(analysis);
        let displaced = self.entries.lock().push(hash, Arc::clone(&analysis));
        if let Some((evicted, _)) = displaced.filter(|(key, _)| *key != hash) {
            trace!(hash = %evicted, "evicted code analysis");
        }
        analysis
    }

    /// Cached analysis of `code`, analysing and publishing it on a miss
    pub fn get_or_analyze(&self, code: &[u8]) -> Arc<CodeAnalysis> {
        self.get_or_analyze_with(code, keccak256)
    }

    /// Like [`get_or_analyze`](Self::get_or_analyze), with the code hash
    /// computed by `hash`
    pub fn get_or_analyze_with<F>(&self, code: &[u8], hash: F) -> Arc<CodeAnalysis>
    where
        F: FnOnce(&[u8]) -> H256,
    {
        let hash = hash(code);
        if let Some(found) = self.get(&hash) {
            return found;
        }
        self.put(hash, CodeAnalysis::analyze(code))
    }

    /// `(hits, lookups)` since creation
    pub fn hit_rate(&self) -> (u64, u64) {
        (
            self.hits.load(Ordering::Relaxed),
            self.lookups.load(Ordering::Relaxed),
        )
    }

    /// Number of cached analyses
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Whether nothing is cached
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for CodeAnalysisCache {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CodeAnalysisCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (hits, lookups) = self.hit_rate();
        f.debug_struct("CodeAnalysisCache")
            .field("len", &self.len())
            .field("hits", &hits)
            .field("lookups", &lookups)
            .finish()
    }
}
