//! Per-run memo of candidate signatures

use crate::algorithm::pool::CandidateId;
use crate::algorithm::signature::ColorAverage;
use crate::io::error::Result;
use std::collections::HashMap;

/// Memoization cache for candidate colour signatures
///
/// Keyed by candidate identity so a candidate referenced by many tiles is
/// only ever averaged once.
#[derive(Default)]
pub struct SignatureCache {
    signatures: HashMap<CandidateId, ColorAverage>,

    /// Cache performance statistics
    pub stats: CacheStats,
}

/// Performance metrics for cache effectiveness
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of cache hits
    pub hits: usize,
    /// Number of cache misses (signature computations)
    pub misses: usize,
}

impl SignatureCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Retrieve the cached signature or compute and store a new one
    ///
    /// # Errors
    ///
    /// Propagates the error from `compute_fn`; nothing is cached in that case
    pub fn get_or_compute<F>(&mut self, id: CandidateId, compute_fn: F) -> Result<ColorAverage>
    where
        F: FnOnce() -> Result<ColorAverage>,
    {
        use std::collections::hash_map::Entry;

        match self.signatures.entry(id) {
            Entry::Occupied(entry) => {
                self.stats.hits += 1;
                Ok(*entry.get())
            }
            Entry::Vacant(entry) => {
                self.stats.misses += 1;
                Ok(*entry.insert(compute_fn()?))
            }
        }
    }

    /// Cached signature without computing
    pub fn get(&self, id: CandidateId) -> Option<ColorAverage> {
        self.signatures.get(&id).copied()
    }

    /// Drop the signature of a candidate that left the pool
    pub fn evict(&mut self, id: CandidateId) -> Option<ColorAverage> {
        self.signatures.remove(&id)
    }

    /// Number of cached signatures
    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    /// Test if nothing is cached
    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }
}
