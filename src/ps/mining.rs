use std::hash::Hash;

use tracing::debug;

use super::config::MiningConfig;
use super::database::SequenceDb;
use super::growth::{frequent_growth, frequent_growth_parallel, topk_growth, Results};

/// PrefixSpan miner over an immutable sequence database.
///
/// Every mining call owns its own accumulator, so `&self` methods can run
/// concurrently on one instance.
#[derive(Debug, Clone)]
pub struct PrefixSpan<T> {
    db: SequenceDb<T>,
    config: MiningConfig,
}

impl<T> PrefixSpan<T> {
    pub fn new(db: impl Into<SequenceDb<T>>) -> Self {
        Self::with_config(db, MiningConfig::default())
    }

    pub fn with_config(db: impl Into<SequenceDb<T>>, config: MiningConfig) -> Self {
        Self { db: db.into(), config }
    }

    pub fn with_minlen(mut self, minlen: usize) -> Self {
        self.config = self.config.with_minlen(minlen);
        self
    }

    pub fn with_maxlen(mut self, maxlen: usize) -> Self {
        self.config = self.config.with_maxlen(maxlen);
        self
    }

    pub fn database(&self) -> &SequenceDb<T> {
        &self.db
    }

    pub fn config(&self) -> &MiningConfig {
        &self.config
    }
}

impl<T: Clone + Eq + Hash> PrefixSpan<T> {
    /// All patterns supported by at least `minsup` sequences.
    ///
    /// With `allow_gap` a pattern may occur as any subsequence; without it
    /// the pattern must occur as a literal substring, and the reported
    /// support counts only those occurrences. Results are in depth-first
    /// order of discovery.
    pub fn frequent(&self, minsup: usize, allow_gap: bool) -> Results<T> {
        debug!(
            minsup,
            allow_gap,
            sequences = self.db.len(),
            minlen = self.config.minlen(),
            maxlen = ?self.config.maxlen(),
            "mining frequent patterns"
        );

        let results = frequent_growth(&self.db, &self.config, minsup, allow_gap);

        debug!(patterns = results.len(), "frequent mining finished");
        results
    }

    /// The `k` patterns with the highest support, highest first.
    ///
    /// Among patterns of equal support the ones discovered first are kept.
    pub fn topk(&self, k: usize) -> Results<T> {
        debug!(
            k,
            sequences = self.db.len(),
            minlen = self.config.minlen(),
            maxlen = ?self.config.maxlen(),
            "mining top-k patterns"
        );

        let results = topk_growth(&self.db, &self.config, k);

        debug!(patterns = results.len(), "top-k mining finished");
        results
    }
}

impl<T: Clone + Eq + Hash + Send + Sync> PrefixSpan<T> {
    /// [`PrefixSpan::frequent`] with first-level branches mined in parallel.
    pub fn frequent_par(&self, minsup: usize, allow_gap: bool) -> Results<T> {
        debug!(
            minsup,
            allow_gap,
            sequences = self.db.len(),
            threads = rayon::current_num_threads(),
            "mining frequent patterns in parallel"
        );

        let results = frequent_growth_parallel(&self.db, &self.config, minsup, allow_gap);

        debug!(patterns = results.len(), "parallel frequent mining finished");
        results
    }
}
