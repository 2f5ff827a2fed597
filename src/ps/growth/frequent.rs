use std::hash::Hash;

use rayon::prelude::*;
use tracing::trace;

use super::super::config::MiningConfig;
use super::super::database::SequenceDb;
use super::super::scan::{scan, Match};
use super::Results;

/// Depth-first frequent pattern growth over one database.
struct FrequentGrowth<'a, T> {
    db: &'a SequenceDb<T>,
    config: &'a MiningConfig,
    minsup: usize,
    allow_gap: bool,
}

impl<'a, T: Clone + Eq + Hash> FrequentGrowth<'a, T> {
    fn grow(&self, pattern: &mut Vec<T>, matches: &[Match], results: &mut Results<T>) {
        if self.config.accepts(pattern.len()) {
            results.push((matches.len(), pattern.clone()));
        }
        if self.config.is_terminal(pattern.len()) {
            return;
        }

        let projection = scan(self.db, matches);
        trace!(depth = pattern.len(), candidates = projection.len(), "projected");

        for (symbol, newmatches) in projection {
            if let Some(newmatches) = self.extension(pattern, &symbol, newmatches) {
                pattern.push(symbol);
                self.grow(pattern, &newmatches, results);
                pattern.pop();
            }
        }
    }

    /// Match set of `pattern + [symbol]` if it is frequent.
    ///
    /// Without gaps only matches where the extended pattern ends as a literal
    /// substring are kept.
    fn extension(&self, pattern: &[T], symbol: &T, newmatches: Vec<Match>) -> Option<Vec<Match>> {
        let newmatches = if self.allow_gap {
            newmatches
        } else {
            newmatches
                .into_iter()
                .filter(|m| self.is_contiguous(m, pattern, symbol))
                .collect()
        };

        (newmatches.len() >= self.minsup).then_some(newmatches)
    }

    fn is_contiguous(&self, m: &Match, prefix: &[T], symbol: &T) -> bool {
        let Some(start) = m.pos.checked_sub(prefix.len() + 1) else {
            return false;
        };

        match self.db.get(m.seq).and_then(|sequence| sequence.get(start..m.pos)) {
            Some(window) => window[..prefix.len()] == *prefix && window[prefix.len()] == *symbol,
            None => false,
        }
    }
}

pub fn frequent_growth<T: Clone + Eq + Hash>(
    db: &SequenceDb<T>,
    config: &MiningConfig,
    minsup: usize,
    allow_gap: bool,
) -> Results<T> {
    let growth = FrequentGrowth { db, config, minsup, allow_gap };

    let mut results = Vec::new();
    growth.grow(&mut Vec::new(), &db.root_matches(), &mut results);
    results
}

/// Same results as [`frequent_growth`], with each first-level branch mined on
/// the rayon pool.
pub fn frequent_growth_parallel<T: Clone + Eq + Hash + Send + Sync>(
    db: &SequenceDb<T>,
    config: &MiningConfig,
    minsup: usize,
    allow_gap: bool,
) -> Results<T> {
    let growth = FrequentGrowth { db, config, minsup, allow_gap };
    // The empty prefix is never reported (minlen >= 1), so the root only
    // seeds the branches.
    let branches: Vec<(T, Vec<Match>)> = scan(db, &db.root_matches()).into_iter().collect();

    let results: Vec<Results<T>> = branches
        .into_par_iter()
        .filter_map(|(symbol, newmatches)| {
            let newmatches = growth.extension(&[], &symbol, newmatches)?;
            let mut branch = Vec::new();
            growth.grow(&mut vec![symbol], &newmatches, &mut branch);
            Some(branch)
        })
        .collect();

    // Merge results sequentially
    let mut merged = Vec::new();
    for branch in results {
        merged.extend(branch);
    }
    merged
}
