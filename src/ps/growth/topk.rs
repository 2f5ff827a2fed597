use std::hash::Hash;

use tracing::trace;

use super::super::config::MiningConfig;
use super::super::database::SequenceDb;
use super::super::frontier::TopkFrontier;
use super::super::scan::{scan, Match};
use super::Results;

fn topk_recursive<T: Clone + Eq + Hash>(
    db: &SequenceDb<T>,
    config: &MiningConfig,
    pattern: &mut Vec<T>,
    matches: &[Match],
    frontier: &mut TopkFrontier<T>,
) {
    if config.accepts(pattern.len()) {
        frontier.offer(matches.len(), pattern.clone());
    }
    if config.is_terminal(pattern.len()) {
        return;
    }

    let candidates = scan(db, matches).into_sorted_by_support();
    trace!(depth = pattern.len(), candidates = candidates.len(), "projected");

    for (symbol, newmatches) in candidates {
        // Candidates come largest first and support never grows with the
        // pattern, so nothing after this one can beat the floor either.
        if frontier.is_full()
            && frontier
                .min_support()
                .is_some_and(|floor| newmatches.len() <= floor)
        {
            break;
        }

        pattern.push(symbol);
        topk_recursive(db, config, pattern, &newmatches, frontier);
        pattern.pop();
    }
}

/// Branch-and-bound search for the `k` patterns with the highest support.
pub fn topk_growth<T: Clone + Eq + Hash>(db: &SequenceDb<T>, config: &MiningConfig, k: usize) -> Results<T> {
    if k == 0 {
        return Vec::new();
    }

    let mut frontier = TopkFrontier::new(k);
    topk_recursive(db, config, &mut Vec::new(), &db.root_matches(), &mut frontier);
    frontier.into_sorted_vec()
}
