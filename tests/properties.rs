// Property tests for frequent and top-k mining, checked against brute force
// on small databases.

use std::collections::HashMap;

use prefixspan::PrefixSpan;
use proptest::prelude::*;

const ALPHABET: u8 = 3;
const MAX_LEN: usize = 3;

fn database() -> impl Strategy<Value = Vec<Vec<u8>>> {
    prop::collection::vec(prop::collection::vec(0..ALPHABET, 0..7), 0..7)
}

fn is_subsequence(pattern: &[u8], sequence: &[u8]) -> bool {
    let mut rest = sequence.iter();
    pattern.iter().all(|p| rest.any(|s| s == p))
}

fn is_substring(pattern: &[u8], sequence: &[u8]) -> bool {
    sequence.windows(pattern.len()).any(|w| w == pattern)
}

/// Every pattern over the alphabet of length 1..=MAX_LEN.
fn all_patterns() -> Vec<Vec<u8>> {
    let mut patterns: Vec<Vec<u8>> = Vec::new();
    let mut level: Vec<Vec<u8>> = vec![Vec::new()];
    for _ in 0..MAX_LEN {
        level = level
            .iter()
            .flat_map(|p| {
                (0..ALPHABET).map(move |s| {
                    let mut next = p.clone();
                    next.push(s);
                    next
                })
            })
            .collect();
        patterns.extend(level.iter().cloned());
    }
    patterns
}

fn gap_support(db: &[Vec<u8>], pattern: &[u8]) -> usize {
    db.iter().filter(|seq| is_subsequence(pattern, seq)).count()
}

fn as_map(results: &[(usize, Vec<u8>)]) -> HashMap<Vec<u8>, usize> {
    results.iter().map(|(s, p)| (p.clone(), *s)).collect()
}

proptest! {
    #[test]
    fn gap_mining_matches_brute_force(db in database(), minsup in 1usize..4) {
        let ps = PrefixSpan::new(db.clone()).with_maxlen(MAX_LEN);

        let mined = as_map(&ps.frequent(minsup, true));

        let expected: HashMap<Vec<u8>, usize> = all_patterns()
            .into_iter()
            .map(|p| { let s = gap_support(&db, &p); (p, s) })
            .filter(|(_, s)| *s >= minsup)
            .collect();

        prop_assert_eq!(mined, expected);
    }

    #[test]
    fn frequent_respects_thresholds(
        db in database(),
        minsup in 0usize..4,
        minlen in 1usize..3,
        maxlen in 1usize..4,
        allow_gap in any::<bool>(),
    ) {
        let ps = PrefixSpan::new(db).with_minlen(minlen).with_maxlen(maxlen);

        for (support, pattern) in ps.frequent(minsup, allow_gap) {
            prop_assert!(support >= minsup);
            prop_assert!(pattern.len() >= minlen && pattern.len() <= maxlen);
        }
    }

    #[test]
    fn support_is_anti_monotone(db in database(), allow_gap in any::<bool>()) {
        let ps = PrefixSpan::new(db).with_maxlen(4);

        let results = ps.frequent(1, allow_gap);
        let supports = as_map(&results);

        for (support, pattern) in &results {
            if pattern.len() > 1 {
                let prefix = &pattern[..pattern.len() - 1];
                prop_assert!(supports[prefix] >= *support);
            }
        }
    }

    #[test]
    fn contiguous_patterns_are_substrings(db in database(), minsup in 1usize..4) {
        let ps = PrefixSpan::new(db.clone()).with_maxlen(4);

        for (support, pattern) in ps.frequent(minsup, false) {
            let containing = db.iter().filter(|seq| is_substring(&pattern, seq)).count();
            prop_assert!(containing >= support);
            prop_assert!(support >= minsup);
        }
    }

    #[test]
    fn topk_is_bounded_and_sound(db in database(), k in 0usize..8) {
        let ps = PrefixSpan::new(db).with_maxlen(MAX_LEN);

        let top = ps.topk(k);
        let all = ps.frequent(1, true);
        prop_assert!(top.len() <= k);
        prop_assert_eq!(top.len(), k.min(all.len()));

        // Reported supports are the true ones
        let supports = as_map(&all);
        for (support, pattern) in &top {
            prop_assert_eq!(supports.get(pattern), Some(support));
        }

        // No excluded pattern beats an included one
        let mut best: Vec<usize> = all.iter().map(|(s, _)| *s).collect();
        best.sort_unstable_by(|a, b| b.cmp(a));
        best.truncate(k);
        let found: Vec<usize> = top.iter().map(|(s, _)| *s).collect();
        prop_assert_eq!(found, best);
    }

    #[test]
    fn mining_is_idempotent(db in database(), minsup in 1usize..3, k in 0usize..5) {
        let ps = PrefixSpan::new(db);

        prop_assert_eq!(ps.frequent(minsup, true), ps.frequent(minsup, true));
        prop_assert_eq!(ps.frequent(minsup, false), ps.frequent(minsup, false));
        prop_assert_eq!(ps.frequent_par(minsup, true), ps.frequent(minsup, true));
        prop_assert_eq!(ps.topk(k), ps.topk(k));
    }
}
