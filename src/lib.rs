//! PrefixSpan sequential pattern mining.
//!
//! Mines patterns from a database of symbol sequences by growing prefixes one
//! symbol at a time over projected match sets:
//!
//! - [`PrefixSpan::frequent`] with gaps: every subsequence found in at least
//!   `minsup` sequences.
//! - [`PrefixSpan::frequent`] without gaps: contiguous substrings only.
//! - [`PrefixSpan::topk`]: the `k` best-supported patterns, found by
//!   branch-and-bound.
//!
//! ```
//! use prefixspan::PrefixSpan;
//!
//! let ps = PrefixSpan::new(vec![vec![1, 2, 3], vec![1, 2], vec![2, 3]]);
//!
//! let frequent = ps.frequent(2, true);
//! assert!(frequent.contains(&(2, vec![1, 2])));
//!
//! assert_eq!(ps.topk(1), vec![(3, vec![2])]);
//! ```
//!
//! Symbols only need `Clone + Eq + Hash`. Build with `--features python` for
//! the `prefixspan` Python extension module.

pub mod ps;

#[cfg(feature = "python")]
mod python;

pub use ps::{
    group_by_length, scan, Match, MiningConfig, PatternLevel, PrefixSpan, PrefixSpanError,
    Projection, Results, SequenceDb, TopkFrontier,
};
