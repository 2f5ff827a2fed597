use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use super::database::SequenceDb;

/// Where a pattern prefix currently ends inside one database sequence.
///
/// `pos` counts the symbols of sequence `seq` already consumed by the prefix;
/// projection continues scanning from there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Match {
    pub seq: usize,
    pub pos: usize,
}

impl Match {
    pub fn new(seq: usize, pos: usize) -> Self {
        Self { seq, pos }
    }
}

/// Result of one projection step: next symbol -> new match set.
///
/// Symbols keep the order in which the scan first met them.
#[derive(Debug, Clone)]
pub struct Projection<T> {
    slots: HashMap<T, usize>,
    entries: Vec<(T, Vec<Match>)>,
}

impl<T: Clone + Eq + Hash> Projection<T> {
    fn new() -> Self {
        Self { slots: HashMap::new(), entries: Vec::new() }
    }

    fn record(&mut self, symbol: &T, m: Match) {
        match self.slots.get(symbol) {
            Some(&slot) => self.entries[slot].1.push(m),
            None => {
                self.slots.insert(symbol.clone(), self.entries.len());
                self.entries.push((symbol.clone(), vec![m]));
            }
        }
    }

    pub fn get(&self, symbol: &T) -> Option<&[Match]> {
        self.slots.get(symbol).map(|&slot| self.entries[slot].1.as_slice())
    }
}

impl<T> Projection<T> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&T, &[Match])> {
        self.entries.iter().map(|(symbol, matches)| (symbol, matches.as_slice()))
    }

    /// Entries ordered by match-set size, largest first. Ties keep scan order.
    pub fn into_sorted_by_support(self) -> Vec<(T, Vec<Match>)> {
        let mut entries = self.entries;
        entries.sort_by(|a, b| b.1.len().cmp(&a.1.len()));
        entries
    }
}

impl<T> IntoIterator for Projection<T> {
    type Item = (T, Vec<Match>);
    type IntoIter = std::vec::IntoIter<(T, Vec<Match>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Grow every match by one symbol.
///
/// For each match the rest of its sequence is scanned and only the first
/// occurrence of each symbol is recorded, so a sequence contributes at most
/// one match per symbol.
pub fn scan<T: Clone + Eq + Hash>(db: &SequenceDb<T>, matches: &[Match]) -> Projection<T> {
    let mut projection = Projection::new();
    let mut seen: HashSet<&T> = HashSet::new();

    for m in matches {
        let Some(sequence) = db.get(m.seq) else {
            continue;
        };

        seen.clear();
        for (j, symbol) in sequence.iter().enumerate().skip(m.pos) {
            if seen.insert(symbol) {
                projection.record(symbol, Match::new(m.seq, j + 1));
            }
        }
    }

    projection
}
