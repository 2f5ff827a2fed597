use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

#[derive(Debug)]
struct Entry<T> {
    support: usize,
    seq: u64,
    pattern: Vec<T>,
}

// Higher support ranks higher; among equal supports the older entry does.
// Pattern content never takes part, so symbols need no ordering.
impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.support
            .cmp(&other.support)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Entry<T> {}

/// Bounded min-heap holding the `capacity` best `(support, pattern)` pairs seen so far.
#[derive(Debug)]
pub struct TopkFrontier<T> {
    heap: BinaryHeap<Reverse<Entry<T>>>,
    capacity: usize,
    next_seq: u64,
}

impl<T> TopkFrontier<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity.saturating_add(1)),
            capacity,
            next_seq: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.heap.len() >= self.capacity
    }

    /// Support of the weakest retained pattern.
    pub fn min_support(&self) -> Option<usize> {
        self.heap.peek().map(|Reverse(entry)| entry.support)
    }

    /// Insert a pattern, evicting the weakest entry on overflow.
    ///
    /// Returns whatever fell out of the frontier, which may be the offered
    /// pattern itself.
    pub fn offer(&mut self, support: usize, pattern: Vec<T>) -> Option<(usize, Vec<T>)> {
        if self.capacity == 0 {
            return Some((support, pattern));
        }

        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(Entry { support, seq, pattern }));

        if self.heap.len() > self.capacity {
            self.pop_min()
        } else {
            None
        }
    }

    pub fn pop_min(&mut self) -> Option<(usize, Vec<T>)> {
        self.heap
            .pop()
            .map(|Reverse(entry)| (entry.support, entry.pattern))
    }

    /// Retained patterns, highest support first.
    pub fn into_sorted_vec(self) -> Vec<(usize, Vec<T>)> {
        // Ascending in `Reverse` order is descending in entry order.
        self.heap
            .into_sorted_vec()
            .into_iter()
            .map(|Reverse(entry)| (entry.support, entry.pattern))
            .collect()
    }
}
